//! Command-line argument parsing.
//!
//! The surface is small enough that flags are matched by hand rather
//! than pulling in a parser.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI, starting at the given path instead of `/`
    RunAt(String),
    /// Run the TUI at the feed root (default)
    Run,
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--path <p>` starts the session at an arbitrary path; unknown paths
/// land on the not-found screen like any other navigation would.
///
/// # Examples
///
/// ```
/// use genz::cli::{parse_args, CliCommand};
///
/// let args = vec!["genz".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1); // Skip the program name
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--path" => {
                if let Some(path) = args.next() {
                    return CliCommand::RunAt(path);
                }
            }
            _ => {}
        }
    }
    CliCommand::Run
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_flag() {
        let args = vec!["genz".to_string(), "--version".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
    }

    #[test]
    fn test_parse_version_short_flag() {
        let args = vec!["genz".to_string(), "-V".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
    }

    #[test]
    fn test_parse_path_flag() {
        let args = vec![
            "genz".to_string(),
            "--path".to_string(),
            "/users".to_string(),
        ];
        assert_eq!(
            parse_args(args.into_iter()),
            CliCommand::RunAt("/users".to_string())
        );
    }

    #[test]
    fn test_parse_path_flag_without_value() {
        let args = vec!["genz".to_string(), "--path".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Run);
    }

    #[test]
    fn test_parse_no_args() {
        let args = vec!["genz".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Run);
    }

    #[test]
    fn test_parse_unknown_flag() {
        let args = vec!["genz".to_string(), "--unknown".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Run);
    }
}

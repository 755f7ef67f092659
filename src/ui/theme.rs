//! Color theme constants for the GenZ UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Link color - blue, the universal signal for "clickable"
pub const COLOR_LINK: Color = Color::Rgb(0, 122, 204);

/// Action buttons (Add Post, Save, Refresh) - bright green
pub const COLOR_BUTTON: Color = Color::LightGreen;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

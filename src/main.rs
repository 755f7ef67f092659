use genz::app::App;
use genz::cli::{parse_args, CliCommand};
use genz::error::GenzError;
use genz::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use genz::ui;
use genz::ui::interaction::is_plain_left_click;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind},
    terminal::enable_raw_mode,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let start_path = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("genz {}", VERSION);
            return Ok(());
        }
        CliCommand::RunAt(path) => path,
        CliCommand::Run => "/".to_string(),
    };

    color_eyre::install()?;

    // Ensure terminal cleanup on panic, and set up file logging while
    // stdout still behaves normally
    setup_panic_hook();
    genz::logging::init()?;

    // One runtime for the whole session; the event loop runs on it
    let runtime = tokio::runtime::Runtime::new()?;

    enable_raw_mode().map_err(GenzError::Terminal)?;
    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout).map_err(GenzError::Terminal)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::at_path(&start_path);
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async stream of terminal events
    let mut event_stream = EventStream::new();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps hover feedback and future animations smooth
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                            continue;
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.mark_dirty();

                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    app.quit();
                                    return Ok(());
                                }
                                _ => app.handle_key(key),
                            }
                        }
                        Event::Mouse(mouse_event) => {
                            match mouse_event.kind {
                                MouseEventKind::Down(_) => {
                                    // Only a plain primary-button click reaches the
                                    // hit areas; modified clicks stay with the
                                    // terminal (text selection etc.)
                                    if is_plain_left_click(&mouse_event) {
                                        if let Some(action) = app
                                            .hit_registry
                                            .hit_test(mouse_event.column, mouse_event.row)
                                        {
                                            ui::handle_click_action(app, action);
                                        }
                                    }
                                }
                                MouseEventKind::Moved => {
                                    if app
                                        .hit_registry
                                        .update_hover(mouse_event.column, mouse_event.row)
                                    {
                                        app.mark_dirty();
                                    }
                                }
                                _ => {}
                            }
                            continue;
                        }
                        _ => {
                            // Ignore other events (focus, paste, etc.)
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

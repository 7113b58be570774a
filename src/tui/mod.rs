//! Terminal User Interface Module
//!
//! Keyboard-driven job board. Built with Ratatui.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ Job Board   F2 Home   F3 Jobs   F4 Add Job                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─ Browse Jobs ───────────────────────────────────────────┐   │
//! │  │ Full-Time                                                │   │
//! │  │ Senior Rust Developer                                    │   │
//! │  │ We are seeking a talented developer to join our team...  │   │
//! │  │ [Space] Show More...                                     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │  [↑/↓] Select [Space] Show More/Less [Enter] Read More [F1] Help│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Toasts are drawn over the top-right corner of every page.

pub mod app;
pub mod event;
pub mod form;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, AppEvent, Page, View};
pub use event::{AppAction, EventHandler};

use crate::client::HttpJobsClient;
use crate::config::Config;
use crate::shell::{Navbar, Notifications};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use tracing::{error, info};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application starting at `initial_path`
pub async fn run(config: Config, initial_path: &str) -> anyhow::Result<()> {
    info!("Starting TUI against {}", config.api.base_url);

    let api = Arc::new(HttpJobsClient::from_config(&config.api)?);
    let notifications = Notifications::new(config.ui.toast_ttl(), config.ui.toast_max_visible);
    let tick_rate = config.ui.tick_rate();

    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Create application state
    let mut app = App::new(config, api, Navbar::default(), notifications);
    app.start(initial_path);

    // Create event handler
    let mut events = EventHandler::new(tick_rate);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut events).await;
    app.shutdown();

    // Restore terminal
    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    events: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        // Apply finished requests before drawing
        app.poll_events();

        terminal.draw(|frame| ui::render(frame, app))?;

        // Ticks arrive at a steady rate, so this never blocks for long
        match events.next().await {
            Some(action) => app.handle_action(action).await,
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI exited normally");
    Ok(())
}

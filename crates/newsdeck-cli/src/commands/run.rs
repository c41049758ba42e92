use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use newsdeck_core::{source, DeckConfig};
use newsdeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    theme::Theme,
    widgets::{DeckWidget, StatusBarWidget},
};

pub fn run(config: Arc<DeckConfig>, source_path: Option<PathBuf>, page: usize) -> Result<()> {
    let path = source_path.or_else(|| config.source()).ok_or_else(|| {
        anyhow!(
            "No tile source given.\nPass one with:\n  newsdeck run --source <file>\n\nOr set general.source in {}",
            DeckConfig::config_path().display()
        )
    })?;

    let tiles = source::load_tiles(&path)
        .with_context(|| format!("Failed to load tiles from {}", path.display()))?;
    tracing::info!("Loaded {} tiles from {}", tiles.len(), path.display());

    // Create app state
    let theme = Theme::from_config(&config.ui);
    let mut app = App::new(config.clone(), theme, tiles, page);

    let event_handler = EventHandler::with_frame_interval(
        config.ui.tick_rate_ms,
        config.animation.frame_interval(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Newsdeck"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            let now = Instant::now();

            // Main layout: deck + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            DeckWidget::render(frame, main_layout[0], app, now);
            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        // Use the animation frame rate while pages are moving
        let event = if app.needs_frame {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                // The next draw re-paginates for the new deck area
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

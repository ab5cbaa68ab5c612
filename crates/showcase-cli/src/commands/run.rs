use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use showcase_core::{AppConfig, PageSet, Roster};
use showcase_tui::{
    app::{App, STATUS_BAR_HEIGHT},
    event::EventHandler,
    load_theme,
    scroll::ScrollConfigExt,
    widgets::{NavPointsWidget, PageStackWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, roster: Roster, pages: PageSet) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Showcase"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(config.clone(), theme, roster, pages);

    let result = run_app(&mut terminal, &mut app);

    // Listeners go first, then the terminal is restored even if the loop failed
    app.unmount();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let event_handler = EventHandler::new(
        app.config.ui.tick_rate_ms,
        app.config.ui.scroll.frame_interval(),
    );

    let size = terminal.size()?;
    app.mount(size.height);
    info!(pages = app.pages.len(), height = size.height, "Showcase started");

    loop {
        app.tick();

        terminal.draw(|frame| {
            let area = frame.area();
            app.hits.clear();

            // Page viewport + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .split(area);

            PageStackWidget::render(frame, main_layout[0], app);
            if app.config.ui.show_nav_points {
                NavPointsWidget::render(frame, main_layout[0], app);
            }
            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        // Poll at the frame rate while a transition is in flight
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            app.handle_event(event);
        }

        if app.should_quit {
            info!("Showcase exiting");
            break;
        }
    }

    Ok(())
}

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use ratatui_image::picker::Picker;

use clockface::persistence;
use clockface::persistence::config::load_config;
use clockface::tui::app::App;
use clockface::tui::event::{poll_event, AppEvent};

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = load_config();

    // Query terminal for image protocol support BEFORE entering alternate screen
    let picker = Picker::from_query_stdio().ok();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(picker, config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Log to a file in the data directory; the terminal belongs to the UI.
fn init_logging() {
    let Some(path) = persistence::data_dir().map(|dir| dir.join("clockface.log")) else {
        return;
    };
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return,
    };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("CLOCKFACE_LOG", "warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> anyhow::Result<()> {
    let mut dirty = true;

    loop {
        if dirty || app.redraw_due(Instant::now()) {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if let Some(event) = poll_event(app.poll_timeout(Instant::now())) {
            match event {
                AppEvent::Key(key) => {
                    dirty |= app.handle_key(key);
                }
                AppEvent::Resize(_, _) => {
                    dirty = true;
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

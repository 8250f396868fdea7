use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::soundscape::{self, RodioBackend};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();
    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("pomotune: logging disabled: {e}");
    }
    settings::report_config_problem(config_problem);

    let backend = match RodioBackend::open(&settings.audio) {
        Ok(b) => b,
        Err(e) => {
            // The timer still works; soundscapes just stay silent.
            warn!(error = %e, "audio output unavailable");
            RodioBackend::silent(&settings.audio)
        }
    };
    let audio = backend.has_output();
    let mut app = App::new(settings.timer.phase_config(), backend);
    info!(
        audio,
        work_minutes = settings.timer.work_minutes,
        break_minutes = settings.timer.break_minutes,
        "session started"
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    let playing: Vec<&str> = app
        .sounds
        .active_ids()
        .into_iter()
        .filter_map(soundscape::find)
        .map(|t| t.name)
        .collect();
    info!(soundscapes = ?playing, "session ended");
    app.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    run_result
}

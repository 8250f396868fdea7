use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Focus};
use crate::config;
use crate::soundscape::PlaybackBackend;
use crate::ui;

/// Longest we block waiting for input, so the screen keeps refreshing.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Main terminal event loop: draws, handles input and applies due ticks.
/// Returns `Ok(())` when the user quits.
pub fn run<B: PlaybackBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let view = app.view();
        terminal.draw(|f| ui::draw(f, &view, &settings.ui))?;

        // Wake up in time for the next tick even if no key arrives.
        let timeout = app
            .ticker
            .time_until_due(Instant::now())
            .map_or(INPUT_POLL, |d| d.min(INPUT_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, app) {
                        break;
                    }
                }
                Event::Paste(text) => app.paste(&text),
                _ => {}
            }
        }

        app.poll_ticks(Instant::now());
    }

    Ok(())
}

/// Apply one key press to `app`. Returns `true` when the user asked to quit.
pub(super) fn handle_key_event<B: PlaybackBackend>(key: KeyEvent, app: &mut App<B>) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc if app.focus == Focus::Sounds => return true,
        KeyCode::Esc | KeyCode::Enter if app.focus != Focus::Sounds => {
            app.set_focus(Focus::Sounds);
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_timer(Instant::now()),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Tab => app.cycle_focus(),
        _ => match app.focus {
            Focus::Sounds => handle_sounds_key(key.code, app),
            Focus::Work | Focus::Break => handle_field_key(key.code, app),
        },
    }

    false
}

fn handle_sounds_key<B: PlaybackBackend>(code: KeyCode, app: &mut App<B>) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_sound(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_sound(),
        KeyCode::Enter | KeyCode::Char('t') => app.toggle_selected_sound(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(n) = c.to_digit(10) {
                app.toggle_sound(n as usize - 1);
            }
        }
        _ => {}
    }
}

fn handle_field_key<B: PlaybackBackend>(code: KeyCode, app: &mut App<B>) {
    match code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(d) = c.to_digit(10) {
                app.push_digit(d);
            }
        }
        KeyCode::Backspace | KeyCode::Delete => app.pop_digit(),
        KeyCode::Char('+') | KeyCode::Up => app.adjust(1),
        KeyCode::Char('-') | KeyCode::Down => app.adjust(-1),
        _ => {}
    }
}

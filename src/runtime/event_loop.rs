use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::library::import_paths;
use crate::media::MediaElement;
use crate::player::Player;
use crate::ui;

/// Main terminal event loop: handles input and redraws. The playhead is
/// polled once per iteration (the draw reads it), which stands in for the
/// element's time-update callback. Returns `Ok(())` when shutdown is
/// requested.
pub fn run<M: MediaElement>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<M>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.clamp_selected(player.tracks().len());
        terminal.draw(|f| ui::draw(f, app, player, &settings.ui))?;

        if event::poll(Duration::from_millis(settings.controls.poll_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Handle one key press. Returns `true` when the app should quit.
fn handle_key_event<M: MediaElement>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<M>,
) -> bool {
    if app.prompt_open() {
        match key.code {
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.pop_prompt_char(),
            KeyCode::Enter => submit_prompt(settings, app, player),
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.push_prompt_char(c);
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('o') => {
            app.clear_status();
            app.open_prompt();
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(player.tracks().len()),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(player.tracks().len()),
        KeyCode::Enter => {
            if player.has_tracks() {
                player.set_current(app.selected);
                player.play();
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => player.toggle(),
        KeyCode::Char('h') => player.previous(),
        KeyCode::Char('l') => player.next(),
        KeyCode::Char('H') | KeyCode::Left => {
            player.seek_to(player.progress() - settings.controls.seek_step_percent);
        }
        KeyCode::Char('L') | KeyCode::Right => {
            player.seek_to(player.progress() + settings.controls.seek_step_percent);
        }
        _ => {}
    }

    false
}

/// Import whatever path the prompt holds and report the outcome.
fn submit_prompt<M: MediaElement>(
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<M>,
) {
    let Some(input) = app.take_prompt() else {
        return;
    };

    let input = input.trim();
    if input.is_empty() {
        return;
    }

    let path = PathBuf::from(input);
    if !path.exists() {
        app.set_status(format!("no such path: {input}"));
        return;
    }

    let tracks = import_paths(std::slice::from_ref(&path), &settings.library);
    if tracks.is_empty() {
        app.set_status(format!("no audio files found at {input}"));
    } else {
        app.set_status(format!("loaded {} track(s)", tracks.len()));
        player.add_tracks(tracks);
    }
}

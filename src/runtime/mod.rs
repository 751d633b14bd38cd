use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::library::import_paths;
use crate::media::RodioMedia;
use crate::player::Player;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let media = RodioMedia::new()?;
    let mut player = Player::new(media);
    let mut app = App::new();

    // CLI arguments are the initial batch of files/directories to load.
    let inputs: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if !inputs.is_empty() {
        let tracks = import_paths(&inputs, &settings.library);
        app.set_status(format!("loaded {} track(s)", tracks.len()));
        player.add_tracks(tracks);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

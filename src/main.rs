mod app;
mod config;
mod library;
mod media;
mod player;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}

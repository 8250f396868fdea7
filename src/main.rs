mod app;
mod config;
mod error;
mod runtime;
mod soundscape;
mod timer;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}

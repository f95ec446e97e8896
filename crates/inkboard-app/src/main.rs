//! Main application entry point.
//!
//! Usage: `inkboard [BOARD.json]`. An existing board is loaded, a demo stroke
//! is drawn on top of it and the result is written back (or to stdout).

use std::io::Write;
use std::path::PathBuf;

use inkboard_app::{AppConfig, AppError, Host, LogPainter, demo_gesture};

fn main() -> Result<(), AppError> {
    env_logger::init();
    log::info!("Starting Inkboard");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::default();
    let surface = config.surface;
    let mut host = Host::new(config);

    if let Some(path) = path.as_ref().filter(|p| p.exists()) {
        host.open_file(path)?;
    }

    host.replay_gesture(&demo_gesture(surface));
    log::info!("Published {} board snapshots", host.published);

    let mut painter = LogPainter::default();
    host.frame(&mut painter)?;

    match path {
        Some(path) => host.save_file(&path)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&host.save()?)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

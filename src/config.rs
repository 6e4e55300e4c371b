use dv::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr so stdout only ever carries deposit responses. `RUST_LOG` overrides the level.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

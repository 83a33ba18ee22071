// src/util/log.rs

//! Logger setup for a full-screen terminal app.
//!
//! Events go to stderr, which shares the screen with the UI, so the level
//! comes from config and defaults to `warn`.
use color_eyre::eyre::eyre;
use tracing::level_filters::LevelFilter;

/// Install the global `tracing` subscriber.
pub fn init(level: LevelFilter) -> color_eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("Failed to initialize logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_initializes_once() {
        // Other tests may have installed a subscriber first; only the second
        // call in this test is guaranteed to fail.
        let _ = init(LevelFilter::OFF);
        assert!(init(LevelFilter::OFF).is_err());
    }
}

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod ui;
pub mod util;

pub use config::UiConfig;
pub use error::{Result, SamaritanError};

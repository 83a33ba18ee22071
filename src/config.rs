// src/config.rs

//! Display settings. Defaults are compiled in from `config/samaritan.yml`.
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::{Result, SamaritanError};
use crate::ui::color::Rgb;
use crate::ui::geometry::LayoutBox;
use crate::ui::raster::Viewport;
use crate::ui::style::{INK, PAPER, PROMPT_RED};

const EMBEDDED_CONFIG: &str = include_str!("../config/samaritan.yml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    /// Requested window size in logical units.
    pub window_width: u32,
    pub window_height: u32,
    pub caption: String,
    pub base_color: Rgb,
    pub background_color: Rgb,
    pub text_color: Rgb,
    pub blink_interval_ms: u64,
    pub cell_width: u16,
    pub cell_height: u16,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Samaritan".to_string(),
            window_width: 800,
            window_height: 600,
            caption: "What are your commands?".to_string(),
            base_color: PROMPT_RED,
            background_color: PAPER,
            text_color: INK,
            blink_interval_ms: 30,
            cell_width: 10,
            cell_height: 20,
            log_level: "warn".to_string(),
        }
    }
}

impl UiConfig {
    /// The compiled-in configuration.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(EMBEDDED_CONFIG)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: UiConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_width == 0 {
            return Err(SamaritanError::invalid_config("cell_width", "must be at least 1"));
        }
        if self.cell_height == 0 {
            return Err(SamaritanError::invalid_config("cell_height", "must be at least 1"));
        }
        if self.blink_interval_ms == 0 {
            return Err(SamaritanError::invalid_config("blink_interval_ms", "must be at least 1"));
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|e| SamaritanError::invalid_config("log_level", format!("{}", e)))
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    pub fn window(&self) -> LayoutBox {
        LayoutBox::new(self.window_width, self.window_height)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.cell_width, self.cell_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_matches_default() {
        assert_eq!(UiConfig::embedded().unwrap(), UiConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = UiConfig::from_yaml_str("caption: Hello\nbase_color: \"#00ff00\"\n").unwrap();
        assert_eq!(config.caption, "Hello");
        assert_eq!(config.base_color, Rgb::new(0, 255, 0));
        assert_eq!(config.blink_interval(), Duration::from_millis(30));
    }

    #[test]
    fn test_round_trip() {
        let yaml = serde_yaml::to_string(&UiConfig::default()).unwrap();
        assert!(yaml.contains("#cc0000"));
        assert_eq!(UiConfig::from_yaml_str(&yaml).unwrap(), UiConfig::default());
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = UiConfig::from_yaml_str("text_color: red\n").unwrap_err();
        assert!(matches!(err, SamaritanError::YamlError(_)));
    }

    #[test]
    fn test_rejects_zero_cell() {
        let err = UiConfig::from_yaml_str("cell_height: 0\n").unwrap_err();
        match err {
            SamaritanError::InvalidConfig { field, .. } => assert_eq!(field, "cell_height"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = UiConfig {
            log_level: "loud".to_string(),
            ..UiConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(UiConfig::default().log_level_filter().unwrap(), LevelFilter::WARN);
    }
}

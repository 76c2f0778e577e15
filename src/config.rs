//! App Configuration
//!
//! Tunables bundled at build time from `config/links.json`. Missing keys fall
//! back to defaults; a file that does not parse falls back entirely.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use leptos_dragdrop::{IndicatorConfig, Point};

const BUNDLED: &str = include_str!("../config/links.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub indicator: IndicatorConfig,
    /// How long the pointer must rest on an insertion point before "+" shows
    pub hover_delay_ms: u64,
    /// The ghost card is drawn at the pointer minus this offset
    pub ghost_offset: Point,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            indicator: IndicatorConfig::default(),
            hover_delay_ms: 150,
            ghost_offset: Point::new(150.0, 30.0),
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Bundled config, or defaults plus the error that forced them
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_json(BUNDLED) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }
}

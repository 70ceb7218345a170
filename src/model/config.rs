use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides, hex strings like "#FF4444" (see tui/theme.rs
    /// for the recognized keys)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

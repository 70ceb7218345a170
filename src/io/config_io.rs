use std::fs;
use std::io;
use std::path::Path;

use crate::model::config::Config;

/// Read config.toml from the store directory. A missing file yields the
/// defaults; a file that fails to parse also yields the defaults, with a
/// warning — a bad config must not keep the app from starting.
pub fn read_config(store_dir: &Path) -> Config {
    let path = store_dir.join("config.toml");
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            eprintln!("warning: could not read {}: {}", path.display(), e);
            return Config::default();
        }
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: could not parse {}: {}", path.display(), e);
            Config::default()
        }
    }
}

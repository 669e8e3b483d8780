//! Decoder configuration.
//!
//! Mirrors `libchinese_core::Config`'s TOML load/save helpers: a small,
//! serde-derived struct with a `Default` impl and file/string round trips.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for a `g2p` call. The core decoder function itself only takes a
/// bare `beam_width: usize`; `Config` is a convenience for callers (tests,
/// the `g2p-tools` binary) that want a single place to keep the default and
/// load it from a file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Beam width: capacity of every non-terminal beam.
    pub beam_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { beam_width: 100 }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_beam_width_matches_spec_example() {
        assert_eq!(Config::default().beam_width, 100);
    }

    #[test]
    fn round_trips_through_toml_string() {
        let cfg = Config { beam_width: 42 };
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back = Config::from_toml_str(&s).unwrap();
        assert_eq!(cfg, back);
    }
}

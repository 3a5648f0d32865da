use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::gravity::GravityTuning;
use crate::engine::versus::MatchConfig;

/// User configuration, persisted as JSON under the platform config dir.
/// Unknown or missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial auto-shift delay.
    pub das_delay_ms: u64,
    /// Auto-repeat rate; 0 = instant to the wall.
    pub arr_delay_ms: u64,
    /// Soft drop repeat rate; 0 = instant to the floor.
    pub sd_arr_delay_ms: u64,
    /// Frames an attack stays cancellable before it becomes insertable.
    pub garbage_delay_frames: f64,
    pub gravity: GravityTuning,
    /// Fixed seed for reproducible duels; absent = random per match.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            das_delay_ms: 133,
            arr_delay_ms: 0,
            sd_arr_delay_ms: 0,
            garbage_delay_frames: 20.0,
            gravity: GravityTuning::default(),
            seed: None,
        }
    }
}

impl Config {
    fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("stackduel").join("config.json"))
    }

    /// Load from disk, or defaults when missing or unreadable.
    pub fn load() -> Self {
        let path = match Self::file_path() {
            Some(p) => p,
            None => return Self::default(),
        };
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Best-effort save: temp file then rename.
    pub fn save(&self) {
        let path = match Self::file_path() {
            Some(p) => p,
            None => return,
        };
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        let temp_path = path.with_extension("tmp");
        if let Ok(data) = serde_json::to_string_pretty(self) {
            if fs::write(&temp_path, &data).is_ok() {
                let _ = fs::rename(&temp_path, &path);
            }
        }
    }

    /// Engine-facing slice of the configuration.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            gravity: self.gravity,
            garbage_delay_frames: self.garbage_delay_frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.das_delay_ms, 133);
        assert_eq!(back.garbage_delay_frames, 20.0);
        assert_eq!(back.gravity, GravityTuning::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"das_delay_ms": 90}"#).unwrap();
        assert_eq!(config.das_delay_ms, 90);
        assert_eq!(config.arr_delay_ms, 0);
        assert!(config.seed.is_none());
    }
}

//! Window settings shared by all exercises.
//!
//! Settings live in `settings.json` inside the per-user config directory.
//! A missing file falls back to the defaults, a malformed one is an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

impl Settings {
    /// Loads settings from the per-user config directory.
    pub fn load() -> Result<Self, String> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(Self::default());
        };
        let path = dir.join("lgl").join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::from_json(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings = Settings::from_json(r#"{ "width": 1920, "height": 1080 }"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                width: 1920,
                height: 1080,
                fullscreen: false,
                vsync: true,
            }
        );
    }

    #[test]
    fn test_empty_object_is_the_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ \"width\": ").is_err());
        assert!(Settings::from_json("[]").is_err());
    }
}

//! Game settings and preferences
//!
//! Loaded once at startup from LocalStorage on the web. Settings only
//! configure the game; nothing about a running game is ever written back.

use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, TuningError};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physics and layout
    pub tuning: Tuning,

    // === Colors (any CSS color string) ===
    pub ball_color: String,
    pub platform_color: String,
    pub tower_color: String,
    /// Fill behind everything; `None` clears to transparent
    pub background_color: Option<String>,

    // === Gameplay ===
    /// Start with the autopilot locking platforms
    pub idle_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),

            ball_color: "#FF0000".to_string(),
            platform_color: "#0000FF".to_string(),
            tower_color: "#0000FF".to_string(),
            background_color: None,

            idle_mode: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "stack_drop_settings";

    /// Parse settings JSON and validate the embedded tuning
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_colors() {
        let settings = Settings::default();
        assert_eq!(settings.ball_color, "#FF0000");
        assert_eq!(settings.platform_color, "#0000FF");
        assert_eq!(settings.tower_color, "#0000FF");
        assert!(settings.background_color.is_none());
        assert!(!settings.idle_mode);
    }

    #[test]
    fn test_from_json_nested_tuning() {
        let settings = Settings::from_json(
            r##"{ "ball_color": "#00FF00", "idle_mode": true, "tuning": { "stack_step": 40.0 } }"##,
        )
        .unwrap();
        assert_eq!(settings.ball_color, "#00FF00");
        assert!(settings.idle_mode);
        assert_eq!(settings.tuning.stack_step, 40.0);
        assert_eq!(settings.tuning.gravity, Tuning::default().gravity);
    }

    #[test]
    fn test_from_json_rejects_invalid_tuning() {
        let result = Settings::from_json(r#"{ "tuning": { "bounce_damping": 0.0 } }"#);
        assert_eq!(result, Err(TuningError::DampingOutOfRange(0.0)));

        let result = Settings::from_json(r#"{ "tuning": { "ball_spawn_dy": 1e39 } }"#);
        assert!(matches!(
            result,
            Err(TuningError::NotFinite { field: "ball_spawn_dy", .. })
        ));
    }

    #[test]
    fn test_load_native_defaults() {
        assert_eq!(Settings::load(), Settings::default());
    }
}

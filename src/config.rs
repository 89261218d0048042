//! Game tuning constants, overridable from JSON with the `serde_json` feature.

use log::LevelFilter;

/// Tunables for the game loop, layout and level limits.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Edge length of a drawn tile in pixels.
    pub tile_size: u32,
    /// Seconds spent on the loading screen before the first level starts.
    pub loading_seconds: f32,
    /// Largest accepted level width or height.
    pub max_grid: usize,
    /// Move events buffered per update batch.
    pub event_capacity: usize,
    pub button_width: i32,
    pub button_height: i32,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 800,
            tile_size: 64,
            loading_seconds: 0.2,
            max_grid: 100,
            event_capacity: 100,
            button_width: 140,
            button_height: 45,
            log_level: LevelFilter::Info,
        }
    }
}

#[cfg(feature = "serde_json")]
impl GameConfig {
    /// Parse a partial JSON object; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_layout() {
        let cfg = GameConfig::default();
        assert_eq!((cfg.canvas_width, cfg.canvas_height), (800, 800));
        assert_eq!((cfg.button_width, cfg.button_height), (140, 45));
        assert!((cfg.loading_seconds - 0.2).abs() < f32::EPSILON);
        assert_eq!(cfg.max_grid, 100);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_overrides_only_given_keys() {
        let cfg = GameConfig::from_json(r#"{"tile_size": 32, "log_level": "DEBUG"}"#).unwrap();
        assert_eq!(cfg.tile_size, 32);
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert_eq!(cfg.canvas_width, 800);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_rejects_unknown_keys() {
        assert!(GameConfig::from_json(r#"{"tile_sise": 32}"#).is_err());
    }
}

use crate::game::Rules;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level persisted config. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Author line shown in the header.
    pub author: String,
    #[serde(rename = "tickMs")]
    pub tick_ms: u64,
    #[serde(rename = "dropPx")]
    pub drop_px: f32,
    #[serde(rename = "settleMs")]
    pub settle_ms: u64,
    #[serde(rename = "iconPx")]
    pub icon_px: f32,
    #[serde(rename = "rolePx")]
    pub role_px: f32,
    #[serde(rename = "catchPoints")]
    pub catch_points: u32,
    #[serde(rename = "dragStepPx")]
    pub drag_step_px: f32,
    #[serde(rename = "cellWidthPx")]
    pub cell_width_px: f32,
    #[serde(rename = "cellHeightPx")]
    pub cell_height_px: f32,
    /// Fixed RNG seed; random icon order when absent.
    pub seed: Option<u64>,
    pub sounds: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            author: "Author: player".into(),
            tick_ms: 100,
            drop_px: 20.0,
            settle_ms: 500,
            icon_px: 60.0,
            role_px: 120.0,
            catch_points: 10,
            drag_step_px: 20.0,
            cell_width_px: 10.0,
            cell_height_px: 20.0,
            seed: None,
            sounds: true,
        }
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Rejects values the update cycle can't run with: geometry and drop
    /// speed must be positive and finite, and a catch must score.
    pub fn validate(&self) -> Result<(), String> {
        let lengths = [
            ("dropPx", self.drop_px),
            ("iconPx", self.icon_px),
            ("rolePx", self.role_px),
            ("dragStepPx", self.drag_step_px),
            ("cellWidthPx", self.cell_width_px),
            ("cellHeightPx", self.cell_height_px),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        if self.catch_points == 0 {
            return Err("catchPoints must be at least 1".into());
        }
        Ok(())
    }

    /// Update-cycle constants, with the settle delay rounded up to whole ticks.
    pub fn rules(&self) -> Rules {
        let tick_ms = self.tick_ms.max(1);
        let settle_ticks = self.settle_ms.div_ceil(tick_ms).max(1);
        Rules {
            drop_px: self.drop_px,
            icon_px: self.icon_px,
            role_px: self.role_px,
            catch_points: self.catch_points,
            settle_ticks: u32::try_from(settle_ticks).unwrap_or(u32::MAX),
        }
    }
}

/// Active modal overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_match_game_defaults() {
        assert_eq!(GameConfig::default().rules(), Rules::default());
    }

    #[test]
    fn test_settle_delay_rounds_up_to_ticks() {
        let cfg = GameConfig {
            tick_ms: 100,
            settle_ms: 450,
            ..GameConfig::default()
        };
        assert_eq!(cfg.rules().settle_ticks, 5);

        let cfg = GameConfig {
            settle_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.rules().settle_ticks, 1);
    }

    #[test]
    fn test_zero_tick_is_floored() {
        let cfg = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_non_positive_drop_rejected() {
        let cfg: GameConfig = serde_json::from_str(r#"{ "dropPx": -20 }"#).unwrap();
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("dropPx"));

        let cfg: GameConfig = serde_json::from_str(r#"{ "dropPx": 0 }"#).unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_catch_points_rejected() {
        let cfg: GameConfig = serde_json::from_str(r#"{ "catchPoints": 0 }"#).unwrap();
        assert!(cfg.validate().unwrap_err().contains("catchPoints"));
    }

    #[test]
    fn test_non_positive_sizes_rejected() {
        for json in [r#"{ "iconPx": 0 }"#, r#"{ "rolePx": -1 }"#, r#"{ "cellWidthPx": 0 }"#] {
            let cfg: GameConfig = serde_json::from_str(json).unwrap();
            assert!(cfg.validate().is_err(), "accepted {json}");
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: GameConfig =
            serde_json::from_str(r#"{ "author": "Author: Lin", "dropPx": 30 }"#).unwrap();
        assert_eq!(cfg.author, "Author: Lin");
        assert_eq!(cfg.drop_px, 30.0);
        assert_eq!(cfg.tick_ms, 100);
        assert!(cfg.sounds);
        assert_eq!(cfg.seed, None);
    }
}

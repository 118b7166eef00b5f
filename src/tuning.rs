//! Data-driven game balance
//!
//! Every knob defaults to the classic Bear Snake values. Partial JSON
//! overrides are accepted; missing fields keep their defaults. The grid size
//! is not tunable and lives in [`crate::consts`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Balance values consulted by the simulation every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scoring ===
    /// Points for regular food
    pub food_score: u64,
    /// Points for bonus food
    pub bonus_score: u64,
    /// Points granted by a ScoreBonus power-up
    pub power_up_score: u64,

    // === Bonus food ===
    /// Chance to spawn bonus food when regular food is eaten
    pub bonus_chance: f64,
    /// Ticks before uneaten bonus food disappears
    pub bonus_lifetime_ticks: u32,

    // === Power-ups ===
    /// Chance per tick to spawn a power-up when none is active
    pub power_up_chance: f64,
    /// Ticks before an uncollected power-up disappears
    pub power_up_lifetime_ticks: u32,
    /// Slow-motion duration after collecting a Slow power-up
    pub slow_duration_ticks: u32,
    /// Interval multiplier while slow-motion is active (at least 1.0)
    pub slow_multiplier: f64,

    // === Speed ===
    /// Interval at score 0
    pub base_interval_ms: u32,
    /// Fastest allowed interval
    pub min_interval_ms: u32,
    /// Interval reduction per score step
    pub interval_step_ms: u32,
    /// Points per speed step
    pub score_per_step: u64,

    // === Placement ===
    /// Random draws before falling back to scanning the board for free cells
    pub placement_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            food_score: 10,
            bonus_score: 50,
            power_up_score: 25,

            bonus_chance: 0.2,
            bonus_lifetime_ticks: 50,

            power_up_chance: 0.1,
            power_up_lifetime_ticks: 200,
            slow_duration_ticks: 100,
            slow_multiplier: 1.5,

            base_interval_ms: 150,
            min_interval_ms: 80,
            interval_step_ms: 10,
            score_per_step: 50,

            placement_attempts: 1000,
        }
    }
}

/// Invalid balance configuration
#[derive(Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    Parse(serde_json::Error),
    /// A probability lies outside `[0, 1]`
    Probability { field: &'static str, value: f64 },
    /// A value that must be positive is zero (or negative)
    NotPositive { field: &'static str },
    /// Floor interval is slower than the base interval
    FloorAboveBase { min: u32, base: u32 },
    /// Slow-motion multiplier would speed the game up
    SlowMultiplierBelowOne { value: f64 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {}", e),
            TuningError::Probability { field, value } => {
                write!(f, "{} must be within [0, 1], got {}", field, value)
            }
            TuningError::NotPositive { field } => write!(f, "{} must be positive", field),
            TuningError::FloorAboveBase { min, base } => write!(
                f,
                "min_interval_ms ({}) exceeds base_interval_ms ({})",
                min, base
            ),
            TuningError::SlowMultiplierBelowOne { value } => {
                write!(f, "slow_multiplier must be at least 1.0, got {}", value)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse (possibly partial) JSON overrides and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in [
            ("bonus_chance", self.bonus_chance),
            ("power_up_chance", self.power_up_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::Probability { field, value });
            }
        }

        for (field, value) in [
            ("bonus_lifetime_ticks", self.bonus_lifetime_ticks),
            ("power_up_lifetime_ticks", self.power_up_lifetime_ticks),
            ("slow_duration_ticks", self.slow_duration_ticks),
            ("base_interval_ms", self.base_interval_ms),
            ("min_interval_ms", self.min_interval_ms),
            ("placement_attempts", self.placement_attempts),
        ] {
            if value == 0 {
                return Err(TuningError::NotPositive { field });
            }
        }
        if self.score_per_step == 0 {
            return Err(TuningError::NotPositive {
                field: "score_per_step",
            });
        }
        // NaN fails this check too
        if !(self.slow_multiplier >= 1.0) {
            return Err(TuningError::SlowMultiplierBelowOne {
                value: self.slow_multiplier,
            });
        }

        if self.min_interval_ms > self.base_interval_ms {
            return Err(TuningError::FloorAboveBase {
                min: self.min_interval_ms,
                base: self.base_interval_ms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let t = Tuning::default();
        assert!(t.validate().is_ok());
        assert_eq!(t.food_score, 10);
        assert_eq!(t.bonus_lifetime_ticks, 50);
        assert_eq!(t.power_up_lifetime_ticks, 200);
        assert_eq!(t.base_interval_ms, 150);
        assert_eq!(t.min_interval_ms, 80);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "food_score": 20, "bonus_chance": 0.5 }"#).unwrap();
        assert_eq!(t.food_score, 20);
        assert_eq!(t.bonus_chance, 0.5);
        assert_eq!(t.bonus_score, 50);
        assert_eq!(t.slow_duration_ticks, 100);
    }

    #[test]
    fn test_json_roundtrip() {
        let t = Tuning::default();
        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "power_up_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Probability {
                field: "power_up_chance",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_lifetime() {
        let t = Tuning {
            bonus_lifetime_ticks: 0,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(TuningError::NotPositive {
                field: "bonus_lifetime_ticks"
            })
        ));
    }

    #[test]
    fn test_rejects_floor_above_base() {
        let t = Tuning {
            min_interval_ms: 200,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(TuningError::FloorAboveBase { .. })));
    }

    #[test]
    fn test_rejects_speedup_multiplier() {
        let t = Tuning {
            slow_multiplier: 0.001,
            ..Default::default()
        };
        let err = t.validate().unwrap_err();
        assert!(matches!(err, TuningError::SlowMultiplierBelowOne { .. }));
        assert!(err.to_string().starts_with("slow_multiplier must be at least 1.0"));

        let nan = Tuning {
            slow_multiplier: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
        let unchanged = Tuning {
            slow_multiplier: 1.0,
            ..Default::default()
        };
        assert!(unchanged.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("invalid tuning JSON"));
    }
}

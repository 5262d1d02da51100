//! Streak scoring policy
//!
//! Runs of `critical_size` or more are about to complete a line and get a
//! flat score above every partial run. Partial runs scale linearly with
//! their length, so a two-disc run always beats a one-disc run of the same
//! owner class. Streaks owned by the priority disc use their own pair of
//! weights.

use serde::{Deserialize, Serialize};

use super::Streak;
use crate::board::Disc;
use crate::error::{Error, Result};

/// Default score weights
pub struct Thresholds;

impl Thresholds {
    /// Length from which a run counts as critical
    pub const CRITICAL_SIZE: usize = 3;
    /// Critical run of the priority disc
    pub const PRIORITY_CRITICAL: f64 = 2.0;
    /// Per-disc weight of a partial priority run
    pub const PRIORITY_SCALE: f64 = 0.33;
    /// Critical run of any other owner
    pub const OTHER_CRITICAL: f64 = 1.6;
    /// Per-disc weight of a partial run of any other owner
    pub const OTHER_SCALE: f64 = 0.35;
}

/// Tunable scoring parameters.
///
/// Only `priority` is required when deserializing; the weights fall back to
/// [`Thresholds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Disc whose streaks are scored with the priority weights
    pub priority: Disc,
    #[serde(default = "default_critical_size")]
    pub critical_size: usize,
    #[serde(default = "default_priority_critical")]
    pub priority_critical: f64,
    #[serde(default = "default_priority_scale")]
    pub priority_scale: f64,
    #[serde(default = "default_other_critical")]
    pub other_critical: f64,
    #[serde(default = "default_other_scale")]
    pub other_scale: f64,
}

fn default_critical_size() -> usize {
    Thresholds::CRITICAL_SIZE
}

fn default_priority_critical() -> f64 {
    Thresholds::PRIORITY_CRITICAL
}

fn default_priority_scale() -> f64 {
    Thresholds::PRIORITY_SCALE
}

fn default_other_critical() -> f64 {
    Thresholds::OTHER_CRITICAL
}

fn default_other_scale() -> f64 {
    Thresholds::OTHER_SCALE
}

impl ScoringConfig {
    /// Default weights with the given priority disc
    #[must_use]
    pub fn new(priority: Disc) -> Self {
        Self {
            priority,
            critical_size: Thresholds::CRITICAL_SIZE,
            priority_critical: Thresholds::PRIORITY_CRITICAL,
            priority_scale: Thresholds::PRIORITY_SCALE,
            other_critical: Thresholds::OTHER_CRITICAL,
            other_scale: Thresholds::OTHER_SCALE,
        }
    }

    /// Reject configurations the scoring policy cannot rank with
    pub fn validate(&self) -> Result<()> {
        if self.priority.is_empty() {
            return Err(Error::InvalidConfig {
                message: "priority disc must be red or yellow".to_string(),
            });
        }
        if self.critical_size == 0 {
            return Err(Error::InvalidConfig {
                message: "critical_size must be at least 1".to_string(),
            });
        }
        let weights = [
            ("priority_critical", self.priority_critical),
            ("priority_scale", self.priority_scale),
            ("other_critical", self.other_critical),
            ("other_scale", self.other_scale),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Score of a streak; higher is a more urgent move
    #[must_use]
    pub fn threshold(&self, streak: &Streak) -> f64 {
        let size = streak.size();
        let (critical, scale) = if streak.disc == Some(self.priority) {
            (self.priority_critical, self.priority_scale)
        } else {
            (self.other_critical, self.other_scale)
        };

        if size >= self.critical_size {
            critical
        } else {
            size as f64 * scale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Axis, CellId, Direction};

    fn streak(disc: Option<Disc>, size: usize) -> Streak {
        Streak {
            cells: (0..size).map(CellId).collect(),
            disc,
            start: Direction::Left,
            axis: Axis::Horizontal,
            origin: CellId(99),
        }
    }

    #[test]
    fn test_threshold_values() {
        let config = ScoringConfig::new(Disc::Red);
        assert_eq!(config.threshold(&streak(Some(Disc::Red), 3)), 2.0);
        assert_eq!(config.threshold(&streak(Some(Disc::Red), 4)), 2.0);
        assert_eq!(config.threshold(&streak(Some(Disc::Yellow), 3)), 1.6);
        assert!((config.threshold(&streak(Some(Disc::Red), 2)) - 0.66).abs() < 1e-9);
        assert!((config.threshold(&streak(Some(Disc::Yellow), 2)) - 0.70).abs() < 1e-9);
        assert!((config.threshold(&streak(Some(Disc::Red), 1)) - 0.33).abs() < 1e-9);
        assert_eq!(config.threshold(&streak(None, 0)), 0.0);
    }

    #[test]
    fn test_critical_outranks_partial_in_each_class() {
        let config = ScoringConfig::new(Disc::Yellow);
        for disc in [Disc::Red, Disc::Yellow] {
            let critical = config.threshold(&streak(Some(disc), 3));
            for size in 0..3 {
                assert!(critical > config.threshold(&streak(Some(disc), size)));
            }
        }
    }

    #[test]
    fn test_priority_critical_outranks_other_critical() {
        let config = ScoringConfig::new(Disc::Yellow);
        assert!(
            config.threshold(&streak(Some(Disc::Yellow), 3))
                > config.threshold(&streak(Some(Disc::Red), 3))
        );
    }

    #[test]
    fn test_longer_partial_outranks_shorter() {
        let config = ScoringConfig::new(Disc::Red);
        for disc in [Disc::Red, Disc::Yellow] {
            assert!(
                config.threshold(&streak(Some(disc), 2)) > config.threshold(&streak(Some(disc), 1))
            );
        }
    }

    #[test]
    fn test_validate() {
        assert!(ScoringConfig::new(Disc::Red).validate().is_ok());
        assert!(ScoringConfig::new(Disc::Empty).validate().is_err());

        let mut config = ScoringConfig::new(Disc::Red);
        config.other_scale = f64::NAN;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig { .. })));

        let mut config = ScoringConfig::new(Disc::Red);
        config.critical_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"priority":"yellow"}"#).unwrap();
        assert_eq!(config, ScoringConfig::new(Disc::Yellow));

        let config: ScoringConfig =
            serde_json::from_str(r#"{"priority":"red","other_critical":1.9}"#).unwrap();
        assert_eq!(config.priority, Disc::Red);
        assert_eq!(config.other_critical, 1.9);
        assert_eq!(config.priority_critical, Thresholds::PRIORITY_CRITICAL);
    }
}

//! Linear-gap scoring schemes.

use crate::error::{AlignError, AlignResult};
use crate::types::AlignmentMode;
use serde::{Deserialize, Serialize};

/// Largest accepted magnitude for any single scoring value
pub const MAX_SCORE_MAGNITUDE: i32 = 1_000_000;

/// Match reward, mismatch penalty and per-base gap penalty.
///
/// All three values are added to a cell score, so penalties are normally
/// negative. Any sign is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringScheme {
    #[serde(rename = "match")]
    match_score: i32,
    mismatch: i32,
    gap: i32,
}

impl ScoringScheme {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> AlignResult<Self> {
        for (name, value) in [("match", match_score), ("mismatch", mismatch), ("gap", gap)] {
            if value.unsigned_abs() > MAX_SCORE_MAGNITUDE as u32 {
                return Err(AlignError::configuration(format!(
                    "{} score {} exceeds the allowed magnitude {}",
                    name, value, MAX_SCORE_MAGNITUDE
                )));
            }
        }
        Ok(Self {
            match_score,
            mismatch,
            gap,
        })
    }

    /// +1 match, -1 mismatch, -1 gap
    pub fn global_default() -> Self {
        Self {
            match_score: 1,
            mismatch: -1,
            gap: -1,
        }
    }

    /// +3 match, -3 mismatch, -2 gap
    pub fn local_default() -> Self {
        Self {
            match_score: 3,
            mismatch: -3,
            gap: -2,
        }
    }

    pub fn default_for(mode: AlignmentMode) -> Self {
        match mode {
            AlignmentMode::Global => Self::global_default(),
            AlignmentMode::Local => Self::local_default(),
        }
    }

    pub fn match_score(&self) -> i32 {
        self.match_score
    }

    pub fn mismatch(&self) -> i32 {
        self.mismatch
    }

    pub fn gap(&self) -> i32 {
        self.gap
    }

    #[inline]
    pub fn substitution<S: PartialEq>(&self, a: S, b: S) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    /// Largest absolute value any single step can contribute
    pub fn max_step_magnitude(&self) -> u32 {
        self.match_score
            .unsigned_abs()
            .max(self.mismatch.unsigned_abs())
            .max(self.gap.unsigned_abs())
    }

    /// Apply optional overrides on top of this scheme
    pub fn with_overrides(&self, overrides: &ScoringOverrides) -> AlignResult<Self> {
        Self::new(
            overrides.match_score.unwrap_or(self.match_score),
            overrides.mismatch.unwrap_or(self.mismatch),
            overrides.gap.unwrap_or(self.gap),
        )
    }
}

/// Partially specified scoring, as read from a config file or CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOverrides {
    #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<i32>,
}

impl ScoringOverrides {
    pub fn is_empty(&self) -> bool {
        self.match_score.is_none() && self.mismatch.is_none() && self.gap.is_none()
    }

    /// Values from `self` win over values from `lower`
    pub fn layered_over(&self, lower: &ScoringOverrides) -> ScoringOverrides {
        ScoringOverrides {
            match_score: self.match_score.or(lower.match_score),
            mismatch: self.mismatch.or(lower.mismatch),
            gap: self.gap.or(lower.gap),
        }
    }

    /// Build a complete scheme; every value must be present
    pub fn resolve(&self) -> AlignResult<ScoringScheme> {
        let match_score = self
            .match_score
            .ok_or_else(|| AlignError::configuration("missing match score"))?;
        let mismatch = self
            .mismatch
            .ok_or_else(|| AlignError::configuration("missing mismatch score"))?;
        let gap = self
            .gap
            .ok_or_else(|| AlignError::configuration("missing gap penalty"))?;
        ScoringScheme::new(match_score, mismatch, gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults() {
        let global = ScoringScheme::default_for(AlignmentMode::Global);
        assert_eq!((global.match_score(), global.mismatch(), global.gap()), (1, -1, -1));

        let local = ScoringScheme::default_for(AlignmentMode::Local);
        assert_eq!((local.match_score(), local.mismatch(), local.gap()), (3, -3, -2));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(ScoringScheme::new(1, -1, -1).is_ok());
        assert!(ScoringScheme::new(-5, 4, 2).is_ok());

        let err = ScoringScheme::new(1, i32::MIN, -1).unwrap_err();
        assert!(matches!(err, AlignError::Configuration(_)));
        assert!(ScoringScheme::new(MAX_SCORE_MAGNITUDE + 1, -1, -1).is_err());
    }

    #[test]
    fn test_substitution() {
        let scheme = ScoringScheme::local_default();
        assert_eq!(scheme.substitution(b'A', b'A'), 3);
        assert_eq!(scheme.substitution(b'A', b'a'), -3);
        assert_eq!(scheme.substitution('é', 'é'), 3);
        assert_eq!(scheme.max_step_magnitude(), 3);
    }

    #[test]
    fn test_overrides() {
        let overrides = ScoringOverrides {
            gap: Some(-4),
            ..Default::default()
        };
        let scheme = ScoringScheme::global_default().with_overrides(&overrides).unwrap();
        assert_eq!(scheme.gap(), -4);
        assert_eq!(scheme.match_score(), 1);

        let cli = ScoringOverrides {
            match_score: Some(2),
            ..Default::default()
        };
        let merged = cli.layered_over(&overrides);
        assert_eq!(merged.match_score, Some(2));
        assert_eq!(merged.gap, Some(-4));
        assert!(!merged.is_empty());
    }

    #[test]
    fn test_resolve_requires_every_value() {
        let partial = ScoringOverrides {
            match_score: Some(1),
            mismatch: Some(-1),
            gap: None,
        };
        assert_eq!(
            partial.resolve(),
            Err(AlignError::configuration("missing gap penalty"))
        );

        let full = ScoringOverrides {
            gap: Some(-2),
            ..partial
        };
        assert_eq!(full.resolve().unwrap().gap(), -2);
    }
}

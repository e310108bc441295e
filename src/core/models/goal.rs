//! Goal model

use crate::core::models::GradingScale;
use serde::{Deserialize, Serialize};

/// A single target CGPA for the whole course history.
///
/// Range validation happens here, at the caller-facing boundary; the pure
/// projection functions accept whatever numbers they are given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Target CGPA, within `[0, scale max]` for the scale it was set under
    pub target_cgpa: f64,
}

impl Goal {
    /// Create a goal, validating the target against the active scale
    ///
    /// # Errors
    /// Returns an error if the target is not a finite number within
    /// `[0, scale max]`.
    pub fn new(target_cgpa: f64, scale: GradingScale) -> Result<Self, String> {
        let max = scale.max_cgpa();
        if !target_cgpa.is_finite() || target_cgpa < 0.0 || target_cgpa > max {
            return Err(format!(
                "Target CGPA must be between 0.0 and {max:.1} (got {target_cgpa})"
            ));
        }
        Ok(Self { target_cgpa })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_target_within_scale() {
        let goal = Goal::new(4.5, GradingScale::FivePoint).expect("valid goal");
        assert!((goal.target_cgpa - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_target_above_scale_max() {
        assert!(Goal::new(4.5, GradingScale::FourPoint).is_err());
        assert!(Goal::new(5.1, GradingScale::FivePoint).is_err());
    }

    #[test]
    fn test_rejects_negative_and_non_finite_targets() {
        assert!(Goal::new(-0.1, GradingScale::FivePoint).is_err());
        assert!(Goal::new(f64::NAN, GradingScale::FivePoint).is_err());
        assert!(Goal::new(f64::INFINITY, GradingScale::FivePoint).is_err());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(Goal::new(0.0, GradingScale::FivePoint).is_ok());
        assert!(Goal::new(5.0, GradingScale::FivePoint).is_ok());
        assert!(Goal::new(4.0, GradingScale::FourPoint).is_ok());
    }
}

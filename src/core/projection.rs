//! Goal progress and what-if projections
//!
//! Single-shot pure computations; there is no protocol or state machine.
//! Out-of-range goal targets are rejected at the boundary (`Goal::new`),
//! not here: these functions do arithmetic on whatever they are given,
//! and a required average above the scale ceiling or below zero is a
//! meaningful answer ("unreachable" / "already exceeded"), not an error.

use crate::core::models::{Course, GradingScale};

/// Progress toward a target CGPA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// `min(current / target * 100, 100)` when the target is positive,
    /// else `0.0`
    pub percent: f64,
    /// `target - current`; negative means the target is already exceeded
    pub difference: f64,
}

/// Compute progress toward a target CGPA
#[must_use]
pub fn goal_progress(current_cgpa: f64, target_cgpa: f64) -> GoalProgress {
    let percent = if target_cgpa > 0.0 {
        (current_cgpa / target_cgpa * 100.0).min(100.0)
    } else {
        0.0
    };

    GoalProgress {
        percent,
        difference: target_cgpa - current_cgpa,
    }
}

/// Projected CGPA after adding hypothetical courses.
///
/// Reconstructs the implied grade-point total as
/// `current_cgpa * current_credits`, adds the weighted points of the
/// hypothetical courses, and divides by the new credit total.
///
/// An empty hypothetical list returns `current_cgpa` unchanged so a no-op
/// projection introduces no floating-point drift. A zero resulting credit
/// total yields `0.0`.
#[must_use]
pub fn projected_cgpa(
    current_cgpa: f64,
    current_credits: f64,
    additions: &[Course],
    scale: GradingScale,
) -> f64 {
    if additions.is_empty() {
        return current_cgpa;
    }

    let current_points = current_cgpa * current_credits;
    let new_points: f64 = additions
        .iter()
        .map(|c| scale.points(c.grade) * c.credit_hours)
        .sum();
    let new_credits: f64 = additions.iter().map(|c| c.credit_hours).sum();

    let total_credits = current_credits + new_credits;
    if total_credits == 0.0 {
        0.0
    } else {
        (current_points + new_points) / total_credits
    }
}

/// Minimum average grade points per credit needed over an additional
/// credit load to reach a target CGPA.
///
/// `(target * (current + additional) - current_cgpa * current) / additional`
///
/// The raw value is returned: above the scale maximum it signals the goal
/// is unreachable with that load, below zero it signals the goal is
/// already exceeded. Classifying either is the presentation layer's job.
/// A zero or negative additional load has no defined requirement and
/// yields `0.0` rather than a division by zero.
#[must_use]
pub fn required_average(
    current_cgpa: f64,
    current_credits: f64,
    target_cgpa: f64,
    additional_credits: f64,
) -> f64 {
    if additional_credits <= 0.0 {
        return 0.0;
    }

    let target_points = target_cgpa * (current_credits + additional_credits);
    let current_points = current_cgpa * current_credits;
    (target_points - current_points) / additional_credits
}

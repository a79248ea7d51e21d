//! Per-task sub-scores: urgency, importance, effort.
//!
//! Each scorer returns the sub-score plus a one-line rationale that goes
//! into the task's explanation.

use crate::task::TaskRecord;
use chrono::NaiveDate;

/// Floor applied to estimated hours before the effort formula.
pub const MIN_HOURS: f64 = 0.1;

/// Urgency from due-date proximity. Higher = more urgent.
///
/// Overdue tasks get the strongest boost, capped at 2.0 one week past
/// due; tasks without a due date sit at a neutral 0.3.
pub fn urgency_score(task: &TaskRecord, today: NaiveDate) -> (f64, String) {
    let Some(due) = task.due_date else {
        return (
            0.3,
            "• Urgency: No due date set, assigned default low urgency score (0.3)".to_string(),
        );
    };

    let days = (due - today).num_days();
    if days < 0 {
        let overdue = -days;
        let score = 1.0 + (overdue as f64 / 7.0).min(1.0);
        if overdue <= 7 {
            return (
                score,
                format!(
                    "• Urgency: Task is overdue by {overdue} day(s). High urgency boost applied (score: {score:.2})"
                ),
            );
        }
        return (
            score,
            format!(
                "• Urgency: Task is significantly overdue by {overdue} day(s). Maximum urgency boost applied (score: {score:.2})"
            ),
        );
    }

    match days {
        0 => (
            1.5,
            "• Urgency: Task is due today. Very high urgency score (1.5) applied".to_string(),
        ),
        1..=3 => (
            1.2,
            format!(
                "• Urgency: Task due in {days} day(s). High urgency score (1.2) - needs immediate attention"
            ),
        ),
        4..=7 => (
            0.8,
            format!(
                "• Urgency: Task due in {days} day(s). Moderate urgency score (0.8) - approaching deadline"
            ),
        ),
        _ => (
            0.4,
            format!(
                "• Urgency: Task due in {days} day(s). Lower urgency score (0.4) - deadline is further away"
            ),
        ),
    }
}

/// Importance normalized from the 1-10 rating to 0.1-1.0.
///
/// The score uses the clamped rating; the level label reflects whatever
/// the caller submitted.
pub fn importance_score(task: &TaskRecord) -> (f64, String) {
    let score = f64::from(task.importance.clamp(1, 10)) / 10.0;
    let level = if task.importance >= 8 {
        "very high"
    } else if task.importance >= 6 {
        "high"
    } else if task.importance >= 4 {
        "medium"
    } else {
        "low"
    };
    (
        score,
        format!(
            "• Importance: Rated {}/10 ({level} priority). Normalized score: {score:.2}",
            task.importance
        ),
    )
}

/// Effort favors small tasks: simple inverse with diminishing returns,
/// 4 hours as the midpoint.
///
/// The rationale reports the caller's raw estimate even when the formula
/// floors it at [`MIN_HOURS`].
pub fn effort_score(task: &TaskRecord) -> (f64, String) {
    let hours = task.estimated_hours.max(MIN_HOURS);
    let score = 1.0 / (1.0 + hours / 4.0);
    let level = if task.estimated_hours <= 2.0 {
        "quick win"
    } else if task.estimated_hours <= 5.0 {
        "moderate effort"
    } else {
        "high effort"
    };
    (
        score,
        format!(
            "• Effort: Estimated {} hour(s) ({level}). Lower effort = higher score ({score:.2})",
            task.estimated_hours
        ),
    )
}

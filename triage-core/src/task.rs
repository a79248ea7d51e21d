//! Task types for the priority analysis engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw task as delivered by the validation layer, pre-normalization.
///
/// Only `title` is required. Absent numeric fields take their documented
/// defaults during normalization (1.0 hours, importance 5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub importance: Option<i32>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            due_date: None,
            estimated_hours: None,
            importance: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_dependencies(mut self, deps: &[&str]) -> Self {
        self.dependencies = deps.iter().map(|d| (*d).to_string()).collect();
        self
    }
}

/// Canonical task record after normalization: id guaranteed, defaults
/// applied. Out-of-range values are kept as submitted; scorers clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: i32,
    pub dependencies: Vec<String>,
}

/// Coarse classification of the final combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityLabel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PriorityLabel::High => "High",
            PriorityLabel::Medium => "Medium",
            PriorityLabel::Low => "Low",
        })
    }
}

/// Fully scored task as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedTask {
    pub id: String,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: i32,
    pub dependencies: Vec<String>,
    /// Combined priority score, rounded to 3 decimals. Not capped at 1.0:
    /// the urgency term alone can reach 2.0.
    pub score: f64,
    pub priority_label: PriorityLabel,
    /// Newline-joined rationales in fixed order: urgency, importance,
    /// effort, dependencies, combination.
    pub explanation: String,
    /// Distinct warnings, first-occurrence order.
    pub warnings: Vec<String>,
}

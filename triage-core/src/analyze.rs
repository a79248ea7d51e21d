//! Orchestrator: runs the full scoring pipeline over one task set.

use crate::graph::analyze_dependencies;
use crate::normalize::normalize;
use crate::score::{effort_score, importance_score, urgency_score};
use crate::strategy::{Strategy, combine_scores, priority_label};
use crate::task::{AnalyzedTask, TaskDescriptor};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Distinct strings in first-occurrence order.
#[derive(Debug, Default)]
struct WarningSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl WarningSet {
    fn push(&mut self, warning: impl Into<String>) {
        let warning = warning.into();
        if self.seen.insert(warning.clone()) {
            self.items.push(warning);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Score, explain, and rank a task set.
///
/// Pipeline: normalize, one dependency pass over the whole set, then per
/// task urgency/importance/effort, strategy blend, classification, and
/// warning assembly. The result is sorted by descending score; equal
/// scores keep submission order. Empty input yields an empty list.
pub fn analyze_tasks(
    descriptors: &[TaskDescriptor],
    strategy: Strategy,
    today: NaiveDate,
) -> Vec<AnalyzedTask> {
    let tasks = normalize(descriptors);
    let graph = analyze_dependencies(&tasks);

    let mut analyzed: Vec<AnalyzedTask> = Vec::with_capacity(tasks.len());
    for task in tasks.iter() {
        let (urgency, urgency_expl) = urgency_score(task, today);
        let (importance, importance_expl) = importance_score(task);
        let (effort, effort_expl) = effort_score(task);
        let dependency = graph.score(&task.id);
        let dependency_expl = graph.rationale(&task.id);

        let (score, combined_expl) =
            combine_scores(strategy, urgency, importance, effort, dependency);

        let mut warnings = WarningSet::default();
        if task.due_date.is_none() {
            warnings.push("Missing due_date: treated as mildly urgent.");
        }
        if task.estimated_hours <= 0.0 {
            warnings.push("Non-positive estimated_hours: clamped to minimum internally.");
        }
        if task.importance < 1 || task.importance > 10 {
            warnings.push("importance out of [1,10]: clamped internally.");
        }
        // Cycle warnings are request-wide: every task carries them, not
        // only the tasks on the cycle (see DESIGN.md on scope).
        for cycle in &graph.cycle_warnings {
            warnings.push(cycle.clone());
        }

        analyzed.push(AnalyzedTask {
            id: task.id.clone(),
            title: task.title.clone(),
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: task.dependencies.clone(),
            score: round3(score),
            priority_label: priority_label(score),
            explanation: format!(
                "{urgency_expl}\n{importance_expl}\n{effort_expl}\n{dependency_expl}\n{combined_expl}"
            ),
            warnings: warnings.into_vec(),
        });
    }

    // Stable sort: ties keep submission order.
    analyzed.sort_by(|a, b| b.score.total_cmp(&a.score));
    analyzed
}

fn round3(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

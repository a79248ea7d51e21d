//! triage-core: task priority scoring engine.
//!
//! Pure, per-request computation: a list of task descriptors plus a
//! strategy and a reference date go in, a ranked and explained list of
//! analyzed tasks comes out. No I/O, no state across calls.

pub mod analyze;
pub mod graph;
pub mod normalize;
pub mod score;
pub mod strategy;
pub mod task;

pub use analyze::analyze_tasks;
pub use graph::{DependencyAnalysis, analyze_dependencies};
pub use normalize::{TaskSet, normalize};
pub use strategy::{Strategy, Weights, combine_scores, priority_label};
pub use task::{AnalyzedTask, PriorityLabel, TaskDescriptor, TaskRecord};

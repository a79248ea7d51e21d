//! Dependency graph analysis over one task set.
//!
//! Builds the reverse-dependency view (who is blocked on whom), turns
//! dependent counts into a sub-score, and detects cycles with an
//! iterative depth-first traversal so large inputs cannot exhaust the
//! call stack.

use crate::normalize::TaskSet;
use std::collections::{HashMap, HashSet};

/// Result of the graph pass: per-id sub-scores and rationales, plus
/// request-wide cycle warnings.
#[derive(Debug, Clone, Default)]
pub struct DependencyAnalysis {
    scores: HashMap<String, f64>,
    rationales: HashMap<String, String>,
    pub cycle_warnings: Vec<String>,
}

impl DependencyAnalysis {
    pub fn score(&self, id: &str) -> f64 {
        self.scores.get(id).copied().unwrap_or(0.0)
    }

    pub fn rationale(&self, id: &str) -> &str {
        self.rationales
            .get(id)
            .map(String::as_str)
            .unwrap_or("No dependency information.")
    }
}

/// Compute dependency sub-scores and cycle warnings for the whole set.
///
/// A task's sub-score grows with the number of tasks blocked on it:
/// `min(1.0, 0.3 + 0.2 * dependents)`, saturating at 4 dependents.
/// References to ids outside the set are ignored.
pub fn analyze_dependencies(tasks: &TaskSet) -> DependencyAnalysis {
    // Reverse view: id -> tasks that list it as a dependency.
    let mut dependents: HashMap<&str, Vec<&str>> =
        tasks.ids().map(|id| (id, Vec::new())).collect();
    for task in tasks.iter() {
        for dep in &task.dependencies {
            if let Some(list) = dependents.get_mut(dep.as_str()) {
                list.push(task.id.as_str());
            }
        }
    }

    let mut analysis = DependencyAnalysis::default();
    for task in tasks.iter() {
        let count = dependents.get(task.id.as_str()).map_or(0, Vec::len);
        let score = (0.3 + 0.2 * count as f64).min(1.0);
        let rationale = if count == 0 {
            "• Dependencies: No other tasks depend on this task. No dependency boost applied"
                .to_string()
        } else {
            format!(
                "• Dependencies: {count} task(s) depend on completing this task. Dependency boost score: {score:.2} (unblocks other work)"
            )
        };
        analysis.scores.insert(task.id.clone(), score);
        analysis.rationales.insert(task.id.clone(), rationale);
    }
    analysis.cycle_warnings = detect_cycles(tasks);
    analysis
}

/// Iterative depth-first search over dependency edges.
///
/// `visited` is global across roots; `on_path` tracks the active chain.
/// An edge into the active chain means a cycle, reported as the chain
/// from the traversal root through the repeated id. A visited id off the
/// chain is already fully explored and is skipped. Roots are taken in
/// submission order.
fn detect_cycles(tasks: &TaskSet) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();

    for root in tasks.iter() {
        if visited.contains(root.id.as_str()) {
            continue;
        }
        visited.insert(root.id.as_str());

        // Frame: (id, dependency edges, index of the next edge to follow).
        let mut frames: Vec<(&str, &[String], usize)> =
            vec![(root.id.as_str(), root.dependencies.as_slice(), 0)];
        let mut path: Vec<&str> = vec![root.id.as_str()];
        let mut on_path: HashSet<&str> = HashSet::from([root.id.as_str()]);

        loop {
            let next = {
                let Some(frame) = frames.last_mut() else { break };
                let deps: &[String] = frame.1;
                if frame.2 < deps.len() {
                    let dep = deps[frame.2].as_str();
                    frame.2 += 1;
                    Some(dep)
                } else {
                    None
                }
            };

            match next {
                Some(dep) => {
                    // Edges out of the set cannot participate in a cycle.
                    let Some(dep_task) = tasks.get(dep) else {
                        continue;
                    };
                    let dep_id = dep_task.id.as_str();
                    if !visited.contains(dep_id) {
                        visited.insert(dep_id);
                        on_path.insert(dep_id);
                        path.push(dep_id);
                        frames.push((dep_id, dep_task.dependencies.as_slice(), 0));
                    } else if on_path.contains(dep_id) {
                        warnings.push(format!(
                            "Circular dependency detected: {} -> {dep_id}",
                            path.join(" -> ")
                        ));
                    }
                }
                None => {
                    if let Some((id, _, _)) = frames.pop() {
                        on_path.remove(id);
                        path.pop();
                    }
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::task::TaskDescriptor;

    fn set(tasks: Vec<TaskDescriptor>) -> TaskSet {
        normalize(&tasks)
    }

    #[test]
    fn test_dependent_counts_drive_scores() {
        let tasks = set(vec![
            TaskDescriptor::new("base").with_id("base"),
            TaskDescriptor::new("a").with_id("a").with_dependencies(&["base"]),
            TaskDescriptor::new("b").with_id("b").with_dependencies(&["base"]),
        ]);
        let analysis = analyze_dependencies(&tasks);
        assert!((analysis.score("base") - 0.7).abs() < 1e-9);
        assert_eq!(analysis.score("a"), 0.3);
        assert!(analysis.rationale("base").contains("2 task(s) depend"));
        assert!(analysis.rationale("a").contains("No other tasks depend"));
        assert!(analysis.cycle_warnings.is_empty());
    }

    #[test]
    fn test_score_saturates_at_four_dependents() {
        let mut tasks = vec![TaskDescriptor::new("hub").with_id("hub")];
        for i in 0..6 {
            tasks.push(
                TaskDescriptor::new(format!("spoke-{i}"))
                    .with_id(format!("spoke-{i}"))
                    .with_dependencies(&["hub"]),
            );
        }
        let analysis = analyze_dependencies(&set(tasks));
        assert_eq!(analysis.score("hub"), 1.0);
    }

    #[test]
    fn test_dangling_references_ignored() {
        let tasks = set(vec![
            TaskDescriptor::new("a").with_id("a").with_dependencies(&["ghost"]),
        ]);
        let analysis = analyze_dependencies(&tasks);
        assert_eq!(analysis.score("a"), 0.3);
        assert!(analysis.cycle_warnings.is_empty());
    }

    #[test]
    fn test_three_node_cycle_reports_once() {
        let tasks = set(vec![
            TaskDescriptor::new("a").with_id("a").with_dependencies(&["b"]),
            TaskDescriptor::new("b").with_id("b").with_dependencies(&["c"]),
            TaskDescriptor::new("c").with_id("c").with_dependencies(&["a"]),
        ]);
        let analysis = analyze_dependencies(&tasks);
        assert_eq!(
            analysis.cycle_warnings,
            vec!["Circular dependency detected: a -> b -> c -> a".to_string()]
        );
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let tasks = set(vec![
            TaskDescriptor::new("a").with_id("a").with_dependencies(&["a"]),
        ]);
        let analysis = analyze_dependencies(&tasks);
        assert_eq!(
            analysis.cycle_warnings,
            vec!["Circular dependency detected: a -> a".to_string()]
        );
    }

    #[test]
    fn test_cycle_path_runs_from_traversal_root() {
        // "entry" is visited first and leads into the b<->c cycle.
        let tasks = set(vec![
            TaskDescriptor::new("entry").with_id("entry").with_dependencies(&["b"]),
            TaskDescriptor::new("b").with_id("b").with_dependencies(&["c"]),
            TaskDescriptor::new("c").with_id("c").with_dependencies(&["b"]),
        ]);
        let analysis = analyze_dependencies(&tasks);
        assert_eq!(
            analysis.cycle_warnings,
            vec!["Circular dependency detected: entry -> b -> c -> b".to_string()]
        );
    }

    #[test]
    fn test_shared_dependency_is_not_a_cycle() {
        // Diamond: d depends on b and c, both depend on a.
        let tasks = set(vec![
            TaskDescriptor::new("d")
                .with_id("d")
                .with_dependencies(&["b", "c"]),
            TaskDescriptor::new("b").with_id("b").with_dependencies(&["a"]),
            TaskDescriptor::new("c").with_id("c").with_dependencies(&["a"]),
            TaskDescriptor::new("a").with_id("a"),
        ]);
        let analysis = analyze_dependencies(&tasks);
        assert!(analysis.cycle_warnings.is_empty());
        assert!((analysis.score("a") - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // Long linear chain plus a closing edge; the iterative traversal
        // must handle it regardless of depth.
        let n = 50_000;
        let mut tasks = Vec::with_capacity(n);
        for i in 0..n {
            let next = if i + 1 < n { format!("t{}", i + 1) } else { "t0".to_string() };
            let mut t = TaskDescriptor::new(format!("t{i}")).with_id(format!("t{i}"));
            t.dependencies = vec![next];
            tasks.push(t);
        }
        let analysis = analyze_dependencies(&set(tasks));
        assert_eq!(analysis.cycle_warnings.len(), 1);
        assert!(analysis.cycle_warnings[0].starts_with("Circular dependency detected: t0 -> t1"));
    }
}

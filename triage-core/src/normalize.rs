//! Task normalizer: raw descriptors into a canonical, ordered task set.

use crate::task::{TaskDescriptor, TaskRecord};
use std::collections::HashMap;

/// Applied when a descriptor omits `estimated_hours`.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;
/// Applied when a descriptor omits `importance`.
pub const DEFAULT_IMPORTANCE: i32 = 5;

/// Insertion-ordered id -> record mapping for one request.
///
/// Records keep submission order; the index gives O(1) lookup by id.
/// A duplicate explicit id replaces the earlier record in place: the
/// later submission wins, the original position is kept.
#[derive(Debug, Default, Clone)]
pub struct TaskSet {
    records: Vec<TaskRecord>,
    index: HashMap<String, usize>,
}

impl TaskSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&TaskRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Records in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.records.iter()
    }

    /// Ids in submission order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    fn insert(&mut self, record: TaskRecord) {
        match self.index.get(&record.id) {
            Some(&i) => self.records[i] = record,
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }
}

/// Convert raw descriptors into a canonical set.
///
/// Tasks without an id (or with an empty one) get `auto-{index}` from
/// their zero-based submission position. No validation happens here;
/// `title` presence is the caller's contract.
pub fn normalize(descriptors: &[TaskDescriptor]) -> TaskSet {
    let mut set = TaskSet::default();
    for (idx, raw) in descriptors.iter().enumerate() {
        let id = match &raw.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("auto-{idx}"),
        };
        set.insert(TaskRecord {
            id,
            title: raw.title.clone(),
            due_date: raw.due_date,
            estimated_hours: raw.estimated_hours.unwrap_or(DEFAULT_ESTIMATED_HOURS),
            importance: raw.importance.unwrap_or(DEFAULT_IMPORTANCE),
            dependencies: raw.dependencies.clone(),
        });
    }
    set
}

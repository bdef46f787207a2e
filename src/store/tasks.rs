use crate::libs::task::Task;
use std::collections::BTreeMap;

/// Keyed task storage with identifier allocation.
///
/// The id counter is a field of the store instance, so stores are
/// independently instantiable. Identifiers are never reused, even after
/// deletion. Every lookup hands out an independent copy of the stored
/// record; mutating a returned task never affects stored state.
pub struct Tasks {
    entries: BTreeMap<u64, Task>,
    next_id: u64,
}

impl Tasks {
    pub fn new() -> Self {
        Tasks {
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Inserts or overwrites by id. A task without an id is assigned the
    /// next free one; the counter advances only on allocation.
    pub fn save(&mut self, mut task: Task) -> Task {
        let id = match task.id {
            Some(id) => id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                task.id = Some(id);
                id
            }
        };
        self.entries.insert(id, task.clone());
        task
    }

    /// Copies of all tasks in ascending id order.
    pub fn fetch(&self) -> Vec<Task> {
        self.entries.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: u64) -> Option<Task> {
        self.entries.get(&id).cloned()
    }

    /// Removes the entry if present. An absent id is a silent no-op.
    pub fn delete(&mut self, id: u64) {
        self.entries.remove(&id);
    }
}

impl Default for Tasks {
    fn default() -> Self {
        Self::new()
    }
}

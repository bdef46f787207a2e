use crate::libs::task::{Status, Task};
use crate::store::tasks::Tasks;
use chrono::NaiveDate;

/// Business rules for the task lifecycle. All storage access goes through
/// this facade; callers never touch the store directly.
pub struct TaskService {
    store: Tasks,
}

impl TaskService {
    pub fn new() -> Self {
        TaskService { store: Tasks::new() }
    }

    /// Creates a task with status `Todo` and stores it. Title and
    /// description are accepted as given, empty or not.
    pub fn add_task(&mut self, title: &str, description: &str, due_date: NaiveDate) -> Task {
        self.store.save(Task::new(title, description, due_date))
    }

    /// All tasks in store enumeration order.
    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.store.fetch()
    }

    /// Patch update: `None` leaves a field unchanged, any `Some` value is a
    /// real replacement, an empty string included. Blank-means-unchanged is
    /// the interpreter's mapping, not this layer's. Returns `None` for an
    /// unknown id without touching the store.
    pub fn update_task(
        &mut self,
        id: u64,
        title: Option<String>,
        description: Option<String>,
        due_date: Option<NaiveDate>,
        status: Option<Status>,
    ) -> Option<Task> {
        let mut task = self.store.get_by_id(id)?;

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = description;
        }
        if let Some(due_date) = due_date {
            task.due_date = due_date;
        }
        if let Some(status) = status {
            task.status = status;
        }

        Some(self.store.save(task))
    }

    /// `true` iff a task existed under `id` and was removed.
    pub fn delete_task(&mut self, id: u64) -> bool {
        if self.store.get_by_id(id).is_none() {
            return false;
        }
        self.store.delete(id);
        true
    }

    /// Exactly the tasks with the given status, in store enumeration order.
    pub fn filter_by_status(&self, status: Status) -> Vec<Task> {
        self.store.fetch().into_iter().filter(|task| task.status == status).collect()
    }

    /// Ascending by due date; equal dates keep store order.
    pub fn sort_by_due_date(&self) -> Vec<Task> {
        let mut tasks = self.store.fetch();
        tasks.sort_by_key(|task| task.due_date);
        tasks
    }

    /// `Todo` first, `Done` last; equal statuses keep store order.
    pub fn sort_by_status(&self) -> Vec<Task> {
        let mut tasks = self.store.fetch();
        tasks.sort_by_key(|task| task.status);
        tasks
    }
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tasker::libs::service::TaskService;
    use tasker::libs::task::{Status, Task};
    use tasker::store::tasks::Tasks;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_store_assigns_sequential_ids() {
        let mut store = Tasks::new();

        let first = store.save(Task::new("First", "", date(1, 1, 2030)));
        let second = store.save(Task::new("Second", "", date(2, 1, 2030)));

        assert_eq!(first.id, Some(0));
        assert_eq!(second.id, Some(1));

        let all = store.fetch();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, Some(0));
        assert_eq!(all[1].id, Some(1));
    }

    #[test]
    fn test_store_never_reuses_ids() {
        let mut store = Tasks::new();

        let first = store.save(Task::new("First", "", date(1, 1, 2030)));
        store.delete(first.id.unwrap());

        // The freed id must not come back.
        let second = store.save(Task::new("Second", "", date(2, 1, 2030)));
        assert_eq!(second.id, Some(1));
        assert!(store.get_by_id(0).is_none());
    }

    #[test]
    fn test_store_save_with_id_overwrites() {
        let mut store = Tasks::new();

        let mut task = store.save(Task::new("Original", "", date(1, 1, 2030)));
        task.title = "Renamed".to_string();
        let saved = store.save(task);

        assert_eq!(saved.id, Some(0));
        assert_eq!(store.fetch().len(), 1);
        assert_eq!(store.get_by_id(0).unwrap().title, "Renamed");

        // Overwriting must not have advanced the counter.
        let next = store.save(Task::new("Next", "", date(2, 1, 2030)));
        assert_eq!(next.id, Some(1));
    }

    #[test]
    fn test_store_returns_independent_copies() {
        let mut store = Tasks::new();
        store.save(Task::new("Stable", "kept", date(1, 1, 2030)));

        // Mutating a returned record must not touch stored state.
        let mut copy = store.get_by_id(0).unwrap();
        copy.title = "Mutated".to_string();
        copy.status = Status::Done;

        let stored = store.get_by_id(0).unwrap();
        assert_eq!(stored.title, "Stable");
        assert_eq!(stored.status, Status::Todo);
    }

    #[test]
    fn test_store_delete_absent_is_noop() {
        let mut store = Tasks::new();
        store.save(Task::new("Only", "", date(1, 1, 2030)));

        store.delete(99);
        assert_eq!(store.fetch().len(), 1);
    }

    #[test]
    fn test_add_task_sets_todo_and_unique_id() {
        let mut service = TaskService::new();

        let first = service.add_task("Write tests", "Store layer", date(1, 1, 2030));
        let second = service.add_task("", "", date(2, 1, 2030));

        assert_eq!(first.status, Status::Todo);
        assert_eq!(second.status, Status::Todo);
        assert_ne!(first.id, second.id);
        // Empty title and description are accepted silently.
        assert_eq!(second.title, "");
    }

    #[test]
    fn test_update_task_patches_only_given_fields() {
        let mut service = TaskService::new();
        let task = service.add_task("Original", "Original desc", date(1, 1, 2030));
        let id = task.id.unwrap();

        let updated = service
            .update_task(id, Some("Renamed".to_string()), None, None, Some(Status::InProgress))
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "Original desc");
        assert_eq!(updated.due_date, date(1, 1, 2030));
        assert_eq!(updated.status, Status::InProgress);
    }

    #[test]
    fn test_update_task_with_no_fields_is_identity() {
        let mut service = TaskService::new();
        let task = service.add_task("Unchanged", "Desc", date(1, 1, 2030));

        let updated = service.update_task(task.id.unwrap(), None, None, None, None).unwrap();
        assert_eq!(updated, task);
    }

    #[test]
    fn test_update_task_empty_string_is_real_replacement() {
        // Blank-means-unchanged is the interpreter's rule, not this layer's.
        let mut service = TaskService::new();
        let task = service.add_task("Title", "Desc", date(1, 1, 2030));

        let updated = service
            .update_task(task.id.unwrap(), Some(String::new()), None, None, None)
            .unwrap();
        assert_eq!(updated.title, "");
        assert_eq!(updated.description, "Desc");
    }

    #[test]
    fn test_update_task_unknown_id_mutates_nothing() {
        let mut service = TaskService::new();
        service.add_task("Only", "", date(1, 1, 2030));
        let before = service.get_all_tasks();

        let result = service.update_task(42, Some("Ghost".to_string()), None, None, None);

        assert!(result.is_none());
        assert_eq!(service.get_all_tasks(), before);
    }

    #[test]
    fn test_delete_task_true_exactly_once() {
        let mut service = TaskService::new();
        let id = service.add_task("Doomed", "", date(1, 1, 2030)).id.unwrap();

        assert!(service.delete_task(id));
        assert!(!service.delete_task(id));
        assert!(!service.delete_task(99));
    }
}

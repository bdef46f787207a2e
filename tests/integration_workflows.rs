#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tasker::libs::service::TaskService;
    use tasker::libs::task::Status;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_full_task_lifecycle() {
        let mut service = TaskService::new();

        // Two tasks, ids 0 and 1, both starting as Todo.
        let first = service.add_task("Buy milk", "2% milk", date(1, 1, 2030));
        assert_eq!(first.id, Some(0));
        assert_eq!(first.status, Status::Todo);

        let second = service.add_task("Pay bills", "", date(5, 1, 2030));
        assert_eq!(second.id, Some(1));

        // Sorted by due date: 01.01 before 05.01.
        let sorted = service.sort_by_due_date();
        assert_eq!(sorted[0].id, Some(0));
        assert_eq!(sorted[1].id, Some(1));

        // Mark the second one done and find it through the filter.
        let updated = service.update_task(1, None, None, None, Some(Status::Done)).unwrap();
        assert_eq!(updated.status, Status::Done);

        let done = service.filter_by_status(Status::Done);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, Some(1));

        // Delete the first; it is gone and its id stays retired.
        assert!(service.delete_task(0));
        assert!(service.get_all_tasks().iter().all(|task| task.id != Some(0)));

        let third = service.add_task("New task", "", date(10, 1, 2030));
        assert_eq!(third.id, Some(2));
    }

    #[test]
    fn test_status_can_move_in_any_direction() {
        // No transition graph: Done may go straight back to Todo.
        let mut service = TaskService::new();
        let id = service.add_task("Flexible", "", date(1, 1, 2030)).id.unwrap();

        service.update_task(id, None, None, None, Some(Status::Done));
        let reverted = service.update_task(id, None, None, None, Some(Status::Todo)).unwrap();
        assert_eq!(reverted.status, Status::Todo);
    }
}

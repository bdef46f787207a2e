use super::date;
use super::task::Task;

pub struct View {}

impl View {
    /// The fixed listing line: `ID: <id> | <title> | <description> |
    /// <dd.mm.yyyy> | <STATUS>`.
    pub fn line(task: &Task) -> String {
        format!(
            "ID: {} | {} | {} | {} | {}",
            task.id.unwrap_or(0),
            task.title,
            task.description,
            date::format(&task.due_date),
            task.status
        )
    }

    pub fn task(task: &Task) {
        println!("{}", Self::line(task));
    }

    pub fn tasks(tasks: &[Task]) {
        for task in tasks {
            Self::task(task);
        }
    }
}

//! Text rendering for application messages.
//!
//! Single source of truth for every user-facing string. Prompt labels are
//! rendered without a trailing separator; `Prompt` appends `": "` itself.
//! Section headers carry a leading newline to separate them from the
//! previous command's output.

use super::types::Message;
use crate::libs::task::Status;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === LOOP MESSAGES ===
            Message::Welcome => "Welcome to the TODO application!".to_string(),
            Message::Goodbye => "Exiting the application...".to_string(),
            Message::UnknownCommand => "Unknown command. Type 'help' for the list of commands.".to_string(),
            Message::HelpHeader => "\nAvailable commands:".to_string(),
            Message::PromptCommand => "\nEnter command".to_string(),

            // === ADD MESSAGES ===
            Message::AddingTask => "\nAdding a new task:".to_string(),
            Message::PromptTitle => "Enter title".to_string(),
            Message::PromptDescription => "Enter description".to_string(),
            Message::PromptDueDate => "Enter due date (dd.mm.yyyy)".to_string(),
            Message::TaskAdded(id) => format!("Task added with ID: {}", id),

            // === LIST MESSAGES ===
            Message::TaskListEmpty => "Task list is empty.".to_string(),
            Message::TaskListHeader => "\nAll tasks:".to_string(),

            // === EDIT MESSAGES ===
            Message::EditingTask => "\nEditing task:".to_string(),
            Message::PromptTaskId => "Enter task ID".to_string(),
            Message::PromptNewTitle => "Enter new title (leave blank to keep current)".to_string(),
            Message::PromptNewDescription => "Enter new description (leave blank to keep current)".to_string(),
            Message::PromptNewDueDate => "Enter new due date (dd.mm.yyyy or leave blank)".to_string(),
            Message::PromptNewStatus => format!("Enter new status ({} or leave blank)", Status::NAMES.join(", ")),
            Message::TaskUpdated => "Task updated:".to_string(),

            // === DELETE MESSAGES ===
            Message::DeletingTask => "\nDeleting task:".to_string(),
            Message::TaskDeleted(id) => format!("Task with ID {} deleted.", id),

            // === FILTER MESSAGES ===
            Message::FilteringTasks => "\nFiltering tasks by status:".to_string(),
            Message::PromptStatus => format!("Enter status ({})", Status::NAMES.join(", ")),
            Message::NoTasksWithStatus(status) => format!("No tasks with status {}", status),
            Message::TasksWithStatus(status) => format!("Tasks with status {}:", status),

            // === SORT MESSAGES ===
            Message::SortingTasks => "\nSorting tasks:".to_string(),
            Message::SortOptionDueDate => "1 - By due date".to_string(),
            Message::SortOptionStatus => "2 - By status".to_string(),
            Message::PromptSortChoice => "Choose sort option".to_string(),
            Message::SortedByDueDate => "Tasks sorted by due date:".to_string(),
            Message::SortedByStatus => "Tasks sorted by status:".to_string(),
            Message::InvalidSortChoice => "Invalid choice. Returning to main menu.".to_string(),
        };
        write!(f, "{}", text)
    }
}

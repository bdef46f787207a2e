use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::service::TaskService;
use crate::libs::view::View;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use std::io::BufRead;

/// Prompts for a sort key: "1" orders by due date, "2" by status ordinal.
/// Any other choice returns to the main menu.
pub fn cmd<R: BufRead>(service: &TaskService, prompt: &mut Prompt<R>) -> Result<()> {
    msg_print!(Message::SortingTasks);
    msg_print!(Message::SortOptionDueDate);
    msg_print!(Message::SortOptionStatus);

    let Some(choice) = prompt.line(Message::PromptSortChoice)? else {
        return Ok(());
    };

    let tasks = match choice.trim() {
        "1" => {
            msg_print!(Message::SortedByDueDate);
            service.sort_by_due_date()
        }
        "2" => {
            msg_print!(Message::SortedByStatus);
            service.sort_by_status()
        }
        _ => {
            msg_warning!(Message::InvalidSortChoice);
            return Ok(());
        }
    };
    View::tasks(&tasks);

    Ok(())
}

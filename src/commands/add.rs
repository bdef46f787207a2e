use crate::libs::date;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::service::TaskService;
use crate::{msg_print, msg_success};
use anyhow::Result;
use std::io::BufRead;

/// Interactive task creation: title, description, and a strictly formatted
/// due date. The first invalid date aborts the command.
pub fn cmd<R: BufRead>(service: &mut TaskService, prompt: &mut Prompt<R>) -> Result<()> {
    msg_print!(Message::AddingTask);

    let Some(title) = prompt.line(Message::PromptTitle)? else {
        return Ok(());
    };
    let Some(description) = prompt.line(Message::PromptDescription)? else {
        return Ok(());
    };
    let Some(date_input) = prompt.line(Message::PromptDueDate)? else {
        return Ok(());
    };
    let due_date = date::parse(&date_input)?;

    let task = service.add_task(&title, &description, due_date);
    msg_success!(Message::TaskAdded(task.id.unwrap_or(0)));

    Ok(())
}

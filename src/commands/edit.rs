use crate::libs::date;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::service::TaskService;
use crate::libs::task::Status;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use std::io::BufRead;

/// Interactive patch update. A blank field means "keep current"; the id is
/// only checked against the store once all fields are read, so an unknown
/// id surfaces after the prompts.
pub fn cmd<R: BufRead>(service: &mut TaskService, prompt: &mut Prompt<R>) -> Result<()> {
    msg_print!(Message::EditingTask);

    let Some(id_input) = prompt.line(Message::PromptTaskId)? else {
        return Ok(());
    };
    let id = super::parse_id(&id_input)?;

    let Some(title) = prompt.line(Message::PromptNewTitle)? else {
        return Ok(());
    };
    let Some(description) = prompt.line(Message::PromptNewDescription)? else {
        return Ok(());
    };
    let Some(date_input) = prompt.line(Message::PromptNewDueDate)? else {
        return Ok(());
    };
    let due_date = if date_input.is_empty() {
        None
    } else {
        Some(date::parse(&date_input)?)
    };
    let Some(status_input) = prompt.line(Message::PromptNewStatus)? else {
        return Ok(());
    };
    let status = if status_input.is_empty() {
        None
    } else {
        Some(status_input.parse::<Status>()?)
    };

    let title = if title.is_empty() { None } else { Some(title) };
    let description = if description.is_empty() { None } else { Some(description) };

    match service.update_task(id, title, description, due_date, status) {
        Some(task) => {
            msg_success!(Message::TaskUpdated);
            View::task(&task);
        }
        None => msg_error!(TaskError::TaskNotFound(id)),
    }

    Ok(())
}

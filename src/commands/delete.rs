use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::service::TaskService;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use std::io::BufRead;

pub fn cmd<R: BufRead>(service: &mut TaskService, prompt: &mut Prompt<R>) -> Result<()> {
    msg_print!(Message::DeletingTask);

    let Some(id_input) = prompt.line(Message::PromptTaskId)? else {
        return Ok(());
    };
    let id = super::parse_id(&id_input)?;

    if service.delete_task(id) {
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_error!(TaskError::TaskNotFound(id));
    }

    Ok(())
}

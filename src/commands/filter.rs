use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::service::TaskService;
use crate::libs::task::Status;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use std::io::BufRead;

pub fn cmd<R: BufRead>(service: &TaskService, prompt: &mut Prompt<R>) -> Result<()> {
    msg_print!(Message::FilteringTasks);

    let Some(status_input) = prompt.line(Message::PromptStatus)? else {
        return Ok(());
    };
    let status: Status = status_input.parse()?;

    let tasks = service.filter_by_status(status);
    if tasks.is_empty() {
        msg_info!(Message::NoTasksWithStatus(status.to_string()));
        return Ok(());
    }

    msg_print!(Message::TasksWithStatus(status.to_string()));
    View::tasks(&tasks);

    Ok(())
}

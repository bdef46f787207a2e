use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd(service: &TaskService) -> Result<()> {
    let tasks = service.get_all_tasks();
    if tasks.is_empty() {
        msg_info!(Message::TaskListEmpty);
        return Ok(());
    }

    msg_print!(Message::TaskListHeader);
    View::tasks(&tasks);

    Ok(())
}

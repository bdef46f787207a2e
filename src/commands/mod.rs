//! The interactive command loop and its command handlers.

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod list;
pub mod sort;

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::service::TaskService;
use crate::{msg_debug, msg_error, msg_print, msg_warning};
use anyhow::Result;
use std::io::BufRead;

/// Keywords understood by the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Edit,
    Delete,
    Filter,
    Sort,
    Help,
    Exit,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Add,
        Command::List,
        Command::Edit,
        Command::Delete,
        Command::Filter,
        Command::Sort,
        Command::Help,
        Command::Exit,
    ];

    /// Case-insensitive keyword lookup.
    pub fn parse(input: &str) -> Option<Command> {
        let keyword = input.trim().to_lowercase();
        Command::ALL.iter().copied().find(|command| command.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::List => "list",
            Command::Edit => "edit",
            Command::Delete => "delete",
            Command::Filter => "filter",
            Command::Sort => "sort",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Add => "Add a new task",
            Command::List => "Show all tasks",
            Command::Edit => "Edit an existing task",
            Command::Delete => "Delete a task",
            Command::Filter => "Show tasks with a given status",
            Command::Sort => "Sort tasks",
            Command::Help => "Show this help",
            Command::Exit => "Quit the application",
        }
    }
}

/// Parses an id token for `edit` and `delete`.
pub fn parse_id(input: &str) -> Result<u64, TaskError> {
    let token = input.trim();
    token.parse().map_err(|_| TaskError::InvalidId(token.to_string()))
}

/// The read-dispatch loop: one command per iteration, synchronous
/// throughout.
pub struct Repl<R> {
    service: TaskService,
    prompt: Prompt<R>,
}

impl<R: BufRead> Repl<R> {
    pub fn new(service: TaskService, input: R) -> Self {
        Repl {
            service,
            prompt: Prompt::new(input),
        }
    }

    /// Runs until `exit` or end of input. Errors from command handlers are
    /// printed and the loop continues; nothing here is fatal.
    pub fn run(&mut self) -> Result<()> {
        msg_print!(Message::Welcome);
        print_help();

        loop {
            let Some(line) = self.prompt.line(Message::PromptCommand)? else {
                break;
            };
            let command = Command::parse(&line);
            msg_debug!(format!("command input {:?} resolved to {:?}", line, command));

            let result = match command {
                Some(Command::Add) => add::cmd(&mut self.service, &mut self.prompt),
                Some(Command::List) => list::cmd(&self.service),
                Some(Command::Edit) => edit::cmd(&mut self.service, &mut self.prompt),
                Some(Command::Delete) => delete::cmd(&mut self.service, &mut self.prompt),
                Some(Command::Filter) => filter::cmd(&self.service, &mut self.prompt),
                Some(Command::Sort) => sort::cmd(&self.service, &mut self.prompt),
                Some(Command::Help) => {
                    print_help();
                    Ok(())
                }
                Some(Command::Exit) => {
                    msg_print!(Message::Goodbye);
                    break;
                }
                None => {
                    msg_warning!(Message::UnknownCommand);
                    Ok(())
                }
            };

            if let Err(error) = result {
                msg_error!(error);
            }
        }

        Ok(())
    }

    /// Read access to the resulting task state.
    pub fn service(&self) -> &TaskService {
        &self.service
    }
}

fn print_help() {
    msg_print!(Message::HelpHeader);
    for command in Command::ALL {
        println!("{:<6} - {}", command.keyword(), command.description());
    }
}

use thiserror::Error;

/// Errors raised by the parsing collaborators and the command handlers.
///
/// The service and store layers signal absence through return values; these
/// variants exist for the command-interpreter boundary, where they are
/// printed and the prompt is shown again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Invalid date format: {0}. Expected format dd.mm.yyyy")]
    InvalidDate(String),
    #[error("Invalid status: {0}. Valid values: TODO, IN_PROGRESS, DONE")]
    InvalidStatus(String),
    #[error("Task with ID {0} not found")]
    TaskNotFound(u64),
    #[error("Invalid ID: {0}. Must be a number")]
    InvalidId(String),
}

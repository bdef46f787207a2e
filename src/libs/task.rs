use crate::libs::error::TaskError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A unit of work. `id` is `None` only until the store assigns one on the
/// first save; every stored task carries a unique, immutable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: Status,
}

impl Task {
    pub fn new(title: &str, description: &str, due_date: NaiveDate) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            status: Status::Todo,
        }
    }
}

/// Lifecycle label of a task. Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Wire names, in ordinal order.
    pub const NAMES: [&'static str; 3] = ["TODO", "IN_PROGRESS", "DONE"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TaskError;

    /// Case-insensitive match against the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TODO" => Ok(Status::Todo),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "DONE" => Ok(Status::Done),
            _ => Err(TaskError::InvalidStatus(s.trim().to_string())),
        }
    }
}

/// Every user-visible string in the application, one variant per message.
/// The text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === LOOP MESSAGES ===
    Welcome,
    Goodbye,
    UnknownCommand,
    HelpHeader,
    PromptCommand,

    // === ADD MESSAGES ===
    AddingTask,
    PromptTitle,
    PromptDescription,
    PromptDueDate,
    TaskAdded(u64),

    // === LIST MESSAGES ===
    TaskListEmpty,
    TaskListHeader,

    // === EDIT MESSAGES ===
    EditingTask,
    PromptTaskId,
    PromptNewTitle,
    PromptNewDescription,
    PromptNewDueDate,
    PromptNewStatus,
    TaskUpdated,

    // === DELETE MESSAGES ===
    DeletingTask,
    TaskDeleted(u64),

    // === FILTER MESSAGES ===
    FilteringTasks,
    PromptStatus,
    NoTasksWithStatus(String),
    TasksWithStatus(String),

    // === SORT MESSAGES ===
    SortingTasks,
    SortOptionDueDate,
    SortOptionStatus,
    PromptSortChoice,
    SortedByDueDate,
    SortedByStatus,
    InvalidSortChoice,
}

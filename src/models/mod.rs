pub mod board;
pub mod task;
pub mod user;

pub use board::{Board, BoardInput, BoardResponse};
pub use task::{
    CompletionUpdate, CreatedTask, NewTask, StatusUpdate, Task, TaskInput, TaskListItem, TaskQuery,
    TaskSort, DEFAULT_TASK_STATUS,
};
pub use user::{User, UserInfo};

use validator::ValidationError;

/// Rejects strings that are empty once surrounding whitespace is removed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

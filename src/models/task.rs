use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::not_blank;
use crate::error::AppError;

/// Status assigned to every new task, whatever the client sends.
pub const DEFAULT_TASK_STATUS: &str = "in-progress";

/// Accepted `due_date` input format, e.g. `2024-01-01T10:00`.
pub const DUE_DATE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// `due_date` format in task listings, e.g. `2024-01-01 10:00`.
pub const LIST_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
/// `due_date` format in the creation response, e.g. `2024-01-01 10:00:00`.
pub const CREATED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Priority labels with a defined rank. Any other label, and no label, ranks last.
pub const PRIORITY_RANKS: [(&str, i32); 3] = [("High", 1), ("Medium", 2), ("Low", 3)];
/// Rank of a missing or unrecognised priority.
pub const UNRANKED_PRIORITY: i32 = 4;

/// Represents a task entity as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: i32,
    pub board_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<String>,
    pub completed: bool,
    pub status: String,
}

/// Input structure for creating a task.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskInput {
    pub board_id: i32,
    /// Must be non-blank and at most 100 characters.
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub title: String,
    pub description: Option<String>,
    /// Parsed with [`DUE_DATE_INPUT_FORMAT`]; an empty string means no due date.
    pub due_date: Option<String>,
    #[validate(length(max = 50))]
    pub priority: Option<String>,
}

/// A validated task ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub board_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<String>,
}

impl TaskInput {
    /// Validates the payload and parses its due date.
    pub fn into_new_task(self) -> Result<NewTask, AppError> {
        self.validate()?;
        let due_date = match self.due_date.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(NaiveDateTime::parse_from_str(raw, DUE_DATE_INPUT_FORMAT)?),
        };
        Ok(NewTask {
            board_id: self.board_id,
            title: self.title,
            description: self.description,
            due_date,
            priority: self.priority,
        })
    }
}

/// Ordering applied to a task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    /// Priority rank ascending, then due date ascending.
    Priority,
    /// Due date ascending, then the raw priority label descending.
    DueDate,
    /// Any other `sort_by` value: creation order.
    Insertion,
}

impl TaskSort {
    pub fn from_param(sort_by: Option<&str>) -> Self {
        match sort_by {
            None | Some("priority") => TaskSort::Priority,
            Some("due_date") => TaskSort::DueDate,
            Some(_) => TaskSort::Insertion,
        }
    }
}

/// Represents query parameters for filtering tasks when listing them.
#[derive(Debug, Default, Deserialize)]
pub struct TaskQuery {
    /// Restrict to one board. A board the caller does not own yields no tasks;
    /// an empty value disables the filter.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub board_id: Option<i32>,
    /// `priority` (default) or `due_date`.
    pub sort_by: Option<String>,
    /// Exact status match; an empty value disables the filter.
    pub status: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

impl TaskQuery {
    pub fn sort(&self) -> TaskSort {
        TaskSort::from_param(self.sort_by.as_deref())
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.status.as_deref().filter(|status| !status.is_empty())
    }
}

/// Body of `PUT /tasks/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct CompletionUpdate {
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Body of `PUT /tasks/{id}/status`.
#[derive(Debug, Default, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: Option<String>,
}

/// A task as it appears in `GET /tasks`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskListItem {
    pub id: i32,
    pub board_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
    pub status: String,
}

impl From<Task> for TaskListItem {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            board_id: task.board_id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            due_date: task
                .due_date
                .map(|due| due.format(LIST_DATE_FORMAT).to_string()),
            completed: task.completed,
            status: task.status,
        }
    }
}

/// A task as returned by `POST /tasks`. The due date carries seconds and the
/// status is omitted, unlike the listing shape.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatedTask {
    pub id: i32,
    pub board_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
}

impl From<Task> for CreatedTask {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            board_id: task.board_id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            due_date: task
                .due_date
                .map(|due| due.format(CREATED_DATE_FORMAT).to_string()),
            completed: task.completed,
        }
    }
}

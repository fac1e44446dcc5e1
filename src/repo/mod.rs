//! SQL access, one module per table plus the ownership guard shared by boards and tasks.
//!
//! Every function takes the caller's `&mut PgConnection`. Handlers pass either a pooled
//! connection (reads) or an open `Transaction` (writes), so the commit boundary stays in
//! the handler and a multi-statement operation such as a board delete is atomic.

pub mod board_repo;
pub mod ownership;
pub mod task_repo;
pub mod user_repo;

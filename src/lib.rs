#![doc = "The `taskboard` library crate."]
#![doc = ""]
#![doc = "Users register and log in, then manage boards and the tasks on them. Every board"]
#![doc = "and task operation is scoped to the boards the authenticated user owns."]
#![doc = "The binary (`main.rs`) wires these modules into an actix-web server."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repo;
pub mod routes;

pub use crate::error::AppError;

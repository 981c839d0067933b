//! CLI command handlers for `CourseRegistry`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod run;

//! Shared library for `CourseRegistry`
//! Contains the registry model, the source loader, the command loop and the
//! ambient configuration and logging used by the CLI.

pub mod core;
pub mod logger;

pub use self::core::config;

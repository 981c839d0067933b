//! Core module for the course registry

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod session;

pub use error::{RegistryError, Result};


//! Configuration parsing
//!
//! This module handles the JSON files the runner consumes: task collection
//! definitions and the optional application settings file.

pub mod settings;
pub mod tasks;

pub use settings::Settings;
pub use tasks::{Task, TaskCollection};

//! Presentation Layer
//!
//! The CLI surface: argument definitions, command dispatch, terminal
//! rendering, and one handler module per command group.

pub mod cli;
pub mod commands;
pub mod handlers;
pub mod render;

//! Top-level application state.
//!
//! Owns the chat context and the conversation, and drives the read-eval
//! loop over stdin: each line is either a command or a question.

mod assistant;
mod commands;
mod conversation;
mod core;
mod render;
mod repl;

pub use core::ProfessorApp;
pub use repl::run;

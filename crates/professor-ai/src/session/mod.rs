//! Chat session management.
//!
//! A `ChatSession` is bound to one `SessionConfig`: the config decides the
//! system instruction and the tools, and stays fixed for the session's life.
//! `ChatContext` holds the single active session and replaces it whenever
//! the lesson settings change.

mod chat;
mod instruction;
mod manager;
mod types;

pub use chat::ChatSession;
pub use instruction::{build_system_instruction, depth_directive, PERSONA_PREAMBLE};
pub use manager::ChatContext;
pub use types::{ModelSettings, SessionConfig};

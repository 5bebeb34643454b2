//! A single chat session bound to one configuration.

use professor_common::new_id;

use crate::{ChatRequest, Role, Tool, Turn};

use super::instruction::build_system_instruction;
use super::types::{ModelSettings, SessionConfig};

/// A conversation with the model under fixed lesson settings.
pub struct ChatSession {
    /// Identifier used in logs.
    id: String,
    config: SessionConfig,
    settings: ModelSettings,
    /// Persona plus the depth directive for `config.depth_level`.
    system_instruction: String,
    /// Web search when grounding is enabled, nothing otherwise.
    tools: Vec<Tool>,
    /// Completed exchanges, oldest first.
    history: Vec<Turn>,
}

impl ChatSession {
    pub fn new(config: SessionConfig, settings: &ModelSettings) -> Self {
        let tools = if config.use_search_grounding {
            vec![Tool::GoogleSearch]
        } else {
            Vec::new()
        };

        Self {
            id: new_id(),
            config,
            settings: settings.clone(),
            system_instruction: build_system_instruction(config.depth_level),
            tools,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Build the request that sends `message` within this session.
    pub fn request(&self, message: impl Into<String>) -> ChatRequest {
        ChatRequest {
            model: self.settings.model.clone(),
            system_instruction: self.system_instruction.clone(),
            temperature: self.settings.temperature,
            max_output_tokens: self.settings.max_output_tokens,
            tools: self.tools.clone(),
            history: self.history.clone(),
            message: message.into(),
        }
    }

    /// Remember a completed round-trip so later requests carry it.
    pub(crate) fn record_exchange(&mut self, user: String, answer: String) {
        self.history.push(Turn {
            role: Role::User,
            text: user,
        });
        self.history.push(Turn {
            role: Role::Model,
            text: answer,
        });
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("model", &self.settings.model)
            .field("turns", &self.history.len())
            .finish()
    }
}

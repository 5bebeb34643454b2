//! ProfessorApp struct definition and command handling.

use std::io::{self, Write};

use professor_ai::{ChatContext, SessionConfig};

use super::commands::{Input, HELP_TEXT};
use super::conversation::Conversation;
use super::render;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Top-level application state.
pub struct ProfessorApp {
    pub(super) ctx: ChatContext,
    pub(super) conversation: Conversation,
    pub(super) session_config: SessionConfig,
}

impl ProfessorApp {
    /// Build the app and start the first session with `session_config`.
    pub fn new(mut ctx: ChatContext, session_config: SessionConfig) -> Self {
        ctx.start_session(session_config);
        Self {
            ctx,
            conversation: Conversation::new(),
            session_config,
        }
    }

    /// Apply new lesson settings. Unchanged settings keep the current session.
    pub(super) fn update_config(&mut self, config: SessionConfig) {
        if config == self.session_config {
            return;
        }
        self.session_config = config;
        self.ctx.start_session(config);
    }

    /// Handle every input except questions, which need the async path.
    pub(super) fn handle_command(&mut self, input: Input, out: &mut impl Write) -> io::Result<Flow> {
        match input {
            Input::Ask(_) | Input::Nothing => {}
            Input::SetDepth(level) => {
                self.update_config(self.session_config.with_depth(level));
                writeln!(out, "Profundidade: {level}")?;
            }
            Input::SetSearch(enabled) => {
                self.update_config(self.session_config.with_search(enabled));
                let state = if enabled { "ativada" } else { "desativada" };
                writeln!(out, "Pesquisa na Web {state}")?;
            }
            Input::Clear => {
                self.conversation.clear();
                self.ctx.reset();
                writeln!(out, "Histórico da aula apagado.")?;
                render::write_welcome(out)?;
            }
            Input::ShowConfig => {
                render::write_config(out, &self.session_config, self.ctx.settings())?;
            }
            Input::Help => writeln!(out, "{HELP_TEXT}")?,
            Input::Invalid(reason) => writeln!(out, "{reason}")?,
            Input::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

//! Sending a question and streaming the professor's answer to the terminal.

use std::io::{self, Write};

use professor_ai::DispatchError;
use tokio_util::sync::CancellationToken;

use super::core::ProfessorApp;
use super::render;

impl ProfessorApp {
    /// Ask `text`, printing fragments as they arrive.
    ///
    /// Failures become an error entry in the conversation. Cancellation drops
    /// the partial answer without one. A failed write to `out` stops the
    /// stream and is returned once the conversation is settled.
    pub(super) async fn ask(
        &mut self,
        text: String,
        out: &mut impl Write,
        cancel: &CancellationToken,
    ) -> io::Result<()> {
        debug_assert!(!self.conversation.is_loading(), "one question at a time");
        self.conversation.begin_exchange(text.clone());
        writeln!(out)?;

        // A failed write stops this answer only, not the caller's token.
        let cancel = cancel.child_token();
        let mut write_error: Option<io::Error> = None;

        let conversation = &mut self.conversation;
        let result = self
            .ctx
            .dispatch_with_cancel(
                &text,
                |fragment| {
                    conversation.push_fragment(fragment);
                    if write_error.is_some() {
                        return;
                    }
                    if let Err(e) = write!(out, "{fragment}").and_then(|()| out.flush()) {
                        write_error = Some(e);
                        cancel.cancel();
                    }
                },
                &cancel,
            )
            .await;

        if let Some(e) = write_error {
            match result {
                Ok(outcome) => {
                    self.conversation.complete(&outcome);
                }
                Err(_) => self.conversation.abandon(),
            }
            tracing::warn!("terminal write failed: {e}");
            return Err(e);
        }

        match result {
            Ok(outcome) => {
                writeln!(out)?;
                let message = self.conversation.complete(&outcome);
                tracing::debug!(id = %message.id(), chars = message.text().len(), "answer shown");
                if let Some(sources) = message.sources() {
                    render::write_sources(out, sources)?;
                }
                render::write_footer(out, message)?;
            }
            Err(DispatchError::Cancelled) => {
                let dropped = self.conversation.streaming_text().map_or(0, str::len);
                tracing::debug!(dropped, "answer cancelled");
                self.conversation.abandon();
                writeln!(out)?;
                writeln!(out, "(resposta interrompida)")?;
            }
            Err(e) => {
                tracing::warn!("Error in Gemini service: {e}");
                let message = self.conversation.fail();
                tracing::debug!(id = %message.id(), "error entry added");
                writeln!(out)?;
                writeln!(out, "{}", message.text())?;
                render::write_footer(out, message)?;
            }
        }

        writeln!(out)?;
        out.flush()
    }
}

//! The read-eval loop over stdin.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

use super::commands::{parse_input, Input};
use super::core::{Flow, ProfessorApp};
use super::render;

/// Read lines until `/quit`, end of input, or Ctrl+C at the prompt.
///
/// Questions are answered one at a time; the next line is not read until
/// the current answer has finished streaming.
pub async fn run(
    app: &mut ProfessorApp,
    input: impl AsyncBufRead + Unpin,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let mut lines = input.lines();

    if app.conversation.is_empty() {
        render::write_welcome(out)?;
    }

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        match parse_input(&line) {
            Input::Ask(text) => {
                let cancel = CancellationToken::new();
                let watcher = tokio::spawn({
                    let cancel = cancel.clone();
                    async move {
                        if tokio::signal::ctrl_c().await.is_ok() {
                            cancel.cancel();
                        }
                    }
                });
                let result = app.ask(text, out, &cancel).await;
                watcher.abort();
                result?;
            }
            other => {
                if app.handle_command(other, out)? == Flow::Quit {
                    break;
                }
            }
        }
    }

    writeln!(out)?;
    tracing::info!(
        messages = app.conversation.messages().len(),
        "leaving the lesson"
    );
    Ok(())
}

//! Conversation state: history, the in-flight answer, and the loading flag.

use professor_ai::{DispatchOutcome, Message};

/// Shown in place of an answer when the dispatch fails.
pub(crate) const FAILURE_TEXT: &str =
    "Desculpe, tive um problema ao processar sua solicitação. Por favor, tente novamente.";

/// Fragments of the answer currently streaming in.
#[derive(Debug, Default)]
pub(crate) struct StreamingBuffer {
    text: String,
}

impl StreamingBuffer {
    pub(crate) fn push(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}

/// Everything the front end shows about the lesson.
#[derive(Debug, Default)]
pub(crate) struct Conversation {
    messages: Vec<Message>,
    streaming: Option<StreamingBuffer>,
    is_loading: bool,
}

impl Conversation {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record the user's message and open a buffer for the answer.
    pub(crate) fn begin_exchange(&mut self, text: impl Into<String>) -> &Message {
        self.is_loading = true;
        self.streaming = Some(StreamingBuffer::default());
        self.push(Message::user(text))
    }

    pub(crate) fn push_fragment(&mut self, fragment: &str) {
        if let Some(buffer) = self.streaming.as_mut() {
            buffer.push(fragment);
        }
    }

    /// Turn a finished dispatch into the professor's message.
    ///
    /// Sources are attached only when the answer carried grounding metadata.
    pub(crate) fn complete(&mut self, outcome: &DispatchOutcome) -> &Message {
        self.finish();
        let sources = outcome
            .grounding_metadata
            .as_ref()
            .map(|_| outcome.sources());
        self.push(Message::professor(outcome.full_text.clone(), sources))
    }

    /// Drop the partial answer and record the failure.
    pub(crate) fn fail(&mut self) -> &Message {
        self.finish();
        self.push(Message::error(FAILURE_TEXT))
    }

    /// Drop the partial answer without recording anything.
    pub(crate) fn abandon(&mut self) {
        self.finish();
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
        self.finish();
    }

    pub(crate) fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub(crate) fn streaming_text(&self) -> Option<&str> {
        self.streaming.as_ref().map(StreamingBuffer::text)
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn finish(&mut self) {
        self.streaming = None;
        self.is_loading = false;
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use professor_ai::{GroundingChunk, GroundingMetadata, Sender, WebSource};

    #[test]
    fn begin_exchange_appends_user_message_and_loads() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("O que é um buraco negro?");

        assert!(conversation.is_loading());
        assert_eq!(conversation.streaming_text(), Some(""));
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].sender(), Sender::User);
    }

    #[test]
    fn fragments_accumulate_in_buffer() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("x");
        conversation.push_fragment("Ol");
        conversation.push_fragment("á");
        assert_eq!(conversation.streaming_text(), Some("Olá"));
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn fragment_without_exchange_is_ignored() {
        let mut conversation = Conversation::new();
        conversation.push_fragment("perdido");
        assert_eq!(conversation.streaming_text(), None);
    }

    #[test]
    fn complete_without_metadata_has_no_sources() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("x");
        conversation.push_fragment("resposta");

        let outcome = DispatchOutcome {
            full_text: "resposta".into(),
            grounding_metadata: None,
        };
        let message = conversation.complete(&outcome);
        assert_eq!(message.text(), "resposta");
        assert!(message.sources().is_none());

        assert!(!conversation.is_loading());
        assert_eq!(conversation.streaming_text(), None);
        assert_eq!(conversation.messages().len(), 2);
    }

    #[test]
    fn complete_with_metadata_attaches_sources() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("x");

        let outcome = DispatchOutcome {
            full_text: "com fontes".into(),
            grounding_metadata: Some(GroundingMetadata {
                grounding_chunks: vec![
                    GroundingChunk {
                        web: Some(WebSource {
                            uri: "https://pt.wikipedia.org/wiki/Entropia".into(),
                            title: Some("Entropia".into()),
                        }),
                    },
                    GroundingChunk { web: None },
                ],
                web_search_queries: Vec::new(),
            }),
        };
        let sources = conversation.complete(&outcome).sources().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].title.as_deref(), Some("Entropia"));
    }

    #[test]
    fn grounded_answer_without_web_chunks_has_empty_sources() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("x");
        let outcome = DispatchOutcome {
            full_text: "y".into(),
            grounding_metadata: Some(GroundingMetadata::default()),
        };
        assert_eq!(conversation.complete(&outcome).sources(), Some(&[][..]));
    }

    #[test]
    fn fail_discards_buffer_and_appends_error() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("x");
        conversation.push_fragment("meia resp");

        let message = conversation.fail();
        assert!(message.is_error());
        assert_eq!(message.sender(), Sender::Professor);
        assert_eq!(message.text(), FAILURE_TEXT);

        assert!(!conversation.is_loading());
        assert_eq!(conversation.streaming_text(), None);
        assert!(conversation
            .messages()
            .iter()
            .all(|m| m.text() != "meia resp"));
    }

    #[test]
    fn abandon_keeps_only_user_message() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("x");
        conversation.push_fragment("parcial");
        conversation.abandon();

        assert_eq!(conversation.messages().len(), 1);
        assert!(!conversation.is_loading());
    }

    #[test]
    fn clear_empties_history() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("x");
        conversation.fail();
        conversation.clear();
        assert!(conversation.is_empty());
    }

    #[test]
    fn each_entry_gets_its_own_id() {
        let mut conversation = Conversation::new();
        conversation.begin_exchange("x");
        conversation.complete(&DispatchOutcome::default());
        conversation.begin_exchange("y");
        conversation.fail();

        let ids: std::collections::HashSet<_> = conversation
            .messages()
            .iter()
            .map(|message| message.id().as_str().to_string())
            .collect();
        assert_eq!(ids.len(), 4);
    }
}

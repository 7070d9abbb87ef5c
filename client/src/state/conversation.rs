//! Conversation orchestration state.
//!
//! DESIGN
//! ======
//! Pure state machine driven by the chat page. Each user turn walks
//! Idle -> Dispatching -> Streaming and back to Idle; the page performs the
//! network effects between transitions and every exit path (success, chat
//! failure) lands back in Idle. All mutation is whole-value replacement, so
//! renders never observe a half-updated transcript.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

/// Fixed assistant reply substituted when the chat call fails.
pub const CHAT_FALLBACK_MESSAGE: &str =
    "I'm sorry, I'm having trouble connecting right now. Could you try again?";

/// Where the current turn is in its lifecycle. Anything other than `Idle`
/// rejects new submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    #[default]
    Idle,
    /// User message appended, chat request not yet answering.
    Dispatching,
    /// Assistant placeholder appended, fragments arriving.
    Streaming,
}

/// A single transcript entry. Roles are the wire strings
/// (`"user"` / `"assistant"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: String,
    pub content: String,
}

#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    pub messages: Vec<ChatMessage>,
    pub phase: TurnPhase,
    last_id_ms: u64,
}

impl ConversationState {
    /// A turn is in flight; submissions are rejected until it settles.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != TurnPhase::Idle
    }

    /// Begin a turn: append the trimmed user message and return the
    /// transcript to send. Returns `None` when the input is blank or a turn
    /// is already in flight.
    pub fn begin_turn(&mut self, input: &str, now_ms: u64) -> Option<Vec<ChatMessage>> {
        let text = input.trim();
        if text.is_empty() || self.is_busy() {
            return None;
        }
        let id = self.next_id(now_ms);
        self.messages.push(ChatMessage { id, role: "user".to_owned(), content: text.to_owned() });
        self.phase = TurnPhase::Dispatching;
        Some(self.messages.clone())
    }

    /// The chat request answered: append the empty assistant placeholder
    /// that streamed text will replace.
    pub fn begin_stream(&mut self, now_ms: u64) {
        let id = self.next_id(now_ms);
        self.messages
            .push(ChatMessage { id, role: "assistant".to_owned(), content: String::new() });
        self.phase = TurnPhase::Streaming;
    }

    /// Replace the streaming placeholder's content with the latest
    /// cumulative text. No-op if the last message is not an assistant one.
    pub fn apply_assistant_text(&mut self, cumulative: &str) {
        if let Some(last) = self.messages.last_mut() {
            if last.role == "assistant" {
                last.content = cumulative.to_owned();
            }
        }
    }

    /// End a successful turn; returns the conversation text used as the
    /// member match query.
    pub fn finish_turn(&mut self) -> String {
        self.phase = TurnPhase::Idle;
        self.conversation_text()
    }

    /// End a failed turn: append the fixed fallback reply and settle.
    pub fn fail_turn(&mut self, now_ms: u64) {
        let id = self.next_id(now_ms);
        self.messages.push(ChatMessage {
            id,
            role: "assistant".to_owned(),
            content: CHAT_FALLBACK_MESSAGE.to_owned(),
        });
        self.phase = TurnPhase::Idle;
    }

    /// All message contents in display order, joined by a single space.
    #[must_use]
    pub fn conversation_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Timestamp-derived ids, bumped past the last one when two messages
    /// land on the same millisecond.
    fn next_id(&mut self, now_ms: u64) -> String {
        self.last_id_ms = now_ms.max(self.last_id_ms + 1);
        self.last_id_ms.to_string()
    }
}

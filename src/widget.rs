//! The chat widget, independent of any UI framework.
//!
//! A [`ChatWidget`] is handed its three collaborators explicitly: the text
//! input it reads from, the log it renders into, and the backend it asks for
//! replies. Views wire both the send button and the Enter key to
//! [`ChatWidget::submit`].
//!
//! Submissions are not serialized. Each one renders its own user entry and
//! later its own reply, so two sends in flight may have their replies land in
//! completion order rather than request order.

use crate::client::ChatBackend;
use crate::error::RequestFailed;
use crate::types::{FALLBACK_TEXT, Message, Sender};

/// Append-only list of rendered entries.
pub trait MessageLog {
    fn append(&self, message: Message);

    /// Bring the newest entry into view.
    fn scroll_to_newest(&self) {}
}

/// The editable field the user types into.
pub trait TextInput {
    fn value(&self) -> String;
    fn clear(&self);
}

/// What a call to [`ChatWidget::submit`] ended up doing.
#[derive(Debug)]
pub enum Submission {
    /// The trimmed input was empty; nothing was rendered or sent.
    Ignored,
    /// The endpoint answered and its reply was rendered.
    Replied,
    /// The exchange failed and the fallback text was rendered.
    Failed(RequestFailed),
}

#[derive(Clone)]
pub struct ChatWidget<I, L, B> {
    input: I,
    log: L,
    backend: B,
}

impl<I, L, B> ChatWidget<I, L, B>
where
    I: TextInput,
    L: MessageLog,
    B: ChatBackend,
{
    pub fn new(input: I, log: L, backend: B) -> Self {
        Self {
            input,
            log,
            backend,
        }
    }

    /// Read the input, clear it and render it as a user entry.
    ///
    /// Returns the trimmed text, or `None` when there was nothing to send.
    pub fn take_input(&self) -> Option<String> {
        let text = self.input.value().trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input.clear();
        self.render(text.clone(), Sender::User);
        Some(text)
    }

    /// Ask the backend about `text` and render whatever comes back.
    pub async fn reply_to(&self, text: &str) -> Submission {
        match self.backend.send(text).await {
            Ok(reply) => {
                self.render(reply, Sender::Ai);
                Submission::Replied
            }
            Err(err) => {
                tracing::error!(error = %err, "chat exchange failed");
                self.render(FALLBACK_TEXT, Sender::Ai);
                Submission::Failed(err)
            }
        }
    }

    pub async fn submit(&self) -> Submission {
        match self.take_input() {
            Some(text) => self.reply_to(&text).await,
            None => Submission::Ignored,
        }
    }

    pub fn render(&self, text: impl Into<String>, sender: Sender) {
        self.log.append(Message::new(text, sender));
        self.log.scroll_to_newest();
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

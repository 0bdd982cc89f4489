use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

/// Rendered in place of a reply whenever an exchange with the endpoint fails.
pub const FALLBACK_TEXT: &str = "Sorry, I encountered an error. Please try again.";

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// CSS class distinguishing the two kinds of entry in the log.
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Ai => "ai-message",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub created_at: OffsetDateTime,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Local wall-clock time of the entry, or UTC when the offset is unknown.
    pub fn timestamp_label(&self) -> Option<String> {
        let mut datetime = self.created_at;
        if let Ok(offset) = UtcOffset::current_local_offset() {
            datetime = datetime.to_offset(offset);
        }
        datetime.format(MESSAGE_TIME_FORMAT).ok()
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body the endpoint sends alongside a 4xx/5xx status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

//! Shared in-memory fakes for the widget's collaborators.
#![allow(dead_code)]

use async_trait::async_trait;
use confidant::error::RequestResult;
use confidant::{ChatBackend, ChatWidget, Message, MessageLog, RequestFailed, Sender, TextInput};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct RecordingLog {
    messages: Arc<Mutex<Vec<Message>>>,
    scrolls: Arc<AtomicUsize>,
}

impl RecordingLog {
    pub fn entries(&self) -> Vec<(Sender, String)> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|msg| (msg.sender, msg.text.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl MessageLog for RecordingLog {
    fn append(&self, message: Message) {
        self.messages.lock().unwrap().push(message);
    }

    fn scroll_to_newest(&self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
pub struct Field(Arc<Mutex<String>>);

impl Field {
    pub fn type_text(&self, text: &str) {
        *self.0.lock().unwrap() = text.to_string();
    }
}

impl TextInput for Field {
    fn value(&self) -> String {
        self.0.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Answers every message with a fixed result and records what the widget
/// looked like at the moment the request went out.
#[derive(Clone)]
pub struct ScriptedBackend {
    reply: Result<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
    seen: Arc<Mutex<Vec<(usize, String)>>>,
    log: RecordingLog,
    field: Field,
}

impl ScriptedBackend {
    pub fn replying(reply: &str, log: &RecordingLog, field: &Field) -> Self {
        Self::with_result(Ok(reply.to_string()), log, field)
    }

    pub fn failing(reason: &str, log: &RecordingLog, field: &Field) -> Self {
        Self::with_result(Err(reason.to_string()), log, field)
    }

    fn with_result(reply: Result<String, String>, log: &RecordingLog, field: &Field) -> Self {
        Self {
            reply,
            calls: Arc::default(),
            seen: Arc::default(),
            log: log.clone(),
            field: field.clone(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// `(log length, input value)` observed at each send.
    pub fn seen(&self) -> Vec<(usize, String)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send(&self, message: &str) -> RequestResult<String> {
        self.calls.lock().unwrap().push(message.to_string());
        self.seen
            .lock()
            .unwrap()
            .push((self.log.len(), self.field.value()));
        self.reply.clone().map_err(RequestFailed::new)
    }
}

pub fn widget_with<B: ChatBackend>(
    field: &Field,
    log: &RecordingLog,
    backend: B,
) -> ChatWidget<Field, RecordingLog, B> {
    ChatWidget::new(field.clone(), log.clone(), backend)
}

use crate::client::HttpBackend;
use crate::config::ChatConfig;
use crate::types::Message;
use crate::widget::{ChatWidget, MessageLog, TextInput};
use dioxus::events::Key;
use dioxus::prelude::*;

const CHAT_CSS: Asset = asset!("/assets/chat.css");

/// Waits a frame so the freshly appended entry has been laid out.
const SCROLL_TO_NEWEST: &str = r#"
requestAnimationFrame(() => {
    const chatBox = document.getElementById('chat-box');
    if (chatBox) {
        chatBox.scrollTop = chatBox.scrollHeight;
    }
});
"#;

type SignalChatWidget = ChatWidget<Signal<String>, ChatLog, HttpBackend>;

/// Message log backed by a signal; the view re-renders on every append.
#[derive(Clone, Copy)]
pub struct ChatLog {
    messages: Signal<Vec<Message>>,
}

impl ChatLog {
    pub fn new(messages: Signal<Vec<Message>>) -> Self {
        Self { messages }
    }
}

impl MessageLog for ChatLog {
    fn append(&self, message: Message) {
        let mut messages = self.messages;
        messages.with_mut(|msgs| msgs.push(message));
    }

    fn scroll_to_newest(&self) {
        let _ = document::eval(SCROLL_TO_NEWEST);
    }
}

impl TextInput for Signal<String> {
    fn value(&self) -> String {
        self.read().clone()
    }

    fn clear(&self) {
        let mut input = *self;
        input.set(String::new());
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CHAT_CSS }
        document::Title { "Confidant" }
        div { class: "chat-container",
            div { class: "chat-header",
                h1 { "Confidant" }
            }
            ChatBox {}
        }
    }
}

/// Enter submits, except while an IME composition is being confirmed.
fn is_submit_key(key: &Key, composing: bool) -> bool {
    *key == Key::Enter && !composing
}

/// Shared by the send button and the Enter key.
///
/// Reading, clearing and the user entry happen inside the event handler; only
/// the network exchange is spawned.
fn send_from_input(widget: &SignalChatWidget) {
    let Some(text) = widget.take_input() else {
        return;
    };
    let widget = widget.clone();
    spawn(async move {
        // Failures are already logged and rendered as the fallback entry
        let _ = widget.reply_to(&text).await;
    });
}

#[component]
fn ChatBox() -> Element {
    let config = use_context::<ChatConfig>();
    let mut input = use_signal(String::new);
    let messages = use_signal(Vec::<Message>::new);
    let widget = use_hook(|| {
        ChatWidget::new(
            input,
            ChatLog::new(messages),
            HttpBackend::from_config(&config),
        )
    });

    let on_click = {
        let widget = widget.clone();
        move |_: MouseEvent| send_from_input(&widget)
    };
    let on_keydown = move |ev: KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            send_from_input(&widget);
        }
    };

    rsx! {
        MessageList { entries: messages() }
        div { class: "input-area",
            input {
                id: "user-input",
                r#type: "text",
                placeholder: "Type your message...",
                autocomplete: "off",
                autofocus: true,
                value: "{input}",
                oninput: move |ev| input.set(ev.value()),
                onkeydown: on_keydown,
            }
            button { id: "send-btn", r#type: "button", onclick: on_click, "Send" }
        }
    }
}

#[component]
fn MessageList(entries: Vec<Message>) -> Element {
    rsx! {
        div { id: "chat-box", class: "chat-box",
            for (i, msg) in entries.into_iter().enumerate() {
                MessageEntry { key: "{i}", message: msg }
            }
        }
    }
}

#[component]
fn MessageEntry(message: Message) -> Element {
    rsx! {
        div { class: format_args!("message {}", message.sender.css_class()),
            div { class: "message-content", "{message.text}" }
            if let Some(ts) = message.timestamp_label() {
                span { class: "message-timestamp", "{ts}" }
            }
        }
    }
}

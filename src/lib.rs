pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod widget;

#[cfg(feature = "dioxus")]
pub mod ui;

pub use client::{ChatBackend, HttpBackend};
pub use config::ChatConfig;
pub use error::RequestFailed;
pub use types::{FALLBACK_TEXT, Message, Sender};
pub use widget::{ChatWidget, MessageLog, Submission, TextInput};

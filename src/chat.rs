use crate::entity::RecipientId;
use serde::Serialize;

/// Fixed tag attached to every outbound message.
pub const MESSAGE_METADATA: &str = "DEVELOPER_DEFINED_METADATA";

/// Every reply is a regular push notification.
pub const NOTIFICATION_TYPE: &str = "REGULAR";

/// A tappable button shown under a message.
///
/// Serializes to the Send API shape, e.g.
/// `{"content_type":"text","title":"Yes","payload":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum QuickReply {
    Text { title: String, payload: String },
    Location,
}

impl QuickReply {
    pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
        QuickReply::Text {
            title: title.into(),
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            QuickReply::Text { payload, .. } => Some(payload),
            QuickReply::Location => None,
        }
    }
}

/// One reply produced by the conversation logic, before it hits the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text. Long bodies are split by the outbound adapter.
    Text(String),
    /// Text followed by a quick-reply menu. Never split.
    Menu {
        text: String,
        options: Vec<QuickReply>,
    },
}

impl Reply {
    pub fn text(body: impl Into<String>) -> Self {
        Reply::Text(body.into())
    }

    /// Builds a menu from `(label, payload)` pairs.
    pub fn menu(text: impl Into<String>, options: &[(&str, &str)]) -> Self {
        Reply::Menu {
            text: text.into(),
            options: options
                .iter()
                .map(|(title, payload)| QuickReply::text(*title, *payload))
                .collect(),
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Reply::Text(text) | Reply::Menu { text, .. } => text,
        }
    }
}

/// A single Send API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub recipient: RecipientId,
    pub text: String,
    pub quick_replies: Vec<QuickReply>,
}

impl OutboundMessage {
    pub fn new(recipient: RecipientId, text: impl Into<String>) -> Self {
        Self {
            recipient,
            text: text.into(),
            quick_replies: Vec::new(),
        }
    }

    pub fn with_quick_replies(mut self, quick_replies: Vec<QuickReply>) -> Self {
        self.quick_replies = quick_replies;
        self
    }
}

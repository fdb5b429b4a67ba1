use crate::entity::RecipientId;
use chrono::{DateTime, Utc};

/// Everything the webhook can deliver for one `messaging` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// A typed message
    Text {
        sender: RecipientId,
        message_id: String,
        text: String,
        timestamp: Option<DateTime<Utc>>,
    },

    /// A tapped quick-reply button; the payload is handled as if typed
    QuickReply {
        sender: RecipientId,
        message_id: String,
        payload: String,
    },

    Attachment {
        sender: RecipientId,
        message_id: String,
        attachments: Vec<Attachment>,
        timestamp: Option<DateTime<Utc>>,
    },

    Postback {
        sender: RecipientId,
        recipient: RecipientId,
        payload: String,
        timestamp: Option<DateTime<Utc>>,
    },

    /// "Send to Messenger" plugin authentication
    OptIn {
        sender: RecipientId,
        recipient: RecipientId,
        pass_through: Option<String>,
        timestamp: Option<DateTime<Utc>>,
    },

    AccountLinking {
        sender: RecipientId,
        status: String,
        authorization_code: Option<String>,
    },

    /// Copy of a message the page itself sent
    Echo {
        sender: RecipientId,
        recipient: RecipientId,
        message_id: String,
        timestamp: Option<DateTime<Utc>>,
    },

    Delivered {
        sender: RecipientId,
        message_ids: Vec<String>,
        watermark: Option<DateTime<Utc>>,
    },

    Read {
        sender: RecipientId,
        watermark: Option<DateTime<Utc>>,
    },

    /// Anything we have no handler for
    Fallback { sender: RecipientId },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub kind: String,
    pub payload: AttachmentPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentPayload {
    Binary { url: String },
    Location { lat: f64, long: f64 },
    Other,
}

impl std::fmt::Display for AttachmentPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentPayload::Binary { url } => f.write_str(url),
            AttachmentPayload::Location { lat, long } => write!(f, "({}, {})", lat, long),
            AttachmentPayload::Other => f.write_str("-"),
        }
    }
}

impl InboundEvent {
    pub fn sender(&self) -> &RecipientId {
        match self {
            InboundEvent::Text { sender, .. }
            | InboundEvent::QuickReply { sender, .. }
            | InboundEvent::Attachment { sender, .. }
            | InboundEvent::Postback { sender, .. }
            | InboundEvent::OptIn { sender, .. }
            | InboundEvent::AccountLinking { sender, .. }
            | InboundEvent::Echo { sender, .. }
            | InboundEvent::Delivered { sender, .. }
            | InboundEvent::Read { sender, .. }
            | InboundEvent::Fallback { sender } => sender,
        }
    }

    /// The text the conversation router should see, if this event carries one.
    ///
    /// Typed text and quick-reply payloads look the same from here on.
    pub fn conversation_text(&self) -> Option<&str> {
        match self {
            InboundEvent::Text { text, .. } => Some(text),
            InboundEvent::QuickReply { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

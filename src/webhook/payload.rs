use crate::{
    entity::RecipientId,
    event::{Attachment, AttachmentPayload, InboundEvent},
};
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use serde::Deserialize;

// -----------------------------------------------------------------------------
// Wire types
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Callback {
    object: String,
    #[serde(default)]
    entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    messaging: Vec<Messaging>,
}

#[derive(Debug, Deserialize)]
struct Party {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Messaging {
    sender: Party,
    recipient: Option<Party>,
    timestamp: Option<i64>,
    message: Option<Message>,
    optin: Option<OptIn>,
    postback: Option<Postback>,
    delivery: Option<Delivery>,
    read: Option<Read>,
    account_linking: Option<AccountLinking>,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    mid: String,
    text: Option<String>,
    #[serde(default)]
    is_echo: bool,
    quick_reply: Option<QuickReplyPayload>,
    #[serde(default)]
    attachments: Vec<RawAttachment>,
}

#[derive(Debug, Deserialize)]
struct QuickReplyPayload {
    payload: String,
}

#[derive(Debug, Deserialize)]
struct RawAttachment {
    #[serde(rename = "type")]
    kind: String,
    payload: Option<RawAttachmentPayload>,
}

#[derive(Debug, Deserialize)]
struct RawAttachmentPayload {
    url: Option<String>,
    coordinates: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
struct Coordinates {
    lat: f64,
    long: f64,
}

#[derive(Debug, Deserialize)]
struct OptIn {
    #[serde(rename = "ref")]
    pass_through: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Postback {
    #[serde(default)]
    payload: String,
}

#[derive(Debug, Deserialize)]
struct Delivery {
    #[serde(default)]
    mids: Vec<String>,
    watermark: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Read {
    watermark: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct AccountLinking {
    status: String,
    authorization_code: Option<String>,
}

// -----------------------------------------------------------------------------
// Decoding
// -----------------------------------------------------------------------------

/// Decodes a callback body into events, in delivery order.
pub fn parse_callback(body: &[u8]) -> anyhow::Result<Vec<InboundEvent>> {
    let callback: Callback =
        serde_json::from_slice(body).context("Callback body is not a valid page payload")?;

    if callback.object != "page" {
        bail!("Unsupported callback object '{}'", callback.object);
    }

    Ok(callback
        .entry
        .into_iter()
        .flat_map(|entry| entry.messaging)
        .map(classify)
        .collect())
}

fn millis(ms: Option<i64>) -> Option<DateTime<Utc>> {
    ms.and_then(DateTime::from_timestamp_millis)
}

fn classify(messaging: Messaging) -> InboundEvent {
    let sender = RecipientId::new(messaging.sender.id);
    let recipient = RecipientId::new(messaging.recipient.map(|r| r.id).unwrap_or_default());
    let timestamp = millis(messaging.timestamp);

    if let Some(message) = messaging.message {
        return classify_message(sender, recipient, timestamp, message);
    }

    if let Some(optin) = messaging.optin {
        return InboundEvent::OptIn {
            sender,
            recipient,
            pass_through: optin.pass_through,
            timestamp,
        };
    }
    if let Some(postback) = messaging.postback {
        return InboundEvent::Postback {
            sender,
            recipient,
            payload: postback.payload,
            timestamp,
        };
    }
    if let Some(delivery) = messaging.delivery {
        return InboundEvent::Delivered {
            sender,
            message_ids: delivery.mids,
            watermark: millis(delivery.watermark),
        };
    }
    if let Some(read) = messaging.read {
        return InboundEvent::Read {
            sender,
            watermark: millis(read.watermark),
        };
    }
    if let Some(linking) = messaging.account_linking {
        return InboundEvent::AccountLinking {
            sender,
            status: linking.status,
            authorization_code: linking.authorization_code,
        };
    }

    InboundEvent::Fallback { sender }
}

fn classify_message(
    sender: RecipientId,
    recipient: RecipientId,
    timestamp: Option<DateTime<Utc>>,
    message: Message,
) -> InboundEvent {
    if message.is_echo {
        return InboundEvent::Echo {
            sender,
            recipient,
            message_id: message.mid,
            timestamp,
        };
    }
    if let Some(quick_reply) = message.quick_reply {
        return InboundEvent::QuickReply {
            sender,
            message_id: message.mid,
            payload: quick_reply.payload,
        };
    }
    if let Some(text) = message.text {
        return InboundEvent::Text {
            sender,
            message_id: message.mid,
            text,
            timestamp,
        };
    }
    if !message.attachments.is_empty() {
        let attachments = message
            .attachments
            .into_iter()
            .map(|a| Attachment {
                kind: a.kind,
                payload: match a.payload {
                    Some(RawAttachmentPayload {
                        coordinates: Some(c),
                        ..
                    }) => AttachmentPayload::Location {
                        lat: c.lat,
                        long: c.long,
                    },
                    Some(RawAttachmentPayload { url: Some(url), .. }) => {
                        AttachmentPayload::Binary { url }
                    }
                    _ => AttachmentPayload::Other,
                },
            })
            .collect();
        return InboundEvent::Attachment {
            sender,
            message_id: message.mid,
            attachments,
            timestamp,
        };
    }

    InboundEvent::Fallback { sender }
}

use crate::{
    chat::{OutboundMessage, QuickReply, Reply},
    entity::RecipientId,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

/// Longest text the Send API reliably accepts in one message.
pub const MAX_TEXT_LEN: usize = 298;

const SENTENCE_BREAK: &str = ". ";

/// Something that can deliver one message to the platform.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()>;
}

/// Result of fitting a body into the length cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Send(String),
    /// Over the cap and nowhere to cut.
    Drop(String),
}

/// Cuts `body` at sentence breaks until every piece fits, keeping order.
///
/// Each cut piece gets its full stop back. Trailing empty pieces are
/// discarded before counting, so `"abc. "` is one piece, not two.
pub fn split_text(body: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    fit(body, &mut pieces);
    pieces
}

fn fit(body: &str, out: &mut Vec<Piece>) {
    if body.chars().count() <= MAX_TEXT_LEN {
        out.push(Piece::Send(body.to_string()));
        return;
    }

    let mut parts: Vec<&str> = body.split(SENTENCE_BREAK).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    if parts.len() <= 1 {
        out.push(Piece::Drop(body.to_string()));
        return;
    }

    for part in parts {
        fit(&format!("{}.", part), out);
    }
}

/// Sends replies through a [`Messenger`], logging and dropping failures.
#[derive(Clone)]
pub struct Outbound {
    messenger: Arc<dyn Messenger>,
}

impl Outbound {
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self { messenger }
    }

    pub async fn send_text(&self, recipient: &RecipientId, body: &str) {
        for piece in split_text(body) {
            match piece {
                Piece::Send(text) => {
                    self.deliver(OutboundMessage::new(recipient.clone(), text))
                        .await
                }
                Piece::Drop(text) => error!(
                    "Message to '{}' is too long to send and has no sentence break: {}",
                    recipient, text
                ),
            }
        }
    }

    /// Sends `body` unsplit, with a location button after `quick_replies`.
    pub async fn send_text_with_quick_replies(
        &self,
        recipient: &RecipientId,
        body: &str,
        quick_replies: &[QuickReply],
    ) {
        debug!(
            "Offering '{}' quick replies: {:?}",
            recipient,
            quick_replies
                .iter()
                .filter_map(QuickReply::payload)
                .collect::<Vec<_>>()
        );
        let mut buttons = quick_replies.to_vec();
        buttons.push(QuickReply::Location);
        let message = OutboundMessage::new(recipient.clone(), body).with_quick_replies(buttons);
        self.deliver(message).await;
    }

    pub async fn dispatch(&self, recipient: &RecipientId, replies: &[Reply]) {
        for reply in replies {
            match reply {
                Reply::Text(text) => self.send_text(recipient, text).await,
                Reply::Menu { text, options } => {
                    self.send_text_with_quick_replies(recipient, text, options)
                        .await
                }
            }
        }
    }

    async fn deliver(&self, message: OutboundMessage) {
        if let Err(e) = self.messenger.send(&message).await {
            error!(
                "Failed to send message to '{}': {:#}. Text: {}",
                message.recipient, e, message.text
            );
        }
    }
}

use crate::{event::InboundEvent, interface::messenger::Outbound, talk::router::Router};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

fn when(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "unknown time".to_string())
}

/// Handles one decoded callback event to completion.
pub async fn handle_event(router: &Router, outbound: &Outbound, event: InboundEvent) {
    debug!("Received {:?}", event);

    match &event {
        InboundEvent::Text {
            sender,
            message_id,
            text,
            timestamp,
        } => {
            info!(
                "Received message '{}' with text '{}' from user '{}' at '{}'",
                message_id,
                text,
                sender,
                when(*timestamp)
            );
        }

        InboundEvent::QuickReply {
            sender,
            message_id,
            payload,
        } => {
            info!(
                "Received quick reply for message '{}' from user '{}' with payload '{}'",
                message_id, sender, payload
            );
        }

        InboundEvent::Attachment {
            sender,
            message_id,
            attachments,
            timestamp,
        } => {
            info!(
                "Received message '{}' with attachments from user '{}' at '{}':",
                message_id,
                sender,
                when(*timestamp)
            );
            for attachment in attachments {
                info!(
                    "Attachment of type '{}' with payload '{}'",
                    attachment.kind, attachment.payload
                );
            }
            outbound
                .send_text(sender, "Message with attachment received")
                .await;
        }

        InboundEvent::Postback {
            sender,
            recipient,
            payload,
            timestamp,
        } => {
            info!(
                "Received postback for user '{}' and page '{}' with payload '{}' at '{}'",
                sender,
                recipient,
                payload,
                when(*timestamp)
            );
            outbound.send_text(sender, "Postback called").await;
        }

        InboundEvent::OptIn {
            sender,
            recipient,
            pass_through,
            timestamp,
        } => {
            info!(
                "Received authentication for user '{}' and page '{}' with pass through param '{}' at '{}'",
                sender,
                recipient,
                pass_through.as_deref().unwrap_or_default(),
                when(*timestamp)
            );
            outbound.send_text(sender, "Authentication successful").await;
        }

        InboundEvent::AccountLinking {
            sender,
            status,
            authorization_code,
        } => {
            info!(
                "Received account linking event for user '{}' with status '{}' and auth code '{}'",
                sender,
                status,
                authorization_code.as_deref().unwrap_or_default()
            );
        }

        InboundEvent::Echo {
            sender,
            recipient,
            message_id,
            timestamp,
        } => {
            info!(
                "Received echo for message '{}' that has been sent to recipient '{}' by sender '{}' at '{}'",
                message_id,
                recipient,
                sender,
                when(*timestamp)
            );
        }

        InboundEvent::Delivered {
            sender,
            message_ids,
            watermark,
        } => {
            for message_id in message_ids {
                info!("Received delivery confirmation for message '{}'", message_id);
            }
            info!(
                "All messages to '{}' before '{}' were delivered",
                sender,
                when(*watermark)
            );
        }

        InboundEvent::Read { sender, watermark } => {
            info!(
                "All messages to '{}' before '{}' were read",
                sender,
                when(*watermark)
            );
        }

        InboundEvent::Fallback { sender } => {
            info!("Received unsupported message from user '{}'", sender);
        }
    }

    if let Some(text) = event.conversation_text() {
        router.route(event.sender(), text).await;
    }
}

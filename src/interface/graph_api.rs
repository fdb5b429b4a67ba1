use crate::{
    chat::{OutboundMessage, QuickReply, MESSAGE_METADATA, NOTIFICATION_TYPE},
    interface::messenger::Messenger,
};
use anyhow::{bail, Context};
use async_trait::async_trait;
use serde::Serialize;
use std::{fmt, time::Duration};
use tracing::debug;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    recipient: Recipient<'a>,
    message: MessageBody<'a>,
    notification_type: &'static str,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct MessageBody<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "no_buttons")]
    quick_replies: &'a [QuickReply],
    metadata: &'static str,
}

fn no_buttons(quick_replies: &&[QuickReply]) -> bool {
    quick_replies.is_empty()
}

impl<'a> From<&'a OutboundMessage> for SendRequest<'a> {
    fn from(message: &'a OutboundMessage) -> Self {
        Self {
            recipient: Recipient {
                id: message.recipient.as_str(),
            },
            message: MessageBody {
                text: &message.text,
                quick_replies: &message.quick_replies,
                metadata: MESSAGE_METADATA,
            },
            notification_type: NOTIFICATION_TYPE,
        }
    }
}

/// Messenger Send API over HTTPS.
pub struct GraphApiClient {
    http: reqwest::Client,
    url: String,
    access_token: String,
}

impl GraphApiClient {
    pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build Send API client")?;

        Ok(Self {
            http,
            url: url.into(),
            access_token: access_token.into(),
        })
    }
}

impl fmt::Debug for GraphApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphApiClient")
            .field("url", &self.url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Messenger for GraphApiClient {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        let response = self
            .http
            .post(&self.url)
            .query(&[("access_token", self.access_token.as_str())])
            .json(&SendRequest::from(message))
            .send()
            .await
            .with_context(|| format!("Send API request to '{}' failed", message.recipient))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Send API returned {}: {}", status, body);
        }

        debug!("Delivered message to '{}'", message.recipient);
        Ok(())
    }
}

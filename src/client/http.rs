use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{ClientError, ClientResult, EventSource};
use crate::domain::Event;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug)]
pub struct HttpEventClient {
    client: Client,
    base_url: Url,
}

impl HttpEventClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid api url {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "invalid api url {}: not a base url",
                base_url
            )));
        }

        // GitHub rejects requests that carry no User-Agent.
        let mut builder =
            Client::builder().user_agent(concat!("gh-activity/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build http client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn events_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["users", username, "events"]);
        }
        url
    }
}

/// Maps a status code onto the error it stands for, if any. 404 is checked
/// before the wider 4xx range.
pub fn classify_status(status: u16) -> Option<ClientError> {
    match status {
        404 => Some(ClientError::NotFound),
        400..=499 => Some(ClientError::ClientStatus(status)),
        500..=599 => Some(ClientError::ServerStatus(status)),
        _ => None,
    }
}

pub fn decode_events(body: &[u8]) -> ClientResult<Vec<Event>> {
    serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl EventSource for HttpEventClient {
    async fn list_user_events(&self, username: &str) -> ClientResult<Vec<Event>> {
        let url = self.events_url(username);
        tracing::info!("GET {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", url, e);
            ClientError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        tracing::debug!("{} responded with {}", url, status);
        if let Some(err) = classify_status(status) {
            tracing::warn!("{} rejected: {}", url, err);
            return Err(err);
        }

        // Consumes the response, releasing the connection whether or not the
        // body decodes.
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let events = decode_events(&body)?;
        tracing::info!("Decoded {} events for {}", events.len(), username);
        Ok(events)
    }
}

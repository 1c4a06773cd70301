use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Event;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Transport(String),
    #[error("username not found")]
    NotFound,
    #[error("client error")]
    ClientStatus(u16),
    #[error("server error")]
    ServerStatus(u16),
    #[error("failed to decode events: {0}")]
    Decode(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[async_trait]
pub trait EventSource: Send + Sync {
    /// Most recent public events for `username`, newest first.
    async fn list_user_events(&self, username: &str) -> ClientResult<Vec<Event>>;
}

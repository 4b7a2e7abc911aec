//! Remote collaborator contract for a study session.
//!
//! The wizard only ever talks to the service through [`StudyApi`], so tests
//! can drive it with an in-memory implementation and the binary can plug in
//! the HTTP client from [`crate::api`].

use crate::token::RedemptionRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a [`StudyApi`] implementation.
///
/// A structured rejection (`success: false`) is *not* an error; it comes back
/// as a [`SubmitResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// The topic handed out for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub topic_id: String,
    pub topic_title: String,
    #[serde(default)]
    pub topic_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub translation: String,
}

#[async_trait]
pub trait StudyApi: Send + Sync {
    async fn get_topic(&self) -> Result<Topic, ApiError>;

    async fn send_japanese(&self, text: &str) -> Result<SubmitResponse, ApiError>;

    async fn send_english(&self, text: &str) -> Result<SubmitResponse, ApiError>;

    /// Model English rendering of `source_text`, written for `topic_title`.
    async fn translate(&self, source_text: &str, topic_title: &str)
        -> Result<Translation, ApiError>;

    /// Fire-and-forget notification that a session on `topic_id` concluded.
    async fn end_study(&self, topic_id: &str) -> Result<(), ApiError>;

    /// Redemption requests of the signed-in user, newest first.
    async fn token_requests(&self) -> Result<Vec<RedemptionRequest>, ApiError>;
}

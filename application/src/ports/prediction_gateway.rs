//! Prediction Gateway port
//!
//! Defines the interface for talking to the external prediction service.

use async_trait::async_trait;
use hike_domain::{PredictionId, PredictionReply, PredictionRequest, Sentiment};
use thiserror::Error;

/// Errors that can occur during prediction gateway operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// HTTP status code, if the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Gateway to the prediction service
///
/// This port defines how the application layer reaches the service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Submit a profile and receive the service's JSON reply
    ///
    /// Adapters only check that the reply was a 2xx JSON body; whether it
    /// is a usable forecast is decided by the caller.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionReply, GatewayError>;

    /// Record whether the user liked the prediction identified by `id`
    async fn send_feedback(&self, id: &PredictionId, sentiment: Sentiment)
    -> Result<(), GatewayError>;
}

//! [`PredictionGateway`] over HTTP
//!
//! - `POST {base_url}` with the request payload; any 2xx JSON body comes back
//!   as a [`PredictionReply`]
//! - `PATCH {base_url}/predictions/{id}/feedback` with `{"liked": bool}`
//!
//! Any non-2xx status is an error. No retries.

use async_trait::async_trait;
use hike_application::{GatewayError, PredictionGateway};
use hike_domain::{PredictionId, PredictionReply, PredictionRequest, Sentiment};
use reqwest::{Client, Response, Url};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Maximum number of response body bytes echoed into error messages
const MAX_ERROR_BODY: usize = 512;

const USER_AGENT: &str = concat!("hike-predictor/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the prediction service
pub struct HttpPredictionGateway {
    client: Client,
    base_url: Url,
}

impl HttpPredictionGateway {
    /// Create a gateway for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GatewayError::Other(format!("Invalid base URL {:?}: {}", base_url, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/predictions/{id}/feedback`, with `id` encoded as a path segment
    pub fn feedback_url(&self, id: &PredictionId) -> Result<Url, GatewayError> {
        let id = id.to_string();
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Other(format!("Base URL cannot have paths: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["predictions", id.as_str(), "feedback"]);
        Ok(url)
    }

    async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let body = match body.char_indices().nth(MAX_ERROR_BODY) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body,
        };
        Err(GatewayError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionReply, GatewayError> {
        debug!("POST {}", self.base_url);
        let response = self
            .client
            .post(self.base_url.clone())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let body = Self::ensure_success(response)
            .await?
            .bytes()
            .await
            .map_err(transport_error)?;

        serde_json::from_slice(&body)
            .map(PredictionReply::new)
            .map_err(|e| GatewayError::MalformedResponse(format!("body is not JSON: {}", e)))
    }

    async fn send_feedback(
        &self,
        id: &PredictionId,
        sentiment: Sentiment,
    ) -> Result<(), GatewayError> {
        let url = self.feedback_url(id)?;
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(url)
            .json(&json!({ "liked": sentiment.is_liked() }))
            .send()
            .await
            .map_err(transport_error)?;

        Self::ensure_success(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base: &str) -> HttpPredictionGateway {
        HttpPredictionGateway::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_feedback_url_appends_segments() {
        let url = gateway("http://localhost:8000/api")
            .feedback_url(&PredictionId::Number(12))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/predictions/12/feedback");
    }

    #[test]
    fn test_feedback_url_tolerates_trailing_slash() {
        let url = gateway("http://localhost:8000/api/")
            .feedback_url(&PredictionId::Number(1))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/predictions/1/feedback");
    }

    #[test]
    fn test_feedback_url_encodes_text_ids() {
        let url = gateway("http://localhost:8000")
            .feedback_url(&PredictionId::from("a/b c"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/predictions/a%2Fb%20c/feedback"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(HttpPredictionGateway::new("not a url", Duration::from_secs(1)).is_err());
    }
}

//! Like/dislike feedback on a prediction

use serde::{Deserialize, Serialize};

/// The user's reaction to a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Liked,
    Disliked,
}

impl Sentiment {
    /// Value of the `liked` flag sent to the service.
    pub fn is_liked(&self) -> bool {
        matches!(self, Sentiment::Liked)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Liked => "liked",
            Sentiment::Disliked => "disliked",
        }
    }
}

/// Feedback progress for the current prediction.
///
/// `Pending` and `Given` both block further submissions; a failed send
/// returns to `NotGiven` so the prompt can be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "sentiment", rename_all = "snake_case")]
pub enum FeedbackState {
    #[default]
    NotGiven,
    Pending(Sentiment),
    Given(Sentiment),
}

impl FeedbackState {
    pub fn accepts_feedback(&self) -> bool {
        matches!(self, FeedbackState::NotGiven)
    }
}

//! Endpoint construction and wire parsing for the problems backend.
//!
//! The base URL is fixed at build time but validated through `url`, so a
//! misconfigured override fails at construction instead of producing garbage
//! requests. All response parsing is fallible here and degraded by the caller.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::model::Problem;

pub const DEFAULT_BASE_URL: &str = "https://evolve-backend-nu.vercel.app";

/// Name and address stamped onto feedback submissions; the client has no
/// account system, so everything is sent as the anonymous sender.
pub const FEEDBACK_SENDER_NAME: &str = "Anonymous";
pub const FEEDBACK_SENDER_EMAIL: &str = "anonymous@evolve.com";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("response body is not a problem list: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Builder for the three backend endpoints the client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemsApi {
    base: Url,
}

impl Default for ProblemsApi {
    fn default() -> Self {
        // The constant is a known-valid absolute URL.
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }
}

impl ProblemsApi {
    pub fn new(base: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }

    /// `GET /api/problems` — the unfiltered list.
    #[must_use]
    pub fn problems_url(&self) -> Url {
        let mut url = self.base.clone();
        url.set_path("/api/problems");
        url
    }

    /// `GET /api/problems/category/<key>` — server-side category narrowing.
    /// The key is percent-encoded as a single path segment.
    #[must_use]
    pub fn category_url(&self, key: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path("/api/problems/category");
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(key);
        }
        url
    }

    /// The endpoint for the active category selection. Exactly one of the two
    /// list endpoints is used per fetch.
    #[must_use]
    pub fn listing_url(&self, selected_category: Option<&str>) -> Url {
        match selected_category {
            Some(key) => self.category_url(key),
            None => self.problems_url(),
        }
    }

    /// `POST /api/feedback`.
    #[must_use]
    pub fn feedback_url(&self) -> Url {
        let mut url = self.base.clone();
        url.set_path("/api/feedback");
        url
    }
}

/// Decodes a list-endpoint body. Both endpoints return the same shape, a bare
/// JSON array of problem records.
pub fn parse_problems(body: &[u8]) -> Result<Vec<Problem>, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackPayload {
    #[must_use]
    pub fn anonymous(message: impl Into<String>) -> Self {
        Self {
            name: FEEDBACK_SENDER_NAME.into(),
            email: FEEDBACK_SENDER_EMAIL.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}

//! Shared client core for the Evolve problem-discovery app.
//!
//! The core is a pure state machine: shells (web, iOS, Android) feed it
//! [`Event`]s, it updates the [`Model`], and asks for I/O through effects
//! (HTTP, key-value storage, render). No platform code lives here.
//!
//! Design rules the modules follow:
//! - Every remote or stored input is untrusted: bad bodies and corrupt
//!   storage degrade to empty state and a log line, they never crash a flow.
//! - Filtering and navigation are pure functions, tested without a shell.
//! - Bookmarks are full problem snapshots so saved content works offline.

use serde::{Deserialize, Serialize};

pub mod api;
pub mod app;
pub mod bookmarks;
pub mod capabilities;
pub mod event;
pub mod filter;
pub mod model;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use event::Event;
pub use model::Model;
pub use view::ViewModel;

/// Storage key holding the bookmark list as a JSON array of problem records.
pub const SAVED_PROBLEMS_KEY: &str = "savedProblems";
/// Storage key marking that the onboarding screen has been dismissed once.
pub const WELCOME_SEEN_KEY: &str = "evolve-welcome-seen";
/// Value written under [`WELCOME_SEEN_KEY`]; only presence is checked on read.
pub const WELCOME_SEEN_VALUE: &[u8] = b"true";

/// Upper bound on a feedback message; longer submissions are rejected as
/// invalid before any request is made.
pub const MAX_FEEDBACK_MESSAGE_LEN: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Transient,
    Permanent,
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Network,
    Timeout,
    Validation,
    NotFound,
    Storage,
    Deserialization,
    Internal,
    Unknown,
}

impl ErrorKind {
    /// Stable machine-readable code, safe to log and match on across
    /// releases.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Storage => "STORAGE_ERROR",
            Self::Deserialization => "DESERIALIZATION_ERROR",
            Self::Internal => "INTERNAL_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    #[must_use]
    pub const fn default_severity(self) -> ErrorSeverity {
        match self {
            Self::Network | Self::Timeout | Self::Storage => ErrorSeverity::Transient,
            Self::Deserialization | Self::Internal => ErrorSeverity::Fatal,
            Self::Validation | Self::NotFound | Self::Unknown => ErrorSeverity::Permanent,
        }
    }
}

/// The one error shape the core keeps on the model and surfaces to shells.
/// `message` is internal detail for logs; shells render
/// [`AppError::user_facing_message`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppError {
    pub kind: ErrorKind,
    pub severity: ErrorSeverity,
    pub message: String,
    pub internal_message: Option<String>,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            internal_message: None,
        }
    }

    #[must_use]
    pub fn with_internal(mut self, internal: impl Into<String>) -> Self {
        self.internal_message = Some(internal.into());
        self
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub fn user_facing_message(&self) -> String {
        match self.kind {
            ErrorKind::Network => {
                "Unable to connect. Please check your internet connection and try again.".into()
            }
            ErrorKind::Timeout => "The request timed out. Please try again.".into(),
            ErrorKind::Validation => self.message.clone(),
            ErrorKind::NotFound => "The requested item could not be found.".into(),
            ErrorKind::Storage => "Unable to save data on this device.".into(),
            ErrorKind::Deserialization => {
                "A data error occurred. Please contact support if this persists.".into()
            }
            ErrorKind::Internal | ErrorKind::Unknown => {
                "Something went wrong. Please try again.".into()
            }
        }
    }

    #[must_use]
    pub fn from_http_status(status: u16) -> Self {
        let kind = match status {
            400 => ErrorKind::Validation,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::Timeout,
            500..=599 => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        };
        Self::new(kind, format!("HTTP error: {status}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(internal) = &self.internal_message {
            write!(f, " (internal: {internal})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<api::ApiError> for AppError {
    fn from(error: api::ApiError) -> Self {
        let kind = match &error {
            api::ApiError::InvalidBaseUrl(_) => ErrorKind::Validation,
            api::ApiError::MalformedBody(_) => ErrorKind::Deserialization,
        };
        Self::new(kind, error.to_string())
    }
}

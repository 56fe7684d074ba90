//! Error types for the client core.
//!
//! # Design
//! `NotAuthorized` gets a dedicated variant so callers can distinguish "no
//! saved items" from "not allowed to query saved items" — an empty listing
//! and a refused request are different outcomes. `NotFound` is split out of
//! `HttpError` because an unknown subreddit or message box is the 404 callers
//! most often branch on. All other non-200 responses land in `HttpError`
//! with the raw status code and body; nothing is wrapped or retried.

use std::fmt;

/// Errors returned by `RedditClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// `saved` was called with no satisfied authentication branch: the
    /// session is not logged in (or has no user) and no cookie/user override
    /// was supplied. No request descriptor is produced.
    NotAuthorized,

    /// The server returned 404 — the subreddit, user, or message box does
    /// not exist.
    NotFound,

    /// The server returned a non-200 status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotAuthorized => {
                write!(f, "not authorized: login or supply cookie and user options")
            }
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

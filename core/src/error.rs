//! Error types for the expenses client.
//!
//! # Design
//! The error kind is decided where the failure happens (transport, status
//! check, JSON decoding, shape validation) instead of being inspected later.
//! The component only keeps the `Display` text, so the messages below are
//! what the user sees after `Error: `.

use thiserror::Error;

/// Message shown for any non-success HTTP status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch expenses";

/// Message shown when `transactions` is missing or not an array.
pub const INVALID_SHAPE_MESSAGE: &str = "Invalid API response: expected an array of transactions";

/// Fallback message when no better description exists.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Coarse grouping of `ApiError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request did not complete or the server answered with a non-2xx status.
    Network,
    /// The body arrived but did not match the expected structure.
    Shape,
    Unknown,
}

/// Errors produced while loading a page of transactions.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Failed to fetch expenses")]
    FetchFailed { status: u16 },

    /// The JSON body has no `transactions` array.
    #[error("Invalid API response: expected an array of transactions")]
    InvalidShape,

    /// The body is not JSON, or a transaction did not decode.
    #[error("{0}")]
    Deserialization(String),

    /// The transport could not complete the round-trip.
    #[error("{0}")]
    Transport(String),

    #[error("An unknown error occurred")]
    Unknown,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::FetchFailed { .. } | ApiError::Transport(_) => ErrorKind::Network,
            ApiError::InvalidShape | ApiError::Deserialization(_) => ErrorKind::Shape,
            ApiError::Unknown => ErrorKind::Unknown,
        }
    }

    /// Text stored in the fetch state. Never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Errors from the formatting helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("unrecognised date: {0}")]
    InvalidDate(String),
}

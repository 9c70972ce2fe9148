//! Application error types
//!
//! One enum per failure surface, so assertion code can branch on the kind
//! of failure instead of parsing messages.

use thiserror::Error;

use crate::ports::{InterceptorError, TransportError};
use crate::screenplay::MissingAbility;

/// Errors raised by `CallApi::send`.
#[derive(Debug, Clone, Error)]
pub enum SendError {
    /// No sender was configured before `send` was called.
    #[error("no request sender configured")]
    MissingSender,

    /// An interceptor failed while transforming the request.
    #[error(transparent)]
    Interceptor(#[from] InterceptorError),

    /// The sender failed to produce a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors raised while answering a response question.
#[derive(Debug, Clone, Error)]
pub enum QuestionError {
    /// The actor does not hold the required ability.
    #[error(transparent)]
    MissingAbility(#[from] MissingAbility),

    /// No response has been recorded yet.
    #[error("no response has been recorded yet")]
    NoResponseYet,

    /// The recorded body could not be decoded into the requested shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl QuestionError {
    /// Wraps a serde_json failure as a decoding error.
    #[must_use]
    pub fn decode(err: &serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Errors raised while an actor performs an interaction.
#[derive(Debug, Clone, Error)]
pub enum InteractionError {
    /// The actor does not hold the required ability.
    #[error(transparent)]
    MissingAbility(#[from] MissingAbility),

    /// The underlying send failed.
    #[error(transparent)]
    Send(#[from] SendError),
}

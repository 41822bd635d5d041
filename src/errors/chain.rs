// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::FieldError;
use thiserror::Error;

/// Default error type for chain handlers.
///
/// Handlers that need their own error type can parameterize the chain with it
/// instead; `Chain::run` returns whatever the failing handler returned.
#[derive(Error, Debug)]
pub enum ChainError {
    /// A field update was rejected and the handler chose to propagate it.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A handler reported a failure of its own.
    #[error("handler '{handler}' failed: {message}")]
    Handler { handler: String, message: String },

    /// Any other error surfaced by a handler.
    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ChainError {
    /// Convenience constructor for [`ChainError::Handler`].
    pub fn handler(handler: impl Into<String>, message: impl Into<String>) -> Self {
        ChainError::Handler {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Wrap an arbitrary error as [`ChainError::Other`].
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ChainError::Other(Box::new(err))
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for field-name updates of the context and result.

use crate::errors::{FieldError, Target};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A field update was applied.
///
/// # Log Level
/// `trace!` - Detailed per-step tracing
pub struct FieldUpdated<'a> {
    pub chain: &'a str,
    pub target: Target,
    pub field: &'a str,
    pub value_type: &'a str,
}

impl Display for FieldUpdated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain '{}' set {}.{} ({})",
            self.chain, self.target, self.field, self.value_type
        )
    }
}

impl StructuredLog for FieldUpdated<'_> {
    fn log(&self) {
        tracing::trace!(
            chain = self.chain,
            target = self.target.as_str(),
            field = self.field,
            value_type = self.value_type,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "field_updated",
            span_name = name,
            chain = self.chain,
            target = self.target.as_str(),
            field = self.field,
        )
    }
}

/// A field update was rejected and returned to the handler.
///
/// # Log Level
/// `debug!` - The handler decides whether the rejection matters
///
/// # Example
/// ```
/// use handler_chain::errors::{FieldError, Target};
/// use handler_chain::observability::messages::field::FieldUpdateRejected;
///
/// let error = FieldError::FieldNotFound {
///     target: Target::Context,
///     field: "nickname".to_string(),
/// };
/// let msg = FieldUpdateRejected {
///     chain: "signup",
///     field: "nickname",
///     error: &error,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Chain 'signup' rejected update of context.nickname: the nickname field does not exist on the context"
/// );
/// ```
pub struct FieldUpdateRejected<'a> {
    pub chain: &'a str,
    pub field: &'a str,
    pub error: &'a FieldError,
}

impl Display for FieldUpdateRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain '{}' rejected update of {}.{}: {}",
            self.chain,
            self.error.target(),
            self.field,
            self.error
        )
    }
}

impl StructuredLog for FieldUpdateRejected<'_> {
    fn log(&self) {
        tracing::debug!(
            chain = self.chain,
            target = self.error.target().as_str(),
            field = self.field,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "field_update_rejected",
            span_name = name,
            chain = self.chain,
            target = self.error.target().as_str(),
            field = self.field,
        )
    }
}

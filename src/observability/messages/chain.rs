// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for chain run lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Run start and completion
//! * Individual handler invocation and failure
//! * Cooperative early termination

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Chain run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use handler_chain::observability::messages::chain::RunStarted;
///
/// let msg = RunStarted {
///     chain: "signup",
///     handler_count: 3,
/// };
///
/// assert_eq!(msg.to_string(), "Starting chain 'signup' with 3 handlers");
/// ```
pub struct RunStarted<'a> {
    pub chain: &'a str,
    pub handler_count: usize,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting chain '{}' with {} handlers",
            self.chain, self.handler_count
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            chain = self.chain,
            handler_count = self.handler_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "chain_run",
            span_name = name,
            chain = self.chain,
            handler_count = self.handler_count,
        )
    }
}

/// A handler is about to be invoked.
///
/// # Log Level
/// `trace!` - Detailed per-step tracing
pub struct HandlerInvoked<'a> {
    pub chain: &'a str,
    pub index: usize,
    pub handler: &'a str,
}

impl Display for HandlerInvoked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain '{}' invoking handler #{} ({})",
            self.chain, self.index, self.handler
        )
    }
}

impl StructuredLog for HandlerInvoked<'_> {
    fn log(&self) {
        tracing::trace!(
            chain = self.chain,
            index = self.index,
            handler = self.handler,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "handler",
            span_name = name,
            chain = self.chain,
            index = self.index,
            handler = self.handler,
        )
    }
}

/// A handler returned an error; the run ends with that error.
///
/// # Log Level
/// `warn!` - The failure is returned to the caller, who decides its severity
///
/// # Example
/// ```
/// use handler_chain::observability::messages::chain::HandlerFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
/// let msg = HandlerFailed {
///     chain: "signup",
///     index: 1,
///     handler: "validate_email",
///     error: &error,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Chain 'signup' handler #1 (validate_email) failed: boom"
/// );
/// ```
pub struct HandlerFailed<'a> {
    pub chain: &'a str,
    pub index: usize,
    pub handler: &'a str,
    pub error: &'a dyn Display,
}

impl Display for HandlerFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain '{}' handler #{} ({}) failed: {}",
            self.chain, self.index, self.handler, self.error
        )
    }
}

impl StructuredLog for HandlerFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            chain = self.chain,
            index = self.index,
            handler = self.handler,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "handler_failed",
            span_name = name,
            chain = self.chain,
            index = self.index,
            handler = self.handler,
        )
    }
}

/// A handler requested a stop; no further handlers run.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunStopped<'a> {
    pub chain: &'a str,
    pub index: usize,
    pub skipped: usize,
}

impl Display for RunStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain '{}' stopped by handler #{}, skipping {} handlers",
            self.chain, self.index, self.skipped
        )
    }
}

impl StructuredLog for RunStopped<'_> {
    fn log(&self) {
        tracing::info!(
            chain = self.chain,
            index = self.index,
            skipped = self.skipped,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run_stopped",
            span_name = name,
            chain = self.chain,
            index = self.index,
            skipped = self.skipped,
        )
    }
}

/// Every handler ran to completion.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use handler_chain::observability::messages::chain::RunCompleted;
/// use std::time::Duration;
///
/// let msg = RunCompleted {
///     chain: "signup",
///     handler_count: 3,
///     duration: Duration::from_millis(2),
/// };
///
/// assert_eq!(msg.to_string(), "Chain 'signup' completed 3 handlers in 2ms");
/// ```
pub struct RunCompleted<'a> {
    pub chain: &'a str,
    pub handler_count: usize,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain '{}' completed {} handlers in {:?}",
            self.chain, self.handler_count, self.duration
        )
    }
}

impl StructuredLog for RunCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            chain = self.chain,
            handler_count = self.handler_count,
            duration_ms = u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run_completed",
            span_name = name,
            chain = self.chain,
            handler_count = self.handler_count,
            duration = ?self.duration,
        )
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself with structured fields at its intended
//! level.
//!
//! # Organization
//!
//! * `chain` - run lifecycle and handler events
//! * `field` - field-name updates of the context and result
//!
//! # Usage Pattern
//!
//! ```rust
//! use handler_chain::observability::messages::chain::RunStarted;
//! use handler_chain::observability::messages::StructuredLog;
//!
//! let msg = RunStarted {
//!     chain: "signup",
//!     handler_count: 3,
//! };
//!
//! msg.log();
//! ```

pub mod chain;
pub mod field;

use tracing::Span;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as an event at its intended level.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}

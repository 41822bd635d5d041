// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The chain engine: an ordered list of handlers sharing a context and a
//! result.
//!
//! A [`Chain`] is built by appending handlers with [`Chain::add`] and is then
//! executed once with [`Chain::run`]. Handlers run strictly in insertion order
//! on the caller's thread. Each one receives the chain itself, so it can read
//! the context and result or mutate them by field name with
//! [`Chain::update_context`] / [`Chain::update_result`], and a
//! [`StopSignal`] to end the run early without an error.
//!
//! A run ends at the first of:
//! * a handler returning `Err(e)`: `run` returns that same `e`
//! * a handler calling `stop()`: `run` returns `Ok(())` once it returns
//! * the last handler returning `Ok(())`
//!
//! Mutations applied before a failure or stop are kept.
//!
//! # Caller responsibilities
//!
//! A chain is single-threaded and not re-entrant. Calling `run` from inside a
//! handler of the same chain is unsupported, as is sharing one chain between
//! threads. There is no timeout: a handler that never returns blocks `run`
//! forever.
//!
//! # Example
//! ```rust
//! use handler_chain::{impl_field_access, Chain};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//! impl_field_access!(Person { first_name, last_name });
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Score {
//!     value: i32,
//! }
//! impl_field_access!(Score { value });
//!
//! let mut chain: Chain<Person, Score> = Chain::new();
//! chain
//!     .add(|chain, _stop| {
//!         chain.update_context("first_name", "John".to_string())?;
//!         Ok(())
//!     })
//!     .add(|chain, stop| {
//!         chain.update_result("value", -100)?;
//!         stop.stop();
//!         Ok(())
//!     })
//!     .add(|chain, _stop| {
//!         chain.update_context("last_name", "Doe".to_string())?;
//!         Ok(())
//!     });
//!
//! chain.run().unwrap();
//!
//! assert_eq!(chain.get_context().first_name, "John");
//! assert_eq!(chain.get_context().last_name, "");
//! assert_eq!(chain.get_result().value, -100);
//! ```

mod stop;


pub use stop::StopSignal;

use crate::config::consts::DEFAULT_CHAIN_NAME;
use crate::config::ChainConfig;
use crate::errors::{ChainError, FieldError, Target};
use crate::observability::messages::chain::{
    HandlerFailed, HandlerInvoked, RunCompleted, RunStarted, RunStopped,
};
use crate::observability::messages::field::{FieldUpdateRejected, FieldUpdated};
use crate::observability::messages::StructuredLog;
use crate::traits::{FieldAccess, FieldUpdate, Handler};
use std::any::Any;
use std::cell::Cell;
use std::fmt::Display;
use std::rc::Rc;
use std::time::Instant;

type SharedHandler<C, R, E> = Rc<dyn Handler<C, R, E>>;

/// Ordered handler pipeline with shared context `C` and result `R`.
///
/// `E` is the error type handlers return; it defaults to [`ChainError`],
/// which converts from [`FieldError`] so handlers can `?` their updates.
pub struct Chain<C, R, E = ChainError> {
    name: String,
    ctx: C,
    result: R,
    handlers: Vec<SharedHandler<C, R, E>>,
    forced_stop: Rc<Cell<bool>>,
}

impl<C, R, E> Chain<C, R, E>
where
    C: Default,
    R: Default,
{
    /// Create an empty chain with default-valued context and result.
    pub fn new() -> Self {
        Self::named(DEFAULT_CHAIN_NAME)
    }

    /// Create an empty chain whose log events carry `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ctx: C::default(),
            result: R::default(),
            handlers: Vec::new(),
            forced_stop: Rc::new(Cell::new(false)),
        }
    }

    /// Create an empty chain configured from `config`.
    pub fn with_config(config: &ChainConfig) -> Self {
        Self::named(config.name.clone())
    }
}

impl<C, R, E> Default for Chain<C, R, E>
where
    C: Default,
    R: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R, E> Chain<C, R, E> {
    /// Append a closure handler. Returns the chain for fluent chaining.
    pub fn add<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut Chain<C, R, E>, &StopSignal) -> Result<(), E> + 'static,
    {
        self.handlers.push(Rc::new(handler));
        self
    }

    /// Append any [`Handler`] implementation, e.g. a named struct handler.
    pub fn add_handler<H>(&mut self, handler: H) -> &mut Self
    where
        H: Handler<C, R, E> + 'static,
    {
        self.handlers.push(Rc::new(handler));
        self
    }

    /// Run every handler in insertion order.
    ///
    /// Returns the first handler error unchanged. A handler that calls
    /// [`StopSignal::stop`] ends the run successfully once it returns. The
    /// forced-stop flag is cleared when a new run begins. Handlers appended
    /// while the run is in progress are first invoked by the next run.
    pub fn run(&mut self) -> Result<(), E>
    where
        E: Display,
    {
        let started = RunStarted {
            chain: &self.name,
            handler_count: self.handlers.len(),
        };
        let span = started.span("run");
        let _guard = span.enter();
        started.log();

        let start = Instant::now();
        self.forced_stop.set(false);

        let handlers = self.handlers.clone();
        for (index, handler) in handlers.iter().enumerate() {
            let invoked = HandlerInvoked {
                chain: &self.name,
                index,
                handler: handler.name(),
            };
            let handler_span = invoked.span("handler_execution");
            let _handler_guard = handler_span.enter();
            invoked.log();

            let stop = StopSignal::bound_to(&self.forced_stop);
            if let Err(err) = handler.handle(self, &stop) {
                HandlerFailed {
                    chain: &self.name,
                    index,
                    handler: handler.name(),
                    error: &err,
                }
                .log();
                return Err(err);
            }

            if self.forced_stop.get() {
                RunStopped {
                    chain: &self.name,
                    index,
                    skipped: handlers.len() - index - 1,
                }
                .log();
                return Ok(());
            }
        }

        RunCompleted {
            chain: &self.name,
            handler_count: handlers.len(),
            duration: start.elapsed(),
        }
        .log();

        Ok(())
    }

    /// Copy of the current context.
    pub fn get_context(&self) -> C
    where
        C: Clone,
    {
        self.ctx.clone()
    }

    /// Copy of the current result.
    pub fn get_result(&self) -> R
    where
        R: Clone,
    {
        self.result.clone()
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn result(&self) -> &R {
        &self.result
    }

    /// Consume the chain, returning its context and result.
    pub fn into_parts(self) -> (C, R) {
        (self.ctx, self.result)
    }

    /// Assign `value` to the context field named `field`.
    ///
    /// The value's type must be exactly the field's declared type.
    pub fn update_context<V: Any>(&mut self, field: &str, value: V) -> Result<(), FieldError>
    where
        C: FieldAccess,
    {
        let update = FieldUpdate::new(Target::Context, field, value);
        let value_type = update.value_type();
        let outcome = self.ctx.set_field(update);
        self.log_update(Target::Context, field, value_type, &outcome);
        outcome
    }

    /// Assign `value` to the result field named `field`.
    ///
    /// The value's type must be exactly the field's declared type.
    pub fn update_result<V: Any>(&mut self, field: &str, value: V) -> Result<(), FieldError>
    where
        R: FieldAccess,
    {
        let update = FieldUpdate::new(Target::Result, field, value);
        let value_type = update.value_type();
        let outcome = self.result.set_field(update);
        self.log_update(Target::Result, field, value_type, &outcome);
        outcome
    }

    fn log_update(
        &self,
        target: Target,
        field: &str,
        value_type: &str,
        outcome: &Result<(), FieldError>,
    ) {
        match outcome {
            Ok(()) => FieldUpdated {
                chain: &self.name,
                target,
                field,
                value_type,
            }
            .log(),
            Err(error) => FieldUpdateRejected {
                chain: &self.name,
                field,
                error,
            }
            .log(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Whether a handler has requested a stop in the current or last run.
    ///
    /// Set as soon as a handler calls [`StopSignal::stop`], so it is already
    /// `true` inside that handler. It stays set after the run ends, including
    /// when the stopping handler went on to return an error, and is cleared
    /// when the next run begins.
    pub fn is_stopped(&self) -> bool {
        self.forced_stop.get()
    }
}

impl<C, R, E> std::fmt::Debug for Chain<C, R, E>
where
    C: std::fmt::Debug,
    R: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("name", &self.name)
            .field("context", &self.ctx)
            .field("result", &self.result)
            .field(
                "handlers",
                &self.handlers.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .field("forced_stop", &self.forced_stop.get())
            .finish()
    }
}

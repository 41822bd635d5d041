// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Field-name mutation of context and result values.
//!
//! Handlers mutate the chain's context and result by naming a field and
//! handing over a value. The chain never knows the concrete layout of either
//! type; instead both types implement [`FieldAccess`], which receives a
//! [`FieldUpdate`] and either assigns it or rejects it with a [`FieldError`].
//!
//! Struct implementations are normally generated with
//! [`impl_field_access!`](crate::impl_field_access). Scalars, strings and `()`
//! implement the trait by rejecting every update as
//! [`FieldError::TargetNotStruct`]; `Option<T>` rejects updates while `None`
//! as [`FieldError::TargetUndefined`].
//!
//! # Example
//! ```rust
//! use handler_chain::{FieldAccess, FieldError, FieldUpdate, Target};
//!
//! #[derive(Default)]
//! struct Counter {
//!     hits: u32,
//! }
//!
//! impl FieldAccess for Counter {
//!     fn set_field(&mut self, update: FieldUpdate<'_>) -> Result<(), FieldError> {
//!         match update.field() {
//!             "hits" => {
//!                 self.hits = update.take()?;
//!                 Ok(())
//!             }
//!             _ => Err(update.not_found()),
//!         }
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! counter.set_field(FieldUpdate::new(Target::Result, "hits", 3u32)).unwrap();
//! assert_eq!(counter.hits, 3);
//! ```

use crate::errors::{FieldError, Target};
use std::any::Any;

/// A single by-name update addressed to the context or the result.
pub struct FieldUpdate<'a> {
    target: Target,
    field: &'a str,
    value: Box<dyn Any>,
    value_type: &'static str,
}

impl<'a> FieldUpdate<'a> {
    pub fn new<V: Any>(target: Target, field: &'a str, value: V) -> Self {
        Self {
            target,
            field,
            value: Box::new(value),
            value_type: std::any::type_name::<V>(),
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// The field being addressed. The returned name outlives the update, so
    /// implementations can match on it and still consume the update.
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// Type name of the carried value.
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }

    /// Consume the update and return the value if it is exactly a `T`.
    ///
    /// There is no coercion: an `i32` is not accepted for an `i64` field and
    /// a `&'static str` is not accepted for a `String` field.
    pub fn take<T: Any>(self) -> Result<T, FieldError> {
        let FieldUpdate {
            target,
            field,
            value,
            value_type,
        } = self;

        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| FieldError::IncompatibleValueType {
                target,
                field: field.to_string(),
                expected: std::any::type_name::<T>(),
                found: value_type,
            })
    }

    pub fn not_found(&self) -> FieldError {
        FieldError::FieldNotFound {
            target: self.target,
            field: self.field.to_string(),
        }
    }

    pub fn not_mutable(&self) -> FieldError {
        FieldError::FieldNotMutable {
            target: self.target,
            field: self.field.to_string(),
        }
    }

    /// Rejection for a receiver of type `T` that has no named fields.
    pub fn not_struct<T: ?Sized>(&self) -> FieldError {
        FieldError::TargetNotStruct {
            target: self.target,
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn undefined(&self) -> FieldError {
        FieldError::TargetUndefined {
            target: self.target,
        }
    }
}

impl std::fmt::Debug for FieldUpdate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldUpdate")
            .field("target", &self.target)
            .field("field", &self.field)
            .field("value_type", &self.value_type)
            .finish()
    }
}

/// Capability to have named fields assigned at runtime.
pub trait FieldAccess {
    /// Assign `update` to the field it names, or explain why it cannot be.
    fn set_field(&mut self, update: FieldUpdate<'_>) -> Result<(), FieldError>;
}

macro_rules! impl_not_a_struct {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldAccess for $ty {
                fn set_field(&mut self, update: FieldUpdate<'_>) -> Result<(), FieldError> {
                    Err(update.not_struct::<$ty>())
                }
            }
        )*
    };
}

impl_not_a_struct!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl<T: FieldAccess> FieldAccess for Option<T> {
    fn set_field(&mut self, update: FieldUpdate<'_>) -> Result<(), FieldError> {
        match self {
            Some(inner) => inner.set_field(update),
            None => Err(update.undefined()),
        }
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Box<T> {
    fn set_field(&mut self, update: FieldUpdate<'_>) -> Result<(), FieldError> {
        (**self).set_field(update)
    }
}

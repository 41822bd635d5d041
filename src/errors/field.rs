// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised when a handler mutates the context or result by field name.

use std::fmt;
use thiserror::Error;

/// The slot of a chain that a field update addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The shared working state handed to every handler.
    Context,
    /// The shared output state populated by handlers.
    Result,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Context => "context",
            Target::Result => "result",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure kinds for `update_context` / `update_result`.
///
/// Every variant carries the [`Target`] so that context and result updates
/// report the same detail for the same failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The slot holds no value that can be addressed for mutation.
    #[error("{target} is undefined")]
    TargetUndefined { target: Target },

    /// The stored value is not a record type, so it has no named fields.
    #[error("{target} should be a struct, found {type_name}")]
    TargetNotStruct {
        target: Target,
        type_name: &'static str,
    },

    /// The named field does not exist on the type.
    #[error("the {field} field does not exist on the {target}")]
    FieldNotFound { target: Target, field: String },

    /// The field exists but was not declared assignable.
    #[error("the {field} field of the {target} cannot be changed")]
    FieldNotMutable { target: Target, field: String },

    /// The supplied value's type is not exactly the field's declared type.
    #[error("the value type is incompatible with the {field} field of the {target}: expected {expected}, found {found}")]
    IncompatibleValueType {
        target: Target,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl FieldError {
    /// The slot the rejected update addressed.
    pub fn target(&self) -> Target {
        match self {
            FieldError::TargetUndefined { target }
            | FieldError::TargetNotStruct { target, .. }
            | FieldError::FieldNotFound { target, .. }
            | FieldError::FieldNotMutable { target, .. }
            | FieldError::IncompatibleValueType { target, .. } => *target,
        }
    }

    /// The field named by the rejected update, when the lookup got that far.
    pub fn field(&self) -> Option<&str> {
        match self {
            FieldError::FieldNotFound { field, .. }
            | FieldError::FieldNotMutable { field, .. }
            | FieldError::IncompatibleValueType { field, .. } => Some(field),
            FieldError::TargetUndefined { .. } | FieldError::TargetNotStruct { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_target_and_field_for_both_slots() {
        let on_context = FieldError::FieldNotFound {
            target: Target::Context,
            field: "nickname".to_string(),
        };
        let on_result = FieldError::FieldNotFound {
            target: Target::Result,
            field: "nickname".to_string(),
        };

        assert_eq!(
            on_context.to_string(),
            "the nickname field does not exist on the context"
        );
        assert_eq!(
            on_result.to_string(),
            "the nickname field does not exist on the result"
        );
    }

    #[test]
    fn test_incompatible_value_type_message() {
        let err = FieldError::IncompatibleValueType {
            target: Target::Context,
            field: "first_name".to_string(),
            expected: "alloc::string::String",
            found: "i32",
        };

        let msg = err.to_string();
        assert!(msg.contains("first_name"));
        assert!(msg.contains("expected alloc::string::String"));
        assert!(msg.contains("found i32"));
    }

    #[test]
    fn test_accessors() {
        let undefined = FieldError::TargetUndefined {
            target: Target::Result,
        };
        assert_eq!(undefined.target(), Target::Result);
        assert_eq!(undefined.field(), None);
        assert_eq!(undefined.to_string(), "result is undefined");

        let not_mutable = FieldError::FieldNotMutable {
            target: Target::Context,
            field: "id".to_string(),
        };
        assert_eq!(not_mutable.target(), Target::Context);
        assert_eq!(not_mutable.field(), Some("id"));
    }
}

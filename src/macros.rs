// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Macros for giving context and result structs field-name access.

/// Implement [`FieldAccess`](crate::FieldAccess) for a struct.
///
/// Fields listed in the first brace group are assignable by name. Fields in
/// the optional `readonly` group are known but reject updates with
/// [`FieldError::FieldNotMutable`](crate::FieldError::FieldNotMutable). Any
/// other name is [`FieldError::FieldNotFound`](crate::FieldError::FieldNotFound).
/// A value must have exactly the field's declared type.
///
/// # Example
/// ```rust
/// use handler_chain::{impl_field_access, FieldAccess, FieldError, FieldUpdate, Target};
///
/// #[derive(Debug, Default)]
/// struct Order {
///     id: u64,
///     total: i64,
///     note: String,
/// }
///
/// impl_field_access!(Order { total, note } readonly { id });
///
/// let mut order = Order::default();
/// order.set_field(FieldUpdate::new(Target::Result, "total", 990i64)).unwrap();
/// assert_eq!(order.total, 990);
///
/// let err = order
///     .set_field(FieldUpdate::new(Target::Result, "id", 1u64))
///     .unwrap_err();
/// assert!(matches!(err, FieldError::FieldNotMutable { .. }));
///
/// let err = order
///     .set_field(FieldUpdate::new(Target::Result, "note", 3))
///     .unwrap_err();
/// assert!(matches!(err, FieldError::IncompatibleValueType { .. }));
/// ```
#[macro_export]
macro_rules! impl_field_access {
    (
        $ty:ty { $($field:ident),* $(,)? }
        $(readonly { $($readonly:ident),* $(,)? })?
    ) => {
        impl $crate::FieldAccess for $ty {
            #[allow(unreachable_patterns)]
            fn set_field(
                &mut self,
                update: $crate::FieldUpdate<'_>,
            ) -> ::std::result::Result<(), $crate::FieldError> {
                match update.field() {
                    $(
                        stringify!($field) => {
                            self.$field = update.take()?;
                            ::std::result::Result::Ok(())
                        }
                    )*
                    $($(
                        stringify!($readonly) => {
                            ::std::result::Result::Err(update.not_mutable())
                        }
                    )*)?
                    _ => ::std::result::Result::Err(update.not_found()),
                }
            }
        }
    };
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod chain;      // chain engine
pub mod config;     // config loading + validation
pub mod errors;     // error handling
mod macros;         // impl_field_access!
pub mod observability;
pub mod traits;     // handler + field access abstractions

pub use chain::{Chain, StopSignal};
pub use errors::{ChainError, ConfigError, FieldError, Target};
pub use traits::{FieldAccess, FieldUpdate, Handler};

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod chain;
mod config;
mod field;

pub use chain::ChainError;
pub use config::ConfigError;
pub use field::{FieldError, Target};

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod field_access;
pub mod handler;

pub use field_access::{FieldAccess, FieldUpdate};
pub use handler::Handler;

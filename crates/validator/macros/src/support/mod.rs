//! Shared helpers for derive implementations.

pub mod diag;
pub mod validation;

//! Common utilities and types used throughout the pipeline models.
//!
//! This module provides the building blocks shared by every unit:
//! 1. **Bit Fields:** Width masks, field extraction, and sign extension on raw wire values.
//! 2. **Error Handling:** Construction-time validation errors for configurable units.

/// Bit-field helpers for fixed-width wire values.
pub mod bits;

/// Error types for unit construction and configuration loading.
pub mod error;

pub use bits::{field, mask, sign_extend};
pub use error::ConfigError;

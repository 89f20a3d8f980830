//! Unit tests for the SoC components.

/// Word-addressed backing memory.
pub mod memory;

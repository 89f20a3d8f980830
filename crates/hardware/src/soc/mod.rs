//! System-on-Chip (SoC) Components.
//!
//! Collaborators that sit outside the core units, such as the memory that backs
//! the data cache.

/// Word-addressed backing memory.
pub mod memory;

pub use memory::WordMemory;

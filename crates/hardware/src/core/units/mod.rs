//! Functional units.
//!
//! 1. **Control:** Instruction decode into control signal bundles.
//! 2. **Cache:** Direct-mapped data cache over a backing store.

/// Direct-mapped cache and its backing store interface.
pub mod cache;

/// Control unit (base and Zbkb decoders).
pub mod control;

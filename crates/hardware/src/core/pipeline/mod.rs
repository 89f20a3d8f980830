//! Pipeline building blocks.
//!
//! This module contains the pieces a pipeline is assembled from:
//! 1. **Signals:** Control signals generated during instruction decoding.
//! 2. **Traits:** The two-phase `Clocked` interface shared by every stateful unit.
//! 3. **Skid:** A single valid/ready stage with a one-deep overflow buffer.
//! 4. **Chain:** Stages linked producer-to-consumer with registered readiness.

/// Linear chain of skid-buffer stages.
pub mod chain;

/// Control signals generated during instruction decode.
pub mod signals;

/// Skid-buffer pipeline stage.
pub mod skid;

/// Two-phase clocked unit interface.
pub mod traits;

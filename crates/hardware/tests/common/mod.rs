//! Shared test infrastructure.

/// Instruction word encoders.
pub mod encode;


/// Mock collaborators.
pub mod mocks;

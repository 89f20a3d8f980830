//! Core processor model.
//!
//! This module contains the pipeline building blocks, the control and cache units,
//! and the datapath that clocks them together.

/// Decode, stage chain and data cache composed into one clocked datapath.
pub mod datapath;

/// Pipeline primitives (signals, clocked trait, skid stages, stage chain).
pub mod pipeline;

/// Functional units (control unit, data cache).
pub mod units;

pub use self::datapath::Datapath;

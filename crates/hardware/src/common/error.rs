//! Configuration and construction errors.
//!
//! Decoding, cache lookups and stage handshakes never fail at runtime: encoding gaps
//! resolve to the idle control bundle and misses are ordinary latency. The only
//! fallible step is building a unit from parameters, reported here.

use thiserror::Error;

/// Errors raised while validating a configuration or constructing a unit.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The direct-mapped cache needs a power-of-two block count to split index bits.
    #[error("cache block count {0} is not a power of two")]
    BlockCountNotPowerOfTwo(usize),

    /// The index field would need more bits than the address carries.
    #[error("address width {addr_width} is narrower than the {index_bits} index bits")]
    IndexWiderThanAddress {
        /// Configured address width in bits.
        addr_width: u32,
        /// Index bits required by the block count.
        index_bits: u32,
    },

    /// Address width outside `1..=64`.
    #[error("address width {0} must be between 1 and 64 bits")]
    AddressWidthOutOfRange(u32),

    /// Data width outside `1..=64`.
    #[error("data width {0} must be between 1 and 64 bits")]
    DataWidthOutOfRange(u32),

    /// Backing memory would be too large to allocate.
    #[error("memory address width {addr_width} exceeds the {max}-bit limit")]
    MemoryTooWide {
        /// Requested address width in bits.
        addr_width: u32,
        /// Widest supported address width.
        max: u32,
    },

    /// A stage chain must hold at least one stage.
    #[error("pipeline needs at least one stage")]
    NoStages,

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

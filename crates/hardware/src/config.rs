//! Configuration system for the pipeline models.
//!
//! This module defines the configuration structures used to parameterize the units.
//! It provides:
//! 1. **Defaults:** Baseline geometry for the data cache and the stage chain.
//! 2. **Structures:** Hierarchical config for general, cache, and pipeline settings.
//! 3. **Enums:** ISA variant selection for the control unit.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
///
/// The cache geometry matches the reference design: a 5-bit address space
/// of 32-bit words served by eight direct-mapped blocks.
mod defaults {
    /// Data word width in bits.
    pub const DATA_WIDTH: u32 = 32;

    /// Address width in bits.
    pub const ADDR_WIDTH: u32 = 5;

    /// Number of direct-mapped blocks (must be a power of two).
    pub const NUM_BLOCKS: usize = 8;

    /// Number of skid-buffer stages between decode and retire.
    pub const STAGES: usize = 1;
}

/// Instruction-set variant decoded by the control unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Isa {
    /// RV32I base decoder, including the Zbkc carry-less multiply entries.
    #[default]
    #[serde(alias = "i", alias = "base")]
    Base,
    /// Base decoder extended with the Zbkb bit-manipulation operations.
    #[serde(alias = "b", alias = "zbkb")]
    Zbkb,
}

impl Isa {
    /// Width in bits of the `alu_op` control field produced for this variant.
    pub const fn alu_op_width(self) -> u32 {
        match self {
            Self::Base => 4,
            Self::Zbkb => 5,
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::{Config, Isa};
///
/// let config = Config::default();
/// assert_eq!(config.cache.num_blocks, 8);
/// assert_eq!(config.pipeline.isa, Isa::Base);
///
/// let json = r#"{
///     "cache": { "data_width": 32, "addr_width": 10, "num_blocks": 64 },
///     "pipeline": { "stages": 3, "isa": "Zbkb" }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.cache.addr_width, 10);
/// assert_eq!(config.pipeline.stages, 3);
/// assert!(!config.general.trace);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data cache geometry
    #[serde(default)]
    pub cache: CacheConfig,
    /// Stage chain and decoder settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// validation error when the geometry is inconsistent.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section for consistency.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()?;
        self.pipeline.validate()
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a debug event for every retired instruction.
    #[serde(default)]
    pub trace: bool,
}

/// Direct-mapped cache geometry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Width of a cached data word in bits.
    #[serde(default = "CacheConfig::default_data_width")]
    pub data_width: u32,

    /// Width of a reference address in bits.
    #[serde(default = "CacheConfig::default_addr_width")]
    pub addr_width: u32,

    /// Number of blocks; one block per index value.
    #[serde(default = "CacheConfig::default_num_blocks")]
    pub num_blocks: usize,
}

impl CacheConfig {
    fn default_data_width() -> u32 {
        defaults::DATA_WIDTH
    }

    fn default_addr_width() -> u32 {
        defaults::ADDR_WIDTH
    }

    fn default_num_blocks() -> usize {
        defaults::NUM_BLOCKS
    }

    /// Number of low address bits used as the block index (`log2(num_blocks)`).
    pub const fn index_bits(&self) -> u32 {
        self.num_blocks.trailing_zeros()
    }

    /// Number of high address bits stored as the tag.
    pub const fn tag_bits(&self) -> u32 {
        self.addr_width.saturating_sub(self.index_bits())
    }

    /// Checks the geometry.
    ///
    /// # Errors
    ///
    /// Fails when a width is out of range, the block count is not a power of
    /// two, or the index does not fit in the address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_width == 0 || self.data_width > 64 {
            return Err(ConfigError::DataWidthOutOfRange(self.data_width));
        }
        if self.addr_width == 0 || self.addr_width > 64 {
            return Err(ConfigError::AddressWidthOutOfRange(self.addr_width));
        }
        if !self.num_blocks.is_power_of_two() {
            return Err(ConfigError::BlockCountNotPowerOfTwo(self.num_blocks));
        }
        if self.index_bits() > self.addr_width {
            return Err(ConfigError::IndexWiderThanAddress {
                addr_width: self.addr_width,
                index_bits: self.index_bits(),
            });
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            data_width: defaults::DATA_WIDTH,
            addr_width: defaults::ADDR_WIDTH,
            num_blocks: defaults::NUM_BLOCKS,
        }
    }
}

/// Stage chain and decoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Number of skid-buffer stages between decode and retire.
    #[serde(default = "PipelineConfig::default_stages")]
    pub stages: usize,

    /// Decoder variant.
    #[serde(default)]
    pub isa: Isa,
}

impl PipelineConfig {
    fn default_stages() -> usize {
        defaults::STAGES
    }

    /// Checks the stage count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoStages`] for an empty chain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages == 0 {
            return Err(ConfigError::NoStages);
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stages: defaults::STAGES,
            isa: Isa::Base,
        }
    }
}

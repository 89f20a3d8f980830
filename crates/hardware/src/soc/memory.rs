//! Word-Addressed Backing Memory.
//!
//! A flat array of data words, one per address, that serves cache misses. It
//! stands in for the memory block behind the data cache: reads return whole
//! words. Memory built for an address width covers every address of that width,
//! so a cache of the same width never reads past the end.

use crate::common::bits::mask;
use crate::common::error::ConfigError;
use crate::core::units::cache::BackingStore;

/// Widest address space a [`WordMemory`] will allocate (16 Mi words).
pub const MAX_ADDR_WIDTH: u32 = 24;

/// Flat word memory covering a `2^addr_width` address space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordMemory {
    words: Vec<u64>,
}

impl WordMemory {
    /// Creates zero-filled memory for `addr_width` address bits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MemoryTooWide`] above [`MAX_ADDR_WIDTH`].
    pub fn new(addr_width: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            words: vec![0; Self::len_for(addr_width)?],
        })
    }

    /// Creates memory initialized with `init(addr)` at every address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MemoryTooWide`] above [`MAX_ADDR_WIDTH`].
    pub fn from_fn(addr_width: u32, init: impl Fn(u64) -> u64) -> Result<Self, ConfigError> {
        let len = Self::len_for(addr_width)? as u64;
        Ok(Self {
            words: (0..len).map(init).collect(),
        })
    }

    /// Creates memory holding `words` from address zero.
    pub const fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }

    /// Number of addressable words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the memory holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Stores `value` at `addr`; writes past the end are dropped.
    pub fn write(&mut self, addr: u64, value: u64) {
        if let Some(word) = usize::try_from(addr).ok().and_then(|a| self.words.get_mut(a)) {
            *word = value;
        }
    }

    fn len_for(addr_width: u32) -> Result<usize, ConfigError> {
        if addr_width > MAX_ADDR_WIDTH {
            return Err(ConfigError::MemoryTooWide {
                addr_width,
                max: MAX_ADDR_WIDTH,
            });
        }
        Ok(mask(addr_width) as usize + 1)
    }
}

impl BackingStore for WordMemory {
    /// Reads past the end (only possible for [`WordMemory::from_words`]) return zero.
    fn read(&self, addr: u64) -> u64 {
        usize::try_from(addr)
            .ok()
            .and_then(|a| self.words.get(a))
            .copied()
            .unwrap_or(0)
    }
}

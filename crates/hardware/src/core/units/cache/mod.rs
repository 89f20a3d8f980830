//! Direct-Mapped Cache.
//!
//! This module implements a direct-mapped cache with single-cycle miss handling.
//! An address splits into an index (the low `log2(num_blocks)` bits) selecting one
//! block and a tag (the remaining high bits) checked against it.
//!
//! On a miss the cache reads the full word from its [`BackingStore`] using the
//! complete address and schedules the indexed block to be replaced at the clock
//! edge. The miss cycle reports `hit = false`; the fetched word is not forwarded,
//! so the reference must be repeated to observe it.

use tracing::{debug, trace};

use crate::common::bits::{field, mask};
use crate::common::error::ConfigError;
use crate::config::CacheConfig;
use crate::core::pipeline::traits::Clocked;

/// Word-granular memory behind the cache.
///
/// Reads are combinational from the cache's point of view: any latency is
/// folded into the miss cycle.
pub trait BackingStore {
    /// Returns the word stored at `addr`.
    fn read(&self, addr: u64) -> u64;
}

impl<S: BackingStore + ?Sized> BackingStore for &S {
    fn read(&self, addr: u64) -> u64 {
        (**self).read(addr)
    }
}

impl<S: BackingStore + ?Sized> BackingStore for Box<S> {
    fn read(&self, addr: u64) -> u64 {
        (**self).read(addr)
    }
}

/// One cache slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CacheBlock {
    /// The block holds a fetched word.
    pub valid: bool,
    /// High address bits of the cached word.
    pub tag: u64,
    /// Cached word.
    pub data: u64,
}

/// Address split and widths derived from a validated [`CacheConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheGeometry {
    /// Data word width in bits.
    pub data_width: u32,
    /// Address width in bits.
    pub addr_width: u32,
    /// Number of blocks.
    pub num_blocks: usize,
    /// Low address bits used as index.
    pub index_bits: u32,
    /// High address bits stored as tag.
    pub tag_bits: u32,
}

impl CacheGeometry {
    /// Validates `config` and derives the address split.
    ///
    /// # Errors
    ///
    /// Propagates [`CacheConfig::validate`] failures.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            data_width: config.data_width,
            addr_width: config.addr_width,
            num_blocks: config.num_blocks,
            index_bits: config.index_bits(),
            tag_bits: config.tag_bits(),
        })
    }

    /// Block index of `addr`.
    #[inline]
    pub const fn index(&self, addr: u64) -> usize {
        field(addr, 0, self.index_bits) as usize
    }

    /// Tag of `addr`.
    #[inline]
    pub const fn tag(&self, addr: u64) -> u64 {
        field(addr, self.index_bits, self.tag_bits)
    }

    /// Truncates `addr` to the address width.
    #[inline]
    pub const fn address(&self, addr: u64) -> u64 {
        addr & mask(self.addr_width)
    }
}

/// Result of one reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheLookup {
    /// Contents of the indexed block. Only meaningful when `hit` is set; on a
    /// miss it is the stale word being replaced.
    pub data: u64,
    /// The indexed block is valid and its tag matches.
    pub hit: bool,
}

/// Replacement scheduled by a miss, applied at the clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheFill {
    /// Block to overwrite.
    pub index: usize,
    /// New contents.
    pub block: CacheBlock,
}

/// Direct-mapped cache over a backing store.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::CacheConfig;
/// use rvpipe_core::core::units::cache::DirectMappedCache;
/// use rvpipe_core::soc::memory::WordMemory;
///
/// let memory = WordMemory::from_fn(5, |addr| addr).unwrap();
/// let mut cache = DirectMappedCache::new(&CacheConfig::default(), memory).unwrap();
///
/// assert!(!cache.lookup(0b10110).hit);
/// let again = cache.lookup(0b10110);
/// assert!(again.hit);
/// assert_eq!(again.data, 0b10110);
/// ```
#[derive(Clone, Debug)]
pub struct DirectMappedCache<M> {
    geometry: CacheGeometry,
    blocks: Vec<CacheBlock>,
    store: M,
}

impl<M: BackingStore> DirectMappedCache<M> {
    /// Creates a cache with every block invalid.
    ///
    /// # Errors
    ///
    /// Fails when the geometry in `config` is inconsistent.
    pub fn new(config: &CacheConfig, store: M) -> Result<Self, ConfigError> {
        let geometry = CacheGeometry::new(config)?;
        Ok(Self {
            blocks: vec![CacheBlock::default(); geometry.num_blocks],
            geometry,
            store,
        })
    }

    /// Address split and widths.
    pub const fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// All blocks, by index.
    pub fn blocks(&self) -> &[CacheBlock] {
        &self.blocks
    }

    /// The block at `index`, if in range.
    pub fn block(&self, index: usize) -> Option<&CacheBlock> {
        self.blocks.get(index)
    }

    /// The backing store.
    pub const fn store(&self) -> &M {
        &self.store
    }

    /// Returns every block to the invalid power-on state.
    pub fn invalidate_all(&mut self) {
        self.blocks.fill(CacheBlock::default());
    }

    /// Evaluates a reference against the committed blocks.
    ///
    /// The backing store is read only on a miss.
    pub fn probe(&self, addr: u64) -> (CacheLookup, Option<CacheFill>) {
        let addr = self.geometry.address(addr);
        let index = self.geometry.index(addr);
        let tag = self.geometry.tag(addr);
        let block = self.blocks.get(index).copied().unwrap_or_default();
        let hit = block.valid && block.tag == tag;
        let lookup = CacheLookup {
            data: block.data,
            hit,
        };

        if hit {
            trace!(addr, index, "dcache hit");
            return (lookup, None);
        }

        let data = self.store.read(addr) & mask(self.geometry.data_width);
        debug!(addr, index, tag, data, "dcache miss, filling block");
        let fill = CacheFill {
            index,
            block: CacheBlock {
                valid: true,
                tag,
                data,
            },
        };
        (lookup, Some(fill))
    }

    /// Applies a scheduled replacement. A fill naming a block outside the cache is ignored.
    pub fn fill(&mut self, fill: Option<CacheFill>) {
        let Some(CacheFill { index, block }) = fill else {
            return;
        };
        if let Some(slot) = self.blocks.get_mut(index) {
            *slot = block;
        }
    }

    /// Performs one full reference: probe, then commit any replacement.
    pub fn lookup(&mut self, addr: u64) -> CacheLookup {
        self.tick(&addr)
    }
}

impl<M: BackingStore> Clocked for DirectMappedCache<M> {
    type Input = u64;
    type Output = CacheLookup;
    type Next = Option<CacheFill>;

    fn evaluate(&self, input: &Self::Input) -> (Self::Output, Self::Next) {
        self.probe(*input)
    }

    fn commit(&mut self, next: Self::Next) {
        self.fill(next);
    }
}

//! Backing memory tests.

use rvpipe_core::common::error::ConfigError;
use rvpipe_core::config::CacheConfig;
use rvpipe_core::core::units::cache::{BackingStore, DirectMappedCache};
use rvpipe_core::soc::memory::{MAX_ADDR_WIDTH, WordMemory};

#[test]
fn new_memory_is_zeroed_and_sized_by_address_width() {
    let mem = WordMemory::new(5).unwrap();
    assert_eq!(mem.len(), 32);
    assert!(!mem.is_empty());
    assert!((0..32).all(|addr| mem.read(addr) == 0));
}

#[test]
fn from_fn_initializes_every_word() {
    let mem = WordMemory::from_fn(4, |addr| addr * 3).unwrap();
    assert_eq!(mem.len(), 16);
    assert_eq!(mem.read(15), 45);
}

#[test]
fn wide_address_space_is_fully_backed() {
    let mut mem = WordMemory::from_fn(21, |addr| addr + 1).unwrap();
    assert_eq!(mem.len(), 1 << 21);
    assert_eq!(mem.read(0x10_0000), 0x10_0001);
    assert_eq!(mem.read(0x1F_FFFF), 0x20_0000);

    mem.write(0x10_0000, 5);
    assert_eq!(mem.read(0x10_0000), 5);
}

#[test]
fn wide_cache_fills_from_high_addresses() {
    let config = CacheConfig {
        addr_width: 21,
        ..CacheConfig::default()
    };
    let mem = WordMemory::from_fn(config.addr_width, |addr| addr + 1).unwrap();
    let mut cache = DirectMappedCache::new(&config, mem).unwrap();
    cache.lookup(0x10_0000);
    let hit = cache.lookup(0x10_0000);
    assert!(hit.hit);
    assert_eq!(hit.data, 0x10_0001);
}

#[test]
fn too_wide_address_space_is_rejected() {
    let width = MAX_ADDR_WIDTH + 1;
    assert!(matches!(
        WordMemory::new(width),
        Err(ConfigError::MemoryTooWide { addr_width, max }) if addr_width == width && max == MAX_ADDR_WIDTH
    ));
    assert!(matches!(
        WordMemory::from_fn(64, |addr| addr),
        Err(ConfigError::MemoryTooWide { .. })
    ));
}

#[test]
fn writes_land_and_out_of_range_is_ignored() {
    let mut mem = WordMemory::from_words(vec![1, 2, 3]);
    mem.write(1, 20);
    mem.write(99, 7);
    assert_eq!(mem.read(1), 20);
    assert_eq!(mem.read(99), 0);
    assert_eq!(mem.len(), 3);
}

#[test]
fn shared_references_are_stores() {
    let mem = WordMemory::from_fn(2, |addr| addr + 1).unwrap();
    let by_ref: &dyn BackingStore = &mem;
    assert_eq!(by_ref.read(3), 4);
    let boxed: Box<WordMemory> = Box::new(mem.clone());
    assert_eq!(boxed.read(0), 1);
}

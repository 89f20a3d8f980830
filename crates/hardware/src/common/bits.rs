//! Bit-field helpers.
//!
//! Every signal in the models is carried in a `u64` and truncated to its declared
//! width with these helpers, the same way a fixed-width wire drops high bits.

/// Returns an all-ones mask `width` bits wide.
///
/// Widths of 64 and above saturate to `u64::MAX`.
///
/// ```
/// use rvpipe_core::common::bits::mask;
///
/// assert_eq!(mask(0), 0);
/// assert_eq!(mask(5), 0b1_1111);
/// assert_eq!(mask(64), u64::MAX);
/// ```
#[inline]
pub const fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Extracts `width` bits of `value` starting at bit `lo`.
#[inline]
pub const fn field(value: u64, lo: u32, width: u32) -> u64 {
    if lo >= 64 {
        0
    } else {
        (value >> lo) & mask(width)
    }
}

/// Sign-extends the low `width` bits of `value` to 64 bits.
///
/// ```
/// use rvpipe_core::common::bits::sign_extend;
///
/// assert_eq!(sign_extend(0xFFF, 12), u64::MAX);
/// assert_eq!(sign_extend(0x7FF, 12), 0x7FF);
/// ```
#[inline]
pub const fn sign_extend(value: u64, width: u32) -> u64 {
    if width == 0 {
        return 0;
    }
    if width >= 64 {
        return value;
    }
    let shift = 64 - width;
    (((value << shift) as i64) >> shift) as u64
}

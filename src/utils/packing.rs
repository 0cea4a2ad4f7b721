/*!
# Packing

Helpers to store two 32-bit values in a single `u64`. The first value occupies the high bits,
so ordering packed values orders them lexicographically by `(high, low)` as long as `low` is
interpreted as unsigned.
*/

/// Packs `high` into the upper and `low` into the lower 32 bits
#[inline]
pub const fn pack(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | (low as u64)
}

/// Returns the upper 32 bits of a packed value
#[inline]
pub const fn unpack_high(value: u64) -> u32 {
    (value >> 32) as u32
}

/// Returns the lower 32 bits of a packed value
#[inline]
pub const fn unpack_low(value: u64) -> u32 {
    value as u32
}

/// Packs a neighbor (high) and a signed weight (low). Sorting such keys sorts by neighbor first.
#[inline]
pub const fn pack_weighted(neighbor: u32, weight: i32) -> u64 {
    pack(neighbor, weight as u32)
}

/// Inverse of [`pack_weighted`]
#[inline]
pub const fn unpack_weighted(value: u64) -> (u32, i32) {
    (unpack_high(value), unpack_low(value) as i32)
}

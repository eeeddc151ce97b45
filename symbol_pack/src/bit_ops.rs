/// Reads `bit_width` bits starting at `bit_offset`, LSB-first.
///
/// Bits past the end of `slice` read as zero.
pub fn get_bits(slice: &[u8], bit_offset: usize, bit_width: usize) -> u64 {
    debug_assert!(bit_width <= 32);

    let byte_pos = bit_offset / 8;
    let shift = bit_offset % 8;
    let bytes = (bit_width + shift).div_ceil(8);

    // at most 5 bytes for a 32-bit field
    let mut val = 0u64;
    for i in 0..bytes {
        if let Some(&b) = slice.get(byte_pos + i) {
            val |= (b as u64) << (i * 8);
        }
    }

    val >>= shift;

    val & mask(bit_width as u32)
}

/// Low `bits` set.
#[inline(always)]
pub const fn mask(bits: u32) -> u64 {
    if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
}

//! Reading W-bit symbols back out of a packed stream.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bit_ops::get_bits;
use crate::config::MAX_BITS_PER_SYMBOL;
use crate::error::{PackError, Result};

/// Iterates W-bit symbols LSB-first over a byte slice.
///
/// [`SymbolReader::with_count`] stops after exactly the symbols that were
/// packed. [`SymbolReader::new`] reads every whole W-bit group instead, so
/// zero padding in a flushed final byte comes back as an extra `0` whenever
/// it is W bits or wider.
///
/// ```
/// use symbol_pack::SymbolReader;
///
/// let flushed = [0xC4, 0xF2, 0x03];
/// let reader = SymbolReader::with_count(&flushed, 6, 3).unwrap();
/// assert_eq!(reader.collect::<Vec<u32>>(), vec![4, 11, 63]);
///
/// let reader = SymbolReader::new(&[0xC4, 0xF2], 6).unwrap();
/// assert_eq!(reader.collect::<Vec<u32>>(), vec![4, 11]);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolReader<'a> {
    data: &'a [u8],
    bits: u32,
    bit_pos: usize,
    remaining: usize,
}

#[inline]
fn check_width(bits: u32) -> Result<()> {
    if (1..=MAX_BITS_PER_SYMBOL).contains(&bits) {
        Ok(())
    } else {
        Err(PackError::InvalidBitWidth(bits))
    }
}

impl<'a> SymbolReader<'a> {
    /// Reader over every whole W-bit group in `data`.
    pub fn new(data: &'a [u8], bits: u32) -> Result<Self> {
        check_width(bits)?;
        Ok(Self {
            data,
            bits,
            bit_pos: 0,
            remaining: data.len() * 8 / bits as usize,
        })
    }

    /// Reader yielding exactly `count` symbols.
    ///
    /// Fails with [`PackError::InsufficientBytes`] if `data` is too short to
    /// hold them.
    pub fn with_count(data: &'a [u8], bits: u32, count: usize) -> Result<Self> {
        check_width(bits)?;
        let needed = count
            .checked_mul(bits as usize)
            .map(|total| total.div_ceil(8))
            .unwrap_or(usize::MAX);
        if needed > data.len() {
            return Err(PackError::InsufficientBytes {
                needed,
                available: data.len(),
            });
        }
        Ok(Self {
            data,
            bits,
            bit_pos: 0,
            remaining: count,
        })
    }

    pub fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.bit_pos
    }

    /// Symbols this reader will still yield.
    pub fn remaining_symbols(&self) -> usize {
        self.remaining
    }
}

impl Iterator for SymbolReader<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let width = self.bits as usize;
        let symbol = get_bits(self.data, self.bit_pos, width) as u32;
        self.bit_pos += width;
        self.remaining -= 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SymbolReader<'_> {}

/// Reads exactly `count` symbols of width `bits` from `data`.
pub fn unpack(data: &[u8], bits: u32, count: usize) -> Result<Vec<u32>> {
    Ok(SymbolReader::with_count(data, bits, count)?.collect())
}

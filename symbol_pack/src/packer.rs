//! Streaming W-bit symbol packer.
//!
//! Each symbol is ORed into a 64-bit accumulator above the bits still
//! pending, and whole bytes are drained from the bottom, so the stream is
//! LSB-first both within a symbol and across bytes.
//!
//! ```rust
//! use symbol_pack::{BitPacker, PackerConfig};
//!
//! let mut packer = BitPacker::new(PackerConfig::skip6()).unwrap();
//! for raw in [5, 12, 64] {
//!     packer.push_raw(raw).unwrap();
//! }
//! assert_eq!(packer.valid_bits(), 2);
//! assert_eq!(packer.finish().unwrap(), None); // trailing bits dropped
//! assert_eq!(packer.into_sink(), vec![0xC4, 0xF2]);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::config::PackerConfig;
use crate::error::{PackError, Result};
use crate::sink::ByteSink;

#[derive(Debug)]
pub struct BitPacker<S: ByteSink = Vec<u8>> {
    config: PackerConfig,
    buffer: u64,
    valid_bits: u32,
    sink: S,
    symbols: usize,
    bytes: usize,
}

impl BitPacker<Vec<u8>> {
    /// Packer writing into a fresh in-memory buffer.
    pub fn new(config: PackerConfig) -> Result<Self> {
        Self::with_sink(config, Vec::new())
    }
}

impl<S: ByteSink> BitPacker<S> {
    pub fn with_sink(config: PackerConfig, sink: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            buffer: 0,
            valid_bits: 0,
            sink,
            symbols: 0,
            bytes: 0,
        })
    }

    /// Empties the accumulator. Bytes already handed to the sink stay there.
    pub fn reset(&mut self) {
        self.buffer = 0;
        self.valid_bits = 0;
    }

    /// Appends one symbol, returning how many bytes it completed.
    ///
    /// Fails with [`PackError::OutOfRange`] if `value` has bits set above
    /// `bits_per_symbol`; the accumulator is unchanged in that case.
    ///
    /// If the sink fails before any byte carrying `value` was written, the
    /// symbol is not taken and the push can be retried. If it fails after
    /// some of those bytes went out, the symbol counts as pushed and its
    /// remaining bits stay pending until the next `push` or `finish`.
    ///
    /// ```
    /// use symbol_pack::{BitPacker, PackerConfig};
    ///
    /// let mut packer = BitPacker::new(PackerConfig::wrap5()).unwrap();
    /// assert_eq!(packer.push(3).unwrap(), 0);
    /// assert_eq!(packer.valid_bits(), 5);
    /// assert!(packer.push(32).is_err());
    /// ```
    pub fn push(&mut self, value: u32) -> Result<usize> {
        let bits = self.config.bits_per_symbol;
        if value as u64 > self.config.symbol_mask() {
            return Err(PackError::OutOfRange { value, bits });
        }

        // bytes left over from an earlier sink failure go first
        let backlog = self.drain()?;

        let (buffer, valid_bits, bytes) = (self.buffer, self.valid_bits, self.bytes);
        self.buffer |= (value as u64) << self.valid_bits;
        self.valid_bits += bits;

        // At most one byte for W < 8; wider symbols need the loop.
        match self.drain() {
            Ok(emitted) => {
                self.symbols += 1;
                debug_assert!(self.valid_bits < 8);
                Ok(backlog + emitted)
            }
            Err(err) => {
                if self.bytes == bytes {
                    self.buffer = buffer;
                    self.valid_bits = valid_bits;
                } else {
                    self.symbols += 1;
                }
                Err(err)
            }
        }
    }

    /// Writes out every whole byte in the accumulator.
    fn drain(&mut self) -> Result<usize> {
        let mut emitted = 0;
        while self.valid_bits >= 8 {
            self.sink.write_byte((self.buffer & 0xFF) as u8)?;
            self.buffer >>= 8;
            self.valid_bits -= 8;
            self.bytes += 1;
            emitted += 1;
        }
        Ok(emitted)
    }

    /// Sanitizes `raw` with the configured policy, then pushes it.
    ///
    /// Returns `false` if the policy dropped the value.
    pub fn push_raw(&mut self, raw: u32) -> Result<bool> {
        match self
            .config
            .sanitize
            .apply(raw, self.config.bits_per_symbol)
        {
            Some(symbol) => {
                self.push(symbol)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Pushes every symbol, returning the total number of bytes emitted.
    pub fn extend<I>(&mut self, symbols: I) -> Result<usize>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut emitted = 0;
        for symbol in symbols {
            emitted += self.push(symbol)?;
        }
        Ok(emitted)
    }

    /// Ends the stream.
    ///
    /// With `flush_on_finish` any leftover bits are zero-padded into one last
    /// byte, which is written to the sink and returned. Otherwise they are
    /// dropped. The accumulator is empty afterwards either way.
    ///
    /// A sink failure leaves the pending bits in place so `finish` can be
    /// called again.
    pub fn finish(&mut self) -> Result<Option<u8>> {
        self.drain()?;
        let tail = if self.config.flush_on_finish && self.valid_bits > 0 {
            let byte = (self.buffer & 0xFF) as u8;
            self.sink.write_byte(byte)?;
            self.bytes += 1;
            Some(byte)
        } else {
            None
        };
        self.reset();
        Ok(tail)
    }

    /// Bits held in the accumulator and not yet written, always `< 8`
    /// between calls.
    pub fn valid_bits(&self) -> u32 {
        self.valid_bits
    }

    pub fn symbols_pushed(&self) -> usize {
        self.symbols
    }

    pub fn bytes_emitted(&self) -> usize {
        self.bytes
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Packs `symbols` into a new buffer and finishes the stream.
pub fn pack<I>(config: PackerConfig, symbols: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = u32>,
{
    let mut packer = BitPacker::new(config)?;
    packer.extend(symbols)?;
    packer.finish()?;
    Ok(packer.into_sink())
}

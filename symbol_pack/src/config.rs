use crate::bit_ops::mask;
use crate::error::{PackError, Result};
use crate::sanitize::SanitizePolicy;

/// Widest symbol the 64-bit accumulator can take on top of 7 leftover bits.
pub const MAX_BITS_PER_SYMBOL: u32 = 32;

/// Packing parameters for one stream.
///
/// # Examples
///
/// ```
/// use symbol_pack::{PackerConfig, SanitizePolicy};
///
/// let config = PackerConfig::skip6().with_flush_on_finish(true);
/// assert_eq!(config.bits_per_symbol, 6);
/// assert_eq!(config.sanitize, SanitizePolicy::Skip);
/// assert_eq!(config.max_raw(), 64);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PackerConfig {
    pub bits_per_symbol: u32,
    pub sanitize: SanitizePolicy,
    /// Zero-pad and emit the last partial byte on `finish`.
    pub flush_on_finish: bool,
}

impl PackerConfig {
    pub const fn new(bits_per_symbol: u32, sanitize: SanitizePolicy) -> Self {
        Self {
            bits_per_symbol,
            sanitize,
            flush_on_finish: false,
        }
    }

    /// Raw values 1..=32 in 5-bit symbols, wrapping anything else.
    pub const fn wrap5() -> Self {
        Self::new(5, SanitizePolicy::Wrap)
    }

    /// Raw values 1..=64 in 6-bit symbols, dropping anything else.
    pub const fn skip6() -> Self {
        Self::new(6, SanitizePolicy::Skip)
    }

    pub const fn with_flush_on_finish(mut self, flush: bool) -> Self {
        self.flush_on_finish = flush;
        self
    }

    pub const fn with_sanitize(mut self, policy: SanitizePolicy) -> Self {
        self.sanitize = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if (1..=MAX_BITS_PER_SYMBOL).contains(&self.bits_per_symbol) {
            Ok(())
        } else {
            Err(PackError::InvalidBitWidth(self.bits_per_symbol))
        }
    }

    /// `2^W - 1`
    #[inline]
    pub fn symbol_mask(&self) -> u64 {
        mask(self.bits_per_symbol)
    }

    /// Largest raw value the skip policy keeps, `2^W`.
    #[inline]
    pub fn max_raw(&self) -> u64 {
        self.symbol_mask() + 1
    }
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self::wrap5()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let w = PackerConfig::wrap5();
        assert_eq!(w.symbol_mask(), 31);
        assert_eq!(w.sanitize, SanitizePolicy::Wrap);
        assert!(!w.flush_on_finish);
        assert_eq!(PackerConfig::default(), w);

        let s = PackerConfig::skip6();
        assert_eq!(s.max_raw(), 64);
        assert_eq!(w.with_sanitize(SanitizePolicy::Skip).sanitize, SanitizePolicy::Skip);
        assert_eq!(
            PackerConfig::new(6, SanitizePolicy::Wrap).with_sanitize(SanitizePolicy::Skip),
            s
        );
    }

    #[test]
    fn rejects_bad_width() {
        assert!(matches!(
            PackerConfig::new(0, SanitizePolicy::Wrap).validate(),
            Err(PackError::InvalidBitWidth(0))
        ));
        assert!(matches!(
            PackerConfig::new(33, SanitizePolicy::Wrap).validate(),
            Err(PackError::InvalidBitWidth(33))
        ));
        assert!(PackerConfig::new(32, SanitizePolicy::Skip).validate().is_ok());
    }
}

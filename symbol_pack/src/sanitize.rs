//! Mapping raw one-indexed numbers onto W-bit symbols.
//!
//! Raw values are one-indexed (`1..=2^W`); symbols are zero-indexed
//! (`0..2^W`). The two policies differ only in what happens to raw values
//! outside that range.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;
use core::str::FromStr;

use crate::bit_ops::mask;
use crate::error::PackError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SanitizePolicy {
    /// `(raw - 1) & (2^W - 1)`. Out-of-range input wraps silently, and
    /// raw `0` becomes the largest symbol.
    #[default]
    Wrap,
    /// Discard raw values outside `1..=2^W`, otherwise `raw - 1`.
    Skip,
}

impl SanitizePolicy {
    /// Maps `raw` onto a `bits`-wide symbol, or `None` if the policy drops it.
    #[inline]
    pub fn apply(self, raw: u32, bits: u32) -> Option<u32> {
        match self {
            SanitizePolicy::Wrap => Some((raw.wrapping_sub(1) as u64 & mask(bits)) as u32),
            SanitizePolicy::Skip => {
                let max_raw = mask(bits) + 1;
                if raw == 0 || raw as u64 > max_raw {
                    None
                } else {
                    Some(raw - 1)
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SanitizePolicy::Wrap => "wrap",
            SanitizePolicy::Skip => "skip",
        }
    }
}

impl fmt::Display for SanitizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SanitizePolicy {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("wrap") {
            Ok(SanitizePolicy::Wrap)
        } else if s.eq_ignore_ascii_case("skip") {
            Ok(SanitizePolicy::Skip)
        } else {
            Err(PackError::UnknownPolicy(String::from(s)))
        }
    }
}

/// Inverse of sanitizing for in-range input: symbol back to its raw value.
///
/// Wraps for the top symbol of a 32-bit width, whose raw value is `2^32`.
#[inline]
pub fn restore_raw(symbol: u32) -> u32 {
    symbol.wrapping_add(1)
}

/// A policy bound to a bit width, counting what it keeps and drops.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    policy: SanitizePolicy,
    bits: u32,
    retained: usize,
    discarded: usize,
}

impl Sanitizer {
    pub fn new(policy: SanitizePolicy, bits: u32) -> Self {
        Self {
            policy,
            bits,
            retained: 0,
            discarded: 0,
        }
    }

    pub fn sanitize(&mut self, raw: u32) -> Option<u32> {
        let out = self.policy.apply(raw, self.bits);
        match out {
            Some(_) => self.retained += 1,
            None => self.discarded += 1,
        }
        out
    }

    pub fn policy(&self) -> SanitizePolicy {
        self.policy
    }

    pub fn retained(&self) -> usize {
        self.retained
    }

    pub fn discarded(&self) -> usize {
        self.discarded
    }
}

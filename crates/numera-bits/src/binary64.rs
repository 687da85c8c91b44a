//! IEEE-754 binary64 bit patterns.
//!
//! Layout, most significant bit first:
//!
//! ```text
//!  63 | 62 ........ 52 | 51 ................... 0
//! sign|  exponent (11) |      mantissa (52)
//! ```

use std::fmt;

/// Width of a binary64 value in bits.
pub const WIDTH: usize = 64;

const EXPONENT_BITS: u32 = 11;
const MANTISSA_BITS: u32 = 52;
const EXPONENT_MASK: u64 = (1 << EXPONENT_BITS) - 1;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;

/// Renders the raw bits of `d` as 64 `'0'`/`'1'` characters, MSB first.
///
/// Exact for every input including subnormals, signed zeros, infinities
/// and NaN payloads.
#[must_use]
pub fn bits_of(d: f64) -> String {
    format!("{:064b}", d.to_bits())
}

/// Same as [`bits_of`], walking the pattern one mask at a time.
#[must_use]
pub fn bits_of_masked(d: f64) -> String {
    let raw = d.to_bits();
    (0..WIDTH)
        .map(|i| if raw & (1u64 << (WIDTH - 1 - i)) != 0 { '1' } else { '0' })
        .collect()
}

/// Field view of a binary64 value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binary64(u64);

impl Binary64 {
    /// Wraps a raw bit pattern.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bit pattern.
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Reinterprets the pattern as a float.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Returns true if the sign bit is set.
    #[must_use]
    pub const fn sign(self) -> bool {
        self.0 >> 63 == 1
    }

    /// The 11-bit biased exponent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn biased_exponent(self) -> u16 {
        ((self.0 >> MANTISSA_BITS) & EXPONENT_MASK) as u16
    }

    /// The 52-bit stored mantissa, without the implicit leading bit.
    #[must_use]
    pub const fn mantissa(self) -> u64 {
        self.0 & MANTISSA_MASK
    }

    /// Returns true for subnormal values (zero exponent, non-zero mantissa).
    #[must_use]
    pub const fn is_subnormal(self) -> bool {
        self.biased_exponent() == 0 && self.mantissa() != 0
    }
}

impl From<f64> for Binary64 {
    fn from(d: f64) -> Self {
        Self(d.to_bits())
    }
}

impl fmt::Debug for Binary64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binary64({:#018x})", self.0)
    }
}

/// Renders `s|eeeeeeeeeee|mmmm...`.
impl fmt::Display for Binary64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{:011b}|{:052b}",
            u8::from(self.sign()),
            self.biased_exponent(),
            self.mantissa()
        )
    }
}

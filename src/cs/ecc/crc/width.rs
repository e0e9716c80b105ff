//! Register widths and bit reflection.
//!
//! Every CRC routine in this crate is written once against [`Width`] and
//! instantiated for `u8`, `u16` and `u32`.

use num_traits::PrimInt;
use std::fmt::{Debug, LowerHex, UpperHex};

/// An unsigned integer usable as a CRC register.
pub trait Width: PrimInt + Debug + UpperHex + LowerHex + Send + Sync + 'static {
    /// Register size in bits.
    const WIDTH: u32;
    /// Trailer size in bytes when the CRC is appended to a packet.
    const BYTES: usize;

    /// Widens a byte into the low bits of a register.
    fn from_byte(byte: u8) -> Self;

    /// The least significant byte of the register.
    fn low_byte(self) -> u8;

    /// `self >> 8`, yielding zero for an 8-bit register.
    fn shr_byte(self) -> Self;

    /// `self << 8`, yielding zero for an 8-bit register.
    fn shl_byte(self) -> Self;

    /// Writes the register little-endian into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != Self::BYTES`.
    fn write_le(self, out: &mut [u8]);

    /// Reads a little-endian register from `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::BYTES`.
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_width {
    ($($t:ty),* $(,)?) => {
        $(
            impl Width for $t {
                const WIDTH: u32 = <$t>::BITS;
                const BYTES: usize = std::mem::size_of::<$t>();

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    byte as $t
                }

                #[inline]
                fn low_byte(self) -> u8 {
                    (self & 0xFF) as u8
                }

                #[inline]
                fn shr_byte(self) -> Self {
                    self.checked_shr(8).unwrap_or(0)
                }

                #[inline]
                fn shl_byte(self) -> Self {
                    self.checked_shl(8).unwrap_or(0)
                }

                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }

                fn read_le(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_width!(u8, u16, u32);

/// Reverses the bit order of `value` (bit 0 <-> bit WIDTH-1).
pub fn reflect<W: Width>(value: W) -> W {
    let mut input = value;
    let mut result = W::zero();
    for _ in 0..W::WIDTH {
        result = (result << 1) | (input & W::one());
        input = input >> 1;
    }
    result
}

/// Reverses the bit order of a single byte.
#[inline]
pub fn reflect_byte(byte: u8) -> u8 {
    reflect(byte)
}

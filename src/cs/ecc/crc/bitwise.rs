//! Bit-by-bit CRC engine.
//!
//! A single shift-and-XOR core serves both processing orders:
//!
//! - **Forward** (MSB-first): bytes enter the top of the register, which
//!   shifts left against the normal-form polynomial.
//! - **Mirror** (LSB-first): bytes enter the bottom of the register, which
//!   shifts right against the reflected polynomial. Byte and output
//!   reflection are inverted so both orders produce the same CRC.
//!
//! This engine is the source of truth: lookup tables are derived from it.

use super::model::{CrcModel, CrcParams};
use super::width::{reflect, reflect_byte, Width};
use crate::error::{Error, Result};

/// Processing order of the bit-by-bit engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// MSB-first, left-shifting register.
    Forward,
    /// LSB-first, right-shifting register.
    Mirror,
}

impl Direction {
    /// The cheaper order for a model: mirror when both input and output are
    /// reflected, forward otherwise.
    pub fn preferred<W: Width>(params: &CrcParams<W>) -> Self {
        if params.reflect_in() && params.reflect_out() {
            Direction::Mirror
        } else {
            Direction::Forward
        }
    }
}

/// Computes the CRC of `data` with the given parameters and processing order.
///
/// Returns [`Error::EmptyInput`] if `data` is empty.
pub fn checksum<W: Width>(params: &CrcParams<W>, direction: Direction, data: &[u8]) -> Result<W> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(register(params, direction, data))
}

/// The shift-and-XOR core. Accepts empty input.
pub(crate) fn register<W: Width>(params: &CrcParams<W>, direction: Direction, data: &[u8]) -> W {
    // Mirror mode keeps the register bit-reversed throughout.
    let (poly, mut reg, flip_in, flip_out) = match direction {
        Direction::Forward => (
            params.polynomial(),
            params.init(),
            params.reflect_in(),
            params.reflect_out(),
        ),
        Direction::Mirror => (
            reflect(params.polynomial()),
            reflect(params.init()),
            !params.reflect_in(),
            !params.reflect_out(),
        ),
    };
    let top_bit = W::one() << (W::WIDTH as usize - 1);
    let byte_offset = W::WIDTH as usize - 8;

    for &byte in data {
        let byte = if flip_in { reflect_byte(byte) } else { byte };
        reg = match direction {
            Direction::Forward => reg ^ (W::from_byte(byte) << byte_offset),
            Direction::Mirror => reg ^ W::from_byte(byte),
        };
        for _ in 0..8 {
            reg = match direction {
                Direction::Forward if reg & top_bit != W::zero() => (reg << 1) ^ poly,
                Direction::Forward => reg << 1,
                Direction::Mirror if reg & W::one() != W::zero() => (reg >> 1) ^ poly,
                Direction::Mirror => reg >> 1,
            };
        }
    }

    if flip_out {
        reg = reflect(reg);
    }
    reg ^ params.xorout()
}

/// CRC of `data` under a named model, MSB-first.
pub fn compute<M: CrcModel>(model: M, data: &[u8]) -> Result<M::Width> {
    checksum(model.params(), Direction::Forward, data)
}

/// CRC of `data` under a named model, LSB-first.
pub fn compute_mirror<M: CrcModel>(model: M, data: &[u8]) -> Result<M::Width> {
    checksum(model.params(), Direction::Mirror, data)
}

/// CRC of `data` under a named model, in the model's preferred order.
pub fn compute_preferred<M: CrcModel>(model: M, data: &[u8]) -> Result<M::Width> {
    let params = model.params();
    checksum(params, Direction::preferred(params), data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::ecc::crc::model::{Crc16Model, Crc32Model, Crc8Model, CHECK_INPUT};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_check_values<M: CrcModel>() {
        for &model in M::ALL {
            let expected = model.params().check();
            assert_eq!(compute(model, CHECK_INPUT), Ok(expected), "{model} forward");
            assert_eq!(compute_mirror(model, CHECK_INPUT), Ok(expected), "{model} mirror");
        }
    }

    fn assert_directions_agree<M: CrcModel>(rng: &mut StdRng) {
        for &model in M::ALL {
            for _ in 0..50 {
                let len = rng.gen_range(1..200);
                let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                assert_eq!(
                    compute(model, &data),
                    compute_mirror(model, &data),
                    "{model} on {len} bytes"
                );
            }
        }
    }

    #[test]
    fn test_check_values_all_models() {
        assert_check_values::<Crc8Model>();
        assert_check_values::<Crc16Model>();
        assert_check_values::<Crc32Model>();
    }

    #[test]
    fn test_published_vectors() {
        assert_eq!(compute(Crc16Model::Modbus, b"123456789"), Ok(0x4B37));
        assert_eq!(compute(Crc32Model::Crc32, b"123456789"), Ok(0xCBF4_3926));
        assert_eq!(compute_mirror(Crc32Model::Crc32, b"a"), Ok(0xE8B7_BE43));
    }

    #[test]
    fn test_single_zero_byte() {
        // A zero seed stays zero through a zero byte.
        assert_eq!(compute(Crc16Model::Ibm, &[0x00]), Ok(0x0000));
        assert_eq!(compute(Crc16Model::Xmodem, &[0x00]), Ok(0x0000));
        assert_eq!(compute(Crc16Model::Ccitt, &[0x00]), Ok(0x0000));
        assert_eq!(compute(Crc8Model::Crc8, &[0x00]), Ok(0x00));
        assert_eq!(compute(Crc8Model::Itu, &[0x00]), Ok(0x55));
        assert_eq!(compute(Crc16Model::Maxim, &[0x00]), Ok(0xFFFF));
        assert_eq!(compute(Crc16Model::Dnp, &[0x00]), Ok(0xFFFF));
    }

    #[test]
    fn test_single_byte_one() {
        assert_eq!(compute(Crc16Model::Xmodem, &[0x01]), Ok(0x1021));
        assert_eq!(compute(Crc8Model::Crc8, &[0x01]), Ok(0x07));
    }

    #[test]
    fn test_directions_agree_on_random_data() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        assert_directions_agree::<Crc8Model>(&mut rng);
        assert_directions_agree::<Crc16Model>(&mut rng);
        assert_directions_agree::<Crc32Model>(&mut rng);
    }

    #[test]
    fn test_mixed_reflection_and_asymmetric_seed() {
        let mut rng = StdRng::seed_from_u64(42);
        for (refin, refout) in [(true, false), (false, true)] {
            let params = CrcParams::builder("mixed", 0x1021u16)
                .initial_value(0x1D0F)
                .final_xor(0x00FF)
                .reflect_in(refin)
                .reflect_out(refout)
                .build()
                .unwrap();
            for _ in 0..50 {
                let data: Vec<u8> = (0..rng.gen_range(1..64)).map(|_| rng.gen()).collect();
                assert_eq!(
                    checksum(&params, Direction::Forward, &data),
                    checksum(&params, Direction::Mirror, &data)
                );
            }
        }
    }

    #[test]
    fn test_preferred_direction() {
        assert_eq!(
            Direction::preferred(Crc16Model::Modbus.params()),
            Direction::Mirror
        );
        assert_eq!(
            Direction::preferred(Crc16Model::CcittFalse.params()),
            Direction::Forward
        );
        assert_eq!(
            compute_preferred(Crc32Model::Mpeg2, CHECK_INPUT),
            Ok(0x0376_E6E7)
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(compute(Crc16Model::Modbus, &[]), Err(Error::EmptyInput));
        assert_eq!(compute_mirror(Crc8Model::Rohc, &[]), Err(Error::EmptyInput));
        assert_eq!(compute_preferred(Crc32Model::Crc32, &[]), Err(Error::EmptyInput));
    }
}

//! Table-driven CRC engine.
//!
//! Processes one byte per step through a 256-entry table. Models with
//! reflected input run a right-shifting register, the others a
//! left-shifting one. When input and output reflection differ the final
//! register is reflected before the output XOR, so every parameter set is
//! supported and matches the bit-by-bit engine.

use std::fmt;

use super::bitwise::{self, Direction};
use super::digest::CrcDigest;
use super::model::{CrcModel, CrcParams};
use super::width::{reflect, Width};
use crate::error::{Error, Result};

/// Generates the 256-entry lookup table for a parameter set.
///
/// Entry `i` is the bit-by-bit register after the single byte `i`, starting
/// from a zero seed, in the orientation selected by the input reflection.
pub fn generate_table<W: Width>(params: &CrcParams<W>) -> [W; 256] {
    let raw = params.unseeded();
    let direction = if params.reflect_in() {
        Direction::Mirror
    } else {
        Direction::Forward
    };

    let mut table = [W::zero(); 256];
    for (byte, entry) in (0..=u8::MAX).zip(table.iter_mut()) {
        *entry = bitwise::register(&raw, direction, &[byte]);
    }
    table
}

/// A parameter set paired with its lookup table.
#[derive(Clone)]
pub struct CrcTable<W> {
    params: CrcParams<W>,
    entries: [W; 256],
}

impl<W: Width> CrcTable<W> {
    /// Builds the table for `params`.
    pub fn new(params: &CrcParams<W>) -> Self {
        Self {
            params: *params,
            entries: generate_table(params),
        }
    }

    /// The parameters this table was built from.
    pub fn params(&self) -> &CrcParams<W> {
        &self.params
    }

    /// The raw table entries.
    pub fn entries(&self) -> &[W; 256] {
        &self.entries
    }

    /// Computes the CRC of `data`.
    ///
    /// Returns [`Error::EmptyInput`] if `data` is empty.
    pub fn checksum(&self, data: &[u8]) -> Result<W> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(self.finish(self.update(self.seed(), data)))
    }

    /// Starts a streaming computation over this table.
    pub fn digest(&self) -> CrcDigest<'_, W> {
        CrcDigest::new(self)
    }

    pub(crate) fn seed(&self) -> W {
        if self.params.reflect_in() {
            reflect(self.params.init())
        } else {
            self.params.init()
        }
    }

    pub(crate) fn update(&self, mut reg: W, data: &[u8]) -> W {
        if self.params.reflect_in() {
            for &byte in data {
                let index = reg.low_byte() ^ byte;
                reg = reg.shr_byte() ^ self.entries[index as usize];
            }
        } else {
            let top_byte = W::WIDTH as usize - 8;
            for &byte in data {
                let index = (reg >> top_byte).low_byte() ^ byte;
                reg = reg.shl_byte() ^ self.entries[index as usize];
            }
        }
        reg
    }

    pub(crate) fn finish(&self, reg: W) -> W {
        let reg = if self.params.reflect_in() != self.params.reflect_out() {
            reflect(reg)
        } else {
            reg
        };
        reg ^ self.params.xorout()
    }
}

impl<W: Width> fmt::Debug for CrcTable<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrcTable")
            .field("params", &self.params)
            .field("entries", &format_args!("[{:#X}, {:#X}, ..]", self.entries[0], self.entries[1]))
            .finish()
    }
}

/// CRC of `data` under a named model, using the model's shared table.
pub fn compute_table<M: CrcModel>(model: M, data: &[u8]) -> Result<M::Width> {
    model.table().checksum(data)
}

/// Regenerates the lookup table of a named model.
pub fn generate_model_table<M: CrcModel>(model: M) -> [M::Width; 256] {
    generate_table(model.params())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::ecc::crc::bitwise::{compute, compute_mirror};
    use crate::cs::ecc::crc::model::{Crc16Model, Crc32Model, Crc8Model, CHECK_INPUT};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_matches_bitwise<M: CrcModel>(rng: &mut StdRng) {
        for &model in M::ALL {
            assert_eq!(
                compute_table(model, CHECK_INPUT),
                Ok(model.params().check()),
                "{model} check value"
            );
            for byte in 0..=u8::MAX {
                assert_eq!(compute_table(model, &[byte]), compute(model, &[byte]));
            }
            for _ in 0..100 {
                let len = rng.gen_range(1..512);
                let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                let expected = compute(model, &data);
                assert_eq!(compute_table(model, &data), expected, "{model} on {len} bytes");
                assert_eq!(compute_mirror(model, &data), expected);
            }
        }
    }

    #[test]
    fn test_table_matches_bitwise_all_models() {
        let mut rng = StdRng::seed_from_u64(2023);
        assert_matches_bitwise::<Crc8Model>(&mut rng);
        assert_matches_bitwise::<Crc16Model>(&mut rng);
        assert_matches_bitwise::<Crc32Model>(&mut rng);
    }

    #[test]
    fn test_known_table_entries() {
        let crc32 = Crc32Model::Crc32.table().entries();
        assert_eq!(crc32[0], 0x0000_0000);
        assert_eq!(crc32[1], 0x7707_3096);
        assert_eq!(crc32[255], 0x2D02_EF8D);

        let mpeg2 = Crc32Model::Mpeg2.table().entries();
        assert_eq!(mpeg2[1], 0x04C1_1DB7);

        let xmodem = Crc16Model::Xmodem.table().entries();
        assert_eq!(xmodem[1], 0x1021);
        assert_eq!(xmodem[255], 0x1EF0);

        let modbus = Crc16Model::Modbus.table().entries();
        assert_eq!(modbus[1], 0xC0C1);

        assert_eq!(Crc8Model::Crc8.table().entries()[1], 0x07);
    }

    #[test]
    fn test_models_sharing_a_polynomial_share_entries() {
        let ibm = Crc16Model::Ibm.table().entries();
        assert_eq!(Crc16Model::Usb.table().entries(), ibm);
        assert_eq!(Crc16Model::Modbus.table().entries(), ibm);
        assert_eq!(Crc8Model::Crc8.table().entries(), Crc8Model::Itu.table().entries());
        assert_eq!(generate_model_table(Crc16Model::Maxim), *ibm);
    }

    #[test]
    fn test_mixed_reflection_supported() {
        let mut rng = StdRng::seed_from_u64(99);
        for (refin, refout) in [(true, false), (false, true)] {
            let params = CrcParams::builder("mixed-32", 0x04C1_1DB7u32)
                .initial_value(0x1234_5678)
                .final_xor(0xFFFF_FFFF)
                .reflect_in(refin)
                .reflect_out(refout)
                .build()
                .unwrap();
            let table = CrcTable::new(&params);
            assert_eq!(table.checksum(CHECK_INPUT), Ok(params.check()));
            for _ in 0..50 {
                let data: Vec<u8> = (0..rng.gen_range(1..128)).map(|_| rng.gen()).collect();
                assert_eq!(
                    table.checksum(&data),
                    bitwise::checksum(&params, Direction::Forward, &data)
                );
            }
        }
    }

    #[test]
    fn test_custom_8bit_left_shift() {
        let params = CrcParams::builder("CRC-8/SAE-J1850", 0x1Du8)
            .initial_value(0xFF)
            .final_xor(0xFF)
            .build()
            .unwrap();
        assert_eq!(params.check(), 0x4B);
        assert_eq!(CrcTable::new(&params).checksum(CHECK_INPUT), Ok(0x4B));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(compute_table(Crc16Model::X25, &[]), Err(Error::EmptyInput));
    }
}

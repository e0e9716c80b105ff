//! CRC (Cyclic Redundancy Check) implementation.
//!
//! This module provides parameterized CRC engines for 8, 16 and 32 bit
//! registers, plus the named reference models commonly found in protocols:
//! - CRC-8 (SMBus, ITU I.432.1, ROHC, Dallas/Maxim 1-Wire)
//! - CRC-16 (IBM, MAXIM, USB, MODBUS, CCITT, CCITT-FALSE, X25, XMODEM, DNP)
//! - CRC-32 (IEEE 802.3, MPEG-2)
//!
//! # How CRCs Work
//!
//! CRC calculations treat data as a binary polynomial and perform modulo-2
//! division by a generator polynomial, using the remainder as the checksum.
//! A model fixes the polynomial, the register seed, whether bytes and the
//! result are bit-reflected, and a final XOR.
//!
//! Two engines are provided and always agree:
//! - [`bitwise`]: shift-and-XOR one bit at a time, MSB-first
//!   ([`compute`]) or LSB-first ([`compute_mirror`]).
//! - [`table`]: one table lookup per byte ([`compute_table`]), with tables
//!   derived from the bitwise engine and built once per width on first use.
//!
//! Empty input is rejected with [`Error::EmptyInput`](crate::Error::EmptyInput)
//! rather than returning the seed.
//!
//! # Examples
//!
//! ```
//! use checksum_algos::crc::{self, Crc16Model, Crc32Model};
//!
//! assert_eq!(crc::compute(Crc16Model::Modbus, b"123456789").unwrap(), 0x4B37);
//! assert_eq!(crc::compute_table(Crc32Model::Crc32, b"123456789").unwrap(), 0xCBF4_3926);
//!
//! let mut frame = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x00];
//! crc::append(Crc16Model::Modbus, &mut frame).unwrap();
//! assert!(crc::verify(Crc16Model::Modbus, &frame).unwrap());
//! ```
//!
//! Custom parameter sets are built with [`CrcParams::builder`]:
//!
//! ```
//! use checksum_algos::crc::{CrcParams, CrcTable};
//!
//! let kermit = CrcParams::builder("CRC-16/KERMIT", 0x1021u16)
//!     .reflect_in(true)
//!     .reflect_out(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(kermit.check(), 0x2189);
//! assert_eq!(CrcTable::new(&kermit).checksum(b"123456789").unwrap(), 0x2189);
//! ```

pub mod bitwise;
pub mod digest;
pub mod model;
pub mod packet;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod table;
pub mod width;

pub use bitwise::{checksum, compute, compute_mirror, compute_preferred, Direction};
pub use digest::{digest, CrcDigest};
pub use model::{
    Crc16Model, Crc32Model, Crc8Model, CrcModel, CrcParams, CrcParamsBuilder, CHECK_INPUT,
};
pub use packet::{append, append_with_table, verify, verify_with_table, with_trailer};
#[cfg(feature = "parallel")]
pub use parallel::par_compute_table;
pub use table::{compute_table, generate_model_table, generate_table, CrcTable};
pub use width::{reflect, reflect_byte, Width};

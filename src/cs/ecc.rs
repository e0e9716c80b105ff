//! Error detection codes.
//!
//! This module provides checksums used to detect corruption in data
//! transmission and storage:
//! - CRC-8, CRC-16 and CRC-32 reference models
//! - Bit-by-bit and table-driven engines
//! - Packet trailer append/verify helpers

pub mod crc;

pub use crc::{Crc16Model, Crc32Model, Crc8Model, CrcModel, CrcParams, CrcTable};

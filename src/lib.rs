//! Checksum primitives: parameterized CRC-8/16/32 engines and MD5.
//!
//! ```
//! use checksum_algos::{crc, md5};
//!
//! let crc = crc::compute(crc::Crc16Model::Xmodem, b"123456789").unwrap();
//! assert_eq!(crc, 0x31C3);
//! assert_eq!(md5::md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//! ```

pub mod cs;
pub mod error;

pub use cs::{crc, md5};
pub use error::{Error, Result};

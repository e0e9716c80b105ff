//! CRC parameter sets and the named reference models.
//!
//! Each width has an immutable registry of [`CrcParams`] indexed by its model
//! enum. Lookup tables for the registry are generated once, on first use, and
//! shared read-only afterwards.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::bitwise::{self, Direction};
use super::table::CrcTable;
use super::width::Width;
use crate::error::{Error, Result};

/// The ASCII string whose CRC is the published "check" value of a model.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// An immutable CRC parameter set.
///
/// The polynomial is stored without its implicit top bit, in normal
/// (MSB-first) form, for every model regardless of reflection.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CrcParams<W> {
    name: &'static str,
    polynomial: W,
    init: W,
    xorout: W,
    refin: bool,
    refout: bool,
    check: W,
}

impl<W: Width> CrcParams<W> {
    /// Starts a builder for a custom model.
    pub fn builder(name: &'static str, polynomial: W) -> CrcParamsBuilder<W> {
        CrcParamsBuilder::new(name, polynomial)
    }

    /// Canonical model name, e.g. `CRC-16/MODBUS`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Generator polynomial in normal form.
    pub fn polynomial(&self) -> W {
        self.polynomial
    }

    /// Register seed.
    pub fn init(&self) -> W {
        self.init
    }

    /// Value XORed into the final register.
    pub fn xorout(&self) -> W {
        self.xorout
    }

    /// Whether input bytes are bit-reversed before entering the register.
    pub fn reflect_in(&self) -> bool {
        self.refin
    }

    /// Whether the final register is bit-reversed before the final XOR.
    pub fn reflect_out(&self) -> bool {
        self.refout
    }

    /// CRC of [`CHECK_INPUT`] under this model.
    pub fn check(&self) -> W {
        self.check
    }

    /// Register width in bits.
    pub fn width(&self) -> u32 {
        W::WIDTH
    }

    /// The same polynomial and input orientation with a zero seed, zero
    /// final XOR and no output correction. Running it over one byte yields
    /// that byte's lookup table entry.
    pub(crate) fn unseeded(&self) -> Self {
        Self {
            init: W::zero(),
            xorout: W::zero(),
            refout: self.refin,
            ..*self
        }
    }
}

impl<W: Width> fmt::Debug for CrcParams<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrcParams")
            .field("name", &self.name)
            .field("width", &W::WIDTH)
            .field("polynomial", &format_args!("{:#X}", self.polynomial))
            .field("init", &format_args!("{:#X}", self.init))
            .field("xorout", &format_args!("{:#X}", self.xorout))
            .field("refin", &self.refin)
            .field("refout", &self.refout)
            .field("check", &format_args!("{:#X}", self.check))
            .finish()
    }
}

impl<W: Width> fmt::Display for CrcParams<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (polynomial: 0x{:0digits$X})",
            self.name,
            self.polynomial,
            digits = W::BYTES * 2
        )
    }
}

/// A builder for custom CRC parameter sets.
///
/// Defaults to a zero seed, zero final XOR and no reflection.
#[derive(Debug, Clone)]
pub struct CrcParamsBuilder<W> {
    name: &'static str,
    polynomial: W,
    init: W,
    xorout: W,
    refin: bool,
    refout: bool,
}

impl<W: Width> CrcParamsBuilder<W> {
    /// Creates a builder for the given normal-form polynomial.
    pub fn new(name: &'static str, polynomial: W) -> Self {
        Self {
            name,
            polynomial,
            init: W::zero(),
            xorout: W::zero(),
            refin: false,
            refout: false,
        }
    }

    /// Sets the register seed.
    pub fn initial_value(mut self, init: W) -> Self {
        self.init = init;
        self
    }

    /// Sets the final XOR value.
    pub fn final_xor(mut self, xorout: W) -> Self {
        self.xorout = xorout;
        self
    }

    /// Enables or disables reflection of input bytes.
    pub fn reflect_in(mut self, on: bool) -> Self {
        self.refin = on;
        self
    }

    /// Enables or disables reflection of the final register.
    pub fn reflect_out(mut self, on: bool) -> Self {
        self.refout = on;
        self
    }

    /// Validates the parameters and derives the check value.
    pub fn build(self) -> Result<CrcParams<W>> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidParameters(
                "model name must not be empty".to_string(),
            ));
        }
        if self.polynomial & W::one() == W::zero() {
            return Err(Error::InvalidParameters(format!(
                "polynomial {:#X} lacks the x^0 term",
                self.polynomial
            )));
        }

        let mut params = CrcParams {
            name: self.name,
            polynomial: self.polynomial,
            init: self.init,
            xorout: self.xorout,
            refin: self.refin,
            refout: self.refout,
            check: W::zero(),
        };
        params.check = bitwise::checksum(&params, Direction::Forward, CHECK_INPUT)?;
        Ok(params)
    }
}

/// A named reference model of a fixed width.
pub trait CrcModel:
    Copy + fmt::Debug + fmt::Display + FromStr<Err = Error> + Send + Sync + 'static
{
    /// Register type of the model.
    type Width: Width;

    /// Every model of this width, in registry order.
    const ALL: &'static [Self];

    /// The model's parameters.
    fn params(self) -> &'static CrcParams<Self::Width>;

    /// The model's shared lookup table.
    fn table(self) -> &'static CrcTable<Self::Width>;

    /// Canonical model name.
    fn name(self) -> &'static str {
        self.params().name()
    }
}

macro_rules! crc_models {
    (
        $(#[$meta:meta])*
        $model:ident($width:ty) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $name:literal / $alias:literal {
                    init: $init:expr,
                    xorout: $xorout:expr,
                    poly: $poly:expr,
                    refin: $refin:expr,
                    refout: $refout:expr,
                    check: $check:expr $(,)?
                }
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $model {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $model {
            const REGISTRY: &'static [CrcParams<$width>] = &[
                $(
                    CrcParams {
                        name: $name,
                        polynomial: $poly,
                        init: $init,
                        xorout: $xorout,
                        refin: $refin,
                        refout: $refout,
                        check: $check,
                    },
                )+
            ];

            /// Short alias accepted by `FromStr`, e.g. `MODBUS`.
            pub fn alias(self) -> &'static str {
                match self {
                    $( $model::$variant => $alias, )+
                }
            }

            fn tables() -> &'static [CrcTable<$width>] {
                static TABLES: OnceLock<Vec<CrcTable<$width>>> = OnceLock::new();
                TABLES.get_or_init(|| {
                    log::debug!(
                        "generating {} lookup tables for {}-bit CRC models",
                        Self::REGISTRY.len(),
                        <$width as Width>::WIDTH
                    );
                    Self::REGISTRY.iter().map(CrcTable::new).collect()
                })
            }
        }

        impl CrcModel for $model {
            type Width = $width;

            const ALL: &'static [Self] = &[ $( $model::$variant, )+ ];

            fn params(self) -> &'static CrcParams<$width> {
                &Self::REGISTRY[self as usize]
            }

            fn table(self) -> &'static CrcTable<$width> {
                &Self::tables()[self as usize]
            }
        }

        impl fmt::Display for $model {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $model {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|model| {
                        model.name().eq_ignore_ascii_case(wanted)
                            || model.alias().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| Error::UnknownModel(s.to_string()))
            }
        }
    };
}

crc_models! {
    /// 8-bit reference models.
    Crc8Model(u8) {
        /// CRC-8 (SMBus), poly 0x07.
        Crc8 => "CRC-8" / "CRC8" {
            init: 0x00, xorout: 0x00, poly: 0x07, refin: false, refout: false, check: 0xF4,
        },
        /// CRC-8/ITU (I.432.1, ATM HEC), poly 0x07 with output XOR 0x55.
        Itu => "CRC-8/ITU" / "ITU" {
            init: 0x00, xorout: 0x55, poly: 0x07, refin: false, refout: false, check: 0xA1,
        },
        /// CRC-8/ROHC, reflected poly 0x07 seeded with 0xFF.
        Rohc => "CRC-8/ROHC" / "ROHC" {
            init: 0xFF, xorout: 0x00, poly: 0x07, refin: true, refout: true, check: 0xD0,
        },
        /// CRC-8/MAXIM (Dallas 1-Wire), reflected poly 0x31.
        Maxim => "CRC-8/MAXIM" / "MAXIM" {
            init: 0x00, xorout: 0x00, poly: 0x31, refin: true, refout: true, check: 0xA1,
        },
    }
}

crc_models! {
    /// 16-bit reference models.
    Crc16Model(u16) {
        /// CRC-16/IBM (ARC).
        Ibm => "CRC-16/IBM" / "IBM" {
            init: 0x0000, xorout: 0x0000, poly: 0x8005, refin: true, refout: true, check: 0xBB3D,
        },
        /// CRC-16/MAXIM.
        Maxim => "CRC-16/MAXIM" / "MAXIM" {
            init: 0x0000, xorout: 0xFFFF, poly: 0x8005, refin: true, refout: true, check: 0x44C2,
        },
        /// CRC-16/USB.
        Usb => "CRC-16/USB" / "USB" {
            init: 0xFFFF, xorout: 0xFFFF, poly: 0x8005, refin: true, refout: true, check: 0xB4C8,
        },
        /// CRC-16/MODBUS.
        Modbus => "CRC-16/MODBUS" / "MODBUS" {
            init: 0xFFFF, xorout: 0x0000, poly: 0x8005, refin: true, refout: true, check: 0x4B37,
        },
        /// CRC-16/CCITT (also known as KERMIT).
        Ccitt => "CRC-16/CCITT" / "CCITT" {
            init: 0x0000, xorout: 0x0000, poly: 0x1021, refin: true, refout: true, check: 0x2189,
        },
        /// CRC-16/CCITT-FALSE.
        CcittFalse => "CRC-16/CCITT-FALSE" / "CCITT-FALSE" {
            init: 0xFFFF, xorout: 0x0000, poly: 0x1021, refin: false, refout: false, check: 0x29B1,
        },
        /// CRC-16/X25.
        X25 => "CRC-16/X25" / "X25" {
            init: 0xFFFF, xorout: 0xFFFF, poly: 0x1021, refin: true, refout: true, check: 0x906E,
        },
        /// CRC-16/XMODEM.
        Xmodem => "CRC-16/XMODEM" / "XMODEM" {
            init: 0x0000, xorout: 0x0000, poly: 0x1021, refin: false, refout: false, check: 0x31C3,
        },
        /// CRC-16/DNP.
        Dnp => "CRC-16/DNP" / "DNP" {
            init: 0x0000, xorout: 0xFFFF, poly: 0x3D65, refin: true, refout: true, check: 0xEA82,
        },
    }
}

crc_models! {
    /// 32-bit reference models.
    Crc32Model(u32) {
        /// CRC-32 (Ethernet, ZIP, PNG).
        Crc32 => "CRC-32" / "CRC32" {
            init: 0xFFFF_FFFF, xorout: 0xFFFF_FFFF, poly: 0x04C1_1DB7,
            refin: true, refout: true, check: 0xCBF4_3926,
        },
        /// CRC-32/MPEG-2.
        Mpeg2 => "CRC-32/MPEG-2" / "MPEG2" {
            init: 0xFFFF_FFFF, xorout: 0x0000_0000, poly: 0x04C1_1DB7,
            refin: false, refout: false, check: 0x0376_E6E7,
        },
    }
}

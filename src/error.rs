use thiserror::Error;

/// Errors raised by the checksum engines.
///
/// Every variant is a caller contract violation. The engines never fall back
/// to returning a seed or zero for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The data buffer was empty; CRC computation needs at least one byte.
    #[error("input must contain at least one byte")]
    EmptyInput,

    /// The packet cannot hold a payload byte plus the CRC trailer.
    #[error("packet of {len} bytes is too short for a {trailer}-byte CRC trailer")]
    PacketTooShort {
        /// Total packet length.
        len: usize,
        /// Trailer size for the model's width.
        trailer: usize,
    },

    /// No reference model with the given name exists.
    #[error("unknown CRC model: {0}")]
    UnknownModel(String),

    /// Custom CRC parameters were rejected by the builder.
    #[error("invalid CRC parameters: {0}")]
    InvalidParameters(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

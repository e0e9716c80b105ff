//! Packet trailers: append a CRC to the tail of a buffer and verify it.
//!
//! A packet is `payload || crc`, where the CRC occupies the last
//! `W::BYTES` bytes in little-endian order.

use super::bitwise;
use super::model::CrcModel;
use super::width::Width;
use crate::error::{Error, Result};

fn payload_len<W: Width>(packet: &[u8]) -> Result<usize> {
    if packet.len() <= W::BYTES {
        return Err(Error::PacketTooShort {
            len: packet.len(),
            trailer: W::BYTES,
        });
    }
    Ok(packet.len() - W::BYTES)
}

fn seal<W, F>(packet: &mut [u8], crc: F) -> Result<W>
where
    W: Width,
    F: FnOnce(&[u8]) -> Result<W>,
{
    let split = payload_len::<W>(packet)?;
    let (payload, trailer) = packet.split_at_mut(split);
    let value = crc(payload)?;
    value.write_le(trailer);
    Ok(value)
}

fn check<W, F>(name: &str, packet: &[u8], crc: F) -> Result<bool>
where
    W: Width,
    F: FnOnce(&[u8]) -> Result<W>,
{
    let split = payload_len::<W>(packet)?;
    let (payload, trailer) = packet.split_at(split);
    let stored = W::read_le(trailer);
    let computed = crc(payload)?;
    if stored != computed {
        log::debug!("{name} trailer mismatch: stored {stored:#X}, computed {computed:#X}");
    }
    Ok(stored == computed)
}

/// Computes the CRC of `packet[..len - BYTES]` with the bit-by-bit engine and
/// writes it into the trailing `BYTES` bytes. Returns the CRC.
pub fn append<M: CrcModel>(model: M, packet: &mut [u8]) -> Result<M::Width> {
    let value = seal(packet, |payload| bitwise::compute_preferred(model, payload))?;
    log::trace!("{model}: sealed {} byte packet with {value:#X}", packet.len());
    Ok(value)
}

/// Checks the trailer written by [`append`] against a recomputed CRC.
pub fn verify<M: CrcModel>(model: M, packet: &[u8]) -> Result<bool> {
    check(model.name(), packet, |payload| {
        bitwise::compute_preferred(model, payload)
    })
}

/// Like [`append`], using the model's lookup table.
pub fn append_with_table<M: CrcModel>(model: M, packet: &mut [u8]) -> Result<M::Width> {
    let value = seal(packet, |payload| model.table().checksum(payload))?;
    log::trace!("{model}: sealed {} byte packet with {value:#X}", packet.len());
    Ok(value)
}

/// Like [`verify`], using the model's lookup table.
pub fn verify_with_table<M: CrcModel>(model: M, packet: &[u8]) -> Result<bool> {
    check(model.name(), packet, |payload| model.table().checksum(payload))
}

/// Copies `payload` into a new buffer with the CRC trailer attached.
pub fn with_trailer<M: CrcModel>(model: M, payload: &[u8]) -> Result<Vec<u8>> {
    let mut packet = Vec::with_capacity(payload.len() + M::Width::BYTES);
    packet.extend_from_slice(payload);
    packet.resize(payload.len() + M::Width::BYTES, 0);
    append_with_table(model, &mut packet)?;
    Ok(packet)
}

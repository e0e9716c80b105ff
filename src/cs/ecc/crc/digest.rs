//! Streaming CRC computation.
//!
//! Feed data incrementally with [`CrcDigest::update`] and read the result with
//! [`CrcDigest::finalize`]. Finalizing does not consume the state, so more
//! data may follow.

use super::model::CrcModel;
use super::table::CrcTable;
use super::width::Width;
use crate::error::{Error, Result};

/// Incremental table-driven CRC state.
#[derive(Debug, Clone)]
pub struct CrcDigest<'a, W: Width> {
    table: &'a CrcTable<W>,
    register: W,
    consumed: u64,
}

impl<'a, W: Width> CrcDigest<'a, W> {
    /// Starts a computation seeded from the table's parameters.
    pub fn new(table: &'a CrcTable<W>) -> Self {
        Self {
            table,
            register: table.seed(),
            consumed: 0,
        }
    }

    /// Feeds `data` into the register.
    pub fn update(&mut self, data: &[u8]) {
        self.register = self.table.update(self.register, data);
        self.consumed = self.consumed.wrapping_add(data.len() as u64);
    }

    /// The CRC of everything fed so far.
    ///
    /// Returns [`Error::EmptyInput`] if nothing has been fed.
    pub fn finalize(&self) -> Result<W> {
        if self.consumed == 0 {
            return Err(Error::EmptyInput);
        }
        Ok(self.table.finish(self.register))
    }

    /// Returns to the seeded state.
    pub fn reset(&mut self) {
        self.register = self.table.seed();
        self.consumed = 0;
    }

    /// Number of bytes fed since the last reset.
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }
}

/// Starts a streaming computation for a named model.
pub fn digest<M: CrcModel>(model: M) -> CrcDigest<'static, M::Width> {
    model.table().digest()
}

//! Checksumming many independent buffers across threads.

use rayon::prelude::*;

use super::model::CrcModel;
use crate::error::Result;

/// Computes the table-driven CRC of every buffer in parallel.
///
/// Results are returned in input order. Fails if any buffer is empty.
pub fn par_compute_table<M: CrcModel>(model: M, buffers: &[&[u8]]) -> Result<Vec<M::Width>> {
    let table = model.table();
    buffers.par_iter().map(|buffer| table.checksum(buffer)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::ecc::crc::model::{Crc16Model, Crc32Model};
    use crate::cs::ecc::crc::table::compute_table;
    use crate::error::Error;

    #[test]
    fn test_matches_sequential() {
        let owned: Vec<Vec<u8>> = (1..64u8).map(|n| (0..n).collect()).collect();
        let buffers: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();

        let parallel = par_compute_table(Crc32Model::Crc32, &buffers).unwrap();
        for (buffer, crc) in buffers.iter().zip(parallel) {
            assert_eq!(compute_table(Crc32Model::Crc32, buffer), Ok(crc));
        }
    }

    #[test]
    fn test_empty_buffer_fails_whole_batch() {
        let buffers: [&[u8]; 3] = [b"abc", b"", b"def"];
        assert_eq!(
            par_compute_table(Crc16Model::Modbus, &buffers),
            Err(Error::EmptyInput)
        );
    }
}

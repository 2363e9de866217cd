//! RustPDF417 - PDF417 codeword error correction
//!
//! A pure Rust implementation of the error correction stage used when
//! scanning PDF417 stacked barcodes. The symbol extraction stage hands this
//! crate a flat sequence of codeword values (integers below 929) together
//! with the number of error correction codewords and any positions already
//! known to be unreliable; the decoder repairs the sequence in place and
//! reports how many codewords it corrected.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Codeword error correction modules (field, polynomials, decoder, tables)
pub mod decoder;
/// Error types
pub mod error;

pub use decoder::galois::Gf929;
pub use decoder::poly::GfPoly;
pub use decoder::reed_solomon::ReedSolomonDecoder;
pub use error::ChecksumError;

use decoder::config;
use lazy_static::lazy_static;
use rayon::prelude::*;

lazy_static! {
    // Field tables are built once per process and shared by every call.
    static ref SHARED_DECODER: ReedSolomonDecoder = ReedSolomonDecoder::new();
}

/// Correct a codeword sequence in place
///
/// # Arguments
/// * `codewords` - Codeword values, most significant position first, with
///   the trailing `num_ec_codewords` entries holding error correction
///   codewords
/// * `num_ec_codewords` - Number of error correction codewords
/// * `erasures` - Positions known in advance to be unreliable
///
/// # Returns
/// The number of corrected codewords, or [`ChecksumError`] when the
/// sequence cannot be repaired.
pub fn correct_errors(
    codewords: &mut [u16],
    num_ec_codewords: usize,
    erasures: &[usize],
) -> Result<usize, ChecksumError> {
    SHARED_DECODER.decode(codewords, num_ec_codewords, erasures)
}

/// One codeword block awaiting correction
#[derive(Debug, Clone)]
pub struct EcBlock {
    /// Codeword values, most significant position first
    pub codewords: Vec<u16>,
    /// Number of error correction codewords at the end of `codewords`
    pub num_ec_codewords: usize,
    /// Positions known in advance to be unreliable
    pub erasures: Vec<usize>,
}

/// Correct a batch of independent codeword blocks
///
/// Blocks are corrected in parallel once the batch is large enough to be
/// worth fanning out (the threshold is tunable via
/// `PDF417_MIN_PARALLEL_BLOCKS`); small batches stay on the calling
/// thread. Results are reported per block in input order.
pub fn correct_errors_batch(blocks: &mut [EcBlock]) -> Vec<Result<usize, ChecksumError>> {
    if blocks.len() < config::min_parallel_blocks() {
        blocks.iter_mut().map(correct_block).collect()
    } else {
        blocks.par_iter_mut().map(correct_block).collect()
    }
}

fn correct_block(block: &mut EcBlock) -> Result<usize, ChecksumError> {
    SHARED_DECODER.decode(
        &mut block.codewords,
        block.num_ec_codewords,
        &block.erasures,
    )
}

//! Error types for codeword correction

use thiserror::Error;

/// The received codeword sequence could not be corrected.
///
/// Every variant is the same failure from the caller's point of view (the
/// symbol must be re-scanned or abandoned), but the variants keep the
/// individual failure branches of the decoder distinguishable for
/// diagnostics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumError {
    /// The Euclidean algorithm hit a zero remainder before the remainder
    /// degree dropped below the target.
    #[error("euclidean algorithm terminated early on a zero remainder")]
    EarlyTermination,
    /// The error locator candidate has a zero constant term and cannot be
    /// normalized.
    #[error("error locator has a zero constant term")]
    DegenerateLocator,
    /// The root search exhausted the field before finding every expected
    /// error location.
    #[error("found {found} of {expected} expected error locations")]
    LocationSearch {
        /// Roots located before the field was exhausted
        found: usize,
        /// Degree of the error locator polynomial
        expected: usize,
    },
    /// A computed error location falls outside the received sequence.
    #[error("corrected position falls outside the codeword sequence")]
    PositionOutOfRange,
    /// Applying the corrections did not produce a valid codeword sequence.
    #[error("corrections left a nonzero syndrome")]
    ResidualSyndrome,
}

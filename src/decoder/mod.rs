//! Codeword error correction modules
//!
//! This module contains the error correction engine applied to extracted
//! codeword sequences before they are handed to the text decoder:
//! - GF(929) field arithmetic (log/exp tables)
//! - Polynomials over the field
//! - The Reed-Solomon style decoder (syndromes, Euclidean locator search,
//!   Chien root search, Forney magnitudes)
//! - Security level tables

pub mod config;
/// GF(929) field arithmetic
pub mod galois;
/// Polynomials over GF(929)
pub mod poly;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// PDF417 security level tables
pub mod tables;

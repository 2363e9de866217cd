use log::{debug, trace};

use super::config;
use super::galois::Gf929;
use super::poly::GfPoly;
use crate::error::ChecksumError;

/// Reed-Solomon decoder for PDF417 codeword sequences
///
/// Corrections happen over GF(929): syndromes are computed against the
/// generator powers, an error locator is derived with a truncated extended
/// Euclidean algorithm, its roots are found by exhaustive search and the
/// error magnitudes are recovered with Forney's formula. The field tables
/// live in the decoder and are read-only after construction, so one
/// decoder can serve concurrent decode calls as long as each call owns its
/// codeword buffer.
pub struct ReedSolomonDecoder {
    field: Gf929,
}

impl ReedSolomonDecoder {
    /// Create a decoder, building the GF(929) tables once
    pub fn new() -> Self {
        Self {
            field: Gf929::new(),
        }
    }

    /// Correct `received` in place and return the number of corrected
    /// codewords.
    ///
    /// `received` holds one codeword per entry, most significant position
    /// first, with the trailing `num_ec_codewords` entries being the
    /// symbol's error correction codewords. `erasures` lists positions
    /// already known to be unreliable; they ride through the general error
    /// search rather than a separate erasure-only path. Callers must keep
    /// `num_ec_codewords <= received.len()`, every codeword below 929 and
    /// every erasure index in range.
    pub fn decode(
        &self,
        received: &mut [u16],
        num_ec_codewords: usize,
        erasures: &[usize],
    ) -> Result<usize, ChecksumError> {
        debug_assert!(num_ec_codewords <= received.len());
        debug_assert!(erasures.iter().all(|&e| e < received.len()));

        let syndromes = self.calculate_syndromes(received, num_ec_codewords);
        if syndromes.iter().all(|&s| s == 0) {
            trace!("syndromes clean, nothing to correct");
            return Ok(0);
        }

        // Erasure positions are not multiplied into the syndrome; the
        // locator is accumulated here and surfaced for diagnostics while
        // the flagged positions go through the general search below.
        let erasure_cap = config::rs_max_erasures_override().unwrap_or(usize::MAX);
        let mut known_errors = self.field.one();
        for &erasure in erasures.iter().take(erasure_cap) {
            let b = self.field.exp(received.len() - 1 - erasure);
            let term = GfPoly::new(&self.field, &[self.field.sub(0, b), 1]);
            known_errors = known_errors.multiply(&term);
        }
        if !erasures.is_empty() {
            trace!(
                "erasure locator degree {} from {} flagged positions",
                known_errors.degree(),
                erasures.len()
            );
        }

        let syndrome_poly = GfPoly::new(&self.field, &syndromes);
        let (sigma, omega) = self.run_euclidean_algorithm(
            self.field.monomial(num_ec_codewords, 1),
            syndrome_poly,
            num_ec_codewords,
        )?;

        let error_locations = self.find_error_locations(&sigma)?;
        let error_magnitudes = self.find_error_magnitudes(&omega, &sigma, &error_locations);

        for (&location, &magnitude) in error_locations.iter().zip(&error_magnitudes) {
            let power = self.field.log(location);
            if power >= received.len() {
                return Err(ChecksumError::PositionOutOfRange);
            }
            let position = received.len() - 1 - power;
            received[position] = self.field.sub(received[position], magnitude);
        }

        // A genuine correction always leaves an all-zero syndrome; anything
        // else means the error pattern exceeded the code's capacity.
        let check = self.calculate_syndromes(received, num_ec_codewords);
        if check.iter().any(|&s| s != 0) {
            return Err(ChecksumError::ResidualSyndrome);
        }

        debug!(
            "corrected {} of {} codewords",
            error_locations.len(),
            received.len()
        );
        Ok(error_locations.len())
    }

    fn calculate_syndromes(&self, received: &[u16], num_ec_codewords: usize) -> Vec<u16> {
        let poly = GfPoly::new(&self.field, received);
        let mut syndromes = vec![0u16; num_ec_codewords];
        for i in (1..=num_ec_codewords).rev() {
            syndromes[num_ec_codewords - i] = poly.evaluate_at(self.field.exp(i));
        }
        syndromes
    }

    fn run_euclidean_algorithm<'a>(
        &'a self,
        a: GfPoly<'a>,
        b: GfPoly<'a>,
        degree_budget: usize,
    ) -> Result<(GfPoly<'a>, GfPoly<'a>), ChecksumError> {
        let (a, b) = if a.degree() < b.degree() { (b, a) } else { (a, b) };
        let mut r_last = a;
        let mut r = b;
        let mut t_last = self.field.zero();
        let mut t = self.field.one();

        // Iterate until the remainder degree drops below round(budget / 2)
        let target_degree = (degree_budget + 1) / 2;
        while r.degree() >= target_degree {
            let r_last_last = r_last.clone();
            let t_last_last = t_last.clone();
            r_last = r.clone();
            t_last = t.clone();

            if r_last.is_zero() {
                return Err(ChecksumError::EarlyTermination);
            }

            r = r_last_last;
            let mut q = self.field.zero();
            let denominator_leading_term = r_last.coefficient(r_last.degree());
            let dlt_inverse = self.field.inverse(denominator_leading_term);
            while r.degree() >= r_last.degree() && !r.is_zero() {
                let degree_diff = r.degree() - r_last.degree();
                let scale = self.field.mul(r.coefficient(r.degree()), dlt_inverse);
                q = q.add(&self.field.monomial(degree_diff, scale));
                r = r.subtract(&r_last.multiply_by_monomial(degree_diff, scale));
            }

            t = q.multiply(&t_last).subtract(&t_last_last).negative();
        }

        let sigma_tilde_at_zero = t.coefficient(0);
        if sigma_tilde_at_zero == 0 {
            return Err(ChecksumError::DegenerateLocator);
        }
        let inverse = self.field.inverse(sigma_tilde_at_zero);
        let sigma = t.scale(inverse);
        let omega = r.scale(inverse);
        Ok((sigma, omega))
    }

    /// Exhaustive root search: the inverses of the locator's roots are the
    /// error location values.
    fn find_error_locations(&self, error_locator: &GfPoly<'_>) -> Result<Vec<u16>, ChecksumError> {
        let num_errors = error_locator.degree();
        let mut result = Vec::with_capacity(num_errors);
        for i in 1..self.field.size() as u16 {
            if result.len() == num_errors {
                break;
            }
            if error_locator.evaluate_at(i) == 0 {
                result.push(self.field.inverse(i));
            }
        }
        if result.len() != num_errors {
            return Err(ChecksumError::LocationSearch {
                found: result.len(),
                expected: num_errors,
            });
        }
        Ok(result)
    }

    /// Forney's formula: magnitude = -omega(x^-1) / sigma'(x^-1)
    fn find_error_magnitudes(
        &self,
        error_evaluator: &GfPoly<'_>,
        error_locator: &GfPoly<'_>,
        error_locations: &[u16],
    ) -> Vec<u16> {
        if error_locations.is_empty() {
            return Vec::new();
        }
        let locator_degree = error_locator.degree();
        let mut derivative_coefficients = vec![0u16; locator_degree];
        for i in 1..=locator_degree {
            derivative_coefficients[locator_degree - i] =
                self.field.mul(i as u16, error_locator.coefficient(i));
        }
        let formal_derivative = GfPoly::new(&self.field, &derivative_coefficients);

        error_locations
            .iter()
            .map(|&location| {
                let location_inverse = self.field.inverse(location);
                let numerator = self
                    .field
                    .sub(0, error_evaluator.evaluate_at(location_inverse));
                let denominator = self
                    .field
                    .inverse(formal_derivative.evaluate_at(location_inverse));
                self.field.mul(numerator, denominator)
            })
            .collect()
    }
}

impl Default for ReedSolomonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RS encoder for testing: appends `num_ec` error correction codewords
    /// so the codeword polynomial vanishes at generator powers 1..=num_ec.
    fn rs_encode(field: &Gf929, data: &[u16], num_ec: usize) -> Vec<u16> {
        // Generator polynomial (x - 3^1)(x - 3^2)...(x - 3^num_ec)
        let mut generator = vec![1u16];
        for i in 1..=num_ec {
            let root = field.exp(i);
            let mut next = vec![0u16; generator.len() + 1];
            for (j, &g) in generator.iter().enumerate() {
                next[j] = field.add(next[j], g);
                next[j + 1] = field.sub(next[j + 1], field.mul(g, root));
            }
            generator = next;
        }

        // Long division of data * x^num_ec by the (monic) generator
        let mut remainder: Vec<u16> = data.to_vec();
        remainder.extend(std::iter::repeat(0).take(num_ec));
        for k in 0..data.len() {
            let factor = remainder[k];
            if factor != 0 {
                for (j, &g) in generator.iter().enumerate() {
                    remainder[k + j] = field.sub(remainder[k + j], field.mul(factor, g));
                }
            }
        }

        let mut codewords = data.to_vec();
        for &r in &remainder[data.len()..] {
            codewords.push(field.sub(0, r));
        }
        codewords
    }

    #[test]
    fn test_encoder_produces_valid_codewords() {
        let decoder = ReedSolomonDecoder::new();
        let mut codewords = rs_encode(&decoder.field, &[17, 0, 800, 3, 99], 6);
        assert_eq!(codewords.len(), 11);
        assert_eq!(decoder.decode(&mut codewords, 6, &[]), Ok(0));
    }

    #[test]
    fn test_no_errors_no_mutation() {
        let decoder = ReedSolomonDecoder::new();
        let original = rs_encode(&decoder.field, &[901, 326, 1, 0, 500, 88], 4);
        let mut codewords = original.clone();
        assert_eq!(decoder.decode(&mut codewords, 4, &[]), Ok(0));
        assert_eq!(codewords, original);
    }

    #[test]
    fn test_single_error_two_ec_codewords() {
        let decoder = ReedSolomonDecoder::new();
        let original = rs_encode(&decoder.field, &[5, 453, 178, 121, 900, 40, 702, 113], 2);
        assert_eq!(original.len(), 10);

        let mut codewords = original.clone();
        // Flip one value to a wrong nonzero element
        codewords[3] = decoder.field.add(codewords[3], 250);
        assert_eq!(decoder.decode(&mut codewords, 2, &[]), Ok(1));
        assert_eq!(codewords, original);
    }

    #[test]
    fn test_multiple_errors() {
        let decoder = ReedSolomonDecoder::new();
        let original = rs_encode(
            &decoder.field,
            &[100, 200, 300, 400, 500, 600, 700, 800, 900, 1],
            8,
        );

        let mut codewords = original.clone();
        codewords[0] = decoder.field.add(codewords[0], 17);
        codewords[4] = decoder.field.add(codewords[4], 901);
        codewords[9] = decoder.field.sub(codewords[9], 333);
        codewords[12] = decoder.field.add(codewords[12], 1);
        assert_eq!(decoder.decode(&mut codewords, 8, &[]), Ok(4));
        assert_eq!(codewords, original);
    }

    #[test]
    fn test_errors_in_ec_region() {
        let decoder = ReedSolomonDecoder::new();
        let original = rs_encode(&decoder.field, &[1, 2, 3, 4, 5], 4);
        let total = original.len();

        let mut codewords = original.clone();
        codewords[total - 1] = decoder.field.add(codewords[total - 1], 600);
        codewords[total - 2] = decoder.field.add(codewords[total - 2], 45);
        assert_eq!(decoder.decode(&mut codewords, 4, &[]), Ok(2));
        assert_eq!(codewords, original);
    }

    #[test]
    fn test_erasure_flagged_errors() {
        let decoder = ReedSolomonDecoder::new();
        let original = rs_encode(&decoder.field, &[31, 415, 926, 535, 897, 3], 6);

        let mut codewords = original.clone();
        codewords[1] = decoder.field.add(codewords[1], 700);
        codewords[5] = decoder.field.add(codewords[5], 88);
        assert_eq!(decoder.decode(&mut codewords, 6, &[1, 5]), Ok(2));
        assert_eq!(codewords, original);
    }

    #[test]
    fn test_erasure_flag_on_clean_position() {
        let decoder = ReedSolomonDecoder::new();
        let original = rs_encode(&decoder.field, &[10, 20, 30, 40], 6);

        // Two positions flagged, only one actually corrupted
        let mut codewords = original.clone();
        codewords[2] = decoder.field.add(codewords[2], 412);
        assert_eq!(decoder.decode(&mut codewords, 6, &[0, 2]), Ok(1));
        assert_eq!(codewords, original);
    }

    #[test]
    fn test_uncorrectable_phantom_location() {
        let decoder = ReedSolomonDecoder::new();
        // These two values produce the syndromes of a single unit error at
        // generator power 20, which maps outside a 10-codeword sequence, so
        // the decode must fail rather than apply a correction.
        let mut codewords = vec![769, 533, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            decoder.decode(&mut codewords, 2, &[]),
            Err(ChecksumError::PositionOutOfRange)
        );
    }

    #[test]
    fn test_zero_ec_codewords_accepts() {
        let decoder = ReedSolomonDecoder::new();
        let mut codewords = vec![12, 900, 4];
        assert_eq!(decoder.decode(&mut codewords, 0, &[]), Ok(0));
        assert_eq!(codewords, vec![12, 900, 4]);
    }

    #[test]
    fn test_all_zero_sequence_is_valid() {
        let decoder = ReedSolomonDecoder::new();
        let mut codewords = vec![0u16; 16];
        assert_eq!(decoder.decode(&mut codewords, 8, &[]), Ok(0));
        assert_eq!(codewords, vec![0u16; 16]);
    }

    #[test]
    fn test_correction_restores_zero_codeword() {
        let decoder = ReedSolomonDecoder::new();
        // The all-zero sequence is a valid codeword for any EC count
        let mut codewords = vec![0u16; 32];
        codewords[7] = 311;
        codewords[19] = 87;
        assert_eq!(decoder.decode(&mut codewords, 8, &[]), Ok(2));
        assert_eq!(codewords, vec![0u16; 32]);
    }
}

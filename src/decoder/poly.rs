use super::galois::Gf929;

/// Polynomial over GF(929) with dense coefficient storage
///
/// Coefficients are stored most significant first. Construction strips
/// superfluous leading zeros so the canonical zero polynomial is the single
/// element `[0]` and `degree`/`is_zero` are trivial. Polynomials are value
/// objects: arithmetic returns a new polynomial and never mutates the
/// operands.
#[derive(Clone)]
pub struct GfPoly<'a> {
    field: &'a Gf929,
    coefficients: Vec<u16>,
}

impl<'a> GfPoly<'a> {
    /// Build a polynomial from coefficients, most significant first.
    /// An empty coefficient sequence is a contract violation and panics.
    pub fn new(field: &'a Gf929, coefficients: &[u16]) -> GfPoly<'a> {
        assert!(
            !coefficients.is_empty(),
            "polynomial needs at least one coefficient"
        );
        let coefficients = match coefficients.iter().position(|&c| c != 0) {
            Some(first_nonzero) => coefficients[first_nonzero..].to_vec(),
            None => vec![0],
        };
        GfPoly {
            field,
            coefficients,
        }
    }

    /// Degree of the polynomial. The zero polynomial reports degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// True iff this is the canonical zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Coefficient of the `x^degree` term, or 0 when out of range
    pub fn coefficient(&self, degree: usize) -> u16 {
        if degree >= self.coefficients.len() {
            return 0;
        }
        self.coefficients[self.coefficients.len() - 1 - degree]
    }

    /// Coefficients in storage order, most significant first
    pub fn coefficients(&self) -> &[u16] {
        &self.coefficients
    }

    /// Horner evaluation at `x`
    pub fn evaluate_at(&self, x: u16) -> u16 {
        if x == 0 {
            return self.coefficient(0);
        }
        if x == 1 {
            return self
                .coefficients
                .iter()
                .fold(0, |sum, &c| self.field.add(sum, c));
        }
        let mut result = self.coefficients[0];
        for &c in &self.coefficients[1..] {
            result = self.field.add(self.field.mul(x, result), c);
        }
        result
    }

    /// Sum of two polynomials
    pub fn add(&self, other: &GfPoly<'a>) -> GfPoly<'a> {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let (smaller, larger) = if self.coefficients.len() <= other.coefficients.len() {
            (&self.coefficients, &other.coefficients)
        } else {
            (&other.coefficients, &self.coefficients)
        };
        let mut sum = larger.clone();
        let offset = larger.len() - smaller.len();
        for (i, &c) in smaller.iter().enumerate() {
            sum[offset + i] = self.field.add(larger[offset + i], c);
        }
        GfPoly::new(self.field, &sum)
    }

    /// Difference of two polynomials
    pub fn subtract(&self, other: &GfPoly<'a>) -> GfPoly<'a> {
        if other.is_zero() {
            return self.clone();
        }
        self.add(&other.negative())
    }

    /// Product of two polynomials (full convolution)
    pub fn multiply(&self, other: &GfPoly<'a>) -> GfPoly<'a> {
        if self.is_zero() || other.is_zero() {
            return self.field.zero();
        }
        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product = vec![0u16; a.len() + b.len() - 1];
        for (i, &ac) in a.iter().enumerate() {
            for (j, &bc) in b.iter().enumerate() {
                product[i + j] = self.field.add(product[i + j], self.field.mul(ac, bc));
            }
        }
        GfPoly::new(self.field, &product)
    }

    /// Product with `coefficient * x^degree`, without building the full
    /// convolution. A zero coefficient yields the zero polynomial.
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: u16) -> GfPoly<'a> {
        if coefficient == 0 {
            return self.field.zero();
        }
        let size = self.coefficients.len();
        let mut product = vec![0u16; size + degree];
        for (i, &c) in self.coefficients.iter().enumerate() {
            product[i] = self.field.mul(c, coefficient);
        }
        GfPoly::new(self.field, &product)
    }

    /// Product with a scalar field element
    pub fn scale(&self, scalar: u16) -> GfPoly<'a> {
        if scalar == 0 {
            return self.field.zero();
        }
        if scalar == 1 {
            return self.clone();
        }
        let scaled: Vec<u16> = self
            .coefficients
            .iter()
            .map(|&c| self.field.mul(c, scalar))
            .collect();
        // Scaling by a nonzero element cannot introduce leading zeros
        GfPoly {
            field: self.field,
            coefficients: scaled,
        }
    }

    /// Coefficient-wise negation
    pub fn negative(&self) -> GfPoly<'a> {
        let negated: Vec<u16> = self
            .coefficients
            .iter()
            .map(|&c| self.field.sub(0, c))
            .collect();
        GfPoly {
            field: self.field,
            coefficients: negated,
        }
    }
}

impl PartialEq for GfPoly<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl std::fmt::Debug for GfPoly<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GfPoly({:?})", self.coefficients)
    }
}

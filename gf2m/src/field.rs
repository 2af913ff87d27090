//! GF(2^m) arithmetic against an explicit generator polynomial

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::poly::{parse_bits, BitPoly, TextPolicy};
use crate::BinaryPolynomial;

/// A binary extension field, defined by its generator (reduction modulus).
///
/// Every reducing operation takes the modulus from here instead of from
/// ambient state, so fields with different generators never interfere.
/// The generator is trusted to be irreducible; only a zero generator is
/// rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    generator: BitPoly,
    text_policy: TextPolicy,
}

impl Field {
    pub fn new(generator: BitPoly) -> Result<Self> {
        if generator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        debug!(%generator, degree = generator.len() - 1, "field constructed");
        Ok(Self {
            generator,
            text_policy: TextPolicy::default(),
        })
    }

    /// Policy used by [`Field::parse_element`].
    pub fn with_text_policy(mut self, policy: TextPolicy) -> Self {
        self.text_policy = policy;
        self
    }

    pub fn generator(&self) -> &BitPoly {
        &self.generator
    }

    pub fn text_policy(&self) -> TextPolicy {
        self.text_policy
    }

    /// Extension degree m.
    pub fn degree(&self) -> usize {
        self.generator.len() - 1
    }

    /// Number of elements, 2^m, when it fits in a u128.
    pub fn order(&self) -> Option<u128> {
        u32::try_from(self.degree())
            .ok()
            .and_then(|m| 1u128.checked_shl(m))
    }

    /// True if `p` is already in reduced form.
    pub fn contains(&self, p: &BitPoly) -> bool {
        p.len() < self.generator.len()
    }

    pub fn reduce(&self, p: &BitPoly) -> BitPoly {
        trace!(len = p.len(), modulus_len = self.generator.len(), "reduce");
        p.reduce_by(&self.generator)
    }

    /// Parse text under this field's policy and reduce it.
    pub fn parse_element(&self, text: &str) -> Result<BitPoly> {
        let p = BitPoly::parse_with(text, self.text_policy)?;
        Ok(self.reduce(&p))
    }

    // Sums are reduced as well; operands are not assumed to be reduced.
    pub fn add(&self, a: &BitPoly, b: &BitPoly) -> BitPoly {
        self.reduce(&BinaryPolynomial::add(a, b))
    }

    pub fn mul(&self, a: &BitPoly, b: &BitPoly) -> BitPoly {
        self.reduce(&BinaryPolynomial::mul(a, b))
    }

    pub fn square(&self, a: &BitPoly) -> BitPoly {
        self.reduce(&BinaryPolynomial::square(a))
    }

    /// `base^exponent`, with the exponent given MSB first.
    ///
    /// Right-to-left square-and-multiply: one squaring and at most one
    /// multiplication per exponent bit. An empty or all-zero exponent gives 1.
    pub fn pow(&self, base: &BitPoly, exponent: &[bool]) -> BitPoly {
        trace!(base_len = base.len(), exponent_bits = exponent.len(), "pow");

        let mut result = BitPoly::one();
        let mut acc = base.clone();
        for &bit in exponent.iter().rev() {
            if bit {
                result = self.mul(&result, &acc);
            }
            acc = self.square(&acc);
        }
        result
    }

    pub fn pow_u64(&self, base: &BitPoly, exponent: u64) -> BitPoly {
        self.pow(base, BitPoly::from_u64(exponent).bits())
    }

    /// Multiplicative inverse via a^(2^m - 2).
    pub fn inverse(&self, a: &BitPoly) -> Result<BitPoly> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::NotInvertible);
        }
        // 2^m - 2 is m-1 ones followed by a zero
        let mut exponent = vec![true; self.degree().saturating_sub(1)];
        exponent.push(false);
        Ok(self.pow(&a, &exponent))
    }

    /// Uniformly random reduced element.
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> BitPoly {
        let bits: Vec<bool> = (0..self.degree()).map(|_| rng.gen()).collect();
        BitPoly::from(bits)
    }
}

/// Exponent bit sequence (MSB first) from text. Leading zeros are kept.
pub fn exponent_bits(text: &str, policy: TextPolicy) -> Result<Vec<bool>> {
    parse_bits(text, policy)
}

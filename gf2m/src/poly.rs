use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::error::{Error, Result};
use crate::BinaryPolynomial;

/// How non-binary characters are treated when reading a polynomial from text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPolicy {
    /// Only `'0'` and `'1'` are accepted.
    #[default]
    Strict,
    /// `'0'` is a zero bit, every other character is a one bit.
    Lossy,
}

/// Polynomial over GF(2), coefficients stored most-significant term first.
///
/// The bit vector never starts with a zero; the zero polynomial is empty.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitPoly {
    bits: Vec<bool>,
}

/// Strip leading zero coefficients in place.
fn normalize(bits: &mut Vec<bool>) {
    let lead = bits.iter().position(|&b| b).unwrap_or(bits.len());
    bits.drain(..lead);
}

pub(crate) fn parse_bits(text: &str, policy: TextPolicy) -> Result<Vec<bool>> {
    match policy {
        TextPolicy::Strict => text
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidCharacter { character, position }),
            })
            .collect(),
        TextPolicy::Lossy => Ok(lossy_bits(text)),
    }
}

fn lossy_bits(text: &str) -> Vec<bool> {
    let coerced = text.chars().filter(|&c| c != '0' && c != '1').count();
    if coerced > 0 {
        warn!(coerced, "coerced non-binary characters to 1");
    }
    text.chars().map(|c| c != '0').collect()
}

impl BitPoly {
    fn from_raw(mut bits: Vec<bool>) -> Self {
        normalize(&mut bits);
        Self { bits }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self { bits: vec![true] }
    }

    /// x^k
    pub fn monomial(k: usize) -> Self {
        let mut bits = vec![false; k + 1];
        bits[0] = true;
        Self { bits }
    }

    /// Copy an MSB-first bit sequence.
    pub fn from_bits(bits: &[bool]) -> Self {
        Self::from_raw(bits.to_vec())
    }

    pub fn from_u64(val: u64) -> Self {
        let width = 64 - val.leading_zeros() as usize;
        Self {
            bits: (0..width).rev().map(|i| (val >> i) & 1 == 1).collect(),
        }
    }

    /// Sum of x^e over `exponents`. Repeated exponents cancel.
    pub fn from_exponents(exponents: &[usize]) -> Self {
        let Some(&top) = exponents.iter().max() else {
            return Self::zero();
        };
        let mut bits = vec![false; top + 1];
        for &e in exponents {
            bits[top - e] ^= true;
        }
        Self::from_raw(bits)
    }

    /// Any character other than `'0'` becomes a one bit.
    pub fn from_str_lossy(text: &str) -> Self {
        Self::from_raw(lossy_bits(text))
    }

    pub fn parse_with(text: &str, policy: TextPolicy) -> Result<Self> {
        parse_bits(text, policy).map(Self::from_raw)
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.bits == [true]
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.bits.len().checked_sub(1)
    }

    /// Coefficient of x^k.
    pub fn coefficient(&self, k: usize) -> bool {
        k < self.bits.len() && self.bits[self.bits.len() - 1 - k]
    }

    /// Right-aligned XOR, not reduced.
    pub fn raw_add(&self, other: &Self) -> Self {
        let (long, short) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let offset = long.len() - short.len();
        let mut bits = long.bits.clone();
        for (dst, &src) in bits[offset..].iter_mut().zip(&short.bits) {
            *dst ^= src;
        }
        Self::from_raw(bits)
    }

    /// Schoolbook carry-less product, not reduced.
    pub fn raw_mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut acc = vec![false; self.len() + other.len() - 1];
        for (i, _) in self.bits.iter().enumerate().filter(|&(_, &b)| b) {
            for (j, &bit) in other.bits.iter().enumerate() {
                acc[i + j] ^= bit;
            }
        }
        Self::from_raw(acc)
    }

    /// Square by spreading coefficients: cross terms vanish in characteristic 2.
    pub fn raw_square(&self) -> Self {
        let Some((&last, rest)) = self.bits.split_last() else {
            return Self::zero();
        };
        let mut out = Vec::with_capacity(2 * self.bits.len() - 1);
        for &bit in rest {
            out.push(bit);
            out.push(false);
        }
        out.push(last);
        Self::from_raw(out)
    }

    /// Remainder of long division by `divisor`.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.long_division(divisor).1)
    }

    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (quotient, remainder) = self.long_division(divisor);
        Ok((Self::from_raw(quotient), remainder))
    }

    /// Remainder by a modulus the caller guarantees is non-zero.
    pub(crate) fn reduce_by(&self, modulus: &Self) -> Self {
        self.long_division(modulus).1
    }

    // Aligns the divisor under the leading set bit of the working copy and
    // XORs it in, rescanning for the new leading bit each round.
    fn long_division(&self, divisor: &Self) -> (Vec<bool>, Self) {
        debug_assert!(!divisor.is_zero());

        let m = divisor.bits.len();
        let mut r = self.bits.clone();
        let n = r.len();
        let mut quotient = vec![false; (n + 1).saturating_sub(m)];

        // r is normalized, so its first set bit is at 0
        let mut t = 0;
        while n - t >= m {
            for (dst, &bit) in r[t..t + m].iter_mut().zip(&divisor.bits) {
                *dst ^= bit;
            }
            quotient[t] = true;
            t = r.iter().position(|&b| b).unwrap_or(n);
        }

        (quotient, Self::from_raw(r))
    }
}

impl BinaryPolynomial for BitPoly {
    fn zero() -> Self {
        BitPoly::zero()
    }

    fn one() -> Self {
        BitPoly::one()
    }

    fn add(&self, other: &Self) -> Self {
        self.raw_add(other)
    }

    fn mul(&self, other: &Self) -> Self {
        self.raw_mul(other)
    }

    fn square(&self) -> Self {
        self.raw_square()
    }

    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        BitPoly::div_rem(self, divisor)
    }
}

impl fmt::Display for BitPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitPoly(\"{}\")", self)
    }
}

impl FromStr for BitPoly {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, TextPolicy::Strict)
    }
}

impl From<Vec<bool>> for BitPoly {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_raw(bits)
    }
}

impl From<&[bool]> for BitPoly {
    fn from(bits: &[bool]) -> Self {
        Self::from_bits(bits)
    }
}

impl Serialize for BitPoly {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BitPoly {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> BitPoly {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalization() {
        assert_eq!(p("000101").to_string(), "101");
        assert_eq!(p("0000"), BitPoly::zero());
        assert_eq!(p("").to_string(), "");
        assert_eq!(BitPoly::from_bits(&[false, false, true, false]).bits(), &[true, false]);
        assert_eq!(BitPoly::from(vec![false; 5]), BitPoly::zero());
        assert_eq!(BitPoly::from(&[false, true][..]), BitPoly::one());
    }

    #[test]
    fn test_lossy_and_strict_text() {
        // coerced bits 0101 normalize to 101
        assert_eq!(BitPoly::from_str_lossy("0a0z"), p("101"));
        assert_eq!(BitPoly::from_str_lossy("a0z0"), p("1010"));
        assert_eq!(BitPoly::from_str_lossy("0 0"), p("10"));
        assert_eq!(
            "10x1".parse::<BitPoly>(),
            Err(Error::InvalidCharacter { character: 'x', position: 2 })
        );
        assert_eq!(BitPoly::parse_with("2", TextPolicy::Lossy).unwrap(), BitPoly::one());
        assert!(BitPoly::parse_with("2", TextPolicy::Strict).is_err());
    }

    #[test]
    fn test_degree_and_coefficients() {
        let a = p("1011");
        assert_eq!(a.degree(), Some(3));
        assert!(a.coefficient(0));
        assert!(a.coefficient(1));
        assert!(!a.coefficient(2));
        assert!(a.coefficient(3));
        assert!(!a.coefficient(4));
        assert_eq!(BitPoly::zero().degree(), None);
        assert!(BitPoly::one().is_one());
        assert_eq!(BitPoly::monomial(4), p("10000"));
    }

    #[test]
    fn test_integer_and_exponent_constructors() {
        assert_eq!(BitPoly::from_u64(0), BitPoly::zero());
        assert_eq!(BitPoly::from_u64(0b1011), p("1011"));
        assert_eq!(BitPoly::from_u64(u64::MAX).len(), 64);
        assert_eq!(BitPoly::from_exponents(&[3, 1, 0]), p("1011"));
        assert_eq!(BitPoly::from_exponents(&[2, 2, 0]), BitPoly::one());
        assert_eq!(BitPoly::from_exponents(&[]), BitPoly::zero());
    }

    #[test]
    fn test_raw_add_right_aligned() {
        assert_eq!(p("11").raw_add(&p("10")), BitPoly::one());
        assert_eq!(p("1000").raw_add(&p("11")), p("1011"));
        assert_eq!(p("11").raw_add(&p("1000")), p("1011"));
        assert_eq!(p("1011").raw_add(&p("1010")), BitPoly::one());
        assert_eq!(p("101").raw_add(&p("101")), BitPoly::zero());
        assert_eq!(p("101").raw_add(&BitPoly::zero()), p("101"));
    }

    #[test]
    fn test_raw_mul() {
        // (x+1)(x) = x^2 + x
        assert_eq!(p("11").raw_mul(&p("10")), p("110"));
        // (x+1)^2 = x^2 + 1
        assert_eq!(p("11").raw_mul(&p("11")), p("101"));
        assert_eq!(p("1011").raw_mul(&BitPoly::zero()), BitPoly::zero());
        assert_eq!(p("1011").raw_mul(&BitPoly::one()), p("1011"));
    }

    #[test]
    fn test_raw_square_spreads_bits() {
        assert_eq!(p("11").raw_square(), p("101"));
        assert_eq!(p("1011").raw_square(), p("1000101"));
        assert_eq!(BitPoly::one().raw_square(), BitPoly::one());
        assert_eq!(BitPoly::zero().raw_square(), BitPoly::zero());
        let a = p("110101");
        assert_eq!(a.raw_square(), a.raw_mul(&a));
    }

    #[test]
    fn test_remainder() {
        let g = p("1011");
        assert_eq!(p("110").rem(&g).unwrap(), p("110"));
        // x^3 = x + 1 mod x^3 + x + 1
        assert_eq!(p("1000").rem(&g).unwrap(), p("11"));
        // x^4 = x^2 + x
        assert_eq!(p("10000").rem(&g).unwrap(), p("110"));
        assert_eq!(g.rem(&g).unwrap(), BitPoly::zero());
        assert_eq!(BitPoly::zero().rem(&g).unwrap(), BitPoly::zero());
        assert_eq!(p("1011").rem(&BitPoly::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_div_rem_identity() {
        let d = p("1101100111");
        let m = p("1011");
        let (q, r) = d.div_rem(&m).unwrap();
        assert_eq!(q.raw_mul(&m).raw_add(&r), d);
        assert!(r.len() < m.len());

        let (q, r) = p("10").div_rem(&m).unwrap();
        assert_eq!(q, BitPoly::zero());
        assert_eq!(r, p("10"));

        assert_eq!(d.div_rem(&BitPoly::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_display_debug() {
        assert_eq!(format!("{}", p("0110")), "110");
        assert_eq!(format!("{:?}", p("101")), "BitPoly(\"101\")");
        assert_eq!(BitPoly::zero().to_string(), "");
    }

    #[test]
    fn test_serde_string_form() {
        let a = p("100101");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"100101\"");
        let back: BitPoly = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert!(serde_json::from_str::<BitPoly>("\"10z\"").is_err());
    }
}

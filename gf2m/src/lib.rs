// src/lib.rs
//! Binary extension field GF(2^m) arithmetic over bit-vector polynomials
//!
//! Polynomials over GF(2) are stored most-significant coefficient first with
//! leading zeros stripped ([`BitPoly`]). A [`Field`] owns the generator
//! polynomial and reduces every sum, product, square and power modulo it.
//!
//! ```
//! use gf2m::{BitPoly, Field};
//!
//! let field = Field::new("1011".parse()?)?; // x^3 + x + 1
//! let a: BitPoly = "11".parse()?;
//! assert_eq!(field.mul(&a, &"10".parse::<BitPoly>()?).to_string(), "110");
//! assert_eq!(field.pow(&a, &[true, true, false]).to_string(), "110");
//! # Ok::<(), gf2m::Error>(())
//! ```
//!
//! For code that wants a single ambient modulus, [`generator`] holds a
//! process-wide field that can be installed once.

pub mod config;
pub mod configs;
pub mod error;
mod field;
pub mod generator;
mod poly;

pub use config::FieldConfig;
pub use error::{Error, Result};
pub use field::{exponent_bits, Field};
pub use poly::{BitPoly, TextPolicy};

/// Polynomial ring operations over GF(2), without reduction.
pub trait BinaryPolynomial:
    Sized + Clone + Default + PartialEq + Eq + std::fmt::Debug
{
    fn zero() -> Self;
    fn one() -> Self;
    fn add(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn div_rem(&self, other: &Self) -> Result<(Self, Self)>;

    fn square(&self) -> Self {
        self.mul(self)
    }
}

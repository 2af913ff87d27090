//! Process-wide generator registry
//!
//! A one-time-initialized alternative to passing a [`Field`] around. The
//! generator can be installed exactly once; every operation here fails with
//! [`Error::UninitializedGenerator`] until it is.

use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::poly::BitPoly;

static FIELD: OnceLock<Field> = OnceLock::new();

/// Install the reduction modulus for the process.
pub fn install(generator: BitPoly) -> Result<()> {
    install_field(Field::new(generator)?)
}

pub fn install_field(field: Field) -> Result<()> {
    let degree = field.degree();
    FIELD.set(field).map_err(|_| Error::GeneratorAlreadySet)?;
    debug!(degree, "generator installed");
    Ok(())
}

pub fn is_installed() -> bool {
    FIELD.get().is_some()
}

/// The installed field.
pub fn field() -> Result<&'static Field> {
    FIELD.get().ok_or(Error::UninitializedGenerator)
}

pub fn reduce(p: &BitPoly) -> Result<BitPoly> {
    Ok(field()?.reduce(p))
}

pub fn add(a: &BitPoly, b: &BitPoly) -> Result<BitPoly> {
    Ok(field()?.add(a, b))
}

pub fn mul(a: &BitPoly, b: &BitPoly) -> Result<BitPoly> {
    Ok(field()?.mul(a, b))
}

pub fn square(a: &BitPoly) -> Result<BitPoly> {
    Ok(field()?.square(a))
}

pub fn pow(base: &BitPoly, exponent: &[bool]) -> Result<BitPoly> {
    Ok(field()?.pow(base, exponent))
}

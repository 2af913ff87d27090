//! Hardcoded configurations for well-known binary fields

use crate::config::FieldConfig;

/// GF(2^3) with x^3 + x + 1 (small enough to check by hand)
pub fn gf8() -> FieldConfig {
    FieldConfig::from_exponents("gf8", &[3, 1, 0])
}

/// GF(2^8) with the AES polynomial x^8 + x^4 + x^3 + x + 1
pub fn aes_gf256() -> FieldConfig {
    FieldConfig::from_exponents("aes-gf256", &[8, 4, 3, 1, 0])
}

/// NIST B-163 / K-163 pentanomial x^163 + x^7 + x^6 + x^3 + 1
pub fn sect163() -> FieldConfig {
    FieldConfig::from_exponents("sect163", &[163, 7, 6, 3, 0])
}

/// NIST B-233 / K-233 trinomial x^233 + x^74 + 1
pub fn sect233() -> FieldConfig {
    FieldConfig::from_exponents("sect233", &[233, 74, 0])
}

/// Degree-233 pentanomial x^233 + x^9 + x^4 + x + 1
pub fn pentanomial233() -> FieldConfig {
    FieldConfig::from_exponents("pentanomial233", &[233, 9, 4, 1, 0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitPoly;

    #[test]
    fn test_presets_build() {
        for (config, degree) in [
            (gf8(), 3),
            (aes_gf256(), 8),
            (sect163(), 163),
            (sect233(), 233),
            (pentanomial233(), 233),
        ] {
            let field = config.build().unwrap();
            assert_eq!(field.degree(), degree, "{:?}", config.name);
        }
    }

    #[test]
    fn test_aes_inverse_vector() {
        // 0x53 * 0xca = 1 in the AES field
        let field = aes_gf256().build().unwrap();
        let a = BitPoly::from_u64(0x53);
        assert_eq!(field.inverse(&a).unwrap(), BitPoly::from_u64(0xca));
    }
}

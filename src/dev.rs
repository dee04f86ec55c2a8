//! Development-related functionality.
//!
//! A complete NIST P-256 (a.k.a. secp256r1) parameterization of
//! [`PrimeCurveParams`], with both fields generated by `ff_derive`. This
//! exists so the generic arithmetic can be exercised against a real
//! 256-bit curve; it is not intended as a production curve implementation.

use crate::PrimeCurveParams;
use ff::PrimeField;
use hex_literal::hex;

mod field_element {
    //! Coordinate field element for [`super::NistP256`]: an integer modulo
    //! p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1.
    use ff::PrimeField;

    #[derive(PrimeField)]
    #[PrimeFieldModulus = "115792089210356248762697446949407573530086143415290314195533631308867097853951"]
    #[PrimeFieldGenerator = "6"]
    #[PrimeFieldReprEndianness = "little"]
    pub struct FieldElement([u64; 5]);
}
pub use field_element::FieldElement;

mod scalar {
    //! Scalar field element for [`super::NistP256`]: an integer modulo the
    //! group order n.
    use ff::PrimeField;

    #[derive(PrimeField)]
    #[PrimeFieldModulus = "115792089210356248762697446949407573529996955224135760342422259061068512044369"]
    #[PrimeFieldGenerator = "7"]
    #[PrimeFieldReprEndianness = "little"]
    pub struct Scalar([u64; 5]);
}
pub use scalar::Scalar;

/// NIST P-256 (a.k.a. secp256r1, prime256v1).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NistP256;

const EQUATION_B: [u8; 32] =
    hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

const GENERATOR_X: [u8; 32] =
    hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");

const GENERATOR_Y: [u8; 32] =
    hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

const ORDER: [u8; 32] =
    hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

/// Big-endian affine coordinates of the first small multiples of the
/// generator: index `i` holds `(i + 1)·G`.
pub const MULTIPLES_OF_G: [([u8; 32], [u8; 32]); 5] = [
    (GENERATOR_X, GENERATOR_Y),
    (
        hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
        hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
    ),
    (
        hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
        hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
    ),
    (
        hex!("e2534a3532d08fbba02dde659ee62bd0031fe2db785596ef509302446b030852"),
        hex!("e0f1575a4c633cc719dfee5fda862d764efc96c3f30ee0055c42c23f184ed8c6"),
    ),
    (
        hex!("51590b7a515140d2d784c85608668fdfef8c82fd1f5be52421554a0dc3d033ed"),
        hex!("e0c17da8904a727d8ae1bf36bf8a79260d012f00d4d80888d1d0bb44fda16da4"),
    ),
];

impl PrimeCurveParams for NistP256 {
    type FieldElement = FieldElement;
    type Scalar = Scalar;

    fn equation_b() -> FieldElement {
        element(&EQUATION_B)
    }

    fn generator() -> (FieldElement, FieldElement) {
        (element(&GENERATOR_X), element(&GENERATOR_Y))
    }

    fn order() -> <Scalar as PrimeField>::Repr {
        let mut le = ORDER;
        le.reverse();

        let mut repr = <Scalar as PrimeField>::Repr::default();
        repr.as_mut()[..le.len()].copy_from_slice(&le);
        repr
    }
}

/// Decode a big-endian coordinate-field constant.
fn element(bytes: &[u8; 32]) -> FieldElement {
    let mut le = *bytes;
    le.reverse();

    let mut repr = <FieldElement as PrimeField>::Repr::default();
    repr.as_mut()[..le.len()].copy_from_slice(&le);
    FieldElement::from_repr(repr).unwrap()
}

/// Big-endian encoding of a coordinate-field element, for comparing
/// against test vectors.
pub fn coord_bytes(fe: &FieldElement) -> [u8; 32] {
    let repr = fe.to_repr();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&repr.as_ref()[..32]);
    bytes.reverse();
    bytes
}

#[cfg(test)]
mod tests {
    use super::{MULTIPLES_OF_G, NistP256};
    use crate::AffinePoint;
    use crate::PrimeCurveParams;

    #[test]
    fn generator_satisfies_curve_equation() {
        let (x, y) = NistP256::generator();
        assert!(bool::from(
            AffinePoint::<NistP256>::from_coordinates(x, y).is_some()
        ));
    }

    #[test]
    fn small_multiples_satisfy_curve_equation() {
        for (x, y) in &MULTIPLES_OF_G {
            let x = super::element(x);
            let y = super::element(y);
            assert!(bool::from(
                AffinePoint::<NistP256>::from_coordinates(x, y).is_some()
            ));
        }
    }
}

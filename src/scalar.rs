//! Scalar derivation utilities.

use crate::{Error, PrimeCurveParams, Result, Scalar};
use ff::{Field, PrimeField};

/// Derive a scalar from an oversized random seed by reduction modulo the
/// curve group order.
///
/// The seed is interpreted little-endian. Its low `NUM_BITS + 64` bits are
/// taken (unused high bits of the final partial byte are masked off, and
/// any bytes beyond the prefix are ignored) and reduced modulo the order,
/// so the result's bias away from uniform is at most 2⁻⁶⁴. The reduction
/// walks a fixed number of bytes and performs only field operations; its
/// memory-access pattern does not depend on the seed's value. The same
/// seed always derives the same scalar.
///
/// # Errors
///
/// [`Error::IntermediateValue`] if the reduced scalar is zero. The caller
/// is expected to retry with fresh randomness.
///
/// # Panics
///
/// If the seed is shorter than `NUM_BITS + 64` bits. Unlike the zero
/// result, a short seed is a caller contract violation, not a transient
/// condition.
pub fn seed_to_scalar<C: PrimeCurveParams>(seed: &[u8]) -> Result<Scalar<C>> {
    let num_bits = <Scalar<C> as PrimeField>::NUM_BITS as usize + 64;
    assert!(
        seed.len() * 8 >= num_bits,
        "seed too short: {} bits",
        seed.len() * 8
    );

    let num_bytes = num_bits.div_ceil(8);
    let used_bits = num_bits % 8;
    let top_mask = if used_bits == 0 {
        0xff
    } else {
        (1u8 << used_bits) - 1
    };

    let radix = Scalar::<C>::from(256);
    let mut acc = Scalar::<C>::ZERO;

    for i in (0..num_bytes).rev() {
        let byte = if i == num_bytes - 1 {
            seed[i] & top_mask
        } else {
            seed[i]
        };
        acc = acc * radix + Scalar::<C>::from(u64::from(byte));
    }

    if acc.is_zero().into() {
        Err(Error::IntermediateValue)
    } else {
        Ok(acc)
    }
}

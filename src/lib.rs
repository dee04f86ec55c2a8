#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod affine;
mod error;
mod lookup_table;
mod mul;
mod point_arithmetic;
mod projective;
mod scalar;

#[cfg(any(test, feature = "dev"))]
pub mod dev;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
    lookup_table::LookupTable,
    mul::{GeneratorMultiplier, ScalarMultiplier, WindowedMultiplier},
    projective::ProjectivePoint,
    scalar::seed_to_scalar,
};
#[cfg(feature = "std")]
pub use crate::mul::BasePointTable;
pub use ff::{self, Field, PrimeField};
pub use rand_core;
pub use subtle;
pub use zeroize;

use core::fmt::Debug;

/// Parameters for elliptic curves of prime order which can be described by
/// the short Weierstrass equation `y² = x³ - 3x + b`.
///
/// Implementing this trait asserts three things about the curve, none of
/// which is re-validated at runtime:
///
/// - the group of points has prime order (no cofactor);
/// - the `a`-coefficient of the curve equation is −3, which is what the
///   complete addition formulas in this crate are specialized to;
/// - the byte representations ([`PrimeField::Repr`]) of both field element
///   types are little-endian.
///
/// Curves outside this shape are unsupported and must not implement the
/// trait.
pub trait PrimeCurveParams: Copy + Debug + Eq + Send + Sync + 'static {
    /// Base field element type.
    type FieldElement: PrimeField;

    /// Scalar field element type, i.e. an integer modulo the group order.
    type Scalar: PrimeField;

    /// Coefficient `b` in the curve equation.
    fn equation_b() -> Self::FieldElement;

    /// Generator point's affine coordinates: (x, y).
    fn generator() -> (Self::FieldElement, Self::FieldElement);

    /// Little-endian encoding of the curve group order.
    ///
    /// The order itself is not representable as a [`Self::Scalar`], so
    /// order validation consumes it in byte form.
    fn order() -> ScalarRepr<Self>;
}

/// Scalar field element for a given curve.
pub type Scalar<C> = <C as PrimeCurveParams>::Scalar;

/// Base field element for a given curve.
pub type FieldElement<C> = <C as PrimeCurveParams>::FieldElement;

/// Fixed-length little-endian byte representation of a scalar, as produced
/// by [`PrimeField::to_repr`].
pub type ScalarRepr<C> = <<C as PrimeCurveParams>::Scalar as PrimeField>::Repr;

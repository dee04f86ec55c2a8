//! Affine curve points.

use crate::{PrimeCurveParams, ProjectivePoint, Scalar, mul::WindowedMultiplier};
use core::{
    borrow::Borrow,
    ops::{Mul, Neg},
};
use ff::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// Point on a Weierstrass curve in affine coordinates.
///
/// Affine points are value-like: freely copied and shared, and assumed to
/// lie on the curve. [`AffinePoint::from_coordinates`] checks curve
/// membership; [`AffinePoint::new`] does not.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: PrimeCurveParams> {
    /// x-coordinate
    pub(crate) x: C::FieldElement,

    /// y-coordinate
    pub(crate) y: C::FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit a
    /// `const` constructor for `IDENTITY`.
    pub(crate) infinity: u8,
}

impl<C: PrimeCurveParams> AffinePoint<C> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the curve.
    pub fn generator() -> Self {
        let (x, y) = C::generator();
        Self { x, y, infinity: 0 }
    }

    /// Create a point from coordinates assumed to satisfy the curve
    /// equation.
    ///
    /// The arithmetic in this crate is only correct for points on the
    /// curve; use [`AffinePoint::from_coordinates`] when the coordinates
    /// come from an untrusted source.
    pub fn new(x: C::FieldElement, y: C::FieldElement) -> Self {
        Self { x, y, infinity: 0 }
    }

    /// Create a point from coordinates, verifying that they satisfy the
    /// curve equation `y² = x³ - 3x + b`.
    pub fn from_coordinates(x: C::FieldElement, y: C::FieldElement) -> CtOption<Self> {
        let three = C::FieldElement::from(3);
        let lhs = y * y;
        let rhs = x * x * x - (three * x) + C::equation_b();
        CtOption::new(Self { x, y, infinity: 0 }, lhs.ct_eq(&rhs))
    }

    /// x-coordinate.
    pub fn x(&self) -> C::FieldElement {
        self.x
    }

    /// y-coordinate.
    pub fn y(&self) -> C::FieldElement {
        self.y
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Verify that multiplying this point by the group order yields the
    /// neutral element.
    ///
    /// Together with [`AffinePoint::from_coordinates`] this is the full
    /// public-key validation of NIST SP 800-186 §D.1.1.2. The
    /// multiplication runs in constant time and the outcome is reported as
    /// a [`Choice`], never an error.
    pub fn is_torsion_free(&self) -> Choice {
        let order = C::order();
        let product = WindowedMultiplier::new(self).multiply_bytes(order.as_ref());
        product.is_identity()
    }
}

impl<C: PrimeCurveParams> ConditionallySelectable for AffinePoint<C> {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: PrimeCurveParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl<C: PrimeCurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: PrimeCurveParams> DefaultIsZeroes for AffinePoint<C> {}

impl<C: PrimeCurveParams> Eq for AffinePoint<C> {}

impl<C: PrimeCurveParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: PrimeCurveParams> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C: PrimeCurveParams> From<&ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: &ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C, S> Mul<S> for AffinePoint<C>
where
    C: PrimeCurveParams,
    S: Borrow<Scalar<C>>,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: S) -> ProjectivePoint<C> {
        ProjectivePoint::from(self) * scalar.borrow()
    }
}

impl<C: PrimeCurveParams> Neg for AffinePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<C: PrimeCurveParams> Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use crate::ProjectivePoint;
    use crate::dev::{NistP256, Scalar};

    type Affine = AffinePoint<NistP256>;
    type Projective = ProjectivePoint<NistP256>;

    #[test]
    fn generator_is_on_curve() {
        let g = Affine::generator();
        let checked = Affine::from_coordinates(g.x(), g.y());
        assert_eq!(checked.unwrap(), g);
    }

    #[test]
    fn off_curve_coordinates_are_rejected() {
        let g = Affine::generator();
        let tweaked = Affine::from_coordinates(g.x(), g.y() + g.y());
        assert!(bool::from(tweaked.is_none()));
    }

    #[test]
    fn generator_has_group_order() {
        assert!(bool::from(Affine::generator().is_torsion_free()));
    }

    #[test]
    fn small_multiple_has_group_order() {
        let two_g = Projective::generator().double().to_affine();
        assert!(bool::from(two_g.is_torsion_free()));
    }

    #[test]
    fn identity_has_group_order() {
        assert!(bool::from(Affine::IDENTITY.is_torsion_free()));
    }

    #[test]
    fn double_negation_round_trips() {
        let g = Affine::generator();
        assert_eq!(-(-g), g);
        assert_ne!(-g, g);
    }

    #[test]
    fn affine_multiplication_matches_projective() {
        let k = Scalar::from(5u64);
        assert_eq!(Affine::generator() * k, Projective::generator() * k);
    }
}

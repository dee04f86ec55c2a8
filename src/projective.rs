//! Projective curve points.

use crate::{
    AffinePoint, PrimeCurveParams, Scalar, lookup_table::LookupTable, mul, point_arithmetic,
};
use core::{
    borrow::Borrow,
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use ff::{Field, PrimeField};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// Point on a Weierstrass curve in homogeneous projective coordinates
/// (x = X/Z, y = Y/Z).
///
/// `Z = 0` encodes the neutral element, and any `(X, Y, 0)` triple is a
/// valid neutral representative; intermediate results are not reduced to
/// a canonical form.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: PrimeCurveParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C: PrimeCurveParams> ProjectivePoint<C> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ONE,
        z: C::FieldElement::ZERO,
    };

    /// Base point of the curve.
    pub fn generator() -> Self {
        let (x, y) = C::generator();
        Self {
            x,
            y,
            z: C::FieldElement::ONE,
        }
    }

    /// Returns the affine representation of this point, or the affine
    /// identity if it is the neutral element.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint {
                x: self.x * zinv,
                y: self.y * zinv,
                infinity: 0,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`, complete for all inputs.
    pub fn add(&self, other: &Self) -> Self {
        point_arithmetic::add(self, other)
    }

    /// Returns `self + other` via the mixed-coordinate formula, complete
    /// for all inputs.
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        point_arithmetic::add_mixed(self, other)
    }

    /// Returns `self + self`, complete for all inputs.
    pub fn double(&self) -> Self {
        point_arithmetic::double(self)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self - other`.
    fn sub_mixed(&self, other: &AffinePoint<C>) -> Self {
        self.add_mixed(&-other)
    }

    /// Is this point the neutral element?
    ///
    /// The Z-coordinate's entire byte representation is folded into an
    /// OR-accumulator; the check never short-circuits, so its memory-access
    /// pattern is independent of the point's value.
    pub fn is_identity(&self) -> Choice {
        let repr = self.z.to_repr();
        let mut acc = 0u8;

        for &byte in repr.as_ref() {
            acc |= byte;
        }

        acc.ct_eq(&0)
    }

    /// Returns `[k] self` using the 4-bit fixed-window multiplier.
    fn mul(&self, k: &Scalar<C>) -> Self {
        let mut points = [Self::IDENTITY; 16];
        points[1] = *self;

        for i in 2..16 {
            points[i] = points[i - 1].add(self);
        }

        let repr = k.to_repr();
        mul::mul_fixed_window(&LookupTable::from_points(points), repr.as_ref())
    }
}

impl<C: PrimeCurveParams> ConditionallySelectable for ProjectivePoint<C> {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: PrimeCurveParams> ConstantTimeEq for ProjectivePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_affine().ct_eq(&other.to_affine())
    }
}

impl<C: PrimeCurveParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: PrimeCurveParams> DefaultIsZeroes for ProjectivePoint<C> {}

impl<C: PrimeCurveParams> Eq for ProjectivePoint<C> {}

impl<C: PrimeCurveParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: PrimeCurveParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: C::FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl<C: PrimeCurveParams> From<&AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: &AffinePoint<C>) -> Self {
        Self::from(*p)
    }
}

//
// Arithmetic trait impls
//

impl<C: PrimeCurveParams> Add<ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C: PrimeCurveParams> Add<&ProjectivePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, other)
    }
}

impl<C: PrimeCurveParams> Add<&ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, other)
    }
}

impl<C: PrimeCurveParams> AddAssign<ProjectivePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C: PrimeCurveParams> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C: PrimeCurveParams> Add<AffinePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, other: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, &other)
    }
}

impl<C: PrimeCurveParams> Add<&AffinePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(self, other)
    }
}

impl<C: PrimeCurveParams> Add<&AffinePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, other)
    }
}

impl<C: PrimeCurveParams> AddAssign<AffinePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: AffinePoint<C>) {
        *self = ProjectivePoint::add_mixed(self, &rhs);
    }
}

impl<C: PrimeCurveParams> AddAssign<&AffinePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: &AffinePoint<C>) {
        *self = ProjectivePoint::add_mixed(self, rhs);
    }
}

impl<C: PrimeCurveParams> Sum for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ProjectivePoint::IDENTITY, |a, b| a + b)
    }
}

impl<'a, C: PrimeCurveParams> Sum<&'a ProjectivePoint<C>> for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C>>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl<C: PrimeCurveParams> Sub<ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, &other)
    }
}

impl<C: PrimeCurveParams> Sub<&ProjectivePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(self, other)
    }
}

impl<C: PrimeCurveParams> Sub<&ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, other)
    }
}

impl<C: PrimeCurveParams> SubAssign<ProjectivePoint<C>> for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C: PrimeCurveParams> SubAssign<&ProjectivePoint<C>> for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl<C: PrimeCurveParams> Sub<AffinePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, other: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(&self, &other)
    }
}

impl<C: PrimeCurveParams> Sub<&AffinePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(self, other)
    }
}

impl<C: PrimeCurveParams> Sub<&AffinePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(&self, other)
    }
}

impl<C: PrimeCurveParams> SubAssign<AffinePoint<C>> for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: AffinePoint<C>) {
        *self = ProjectivePoint::sub_mixed(self, &rhs);
    }
}

impl<C: PrimeCurveParams> SubAssign<&AffinePoint<C>> for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: &AffinePoint<C>) {
        *self = ProjectivePoint::sub_mixed(self, rhs);
    }
}

impl<C, S> Mul<S> for ProjectivePoint<C>
where
    C: PrimeCurveParams,
    S: Borrow<Scalar<C>>,
{
    type Output = Self;

    fn mul(self, scalar: S) -> Self {
        ProjectivePoint::mul(&self, scalar.borrow())
    }
}

impl<C, S> Mul<S> for &ProjectivePoint<C>
where
    C: PrimeCurveParams,
    S: Borrow<Scalar<C>>,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: S) -> ProjectivePoint<C> {
        ProjectivePoint::mul(self, scalar.borrow())
    }
}

impl<C, S> MulAssign<S> for ProjectivePoint<C>
where
    C: PrimeCurveParams,
    S: Borrow<Scalar<C>>,
{
    fn mul_assign(&mut self, scalar: S) {
        *self = ProjectivePoint::mul(self, scalar.borrow());
    }
}

impl<C: PrimeCurveParams> Neg for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(&self)
    }
}

impl<C: PrimeCurveParams> Neg for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectivePoint;
    use crate::AffinePoint;
    use crate::dev::{MULTIPLES_OF_G, NistP256, Scalar, coord_bytes};
    use ff::Field;

    type Affine = AffinePoint<NistP256>;
    type Projective = ProjectivePoint<NistP256>;

    /// Assert that a projective point matches big-endian affine
    /// coordinates from a test vector.
    fn assert_point_eq(actual: Projective, expected: &([u8; 32], [u8; 32])) {
        let affine = actual.to_affine();
        assert_eq!(coord_bytes(&affine.x()), expected.0);
        assert_eq!(coord_bytes(&affine.y()), expected.1);
    }

    #[test]
    fn affine_to_projective() {
        let basepoint_affine = Affine::generator();
        let basepoint_projective = Projective::generator();

        assert_eq!(Projective::from(basepoint_affine), basepoint_projective);
        assert_eq!(basepoint_projective.to_affine(), basepoint_affine);
        assert!(!bool::from(basepoint_projective.to_affine().is_identity()));

        assert!(bool::from(Projective::IDENTITY.to_affine().is_identity()));
    }

    #[test]
    fn projective_identity_addition() {
        let identity = Projective::IDENTITY;
        let generator = Projective::generator();

        assert_eq!(identity + &generator, generator);
        assert_eq!(generator + &identity, generator);
    }

    #[test]
    fn projective_mixed_addition() {
        let identity = Projective::IDENTITY;
        let basepoint_affine = Affine::generator();
        let basepoint_projective = Projective::generator();

        assert_eq!(identity + &basepoint_affine, basepoint_projective);
        assert_eq!(
            basepoint_projective + &basepoint_affine,
            basepoint_projective + &basepoint_projective
        );
    }

    #[test]
    fn test_vector_repeated_add() {
        let generator = Projective::generator();
        let mut p = generator;

        for vector in &MULTIPLES_OF_G {
            assert_point_eq(p, vector);
            p += &generator;
        }
    }

    #[test]
    fn test_vector_repeated_add_mixed() {
        let generator = Affine::generator();
        let mut p = Projective::generator();

        for vector in &MULTIPLES_OF_G {
            assert_point_eq(p, vector);
            p += &generator;
        }
    }

    #[test]
    fn test_vector_double_generator() {
        let generator = Projective::generator();
        let mut p = generator;

        for i in 0..2 {
            assert_point_eq(p, &MULTIPLES_OF_G[(1 << i) - 1]);
            p = p.double();
        }
    }

    #[test]
    fn projective_add_vs_double() {
        let generator = Projective::generator();
        assert_eq!(generator + &generator, generator.double());
    }

    #[test]
    fn projective_add_and_sub() {
        let basepoint_affine = Affine::generator();
        let basepoint_projective = Projective::generator();

        assert_eq!(
            (basepoint_projective + &basepoint_projective) - &basepoint_projective,
            basepoint_projective
        );
        assert_eq!(
            (basepoint_projective + &basepoint_affine) - &basepoint_affine,
            basepoint_projective
        );
    }

    #[test]
    fn point_minus_itself_is_neutral() {
        let g = Projective::generator();
        // the difference is some (X, Y, 0) triple, not necessarily the
        // canonical identity encoding
        assert!(bool::from((g - &g).is_identity()));
        assert!(bool::from(g.add(&g.neg()).is_identity()));
    }

    #[test]
    fn scalar_two_matches_doubling() {
        let product = Projective::generator() * Scalar::from(2u64);
        let doubled = Projective::generator().double();

        let product = product.to_affine();
        let doubled = doubled.to_affine();
        assert_eq!(coord_bytes(&product.x()), coord_bytes(&doubled.x()));
        assert_eq!(coord_bytes(&product.y()), coord_bytes(&doubled.y()));
    }

    #[test]
    fn multiplication_by_zero_and_one() {
        let g = Projective::generator();

        assert!(bool::from((g * Scalar::ZERO).is_identity()));
        assert_eq!(g * Scalar::ONE, g);
    }

    #[test]
    fn multiplication_matches_repeated_addition() {
        let g = Projective::generator();
        let mut expected = Projective::IDENTITY;

        for k in 0u64..=8 {
            assert_eq!(g * Scalar::from(k), expected);
            expected += &g;
        }
    }

    #[test]
    fn sum_of_points() {
        let g = Projective::generator();
        let sum: Projective = [g, g.double()].into_iter().sum();
        assert_eq!(sum, g * Scalar::from(3u64));
    }
}

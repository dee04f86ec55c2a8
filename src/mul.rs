//! Scalar multiplication strategies.
//!
//! Two fixed strategies exist: [`WindowedMultiplier`] for arbitrary base
//! points, and [`GeneratorMultiplier`], which trades a larger precomputed
//! table for roughly 4× fewer rounds when the base is the curve generator.
//! [`ScalarMultiplier::for_point`] picks between them once, at setup time;
//! nothing in the multiplication loops re-examines which strategy is in
//! use.

use crate::{AffinePoint, PrimeCurveParams, ProjectivePoint, Scalar, lookup_table::LookupTable};
use ff::PrimeField;
use subtle::ConstantTimeEq;

#[cfg(feature = "std")]
use core::ops::Deref;
#[cfg(feature = "std")]
use std::sync::LazyLock;

/// Fixed-window multiplication loop shared by the windowed strategies.
///
/// Consumes `k` (little-endian, fixed length) most-significant nibble
/// first: one branchless lookup and one complete addition per nibble, four
/// doublings in between. The iteration count depends only on `k.len()`.
pub(crate) fn mul_fixed_window<C: PrimeCurveParams>(
    table: &LookupTable<C>,
    k: &[u8],
) -> ProjectivePoint<C> {
    let mut q = ProjectivePoint::IDENTITY;
    let mut pos = k.len() * 8 - 4;

    loop {
        let slot = (k[pos >> 3] >> (pos & 7)) & 0xf;
        q = q.add(&table.select(slot));

        if pos == 0 {
            break;
        }

        q = q.double().double().double().double();
        pos -= 4;
    }

    q
}

fn scalar_byte_len<C: PrimeCurveParams>() -> usize {
    <Scalar<C> as PrimeField>::Repr::default().as_ref().len()
}

/// 4-bit fixed-window, constant-time multiplier for an arbitrary base
/// point.
///
/// The table of multiples `{0·P .. 15·P}` is built once at construction;
/// every multiplication afterwards is the same fixed sequence of
/// doublings, branchless lookups, and complete additions regardless of the
/// scalar's value.
#[derive(Clone, Debug)]
pub struct WindowedMultiplier<C: PrimeCurveParams> {
    table: LookupTable<C>,
}

impl<C: PrimeCurveParams> WindowedMultiplier<C> {
    /// Precompute the table of small multiples of `point`.
    pub fn new(point: &AffinePoint<C>) -> Self {
        Self {
            table: LookupTable::new(point),
        }
    }

    /// Returns `[k] P` for a scalar in little-endian byte form.
    ///
    /// `k` must have the curve's fixed scalar length. This is a caller
    /// contract and is only debug-asserted.
    pub(crate) fn multiply_bytes(&self, k: &[u8]) -> ProjectivePoint<C> {
        debug_assert_eq!(k.len(), scalar_byte_len::<C>());
        mul_fixed_window(&self.table, k)
    }

    /// Returns `[k] P`.
    pub fn multiply(&self, k: &Scalar<C>) -> ProjectivePoint<C> {
        let repr = k.to_repr();
        self.multiply_bytes(repr.as_ref())
    }
}

/// Comb multiplier keyed to the curve generator.
///
/// Row `j`, column `w` of the 4×16 table holds `Σ 2^(64k + 16j)·G` over the
/// set bits `k` of `w`: a 4-bit index spread over four 64-bit-spaced digit
/// positions. A 256-bit scalar is then consumed in 16 rounds of one
/// doubling and four branchless lookups, instead of the 64 rounds the
/// windowed multiplier needs.
#[derive(Clone, Debug)]
pub struct GeneratorMultiplier<C: PrimeCurveParams> {
    tables: [LookupTable<C>; 4],
}

impl<C: PrimeCurveParams> GeneratorMultiplier<C> {
    /// Precompute the 4×16 generator table.
    ///
    /// When debug assertions are enabled the table is cross-checked
    /// against the windowed multiplier before being returned; see
    /// [`GeneratorMultiplier::verify_tables`].
    ///
    /// # Panics
    ///
    /// If the curve's scalar representation is not 32 bytes: the comb
    /// decomposition is keyed to 256-bit scalars.
    pub fn new() -> Self {
        assert_eq!(
            scalar_byte_len::<C>(),
            32,
            "comb tables require a 256-bit scalar representation"
        );

        // powers[i] = 2^(16i)·G
        let mut powers = [ProjectivePoint::<C>::IDENTITY; 16];
        let mut acc = ProjectivePoint::generator();

        for power in powers.iter_mut() {
            *power = acc;
            for _ in 0..16 {
                acc = acc.double();
            }
        }

        let mut tables = [LookupTable::from_points([ProjectivePoint::IDENTITY; 16]); 4];

        for (j, table) in tables.iter_mut().enumerate() {
            let mut points = [ProjectivePoint::IDENTITY; 16];

            for (w, point) in points.iter_mut().enumerate().skip(1) {
                let mut sum = ProjectivePoint::IDENTITY;

                for k in 0..4 {
                    if w & (1 << k) != 0 {
                        sum = sum.add(&powers[j + 4 * k]);
                    }
                }

                *point = sum;
            }

            *table = LookupTable::from_points(points);
        }

        let multiplier = Self { tables };

        #[cfg(debug_assertions)]
        multiplier.verify_tables();

        multiplier
    }

    /// Returns `[k] G`.
    pub fn multiply(&self, k: &Scalar<C>) -> ProjectivePoint<C> {
        let repr = k.to_repr();
        let s = repr.as_ref();
        let mut q = ProjectivePoint::IDENTITY;

        for i in (0..16).rev() {
            q = q.double();

            for (j, table) in self.tables.iter().enumerate() {
                let pos = i + 16 * j;
                let slot = bit(s, pos)
                    | (bit(s, pos + 64) << 1)
                    | (bit(s, pos + 128) << 2)
                    | (bit(s, pos + 192) << 3);
                q = q.add(&table.select(slot));
            }
        }

        q
    }

    /// Recompute every table entry with the windowed multiplier and compare
    /// affine coordinates.
    ///
    /// Runs automatically at construction when debug assertions are
    /// enabled; production callers that want the startup cross-check can
    /// invoke it explicitly.
    ///
    /// # Panics
    ///
    /// If any entry disagrees with the windowed recomputation. A mismatch
    /// means the precomputation itself is broken: a programming error,
    /// not an input condition.
    pub fn verify_tables(&self) {
        let windowed = WindowedMultiplier::new(&AffinePoint::generator());

        for (j, table) in self.tables.iter().enumerate() {
            for (w, point) in table.points().iter().enumerate() {
                let mut scalar = [0u8; 32];

                for k in 0..4 {
                    if w & (1 << k) != 0 {
                        let pos = 16 * j + 64 * k;
                        scalar[pos >> 3] |= 1 << (pos & 7);
                    }
                }

                let expected = windowed.multiply_bytes(&scalar).to_affine();
                assert!(
                    bool::from(expected.ct_eq(&point.to_affine())),
                    "generator table entry ({j}, {w}) does not match"
                );
            }
        }
    }
}

impl<C: PrimeCurveParams> Default for GeneratorMultiplier<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn bit(s: &[u8], i: usize) -> u8 {
    (s[i >> 3] >> (i & 7)) & 1
}

/// Scalar multiplication strategy bound to one base point.
///
/// The set of strategies is closed: fixed-window for an arbitrary point,
/// comb for the curve generator. Selection happens here exactly once, by
/// structural comparison with the generator, never inside a multiplication
/// loop.
#[derive(Clone, Debug)]
pub enum ScalarMultiplier<C: PrimeCurveParams> {
    /// 4-bit fixed-window multiplication for an arbitrary point.
    Windowed(WindowedMultiplier<C>),

    /// Comb multiplication keyed to the curve generator.
    Generator(GeneratorMultiplier<C>),
}

impl<C: PrimeCurveParams> ScalarMultiplier<C> {
    /// Select and construct the multiplication strategy for `point`.
    ///
    /// The comb strategy applies when `point` is structurally the curve
    /// generator and the curve has a 256-bit scalar representation; every
    /// other point gets the windowed strategy.
    pub fn for_point(point: &AffinePoint<C>) -> Self {
        let is_generator = bool::from(point.ct_eq(&AffinePoint::generator()));

        if is_generator && scalar_byte_len::<C>() == 32 {
            Self::Generator(GeneratorMultiplier::new())
        } else {
            Self::Windowed(WindowedMultiplier::new(point))
        }
    }

    /// Returns `[k] P` for the point this multiplier was built for.
    pub fn multiply(&self, k: &Scalar<C>) -> ProjectivePoint<C> {
        match self {
            Self::Windowed(mul) => mul.multiply(k),
            Self::Generator(mul) => mul.multiply(k),
        }
    }
}

/// Lazily-initialized generator multiplier which can be bound to a
/// `static`.
///
/// The comb table is built exactly once, on first use, no matter how many
/// threads race the initialization; afterwards it is shared read-only.
#[cfg(feature = "std")]
pub struct BasePointTable<C: PrimeCurveParams> {
    table: LazyLock<GeneratorMultiplier<C>>,
}

#[cfg(feature = "std")]
impl<C: PrimeCurveParams> BasePointTable<C> {
    /// Create a new [`BasePointTable`] whose comb table is computed on
    /// first use.
    pub const fn new() -> Self {
        Self {
            table: LazyLock::new(GeneratorMultiplier::new),
        }
    }
}

#[cfg(feature = "std")]
impl<C: PrimeCurveParams> Default for BasePointTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl<C: PrimeCurveParams> Deref for BasePointTable<C> {
    type Target = GeneratorMultiplier<C>;

    #[inline]
    fn deref(&self) -> &GeneratorMultiplier<C> {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::{GeneratorMultiplier, ScalarMultiplier, WindowedMultiplier};
    use crate::dev::{NistP256, Scalar};
    use crate::{AffinePoint, ProjectivePoint, seed_to_scalar};
    use ff::Field;

    type Affine = AffinePoint<NistP256>;
    type Projective = ProjectivePoint<NistP256>;

    fn sample_scalars() -> [Scalar; 6] {
        [
            Scalar::ZERO,
            Scalar::ONE,
            Scalar::from(2u64),
            Scalar::from(0xdead_beef_u64),
            seed_to_scalar::<NistP256>(&[0x5a; 40]).unwrap(),
            seed_to_scalar::<NistP256>(&[0xc3; 40]).unwrap(),
        ]
    }

    #[test]
    fn windowed_multiplication_matches_repeated_addition() {
        let g = Affine::generator();
        let multiplier = WindowedMultiplier::new(&g);
        let mut expected = Projective::IDENTITY;

        for k in 0u64..=20 {
            assert_eq!(multiplier.multiply(&Scalar::from(k)), expected);
            expected += &g;
        }
    }

    #[test]
    fn comb_agrees_with_windowed() {
        let windowed = WindowedMultiplier::new(&Affine::generator());
        let comb = GeneratorMultiplier::new();

        for k in sample_scalars() {
            assert_eq!(
                comb.multiply(&k).to_affine(),
                windowed.multiply(&k).to_affine()
            );
        }
    }

    #[test]
    fn comb_multiplication_by_zero_is_neutral() {
        let comb = GeneratorMultiplier::<NistP256>::new();
        assert!(bool::from(comb.multiply(&Scalar::ZERO).is_identity()));
    }

    #[test]
    fn table_self_check_passes() {
        GeneratorMultiplier::<NistP256>::new().verify_tables();
    }

    #[test]
    fn strategy_selection() {
        let g = Affine::generator();
        let two_g = Projective::generator().double().to_affine();

        assert!(matches!(
            ScalarMultiplier::for_point(&g),
            ScalarMultiplier::Generator(_)
        ));
        assert!(matches!(
            ScalarMultiplier::for_point(&two_g),
            ScalarMultiplier::Windowed(_)
        ));
    }

    #[test]
    fn selected_strategies_agree() {
        let g = Affine::generator();
        let for_generator = ScalarMultiplier::for_point(&g);
        let windowed = WindowedMultiplier::new(&g);

        for k in sample_scalars() {
            assert_eq!(
                for_generator.multiply(&k).to_affine(),
                windowed.multiply(&k).to_affine()
            );
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn base_point_table_in_static() {
        use super::BasePointTable;

        static TABLE: BasePointTable<NistP256> = BasePointTable::new();

        let k = Scalar::from(7u64);
        assert_eq!(TABLE.multiply(&k), Projective::generator() * k);
    }
}

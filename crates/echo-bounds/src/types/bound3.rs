// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_tuple::{Scalar, Tuple3, Vec3};

use crate::contract::{write_merged3, write_scaled3, Bound3Read, Bound3Sink};
use crate::{Axis3, BoundError};

/// Axis-aligned box in three dimensions.
///
/// Same contract as [`crate::Bound2`] with a third axis: corners are
/// normalized on every write, derived values are computed on demand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Bound3<T> {
    min: Vec3<T>,
    max: Vec3<T>,
}

impl<T: Scalar> Bound3<T> {
    /// Builds a bound from per-axis scalars, in any order per axis.
    #[must_use]
    pub fn from_coords(min_0: T, min_1: T, min_2: T, max_0: T, max_1: T, max_2: T) -> Self {
        let mut bound = Self {
            min: Vec3::new(min_0, min_1, min_2),
            max: Vec3::new(max_0, max_1, max_2),
        };
        bound.set(min_0, min_1, min_2, max_0, max_1, max_2);
        bound
    }

    /// Builds the bound spanned by two opposite corners.
    #[must_use]
    pub fn new(a: &impl Tuple3<T>, b: &impl Tuple3<T>) -> Self {
        Self::from_coords(a.v0(), a.v1(), a.v2(), b.v0(), b.v1(), b.v2())
    }

    /// Zero-size bound located at `point`.
    #[must_use]
    pub fn from_point(point: &impl Tuple3<T>) -> Self {
        Self::new(point, point)
    }

    /// Builds a bound from one corner and its dimensions.
    #[must_use]
    pub fn from_corner_size(corner: &impl Tuple3<T>, size: &impl Tuple3<T>) -> Self {
        let corner = Vec3::from_tuple(corner);
        Self::new(&corner, &(corner + Vec3::from_tuple(size)))
    }

    /// Builds a bound centered at `center` with half-extents `hx`, `hy`, `hz`.
    #[must_use]
    pub fn from_center_half_extents(center: &impl Tuple3<T>, hx: T, hy: T, hz: T) -> Self {
        let center = Vec3::from_tuple(center);
        let he = Vec3::new(hx, hy, hz);
        Self::new(&(center - he), &(center + he))
    }

    /// Builds the smallest bound containing every point, or `None` when empty.
    #[must_use]
    pub fn from_points<P: Tuple3<T>>(points: impl IntoIterator<Item = P>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(&first), |mut bound, point| {
            bound.merge_point(&point);
            bound
        }))
    }

    /// Builds a bound from `[min_0, min_1, min_2, max_0, max_1, max_2]`.
    pub fn try_from_slice(values: &[T]) -> Result<Self, BoundError> {
        if let [min_0, min_1, min_2, max_0, max_1, max_2, ..] = values {
            Ok(Self::from_coords(*min_0, *min_1, *min_2, *max_0, *max_1, *max_2))
        } else {
            Err(BoundError::short_slice("Bound3", 6, values.len()))
        }
    }

    /// Replaces both corners, normalizing each axis.
    pub fn set(&mut self, min_0: T, min_1: T, min_2: T, max_0: T, max_1: T, max_2: T) -> &mut Self {
        self.set_extent(Axis3::X, min_0, max_0);
        self.set_extent(Axis3::Y, min_1, max_1);
        self.set_extent(Axis3::Z, min_2, max_2);
        self
    }

    /// Minimum coordinate on `axis`.
    #[must_use]
    pub fn min(&self, axis: Axis3) -> T {
        axis.of(&self.min)
    }

    /// Maximum coordinate on `axis`.
    #[must_use]
    pub fn max(&self, axis: Axis3) -> T {
        axis.of(&self.max)
    }

    /// Extent on `axis`.
    #[must_use]
    pub fn size(&self, axis: Axis3) -> T {
        Bound3Read::size(self, axis)
    }

    /// Midpoint on `axis`.
    #[must_use]
    pub fn center(&self, axis: Axis3) -> T {
        Bound3Read::center(self, axis)
    }

    /// Minimum corner.
    #[must_use]
    pub fn min_corner(&self) -> Vec3<T> {
        self.min
    }

    /// Maximum corner.
    #[must_use]
    pub fn max_corner(&self) -> Vec3<T> {
        self.max
    }

    /// Per-axis sizes.
    #[must_use]
    pub fn size_vec(&self) -> Vec3<T> {
        self.max - self.min
    }

    /// Per-axis centers.
    #[must_use]
    pub fn center_vec(&self) -> Vec3<T> {
        Vec3::new(
            self.center(Axis3::X),
            self.center(Axis3::Y),
            self.center(Axis3::Z),
        )
    }

    /// Volume (product of sizes).
    #[must_use]
    pub fn volume(&self) -> T {
        self.size(Axis3::X) * self.size(Axis3::Y) * self.size(Axis3::Z)
    }

    /// Multiplies both corners per axis, then renormalizes.
    pub fn scale(&mut self, f0: T, f1: T, f2: T) -> &mut Self {
        let source = *self;
        write_scaled3(&source, &[f0, f1, f2], self);
        self
    }

    /// Non-mutating [`Self::scale`].
    #[must_use]
    pub fn scaled(&self, f0: T, f1: T, f2: T) -> Self {
        let mut out = *self;
        out.scale(f0, f1, f2);
        out
    }

    /// Grows to the smallest bound containing itself and the region spanned by
    /// `other_min`/`other_max`.
    pub fn merge(&mut self, other_min: &impl Tuple3<T>, other_max: &impl Tuple3<T>) -> &mut Self {
        let source = *self;
        write_merged3(&source, other_min, other_max, self);
        self
    }

    /// Non-mutating [`Self::merge`].
    #[must_use]
    pub fn merged(&self, other_min: &impl Tuple3<T>, other_max: &impl Tuple3<T>) -> Self {
        let mut out = *self;
        out.merge(other_min, other_max);
        out
    }

    /// Grows to contain `point`.
    pub fn merge_point(&mut self, point: &impl Tuple3<T>) -> &mut Self {
        let point = Vec3::from_tuple(point);
        self.merge(&point, &point)
    }

    /// Non-mutating [`Self::merge_point`].
    #[must_use]
    pub fn merged_point(&self, point: &impl Tuple3<T>) -> Self {
        let mut out = *self;
        out.merge_point(point);
        out
    }

    /// Grows to contain `other`.
    pub fn merge_bound(&mut self, other: &impl Bound3Read<T>) -> &mut Self {
        let lo = Vec3::new(other.min(Axis3::X), other.min(Axis3::Y), other.min(Axis3::Z));
        let hi = Vec3::new(other.max(Axis3::X), other.max(Axis3::Y), other.max(Axis3::Z));
        self.merge(&lo, &hi)
    }

    /// Non-mutating [`Self::merge_bound`].
    #[must_use]
    pub fn merged_bound(&self, other: &impl Bound3Read<T>) -> Self {
        let mut out = *self;
        out.merge_bound(other);
        out
    }

    /// Grows to contain the region given as raw per-axis scalars.
    pub fn merge_coords(
        &mut self,
        min_0: T,
        min_1: T,
        min_2: T,
        max_0: T,
        max_1: T,
        max_2: T,
    ) -> &mut Self {
        self.merge(&[min_0, min_1, min_2], &[max_0, max_1, max_2])
    }

    /// Grows (or shrinks, for negative `margin`) every face by `margin`.
    #[must_use]
    pub fn inflate(&self, margin: T) -> Self {
        let delta = Vec3::splat(margin);
        Self::new(&(self.min - delta), &(self.max + delta))
    }
}

impl<T: Scalar> Bound3Read<T> for Bound3<T> {
    fn min(&self, axis: Axis3) -> T {
        Bound3::min(self, axis)
    }

    fn max(&self, axis: Axis3) -> T {
        Bound3::max(self, axis)
    }
}

impl<T: Scalar> Bound3Sink<T> for Bound3<T> {
    fn set_extent(&mut self, axis: Axis3, a: T, b: T) {
        axis.write(&mut self.min, a.min_of(b));
        axis.write(&mut self.max, a.max_of(b));
    }
}

#[cfg(test)]
mod tests {
    use super::Bound3;
    use crate::{Axis3, BoundError, Vec3};

    #[test]
    fn corners_are_sorted_per_axis() {
        let b = Bound3::from_coords(1.0_f32, 5.0, -2.0, -1.0, 0.0, 2.0);
        assert_eq!(b.min_corner().to_array(), [-1.0, 0.0, -2.0]);
        assert_eq!(b.max_corner().to_array(), [1.0, 5.0, 2.0]);
    }

    #[test]
    fn each_axis_center_uses_its_own_range() {
        let b = Bound3::from_coords(0.0_f64, 10.0, 100.0, 2.0, 20.0, 300.0);
        assert_eq!(b.center_vec().to_array(), [1.0, 15.0, 200.0]);
        assert_eq!(b.size(Axis3::Z), 200.0);
        assert_eq!(b.volume(), 2.0 * 10.0 * 200.0);
    }

    #[test]
    fn scale_with_negative_factor_renormalizes() {
        let mut b = Bound3::from_coords(1.0_f32, 1.0, 1.0, 2.0, 3.0, 4.0);
        b.scale(1.0, -1.0, -0.5);
        assert_eq!(b.min_corner().to_array(), [1.0, -3.0, -2.0]);
        assert_eq!(b.max_corner().to_array(), [2.0, -1.0, -0.5]);
        for axis in Axis3::ALL {
            assert!(b.min(axis) <= b.max(axis));
        }
    }

    #[test]
    fn merge_reduces_to_one_union() {
        let base = Bound3::from_point(&[0.0_f32, 0.0, 0.0]);
        let other = Bound3::from_coords(1.0_f32, -1.0, 2.0, 3.0, 1.0, 4.0);
        let expected = Bound3::from_coords(0.0, -1.0, 0.0, 3.0, 1.0, 4.0);

        assert_eq!(base.merged_bound(&other), expected);
        assert_eq!(base.merged(&[3.0, 1.0, 4.0], &[1.0, -1.0, 2.0]), expected);
        let mut coords = base;
        coords.merge_coords(1.0, -1.0, 2.0, 3.0, 1.0, 4.0);
        assert_eq!(coords, expected);
        assert_eq!(
            base.merged_point(&(3.0, -1.0, 4.0)).merged_point(&[1.0, 1.0, 2.0]),
            expected
        );
    }

    #[test]
    fn constructors_route_through_normalization() {
        let c = Bound3::from_center_half_extents(&Vec3::new(1.0_f32, 1.0, 1.0), 1.0, 2.0, 3.0);
        assert_eq!(c, Bound3::from_coords(0.0, -1.0, -2.0, 2.0, 3.0, 4.0));

        let s = Bound3::from_corner_size(&[0.0_f32, 0.0, 0.0], &[-1.0, 2.0, -3.0]);
        assert_eq!(s, Bound3::from_coords(-1.0, 0.0, -3.0, 0.0, 2.0, 0.0));

        let p = Bound3::from_points([[1.0_f32, 2.0, 3.0], [-1.0, 0.0, 5.0]]);
        assert_eq!(p, Some(Bound3::from_coords(-1.0, 0.0, 3.0, 1.0, 2.0, 5.0)));
        assert_eq!(Bound3::<f32>::from_points(Vec::<[f32; 3]>::new()), None);
    }

    #[test]
    fn slice_needs_six_scalars() {
        assert!(Bound3::try_from_slice(&[0.0_f32, 0.0, 0.0, 1.0, 1.0, 1.0, 9.0]).is_ok());
        assert_eq!(
            Bound3::<f32>::try_from_slice(&[0.0; 5]),
            Err(BoundError::InvalidArgument {
                shape: "Bound3",
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn inflate_grows_every_face() {
        let b = Bound3::from_coords(0.0_f32, 0.0, 0.0, 1.0, 1.0, 1.0).inflate(0.5);
        assert_eq!(b.min_corner().to_array(), [-0.5, -0.5, -0.5]);
        assert_eq!(b.max_corner().to_array(), [1.5, 1.5, 1.5]);
    }
}

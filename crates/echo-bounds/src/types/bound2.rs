// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_tuple::{Scalar, Tuple2, Vec2};

use crate::contract::{write_merged2, write_scaled2, Bound2Read, Bound2Sink};
use crate::{Axis2, BoundError};

/// Axis-aligned rectangle defined by two corners.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components. Inputs are
///   never assumed pre-sorted; every write is normalized per axis.
/// - `size` and `center` are derived on demand, so they cannot drift from the
///   stored corners.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Bound2<T> {
    min: Vec2<T>,
    max: Vec2<T>,
}

impl<T: Scalar> Bound2<T> {
    /// Builds a bound from per-axis scalars, in any order per axis.
    #[must_use]
    pub fn from_coords(min_0: T, min_1: T, max_0: T, max_1: T) -> Self {
        let mut bound = Self {
            min: Vec2::new(min_0, min_1),
            max: Vec2::new(max_0, max_1),
        };
        bound.set(min_0, min_1, max_0, max_1);
        bound
    }

    /// Builds the bound spanned by two opposite corners.
    #[must_use]
    pub fn new(a: &impl Tuple2<T>, b: &impl Tuple2<T>) -> Self {
        Self::from_coords(a.v0(), a.v1(), b.v0(), b.v1())
    }

    /// Zero-size bound located at `point`.
    #[must_use]
    pub fn from_point(point: &impl Tuple2<T>) -> Self {
        Self::from_coords(point.v0(), point.v1(), point.v0(), point.v1())
    }

    /// Builds a bound from one corner and its dimensions.
    ///
    /// Negative dimensions extend toward the negative side of that axis.
    #[must_use]
    pub fn from_corner_size(corner: &impl Tuple2<T>, size: &impl Tuple2<T>) -> Self {
        Self::from_coords(
            corner.v0(),
            corner.v1(),
            corner.v0() + size.v0(),
            corner.v1() + size.v1(),
        )
    }

    /// Builds a bound centered at `center` with half-extents `hx`, `hy`.
    #[must_use]
    pub fn from_center_half_extents(center: &impl Tuple2<T>, hx: T, hy: T) -> Self {
        Self::from_coords(
            center.v0() - hx,
            center.v1() - hy,
            center.v0() + hx,
            center.v1() + hy,
        )
    }

    /// Builds the smallest bound containing every point, or `None` when empty.
    #[must_use]
    pub fn from_points<P: Tuple2<T>>(points: impl IntoIterator<Item = P>) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut bound = Self::from_point(&iter.next()?);
        for point in iter {
            bound.merge_point(&point);
        }
        Some(bound)
    }

    /// Builds a bound from the flat layout `[min_0, min_1, max_0, max_1]`.
    ///
    /// Extra scalars are ignored.
    pub fn try_from_slice(values: &[T]) -> Result<Self, BoundError> {
        if let [min_0, min_1, max_0, max_1, ..] = values {
            Ok(Self::from_coords(*min_0, *min_1, *max_0, *max_1))
        } else {
            Err(BoundError::short_slice("Bound2", 4, values.len()))
        }
    }

    /// Replaces both corners, normalizing each axis.
    pub fn set(&mut self, min_0: T, min_1: T, max_0: T, max_1: T) -> &mut Self {
        self.set_extent(Axis2::X, min_0, max_0);
        self.set_extent(Axis2::Y, min_1, max_1);
        self
    }

    /// Minimum coordinate on `axis`.
    #[must_use]
    pub fn min(&self, axis: Axis2) -> T {
        axis.of(&self.min)
    }

    /// Maximum coordinate on `axis`.
    #[must_use]
    pub fn max(&self, axis: Axis2) -> T {
        axis.of(&self.max)
    }

    /// Extent on `axis`; never negative for finite inputs.
    #[must_use]
    pub fn size(&self, axis: Axis2) -> T {
        Bound2Read::size(self, axis)
    }

    /// Midpoint on `axis`.
    #[must_use]
    pub fn center(&self, axis: Axis2) -> T {
        Bound2Read::center(self, axis)
    }

    /// Minimum corner.
    #[must_use]
    pub fn min_corner(&self) -> Vec2<T> {
        self.min
    }

    /// Maximum corner.
    #[must_use]
    pub fn max_corner(&self) -> Vec2<T> {
        self.max
    }

    /// Per-axis sizes.
    #[must_use]
    pub fn size_vec(&self) -> Vec2<T> {
        Vec2::new(self.size(Axis2::X), self.size(Axis2::Y))
    }

    /// Per-axis centers.
    #[must_use]
    pub fn center_vec(&self) -> Vec2<T> {
        Vec2::new(self.center(Axis2::X), self.center(Axis2::Y))
    }

    /// Area (product of sizes).
    #[must_use]
    pub fn area(&self) -> T {
        self.size(Axis2::X) * self.size(Axis2::Y)
    }

    /// Multiplies both corners per axis, then renormalizes.
    pub fn scale(&mut self, f0: T, f1: T) -> &mut Self {
        let source = *self;
        write_scaled2(&source, &[f0, f1], self);
        self
    }

    /// Non-mutating [`Self::scale`].
    #[must_use]
    pub fn scaled(&self, f0: T, f1: T) -> Self {
        let mut out = *self;
        out.scale(f0, f1);
        out
    }

    /// Grows to the smallest bound containing itself and the region spanned by
    /// `other_min`/`other_max` (which may arrive in either order).
    pub fn merge(&mut self, other_min: &impl Tuple2<T>, other_max: &impl Tuple2<T>) -> &mut Self {
        let source = *self;
        write_merged2(&source, other_min, other_max, self);
        self
    }

    /// Non-mutating [`Self::merge`].
    #[must_use]
    pub fn merged(&self, other_min: &impl Tuple2<T>, other_max: &impl Tuple2<T>) -> Self {
        let mut out = *self;
        out.merge(other_min, other_max);
        out
    }

    /// Grows to contain `point`.
    pub fn merge_point(&mut self, point: &impl Tuple2<T>) -> &mut Self {
        let point = Vec2::from_tuple(point);
        self.merge(&point, &point)
    }

    /// Non-mutating [`Self::merge_point`].
    #[must_use]
    pub fn merged_point(&self, point: &impl Tuple2<T>) -> Self {
        let mut out = *self;
        out.merge_point(point);
        out
    }

    /// Grows to contain `other`.
    pub fn merge_bound(&mut self, other: &impl Bound2Read<T>) -> &mut Self {
        let (lo, hi) = corners_of(other);
        self.merge(&lo, &hi)
    }

    /// Non-mutating [`Self::merge_bound`].
    #[must_use]
    pub fn merged_bound(&self, other: &impl Bound2Read<T>) -> Self {
        let mut out = *self;
        out.merge_bound(other);
        out
    }

    /// Grows to contain the region given as raw per-axis scalars.
    pub fn merge_coords(&mut self, min_0: T, min_1: T, max_0: T, max_1: T) -> &mut Self {
        self.merge(&[min_0, min_1], &[max_0, max_1])
    }

    /// Grows (or, for negative `margin`, shrinks) every side by `margin`.
    ///
    /// Shrinking past zero size does not invert the bound; the sides pass
    /// through each other and the result is renormalized.
    #[must_use]
    pub fn inflate(&self, margin: T) -> Self {
        let delta = Vec2::splat(margin);
        Self::new(&(self.min - delta), &(self.max + delta))
    }
}

fn corners_of<T: Scalar>(bound: &impl Bound2Read<T>) -> (Vec2<T>, Vec2<T>) {
    (
        Vec2::new(bound.min(Axis2::X), bound.min(Axis2::Y)),
        Vec2::new(bound.max(Axis2::X), bound.max(Axis2::Y)),
    )
}

impl<T: Scalar> Bound2Read<T> for Bound2<T> {
    fn min(&self, axis: Axis2) -> T {
        Bound2::min(self, axis)
    }

    fn max(&self, axis: Axis2) -> T {
        Bound2::max(self, axis)
    }
}

impl<T: Scalar> Bound2Sink<T> for Bound2<T> {
    fn set_extent(&mut self, axis: Axis2, a: T, b: T) {
        axis.write(&mut self.min, a.min_of(b));
        axis.write(&mut self.max, a.max_of(b));
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Capability traits separating read access from write access.
//!
//! Queries ([`crate::resolver`]) only need the `*Read` traits. Operations that
//! produce a new bound write through a `*Sink`, so the result can land in any
//! caller-owned type (for example a component stored in an ECS column) rather
//! than a fresh [`crate::Bound2`]/[`crate::Bound3`].
//!
//! Sink contract: `set_extent(axis, a, b)` stores `MIN(a, b)` as the minimum
//! and `MAX(a, b)` as the maximum of that axis. Writers below never pre-sort
//! on behalf of a sink.

use echo_tuple::{Scalar, Tuple2, Tuple3, Vec2};

use crate::{Axis2, Axis3};

/// Read contract for 2D axis-aligned bounds.
pub trait Bound2Read<T: Scalar> {
    /// Minimum coordinate on `axis`.
    fn min(&self, axis: Axis2) -> T;

    /// Maximum coordinate on `axis`.
    fn max(&self, axis: Axis2) -> T;

    /// Extent on `axis` (`max - min`).
    fn size(&self, axis: Axis2) -> T {
        self.max(axis) - self.min(axis)
    }

    /// Midpoint on `axis`, computed from that axis' own min and max.
    fn center(&self, axis: Axis2) -> T {
        (self.min(axis) + self.max(axis)) * T::half()
    }
}

/// Read contract for 3D axis-aligned bounds.
pub trait Bound3Read<T: Scalar> {
    /// Minimum coordinate on `axis`.
    fn min(&self, axis: Axis3) -> T;

    /// Maximum coordinate on `axis`.
    fn max(&self, axis: Axis3) -> T;

    /// Extent on `axis` (`max - min`).
    fn size(&self, axis: Axis3) -> T {
        self.max(axis) - self.min(axis)
    }

    /// Midpoint on `axis`, computed from that axis' own min and max.
    fn center(&self, axis: Axis3) -> T {
        (self.min(axis) + self.max(axis)) * T::half()
    }
}

/// Per-axis setter for 2D bounds.
pub trait Bound2Sink<T: Scalar> {
    /// Stores the extent `[MIN(a, b), MAX(a, b)]` on `axis`.
    fn set_extent(&mut self, axis: Axis2, a: T, b: T);
}

/// Per-axis setter for 3D bounds.
pub trait Bound3Sink<T: Scalar> {
    /// Stores the extent `[MIN(a, b), MAX(a, b)]` on `axis`.
    fn set_extent(&mut self, axis: Axis3, a: T, b: T);
}

/// Read contract for 2D circles.
pub trait CircleRead<T: Scalar> {
    /// Center point.
    fn center(&self) -> Vec2<T>;

    /// Radius as stored (may be negative; see [`crate::CircleBound2`]).
    fn radius(&self) -> T;

    /// Squared radius; what containment tests compare against.
    fn radius_squared(&self) -> T {
        self.radius() * self.radius()
    }
}

/// Writes `bound` scaled per axis by `factors` into `out`.
///
/// Corners are multiplied and handed to the sink unsorted; a negative factor
/// swaps which corner is smaller and the sink's normalization fixes that.
pub fn write_scaled2<T, B, S>(bound: &B, factors: &impl Tuple2<T>, out: &mut S)
where
    T: Scalar,
    B: Bound2Read<T>,
    S: Bound2Sink<T>,
{
    for axis in Axis2::ALL {
        let factor = axis.of(factors);
        out.set_extent(axis, bound.min(axis) * factor, bound.max(axis) * factor);
    }
}

/// Writes `bound` scaled per axis by `factors` into `out`.
pub fn write_scaled3<T, B, S>(bound: &B, factors: &impl Tuple3<T>, out: &mut S)
where
    T: Scalar,
    B: Bound3Read<T>,
    S: Bound3Sink<T>,
{
    for axis in Axis3::ALL {
        let factor = axis.of(factors);
        out.set_extent(axis, bound.min(axis) * factor, bound.max(axis) * factor);
    }
}

/// Writes the union of `bound` and the region spanned by `a`/`b` into `out`.
///
/// `a` and `b` may arrive in either order; passing the same point twice merges
/// a single point.
pub fn write_merged2<T, B, S>(bound: &B, a: &impl Tuple2<T>, b: &impl Tuple2<T>, out: &mut S)
where
    T: Scalar,
    B: Bound2Read<T>,
    S: Bound2Sink<T>,
{
    for axis in Axis2::ALL {
        let (lo, hi) = (axis.of(a), axis.of(b));
        out.set_extent(
            axis,
            bound.min(axis).min_of(lo.min_of(hi)),
            bound.max(axis).max_of(lo.max_of(hi)),
        );
    }
}

/// Writes the union of `bound` and the region spanned by `a`/`b` into `out`.
pub fn write_merged3<T, B, S>(bound: &B, a: &impl Tuple3<T>, b: &impl Tuple3<T>, out: &mut S)
where
    T: Scalar,
    B: Bound3Read<T>,
    S: Bound3Sink<T>,
{
    for axis in Axis3::ALL {
        let (lo, hi) = (axis.of(a), axis.of(b));
        out.set_extent(
            axis,
            bound.min(axis).min_of(lo.min_of(hi)),
            bound.max(axis).max_of(lo.max_of(hi)),
        );
    }
}

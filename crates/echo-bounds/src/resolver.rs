// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Stateless containment and surface queries.
//!
//! Border polarity is fixed for every shape and dimension:
//! - `with_border = true`: a point on the border counts as inside
//!   (rejected only when `coord < min` or `coord > max`).
//! - `with_border = false`: the border counts as outside
//!   (rejected when `coord <= min` or `coord >= max`).
//!
//! Circle queries compare squared distance with squared radius; no square
//! root is taken on either side. Surface queries use exact equality.

use echo_tuple::{Scalar, Tuple2, Tuple3, Vec2};

use crate::contract::{Bound2Read, Bound3Read, CircleRead};
use crate::{Axis2, Axis3};

fn within<T: Scalar>(coord: T, min: T, max: T, with_border: bool) -> bool {
    if with_border {
        (min..=max).contains(&coord)
    } else {
        coord > min && coord < max
    }
}

fn touches<T: Scalar>(coord: T, min: T, max: T) -> bool {
    coord == min || coord == max
}

/// Returns `true` if `point` lies inside `bound` on both axes.
pub fn point_in_box2<T, B, P>(bound: &B, point: &P, with_border: bool) -> bool
where
    T: Scalar,
    B: Bound2Read<T>,
    P: Tuple2<T>,
{
    Axis2::ALL
        .into_iter()
        .all(|axis| within(axis.of(point), bound.min(axis), bound.max(axis), with_border))
}

/// Returns `true` if `point` lies inside `bound` on all three axes.
pub fn point_in_box3<T, B, P>(bound: &B, point: &P, with_border: bool) -> bool
where
    T: Scalar,
    B: Bound3Read<T>,
    P: Tuple3<T>,
{
    Axis3::ALL
        .into_iter()
        .all(|axis| within(axis.of(point), bound.min(axis), bound.max(axis), with_border))
}

/// Returns `true` if `point` is inside (border included) and sits exactly on
/// the min or max of at least one axis.
pub fn point_on_box2_surface<T, B, P>(bound: &B, point: &P) -> bool
where
    T: Scalar,
    B: Bound2Read<T>,
    P: Tuple2<T>,
{
    point_in_box2(bound, point, true)
        && Axis2::ALL
            .into_iter()
            .any(|axis| touches(axis.of(point), bound.min(axis), bound.max(axis)))
}

/// 3D counterpart of [`point_on_box2_surface`].
pub fn point_on_box3_surface<T, B, P>(bound: &B, point: &P) -> bool
where
    T: Scalar,
    B: Bound3Read<T>,
    P: Tuple3<T>,
{
    point_in_box3(bound, point, true)
        && Axis3::ALL
            .into_iter()
            .any(|axis| touches(axis.of(point), bound.min(axis), bound.max(axis)))
}

fn distance_squared<T, C, P>(circle: &C, point: &P) -> T
where
    T: Scalar,
    C: CircleRead<T>,
    P: Tuple2<T>,
{
    Vec2::from_tuple(point).distance_squared(circle.center())
}

/// Returns `true` if `point` is inside `circle` (`<=` radius with border,
/// `<` without).
pub fn point_in_circle<T, C, P>(circle: &C, point: &P, with_border: bool) -> bool
where
    T: Scalar,
    C: CircleRead<T>,
    P: Tuple2<T>,
{
    let d2 = distance_squared(circle, point);
    let r2 = circle.radius_squared();
    if with_border {
        d2 <= r2
    } else {
        d2 < r2
    }
}

/// Returns `true` if `point` lies exactly on the circle's rim.
pub fn point_on_circle_surface<T, C, P>(circle: &C, point: &P) -> bool
where
    T: Scalar,
    C: CircleRead<T>,
    P: Tuple2<T>,
{
    distance_squared(circle, point) == circle.radius_squared()
}

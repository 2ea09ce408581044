// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_tuple::{Tuple2, Tuple2Mut, Tuple3, Tuple3Mut};

/// Axis of a 2D bound.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis2 {
    /// First axis (`v0`).
    X,
    /// Second axis (`v1`).
    Y,
}

impl Axis2 {
    /// Both axes in component order.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Reads this axis' component from `value`.
    pub fn of<T>(self, value: &impl Tuple2<T>) -> T {
        match self {
            Self::X => value.v0(),
            Self::Y => value.v1(),
        }
    }

    /// Writes this axis' component of `target`.
    pub fn write<T>(self, target: &mut impl Tuple2Mut<T>, value: T) {
        match self {
            Self::X => target.set_v0(value),
            Self::Y => target.set_v1(value),
        }
    }
}

/// Axis of a 3D bound.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis3 {
    /// First axis (`v0`).
    X,
    /// Second axis (`v1`).
    Y,
    /// Third axis (`v2`).
    Z,
}

impl Axis3 {
    /// All three axes in component order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Reads this axis' component from `value`.
    pub fn of<T>(self, value: &impl Tuple3<T>) -> T {
        match self {
            Self::X => value.v0(),
            Self::Y => value.v1(),
            Self::Z => value.v2(),
        }
    }

    /// Writes this axis' component of `target`.
    pub fn write<T>(self, target: &mut impl Tuple3Mut<T>, value: T) {
        match self {
            Self::X => target.set_v0(value),
            Self::Y => target.set_v1(value),
            Self::Z => target.set_v2(value),
        }
    }
}

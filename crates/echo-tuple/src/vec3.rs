// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Sub};

use tracing::debug;

use crate::{Scalar, Tuple2, Tuple2Mut, Tuple3, Tuple3Mut, TupleError};

/// 3D vector used for points, sizes and per-axis factors.
///
/// Components are stored in `(x, y, z)` order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec3<T> {
    data: [T; 3],
}

impl<T: Copy> Vec3<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: T) -> Self {
        Self {
            data: [value, value, value],
        }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 3] {
        self.data
    }

    /// Builds a vector from the first three entries of `values`.
    pub fn try_from_slice(values: &[T]) -> Result<Self, TupleError> {
        if let [x, y, z, ..] = values {
            Ok(Self::new(*x, *y, *z))
        } else {
            debug!(actual = values.len(), "rejected short slice for Vec3");
            Err(TupleError::InvalidArgument {
                expected: 3,
                actual: values.len(),
            })
        }
    }

    /// Copies any 3-component tuple into a `Vec3`.
    pub fn from_tuple(value: &impl Tuple3<T>) -> Self {
        Self::new(value.v0(), value.v1(), value.v2())
    }
}

impl<T: Scalar> Vec3<T> {
    /// Multiplies every component by `scalar`.
    pub fn scale(self, scalar: T) -> Self {
        Self::new(
            self.data[0] * scalar,
            self.data[1] * scalar,
            self.data[2] * scalar,
        )
    }

    /// Dot product with another vector.
    pub fn dot(self, other: Self) -> T {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Self) -> T {
        (self - other).length_squared()
    }
}

impl<T: Copy> Tuple2<T> for Vec3<T> {
    fn v0(&self) -> T {
        self.data[0]
    }

    fn v1(&self) -> T {
        self.data[1]
    }
}

impl<T: Copy> Tuple3<T> for Vec3<T> {
    fn v2(&self) -> T {
        self.data[2]
    }
}

impl<T: Copy> Tuple2Mut<T> for Vec3<T> {
    fn set_v0(&mut self, value: T) {
        self.data[0] = value;
    }

    fn set_v1(&mut self, value: T) {
        self.data[1] = value;
    }
}

impl<T: Copy> Tuple3Mut<T> for Vec3<T> {
    fn set_v2(&mut self, value: T) {
        self.data[2] = value;
    }
}

/// Converts a 3-element array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use echo_tuple::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl<T> From<[T; 3]> for Vec3<T> {
    fn from(value: [T; 3]) -> Self {
        Self { data: value }
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from(value: (T, T, T)) -> Self {
        Self { data: value.into() }
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
        )
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        )
    }
}

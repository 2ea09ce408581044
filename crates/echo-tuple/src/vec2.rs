// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Sub};

use tracing::debug;

use crate::{Scalar, Tuple2, Tuple2Mut, TupleError};

/// 2D vector used for points, sizes and per-axis factors.
///
/// Components are stored in `(x, y)` order and exposed through
/// [`Tuple2::v0`]/[`Tuple2::v1`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec2<T> {
    data: [T; 2],
}

impl<T: Copy> Vec2<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with both components set to `value`.
    pub const fn splat(value: T) -> Self {
        Self {
            data: [value, value],
        }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 2] {
        self.data
    }

    /// Builds a vector from the first two entries of `values`.
    ///
    /// Extra entries are ignored; fewer than two is an
    /// [`TupleError::InvalidArgument`].
    pub fn try_from_slice(values: &[T]) -> Result<Self, TupleError> {
        if let [x, y, ..] = values {
            Ok(Self::new(*x, *y))
        } else {
            debug!(actual = values.len(), "rejected short slice for Vec2");
            Err(TupleError::InvalidArgument {
                expected: 2,
                actual: values.len(),
            })
        }
    }

    /// Copies any 2-component tuple into a `Vec2`.
    pub fn from_tuple(value: &impl Tuple2<T>) -> Self {
        Self::new(value.v0(), value.v1())
    }
}

impl<T: Scalar> Vec2<T> {
    /// Multiplies every component by `scalar`.
    pub fn scale(self, scalar: T) -> Self {
        Self::new(self.data[0] * scalar, self.data[1] * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(self, other: Self) -> T {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Squared Euclidean distance to `other`; avoids a square root.
    pub fn distance_squared(self, other: Self) -> T {
        (self - other).length_squared()
    }
}

impl<T: Copy> Tuple2<T> for Vec2<T> {
    fn v0(&self) -> T {
        self.data[0]
    }

    fn v1(&self) -> T {
        self.data[1]
    }
}

impl<T: Copy> Tuple2Mut<T> for Vec2<T> {
    fn set_v0(&mut self, value: T) {
        self.data[0] = value;
    }

    fn set_v1(&mut self, value: T) {
        self.data[1] = value;
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from(value: [T; 2]) -> Self {
        Self { data: value }
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from(value: (T, T)) -> Self {
        Self { data: value.into() }
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.data[0] + rhs.data[0], self.data[1] + rhs.data[1])
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.data[0] - rhs.data[0], self.data[1] - rhs.data[1])
    }
}


#[cfg(test)]
mod tests {
    use super::Vec2;
    use crate::{Tuple2, TupleError};

    #[test]
    fn try_from_slice_requires_two_components() {
        assert_eq!(
            Vec2::try_from_slice(&[1.0_f32, 2.0, 3.0]),
            Ok(Vec2::new(1.0, 2.0))
        );
        assert_eq!(
            Vec2::<f32>::try_from_slice(&[1.0]),
            Err(TupleError::InvalidArgument {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn distance_squared_skips_the_root() {
        let a = Vec2::new(0.0_f32, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.distance_squared(a), 25.0);
    }

    #[test]
    fn operators_are_component_wise() {
        let a = Vec2::new(1.0_f64, -2.0);
        let b = Vec2::new(0.5, 4.0);
        assert_eq!((a + b).to_array(), [1.5, 2.0]);
        assert_eq!((a - b).to_array(), [0.5, -6.0]);
        assert_eq!(a.scale(-2.0).to_array(), [-2.0, 4.0]);
        assert_eq!(Vec2::splat(3.0_f32).v1(), 3.0);
    }

    #[test]
    fn tuple_and_array_conversions_agree() {
        assert_eq!(Vec2::from((1.0_f32, -1.0)), Vec2::from([1.0, -1.0]));
        assert_eq!(Vec2::from_tuple(&(1.0_f32, -1.0)).to_array(), [1.0, -1.0]);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_tuple::{Scalar, Tuple2, Vec2};

use crate::contract::CircleRead;
use crate::{Bound2, BoundError};

/// Disc defined by a center point and a radius.
///
/// The radius is stored verbatim. A negative radius is not rejected;
/// containment compares squared distances, so it behaves like its magnitude
/// there, and [`Self::bounding_box`] uses its absolute value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CircleBound2<T> {
    center: Vec2<T>,
    radius: T,
}

impl<T: Scalar> CircleBound2<T> {
    /// Creates a circle from its center and radius.
    #[must_use]
    pub fn new(center: &impl Tuple2<T>, radius: T) -> Self {
        Self {
            center: Vec2::from_tuple(center),
            radius,
        }
    }

    /// Builds a circle from `[center_0, center_1, radius]`.
    pub fn try_from_slice(values: &[T]) -> Result<Self, BoundError> {
        if let [cx, cy, radius, ..] = values {
            Ok(Self::new(&[*cx, *cy], *radius))
        } else {
            Err(BoundError::short_slice("CircleBound2", 3, values.len()))
        }
    }

    /// Replaces center and radius.
    pub fn set(&mut self, center_x: T, center_y: T, radius: T) -> &mut Self {
        self.center = Vec2::new(center_x, center_y);
        self.radius = radius;
        self
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2<T> {
        self.center
    }

    /// Radius as stored.
    #[must_use]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Squared radius.
    #[must_use]
    pub fn radius_squared(&self) -> T {
        CircleRead::radius_squared(self)
    }

    /// Scales center and radius by `factor`; the radius takes `abs(factor)`.
    pub fn scale(&mut self, factor: T) -> &mut Self {
        self.center = self.center.scale(factor);
        self.radius = self.radius * factor.abs();
        self
    }

    /// Non-mutating [`Self::scale`].
    #[must_use]
    pub fn scaled(&self, factor: T) -> Self {
        let mut out = *self;
        out.scale(factor);
        out
    }

    /// Tightest axis-aligned rectangle enclosing the disc.
    #[must_use]
    pub fn bounding_box(&self) -> Bound2<T> {
        let r = self.radius.abs();
        Bound2::from_center_half_extents(&self.center, r, r)
    }
}

impl<T: Scalar> CircleRead<T> for CircleBound2<T> {
    fn center(&self) -> Vec2<T> {
        self.center
    }

    fn radius(&self) -> T {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::CircleBound2;
    use crate::{Bound2, BoundError, Tuple2};

    #[test]
    fn set_stores_values_verbatim() {
        let mut c = CircleBound2::new(&[0.0_f32, 0.0], 1.0);
        c.set(2.0, -3.0, -4.0);
        assert_eq!(c.center().to_array(), [2.0, -3.0]);
        assert_eq!(c.radius(), -4.0);
        assert_eq!(c.radius_squared(), 16.0);
    }

    #[test]
    fn scale_uses_factor_magnitude_for_radius() {
        let c = CircleBound2::new(&(1.0_f32, 2.0), 3.0).scaled(-2.0);
        assert_eq!(c.center().to_array(), [-2.0, -4.0]);
        assert_eq!(c.radius(), 6.0);
    }

    #[test]
    fn bounding_box_encloses_disc() {
        let c = CircleBound2::new(&[1.0_f64, -1.0], -2.0);
        assert_eq!(c.bounding_box(), Bound2::from_coords(-1.0, -3.0, 3.0, 1.0));
    }

    #[test]
    fn slice_needs_three_scalars() {
        let c = CircleBound2::try_from_slice(&[1.0_f32, 2.0, 5.0]);
        assert_eq!(c.map(|c| c.center().v1()), Ok(2.0));
        assert_eq!(
            CircleBound2::<f32>::try_from_slice(&[1.0, 2.0]),
            Err(BoundError::InvalidArgument {
                shape: "CircleBound2",
                expected: 3,
                actual: 2
            })
        );
    }
}

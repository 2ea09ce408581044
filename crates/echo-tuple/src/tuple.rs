// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Ordered per-axis accessors shared by every tuple-like value.
//!
//! Geometry code is written against these traits instead of a concrete
//! vector so callers can pass arrays, tuples or [`crate::Vec2`]/[`crate::Vec3`]
//! interchangeably. A 3-component value also satisfies [`Tuple2`]; used in a
//! 2D context it contributes its `v0`/`v1` components only.

/// Read access to the first two ordered components.
pub trait Tuple2<T> {
    /// First component (X).
    fn v0(&self) -> T;
    /// Second component (Y).
    fn v1(&self) -> T;
}

/// Read access to three ordered components.
pub trait Tuple3<T>: Tuple2<T> {
    /// Third component (Z).
    fn v2(&self) -> T;
}

/// In-place setters for a 2-component value.
pub trait Tuple2Mut<T>: Tuple2<T> {
    /// Overwrites the first component.
    fn set_v0(&mut self, value: T);
    /// Overwrites the second component.
    fn set_v1(&mut self, value: T);
}

/// In-place setters for a 3-component value.
pub trait Tuple3Mut<T>: Tuple3<T> + Tuple2Mut<T> {
    /// Overwrites the third component.
    fn set_v2(&mut self, value: T);
}

impl<T: Copy> Tuple2<T> for [T; 2] {
    fn v0(&self) -> T {
        self[0]
    }

    fn v1(&self) -> T {
        self[1]
    }
}

impl<T: Copy> Tuple2Mut<T> for [T; 2] {
    fn set_v0(&mut self, value: T) {
        self[0] = value;
    }

    fn set_v1(&mut self, value: T) {
        self[1] = value;
    }
}

impl<T: Copy> Tuple2<T> for [T; 3] {
    fn v0(&self) -> T {
        self[0]
    }

    fn v1(&self) -> T {
        self[1]
    }
}

impl<T: Copy> Tuple3<T> for [T; 3] {
    fn v2(&self) -> T {
        self[2]
    }
}

impl<T: Copy> Tuple2Mut<T> for [T; 3] {
    fn set_v0(&mut self, value: T) {
        self[0] = value;
    }

    fn set_v1(&mut self, value: T) {
        self[1] = value;
    }
}

impl<T: Copy> Tuple3Mut<T> for [T; 3] {
    fn set_v2(&mut self, value: T) {
        self[2] = value;
    }
}

impl<T: Copy> Tuple2<T> for (T, T) {
    fn v0(&self) -> T {
        self.0
    }

    fn v1(&self) -> T {
        self.1
    }
}

impl<T: Copy> Tuple2Mut<T> for (T, T) {
    fn set_v0(&mut self, value: T) {
        self.0 = value;
    }

    fn set_v1(&mut self, value: T) {
        self.1 = value;
    }
}

impl<T: Copy> Tuple2<T> for (T, T, T) {
    fn v0(&self) -> T {
        self.0
    }

    fn v1(&self) -> T {
        self.1
    }
}

impl<T: Copy> Tuple3<T> for (T, T, T) {
    fn v2(&self) -> T {
        self.2
    }
}

impl<T: Copy> Tuple2Mut<T> for (T, T, T) {
    fn set_v0(&mut self, value: T) {
        self.0 = value;
    }

    fn set_v1(&mut self, value: T) {
        self.1 = value;
    }
}

impl<T: Copy> Tuple3Mut<T> for (T, T, T) {
    fn set_v2(&mut self, value: T) {
        self.2 = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{Tuple2, Tuple2Mut, Tuple3, Tuple3Mut};

    fn sum2<P: Tuple2<f32>>(p: &P) -> f32 {
        p.v0() + p.v1()
    }

    #[test]
    fn arrays_and_tuples_expose_the_same_order() {
        assert_eq!(sum2(&[1.0, 2.0]), 3.0);
        assert_eq!(sum2(&(1.0, 2.0)), 3.0);
        // 3-component values project onto their first two components.
        assert_eq!(sum2(&[1.0, 2.0, 40.0]), 3.0);
        assert_eq!((7.0_f32, 8.0, 9.0).v2(), 9.0);
    }

    #[test]
    fn setters_write_in_place() {
        let mut a = [0.0_f64; 3];
        a.set_v0(1.0);
        a.set_v1(2.0);
        a.set_v2(3.0);
        assert_eq!(a, [1.0, 2.0, 3.0]);

        let mut t = (0.0_f32, 0.0_f32);
        t.set_v1(-5.0);
        assert_eq!(t, (0.0, -5.0));
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Tuple value types for Echo geometry.

This crate provides:
- A minimal [`Scalar`] abstraction implemented for `f32` and `f64`.
- Ordered per-axis accessor traits ([`Tuple2`], [`Tuple3`]) and their in-place
  setter counterparts ([`Tuple2Mut`], [`Tuple3Mut`]).
- Plain value vectors ([`Vec2`], [`Vec3`]) implementing those traits.

Arrays (`[T; 2]`, `[T; 3]`) and tuples (`(T, T)`, `(T, T, T)`) implement the
accessor traits too, so geometry code can accept whichever form the caller
already holds.
"]

mod error;
mod scalar;
mod tuple;
mod vec2;
mod vec3;

pub use error::TupleError;
pub use scalar::Scalar;
pub use tuple::{Tuple2, Tuple2Mut, Tuple3, Tuple3Mut};
pub use vec2::Vec2;
pub use vec3::Vec3;

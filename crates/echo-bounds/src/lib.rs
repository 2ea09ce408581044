// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Bounding volumes for Echo.

This crate provides:
- Axis-aligned bounding boxes in two and three dimensions ([`Bound2`], [`Bound3`]).
- A 2D circular bounding volume ([`CircleBound2`]).
- Read and sink contracts ([`contract`]) so results can be written into any
  caller-owned bound type.
- Stateless point containment and surface queries ([`resolver`]).

Design notes:
- Every mutation renormalizes: `min <= max` holds per axis no matter what
  order corners arrive in or what sign a scale factor has.
- No validation beyond that: NaN, infinities and negative radii propagate
  under ordinary floating-point semantics.
- Surface queries use exact equality; quantize beforehand for fuzzy results.
"]

/// Read/sink capability traits and generic writers.
pub mod contract;
mod error;
/// Point containment and surface queries.
pub mod resolver;
/// Foundational bound types.
pub mod types;

#[cfg(feature = "serde")]
mod encoding;

pub use contract::{Bound2Read, Bound2Sink, Bound3Read, Bound3Sink, CircleRead};
pub use error::BoundError;
pub use types::axis::{Axis2, Axis3};
pub use types::bound2::Bound2;
pub use types::bound3::Bound3;
pub use types::circle::CircleBound2;

pub use echo_tuple::{Scalar, Tuple2, Tuple2Mut, Tuple3, Tuple3Mut, Vec2, Vec3};

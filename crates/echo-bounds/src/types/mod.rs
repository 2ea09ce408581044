// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core bound types (2D/3D AABBs, 2D circle) and the typed axes indexing them.
//!
//! Normalization notes:
//! - Boxes store `min`/`max` per axis after a component-wise min/max
//!   reduction; constructors, `set`, `scale` and `merge` all go through the
//!   same per-axis sink so the ordering invariant has a single owner.
//! - Circles store center and radius verbatim.

#[doc = "Typed axis selectors."]
pub mod axis;
#[doc = "Axis-aligned rectangles."]
pub mod bound2;
#[doc = "Axis-aligned boxes in three dimensions."]
pub mod bound3;
#[doc = "Discs defined by center and radius."]
pub mod circle;

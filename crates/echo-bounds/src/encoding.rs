// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Flat-tuple serde encoding.
//!
//! - `Bound2`: `(min_0, min_1, max_0, max_1)`
//! - `Bound3`: `(min_0, min_1, min_2, max_0, max_1, max_2)`
//! - `CircleBound2`: `(center_0, center_1, radius)`
//!
//! Bounds are written already normalized. Reading runs them through the
//! normal constructors anyway, so corrupted or hand-edited input comes back
//! with `min <= max`; a warning is emitted when that changed anything.

use echo_tuple::Scalar;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::{Axis2, Axis3, Bound2, Bound3, CircleBound2};

impl<T: Scalar + Serialize> Serialize for Bound2<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (
            self.min(Axis2::X),
            self.min(Axis2::Y),
            self.max(Axis2::X),
            self.max(Axis2::Y),
        )
            .serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Bound2<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (min_0, min_1, max_0, max_1) = <(T, T, T, T)>::deserialize(deserializer)?;
        if min_0 > max_0 || min_1 > max_1 {
            warn!(shape = "Bound2", "renormalized out-of-order corners on decode");
        }
        Ok(Self::from_coords(min_0, min_1, max_0, max_1))
    }
}

impl<T: Scalar + Serialize> Serialize for Bound3<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (
            self.min(Axis3::X),
            self.min(Axis3::Y),
            self.min(Axis3::Z),
            self.max(Axis3::X),
            self.max(Axis3::Y),
            self.max(Axis3::Z),
        )
            .serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Bound3<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (min_0, min_1, min_2, max_0, max_1, max_2) =
            <(T, T, T, T, T, T)>::deserialize(deserializer)?;
        if min_0 > max_0 || min_1 > max_1 || min_2 > max_2 {
            warn!(shape = "Bound3", "renormalized out-of-order corners on decode");
        }
        Ok(Self::from_coords(min_0, min_1, min_2, max_0, max_1, max_2))
    }
}

impl<T: Scalar + Serialize> Serialize for CircleBound2<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let center = self.center().to_array();
        (center[0], center[1], self.radius()).serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for CircleBound2<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (cx, cy, radius) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Self::new(&[cx, cy], radius))
    }
}

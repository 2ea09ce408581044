// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Integration tests for the containment resolver against owned and foreign
//! bound types.

use echo_bounds::resolver::{
    point_in_box2, point_in_box3, point_in_circle, point_on_box2_surface, point_on_box3_surface,
    point_on_circle_surface,
};
use echo_bounds::{Axis2, Bound2, Bound2Read, Bound3, CircleBound2, CircleRead, Vec2, Vec3};

#[test]
fn border_polarity_on_left_edge() {
    // Border included with `true`, excluded with `false`, for every dimension.
    let b2 = Bound2::new(&[0.0_f32, 0.0], &[10.0, 10.0]);
    assert!(point_in_box2(&b2, &[0.0, 5.0], true));
    assert!(!point_in_box2(&b2, &[0.0, 5.0], false));

    let b3 = Bound3::new(&[0.0_f32, 0.0, 0.0], &[10.0, 10.0, 10.0]);
    assert!(point_in_box3(&b3, &[0.0, 5.0, 5.0], true));
    assert!(!point_in_box3(&b3, &[0.0, 5.0, 5.0], false));
}

#[test]
fn border_polarity_holds_on_every_axis_and_side() {
    let b = Bound2::new(&[0.0_f64, 0.0], &[10.0, 10.0]);
    for p in [[10.0, 5.0], [5.0, 0.0], [5.0, 10.0], [0.0, 0.0], [10.0, 10.0]] {
        assert!(point_in_box2(&b, &p, true), "{p:?} should be inside with border");
        assert!(!point_in_box2(&b, &p, false), "{p:?} should be outside without border");
        assert!(point_on_box2_surface(&b, &p), "{p:?} should be on the surface");
    }
}

#[test]
fn circle_distance_five_is_the_rim() {
    let c = CircleBound2::new(&[0.0_f32, 0.0], 5.0);
    assert!(point_in_circle(&c, &[3.0, 4.0], true));
    assert!(!point_in_circle(&c, &[3.0, 4.0], false));
    assert!(point_in_circle(&c, &[3.0, 3.0], true));
    assert!(point_in_circle(&c, &[3.0, 3.0], false));
    assert!(!point_in_circle(&c, &[4.0, 4.0], true));
    assert!(point_on_circle_surface(&c, &[-4.0, 3.0]));
}

#[test]
fn negative_radius_contains_like_its_magnitude() {
    let c = CircleBound2::new(&Vec2::new(1.0_f32, 1.0), -2.0);
    assert!(point_in_circle(&c, &[1.0, 3.0], true));
    assert!(!point_in_circle(&c, &[1.0, 3.0], false));
    assert!(point_on_circle_surface(&c, &(3.0, 1.0)));
}

#[test]
fn surface_needs_exact_equality() {
    let b = Bound3::from_coords(0.0_f32, 0.0, 0.0, 1.0, 1.0, 1.0);
    assert!(point_on_box3_surface(&b, &Vec3::new(1.0, 0.25, 0.75)));
    assert!(!point_on_box3_surface(&b, &Vec3::new(1.0 - f32::EPSILON, 0.25, 0.75)));
    assert!(!point_on_box3_surface(&b, &Vec3::new(1.0 + f32::EPSILON, 0.25, 0.75)));
}

#[test]
fn nan_point_is_never_inside_a_box() {
    let b = Bound2::new(&[0.0_f32, 0.0], &[1.0, 1.0]);
    assert!(!point_in_box2(&b, &[f32::NAN, 0.5], true));
    assert!(!point_in_box2(&b, &[0.5, f32::NAN], false));
}

/// Viewport rectangle owned by some other subsystem, stored as origin + extent.
struct Viewport {
    origin: [f32; 2],
    extent: [f32; 2],
}

impl Bound2Read<f32> for Viewport {
    fn min(&self, axis: Axis2) -> f32 {
        axis.of(&self.origin)
    }

    fn max(&self, axis: Axis2) -> f32 {
        axis.of(&self.origin) + axis.of(&self.extent)
    }
}

/// Pickable handle stored as packed `[x, y, r]`.
struct Handle([f32; 3]);

impl CircleRead<f32> for Handle {
    fn center(&self) -> Vec2<f32> {
        Vec2::new(self.0[0], self.0[1])
    }

    fn radius(&self) -> f32 {
        self.0[2]
    }
}

#[test]
fn resolver_accepts_foreign_read_contracts() {
    let vp = Viewport {
        origin: [100.0, 50.0],
        extent: [640.0, 480.0],
    };
    assert!(point_in_box2(&vp, &(100.0, 300.0), true));
    assert!(!point_in_box2(&vp, &(100.0, 300.0), false));
    assert!(point_on_box2_surface(&vp, &(740.0, 530.0)));
    assert_eq!(vp.center(Axis2::X), 420.0);

    let handle = Handle([10.0, 10.0, 2.0]);
    assert!(point_in_circle(&handle, &[11.0, 11.0], false));
    assert!(point_on_circle_surface(&handle, &[10.0, 12.0]));
}

#[test]
fn merged_scene_bound_contains_circle_boxes() {
    let circles = [
        CircleBound2::new(&[0.0_f32, 0.0], 1.0),
        CircleBound2::new(&[5.0, -2.0], 0.5),
        CircleBound2::new(&[-3.0, 4.0], 2.0),
    ];
    let scene = circles
        .iter()
        .map(CircleBound2::bounding_box)
        .reduce(|acc, b| acc.merged_bound(&b));
    assert_eq!(scene, Some(Bound2::from_coords(-5.0, -2.5, 5.5, 6.0)));
    if let Some(scene) = scene {
        for c in &circles {
            assert!(point_in_box2(&scene, &c.center(), true));
        }
    }
}

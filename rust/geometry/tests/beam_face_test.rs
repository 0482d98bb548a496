// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end face matching against a realistic beam body: a riser running
//! up into the soffit of a rectangular beam.

use nalgebra::{Point3, Vector3};
use sleevegen_geometry::{FaceMatcher, MatchMethod, Solid};
use sleevegen_model::BoundingBox;

/// A 300 mm wide beam spanning x = 0..20 ft at z = 10..11 ft.
fn beam_solid() -> Solid {
    let bounds = BoundingBox::new(
        Point3::new(0.0, 5.0, 10.0),
        Point3::new(20.0, 5.984, 11.0),
    );
    Solid::box_from_bounds(&bounds).unwrap()
}

/// Equipment bounds for a riser ending just under the beam soffit.
fn riser_bounds(top_gap: f64) -> BoundingBox {
    BoundingBox::new(
        Point3::new(9.8, 5.3, 2.0),
        Point3::new(10.2, 5.7, 10.0 - top_gap),
    )
}

#[test]
fn riser_under_beam_matches_the_soffit() {
    let solids = vec![beam_solid()];
    let matcher = FaceMatcher::new();

    let bounds = riser_bounds(0.1);
    let probe = bounds.far_end_point();
    let m = matcher
        .find_best_face(&solids, &probe, &bounds)
        .expect("soffit within tolerance");

    // Face 0 of a box solid is the bottom face
    assert_eq!((m.solid, m.face), (0, 0));
    assert_eq!(m.method, MatchMethod::Projection);
    assert!((m.distance - 0.1).abs() < 1e-9);

    let soffit = &solids[m.solid].faces()[m.face];
    let normal = soffit.normal_at(0.5, 0.5);
    assert_eq!(normal, -Vector3::z());
}

#[test]
fn riser_too_far_below_finds_nothing() {
    let solids = vec![beam_solid()];
    let matcher = FaceMatcher::new();

    let bounds = riser_bounds(1.5);
    let probe = bounds.far_end_point();
    assert!(matcher.find_best_face(&solids, &probe, &bounds).is_none());
}

#[test]
fn wide_duct_reaches_the_soffit_through_scaling() {
    let solids = vec![beam_solid()];
    let matcher = FaceMatcher::new();

    // 2 ft wide duct, same 0.5 ft gap the narrow riser cannot bridge
    let narrow = riser_bounds(0.5);
    let probe = narrow.far_end_point();
    assert!(matcher.find_best_face(&solids, &probe, &narrow).is_none());

    let wide = BoundingBox::new(
        Point3::new(9.0, 5.3, 2.0),
        Point3::new(11.0, 5.7, 9.5),
    );
    let m = matcher
        .find_best_face(&solids, &wide.far_end_point(), &wide)
        .expect("scaled tolerance admits the soffit");
    assert_eq!(m.face, 0);
}

#[test]
fn probe_beside_the_beam_uses_tangent_sampling() {
    let solids = vec![beam_solid()];
    let matcher = FaceMatcher::new();

    // Just outside the beam's side face in Y, level with its mid-height:
    // every direct projection foot leaves its face, but the side face's
    // tangent plane passes within tolerance.
    let probe = Point3::new(21.0, 5.984, 10.5);
    let equip = BoundingBox::new(Point3::new(20.9, 5.9, 2.0), Point3::new(21.1, 6.1, 10.5));
    let m = matcher.find_best_face(&solids, &probe, &equip);
    let m = m.expect("tangent sampling finds the side face");
    assert_eq!(m.method, MatchMethod::TangentPlane);
}

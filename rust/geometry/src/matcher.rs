// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tolerance-based face matching.
//!
//! Given the far-end probe point of a piece of equipment and the solids of a
//! candidate host, find the single face the equipment most plausibly
//! penetrates. Projection distance ranks candidates; when no face projects
//! within tolerance, a fixed grid of tangent-plane samples on the planar
//! faces serves as a fallback for faces whose projection is undefined at the
//! probe point.
//!
//! The search never fails loudly: `None` means "no intersection found here"
//! and callers move on to the next candidate host.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use sleevegen_model::BoundingBox;

use crate::solid::Solid;

/// Nominal diameter above which the matching tolerance scales linearly
/// (120 mm expressed in feet).
pub const DIAMETER_SCALE_THRESHOLD: f64 = 0.3937;

/// Default base matching tolerance in feet.
pub const DEFAULT_BASE_TOLERANCE: f64 = 0.2;

/// Normalized parametric steps for the tangent-plane fallback grid.
const SAMPLE_STEPS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// How a face match was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMethod {
    /// Direct point-to-face projection within tolerance
    Projection,
    /// Perpendicular distance to a tangent plane at a parametric sample
    TangentPlane,
}

/// The selected face, addressed by position in the input slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceMatch {
    /// Index of the owning solid in the input slice
    pub solid: usize,
    /// Index of the face within that solid
    pub face: usize,
    /// Winning distance in feet
    pub distance: f64,
    /// How the distance was measured
    pub method: MatchMethod,
}

/// Point-to-face matcher with diameter-scaled tolerance
#[derive(Debug, Clone)]
pub struct FaceMatcher {
    base_tolerance: f64,
}

impl FaceMatcher {
    /// Create a matcher with the default base tolerance.
    pub fn new() -> Self {
        Self {
            base_tolerance: DEFAULT_BASE_TOLERANCE,
        }
    }

    /// Create a matcher with a custom base tolerance (feet).
    pub fn with_tolerance(base_tolerance: f64) -> Self {
        Self { base_tolerance }
    }

    /// The configured base tolerance.
    pub fn base_tolerance(&self) -> f64 {
        self.base_tolerance
    }

    /// Effective tolerance for a piece of equipment.
    ///
    /// The nominal diameter is the larger of the bounding box's X and Y
    /// extents. Above [`DIAMETER_SCALE_THRESHOLD`] the tolerance grows
    /// linearly with the diameter; below it the base tolerance applies
    /// unchanged. Larger equipment is installed with proportionally looser
    /// fit, and the matching tolerance follows.
    pub fn scaled_tolerance(&self, equip_bounds: &BoundingBox) -> f64 {
        let diameter = equip_bounds.extent_x().max(equip_bounds.extent_y());
        if diameter > DIAMETER_SCALE_THRESHOLD {
            self.base_tolerance * (diameter / DIAMETER_SCALE_THRESHOLD)
        } else {
            self.base_tolerance
        }
    }

    /// Find the best face for an equipment probe point, with the tolerance
    /// scaled from the equipment bounds.
    pub fn find_best_face(
        &self,
        solids: &[Solid],
        target: &Point3<f64>,
        equip_bounds: &BoundingBox,
    ) -> Option<FaceMatch> {
        self.find_nearest(solids, target, self.scaled_tolerance(equip_bounds))
    }

    /// Find the nearest qualifying face at an explicit tolerance.
    ///
    /// The projection pass runs first over every face of every solid in
    /// input order; only when it qualifies nothing does the tangent-plane
    /// sampling pass run. Equal distances keep the first face encountered.
    pub fn find_nearest(
        &self,
        solids: &[Solid],
        target: &Point3<f64>,
        tolerance: f64,
    ) -> Option<FaceMatch> {
        self.projection_pass(solids, target, tolerance)
            .or_else(|| self.sample_pass(solids, target, tolerance))
    }

    /// Primary pass: direct projection, minimum distance within tolerance.
    /// Faces that refuse the projection are skipped.
    fn projection_pass(
        &self,
        solids: &[Solid],
        target: &Point3<f64>,
        tolerance: f64,
    ) -> Option<FaceMatch> {
        let mut best: Option<FaceMatch> = None;
        for (solid_idx, solid) in solids.iter().enumerate() {
            for (face_idx, face) in solid.faces().iter().enumerate() {
                let Some(projection) = face.project(target) else {
                    continue;
                };
                let qualifies = projection.distance <= tolerance
                    && best.is_none_or(|b| projection.distance < b.distance);
                if qualifies {
                    best = Some(FaceMatch {
                        solid: solid_idx,
                        face: face_idx,
                        distance: projection.distance,
                        method: MatchMethod::Projection,
                    });
                }
            }
        }
        best
    }

    /// Fallback pass: perpendicular distance to the tangent plane at each of
    /// a 4x4 grid of parametric samples, planar faces only.
    fn sample_pass(
        &self,
        solids: &[Solid],
        target: &Point3<f64>,
        tolerance: f64,
    ) -> Option<FaceMatch> {
        let mut best: Option<FaceMatch> = None;
        for (solid_idx, solid) in solids.iter().enumerate() {
            for (face_idx, face) in solid.faces().iter().enumerate() {
                if !face.is_planar() {
                    continue;
                }
                for &u in &SAMPLE_STEPS {
                    for &v in &SAMPLE_STEPS {
                        let sample = face.evaluate(u, v);
                        let normal = face.normal_at(u, v);
                        let distance = (target - sample).dot(&normal).abs();
                        let qualifies = distance < tolerance
                            && best.is_none_or(|b| distance < b.distance);
                        if qualifies {
                            best = Some(FaceMatch {
                                solid: solid_idx,
                                face: face_idx,
                                distance,
                                method: MatchMethod::TangentPlane,
                            });
                        }
                    }
                }
            }
        }
        best
    }
}

impl Default for FaceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::{CylindricalFace, Face, PlanarFace};
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    fn horizontal_face(z: f64, size: f64) -> Face {
        Face::Planar(
            PlanarFace::new(
                Point3::new(0.0, 0.0, z),
                Vector3::x(),
                Vector3::y(),
                size,
                size,
            )
            .unwrap(),
        )
    }

    fn small_bounds() -> BoundingBox {
        // Diameter below the scaling threshold: tolerance stays at base
        BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.3, 0.3, 1.0))
    }

    #[test]
    fn test_single_face_within_tolerance() {
        let solids = vec![Solid::from_faces(vec![horizontal_face(0.0, 1.0)])];
        let matcher = FaceMatcher::with_tolerance(0.2);

        let probe = Point3::new(0.5, 0.5, 0.15);
        let m = matcher.find_nearest(&solids, &probe, 0.2).unwrap();
        assert_eq!((m.solid, m.face), (0, 0));
        assert_eq!(m.method, MatchMethod::Projection);
        assert_relative_eq!(m.distance, 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_everything_beyond_tolerance_is_none() {
        let solids = vec![Solid::from_faces(vec![horizontal_face(0.0, 1.0)])];
        let matcher = FaceMatcher::with_tolerance(0.2);

        // Perpendicular distance 5.0 also defeats every tangent-plane sample
        let probe = Point3::new(0.5, 0.5, 5.0);
        assert!(matcher.find_nearest(&solids, &probe, 0.2).is_none());
    }

    #[test]
    fn test_closer_face_wins() {
        let solids = vec![
            Solid::from_faces(vec![horizontal_face(0.0, 1.0)]),
            Solid::from_faces(vec![horizontal_face(2.0, 1.0)]),
        ];
        let matcher = FaceMatcher::new();

        // Probe above both: distances 3.0 and 1.0, both within tolerance 5.0
        let probe = Point3::new(0.5, 0.5, 3.0);
        let m = matcher.find_nearest(&solids, &probe, 5.0).unwrap();
        assert_eq!(m.solid, 1);
        assert_relative_eq!(m.distance, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equal_distances_keep_first_face() {
        // Two identical faces at the same height in separate solids
        let solids = vec![
            Solid::from_faces(vec![horizontal_face(0.0, 1.0)]),
            Solid::from_faces(vec![horizontal_face(0.0, 1.0)]),
        ];
        let matcher = FaceMatcher::new();

        let probe = Point3::new(0.5, 0.5, 0.1);
        let m = matcher.find_nearest(&solids, &probe, 1.0).unwrap();
        assert_eq!((m.solid, m.face), (0, 0));
    }

    #[test]
    fn test_tolerance_scaling_accepts_rejected_match() {
        let solids = vec![Solid::from_faces(vec![horizontal_face(0.0, 10.0)])];
        let matcher = FaceMatcher::with_tolerance(0.2);

        // Probe 0.5 ft above the face: outside the base tolerance
        let probe = Point3::new(5.0, 5.0, 0.5);
        assert!(matcher
            .find_best_face(&solids, &probe, &small_bounds())
            .is_none());

        // A 1.2 ft diameter scales the tolerance to ~0.61 ft
        let wide = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.2, 0.3, 1.0));
        let m = matcher.find_best_face(&solids, &probe, &wide).unwrap();
        assert_relative_eq!(m.distance, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_scaled_tolerance_is_linear_above_threshold() {
        let matcher = FaceMatcher::with_tolerance(0.2);

        assert_relative_eq!(matcher.scaled_tolerance(&small_bounds()), 0.2, epsilon = 1e-12);

        let wide = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.7874, 0.3, 1.0));
        // Diameter is twice the threshold: tolerance doubles
        assert_relative_eq!(matcher.scaled_tolerance(&wide), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_fallback_catches_probe_outside_face_bounds() {
        let solids = vec![Solid::from_faces(vec![horizontal_face(0.0, 1.0)])];
        let matcher = FaceMatcher::new();

        // Just past the face edge in X, almost coplanar: the projection foot
        // leaves the rectangle, but the tangent-plane distance is tiny.
        let probe = Point3::new(1.05, 0.5, 0.01);
        let m = matcher.find_nearest(&solids, &probe, 0.2).unwrap();
        assert_eq!(m.method, MatchMethod::TangentPlane);
        assert_relative_eq!(m.distance, 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_fallback_not_consulted_when_projection_qualifies() {
        // The probe projects onto the face within tolerance; the winning
        // match must come from the projection pass even though the closest
        // tangent-plane sample would report the same perpendicular distance.
        let solids = vec![Solid::from_faces(vec![horizontal_face(0.0, 1.0)])];
        let matcher = FaceMatcher::new();

        let probe = Point3::new(0.2, 0.2, 0.05);
        let m = matcher.find_nearest(&solids, &probe, 0.2).unwrap();
        assert_eq!(m.method, MatchMethod::Projection);
    }

    #[test]
    fn test_fallback_skips_curved_faces() {
        // Only a cylindrical face, probe beyond its height range: projection
        // fails and the sampling pass has no planar face to fall back on.
        let cyl = Face::Cylindrical(
            CylindricalFace::new(Point3::origin(), Vector3::z(), Vector3::x(), 0.5, 1.0).unwrap(),
        );
        let solids = vec![Solid::from_faces(vec![cyl])];
        let matcher = FaceMatcher::new();

        let probe = Point3::new(0.55, 0.0, 2.0);
        assert!(matcher.find_nearest(&solids, &probe, 1.0).is_none());
    }

    #[test]
    fn test_undefined_projection_skipped_without_aborting() {
        // First face refuses the projection (probe on the cylinder axis);
        // the search must still consider the remaining faces.
        let cyl = Face::Cylindrical(
            CylindricalFace::new(
                Point3::new(0.5, 0.5, 0.0),
                Vector3::z(),
                Vector3::x(),
                0.1,
                1.0,
            )
            .unwrap(),
        );
        let solids = vec![Solid::from_faces(vec![cyl, horizontal_face(0.9, 1.0)])];
        let matcher = FaceMatcher::new();

        let probe = Point3::new(0.5, 0.5, 1.0);
        let m = matcher.find_nearest(&solids, &probe, 0.2).unwrap();
        assert_eq!((m.solid, m.face), (0, 1));
        assert_eq!(m.method, MatchMethod::Projection);
    }

    #[test]
    fn test_empty_input_is_none() {
        let matcher = FaceMatcher::new();
        assert!(matcher
            .find_nearest(&[], &Point3::origin(), 1.0)
            .is_none());
        assert!(matcher
            .find_nearest(&[Solid::from_faces(vec![])], &Point3::origin(), 1.0)
            .is_none());
    }
}

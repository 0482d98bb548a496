// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sleeve sizing and orientation.
//!
//! A face-attached sleeve runs the full width of its beam and oversizes the
//! equipment's nominal diameter by a radial clearance. Orientation is
//! derived from the host face normal.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use sleevegen_geometry::face::DIRECTION_EPSILON;
use sleevegen_model::units::mm_to_feet;

/// Physical dimensions of one sleeve, in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleeveSize {
    /// Sleeve length through the host
    pub length: f64,
    /// Outer diameter of the cutout
    pub outer_diameter: f64,
}

impl SleeveSize {
    /// Size a sleeve for a beam penetration.
    ///
    /// Length equals the beam section width; the outer diameter is the
    /// equipment's nominal diameter plus `clearance_mm`. All inputs are in
    /// millimetres, the result is in feet.
    pub fn for_beam(beam_width_mm: f64, sleeve_diameter_mm: f64, clearance_mm: f64) -> Self {
        Self {
            length: mm_to_feet(beam_width_mm),
            outer_diameter: mm_to_feet(sleeve_diameter_mm + clearance_mm),
        }
    }
}

/// In-plane reference direction for a face-hosted sleeve.
///
/// Crosses the face normal with the global X axis; when the normal is
/// parallel to X the cross product degenerates and the Y axis is used
/// instead. The result is normalized.
pub fn reference_direction(normal: &Vector3<f64>) -> Vector3<f64> {
    let mut reference = normal.cross(&Vector3::x());
    if reference.norm() < DIRECTION_EPSILON {
        reference = normal.cross(&Vector3::y());
    }
    reference.normalize()
}

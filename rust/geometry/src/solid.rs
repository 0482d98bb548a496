// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solids as ordered face collections.
//!
//! A solid exposes its faces in a fixed order; matching iterates that order
//! and keeps the first of equally distant faces, so the order is stable and
//! documented.

use nalgebra::Vector3;

use sleevegen_model::BoundingBox;

use crate::error::{Error, Result};
use crate::face::{Face, PlanarFace};

/// An opaque geometric body exposing a fixed-order face list
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    faces: Vec<Face>,
}

impl Solid {
    /// Create a solid from an explicit face list.
    pub fn from_faces(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// The solid's faces, in construction order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Build the six outward-facing planar faces of an axis-aligned box.
    ///
    /// Face order is bottom, top, south (-Y), north (+Y), west (-X),
    /// east (+X).
    ///
    /// # Errors
    ///
    /// Returns `DegenerateSolid` when any extent of `bounds` is non-positive.
    pub fn box_from_bounds(bounds: &BoundingBox) -> Result<Self> {
        if bounds.is_degenerate() {
            return Err(Error::DegenerateSolid(
                "bounding box has a non-positive extent".into(),
            ));
        }
        let min = bounds.min;
        let max = bounds.max;
        let (ex, ey, ez) = (bounds.extent_x(), bounds.extent_y(), bounds.extent_z());

        let bottom = PlanarFace::new(min, Vector3::y(), Vector3::x(), ey, ex)?;
        let top = PlanarFace::new(
            nalgebra::Point3::new(min.x, min.y, max.z),
            Vector3::x(),
            Vector3::y(),
            ex,
            ey,
        )?;
        let south = PlanarFace::new(min, Vector3::x(), Vector3::z(), ex, ez)?;
        let north = PlanarFace::new(
            nalgebra::Point3::new(min.x, max.y, min.z),
            Vector3::z(),
            Vector3::x(),
            ez,
            ex,
        )?;
        let west = PlanarFace::new(min, Vector3::z(), Vector3::y(), ez, ey)?;
        let east = PlanarFace::new(
            nalgebra::Point3::new(max.x, min.y, min.z),
            Vector3::y(),
            Vector3::z(),
            ey,
            ez,
        )?;

        Ok(Self::from_faces(vec![
            Face::Planar(bottom),
            Face::Planar(top),
            Face::Planar(south),
            Face::Planar(north),
            Face::Planar(west),
            Face::Planar(east),
        ]))
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes for element extents.
//!
//! Boxes drive two things: the coarse overlap scan that pairs equipment with
//! candidate hosts, and the far-end probe point that face matching projects
//! against.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in modeling units (feet)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Point3<f64>,
    /// Maximum corner
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Create a box from its two corners.
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Closed-interval overlap test against another box.
    ///
    /// Touching boxes count as intersecting; overlap must hold on all three
    /// axes.
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Side length along X.
    #[inline]
    pub fn extent_x(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Side length along Y.
    #[inline]
    pub fn extent_y(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Side length along Z.
    #[inline]
    pub fn extent_z(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Center of the box.
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Grow the box to include a point.
    pub fn expand_to(&mut self, p: &Point3<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// The corner farthest along the vertical axis.
    ///
    /// This is the probe point used when matching equipment against the face
    /// of a host: `max` when the box has positive vertical extent, otherwise
    /// `min`.
    #[inline]
    pub fn far_end_point(&self) -> Point3<f64> {
        if self.max.z > self.min.z {
            self.max
        } else {
            self.min
        }
    }

    /// True when any axis has non-positive extent.
    pub fn is_degenerate(&self) -> bool {
        self.extent_x() <= 0.0 || self.extent_y() <= 0.0 || self.extent_z() <= 0.0
    }
}

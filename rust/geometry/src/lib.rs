// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Sleevegen Geometry
//!
//! Analytic face and solid geometry for sleeve-placement planning, using
//! nalgebra for the vector math. The central entry point is the
//! [`FaceMatcher`], which pairs an equipment probe point with the host face
//! it most plausibly penetrates.

pub mod error;
pub mod face;
pub mod matcher;
pub mod solid;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use error::{Error, Result};
pub use face::{CylindricalFace, Face, PlanarFace, Projection};
pub use matcher::{
    FaceMatch, FaceMatcher, MatchMethod, DEFAULT_BASE_TOLERANCE, DIAMETER_SCALE_THRESHOLD,
};
pub use solid::Solid;

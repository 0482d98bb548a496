// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement configuration.

use serde::{Deserialize, Serialize};

use sleevegen_geometry::matcher::DEFAULT_BASE_TOLERANCE;

/// Tunables for one planning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Base face-matching tolerance in feet, before diameter scaling.
    pub base_tolerance: f64,
    /// Radial clearance added to the sleeve outer diameter, in millimetres.
    pub clearance_mm: f64,
    /// Name of the sleeve cutout family to place.
    pub sleeve_family: String,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            base_tolerance: DEFAULT_BASE_TOLERANCE,
            clearance_mm: 2.0,
            sleeve_family: "ADR-10D SLEEVE CUTOUT-".to_string(),
        }
    }
}

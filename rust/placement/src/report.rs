// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planning results.
//!
//! The report is the complete record of a run: every planned sleeve, every
//! equipment element that was skipped and why, and every candidate host that
//! was examined and rejected and why. Nothing is dropped silently; callers
//! can tell "no geometry" from "no face within tolerance" from "parameter
//! missing".

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use sleevegen_geometry::MatchMethod;
use sleevegen_model::ElementKey;

use crate::intersect::HostKind;
use crate::sleeve::SleeveSize;

/// How a planned sleeve is attached to its host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Attachment {
    /// Hosted on a matched face of the host's geometry
    Face {
        /// Index of the matched solid in the host's geometry
        solid: usize,
        /// Index of the matched face within that solid
        face: usize,
        /// Matching distance in feet
        distance: f64,
        /// How the distance was measured
        method: MatchMethod,
        /// In-plane reference direction derived from the face normal
        orientation: Vector3<f64>,
        /// Sleeve dimensions
        size: SleeveSize,
    },
    /// Dropped onto the host at the probe point, with no face attachment
    Direct,
}

/// One sleeve the planner intends to place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSleeve {
    /// The equipment the sleeve serves
    pub equipment: ElementKey,
    /// The host receiving the cutout
    pub host: ElementKey,
    /// Wall or beam
    pub host_kind: HostKind,
    /// Insertion point
    pub position: Point3<f64>,
    /// Face attachment or direct fallback
    pub attachment: Attachment,
}

/// Why an equipment element produced no sleeve at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The element has no bounding box to probe from
    MissingBounds,
    /// The element has no insertion point
    MissingLocation,
    /// No wall or beam overlaps the element's bounds
    NoIntersections,
}

/// An equipment element the planner could not serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedElement {
    /// The skipped equipment element
    pub element: ElementKey,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Why one candidate host was examined but not used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissReason {
    /// The beam type has no usable section-width parameter
    MissingWidth,
    /// No solids registered for the host
    NoGeometry,
    /// No face qualified within the scaled tolerance
    NoFaceMatch,
}

/// One examined-and-rejected (equipment, host) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMiss {
    /// The equipment being planned
    pub equipment: ElementKey,
    /// The rejected host
    pub host: ElementKey,
    /// Why the host was rejected
    pub reason: MissReason,
}

/// Complete record of one planning run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Sleeves to place
    pub planned: Vec<PlannedSleeve>,
    /// Equipment elements that produced nothing
    pub skipped: Vec<SkippedElement>,
    /// Candidate hosts examined and rejected
    pub misses: Vec<CandidateMiss>,
}

impl PlacementReport {
    /// Number of sleeves the run planned.
    pub fn placed_count(&self) -> usize {
        self.planned.len()
    }

    /// Number of equipment elements skipped outright.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Planned sleeves with a face attachment.
    pub fn face_hosted(&self) -> impl Iterator<Item = &PlannedSleeve> {
        self.planned
            .iter()
            .filter(|s| matches!(s.attachment, Attachment::Face { .. }))
    }

    /// Planned sleeves placed by the direct fallback.
    pub fn direct(&self) -> impl Iterator<Item = &PlannedSleeve> {
        self.planned
            .iter()
            .filter(|s| matches!(s.attachment, Attachment::Direct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_filters() {
        let mut doc = sleevegen_model::Document::new();
        let equip = doc.add_element(sleevegen_model::Element::new(
            "P-1",
            sleevegen_model::Category::MechanicalEquipment,
        ));
        let host = doc.add_element(sleevegen_model::Element::new(
            "B-1",
            sleevegen_model::Category::StructuralFraming,
        ));

        let report = PlacementReport {
            planned: vec![PlannedSleeve {
                equipment: equip,
                host,
                host_kind: HostKind::Beam,
                position: Point3::origin(),
                attachment: Attachment::Direct,
            }],
            skipped: vec![SkippedElement {
                element: equip,
                reason: SkipReason::NoIntersections,
            }],
            misses: vec![],
        };

        assert_eq!(report.placed_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.face_hosted().count(), 0);
        assert_eq!(report.direct().count(), 1);
    }

    #[test]
    fn test_report_serializes() {
        let report = PlacementReport::default();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("planned"));
    }
}

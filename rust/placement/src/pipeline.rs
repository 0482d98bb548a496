// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The batch planning pipeline.
//!
//! One strict sequential scan over the document's mechanical equipment. Per
//! element: probe point from the bounding box, candidate hosts from the
//! overlap index, face matching against each beam candidate in order, and a
//! direct placement on the first candidate when no beam face qualifies.
//! Geometry arrives through an explicit [`GeometryStore`] keyed by element,
//! so the planner reads only what it is given and mutates nothing.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use sleevegen_geometry::{FaceMatcher, Solid};
use sleevegen_model::units::feet_to_mm;
use sleevegen_model::{Category, Document, Element, ElementKey};

use crate::config::PlacementConfig;
use crate::intersect::{HostIndex, HostKind};
use crate::report::{
    Attachment, CandidateMiss, MissReason, PlacementReport, PlannedSleeve, SkipReason,
    SkippedElement,
};
use crate::sleeve::{reference_direction, SleeveSize};

/// Per-element solid geometry, supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct GeometryStore {
    solids: FxHashMap<ElementKey, Vec<Solid>>,
}

impl GeometryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the solids of one element, replacing any previous entry.
    pub fn insert(&mut self, key: ElementKey, solids: Vec<Solid>) {
        self.solids.insert(key, solids);
    }

    /// Solids registered for an element, if any.
    pub fn get(&self, key: ElementKey) -> Option<&[Solid]> {
        self.solids.get(&key).map(|s| s.as_slice())
    }

    /// Number of elements with registered geometry.
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// True when no geometry is registered.
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}

/// Plans sleeve cutouts for every mechanical equipment element
#[derive(Debug)]
pub struct SleevePlanner<'a> {
    document: &'a Document,
    geometry: &'a GeometryStore,
    config: PlacementConfig,
}

impl<'a> SleevePlanner<'a> {
    /// Create a planner with the default configuration.
    pub fn new(document: &'a Document, geometry: &'a GeometryStore) -> Self {
        Self::with_config(document, geometry, PlacementConfig::default())
    }

    /// Create a planner with an explicit configuration.
    pub fn with_config(
        document: &'a Document,
        geometry: &'a GeometryStore,
        config: PlacementConfig,
    ) -> Self {
        Self {
            document,
            geometry,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Run the scan and return the full report.
    pub fn plan(&self) -> PlacementReport {
        let matcher = FaceMatcher::with_tolerance(self.config.base_tolerance);
        let hosts = HostIndex::build(self.document);
        let mut report = PlacementReport::default();

        for (key, equipment) in self.document.elements_of(Category::MechanicalEquipment) {
            self.plan_one(key, equipment, &matcher, &hosts, &mut report);
        }

        debug!(
            planned = report.placed_count(),
            skipped = report.skipped_count(),
            misses = report.misses.len(),
            "sleeve planning finished"
        );
        report
    }

    fn plan_one(
        &self,
        key: ElementKey,
        equipment: &Element,
        matcher: &FaceMatcher,
        hosts: &HostIndex,
        report: &mut PlacementReport,
    ) {
        let Some(bounds) = equipment.bounds else {
            debug!(element = %equipment.name, "skipped: no bounding box");
            report.skipped.push(SkippedElement {
                element: key,
                reason: SkipReason::MissingBounds,
            });
            return;
        };
        let Some(location) = equipment.location else {
            debug!(element = %equipment.name, "skipped: no location point");
            report.skipped.push(SkippedElement {
                element: key,
                reason: SkipReason::MissingLocation,
            });
            return;
        };

        let candidates = hosts.candidates_for(&bounds);
        if candidates.is_empty() {
            report.skipped.push(SkippedElement {
                element: key,
                reason: SkipReason::NoIntersections,
            });
            return;
        }

        let far_end = bounds.far_end_point();
        let diameter_mm = self.sleeve_diameter_mm(equipment);

        for candidate in candidates.iter().filter(|c| c.kind == HostKind::Beam) {
            let Some(width_mm) = self.beam_width_mm(candidate.key) else {
                report.misses.push(CandidateMiss {
                    equipment: key,
                    host: candidate.key,
                    reason: MissReason::MissingWidth,
                });
                continue;
            };
            let Some(solids) = self.geometry.get(candidate.key) else {
                report.misses.push(CandidateMiss {
                    equipment: key,
                    host: candidate.key,
                    reason: MissReason::NoGeometry,
                });
                continue;
            };
            let Some(m) = matcher.find_best_face(solids, &far_end, &bounds) else {
                report.misses.push(CandidateMiss {
                    equipment: key,
                    host: candidate.key,
                    reason: MissReason::NoFaceMatch,
                });
                continue;
            };

            let face = &solids[m.solid].faces()[m.face];
            let normal = face.normal_at(0.5, 0.5);
            report.planned.push(PlannedSleeve {
                equipment: key,
                host: candidate.key,
                host_kind: HostKind::Beam,
                position: location,
                attachment: Attachment::Face {
                    solid: m.solid,
                    face: m.face,
                    distance: m.distance,
                    method: m.method,
                    orientation: reference_direction(&normal),
                    size: SleeveSize::for_beam(width_mm, diameter_mm, self.config.clearance_mm),
                },
            });
            return;
        }

        // No beam face qualified: drop an unattached sleeve on the first
        // overlapping host at the probe point.
        let first = candidates[0];
        debug!(element = %equipment.name, "no face matched, placing directly on first host");
        report.planned.push(PlannedSleeve {
            equipment: key,
            host: first.key,
            host_kind: first.kind,
            position: far_end,
            attachment: Attachment::Direct,
        });
    }

    /// Nominal diameter from the equipment type, in millimetres.
    ///
    /// Families without the parameter degrade to 0 mm rather than aborting
    /// the run; the clearance still produces a usable cutout.
    fn sleeve_diameter_mm(&self, equipment: &Element) -> f64 {
        match self
            .document
            .type_of(equipment)
            .map(|t| t.parameters.double("Sleeve Diameter"))
        {
            Some(Ok(feet)) => feet_to_mm(feet),
            _ => {
                warn!(element = %equipment.name, "sleeve diameter not found, assuming 0 mm");
                0.0
            }
        }
    }

    /// Beam section width from the host's type, in millimetres.
    ///
    /// Tries the lowercase `b` section parameter first, then uppercase `B`;
    /// both must be double-typed to count.
    fn beam_width_mm(&self, key: ElementKey) -> Option<f64> {
        let beam = self.document.element(key).ok()?;
        let beam_type = self.document.type_of(beam)?;
        let width_ft = beam_type
            .parameters
            .double("b")
            .or_else(|_| beam_type.parameters.double("B"))
            .ok()?;
        Some(feet_to_mm(width_ft))
    }
}

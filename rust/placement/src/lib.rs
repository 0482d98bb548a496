// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Sleevegen Placement
//!
//! Batch planning of sleeve cutouts where mechanical equipment crosses
//! structural walls and beams. The pipeline is a strict sequential scan:
//! candidate hosts come from a bounding-box overlap index, beams are
//! face-matched with the geometry crate's [`FaceMatcher`], and everything
//! (placements, skips, per-candidate misses) lands in an explicit
//! [`PlacementReport`] instead of being swallowed.
//!
//! Planning is pure; the only document mutation is the batch
//! [`apply_sleeves`] step that turns a report into placed elements.
//!
//! [`FaceMatcher`]: sleevegen_geometry::FaceMatcher

pub mod apply;
pub mod config;
pub mod error;
pub mod intersect;
pub mod pipeline;
pub mod report;
pub mod sleeve;

pub use apply::apply_sleeves;
pub use config::PlacementConfig;
pub use error::{Error, Result};
pub use intersect::{HostCandidate, HostIndex, HostKind};
pub use pipeline::{GeometryStore, SleevePlanner};
pub use report::{Attachment, CandidateMiss, MissReason, PlacementReport, PlannedSleeve, SkipReason, SkippedElement};
pub use sleeve::{reference_direction, SleeveSize};

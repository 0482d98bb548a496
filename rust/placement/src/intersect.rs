// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host candidate scan.
//!
//! Pairs a piece of equipment with every wall and beam whose bounding box
//! overlaps its own. The index is built once per planning run; query results
//! list walls before beams, each group in document insertion order, because
//! the direct-placement fallback takes the first candidate and that choice
//! must be reproducible.

use serde::{Deserialize, Serialize};

use sleevegen_model::{BoundingBox, Category, Document, ElementKey};

/// Structural role of a candidate host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostKind {
    /// Wall element
    Wall,
    /// Structural framing element
    Beam,
}

/// One host whose bounds overlap the equipment bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostCandidate {
    /// The host element
    pub key: ElementKey,
    /// Wall or beam
    pub kind: HostKind,
}

/// Cached bounds of every potential host in a document
#[derive(Debug, Clone)]
pub struct HostIndex {
    entries: Vec<(BoundingBox, HostCandidate)>,
}

impl HostIndex {
    /// Collect walls and beams with known bounds from the document.
    ///
    /// Elements without a bounding box cannot participate in the overlap
    /// scan and are left out here.
    pub fn build(document: &Document) -> Self {
        let mut entries = Vec::new();
        for (key, element) in document.elements_of(Category::Wall) {
            if let Some(bounds) = element.bounds {
                entries.push((bounds, HostCandidate { key, kind: HostKind::Wall }));
            }
        }
        for (key, element) in document.elements_of(Category::StructuralFraming) {
            if let Some(bounds) = element.bounds {
                entries.push((bounds, HostCandidate { key, kind: HostKind::Beam }));
            }
        }
        Self { entries }
    }

    /// All hosts whose bounds overlap `bounds`, in index order.
    pub fn candidates_for(&self, bounds: &BoundingBox) -> Vec<HostCandidate> {
        self.entries
            .iter()
            .filter(|(host_bounds, _)| host_bounds.intersects(bounds))
            .map(|(_, candidate)| *candidate)
            .collect()
    }

    /// Number of indexed hosts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document had no usable hosts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

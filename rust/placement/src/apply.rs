// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Applying a report to the document.
//!
//! Planning is pure; this is the one place the document is mutated. The
//! whole report is applied as a batch: the sleeve family is resolved once
//! up front, and a missing family fails the batch before anything is
//! inserted.

use tracing::debug;

use sleevegen_model::{Category, Document, Element, ElementKey, ParameterValue};

use crate::config::PlacementConfig;
use crate::error::{Error, Result};
use crate::report::{Attachment, PlacementReport};

/// Insert one element per planned sleeve, returning the created keys.
///
/// Face-attached sleeves get their `Length` and `Outer Diameter` parameters
/// written (in feet); direct placements carry no dimensions.
///
/// # Errors
///
/// `SleeveFamilyMissing` when no element type matches the configured sleeve
/// family name.
pub fn apply_sleeves(
    document: &mut Document,
    report: &PlacementReport,
    config: &PlacementConfig,
) -> Result<Vec<ElementKey>> {
    let type_key = document
        .find_type_by_name(&config.sleeve_family)
        .ok_or_else(|| Error::SleeveFamilyMissing(config.sleeve_family.clone()))?;

    let mut created = Vec::with_capacity(report.planned.len());
    for sleeve in &report.planned {
        let mut element = Element::new(config.sleeve_family.clone(), Category::GenericModel)
            .with_type(type_key)
            .with_location(sleeve.position);
        if let Attachment::Face { size, .. } = sleeve.attachment {
            element
                .parameters
                .set("Length", ParameterValue::Double(size.length));
            element
                .parameters
                .set("Outer Diameter", ParameterValue::Double(size.outer_diameter));
        }
        created.push(document.add_element(element));
    }

    debug!(count = created.len(), "applied planned sleeves");
    Ok(created)
}

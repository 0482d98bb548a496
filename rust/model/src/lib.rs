// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Sleevegen Model
//!
//! In-memory building document for sleeve-placement planning. Elements
//! (mechanical equipment, walls, structural framing) live in an arena with
//! stable keys; category scans iterate in strict insertion order so that
//! downstream matching stays deterministic.
//!
//! Coordinates are modeling units (feet) throughout; [`units`] holds the
//! millimetre conversions used when reading and writing sleeve dimensions.

pub mod bounds;
pub mod document;
pub mod element;
pub mod error;
pub mod parameter;
pub mod units;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use bounds::BoundingBox;
pub use document::Document;
pub use element::{Category, Element, ElementKey, ElementType, ElementTypeKey};
pub use error::{Error, Result};
pub use parameter::{ParameterSet, ParameterValue};
pub use units::{feet_to_mm, mm_to_feet, MM_PER_FOOT};

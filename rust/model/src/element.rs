// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Elements and element types.
//!
//! An element is one placed object (a pump, a wall, a beam, a sleeve); an
//! element type carries the shared catalog data for all its instances, such
//! as a beam section width or a sleeve's nominal diameter.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::bounds::BoundingBox;
use crate::parameter::{ParameterSet, ParameterValue};

new_key_type! {
    /// Key for an element in the document arena.
    pub struct ElementKey;

    /// Key for an element type in the document arena.
    pub struct ElementTypeKey;
}

/// Element category, the coarse classification used by category scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Pumps, fans, risers: the elements sleeves are planned for
    MechanicalEquipment,
    /// Walls
    Wall,
    /// Beams and other framing members
    StructuralFraming,
    /// Placed sleeve cutouts and other loose components
    GenericModel,
}

impl Category {
    /// Category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MechanicalEquipment => "MechanicalEquipment",
            Category::Wall => "Wall",
            Category::StructuralFraming => "StructuralFraming",
            Category::GenericModel => "GenericModel",
        }
    }
}

/// Shared type data for a family of elements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementType {
    /// Family name, e.g. a beam section or a sleeve catalog entry
    pub name: String,
    /// Type-level parameters (section width, nominal diameter, flags)
    pub parameters: ParameterSet,
}

impl ElementType {
    /// Create a type with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: ParameterSet::new(),
        }
    }

    /// Add a type parameter (builder style).
    pub fn with_parameter(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        self.parameters.set(name, value);
        self
    }
}

/// One placed object in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Instance name
    pub name: String,
    /// Coarse classification
    pub category: Category,
    /// Insertion point, when the element is point-located
    pub location: Option<Point3<f64>>,
    /// Axis-aligned extent, when known
    pub bounds: Option<BoundingBox>,
    /// Instance-level parameters
    pub parameters: ParameterSet,
    /// The element's type, when it has one
    pub element_type: Option<ElementTypeKey>,
}

impl Element {
    /// Create an element with no location, bounds, or type.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            location: None,
            bounds: None,
            parameters: ParameterSet::new(),
            element_type: None,
        }
    }

    /// Set the insertion point (builder style).
    pub fn with_location(mut self, location: Point3<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the bounding box (builder style).
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the element type (builder style).
    pub fn with_type(mut self, key: ElementTypeKey) -> Self {
        self.element_type = Some(key);
        self
    }

    /// Add an instance parameter (builder style).
    pub fn with_parameter(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        self.parameters.set(name, value);
        self
    }
}

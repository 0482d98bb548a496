// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The building document.
//!
//! Arena storage with stable keys, plus explicit insertion-order lists so
//! that category scans always iterate elements in the order they were added.
//! Downstream selection keeps the first of equally good candidates, so scan
//! order is part of observable behavior, not an implementation detail.

use slotmap::SlotMap;

use crate::element::{Category, Element, ElementKey, ElementType, ElementTypeKey};
use crate::error::{Error, Result};

/// An in-memory building model
#[derive(Debug, Default)]
pub struct Document {
    elements: SlotMap<ElementKey, Element>,
    element_order: Vec<ElementKey>,
    types: SlotMap<ElementTypeKey, ElementType>,
    type_order: Vec<ElementTypeKey>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, returning its key.
    pub fn add_element(&mut self, element: Element) -> ElementKey {
        let key = self.elements.insert(element);
        self.element_order.push(key);
        key
    }

    /// Add an element type, returning its key.
    pub fn add_element_type(&mut self, element_type: ElementType) -> ElementTypeKey {
        let key = self.types.insert(element_type);
        self.type_order.push(key);
        key
    }

    /// Look up an element by key.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` for stale or foreign keys.
    pub fn element(&self, key: ElementKey) -> Result<&Element> {
        self.elements.get(key).ok_or(Error::ElementNotFound)
    }

    /// Mutable element lookup.
    pub fn element_mut(&mut self, key: ElementKey) -> Result<&mut Element> {
        self.elements.get_mut(key).ok_or(Error::ElementNotFound)
    }

    /// Look up an element type by key.
    pub fn element_type(&self, key: ElementTypeKey) -> Result<&ElementType> {
        self.types.get(key).ok_or(Error::ElementTypeNotFound)
    }

    /// Resolve an element's type, if it has one that still exists.
    pub fn type_of(&self, element: &Element) -> Option<&ElementType> {
        element.element_type.and_then(|key| self.types.get(key))
    }

    /// Iterate elements of one category in insertion order.
    ///
    /// This is the category scan used by the placement pipeline; the order is
    /// the order elements were added to the document.
    pub fn elements_of(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (ElementKey, &Element)> + '_ {
        self.element_order.iter().filter_map(move |&key| {
            self.elements
                .get(key)
                .filter(|e| e.category == category)
                .map(|e| (key, e))
        })
    }

    /// Find the first element type with the given name, in insertion order.
    pub fn find_type_by_name(&self, name: &str) -> Option<ElementTypeKey> {
        self.type_order
            .iter()
            .copied()
            .find(|&key| self.types.get(key).is_some_and(|t| t.name == name))
    }

    /// Total number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Total number of element types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// True when the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

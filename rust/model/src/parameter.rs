// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named parameters with storage-type discipline.
//!
//! A parameter read as a double must actually be stored as a double; a
//! mismatch is a typed error, not a silent coercion. Lookup is by exact name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single parameter value with its storage type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    /// Floating-point value (lengths are in feet)
    Double(f64),
    /// Integer value (also used for yes/no flags)
    Integer(i64),
    /// Text value
    Text(String),
}

impl ParameterValue {
    /// Name of the storage type, for error reporting.
    pub fn storage_type(&self) -> &'static str {
        match self {
            ParameterValue::Double(_) => "Double",
            ParameterValue::Integer(_) => "Integer",
            ParameterValue::Text(_) => "Text",
        }
    }
}

/// Name-keyed parameter collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterSet {
    values: FxHashMap<String, ParameterValue>,
}

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    /// Insert or replace a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.values.insert(name.into(), value);
    }

    /// Raw lookup by exact name.
    pub fn lookup(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    /// True when a parameter with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Read a double-typed parameter.
    ///
    /// # Errors
    ///
    /// `ParameterMissing` when the name is absent, `ParameterStorage` when
    /// the value is stored under a different type.
    pub fn double(&self, name: &str) -> Result<f64> {
        match self.lookup(name) {
            None => Err(Error::ParameterMissing(name.to_string())),
            Some(ParameterValue::Double(v)) => Ok(*v),
            Some(other) => Err(Error::ParameterStorage {
                name: name.to_string(),
                expected: "Double",
                actual: other.storage_type(),
            }),
        }
    }

    /// Read an integer-typed parameter.
    pub fn integer(&self, name: &str) -> Result<i64> {
        match self.lookup(name) {
            None => Err(Error::ParameterMissing(name.to_string())),
            Some(ParameterValue::Integer(v)) => Ok(*v),
            Some(other) => Err(Error::ParameterStorage {
                name: name.to_string(),
                expected: "Integer",
                actual: other.storage_type(),
            }),
        }
    }

    /// Read a text-typed parameter.
    pub fn text(&self, name: &str) -> Result<&str> {
        match self.lookup(name) {
            None => Err(Error::ParameterMissing(name.to_string())),
            Some(ParameterValue::Text(v)) => Ok(v.as_str()),
            Some(other) => Err(Error::ParameterStorage {
                name: name.to_string(),
                expected: "Text",
                actual: other.storage_type(),
            }),
        }
    }

    /// Number of parameters in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_lookup() {
        let mut params = ParameterSet::new();
        params.set("Sleeve Diameter", ParameterValue::Double(0.5));
        params.set("Comments", ParameterValue::Text("riser".into()));

        assert!(params.contains("Sleeve Diameter"));
        assert!(!params.contains("sleeve diameter")); // lookup is exact
        assert_eq!(params.double("Sleeve Diameter").unwrap(), 0.5);
        assert_eq!(params.text("Comments").unwrap(), "riser");
    }

    #[test]
    fn test_missing_parameter() {
        let params = ParameterSet::new();
        assert_eq!(
            params.double("b"),
            Err(Error::ParameterMissing("b".into()))
        );
    }

    #[test]
    fn test_storage_type_mismatch() {
        let mut params = ParameterSet::new();
        params.set("b", ParameterValue::Text("300".into()));

        match params.double("b") {
            Err(Error::ParameterStorage {
                expected, actual, ..
            }) => {
                assert_eq!(expected, "Double");
                assert_eq!(actual, "Text");
            }
            other => panic!("expected storage error, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_flag() {
        let mut params = ParameterSet::new();
        params.set("Work Plane-Based", ParameterValue::Integer(1));
        assert_eq!(params.integer("Work Plane-Based").unwrap(), 1);
    }

    #[test]
    fn test_replace_keeps_len() {
        let mut params = ParameterSet::new();
        params.set("Length", ParameterValue::Double(1.0));
        params.set("Length", ParameterValue::Double(2.0));
        assert_eq!(params.len(), 1);
        assert_eq!(params.double("Length").unwrap(), 2.0);
    }
}

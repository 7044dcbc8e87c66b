//! Catalogs module
//!
//! This module provides the loaders that turn catalog files into populated
//! object collections, and the ordered container they are stored in.
//!
//! Every loader reads its input in one pass, keeps rows in input order and
//! fails on the first hard error, so a partially loaded catalog is never
//! returned.

pub mod constellations;
pub mod hyg;
pub mod ngc;

use std::collections::HashMap;

use csv::StringRecord;

use crate::errors::{CatalogError, Result};
use crate::objects::CelestialObject;

pub use constellations::{Constellation, ConstellationCatalog, Line};
pub use hyg::HygCatalog;
pub use ngc::NgcCatalog;

/// Generic trait for catalogs of celestial objects
pub trait CelestialCatalog {
    /// Get an object by its identifier in the catalog's primary numbering
    fn get_object(&self, identifier: &str) -> Option<&CelestialObject>;

    /// Get all objects in the catalog, in load order
    fn objects(&self) -> impl Iterator<Item = &CelestialObject>;

    /// Get the number of objects in the catalog
    fn len(&self) -> usize;

    /// Check if the catalog is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Filter objects based on a predicate
    fn filter<F>(&self, predicate: F) -> Vec<&CelestialObject>
    where
        F: Fn(&CelestialObject) -> bool,
    {
        self.objects().filter(|object| predicate(object)).collect()
    }
}

/// Insertion-ordered mapping from key to catalog entry.
///
/// Inserting an existing key replaces the stored value but keeps the slot of
/// the first insertion, so the last row with a given key wins while catalog
/// order follows first appearance.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `key`, returning the replaced value
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        match self.index.get(key) {
            Some(&slot) => Some(&mut self.entries[slot].1),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Find the position of a named column in a CSV header
pub(crate) fn find_column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
}

/// Field at `index`, trimmed; missing trailing fields read as empty
pub(crate) fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("").trim()
}

/// Parse a finite float, or `None` for blank and placeholder values
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

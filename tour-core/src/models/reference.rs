//! Static reference data used to classify orders by postcode.

#[cfg(test)]
#[path = "../../tests/unit/models/reference_test.rs"]
mod reference_test;

use crate::algorithms::geometry::Coordinate;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

type FxIndex<V> = HashMap<String, V, BuildHasherDefault<FxHasher>>;

/// Amount of leading postcode characters used as a key of the coordinate table.
pub const COORDINATE_PREFIX_SIZE: usize = 2;

/// Amount of leading postcode digits used by the region prefix fallback.
pub const REGION_PREFIX_SIZE: usize = 3;

/// A named region holding a curated list of postcodes.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Region {
    /// Region name used as a grouping key.
    pub name: String,
    /// Postcodes which belong to the region.
    pub postcodes: Vec<String>,
}

impl Region {
    /// Creates a new instance of `Region`.
    pub fn new(name: &str, postcodes: &[&str]) -> Self {
        Self { name: name.to_string(), postcodes: postcodes.iter().map(|p| p.to_string()).collect() }
    }
}

/// Maps postcode prefixes to approximate centroids.
#[derive(Clone, Debug)]
pub struct CoordinateTable {
    entries: FxIndex<Coordinate>,
    fallback: Coordinate,
}

impl CoordinateTable {
    /// Creates a new instance of `CoordinateTable`.
    pub fn new<I>(entries: I, fallback: Coordinate) -> Self
    where
        I: IntoIterator<Item = (String, Coordinate)>,
    {
        Self { entries: entries.into_iter().collect(), fallback }
    }

    /// Returns coordinate for the postcode if its prefix is known.
    pub fn resolve(&self, postcode: &str) -> Option<Coordinate> {
        let prefix = postcode.trim().get(..COORDINATE_PREFIX_SIZE)?;

        self.entries.get(prefix).copied()
    }

    /// Returns coordinate for the postcode, falls back to the default centroid for unknown prefixes.
    pub fn coordinate_for_postcode(&self, postcode: &str) -> Coordinate {
        self.resolve(postcode).unwrap_or(self.fallback)
    }

    /// Returns fallback coordinate.
    pub fn fallback(&self) -> Coordinate {
        self.fallback
    }

    /// Returns amount of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps postcodes to named regions.
#[derive(Clone, Debug)]
pub struct RegionTable {
    regions: Vec<Region>,
    exact: FxIndex<usize>,
}

impl RegionTable {
    /// Creates a new instance of `RegionTable`. When a postcode is listed in more than one region,
    /// the first region wins.
    pub fn new(regions: Vec<Region>) -> Self {
        let mut exact = FxIndex::default();
        regions.iter().enumerate().for_each(|(idx, region)| {
            region.postcodes.iter().for_each(|postcode| {
                exact.entry(postcode.trim().to_string()).or_insert(idx);
            })
        });

        Self { regions, exact }
    }

    /// Returns region name of the postcode: exact match first, then match on the first three digits.
    pub fn region_for_postcode(&self, postcode: &str) -> Option<&str> {
        let postcode = postcode.trim();

        self.exact
            .get(postcode)
            .map(|&idx| self.regions[idx].name.as_str())
            .or_else(|| self.region_for_prefix(postcode))
    }

    /// Returns regions in table order.
    pub fn regions(&self) -> &[Region] {
        self.regions.as_slice()
    }

    fn region_for_prefix(&self, postcode: &str) -> Option<&str> {
        let prefix = digits_only(postcode);
        if prefix.len() < REGION_PREFIX_SIZE {
            return None;
        }
        let prefix = &prefix[..REGION_PREFIX_SIZE];

        self.regions
            .iter()
            .find(|region| region.postcodes.iter().any(|entry| digits_only(entry).starts_with(prefix)))
            .map(|region| region.name.as_str())
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::BoundaryFeature;

/// Jurisdiction-filtered boundary features, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySet {
    pub features: Vec<BoundaryFeature>,
}

impl BoundarySet {
    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// Features carrying a precinct number.
    pub fn matchable(&self) -> impl Iterator<Item = &BoundaryFeature> + '_ {
        self.features.iter().filter(|f| f.precinct.is_some())
    }

    /// Distinct precinct numbers present in the set.
    pub fn precinct_numbers(&self) -> BTreeSet<u32> {
        self.features.iter().filter_map(|f| f.precinct).collect()
    }
}

/// What boundary ingestion kept and dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoundaryReport {
    /// Features in the source collection.
    pub total_features: usize,
    /// Features inside the jurisdiction.
    pub in_jurisdiction: usize,
    /// Kept features by geometry type name.
    pub geometry_kinds: BTreeMap<String, usize>,
    /// Jurisdiction features dropped for a missing or unsupported geometry.
    pub skipped_geometry: usize,
    /// Indices into `BoundarySet::features` of features with no precinct number.
    pub unmatchable: Vec<usize>,
}

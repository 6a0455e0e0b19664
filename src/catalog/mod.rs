//! # Catalog index
//!
//! An immutable, ordered collection of [`PlanetRecord`]s with linear-scan queries.
//!
//! ## Overview
//!
//! The catalog is built once, either from already typed records ([`Catalog::new`]), from
//! raw heterogeneous rows ([`Catalog::from_raw_records`]) or from a CSV/JSON source (see
//! [`reader`]). Each planet receives a [`PlanetId`] equal to its position, which stays
//! stable for the life of the catalog.
//!
//! All queries are pure reads that preserve catalog order:
//!
//! * [`Catalog::filter`] applies a [`CatalogFilter`],
//! * [`Catalog::search_by_name`] / [`Catalog::autocomplete`] do case-insensitive
//!   substring matching on the name,
//! * [`Catalog::find_by_name`] resolves an exact name,
//! * [`Catalog::discovery_methods`] lists the distinct discovery methods,
//! * [`Catalog::summarize`] counts how many planets a filter keeps.
//!
//! No index structure is maintained; catalogs are expected to hold at most a few tens of
//! thousands of rows.

pub mod filter;
pub mod reader;

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::exo_errors::ExoError;
use crate::planet::{PlanetId, PlanetRecord, RawPlanetRecord};

pub use filter::{CatalogFilter, CatalogFilterBuilder, RawFilterInput};

/// Default cap of [`Catalog::search_by_name`] and [`Catalog::autocomplete`].
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
/// Shortest trimmed query [`Catalog::autocomplete`] answers.
pub const AUTOCOMPLETE_MIN_CHARS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    planets: Vec<PlanetRecord>,
}

/// Total size of a catalog against the number of planets a filter keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub matching: usize,
}

impl Catalog {
    /// Build a catalog from typed records; ids are reassigned to catalog positions.
    pub fn new(mut planets: Vec<PlanetRecord>) -> Self {
        for (index, planet) in planets.iter_mut().enumerate() {
            planet.id = PlanetId(index);
        }
        Catalog { planets }
    }

    /// Parse raw rows into a catalog. Malformed cells become unknown; this never fails.
    pub fn from_raw_records<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawPlanetRecord>,
    {
        let planets = rows
            .into_iter()
            .enumerate()
            .map(|(index, raw)| PlanetRecord::from_raw(PlanetId(index), &raw))
            .collect();
        Catalog { planets }
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn get(&self, id: PlanetId) -> Option<&PlanetRecord> {
        self.planets.get(id.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanetRecord> {
        self.planets.iter()
    }

    pub fn planets(&self) -> &[PlanetRecord] {
        &self.planets
    }

    /// Planets satisfying `filter`, in catalog order.
    ///
    /// Arguments
    /// -----------------
    /// * `filter`: the constraints to apply, see [`CatalogFilter`].
    ///
    /// Return
    /// ----------
    /// * References into the catalog, never re-sorted.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&PlanetRecord> {
        let kept: Vec<&PlanetRecord> = self.planets.iter().filter(|p| filter.matches(p)).collect();
        debug!(
            total = self.planets.len(),
            matching = kept.len(),
            %filter,
            "catalog filtered"
        );
        kept
    }

    /// Planets whose name contains `query`, ignoring case, up to `limit`.
    ///
    /// An empty query matches every named and unnamed planet alike, so it returns the
    /// first `limit` planets of the catalog.
    pub fn search_by_name(&self, query: &str, limit: usize) -> Vec<&PlanetRecord> {
        let needle = query.to_lowercase();
        self.planets
            .iter()
            .filter(|p| p.display_name().to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Name suggestions for a partially typed query.
    ///
    /// Queries shorter than two characters once trimmed yield nothing; otherwise this is
    /// [`Catalog::search_by_name`] with the trimmed query and [`DEFAULT_SEARCH_LIMIT`].
    pub fn autocomplete(&self, query: &str) -> Vec<&PlanetRecord> {
        let query = query.trim();
        if query.chars().count() < AUTOCOMPLETE_MIN_CHARS {
            return Vec::new();
        }
        self.search_by_name(query, DEFAULT_SEARCH_LIMIT)
    }

    /// Id of the first planet named exactly `name`.
    ///
    /// Return
    /// ----------
    /// * `Err(ExoError::UnknownPlanet)` when no planet carries that name.
    pub fn find_by_name(&self, name: &str) -> Result<PlanetId, ExoError> {
        self.planets
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
            .map(|p| p.id)
            .ok_or_else(|| ExoError::UnknownPlanet(name.to_string()))
    }

    /// Distinct non-empty discovery methods, sorted.
    pub fn discovery_methods(&self) -> Vec<&str> {
        self.planets
            .iter()
            .filter_map(|p| p.discovery_method.as_deref())
            .unique()
            .sorted()
            .collect()
    }

    pub fn summarize(&self, filter: &CatalogFilter) -> CatalogSummary {
        CatalogSummary {
            total: self.planets.len(),
            matching: self.planets.iter().filter(|p| filter.matches(p)).count(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PlanetRecord;
    type IntoIter = std::slice::Iter<'a, PlanetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.planets.iter()
    }
}

impl FromIterator<PlanetRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = PlanetRecord>>(iter: I) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

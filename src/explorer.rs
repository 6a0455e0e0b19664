//! # Explorer
//!
//! Entry point for a presentation layer: a [`Catalog`] bundled with the similarity
//! configuration, answering every per-planet analysis for an explicit selection.
//!
//! ## Overview
//!
//! The selection is a plain `Option<PlanetId>` passed to each call; the explorer holds no
//! "current planet". When nothing is selected, or the id is not in the catalog, every
//! analysis returns [`Analysis::NoPlanetSelected`] so the caller can render a placeholder.
//!
//! ```rust
//! use exoatlas::catalog::Catalog;
//! use exoatlas::explorer::{Analysis, Explorer};
//! use exoatlas::planet::PlanetRecord;
//!
//! let explorer = Explorer::new(Catalog::new(vec![PlanetRecord::named("Kepler-22 b")]));
//! assert_eq!(explorer.habitability(None), Analysis::NoPlanetSelected);
//!
//! let id = explorer.select_by_name("Kepler-22 b").ok();
//! assert!(explorer.habitability(id).is_ready());
//! ```

use serde::Serialize;
use tracing::warn;

use crate::catalog::Catalog;
use crate::classification::{classify, ClassificationResult};
use crate::exo_errors::ExoError;
use crate::habitability::earth::{compare_to_earth, EarthComparison};
use crate::habitability::{assess_habitability, HabitabilityAssessment};
use crate::orbital::{OrbitProfile, StellarProfile};
use crate::planet::{PlanetId, PlanetRecord};
use crate::similarity::{find_similar, SimilarityMatch, SimilarityParams};

/// Result of a per-planet analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "camelCase")]
pub enum Analysis<T> {
    NoPlanetSelected,
    Ready(T),
}

impl<T> Analysis<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Analysis::Ready(_))
    }

    /// The analysis, if a planet was selected.
    pub fn ready(self) -> Option<T> {
        match self {
            Analysis::Ready(value) => Some(value),
            Analysis::NoPlanetSelected => None,
        }
    }

    pub fn as_ref(&self) -> Analysis<&T> {
        match self {
            Analysis::Ready(value) => Analysis::Ready(value),
            Analysis::NoPlanetSelected => Analysis::NoPlanetSelected,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Analysis<U> {
        match self {
            Analysis::Ready(value) => Analysis::Ready(f(value)),
            Analysis::NoPlanetSelected => Analysis::NoPlanetSelected,
        }
    }
}

impl<T> From<Option<T>> for Analysis<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Analysis::NoPlanetSelected, Analysis::Ready)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Explorer {
    catalog: Catalog,
    similarity: SimilarityParams,
}

impl Explorer {
    /// An explorer with the default [`SimilarityParams`].
    pub fn new(catalog: Catalog) -> Self {
        Explorer {
            catalog,
            similarity: SimilarityParams::default(),
        }
    }

    pub fn with_similarity_params(catalog: Catalog, similarity: SimilarityParams) -> Self {
        Explorer {
            catalog,
            similarity,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn similarity_params(&self) -> &SimilarityParams {
        &self.similarity
    }

    /// Resolve an exact planet name to a selection.
    pub fn select_by_name(&self, name: &str) -> Result<PlanetId, ExoError> {
        self.catalog.find_by_name(name)
    }

    /// The selected record.
    ///
    /// An id that does not belong to the catalog is treated as no selection.
    pub fn selected(&self, selection: Option<PlanetId>) -> Analysis<&PlanetRecord> {
        let Some(id) = selection else {
            return Analysis::NoPlanetSelected;
        };
        match self.catalog.get(id) {
            Some(planet) => Analysis::Ready(planet),
            None => {
                warn!(%id, catalog_size = self.catalog.len(), "selection outside the catalog");
                Analysis::NoPlanetSelected
            }
        }
    }

    pub fn habitability(&self, selection: Option<PlanetId>) -> Analysis<HabitabilityAssessment> {
        self.selected(selection).map(assess_habitability)
    }

    pub fn classify(&self, selection: Option<PlanetId>) -> Analysis<ClassificationResult> {
        self.selected(selection).map(classify)
    }

    pub fn compare_to_earth(&self, selection: Option<PlanetId>) -> Analysis<EarthComparison> {
        self.selected(selection).map(compare_to_earth)
    }

    pub fn orbit(&self, selection: Option<PlanetId>) -> Analysis<OrbitProfile> {
        self.selected(selection).map(OrbitProfile::for_planet)
    }

    pub fn star(&self, selection: Option<PlanetId>) -> Analysis<StellarProfile> {
        self.selected(selection).map(StellarProfile::for_planet)
    }

    /// Planets similar to the selection, see [`find_similar`].
    pub fn similar(&self, selection: Option<PlanetId>) -> Analysis<Vec<SimilarityMatch<'_>>> {
        self.selected(selection)
            .map(|planet| find_similar(&self.catalog, planet, &self.similarity))
    }
}

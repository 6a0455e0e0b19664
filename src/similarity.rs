//! # Similar-planet search
//!
//! Scans a [`Catalog`] for planets resembling a reference planet. Three independent tests
//! are evaluated against every other record:
//!
//! * **mass**: `|m₁ - m₂| / max(m₁, m₂, 0.001) < mass_tolerance` (Earth masses),
//! * **distance**: `|a₁ - a₂| / max(a₁, a₂, 0.001) < axis_tolerance` (semi-major axis, AU),
//! * **temperature**: `|T₁ - T₂| < temperature_window_k`, only when *both* equilibrium
//!   temperatures are known; otherwise the test fails.
//!
//! A record qualifies when at least `min_matches` tests pass (two of three by default).
//! Unknown masses and semi-major axes are read as 0, so two planets with the same unknown
//! quantity pass that test; each match lists such substitutions in its `assumed` set.
//!
//! Results keep catalog order and are cut at `max_results`; there is no ranking by
//! closeness. Only the reference record itself is skipped, so a duplicate row with
//! identical values is still reported.

use std::cmp::Ordering::Greater;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::constants::DEFAULT_UNKNOWN;
use crate::exo_errors::ExoError;
use crate::normalize::{assume_or, Assumptions};
use crate::planet::{PlanetField, PlanetId, PlanetRecord};

/// Floor of the relative-difference denominator.
pub const RELATIVE_DIFFERENCE_FLOOR: f64 = 0.001;

/// Tolerances and limits of [`find_similar`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityParams {
    /// Maximum relative mass difference (exclusive).
    pub mass_tolerance: f64,
    /// Maximum relative semi-major-axis difference (exclusive).
    pub axis_tolerance: f64,
    /// Maximum absolute equilibrium temperature difference in Kelvin (exclusive).
    pub temperature_window_k: f64,
    /// Number of passing tests required, in `1..=3`.
    pub min_matches: usize,
    /// Result cap.
    pub max_results: usize,
}

impl SimilarityParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`SimilarityParamsBuilder`] starting from the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use exoatlas::similarity::SimilarityParams;
    ///
    /// let params = SimilarityParams::builder()
    ///     .temperature_window_k(50.0)
    ///     .max_results(5)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.min_matches, 2);
    /// ```
    pub fn builder() -> SimilarityParamsBuilder {
        SimilarityParamsBuilder::new()
    }
}

impl Default for SimilarityParams {
    fn default() -> Self {
        SimilarityParams {
            mass_tolerance: 0.3,
            axis_tolerance: 0.3,
            temperature_window_k: 100.0,
            min_matches: 2,
            max_results: 10,
        }
    }
}

/// Builder for [`SimilarityParams`], with validation.
#[derive(Debug, Clone)]
pub struct SimilarityParamsBuilder {
    params: SimilarityParams,
}

impl Default for SimilarityParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: SimilarityParams::default(),
        }
    }

    pub fn mass_tolerance(mut self, v: f64) -> Self {
        self.params.mass_tolerance = v;
        self
    }
    pub fn axis_tolerance(mut self, v: f64) -> Self {
        self.params.axis_tolerance = v;
        self
    }
    pub fn temperature_window_k(mut self, v: f64) -> Self {
        self.params.temperature_window_k = v;
        self
    }
    pub fn min_matches(mut self, v: usize) -> Self {
        self.params.min_matches = v;
        self
    }
    pub fn max_results(mut self, v: usize) -> Self {
        self.params.max_results = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Validate and produce the [`SimilarityParams`].
    ///
    /// Validation rules
    /// -----------------
    /// * `mass_tolerance > 0`, `axis_tolerance > 0`, `temperature_window_k > 0`.
    /// * `1 ≤ min_matches ≤ 3`.
    /// * `max_results ≥ 1`.
    ///
    /// Returns
    /// -----------------
    /// * `Err(ExoError::InvalidSimilarityParameter)` naming the first rule that fails.
    pub fn build(self) -> Result<SimilarityParams, ExoError> {
        let p = &self.params;

        if !Self::gt0(p.mass_tolerance) {
            return Err(ExoError::InvalidSimilarityParameter(
                "mass_tolerance must be > 0".into(),
            ));
        }
        if !Self::gt0(p.axis_tolerance) {
            return Err(ExoError::InvalidSimilarityParameter(
                "axis_tolerance must be > 0".into(),
            ));
        }
        if !Self::gt0(p.temperature_window_k) {
            return Err(ExoError::InvalidSimilarityParameter(
                "temperature_window_k must be > 0".into(),
            ));
        }
        if !(1..=3).contains(&p.min_matches) {
            return Err(ExoError::InvalidSimilarityParameter(
                "min_matches must be between 1 and 3".into(),
            ));
        }
        if p.max_results == 0 {
            return Err(ExoError::InvalidSimilarityParameter(
                "max_results must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for SimilarityParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 36;
            writeln!(f, "Similarity Search Parameters")?;
            writeln!(f, "----------------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!(
                "mass_tolerance       = {:.3}",
                self.mass_tolerance,
                "Relative mass difference"
            )?;
            line!(
                "axis_tolerance       = {:.3}",
                self.axis_tolerance,
                "Relative semi-major axis difference"
            )?;
            line!(
                "temperature_window_k = {:.1} K",
                self.temperature_window_k,
                "Absolute temperature difference"
            )?;
            line!(
                "min_matches          = {}",
                self.min_matches,
                "Tests that must pass (of 3)"
            )?;
            line!(
                "max_results          = {}",
                self.max_results,
                "Result cap"
            )?;
            Ok(())
        } else {
            write!(
                f,
                "SimilarityParams(mass<{:.2}, axis<{:.2}, ΔT<{:.0}K, min_matches={}, max_results={})",
                self.mass_tolerance,
                self.axis_tolerance,
                self.temperature_window_k,
                self.min_matches,
                self.max_results,
            )
        }
    }
}

/// A catalog planet similar to the reference, with the tests it passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityMatch<'a> {
    pub planet: &'a PlanetRecord,
    pub mass_match: bool,
    pub distance_match: bool,
    pub temperature_match: bool,
    /// Fields read as 0 on the reference or on the candidate.
    pub assumed: Assumptions,
}

impl SimilarityMatch<'_> {
    pub fn match_count(&self) -> usize {
        [self.mass_match, self.distance_match, self.temperature_match]
            .iter()
            .filter(|m| **m)
            .count()
    }
}

/// `|a - b| / max(a, b, 0.001)`.
pub fn relative_difference(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.max(b).max(RELATIVE_DIFFERENCE_FLOOR)
}

/// Features compared between two planets, unknowns already defaulted.
#[derive(Debug, Clone, Copy)]
struct Features {
    mass_earth: f64,
    semi_major_axis: f64,
    temperature: Option<f64>,
}

impl Features {
    fn of(planet: &PlanetRecord, assumed: &mut Assumptions) -> Self {
        Features {
            mass_earth: assume_or(
                planet.normalized().mass_earth,
                DEFAULT_UNKNOWN,
                PlanetField::Mass,
                assumed,
            ),
            semi_major_axis: assume_or(
                planet.semi_major_axis_au,
                DEFAULT_UNKNOWN,
                PlanetField::SemiMajorAxis,
                assumed,
            ),
            temperature: planet.equilibrium_temperature_k,
        }
    }
}

fn compare<'a>(
    reference: &Features,
    reference_assumed: &Assumptions,
    candidate: &'a PlanetRecord,
    params: &SimilarityParams,
) -> SimilarityMatch<'a> {
    let mut assumed = reference_assumed.clone();
    let other = Features::of(candidate, &mut assumed);
    let temperature_match = match (reference.temperature, other.temperature) {
        (Some(t1), Some(t2)) => (t1 - t2).abs() < params.temperature_window_k,
        _ => false,
    };

    SimilarityMatch {
        planet: candidate,
        mass_match: relative_difference(reference.mass_earth, other.mass_earth)
            < params.mass_tolerance,
        distance_match: relative_difference(reference.semi_major_axis, other.semi_major_axis)
            < params.axis_tolerance,
        temperature_match,
        assumed,
    }
}

/// Find catalog planets similar to `reference`.
///
/// Arguments
/// -----------------
/// * `catalog`: the planets to scan, in catalog order.
/// * `reference`: the planet to compare against. It does not need to belong to `catalog`;
///   when it does, that entry is skipped. Equal ids or equal values are not enough to
///   skip a record.
/// * `params`: tolerances, required number of passing tests and result cap.
///
/// Return
/// ----------
/// * At most `params.max_results` matches, in catalog order.
///
/// See also
/// ------------
/// * [`SimilarityParams::builder`] – Custom tolerances.
pub fn find_similar<'a>(
    catalog: &'a Catalog,
    reference: &PlanetRecord,
    params: &SimilarityParams,
) -> Vec<SimilarityMatch<'a>> {
    let mut reference_assumed = Assumptions::new();
    let features = Features::of(reference, &mut reference_assumed);
    let matches: Vec<SimilarityMatch<'a>> = catalog
        .iter()
        .filter(|candidate| !std::ptr::eq(*candidate, reference))
        .map(|candidate| compare(&features, &reference_assumed, candidate, params))
        .filter(|m| m.match_count() >= params.min_matches)
        .take(params.max_results)
        .collect();

    debug!(
        reference = reference.display_name(),
        scanned = catalog.len(),
        matched = matches.len(),
        "similarity scan finished"
    );
    matches
}

/// Same as [`find_similar`] for a planet of the catalog itself.
///
/// Return
/// ----------
/// * `Err(ExoError::UnknownPlanet)` when `id` is not in the catalog.
pub fn find_similar_by_id<'a>(
    catalog: &'a Catalog,
    id: PlanetId,
    params: &SimilarityParams,
) -> Result<Vec<SimilarityMatch<'a>>, ExoError> {
    let reference = catalog
        .get(id)
        .ok_or_else(|| ExoError::UnknownPlanet(id.to_string()))?;
    Ok(find_similar(catalog, reference, params))
}

//! Catalog filter parameters.
//!
//! A [`CatalogFilter`] combines five independent constraints, all of which must hold:
//!
//! * case-insensitive substring on the planet name (empty = no constraint),
//! * exact discovery method (empty = no constraint),
//! * inclusive discovery-year range, default `[0, 3000]`,
//! * maximum distance in light-years, default unbounded,
//! * inclusive mass range in Jupiter masses, default `[0, ∞)`.
//!
//! Unknown year, distance and mass are compared as 0, so a planet with no known distance
//! passes any distance cap and a planet with no known mass fails any positive minimum.

use std::cmp::Ordering::{Equal, Greater, Less};
use std::fmt;

use crate::constants::{JupiterMass, LightYear};
use crate::exo_errors::ExoError;
use crate::normalize::{parse_leading_float, parse_leading_int};
use crate::planet::PlanetRecord;

pub const DEFAULT_YEAR_MIN: i32 = 0;
pub const DEFAULT_YEAR_MAX: i32 = 3000;

/// Predicate parameters of [`Catalog::filter`](crate::catalog::Catalog::filter).
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilter {
    /// Lowercased name fragment.
    pub name_query: String,
    pub discovery_method: Option<String>,
    pub year_min: i32,
    pub year_max: i32,
    pub max_distance_ly: LightYear,
    pub mass_min_jupiter: JupiterMass,
    pub mass_max_jupiter: JupiterMass,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        CatalogFilter {
            name_query: String::new(),
            discovery_method: None,
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
            max_distance_ly: f64::INFINITY,
            mass_min_jupiter: 0.0,
            mass_max_jupiter: f64::INFINITY,
        }
    }
}

/// Unvalidated filter input as typed into a search form.
///
/// Every field is the raw text of one input; empty strings mean "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawFilterInput<'a> {
    pub name: &'a str,
    pub discovery_method: &'a str,
    pub year_min: &'a str,
    pub year_max: &'a str,
    pub max_distance_ly: &'a str,
    pub mass_min_jupiter: &'a str,
    pub mass_max_jupiter: &'a str,
}

impl CatalogFilter {
    /// A filter that keeps every planet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CatalogFilterBuilder {
        CatalogFilterBuilder::new()
    }

    /// Build a filter from form input without ever failing.
    ///
    /// Numbers are read by their leading numeric prefix. An unreadable number, and a zero,
    /// both fall back to the default of that bound, so `"0"` as a maximum means "no maximum".
    ///
    /// Arguments
    /// -----------------
    /// * `input`: the raw strings.
    ///
    /// Return
    /// ----------
    /// * A [`CatalogFilter`]; bounds are not checked for consistency, so an inverted range
    ///   simply matches nothing.
    pub fn from_raw(input: &RawFilterInput<'_>) -> Self {
        let int_or = |text: &str, default: i32| {
            parse_leading_int(text)
                .and_then(|v| i32::try_from(v).ok())
                .filter(|v| *v != 0)
                .unwrap_or(default)
        };
        let float_or = |text: &str, default: f64| {
            parse_leading_float(text)
                .filter(|v| *v != 0.0)
                .unwrap_or(default)
        };

        let method = input.discovery_method.trim();
        CatalogFilter {
            name_query: input.name.to_lowercase(),
            discovery_method: (!method.is_empty()).then(|| method.to_string()),
            year_min: int_or(input.year_min, DEFAULT_YEAR_MIN),
            year_max: int_or(input.year_max, DEFAULT_YEAR_MAX),
            max_distance_ly: float_or(input.max_distance_ly, f64::INFINITY),
            mass_min_jupiter: float_or(input.mass_min_jupiter, 0.0),
            mass_max_jupiter: float_or(input.mass_max_jupiter, f64::INFINITY),
        }
    }

    /// Whether `planet` satisfies every constraint.
    pub fn matches(&self, planet: &PlanetRecord) -> bool {
        if !self.name_query.is_empty()
            && !planet
                .display_name()
                .to_lowercase()
                .contains(&self.name_query)
        {
            return false;
        }

        if let Some(method) = &self.discovery_method {
            if planet.discovery_method.as_deref() != Some(method.as_str()) {
                return false;
            }
        }

        let year = planet.discovery_year.unwrap_or(0);
        if year < self.year_min || year > self.year_max {
            return false;
        }

        let distance = planet.normalized().distance_light_years.unwrap_or(0.0);
        if distance > self.max_distance_ly {
            return false;
        }

        let mass = planet.mass_jupiter.unwrap_or(0.0);
        mass >= self.mass_min_jupiter && mass <= self.mass_max_jupiter
    }
}

impl fmt::Display for CatalogFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogFilter(name~{:?}, method={}, year∈[{},{}], distance≤{}ly, mass∈[{},{}]MJ)",
            self.name_query,
            self.discovery_method.as_deref().unwrap_or("any"),
            self.year_min,
            self.year_max,
            self.max_distance_ly,
            self.mass_min_jupiter,
            self.mass_max_jupiter,
        )
    }
}

/// Builder for [`CatalogFilter`], with validation.
#[derive(Debug, Clone)]
pub struct CatalogFilterBuilder {
    filter: CatalogFilter,
}

impl Default for CatalogFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFilterBuilder {
    pub fn new() -> Self {
        Self {
            filter: CatalogFilter::default(),
        }
    }

    pub fn name_query(mut self, v: &str) -> Self {
        self.filter.name_query = v.to_lowercase();
        self
    }
    pub fn discovery_method(mut self, v: &str) -> Self {
        self.filter.discovery_method = (!v.is_empty()).then(|| v.to_string());
        self
    }
    pub fn year_range(mut self, min: i32, max: i32) -> Self {
        self.filter.year_min = min;
        self.filter.year_max = max;
        self
    }
    pub fn max_distance_ly(mut self, v: LightYear) -> Self {
        self.filter.max_distance_ly = v;
        self
    }
    pub fn mass_range_jupiter(mut self, min: JupiterMass, max: JupiterMass) -> Self {
        self.filter.mass_min_jupiter = min;
        self.filter.mass_max_jupiter = max;
        self
    }

    /// Return true iff x >= 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Return true iff a <= b and comparable (i.e., not NaN).
    #[inline]
    fn le(a: f64, b: f64) -> bool {
        matches!(a.partial_cmp(&b), Some(Less) | Some(Equal))
    }

    /// Validate and produce the [`CatalogFilter`].
    ///
    /// Validation rules
    /// -----------------
    /// * `year_min ≤ year_max`.
    /// * `max_distance_ly ≥ 0`.
    /// * `0 ≤ mass_min ≤ mass_max`.
    pub fn build(self) -> Result<CatalogFilter, ExoError> {
        let p = &self.filter;

        if p.year_min > p.year_max {
            return Err(ExoError::InvalidFilterParameter(
                "year_min must be <= year_max".into(),
            ));
        }
        if !Self::ge0(p.max_distance_ly) {
            return Err(ExoError::InvalidFilterParameter(
                "max_distance_ly must be >= 0".into(),
            ));
        }
        if !(Self::ge0(p.mass_min_jupiter) && Self::le(p.mass_min_jupiter, p.mass_max_jupiter)) {
            return Err(ExoError::InvalidFilterParameter(
                "require 0 <= mass_min <= mass_max".into(),
            ));
        }

        Ok(self.filter)
    }
}

#[cfg(test)]
mod filter_test {
    use super::*;

    fn kepler_22b() -> PlanetRecord {
        PlanetRecord {
            mass_jupiter: Some(0.11),
            distance_parsecs: Some(190.0),
            discovery_year: Some(2011),
            discovery_method: Some("Transit".into()),
            ..PlanetRecord::named("Kepler-22 b")
        }
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let filter = CatalogFilter::default();
        assert!(filter.matches(&kepler_22b()));
        assert!(filter.matches(&PlanetRecord::default()));
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let filter = CatalogFilter::builder().name_query("PLER-22").build().unwrap();
        assert!(filter.matches(&kepler_22b()));
        let filter = CatalogFilter::builder().name_query("trappist").build().unwrap();
        assert!(!filter.matches(&kepler_22b()));
    }

    #[test]
    fn test_method_is_exact() {
        let transit = CatalogFilter::builder().discovery_method("Transit").build().unwrap();
        assert!(transit.matches(&kepler_22b()));
        let partial = CatalogFilter::builder().discovery_method("Trans").build().unwrap();
        assert!(!partial.matches(&kepler_22b()));
        assert!(!transit.matches(&PlanetRecord::named("no method")));
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let filter = CatalogFilter::builder().year_range(2011, 2011).build().unwrap();
        assert!(filter.matches(&kepler_22b()));
        let filter = CatalogFilter::builder().year_range(2012, 2020).build().unwrap();
        assert!(!filter.matches(&kepler_22b()));
        // Unknown year compares as 0.
        assert!(!filter.matches(&PlanetRecord::named("undated")));
    }

    #[test]
    fn test_distance_cap_in_light_years() {
        // 190 pc = 619.4 ly
        let filter = CatalogFilter::builder().max_distance_ly(620.0).build().unwrap();
        assert!(filter.matches(&kepler_22b()));
        let filter = CatalogFilter::builder().max_distance_ly(600.0).build().unwrap();
        assert!(!filter.matches(&kepler_22b()));
        assert!(filter.matches(&PlanetRecord::named("unknown distance")));
    }

    #[test]
    fn test_mass_range() {
        let filter = CatalogFilter::builder()
            .mass_range_jupiter(0.1, 0.11)
            .build()
            .unwrap();
        assert!(filter.matches(&kepler_22b()));
        assert!(!filter.matches(&PlanetRecord::named("unknown mass")));
    }

    #[test]
    fn test_builder_rejects_inconsistent_bounds() {
        assert_eq!(
            CatalogFilter::builder().year_range(2020, 2000).build(),
            Err(ExoError::InvalidFilterParameter(
                "year_min must be <= year_max".into()
            ))
        );
        assert!(CatalogFilter::builder().max_distance_ly(-1.0).build().is_err());
        assert!(CatalogFilter::builder()
            .mass_range_jupiter(2.0, 1.0)
            .build()
            .is_err());
        assert!(CatalogFilter::builder()
            .mass_range_jupiter(f64::NAN, 1.0)
            .build()
            .is_err());
    }

    #[test]
    fn test_from_raw_falls_back_to_defaults() {
        let filter = CatalogFilter::from_raw(&RawFilterInput {
            name: "Kepler",
            discovery_method: "  ",
            year_min: "abc",
            year_max: "0",
            max_distance_ly: "0",
            mass_min_jupiter: "",
            mass_max_jupiter: "not a number",
        });
        assert_eq!(
            filter,
            CatalogFilter {
                name_query: "kepler".into(),
                ..CatalogFilter::default()
            }
        );
    }

    #[test]
    fn test_from_raw_reads_numeric_prefix() {
        let filter = CatalogFilter::from_raw(&RawFilterInput {
            year_min: "2000",
            year_max: "2015 AD",
            max_distance_ly: "1000ly",
            mass_max_jupiter: "0.5",
            discovery_method: "Transit",
            ..RawFilterInput::default()
        });
        assert_eq!(filter.year_min, 2000);
        assert_eq!(filter.year_max, 2015);
        assert_eq!(filter.max_distance_ly, 1000.0);
        assert_eq!(filter.mass_max_jupiter, 0.5);
        assert_eq!(filter.discovery_method.as_deref(), Some("Transit"));
        assert!(filter.matches(&kepler_22b()));
    }
}

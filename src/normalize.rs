//! # Unit & field normalization
//!
//! Converts heterogeneous raw catalog cells into physical quantities and defines the
//! fallback policy for missing or invalid data.
//!
//! ## Parsing policy
//!
//! Numeric cells are read leniently: leading whitespace is skipped and the longest numeric
//! prefix is taken, so `"1.52 ± 0.07"` reads as `1.52`. A cell with no numeric prefix, or
//! whose value is not finite, is *unknown*.
//!
//! | Parser                 | Accepted values       | Used for |
//! |------------------------|-----------------------|----------|
//! | [`parse_positive`]     | finite, `> 0`         | masses, distances, periods, temperatures, stellar radius/mass |
//! | [`parse_eccentricity`] | finite, `0 ≤ e < 1`   | eccentricity (0 is a known circular orbit) |
//! | [`parse_year`]         | integer prefix, `> 0` | discovery year |
//! | [`parse_text`]         | non-empty after trim  | names, discovery method/facility, spectral type |
//!
//! ## Defaults
//!
//! Unknown values are never coerced on the record itself. Formulas that need a finite
//! input call [`assume_or`] which substitutes the documented default (see
//! [`crate::constants`]) and writes the field into an [`Assumptions`] set carried by the
//! result.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::constants::{
    EarthMass, JupiterMass, LightYear, Parsec, JUPITER_TO_EARTH_MASS, PARSEC_TO_LIGHT_YEAR,
};
use crate::planet::{PlanetField, RawValue};

static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("leading float pattern is valid")
});

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?\d+").expect("leading integer pattern is valid"));

/// Read the numeric prefix of a string.
///
/// Arguments
/// -----------------
/// * `text`: the raw cell, e.g. `" 0.0123 (est.)"`.
///
/// Return
/// ----------
/// * `Some(value)` if the string starts with a finite number, `None` otherwise.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let matched = LEADING_FLOAT.find(text)?;
    let value: f64 = matched.as_str().trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Read the integer prefix of a string (`"2016-05"` → `2016`).
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let matched = LEADING_INT.find(text)?;
    matched.as_str().trim().parse().ok()
}

fn numeric(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(n) => n.is_finite().then_some(*n),
        RawValue::Text(s) => parse_leading_float(s),
    }
}

/// Parse a strictly positive physical quantity; `≤ 0` is unknown.
pub fn parse_positive(value: &RawValue) -> Option<f64> {
    numeric(value).filter(|v| *v > 0.0)
}

/// Parse an eccentricity; values outside `[0, 1)` are unknown.
pub fn parse_eccentricity(value: &RawValue) -> Option<f64> {
    numeric(value).filter(|e| (0.0..1.0).contains(e))
}

/// Parse a discovery year; `≤ 0` is unknown.
pub fn parse_year(value: &RawValue) -> Option<i32> {
    let year = match value {
        RawValue::Number(n) if n.is_finite() => n.trunc() as i64,
        RawValue::Number(_) => return None,
        RawValue::Text(s) => parse_leading_int(s)?,
    };
    i32::try_from(year).ok().filter(|y| *y > 0)
}

/// Parse a text cell; blank text is unknown.
pub fn parse_text(value: &RawValue) -> Option<String> {
    let text = match value {
        RawValue::Text(s) => s.trim().to_string(),
        RawValue::Number(n) => n.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Convert a mass in Jupiter masses to Earth masses.
///
/// Unknown, non-finite and non-positive inputs stay unknown.
pub fn to_earth_masses(mass_jupiter: Option<JupiterMass>) -> Option<EarthMass> {
    mass_jupiter
        .filter(|m| m.is_finite() && *m > 0.0)
        .map(|m| m * JUPITER_TO_EARTH_MASS)
}

/// Convert a distance in parsecs to light-years.
///
/// Unknown, non-finite and non-positive inputs stay unknown.
pub fn to_light_years(distance_parsecs: Option<Parsec>) -> Option<LightYear> {
    distance_parsecs
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| d * PARSEC_TO_LIGHT_YEAR)
}

/// Display-unit view of a [`PlanetRecord`](crate::planet::PlanetRecord).
///
/// Transient and owned by the caller; obtained through
/// [`PlanetRecord::normalized`](crate::planet::PlanetRecord::normalized).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlanet {
    pub mass_earth: Option<EarthMass>,
    pub distance_light_years: Option<LightYear>,
}

/// Set of fields replaced by a default while computing a derived result.
///
/// Insertion order is kept and duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assumptions(SmallVec<[PlanetField; 4]>);

impl Assumptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, field: PlanetField) {
        if !self.0.contains(&field) {
            self.0.push(field);
        }
    }

    /// Merge another set into this one.
    pub fn extend(&mut self, other: &Assumptions) {
        for field in other.iter() {
            self.record(field);
        }
    }

    pub fn contains(&self, field: PlanetField) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = PlanetField> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Assumptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Return the known value, or substitute `default` and record the field as assumed.
///
/// Arguments
/// -----------------
/// * `value`: the parsed field.
/// * `default`: the documented fallback for this formula.
/// * `field`: which field `value` came from.
/// * `assumed`: the result's assumption set.
///
/// Return
/// ----------
/// * A finite value usable by a formula.
pub fn assume_or(
    value: Option<f64>,
    default: f64,
    field: PlanetField,
    assumed: &mut Assumptions,
) -> f64 {
    match value {
        Some(v) => v,
        None => {
            assumed.record(field);
            default
        }
    }
}

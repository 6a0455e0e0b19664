//! # Planet records
//!
//! Two representations of a catalog row live here:
//!
//! - [`RawPlanetRecord`]: the heterogeneous row as it arrives from a data source, a flat
//!   mapping from [`PlanetField`] to a string or number ([`RawValue`]). Any field may be
//!   absent.
//! - [`PlanetRecord`]: the typed, immutable row used by every analysis. Each field is
//!   parsed exactly once by [`PlanetRecord::from_raw`] following the policy of
//!   [`crate::normalize`]; a field that is missing or does not survive parsing is `None`.
//!
//! Keys of a raw row are matched by [`PlanetField::from_key`], which understands both
//! the catalog column headers (`"Orbit Semi-Major Axis"`) and compact identifiers
//! (`"semiMajorAxis"`, `"semi_major_axis"`).

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Day, JupiterMass, Kelvin, Parsec, SolarMass};
use crate::normalize::{
    parse_eccentricity, parse_positive, parse_text, parse_year, to_earth_masses, to_light_years,
    NormalizedPlanet,
};

/// Named fields of a catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetField {
    Name,
    HostStar,
    Mass,
    SemiMajorAxis,
    Eccentricity,
    OrbitalPeriodDays,
    EquilibriumTemperatureK,
    DistanceParsecs,
    DiscoveryYear,
    DiscoveryMethod,
    DiscoveryFacility,
    SpectralType,
    StellarEffectiveTemperatureK,
    StellarRadiusSolar,
    StellarMassSolar,
}

impl PlanetField {
    pub const ALL: [PlanetField; 15] = [
        PlanetField::Name,
        PlanetField::HostStar,
        PlanetField::Mass,
        PlanetField::SemiMajorAxis,
        PlanetField::Eccentricity,
        PlanetField::OrbitalPeriodDays,
        PlanetField::EquilibriumTemperatureK,
        PlanetField::DistanceParsecs,
        PlanetField::DiscoveryYear,
        PlanetField::DiscoveryMethod,
        PlanetField::DiscoveryFacility,
        PlanetField::SpectralType,
        PlanetField::StellarEffectiveTemperatureK,
        PlanetField::StellarRadiusSolar,
        PlanetField::StellarMassSolar,
    ];

    /// Column header used by the exoplanet catalog exports.
    pub fn column_name(&self) -> &'static str {
        match self {
            PlanetField::Name => "Planet Name",
            PlanetField::HostStar => "Planet Host",
            PlanetField::Mass => "Mass",
            PlanetField::SemiMajorAxis => "Orbit Semi-Major Axis",
            PlanetField::Eccentricity => "Eccentricity",
            PlanetField::OrbitalPeriodDays => "Orbital Period Days",
            PlanetField::EquilibriumTemperatureK => "Equilibrium Temperature",
            PlanetField::DistanceParsecs => "Distance",
            PlanetField::DiscoveryYear => "Discovery Year",
            PlanetField::DiscoveryMethod => "Discovery Method",
            PlanetField::DiscoveryFacility => "Discovery Facility",
            PlanetField::SpectralType => "Spectral Type",
            PlanetField::StellarEffectiveTemperatureK => "Stellar Effective Temperature",
            PlanetField::StellarRadiusSolar => "Stellar Radius",
            PlanetField::StellarMassSolar => "Stellar Mass",
        }
    }

    /// Resolve a raw row key to a field.
    ///
    /// Matching ignores case, whitespace, `-` and `_`, so `"Orbit Semi-Major Axis"`,
    /// `"semiMajorAxis"` and `"semi_major_axis"` all resolve to [`PlanetField::SemiMajorAxis`].
    ///
    /// Arguments
    /// -----------------
    /// * `key`: a column header or identifier.
    ///
    /// Return
    /// ----------
    /// * `Some(PlanetField)` when the key is recognized, `None` otherwise (the column is ignored).
    pub fn from_key(key: &str) -> Option<Self> {
        let folded: String = key
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        let field = match folded.as_str() {
            "planetname" | "name" => PlanetField::Name,
            "planethost" | "hoststar" | "host" => PlanetField::HostStar,
            "mass" | "massjupiter" => PlanetField::Mass,
            "orbitsemimajoraxis" | "semimajoraxis" => PlanetField::SemiMajorAxis,
            "eccentricity" => PlanetField::Eccentricity,
            "orbitalperioddays" | "orbitalperiod" => PlanetField::OrbitalPeriodDays,
            "equilibriumtemperature" | "equilibriumtemperaturek" => {
                PlanetField::EquilibriumTemperatureK
            }
            "distance" | "distanceparsecs" => PlanetField::DistanceParsecs,
            "discoveryyear" => PlanetField::DiscoveryYear,
            "discoverymethod" => PlanetField::DiscoveryMethod,
            "discoveryfacility" => PlanetField::DiscoveryFacility,
            "spectraltype" => PlanetField::SpectralType,
            "stellareffectivetemperature" | "stellareffectivetemperaturek" => {
                PlanetField::StellarEffectiveTemperatureK
            }
            "stellarradius" | "stellarradiussolar" => PlanetField::StellarRadiusSolar,
            "stellarmass" | "stellarmasssolar" => PlanetField::StellarMassSolar,
            _ => return None,
        };
        Some(field)
    }
}

impl fmt::Display for PlanetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// A raw catalog cell: either a number or a string.
///
/// Absent cells and JSON `null` are simply not stored in a [`RawPlanetRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// A heterogeneous catalog row before parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlanetRecord {
    fields: AHashMap<PlanetField, RawValue>,
}

impl RawPlanetRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a raw row from any sequence of `(key, value)` pairs.
    ///
    /// Keys are resolved with [`PlanetField::from_key`]; unrecognized keys are dropped.
    /// When a key appears twice, the last value wins.
    ///
    /// Arguments
    /// -----------------
    /// * `pairs`: an iterator of `(key, value)` where the key is a column header or identifier.
    ///
    /// Return
    /// ----------
    /// * A [`RawPlanetRecord`] holding every recognized cell.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawValue>,
    {
        let mut raw = RawPlanetRecord::new();
        for (key, value) in pairs {
            if let Some(field) = PlanetField::from_key(key.as_ref()) {
                raw.insert(field, value);
            }
        }
        raw
    }

    /// Set a cell, replacing any previous value.
    pub fn insert(&mut self, field: PlanetField, value: impl Into<RawValue>) {
        self.fields.insert(field, value.into());
    }

    /// Builder-style variant of [`RawPlanetRecord::insert`].
    pub fn with(mut self, field: PlanetField, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: PlanetField) -> Option<&RawValue> {
        self.fields.get(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Position of a planet in its [`Catalog`](crate::catalog::Catalog).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlanetId(pub usize);

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A typed catalog row.
///
/// Units:
/// * `mass_jupiter`: Jupiter masses
/// * `semi_major_axis_au`: AU
/// * `eccentricity`: unitless, in `[0, 1)`
/// * `orbital_period_days`: days
/// * `equilibrium_temperature_k`, `stellar_effective_temperature_k`: Kelvin
/// * `distance_parsecs`: parsecs
/// * `stellar_radius_solar`, `stellar_mass_solar`: solar units
///
/// `None` always means *unknown*. Formulas that need a finite input substitute a
/// documented default and report it; the record itself is never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    pub id: PlanetId,
    pub name: Option<String>,
    pub host_star: Option<String>,
    pub mass_jupiter: Option<JupiterMass>,
    pub semi_major_axis_au: Option<AstronomicalUnit>,
    pub eccentricity: Option<f64>,
    pub orbital_period_days: Option<Day>,
    pub equilibrium_temperature_k: Option<Kelvin>,
    pub distance_parsecs: Option<Parsec>,
    pub discovery_year: Option<i32>,
    pub discovery_method: Option<String>,
    pub discovery_facility: Option<String>,
    pub spectral_type: Option<String>,
    pub stellar_effective_temperature_k: Option<Kelvin>,
    pub stellar_radius_solar: Option<f64>,
    pub stellar_mass_solar: Option<SolarMass>,
}

impl PlanetRecord {
    /// An otherwise empty record carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        PlanetRecord {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Parse a raw row into a typed record.
    ///
    /// Every field is parsed independently; a malformed cell only makes *that* field
    /// unknown. This never fails.
    ///
    /// Arguments
    /// -----------------
    /// * `id`: catalog position of the row.
    /// * `raw`: the heterogeneous row.
    ///
    /// Return
    /// ----------
    /// * The typed [`PlanetRecord`].
    ///
    /// See also
    /// ------------
    /// * [`crate::normalize`] – Parsing policy for each kind of field.
    pub fn from_raw(id: PlanetId, raw: &RawPlanetRecord) -> Self {
        let text = |field| raw.get(field).and_then(parse_text);
        let positive = |field| raw.get(field).and_then(parse_positive);

        PlanetRecord {
            id,
            name: text(PlanetField::Name),
            host_star: text(PlanetField::HostStar),
            mass_jupiter: positive(PlanetField::Mass),
            semi_major_axis_au: positive(PlanetField::SemiMajorAxis),
            eccentricity: raw.get(PlanetField::Eccentricity).and_then(parse_eccentricity),
            orbital_period_days: positive(PlanetField::OrbitalPeriodDays),
            equilibrium_temperature_k: positive(PlanetField::EquilibriumTemperatureK),
            distance_parsecs: positive(PlanetField::DistanceParsecs),
            discovery_year: raw.get(PlanetField::DiscoveryYear).and_then(parse_year),
            discovery_method: text(PlanetField::DiscoveryMethod),
            discovery_facility: text(PlanetField::DiscoveryFacility),
            spectral_type: text(PlanetField::SpectralType),
            stellar_effective_temperature_k: positive(PlanetField::StellarEffectiveTemperatureK),
            stellar_radius_solar: positive(PlanetField::StellarRadiusSolar),
            stellar_mass_solar: positive(PlanetField::StellarMassSolar),
        }
    }

    /// Name as displayed, empty when unknown.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Derived quantities in display units, recomputed on each call.
    pub fn normalized(&self) -> NormalizedPlanet {
        NormalizedPlanet {
            mass_earth: to_earth_masses(self.mass_jupiter),
            distance_light_years: to_light_years(self.distance_parsecs),
        }
    }
}

#[cfg(test)]
mod planet_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_field_from_key() {
        assert_eq!(
            PlanetField::from_key("Orbit Semi-Major Axis"),
            Some(PlanetField::SemiMajorAxis)
        );
        assert_eq!(
            PlanetField::from_key("semiMajorAxis"),
            Some(PlanetField::SemiMajorAxis)
        );
        assert_eq!(
            PlanetField::from_key("stellar_mass_solar"),
            Some(PlanetField::StellarMassSolar)
        );
        assert_eq!(PlanetField::from_key("Planet Host"), Some(PlanetField::HostStar));
        assert_eq!(PlanetField::from_key("Right Ascension"), None);
    }

    #[test]
    fn test_column_names_round_trip() {
        for field in PlanetField::ALL {
            assert_eq!(PlanetField::from_key(field.column_name()), Some(field));
        }
    }

    #[test]
    fn test_from_pairs_drops_unknown_keys() {
        let raw = RawPlanetRecord::from_pairs([
            ("Planet Name", RawValue::from("Kepler-186 f")),
            ("Mass", RawValue::from(0.0046)),
            ("Right Ascension", RawValue::from("19h54m")),
        ]);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.get(PlanetField::Mass), Some(&RawValue::Number(0.0046)));
    }

    #[test]
    fn test_from_raw_parses_each_field_independently() {
        let raw = RawPlanetRecord::new()
            .with(PlanetField::Name, "  TOI-700 d ")
            .with(PlanetField::Mass, "not measured")
            .with(PlanetField::SemiMajorAxis, "0.163")
            .with(PlanetField::Eccentricity, 0.0)
            .with(PlanetField::DiscoveryYear, "2020")
            .with(PlanetField::StellarMassSolar, -1.0)
            .with(PlanetField::DiscoveryMethod, "");

        let planet = PlanetRecord::from_raw(PlanetId(7), &raw);
        assert_eq!(planet.id, PlanetId(7));
        assert_eq!(planet.name.as_deref(), Some("TOI-700 d"));
        assert_eq!(planet.mass_jupiter, None);
        assert_eq!(planet.semi_major_axis_au, Some(0.163));
        assert_eq!(planet.eccentricity, Some(0.0));
        assert_eq!(planet.discovery_year, Some(2020));
        assert_eq!(planet.stellar_mass_solar, None);
        assert_eq!(planet.discovery_method, None);
        assert_eq!(planet.host_star, None);
    }

    #[test]
    fn test_normalized_does_not_touch_record() {
        let planet = PlanetRecord {
            mass_jupiter: Some(1.0),
            distance_parsecs: Some(10.0),
            ..PlanetRecord::named("b")
        };
        let before = planet.clone();
        let normalized = planet.normalized();
        assert_eq!(normalized.mass_earth, Some(317.8));
        assert_relative_eq!(normalized.distance_light_years.unwrap(), 32.6, epsilon = 1e-12);
        assert_eq!(planet, before);
    }
}

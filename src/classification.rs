//! # Mass and temperature taxonomy
//!
//! Planets are placed in a [`MassRegime`] (from their mass in Earth masses) and a
//! [`TemperatureRegime`] (from their equilibrium temperature).
//!
//! Both lookups are driven by ordered tables of `(exclusive upper bound, tier)` pairs,
//! scanned in ascending order; the first bound strictly greater than the value wins and
//! values at or past the last bound fall into the top tier. A value exactly on a boundary
//! therefore belongs to the *upper* tier (2.0 M⊕ is a Super-Earth, 273 K is Temperate).
//!
//! Unknown masses and temperatures are classified as 0 (Dwarf, Frozen) and reported in
//! [`ClassificationResult::assumed`].

use std::fmt;

use serde::Serialize;

use crate::constants::{EarthMass, Kelvin, DEFAULT_UNKNOWN};
use crate::normalize::{assume_or, Assumptions};
use crate::planet::{PlanetField, PlanetRecord};

/// Mass tiers, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MassRegime {
    Dwarf,
    Terrestrial,
    SuperEarth,
    NeptuneLike,
    GasGiant,
    SuperJupiter,
}

pub const MASS_TIERS: [(EarthMass, MassRegime); 5] = [
    (0.1, MassRegime::Dwarf),
    (2.0, MassRegime::Terrestrial),
    (10.0, MassRegime::SuperEarth),
    (50.0, MassRegime::NeptuneLike),
    (500.0, MassRegime::GasGiant),
];

/// Temperature tiers, coldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TemperatureRegime {
    Frozen,
    Cold,
    Temperate,
    Hot,
    UltraHot,
}

pub const TEMPERATURE_TIERS: [(Kelvin, TemperatureRegime); 4] = [
    (150.0, TemperatureRegime::Frozen),
    (273.0, TemperatureRegime::Cold),
    (350.0, TemperatureRegime::Temperate),
    (600.0, TemperatureRegime::Hot),
];

/// Linear scan of an ascending `(exclusive upper bound, tier)` table.
///
/// Arguments
/// -----------------
/// * `table`: tiers sorted by increasing upper bound.
/// * `top`: tier returned when `value` is not below any bound (including NaN).
/// * `value`: the quantity to classify.
///
/// Return
/// ----------
/// * The first tier whose bound is strictly greater than `value`, else `top`.
pub fn lookup_tier<T: Copy>(table: &[(f64, T)], top: T, value: f64) -> T {
    table
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, tier)| *tier)
        .unwrap_or(top)
}

impl MassRegime {
    pub fn from_earth_masses(mass_earth: EarthMass) -> Self {
        lookup_tier(&MASS_TIERS, MassRegime::SuperJupiter, mass_earth)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MassRegime::Dwarf => "Dwarf Planet / Large Moon",
            MassRegime::Terrestrial => "Rocky / Terrestrial Planet",
            MassRegime::SuperEarth => "Super-Earth",
            MassRegime::NeptuneLike => "Neptune-like / Ice Giant",
            MassRegime::GasGiant => "Gas Giant (Jupiter-class)",
            MassRegime::SuperJupiter => "Super-Jupiter",
        }
    }

    /// One-word label used in planet lists.
    pub fn short_label(&self) -> &'static str {
        match self {
            MassRegime::Dwarf => "Dwarf",
            MassRegime::Terrestrial => "Rocky",
            MassRegime::SuperEarth => "Super-Earth",
            MassRegime::NeptuneLike => "Neptune-like",
            MassRegime::GasGiant => "Gas Giant",
            MassRegime::SuperJupiter => "Super-Jupiter",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MassRegime::Dwarf => "Very small body, likely rocky with minimal atmosphere",
            MassRegime::Terrestrial => "Earth-sized rocky planet with possible thin atmosphere",
            MassRegime::SuperEarth => "Larger rocky planet or small gas planet",
            MassRegime::NeptuneLike => "Planet with substantial hydrogen/helium atmosphere",
            MassRegime::GasGiant => "Massive planet primarily composed of hydrogen and helium",
            MassRegime::SuperJupiter => {
                "Extremely massive gas giant, approaching brown dwarf territory"
            }
        }
    }

    /// Solar-system or well-known analog.
    pub fn analog(&self) -> &'static str {
        match self {
            MassRegime::Dwarf => "Similar to: Pluto, Moon",
            MassRegime::Terrestrial => "Similar to: Earth, Mars, Venus",
            MassRegime::SuperEarth => "Similar to: Kepler-452b",
            MassRegime::NeptuneLike => "Similar to: Neptune, Uranus",
            MassRegime::GasGiant => "Similar to: Jupiter, Saturn",
            MassRegime::SuperJupiter => "Larger than: Jupiter",
        }
    }
}

impl fmt::Display for MassRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TemperatureRegime {
    pub fn from_kelvin(temperature: Kelvin) -> Self {
        lookup_tier(&TEMPERATURE_TIERS, TemperatureRegime::UltraHot, temperature)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureRegime::Frozen => "Frozen World",
            TemperatureRegime::Cold => "Cold World",
            TemperatureRegime::Temperate => "Temperate World",
            TemperatureRegime::Hot => "Hot World",
            TemperatureRegime::UltraHot => "Ultra-Hot World",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemperatureRegime::Frozen => "Extremely cold, likely covered in ice",
            TemperatureRegime::Cold => "Below freezing, ice and frozen gases",
            TemperatureRegime::Temperate => "Moderate temperature, liquid water possible",
            TemperatureRegime::Hot => "High temperature, likely no liquid water",
            TemperatureRegime::UltraHot => "Extreme heat, molten surface possible",
        }
    }
}

impl fmt::Display for TemperatureRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Mass and temperature classification of one planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Catalog mass converted to Earth masses; `None` when unknown.
    pub mass_earth: Option<EarthMass>,
    pub mass_regime: MassRegime,
    pub mass_description: &'static str,
    pub mass_analog: &'static str,
    /// `None` when unknown.
    pub equilibrium_temperature_k: Option<Kelvin>,
    pub temperature_regime: TemperatureRegime,
    pub temperature_description: &'static str,
    pub assumed: Assumptions,
}

/// Classify a planet by mass and equilibrium temperature.
pub fn classify(planet: &PlanetRecord) -> ClassificationResult {
    let mut assumed = Assumptions::new();
    let mass_earth = assume_or(
        planet.normalized().mass_earth,
        DEFAULT_UNKNOWN,
        PlanetField::Mass,
        &mut assumed,
    );
    let temperature = assume_or(
        planet.equilibrium_temperature_k,
        DEFAULT_UNKNOWN,
        PlanetField::EquilibriumTemperatureK,
        &mut assumed,
    );

    let mass_regime = MassRegime::from_earth_masses(mass_earth);
    let temperature_regime = TemperatureRegime::from_kelvin(temperature);

    ClassificationResult {
        mass_earth: planet.normalized().mass_earth,
        mass_regime,
        mass_description: mass_regime.description(),
        mass_analog: mass_regime.analog(),
        equilibrium_temperature_k: planet.equilibrium_temperature_k,
        temperature_regime,
        temperature_description: temperature_regime.description(),
        assumed,
    }
}

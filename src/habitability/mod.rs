//! # Habitability scoring
//!
//! A deterministic weighted-sum scorer on a 0–100 scale. Five independent factors are
//! evaluated in a fixed order; the order only matters for how the factors are listed, not
//! for the total.
//!
//! | # | Factor                  | Points                                                  |
//! |---|-------------------------|---------------------------------------------------------|
//! | 1 | Habitable zone          | inside → 35                                             |
//! | 2 | Equilibrium temperature | 273 < T < 373 K → 25, else 200 < T < 400 K → 15         |
//! | 3 | Mass                    | 0.3 ≤ M ≤ 10 M⊕ → 20, else 10 < M < 50 M⊕ → 5           |
//! | 4 | Stellar temperature     | 3500 < T★ < 7000 K → 15, otherwise 5 (never 0)          |
//! | 5 | Eccentricity            | e < 0.2 → 5                                             |
//!
//! The total maps onto a four-tier [`HabitabilityVerdict`] (≥ 70, ≥ 40, ≥ 20, below).
//!
//! ## Unknown inputs
//!
//! Unknown mass, equilibrium temperature, semi-major axis and eccentricity count as 0;
//! unknown stellar mass counts as 1 M☉ and unknown stellar temperature as 5778 K. Unknown
//! data therefore counts *against* habitability, except for the stellar temperature, where
//! "no data" scores like a Sun-like star. Every substitution is listed in
//! [`HabitabilityAssessment::assumed`].
//!
//! A parallel [`earth`] scorer with its own factors and verdicts measures similarity to
//! the Earth.

pub mod earth;

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::constants::{EarthMass, Kelvin, DEFAULT_STELLAR_TEMPERATURE, DEFAULT_UNKNOWN};
use crate::normalize::{assume_or, Assumptions};
use crate::orbital::HabitableZone;
use crate::planet::{PlanetField, PlanetRecord};

/// Outcome of one scoring factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FactorStatus {
    Satisfied,
    Partial,
    Failed,
}

impl FactorStatus {
    /// Single-character marker used by list renderers.
    pub fn marker(&self) -> char {
        match self {
            FactorStatus::Satisfied => '✓',
            FactorStatus::Partial => '~',
            FactorStatus::Failed => '✗',
        }
    }
}

/// What a factor measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FactorKind {
    HabitableZone,
    EquilibriumTemperature,
    Mass,
    StellarTemperature,
    Eccentricity,
    OrbitalDistance,
}

impl FactorKind {
    pub fn label(&self) -> &'static str {
        match self {
            FactorKind::HabitableZone => "Habitable zone",
            FactorKind::EquilibriumTemperature => "Equilibrium temperature",
            FactorKind::Mass => "Mass",
            FactorKind::StellarTemperature => "Stellar temperature",
            FactorKind::Eccentricity => "Eccentricity",
            FactorKind::OrbitalDistance => "Orbital distance",
        }
    }
}

/// One scored factor with its justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Factor {
    pub kind: FactorKind,
    pub status: FactorStatus,
    pub points: u32,
    pub max_points: u32,
    pub justification: &'static str,
}

impl Factor {
    pub(crate) fn new(
        kind: FactorKind,
        status: FactorStatus,
        points: u32,
        max_points: u32,
        justification: &'static str,
    ) -> Self {
        Factor {
            kind,
            status,
            points,
            max_points,
            justification,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}/{})",
            self.status.marker(),
            self.justification,
            self.points,
            self.max_points
        )
    }
}

/// Verdict tiers, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HabitabilityVerdict {
    Unlikely,
    Marginal,
    Potential,
    HighlyPromising,
}

/// Inclusive lower score bounds, best first.
const HABITABILITY_VERDICTS: [(u32, HabitabilityVerdict); 3] = [
    (70, HabitabilityVerdict::HighlyPromising),
    (40, HabitabilityVerdict::Potential),
    (20, HabitabilityVerdict::Marginal),
];

impl HabitabilityVerdict {
    pub fn from_score(score: u32) -> Self {
        verdict_for(&HABITABILITY_VERDICTS, HabitabilityVerdict::Unlikely, score)
    }

    pub fn label(&self) -> &'static str {
        match self {
            HabitabilityVerdict::HighlyPromising => "Highly Promising",
            HabitabilityVerdict::Potential => "Potentially Habitable",
            HabitabilityVerdict::Marginal => "Marginally Habitable",
            HabitabilityVerdict::Unlikely => "Unlikely to be Habitable",
        }
    }
}

impl fmt::Display for HabitabilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// First verdict whose inclusive lower bound the score reaches, else `bottom`.
pub(crate) fn verdict_for<T: Copy>(table: &[(u32, T)], bottom: T, score: u32) -> T {
    table
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, verdict)| *verdict)
        .unwrap_or(bottom)
}

/// Habitability score of one planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitabilityAssessment {
    /// Integer in `[0, 100]`.
    pub score: u32,
    pub verdict: HabitabilityVerdict,
    pub factors: Vec<Factor>,
    pub habitable_zone: HabitableZone,
    pub assumed: Assumptions,
}

fn zone_factor(zone: &HabitableZone) -> Factor {
    if zone.inside_zone {
        Factor::new(
            FactorKind::HabitableZone,
            FactorStatus::Satisfied,
            35,
            35,
            "Orbits within habitable zone",
        )
    } else {
        Factor::new(
            FactorKind::HabitableZone,
            FactorStatus::Failed,
            0,
            35,
            "Outside habitable zone",
        )
    }
}

fn temperature_factor(temperature: Kelvin) -> Factor {
    let kind = FactorKind::EquilibriumTemperature;
    if temperature > 273.0 && temperature < 373.0 {
        Factor::new(
            kind,
            FactorStatus::Satisfied,
            25,
            25,
            "Temperature allows liquid water",
        )
    } else if temperature > 200.0 && temperature < 400.0 {
        Factor::new(
            kind,
            FactorStatus::Partial,
            15,
            25,
            "Temperature possibly suitable",
        )
    } else {
        Factor::new(kind, FactorStatus::Failed, 0, 25, "Temperature extreme")
    }
}

fn mass_factor(mass_earth: EarthMass) -> Factor {
    let kind = FactorKind::Mass;
    if (0.3..=10.0).contains(&mass_earth) {
        Factor::new(
            kind,
            FactorStatus::Satisfied,
            20,
            20,
            "Mass suitable for rocky planet",
        )
    } else if mass_earth > 10.0 && mass_earth < 50.0 {
        Factor::new(
            kind,
            FactorStatus::Partial,
            5,
            20,
            "Large planet, might be Neptune-like",
        )
    } else {
        Factor::new(
            kind,
            FactorStatus::Failed,
            0,
            20,
            "Mass not ideal for habitability",
        )
    }
}

fn stellar_factor(stellar_temperature: Kelvin) -> Factor {
    let kind = FactorKind::StellarTemperature;
    if stellar_temperature > 3500.0 && stellar_temperature < 7000.0 {
        Factor::new(
            kind,
            FactorStatus::Satisfied,
            15,
            15,
            "Star type suitable for life",
        )
    } else {
        Factor::new(kind, FactorStatus::Partial, 5, 15, "Star type less ideal")
    }
}

fn eccentricity_factor(eccentricity: f64) -> Factor {
    let kind = FactorKind::Eccentricity;
    if eccentricity < 0.2 {
        Factor::new(
            kind,
            FactorStatus::Satisfied,
            5,
            5,
            "Low orbital eccentricity",
        )
    } else {
        Factor::new(
            kind,
            FactorStatus::Partial,
            0,
            5,
            "High eccentricity causes temperature variations",
        )
    }
}

/// Score a planet's habitability.
///
/// Arguments
/// -----------------
/// * `planet`: the record to score. Never fails, whatever fields are unknown.
///
/// Return
/// ----------
/// * A fresh [`HabitabilityAssessment`]; factors are listed in scoring order (zone,
///   temperature, mass, stellar temperature, eccentricity).
///
/// See also
/// ------------
/// * [`HabitableZone::for_planet`] – Zone bounds used by the first factor.
/// * [`earth::compare_to_earth`] – Parallel Earth-similarity score.
pub fn assess_habitability(planet: &PlanetRecord) -> HabitabilityAssessment {
    let habitable_zone = HabitableZone::for_planet(planet);

    let mut assumed = Assumptions::new();
    assumed.extend(&habitable_zone.assumed);

    let temperature = assume_or(
        planet.equilibrium_temperature_k,
        DEFAULT_UNKNOWN,
        PlanetField::EquilibriumTemperatureK,
        &mut assumed,
    );
    let mass_earth = assume_or(
        planet.normalized().mass_earth,
        DEFAULT_UNKNOWN,
        PlanetField::Mass,
        &mut assumed,
    );
    let stellar_temperature = assume_or(
        planet.stellar_effective_temperature_k,
        DEFAULT_STELLAR_TEMPERATURE,
        PlanetField::StellarEffectiveTemperatureK,
        &mut assumed,
    );
    let eccentricity = assume_or(
        planet.eccentricity,
        DEFAULT_UNKNOWN,
        PlanetField::Eccentricity,
        &mut assumed,
    );

    let factors = vec![
        zone_factor(&habitable_zone),
        temperature_factor(temperature),
        mass_factor(mass_earth),
        stellar_factor(stellar_temperature),
        eccentricity_factor(eccentricity),
    ];
    let score = factors.iter().map(|f| f.points).sum();
    let verdict = HabitabilityVerdict::from_score(score);

    trace!(
        planet = planet.display_name(),
        score,
        verdict = verdict.label(),
        "habitability assessed"
    );

    HabitabilityAssessment {
        score,
        verdict,
        factors,
        habitable_zone,
        assumed,
    }
}

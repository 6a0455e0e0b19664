//! # Earth similarity
//!
//! Same weighted-sum architecture as [`assess_habitability`](super::assess_habitability)
//! with a different factor set. All ranges are inclusive.
//!
//! | Factor              | Similar (full points)   | Partially similar | Weight |
//! |---------------------|-------------------------|-------------------|--------|
//! | Mass                | 0.5 – 2 M⊕              | –                 | 25     |
//! | Orbital distance    | 0.7 – 1.5 AU            | –                 | 25     |
//! | Temperature         | 250 – 300 K             | 200 – 350 K → 15  | 25     |
//! | Eccentricity        | e < 0.1                 | –                 | 15     |
//! | Stellar temperature | 5000 – 6500 K           | –                 | 10     |
//!
//! Unlike the habitability scorer, an unknown stellar temperature defaults to 0 K here and
//! is therefore never "similar".

use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::{verdict_for, Factor, FactorKind, FactorStatus};
use crate::constants::{
    AstronomicalUnit, Day, EarthMass, Kelvin, DEFAULT_UNKNOWN, EARTH_EQUILIBRIUM_TEMPERATURE,
    EARTH_MASS, EARTH_SEMI_MAJOR_AXIS, EARTH_YEAR_DAYS,
};
use crate::normalize::{assume_or, Assumptions};
use crate::planet::{PlanetField, PlanetRecord};

/// Similarity tiers, least similar first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EarthSimilarityVerdict {
    VeryDifferent,
    SomewhatEarthLike,
    ModeratelySimilar,
    VerySimilar,
}

const EARTH_SIMILARITY_VERDICTS: [(u32, EarthSimilarityVerdict); 3] = [
    (70, EarthSimilarityVerdict::VerySimilar),
    (50, EarthSimilarityVerdict::ModeratelySimilar),
    (30, EarthSimilarityVerdict::SomewhatEarthLike),
];

impl EarthSimilarityVerdict {
    pub fn from_score(score: u32) -> Self {
        verdict_for(
            &EARTH_SIMILARITY_VERDICTS,
            EarthSimilarityVerdict::VeryDifferent,
            score,
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            EarthSimilarityVerdict::VerySimilar => "Very similar to Earth",
            EarthSimilarityVerdict::ModeratelySimilar => "Moderately similar to Earth",
            EarthSimilarityVerdict::SomewhatEarthLike => "Somewhat Earth-like",
            EarthSimilarityVerdict::VeryDifferent => "Very different from Earth",
        }
    }
}

impl fmt::Display for EarthSimilarityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Earth-similarity index of one planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthSimilarity {
    /// Integer in `[0, 100]`.
    pub score: u32,
    pub verdict: EarthSimilarityVerdict,
    pub factors: Vec<Factor>,
    pub assumed: Assumptions,
}

fn mass_similarity(mass_earth: EarthMass) -> Factor {
    if (0.5..=2.0).contains(&mass_earth) {
        Factor::new(
            FactorKind::Mass,
            FactorStatus::Satisfied,
            25,
            25,
            "Similar mass to Earth",
        )
    } else {
        Factor::new(
            FactorKind::Mass,
            FactorStatus::Failed,
            0,
            25,
            "Very different mass",
        )
    }
}

fn distance_similarity(semi_major_axis: AstronomicalUnit) -> Factor {
    if (0.7..=1.5).contains(&semi_major_axis) {
        Factor::new(
            FactorKind::OrbitalDistance,
            FactorStatus::Satisfied,
            25,
            25,
            "Similar orbital distance",
        )
    } else {
        Factor::new(
            FactorKind::OrbitalDistance,
            FactorStatus::Failed,
            0,
            25,
            "Very different orbital distance",
        )
    }
}

fn temperature_similarity(temperature: Kelvin) -> Factor {
    let kind = FactorKind::EquilibriumTemperature;
    if (250.0..=300.0).contains(&temperature) {
        Factor::new(kind, FactorStatus::Satisfied, 25, 25, "Similar temperature")
    } else if (200.0..=350.0).contains(&temperature) {
        Factor::new(
            kind,
            FactorStatus::Partial,
            15,
            25,
            "Somewhat similar temperature",
        )
    } else {
        Factor::new(
            kind,
            FactorStatus::Failed,
            0,
            25,
            "Very different temperature",
        )
    }
}

fn eccentricity_similarity(eccentricity: f64) -> Factor {
    if eccentricity < 0.1 {
        Factor::new(
            FactorKind::Eccentricity,
            FactorStatus::Satisfied,
            15,
            15,
            "Similar orbital shape",
        )
    } else {
        Factor::new(
            FactorKind::Eccentricity,
            FactorStatus::Partial,
            0,
            15,
            "Different orbital shape",
        )
    }
}

fn stellar_similarity(stellar_temperature: Kelvin) -> Factor {
    if (5000.0..=6500.0).contains(&stellar_temperature) {
        Factor::new(
            FactorKind::StellarTemperature,
            FactorStatus::Satisfied,
            10,
            10,
            "Similar star type",
        )
    } else {
        Factor::new(
            FactorKind::StellarTemperature,
            FactorStatus::Partial,
            0,
            10,
            "Different star type",
        )
    }
}

/// Score how closely a planet resembles the Earth.
///
/// Arguments
/// -----------------
/// * `planet`: the record to score. Unknown fields are read as 0 and listed in `assumed`.
///
/// Return
/// ----------
/// * An [`EarthSimilarity`] with factors in the order mass, orbital distance, temperature,
///   eccentricity, stellar temperature.
pub fn earth_similarity(planet: &PlanetRecord) -> EarthSimilarity {
    let mut assumed = Assumptions::new();
    let mut known = |value: Option<f64>, field: PlanetField| {
        assume_or(value, DEFAULT_UNKNOWN, field, &mut assumed)
    };

    let mass_earth = known(planet.normalized().mass_earth, PlanetField::Mass);
    let semi_major_axis = known(planet.semi_major_axis_au, PlanetField::SemiMajorAxis);
    let temperature = known(
        planet.equilibrium_temperature_k,
        PlanetField::EquilibriumTemperatureK,
    );
    let eccentricity = known(planet.eccentricity, PlanetField::Eccentricity);
    let stellar_temperature = known(
        planet.stellar_effective_temperature_k,
        PlanetField::StellarEffectiveTemperatureK,
    );

    let factors = vec![
        mass_similarity(mass_earth),
        distance_similarity(semi_major_axis),
        temperature_similarity(temperature),
        eccentricity_similarity(eccentricity),
        stellar_similarity(stellar_temperature),
    ];
    let score = factors.iter().map(|f| f.points).sum();
    let verdict = EarthSimilarityVerdict::from_score(score);

    trace!(
        planet = planet.display_name(),
        score,
        verdict = verdict.label(),
        "earth similarity assessed"
    );

    EarthSimilarity {
        score,
        verdict,
        factors,
        assumed,
    }
}

/// Mass of a planet relative to the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MassRelation {
    Lighter,
    Similar,
    MuchHeavier,
}

impl MassRelation {
    pub fn from_earth_masses(mass_earth: EarthMass) -> Self {
        if mass_earth > 1.5 {
            MassRelation::MuchHeavier
        } else if mass_earth > 0.8 {
            MassRelation::Similar
        } else {
            MassRelation::Lighter
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MassRelation::Lighter => "Lighter than Earth",
            MassRelation::Similar => "Similar to Earth",
            MassRelation::MuchHeavier => "Much heavier than Earth",
        }
    }
}

impl fmt::Display for MassRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reference values of the Earth shown next to a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthReference {
    pub mass_earth: EarthMass,
    pub semi_major_axis_au: AstronomicalUnit,
    pub orbital_period_days: Day,
    pub equilibrium_temperature_k: Kelvin,
}

pub const EARTH: EarthReference = EarthReference {
    mass_earth: EARTH_MASS,
    semi_major_axis_au: EARTH_SEMI_MAJOR_AXIS,
    orbital_period_days: EARTH_YEAR_DAYS,
    equilibrium_temperature_k: EARTH_EQUILIBRIUM_TEMPERATURE,
};

/// Side-by-side comparison of a planet with the Earth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthComparison {
    pub similarity: EarthSimilarity,
    pub mass_earth: Option<EarthMass>,
    /// Computed from 0 M⊕ when the mass is unknown.
    pub mass_relation: MassRelation,
    pub semi_major_axis_au: Option<AstronomicalUnit>,
    pub equilibrium_temperature_k: Option<Kelvin>,
    pub orbital_period_days: Option<Day>,
    /// Orbital period in Earth years, unknown when the period is.
    pub year_length_earth_years: Option<f64>,
    pub earth: EarthReference,
}

/// Compare a planet with the Earth.
///
/// See also
/// ------------
/// * [`earth_similarity`] – The similarity index embedded in the comparison.
pub fn compare_to_earth(planet: &PlanetRecord) -> EarthComparison {
    let similarity = earth_similarity(planet);
    let mass_earth = planet.normalized().mass_earth;

    EarthComparison {
        similarity,
        mass_earth,
        mass_relation: MassRelation::from_earth_masses(mass_earth.unwrap_or(DEFAULT_UNKNOWN)),
        semi_major_axis_au: planet.semi_major_axis_au,
        equilibrium_temperature_k: planet.equilibrium_temperature_k,
        orbital_period_days: planet.orbital_period_days,
        year_length_earth_years: planet.orbital_period_days.map(|p| p / EARTH_YEAR_DAYS),
        earth: EARTH,
    }
}

#[cfg(test)]
mod earth_test {
    use super::*;
    use approx::assert_relative_eq;

    fn earth_twin() -> PlanetRecord {
        PlanetRecord {
            mass_jupiter: Some(0.00315),
            semi_major_axis_au: Some(1.0),
            eccentricity: Some(0.0167),
            orbital_period_days: Some(365.25),
            equilibrium_temperature_k: Some(288.0),
            stellar_mass_solar: Some(1.0),
            stellar_effective_temperature_k: Some(5778.0),
            ..PlanetRecord::named("Earth twin")
        }
    }

    #[test]
    fn test_earth_twin_is_very_similar() {
        let similarity = earth_similarity(&earth_twin());
        assert_eq!(similarity.score, 100);
        assert_eq!(similarity.verdict, EarthSimilarityVerdict::VerySimilar);
        assert!(similarity
            .factors
            .iter()
            .all(|f| f.status == FactorStatus::Satisfied));
    }

    #[test]
    fn test_unknown_planet_is_very_different() {
        let similarity = earth_similarity(&PlanetRecord::default());
        // Only the eccentricity factor survives a fully unknown record.
        assert_eq!(similarity.score, 15);
        assert_eq!(similarity.verdict, EarthSimilarityVerdict::VeryDifferent);
        assert_eq!(similarity.assumed.len(), 5);
        let star = &similarity.factors[4];
        assert_eq!(star.kind, FactorKind::StellarTemperature);
        assert_eq!(star.points, 0);
    }

    #[test]
    fn test_ranges_are_inclusive() {
        assert_eq!(mass_similarity(0.5).points, 25);
        assert_eq!(mass_similarity(2.0).points, 25);
        assert_eq!(mass_similarity(2.01).points, 0);
        assert_eq!(distance_similarity(0.7).points, 25);
        assert_eq!(distance_similarity(1.5).points, 25);
        assert_eq!(temperature_similarity(250.0).points, 25);
        assert_eq!(temperature_similarity(300.0).points, 25);
        assert_eq!(temperature_similarity(350.0).points, 15);
        assert_eq!(temperature_similarity(200.0).points, 15);
        assert_eq!(temperature_similarity(199.0).points, 0);
        assert_eq!(eccentricity_similarity(0.1).points, 0);
        assert_eq!(stellar_similarity(5000.0).points, 10);
        assert_eq!(stellar_similarity(6500.0).points, 10);
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(
            EarthSimilarityVerdict::from_score(29),
            EarthSimilarityVerdict::VeryDifferent
        );
        assert_eq!(
            EarthSimilarityVerdict::from_score(30),
            EarthSimilarityVerdict::SomewhatEarthLike
        );
        assert_eq!(
            EarthSimilarityVerdict::from_score(50),
            EarthSimilarityVerdict::ModeratelySimilar
        );
        assert_eq!(
            EarthSimilarityVerdict::from_score(70),
            EarthSimilarityVerdict::VerySimilar
        );
    }

    #[test]
    fn test_compare_to_earth() {
        let hot_jupiter = PlanetRecord {
            mass_jupiter: Some(0.47),
            semi_major_axis_au: Some(0.0527),
            orbital_period_days: Some(4.23),
            equilibrium_temperature_k: Some(1284.0),
            ..PlanetRecord::named("51 Peg b")
        };
        let comparison = compare_to_earth(&hot_jupiter);
        assert_eq!(comparison.mass_relation, MassRelation::MuchHeavier);
        assert_relative_eq!(
            comparison.year_length_earth_years.unwrap(),
            4.23 / 365.25,
            epsilon = 1e-15
        );
        assert_eq!(comparison.earth, EARTH);
        assert_eq!(
            comparison.similarity.verdict,
            EarthSimilarityVerdict::VeryDifferent
        );

        let twin = compare_to_earth(&earth_twin());
        assert_eq!(twin.mass_relation, MassRelation::Similar);
        assert_relative_eq!(twin.year_length_earth_years.unwrap(), 1.0);
    }

    #[test]
    fn test_compare_unknown_period_and_mass() {
        let comparison = compare_to_earth(&PlanetRecord::named("sparse"));
        assert_eq!(comparison.year_length_earth_years, None);
        assert_eq!(comparison.mass_earth, None);
        assert_eq!(comparison.mass_relation, MassRelation::Lighter);
    }

    #[test]
    fn test_mass_relation_thresholds() {
        assert_eq!(MassRelation::from_earth_masses(1.5), MassRelation::Similar);
        assert_eq!(MassRelation::from_earth_masses(1.51), MassRelation::MuchHeavier);
        assert_eq!(MassRelation::from_earth_masses(0.8), MassRelation::Lighter);
    }
}

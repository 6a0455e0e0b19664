//! # Orbital and stellar mechanics
//!
//! Closed-form quantities derived from a planet's orbit and host star:
//!
//! - **Habitable zone** from the main-sequence mass–luminosity relation `L = M^3.5`, with a
//!   conservative liquid-water band `[sqrt(L / 1.1), sqrt(L / 0.53)]` AU.
//! - **Perihelion / aphelion** `a(1 - e)` and `a(1 + e)`.
//! - **Eccentricity class** with fixed thresholds (0.05, 0.2).
//! - **Tidal locking**, a coarse heuristic (`a < 0.1 AU` or `P < 10 d`), not a tidal-torque
//!   computation.
//! - **Mean orbital velocity** `2π a / P` in km/s.
//! - **Luminosity & main-sequence lifetime** `10 · M^-2.5` Gyr.
//! - **Spectral class** bucketed from the effective temperature, independently of any
//!   catalog spectral-type string.
//!
//! The free functions operate on plain numbers. [`HabitableZone`], [`OrbitProfile`] and
//! [`StellarProfile`] apply them to a [`PlanetRecord`], substituting documented defaults for
//! unknown inputs and reporting them in their [`Assumptions`].

use std::fmt;

use serde::Serialize;

use crate::constants::{
    AstronomicalUnit, Day, Kelvin, KilometerPerSecond, SolarMass, AU, DEFAULT_STELLAR_MASS,
    DEFAULT_UNKNOWN, DPI, HZ_INNER_FLUX, HZ_OUTER_FLUX, LIFETIME_EXPONENT,
    MASS_LUMINOSITY_EXPONENT, SECONDS_PER_DAY, SOLAR_LIFETIME_GYR,
};
use crate::normalize::{assume_or, Assumptions};
use crate::planet::{PlanetField, PlanetRecord};

/// Below this eccentricity an orbit is "nearly circular".
pub const NEARLY_CIRCULAR_MAX: f64 = 0.05;
/// Below this eccentricity an orbit is "slightly elliptical".
pub const SLIGHTLY_ELLIPTICAL_MAX: f64 = 0.2;
/// Orbits tighter than this are flagged as probably tidally locked.
pub const TIDAL_LOCK_AXIS_AU: AstronomicalUnit = 0.1;
/// Orbits shorter than this are flagged as probably tidally locked.
pub const TIDAL_LOCK_PERIOD_DAYS: Day = 10.0;

/// Stellar luminosity in solar units from the mass–luminosity relation.
pub fn luminosity(stellar_mass: SolarMass) -> f64 {
    stellar_mass.powf(MASS_LUMINOSITY_EXPONENT)
}

/// Rough main-sequence lifetime in billions of years.
pub fn main_sequence_lifetime_gyr(stellar_mass: SolarMass) -> f64 {
    SOLAR_LIFETIME_GYR * stellar_mass.powf(LIFETIME_EXPONENT)
}

/// Inner and outer habitable-zone radii (AU) for a star of the given luminosity.
pub fn habitable_zone_bounds(luminosity: f64) -> (AstronomicalUnit, AstronomicalUnit) {
    (
        (luminosity / HZ_INNER_FLUX).sqrt(),
        (luminosity / HZ_OUTER_FLUX).sqrt(),
    )
}

/// Closest distance to the star.
pub fn perihelion(semi_major_axis: AstronomicalUnit, eccentricity: f64) -> AstronomicalUnit {
    semi_major_axis * (1.0 - eccentricity)
}

/// Farthest distance from the star.
pub fn aphelion(semi_major_axis: AstronomicalUnit, eccentricity: f64) -> AstronomicalUnit {
    semi_major_axis * (1.0 + eccentricity)
}

/// Approximate tidal-locking flag. Either condition is sufficient.
pub fn is_likely_tidally_locked(semi_major_axis: AstronomicalUnit, period_days: Day) -> bool {
    semi_major_axis < TIDAL_LOCK_AXIS_AU || period_days < TIDAL_LOCK_PERIOD_DAYS
}

/// Mean orbital velocity in km/s, assuming a circular path of radius `a`.
///
/// Arguments
/// -----------------
/// * `semi_major_axis`: orbit size in AU.
/// * `period_days`: orbital period in days.
///
/// Return
/// ----------
/// * `None` when the period is zero, negative or not finite (velocity undefined).
pub fn mean_orbital_velocity(
    semi_major_axis: AstronomicalUnit,
    period_days: Day,
) -> Option<KilometerPerSecond> {
    if !period_days.is_finite() || period_days <= 0.0 {
        return None;
    }
    Some(DPI * semi_major_axis * AU / (period_days * SECONDS_PER_DAY))
}

/// Orbit shape bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EccentricityClass {
    NearlyCircular,
    SlightlyElliptical,
    HighlyElliptical,
}

impl EccentricityClass {
    pub fn from_eccentricity(eccentricity: f64) -> Self {
        if eccentricity < NEARLY_CIRCULAR_MAX {
            EccentricityClass::NearlyCircular
        } else if eccentricity < SLIGHTLY_ELLIPTICAL_MAX {
            EccentricityClass::SlightlyElliptical
        } else {
            EccentricityClass::HighlyElliptical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EccentricityClass::NearlyCircular => "Nearly Circular",
            EccentricityClass::SlightlyElliptical => "Slightly Elliptical",
            EccentricityClass::HighlyElliptical => "Highly Elliptical",
        }
    }
}

impl fmt::Display for EccentricityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Harvard spectral class derived from effective temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SpectralClass {
    M,
    K,
    G,
    F,
    A,
}

/// Exclusive lower bounds, hottest first. Anything not above the last bound is M-type.
const SPECTRAL_LOWER_BOUNDS: [(Kelvin, SpectralClass); 4] = [
    (7500.0, SpectralClass::A),
    (6000.0, SpectralClass::F),
    (5200.0, SpectralClass::G),
    (3700.0, SpectralClass::K),
];

impl SpectralClass {
    pub fn from_temperature(effective_temperature: Kelvin) -> Self {
        SPECTRAL_LOWER_BOUNDS
            .iter()
            .find(|(lower, _)| effective_temperature > *lower)
            .map(|(_, class)| *class)
            .unwrap_or(SpectralClass::M)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpectralClass::A => "A-type",
            SpectralClass::F => "F-type",
            SpectralClass::G => "G-type",
            SpectralClass::K => "K-type",
            SpectralClass::M => "M-type",
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            SpectralClass::A => "White",
            SpectralClass::F => "Yellow-white",
            SpectralClass::G => "Yellow",
            SpectralClass::K => "Orange",
            SpectralClass::M => "Red",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SpectralClass::A => "Hot and white",
            SpectralClass::F => "Slightly hotter than the Sun",
            SpectralClass::G => "Sun-like star",
            SpectralClass::K => "Cooler orange dwarf",
            SpectralClass::M => "Cool red dwarf",
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.colour())
    }
}

/// Conservative liquid-water zone of the host star and whether the planet orbits inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner_au: AstronomicalUnit,
    pub outer_au: AstronomicalUnit,
    pub inside_zone: bool,
    pub assumed: Assumptions,
}

impl HabitableZone {
    /// Habitable zone for a planet.
    ///
    /// Unknown stellar mass defaults to 1 M☉ and unknown semi-major axis to 0 AU (which is
    /// never inside the zone); both substitutions are reported in `assumed`.
    pub fn for_planet(planet: &PlanetRecord) -> Self {
        let mut assumed = Assumptions::new();
        let stellar_mass = assume_or(
            planet.stellar_mass_solar,
            DEFAULT_STELLAR_MASS,
            PlanetField::StellarMassSolar,
            &mut assumed,
        );
        let semi_major_axis = assume_or(
            planet.semi_major_axis_au,
            DEFAULT_UNKNOWN,
            PlanetField::SemiMajorAxis,
            &mut assumed,
        );

        let (inner_au, outer_au) = habitable_zone_bounds(luminosity(stellar_mass));
        let mut zone = HabitableZone {
            inner_au,
            outer_au,
            inside_zone: false,
            assumed,
        };
        zone.inside_zone = zone.contains(semi_major_axis);
        zone
    }

    /// Inclusive membership test for an arbitrary orbit size.
    pub fn contains(&self, semi_major_axis: AstronomicalUnit) -> bool {
        self.inner_au <= semi_major_axis && semi_major_axis <= self.outer_au
    }
}

/// Orbit-level analysis of a planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitProfile {
    /// Catalog value; `None` when unknown.
    pub semi_major_axis_au: Option<AstronomicalUnit>,
    /// Catalog value; `None` when unknown.
    pub eccentricity: Option<f64>,
    pub eccentricity_class: EccentricityClass,
    /// `None` when the semi-major axis is unknown. An unknown eccentricity reads as circular.
    pub perihelion_au: Option<AstronomicalUnit>,
    pub aphelion_au: Option<AstronomicalUnit>,
    pub orbital_period_days: Option<Day>,
    pub likely_tidally_locked: bool,
    /// `None` when the period or the semi-major axis is unknown.
    pub mean_velocity_km_s: Option<KilometerPerSecond>,
    pub assumed: Assumptions,
}

impl OrbitProfile {
    /// Orbit analysis for a planet.
    ///
    /// Unknown semi-major axis, eccentricity and period default to 0, which makes an
    /// entirely unknown orbit read as circular and tidally locked; the defaults are listed
    /// in `assumed`. The mean velocity is never computed from a defaulted input.
    pub fn for_planet(planet: &PlanetRecord) -> Self {
        let mut assumed = Assumptions::new();
        let a = assume_or(
            planet.semi_major_axis_au,
            DEFAULT_UNKNOWN,
            PlanetField::SemiMajorAxis,
            &mut assumed,
        );
        let e = assume_or(
            planet.eccentricity,
            DEFAULT_UNKNOWN,
            PlanetField::Eccentricity,
            &mut assumed,
        );
        let period = assume_or(
            planet.orbital_period_days,
            DEFAULT_UNKNOWN,
            PlanetField::OrbitalPeriodDays,
            &mut assumed,
        );

        let mean_velocity_km_s = planet
            .semi_major_axis_au
            .and_then(|a| mean_orbital_velocity(a, planet.orbital_period_days?));

        OrbitProfile {
            semi_major_axis_au: planet.semi_major_axis_au,
            eccentricity: planet.eccentricity,
            eccentricity_class: EccentricityClass::from_eccentricity(e),
            perihelion_au: planet.semi_major_axis_au.map(|a| perihelion(a, e)),
            aphelion_au: planet.semi_major_axis_au.map(|a| aphelion(a, e)),
            orbital_period_days: planet.orbital_period_days,
            likely_tidally_locked: is_likely_tidally_locked(a, period),
            mean_velocity_km_s,
            assumed,
        }
    }
}

/// Host-star analysis.
///
/// Quantities that depend on an unknown catalog value are reported as unknown rather
/// than computed from a default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarProfile {
    pub host_star: Option<String>,
    /// Spectral type string as published in the catalog.
    pub catalog_spectral_type: Option<String>,
    /// Class derived from the effective temperature.
    pub spectral_class: Option<SpectralClass>,
    pub effective_temperature_k: Option<Kelvin>,
    pub mass_solar: Option<SolarMass>,
    pub radius_solar: Option<f64>,
    pub luminosity_solar: Option<f64>,
    pub lifetime_gyr: Option<f64>,
}

impl StellarProfile {
    pub fn for_planet(planet: &PlanetRecord) -> Self {
        let mass = planet.stellar_mass_solar;
        let temperature = planet.stellar_effective_temperature_k;

        StellarProfile {
            host_star: planet.host_star.clone(),
            catalog_spectral_type: planet.spectral_type.clone(),
            spectral_class: temperature.map(SpectralClass::from_temperature),
            effective_temperature_k: temperature,
            mass_solar: mass,
            radius_solar: planet.stellar_radius_solar,
            luminosity_solar: mass.map(luminosity),
            lifetime_gyr: mass.map(main_sequence_lifetime_gyr),
        }
    }
}

//! # Constants and type definitions for Exoatlas
//!
//! This module centralizes the **physical constants**, **conversion factors**, **formula
//! defaults** and **common type aliases** used throughout the `exoatlas` library.
//!
//! ## Overview
//!
//! - Astronomical constants (AU in km, seconds per day, solar reference values)
//! - Unit conversions (Jupiter → Earth masses, parsecs → light-years)
//! - Documented fallbacks substituted by formulas that need a finite input
//! - Core type aliases used across the crate
//!
//! The fallbacks in the last block are *not* applied when a field is parsed: a missing
//! catalog value stays unknown on the [`PlanetRecord`](crate::planet::PlanetRecord). They
//! are only consumed by derived computations, which also record the substitution in their
//! [`Assumptions`](crate::normalize::Assumptions).

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for orbital circumferences
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Earth masses in one Jupiter mass
pub const JUPITER_TO_EARTH_MASS: f64 = 317.8;

/// Light-years in one parsec (catalog display precision)
pub const PARSEC_TO_LIGHT_YEAR: f64 = 3.26;

/// Effective temperature of the Sun in Kelvin
pub const SOLAR_EFFECTIVE_TEMPERATURE: Kelvin = 5778.0;

/// Main-sequence lifetime of the Sun in billions of years
pub const SOLAR_LIFETIME_GYR: f64 = 10.0;

/// Exponent of the main-sequence mass–luminosity relation, L ∝ M^3.5
pub const MASS_LUMINOSITY_EXPONENT: f64 = 3.5;

/// Exponent of the main-sequence lifetime scaling, t ∝ M^-2.5
pub const LIFETIME_EXPONENT: f64 = -2.5;

/// Stellar flux (in solar units) at the inner edge of the conservative habitable zone
pub const HZ_INNER_FLUX: f64 = 1.1;

/// Stellar flux (in solar units) at the outer edge of the conservative habitable zone
pub const HZ_OUTER_FLUX: f64 = 0.53;

// -------------------------------------------------------------------------------------------------
// Earth reference values
// -------------------------------------------------------------------------------------------------

/// Orbital period of the Earth in days
pub const EARTH_YEAR_DAYS: f64 = 365.25;

/// Equilibrium temperature of the Earth in Kelvin
pub const EARTH_EQUILIBRIUM_TEMPERATURE: Kelvin = 255.0;

/// Semi-major axis of the Earth's orbit
pub const EARTH_SEMI_MAJOR_AXIS: AstronomicalUnit = 1.0;

/// Mass of the Earth
pub const EARTH_MASS: EarthMass = 1.0;

// -------------------------------------------------------------------------------------------------
// Formula defaults for unknown inputs
// -------------------------------------------------------------------------------------------------

/// Stellar mass assumed when the catalog has none (solar masses)
pub const DEFAULT_STELLAR_MASS: SolarMass = 1.0;

/// Stellar effective temperature assumed by the habitability scorer when the catalog has none
pub const DEFAULT_STELLAR_TEMPERATURE: Kelvin = SOLAR_EFFECTIVE_TEMPERATURE;

/// Value substituted for unknown masses, distances, temperatures and eccentricities
pub const DEFAULT_UNKNOWN: f64 = 0.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Temperature in Kelvin
pub type Kelvin = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in light-years
pub type LightYear = f64;
/// Distance in parsecs
pub type Parsec = f64;
/// Mass in Earth masses
pub type EarthMass = f64;
/// Mass in Jupiter masses
pub type JupiterMass = f64;
/// Mass in solar masses
pub type SolarMass = f64;
/// Velocity in kilometers per second
pub type KilometerPerSecond = f64;
/// Duration in days
pub type Day = f64;

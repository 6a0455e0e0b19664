#![allow(dead_code)]

use approx::assert_relative_eq;
use camino::Utf8Path;
use exoatlas::catalog::Catalog;
use exoatlas::orbital::HabitableZone;
use exoatlas::planet::PlanetRecord;

pub const SAMPLE_CATALOG: &str = "tests/data/sample_catalog.csv";

pub fn sample_catalog() -> Catalog {
    Catalog::from_csv_path(Utf8Path::new(SAMPLE_CATALOG)).unwrap()
}

/// Fluent fixture builder; every field starts unknown.
#[derive(Debug, Clone, Default)]
pub struct PlanetFixture {
    record: PlanetRecord,
}

impl PlanetFixture {
    pub fn named(name: &str) -> Self {
        PlanetFixture {
            record: PlanetRecord::named(name),
        }
    }

    /// Mass in Jupiter masses.
    pub fn mass(mut self, v: f64) -> Self {
        self.record.mass_jupiter = Some(v);
        self
    }
    pub fn axis(mut self, v: f64) -> Self {
        self.record.semi_major_axis_au = Some(v);
        self
    }
    pub fn eccentricity(mut self, v: f64) -> Self {
        self.record.eccentricity = Some(v);
        self
    }
    pub fn period(mut self, v: f64) -> Self {
        self.record.orbital_period_days = Some(v);
        self
    }
    pub fn temperature(mut self, v: f64) -> Self {
        self.record.equilibrium_temperature_k = Some(v);
        self
    }
    pub fn star(mut self, mass_solar: f64, effective_temperature_k: f64) -> Self {
        self.record.stellar_mass_solar = Some(mass_solar);
        self.record.stellar_effective_temperature_k = Some(effective_temperature_k);
        self
    }
    pub fn build(self) -> PlanetRecord {
        self.record
    }
}

/// The Earth seen from outside: 1 M⊕ at 1 AU around a solar twin.
pub fn earth_analog() -> PlanetRecord {
    PlanetFixture::named("Earth analog")
        .mass(0.00315)
        .axis(1.0)
        .eccentricity(0.0167)
        .period(365.25)
        .temperature(288.0)
        .star(1.0, 5778.0)
        .build()
}

pub fn assert_zone_close(actual: &HabitableZone, inner_au: f64, outer_au: f64, epsilon: f64) {
    assert_relative_eq!(actual.inner_au, inner_au, epsilon = epsilon);
    assert_relative_eq!(actual.outer_au, outer_au, epsilon = epsilon);
}

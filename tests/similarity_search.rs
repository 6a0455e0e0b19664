mod common;

use exoatlas::catalog::Catalog;
use exoatlas::explorer::{Analysis, Explorer};
use exoatlas::planet::{PlanetField, PlanetId};
use exoatlas::similarity::{find_similar, find_similar_by_id, SimilarityParams};

use crate::common::{earth_analog, sample_catalog, PlanetFixture};

#[test]
fn test_similar_to_kepler_452() {
    let catalog = sample_catalog();
    let matches = find_similar_by_id(&catalog, PlanetId(5), &SimilarityParams::default()).unwrap();

    let found: Vec<(&str, bool, bool, bool)> = matches
        .iter()
        .map(|m| {
            (
                m.planet.display_name(),
                m.mass_match,
                m.distance_match,
                m.temperature_match,
            )
        })
        .collect();
    assert_eq!(
        found,
        vec![
            ("Kepler-22 b", false, true, true),
            ("Kepler-442 b", true, false, true),
        ]
    );
    // Both masses are unknown, so the mass test passed on defaults.
    assert!(matches[1].assumed.contains(PlanetField::Mass));
}

#[test]
fn test_planets_without_neighbours() {
    let catalog = sample_catalog();
    for id in [1, 2, 3, 4, 6, 7, 9] {
        assert!(
            find_similar_by_id(&catalog, PlanetId(id), &SimilarityParams::default())
                .unwrap()
                .is_empty(),
            "planet {id} should have no match"
        );
    }
}

#[test]
fn test_identical_duplicate_is_not_self() {
    let catalog = Catalog::new(vec![earth_analog(), earth_analog(), earth_analog()]);
    let reference = catalog.get(PlanetId(1)).unwrap();
    let matches = find_similar(&catalog, reference, &SimilarityParams::default());

    let ids: Vec<PlanetId> = matches.iter().map(|m| m.planet.id).collect();
    assert_eq!(ids, vec![PlanetId(0), PlanetId(2)]);
    assert!(matches.iter().all(|m| m.match_count() == 3));
}

#[test]
fn test_reference_outside_catalog() {
    let catalog = sample_catalog();
    let outsider = PlanetFixture::named("outsider")
        .mass(0.0035)
        .axis(1.0)
        .temperature(270.0)
        .build();
    let matches = find_similar(&catalog, &outsider, &SimilarityParams::default());
    let names: Vec<&str> = matches.iter().map(|m| m.planet.display_name()).collect();
    assert_eq!(names, vec!["Kepler-22 b", "Proxima Cen b", "Kepler-452 b"]);
    // Kepler-452 b has no catalog mass.
    assert!(matches[2].assumed.contains(PlanetField::Mass));
    assert!(matches[0].assumed.is_empty());
}

#[test]
fn test_custom_params_through_explorer() {
    let params = SimilarityParams::builder()
        .min_matches(1)
        .max_results(3)
        .build()
        .unwrap();
    let explorer = Explorer::with_similarity_params(sample_catalog(), params);

    let id = explorer.select_by_name("Kepler-452 b").ok();
    let matches = explorer.similar(id).ready().unwrap();
    assert_eq!(matches.len(), 3);

    assert_eq!(explorer.similar(None), Analysis::NoPlanetSelected);
}

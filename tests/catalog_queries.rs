mod common;

use approx::assert_relative_eq;
use exoatlas::catalog::{Catalog, CatalogFilter, CatalogSummary, RawFilterInput};
use exoatlas::exo_errors::ExoError;
use exoatlas::planet::PlanetId;

use crate::common::sample_catalog;

fn names<'a>(planets: &[&'a exoatlas::planet::PlanetRecord]) -> Vec<&'a str> {
    planets.iter().map(|p| p.display_name()).collect()
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 10);

    let peg = catalog.get(PlanetId(1)).unwrap();
    assert_eq!(peg.host_star.as_deref(), Some("51 Peg"));
    assert_eq!(peg.discovery_facility.as_deref(), Some("Haute-Provence Observatory"));
    assert_eq!(peg.spectral_type.as_deref(), Some("G2 IV"));
    assert_relative_eq!(
        peg.normalized().distance_light_years.unwrap(),
        15.47 * 3.26,
        epsilon = 1e-12
    );

    let young = catalog.get(PlanetId(7)).unwrap();
    assert_eq!(young.eccentricity, None);
    assert_eq!(young.orbital_period_days, None);
}

#[test]
fn test_filter_by_method() {
    let catalog = sample_catalog();
    let filter = CatalogFilter::builder()
        .discovery_method("Transit")
        .build()
        .unwrap();
    assert_eq!(
        names(&catalog.filter(&filter)),
        vec![
            "Kepler-22 b",
            "TRAPPIST-1 e",
            "HD 209458 b",
            "Kepler-452 b",
            "GJ 1214 b",
            "Kepler-442 b",
        ]
    );
}

#[test]
fn test_filter_from_form_input() {
    let catalog = sample_catalog();

    let recent = CatalogFilter::from_raw(&RawFilterInput {
        year_min: "2010",
        ..RawFilterInput::default()
    });
    assert_eq!(
        catalog.summarize(&recent),
        CatalogSummary {
            total: 10,
            matching: 6
        }
    );

    let nearby = CatalogFilter::from_raw(&RawFilterInput {
        max_distance_ly: "50",
        ..RawFilterInput::default()
    });
    assert_eq!(
        names(&catalog.filter(&nearby)),
        vec!["TRAPPIST-1 e", "Proxima Cen b", "GJ 1214 b", "HD 40307 g"]
    );

    // A zero maximum means "no maximum".
    let unbounded = CatalogFilter::from_raw(&RawFilterInput {
        max_distance_ly: "0",
        mass_max_jupiter: "0",
        year_max: "0",
        ..RawFilterInput::default()
    });
    assert_eq!(catalog.filter(&unbounded).len(), 10);
}

#[test]
fn test_filter_combines_constraints() {
    let catalog = sample_catalog();
    let filter = CatalogFilter::builder()
        .name_query("KEPLER")
        .year_range(2012, 3000)
        .mass_range_jupiter(0.0, 1.0)
        .build()
        .unwrap();
    // Unknown masses compare as 0 and stay in range.
    assert_eq!(
        names(&catalog.filter(&filter)),
        vec!["Kepler-452 b", "Kepler-442 b"]
    );
}

#[test]
fn test_search_and_autocomplete() {
    let catalog = sample_catalog();
    assert_eq!(
        names(&catalog.search_by_name("kep", 10)),
        vec!["Kepler-22 b", "Kepler-452 b", "Kepler-442 b"]
    );
    assert_eq!(names(&catalog.search_by_name(" b", 2)), vec!["Kepler-22 b", "51 Peg b"]);
    assert!(catalog.autocomplete("K").is_empty());
    assert_eq!(catalog.autocomplete("hd ").len(), 2);
}

#[test]
fn test_find_by_name() {
    let catalog = sample_catalog();
    assert_eq!(catalog.find_by_name("Proxima Cen b"), Ok(PlanetId(3)));
    assert_eq!(
        catalog.find_by_name("Proxima b"),
        Err(ExoError::UnknownPlanet("Proxima b".into()))
    );
}

#[test]
fn test_json_and_csv_agree() {
    let csv = "Planet Name,Mass,Distance,Discovery Method\nKepler-22 b,0.11,195.5,Transit\n";
    let json = r#"[{"Planet Name": "Kepler-22 b", "Mass": 0.11, "Distance": "195.5",
                    "Discovery Method": "Transit"}]"#;
    let from_csv = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
    let from_json = Catalog::from_json_str(json).unwrap();
    assert_eq!(from_csv, from_json);
}

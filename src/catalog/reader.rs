//! CSV and JSON catalog ingestion.
//!
//! Both formats are keyed by column name. Headers are matched with
//! [`PlanetField::from_key`], so `"Planet Name"`, `"planet_name"` and `"planetName"` all
//! address the same field; unrecognised columns are ignored.
//!
//! Cells are never validated here. Every cell is handed to
//! [`PlanetRecord::from_raw`](crate::planet::PlanetRecord::from_raw)
//! which turns anything unreadable into an unknown value. Only a source that is not
//! valid CSV/JSON at all, or that carries none of the known columns, is an error.

use std::fs::File;
use std::io::Read;

use camino::Utf8Path;
use csv::{ReaderBuilder, Trim};
use itertools::Itertools;
use serde_json::Value;
use tracing::{debug, warn};

use super::Catalog;
use crate::exo_errors::ExoError;
use crate::planet::{PlanetField, RawPlanetRecord, RawValue};

impl Catalog {
    /// Read a catalog from CSV text with a header row.
    ///
    /// Rows may be shorter or longer than the header. A row that is not valid UTF-8 is
    /// skipped with a warning.
    ///
    /// Arguments
    /// -----------------
    /// * `reader`: any byte source.
    ///
    /// Return
    /// ----------
    /// * The parsed [`Catalog`], or
    ///   - `ExoError::InvalidCatalogLayout` if no header names a known field,
    ///   - `ExoError::CsvError` on a read failure.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ExoError> {
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let fields: Vec<Option<PlanetField>> =
            headers.iter().map(PlanetField::from_key).collect();
        if fields.iter().all(Option::is_none) {
            return Err(ExoError::InvalidCatalogLayout(format!(
                "no known column in header [{}]",
                headers.iter().join(", ")
            )));
        }

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for (line, record) in csv_reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(err) if matches!(err.kind(), csv::ErrorKind::Utf8 { .. }) => {
                    warn!(row = line + 1, error = %err, "skipping undecodable catalog row");
                    skipped += 1;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let mut raw = RawPlanetRecord::new();
            for (field, cell) in fields.iter().zip(record.iter()) {
                if let Some(field) = field {
                    raw.insert(*field, cell);
                }
            }
            rows.push(raw);
        }

        debug!(rows = rows.len(), skipped, "CSV catalog read");
        Ok(Catalog::from_raw_records(rows))
    }

    /// Read a CSV catalog file.
    ///
    /// See also
    /// ------------
    /// * [`Catalog::from_csv_reader`] – Format details and errors.
    pub fn from_csv_path(path: &Utf8Path) -> Result<Self, ExoError> {
        let file = File::open(path)?;
        debug!(%path, "reading CSV catalog");
        Catalog::from_csv_reader(file)
    }

    /// Read a catalog from a JSON array of objects.
    ///
    /// Numbers and strings are kept as raw values; `null` is treated as an absent cell.
    /// Booleans, arrays and nested objects are kept as their JSON text, which then parses
    /// as unknown. An array element that is not an object is skipped with a warning.
    ///
    /// Return
    /// ----------
    /// * `ExoError::JsonError` if the text is not JSON, `ExoError::InvalidCatalogLayout`
    ///   if the top-level value is not an array.
    pub fn from_json_str(json: &str) -> Result<Self, ExoError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(items) = value else {
            return Err(ExoError::InvalidCatalogLayout(
                "JSON catalog must be an array of objects".into(),
            ));
        };

        let mut rows = Vec::with_capacity(items.len());
        let mut skipped = 0usize;
        for (index, item) in items.into_iter().enumerate() {
            let Value::Object(map) = item else {
                warn!(index, "skipping non-object catalog entry");
                skipped += 1;
                continue;
            };
            let pairs = map
                .into_iter()
                .filter_map(|(key, value)| json_cell(value).map(|cell| (key, cell)));
            rows.push(RawPlanetRecord::from_pairs(pairs));
        }

        debug!(rows = rows.len(), skipped, "JSON catalog read");
        Ok(Catalog::from_raw_records(rows))
    }
}

fn json_cell(value: Value) -> Option<RawValue> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64().map(RawValue::Number),
        Value::String(s) => Some(RawValue::Text(s)),
        other => Some(RawValue::Text(other.to_string())),
    }
}

#[cfg(test)]
mod reader_test {
    use super::*;
    use crate::planet::PlanetId;

    const CSV: &str = "\
Planet Name,Planet Host,Mass,Orbit Semi-Major Axis,Eccentricity,Discovery Year,Notes
Kepler-22 b,Kepler-22,0.11,0.812,,2011,ignored
51 Peg b , 51 Peg ,0.47 ± 0.02,0.0527,0.013,1995
broken,host,n/a,-1,1.5,unknown,x,extra
";

    #[test]
    fn test_csv_lenient_cells() {
        let catalog = Catalog::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let kepler = catalog.get(PlanetId(0)).unwrap();
        assert_eq!(kepler.host_star.as_deref(), Some("Kepler-22"));
        assert_eq!(kepler.eccentricity, None);
        assert_eq!(kepler.discovery_year, Some(2011));

        let peg = catalog.get(PlanetId(1)).unwrap();
        assert_eq!(peg.display_name(), "51 Peg b");
        assert_eq!(peg.mass_jupiter, Some(0.47));
        assert_eq!(peg.discovery_method, None);

        let broken = catalog.get(PlanetId(2)).unwrap();
        assert_eq!(broken.mass_jupiter, None);
        assert_eq!(broken.semi_major_axis_au, None);
        assert_eq!(broken.eccentricity, None);
        assert_eq!(broken.discovery_year, None);
    }

    #[test]
    fn test_csv_without_known_columns() {
        let err = Catalog::from_csv_reader("foo,bar\n1,2\n".as_bytes()).unwrap_err();
        assert_eq!(
            err,
            ExoError::InvalidCatalogLayout("no known column in header [foo, bar]".into())
        );
    }

    #[test]
    fn test_csv_path_missing_file() {
        let err = Catalog::from_csv_path(Utf8Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, ExoError::IoError(_)));
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"[
            {"Planet Name": "TRAPPIST-1 e", "Mass": 0.00218, "Eccentricity": 0.005,
             "Discovery Year": "2017", "Stellar Mass": null, "Extra": true},
            {"planetName": "GJ 1214 b", "mass": "0.0257", "spectralType": ["M4.5"]},
            42
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let trappist = catalog.get(PlanetId(0)).unwrap();
        assert_eq!(trappist.mass_jupiter, Some(0.00218));
        assert_eq!(trappist.discovery_year, Some(2017));
        assert_eq!(trappist.stellar_mass_solar, None);

        let gj = catalog.get(PlanetId(1)).unwrap();
        assert_eq!(gj.display_name(), "GJ 1214 b");
        assert_eq!(gj.mass_jupiter, Some(0.0257));
        assert_eq!(gj.spectral_type.as_deref(), Some(r#"["M4.5"]"#));
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(ExoError::JsonError(_))
        ));
        assert_eq!(
            Catalog::from_json_str(r#"{"Planet Name": "x"}"#),
            Err(ExoError::InvalidCatalogLayout(
                "JSON catalog must be an array of objects".into()
            ))
        );
    }
}

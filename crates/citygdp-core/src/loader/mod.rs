// crates/citygdp-core/src/loader/mod.rs

//! # Data Loader
//!
//! The acquisition side of the crate: turns a JSON document (embedded,
//! on disk, or fetched) into a validated [`Dataset`]. This is the only
//! place where errors are surfaced; everything downstream works on the
//! already-resolved collection.

use crate::error::{CityGdpError, Result};
use crate::model::convert::from_raw;
use crate::model::{Dataset, Region};
use crate::raw::DatasetRaw;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

#[cfg(feature = "json")]
pub mod common_io;

#[cfg(feature = "fetch")]
mod fetch;

/// The bundled fixture, parsed at most once per process.
static EMBEDDED_DATASET: OnceCell<Dataset> = OnceCell::new();

const EMBEDDED_JSON: &str = include_str!("../../data/city-gdp.json");

/// Unit of the `population` field in the source document.
///
/// The dashboard works in 万人 throughout. A source holding raw headcounts
/// must say so explicitly; the loader never guesses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopulationUnit {
    /// Already in 万人 (ten-thousands of people).
    #[default]
    TenThousand,
    /// Raw headcount; divided by 10 000 on load.
    Persons,
}

impl PopulationUnit {
    pub fn to_ten_thousand(self, value: f64) -> f64 {
        match self {
            PopulationUnit::TenThousand => value,
            PopulationUnit::Persons => value / 10_000.0,
        }
    }
}

impl FromStr for PopulationUnit {
    type Err = CityGdpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ten-thousand" | "wan" | "万人" => Ok(PopulationUnit::TenThousand),
            "persons" | "people" | "人" => Ok(PopulationUnit::Persons),
            other => Err(CityGdpError::InvalidData(format!(
                "unknown population unit {other:?} (expected ten-thousand or persons)"
            ))),
        }
    }
}

/// Load-time configuration.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub population_unit: PopulationUnit,
    /// Keep only cities in these regions. `None` (or empty) keeps all.
    pub regions: Option<Vec<Region>>,
}

impl Dataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "city-gdp.json"
    }

    /// The dataset bundled into the binary.
    pub fn embedded() -> Result<&'static Dataset> {
        EMBEDDED_DATASET.get_or_try_init(|| {
            let db = Self::from_json_str(EMBEDDED_JSON, &LoadOptions::default())?;
            info!(cities = db.len(), "embedded dataset loaded");
            Ok(db)
        })
    }

    /// The bundled dataset with load options applied (region filter,
    /// population unit). Parses a fresh copy.
    pub fn embedded_with(options: &LoadOptions) -> Result<Self> {
        Self::from_json_str(EMBEDDED_JSON, options)
    }

    /// Parses a JSON document of the form `{ "cities": [...] }` or `[...]`.
    ///
    /// A bad value inside a city is reported as [`CityGdpError::Field`] with
    /// the path to it.
    pub fn from_json_str(text: &str, options: &LoadOptions) -> Result<Self> {
        Self::from_deserializer(serde_json::Deserializer::from_str(text), options)
    }

    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        Self::from_deserializer(serde_json::Deserializer::from_reader(reader), options)
    }

    fn from_deserializer<'de, R: serde_json::de::Read<'de>>(
        mut de: serde_json::Deserializer<R>,
        options: &LoadOptions,
    ) -> Result<Self> {
        let raw: DatasetRaw = serde_path_to_error::deserialize(&mut de)?;
        de.end()?;
        Ok(Dataset::new(from_raw(raw.into_cities(), options)?))
    }

    /// **Standard Loader:** reads a dataset file. With the `compact`
    /// feature, `*.gz` files are decompressed transparently.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let db = Self::from_reader(reader, options)?;
        info!(cities = db.len(), path = %path.display(), "dataset loaded");
        Ok(db)
    }

    /// Loads `data/city-gdp.json` from the crate's data directory.
    #[cfg(feature = "json")]
    pub fn load_default() -> Result<Self> {
        let path = Self::default_data_dir().join(Self::default_dataset_filename());
        Self::load_from_path(path, &LoadOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses_and_is_cached() {
        let a = Dataset::embedded().unwrap();
        let b = Dataset::embedded().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), 10);
        assert!(a.find("1").is_some());
    }

    #[test]
    fn embedded_with_region_filter() {
        let options = LoadOptions {
            regions: Some(vec![Region::SouthChina]),
            ..LoadOptions::default()
        };
        let db = Dataset::embedded_with(&options).unwrap();
        assert!(!db.is_empty());
        assert!(db.cities().iter().all(|c| c.region == Region::SouthChina));
    }

    #[test]
    fn empty_document_is_an_empty_dataset() {
        let db = Dataset::from_json_str("{}", &LoadOptions::default()).unwrap();
        assert!(db.is_empty());
        let db = Dataset::from_json_str("[]", &LoadOptions::default()).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Dataset::from_json_str("{\"cities\": [", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, CityGdpError::Json(_)));
    }

    #[test]
    fn misspelled_top_level_key_is_an_error() {
        let err = Dataset::from_json_str(r#"{"citys": [{"id": 1}]}"#, &LoadOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("citys"), "{err}");
    }

    #[test]
    fn bad_city_value_names_the_field() {
        let json = r#"{"cities": [{"id": 1, "name": "北京", "region": "华北",
                       "population": "lots", "area": 1, "gdpData": []}]}"#;
        let err = Dataset::from_json_str(json, &LoadOptions::default()).unwrap_err();
        match err {
            CityGdpError::Field { path, .. } => assert_eq!(path, "cities[0].population"),
            other => panic!("expected a field error, got {other}"),
        }

        let bare = r#"[{"id": 1, "name": "A", "region": "华北", "population": 1, "area": 1,
                       "gdpData": [{"year": 2023}]}]"#;
        let err = Dataset::from_json_str(bare, &LoadOptions::default()).unwrap_err();
        assert!(err.to_string().contains("[0].gdpData[0]"), "{err}");
        assert!(err.to_string().contains("gdp"), "{err}");
    }

    #[test]
    fn trailing_characters_are_an_error() {
        let err = Dataset::from_json_str("[] x", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, CityGdpError::Json(_)));
    }

    #[test]
    fn population_unit_parsing() {
        assert_eq!("persons".parse::<PopulationUnit>().unwrap(), PopulationUnit::Persons);
        assert_eq!("Ten-Thousand".parse::<PopulationUnit>().unwrap(), PopulationUnit::TenThousand);
        assert!("dozens".parse::<PopulationUnit>().is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let err = Dataset::load_from_path("/definitely/not/here.json", &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, CityGdpError::NotFound(_)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn bundled_file_matches_embedded() {
        let from_disk = Dataset::load_default().unwrap();
        assert_eq!(&from_disk, Dataset::embedded().unwrap());
    }
}

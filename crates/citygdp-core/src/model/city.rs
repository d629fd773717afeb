// crates/citygdp-core/src/model/city.rs
use super::region::Region;
use crate::common::DatasetStats;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Stable city identifier.
///
/// Datasets carry ids either as JSON numbers or strings; both are stored in
/// their canonical string form so `1` and `"1"` refer to the same city.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(String);

impl CityId {
    pub fn new(id: impl Into<String>) -> Self {
        CityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for CityId {
    fn from(s: &str) -> Self {
        CityId(s.to_string())
    }
}

impl AsRef<str> for CityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One point of a GDP series. `gdp` is in 亿元.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GdpPoint {
    pub year: i32,
    pub gdp: f64,
}

/// A city entry.
///
/// `gdp_data` is ascending by year without duplicates (the loader enforces
/// this). `population` is in 万人, `area` in km².
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub name_en: String,
    pub region: Region,
    pub population: f64,
    pub area: f64,
    pub gdp_data: Vec<GdpPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_en(&self) -> &str {
        &self.name_en
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Series values without years, e.g. for a sparkline.
    pub fn gdp_values(&self) -> Vec<f64> {
        self.gdp_data.iter().map(|p| p.gdp).collect()
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.gdp_data.last().map(|p| p.year)
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn alt_name_str(&self) -> Option<&str> {
        Some(&self.name_en)
    }
}

/// The loaded city collection.
///
/// Loaded once and then shared read-only; every analytics and pipeline
/// function borrows from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub cities: Vec<City>,
}

impl Dataset {
    pub fn new(cities: Vec<City>) -> Self {
        Dataset { cities }
    }

    /// All cities in load order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id.as_str() == id)
    }

    /// Looks a city up by id, falling back to an exact (case-insensitive)
    /// name or English name match.
    pub fn find_by_id_or_name(&self, key: &str) -> Option<&City> {
        let key = key.trim();
        self.find(key)
            .or_else(|| self.cities.iter().find(|c| c.is_named(key)))
    }

    pub fn stats(&self) -> DatasetStats {
        let regions: BTreeSet<Region> = self.cities.iter().map(|c| c.region).collect();
        let years = self.cities.iter().flat_map(|c| c.gdp_data.iter().map(|p| p.year));
        let (first_year, last_year) = years.fold((None, None), |(lo, hi), y| {
            (
                Some(lo.map_or(y, |lo: i32| lo.min(y))),
                Some(hi.map_or(y, |hi: i32| hi.max(y))),
            )
        });
        DatasetStats {
            cities: self.cities.len(),
            regions: regions.len(),
            first_year,
            last_year,
        }
    }
}

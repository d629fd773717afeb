// crates/citygdp-core/src/raw.rs
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// City id as it appears in JSON: number or string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdRaw {
    Number(i64),
    Text(String),
}

impl IdRaw {
    pub fn into_string(self) -> String {
        match self {
            IdRaw::Number(n) => n.to_string(),
            IdRaw::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GdpPointRaw {
    pub year: i32,
    pub gdp: f64,
}

/// Raw city structure as it comes from JSON:
/// {
///   "id": 1,
///   "name": "北京",
///   "nameEn": "Beijing",
///   "region": "华北",
///   "population": 2186,
///   "area": 16410.5,
///   "gdpData": [{ "year": 2022, "gdp": 41611 }, ...],
///   "description": "..."
/// }
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRaw {
    pub id: IdRaw,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    pub region: String,
    pub population: f64,
    pub area: f64,
    #[serde(default)]
    pub gdp_data: Vec<GdpPointRaw>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Top-level document: either `{ "cities": [...] }` or a bare array.
///
/// The wrapped form accepts no other key, so a misspelled `cities` is an
/// error rather than an empty dataset.
#[derive(Debug)]
pub struct DatasetRaw {
    cities: Vec<CityRaw>,
}

impl DatasetRaw {
    pub fn into_cities(self) -> Vec<CityRaw> {
        self.cities
    }
}

impl<'de> Deserialize<'de> for DatasetRaw {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DatasetVisitor)
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = DatasetRaw;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of cities or an object with a `cities` array")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<DatasetRaw, A::Error> {
        let mut cities = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(city) = seq.next_element()? {
            cities.push(city);
        }
        Ok(DatasetRaw { cities })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DatasetRaw, A::Error> {
        let mut cities = None;
        while let Some(key) = map.next_key::<String>()? {
            if key != "cities" {
                return Err(de::Error::unknown_field(&key, &["cities"]));
            }
            if cities.is_some() {
                return Err(de::Error::duplicate_field("cities"));
            }
            cities = Some(map.next_value()?);
        }
        Ok(DatasetRaw {
            cities: cities.unwrap_or_default(),
        })
    }
}

// crates/citygdp-core/src/model/region.rs
use crate::error::{CityGdpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic region of a city.
///
/// Serialized with its Chinese label (`"华东"`), which is what the dashboard
/// displays and what datasets carry. [`FromStr`] also accepts the English
/// slug (`"east"`), case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "华北")]
    NorthChina,
    #[serde(rename = "华东")]
    EastChina,
    #[serde(rename = "华南")]
    SouthChina,
    #[serde(rename = "华中")]
    CentralChina,
    #[serde(rename = "西南")]
    Southwest,
    #[serde(rename = "西北")]
    Northwest,
    #[serde(rename = "东北")]
    Northeast,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::NorthChina,
        Region::EastChina,
        Region::SouthChina,
        Region::CentralChina,
        Region::Southwest,
        Region::Northwest,
        Region::Northeast,
    ];

    /// Display label, e.g. `"华南"`.
    pub fn label(self) -> &'static str {
        match self {
            Region::NorthChina => "华北",
            Region::EastChina => "华东",
            Region::SouthChina => "华南",
            Region::CentralChina => "华中",
            Region::Southwest => "西南",
            Region::Northwest => "西北",
            Region::Northeast => "东北",
        }
    }

    /// ASCII slug accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Region::NorthChina => "north",
            Region::EastChina => "east",
            Region::SouthChina => "south",
            Region::CentralChina => "central",
            Region::Southwest => "southwest",
            Region::Northwest => "northwest",
            Region::Northeast => "northeast",
        }
    }

    /// Parses a region filter value. An empty (or blank) string means
    /// "no filter" and yields `Ok(None)`.
    pub fn parse_filter(s: &str) -> Result<Option<Region>> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Region {
    type Err = CityGdpError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.label() == s || r.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| CityGdpError::UnknownRegion(s.to_string()))
    }
}

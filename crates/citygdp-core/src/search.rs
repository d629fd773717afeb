// crates/citygdp-core/src/search.rs

//! Filter and sort over the city collection.
//!
//! Both steps borrow from the caller's collection and return new `Vec`s of
//! references; the input order is never touched.

use crate::error::{CityGdpError, Result};
use crate::model::{City, Region};
use crate::text::compare_collated;
use crate::traits::{GdpMetrics, NameMatch, StandardMetrics};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Sort order of the city grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "gdp-desc")]
    GdpDesc,
    #[serde(rename = "gdp-asc")]
    GdpAsc,
    #[serde(rename = "growth-desc")]
    GrowthDesc,
    #[serde(rename = "name")]
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::GdpDesc,
        SortKey::GdpAsc,
        SortKey::GrowthDesc,
        SortKey::Name,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::GdpDesc => "gdp-desc",
            SortKey::GdpAsc => "gdp-asc",
            SortKey::GrowthDesc => "growth-desc",
            SortKey::Name => "name",
        }
    }

    /// Parses an optional sort value; empty means "keep input order".
    pub fn parse_optional(s: &str) -> Result<Option<SortKey>> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CityGdpError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CityGdpError::UnknownSortKey(s.to_string()))
    }
}

/// Whether a query narrows or reorders the collection at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryState {
    Idle,
    Filtered,
}

/// The grid query. Owned by the caller and rebuilt on every input change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub sort: Option<SortKey>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    pub fn with_sort(mut self, sort: Option<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    pub fn state(&self) -> QueryState {
        if self.search.is_empty() && self.region.is_none() && self.sort.is_none() {
            QueryState::Idle
        } else {
            QueryState::Filtered
        }
    }
}

/// Keeps a city iff its name or English name contains `search`
/// (case-insensitive; empty matches all) and, when `region` is set, its
/// region equals it. Stable.
pub fn filter<'a>(cities: &'a [City], search: &str, region: Option<Region>) -> Vec<&'a City> {
    cities
        .iter()
        .filter(|c| c.matches_search(search))
        .filter(|c| region.map_or(true, |r| c.region == r))
        .collect()
}

/// Orders cities by `key` with the standard metrics.
pub fn sort<'a, I>(cities: I, key: SortKey) -> Vec<&'a City>
where
    I: IntoIterator<Item = &'a City>,
{
    sort_with(cities, key, &StandardMetrics)
}

/// Orders cities by `key`, reading GDP and growth through `metrics`.
///
/// The sort is stable: cities with equal keys keep their relative input
/// order. Each metric is computed once per city.
pub fn sort_with<'a, I, M>(cities: I, key: SortKey, metrics: &M) -> Vec<&'a City>
where
    I: IntoIterator<Item = &'a City>,
    M: GdpMetrics + ?Sized,
{
    match key {
        SortKey::Name => {
            let mut out: Vec<&City> = cities.into_iter().collect();
            out.sort_by(|a, b| compare_collated(&a.name, &b.name));
            out
        }
        SortKey::GdpDesc => by_metric(cities, |c| metrics.latest_gdp(c), Ordering::reverse),
        SortKey::GdpAsc => by_metric(cities, |c| metrics.latest_gdp(c), |o| o),
        SortKey::GrowthDesc => by_metric(cities, |c| metrics.growth_rate(c), Ordering::reverse),
    }
}

fn by_metric<'a, I, F, D>(cities: I, metric: F, direction: D) -> Vec<&'a City>
where
    I: IntoIterator<Item = &'a City>,
    F: Fn(&City) -> f64,
    D: Fn(Ordering) -> Ordering,
{
    let mut keyed: Vec<(f64, &City)> = cities.into_iter().map(|c| (metric(c), c)).collect();
    keyed.sort_by(|a, b| direction(a.0.total_cmp(&b.0)));
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Filter, then sort (when the query names a sort key).
pub fn apply_query<'a>(cities: &'a [City], query: &Query) -> Vec<&'a City> {
    apply_query_with(cities, query, &StandardMetrics)
}

pub fn apply_query_with<'a, M>(cities: &'a [City], query: &Query, metrics: &M) -> Vec<&'a City>
where
    M: GdpMetrics + ?Sized,
{
    let filtered = filter(cities, &query.search, query.region);
    let out = match query.sort {
        Some(key) => sort_with(filtered, key, metrics),
        None => filtered,
    };
    debug!(
        total = cities.len(),
        matched = out.len(),
        search = %query.search,
        region = ?query.region,
        sort = ?query.sort,
        "query applied"
    );
    out
}

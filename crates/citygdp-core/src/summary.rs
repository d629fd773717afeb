// crates/citygdp-core/src/summary.rs

//! Headline figures for the dashboard's stat cards.

use crate::analytics;
use crate::format::{format_number, format_signed_percent, format_wan_yi};
use crate::model::{City, CityId};
use serde::Serialize;

/// A city together with the value that made it stand out.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leader {
    pub id: CityId,
    pub name: String,
    pub value: f64,
    pub formatted: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardStats {
    pub city_count: usize,
    pub latest_year: Option<i32>,
    /// Sum of latest GDP, 亿元.
    pub total_gdp: f64,
    /// e.g. `"32.45万亿"`.
    pub total_gdp_formatted: String,
    pub average_growth: f64,
    pub average_growth_formatted: String,
    /// Highest latest GDP; the first city wins ties.
    pub top_gdp: Leader,
    /// Highest year-over-year growth; the first city wins ties.
    pub top_growth: Leader,
}

/// Headline stats for `cities`, or `None` for an empty collection.
pub fn dashboard_stats(cities: &[City]) -> Option<DashboardStats> {
    let first = cities.first()?;

    let total_gdp: f64 = cities.iter().map(analytics::latest_gdp).sum();
    let average_growth =
        cities.iter().map(analytics::growth_rate).sum::<f64>() / cities.len() as f64;

    let top_gdp = leader(cities, first, analytics::latest_gdp);
    let top_growth = leader(cities, first, analytics::growth_rate);

    Some(DashboardStats {
        city_count: cities.len(),
        latest_year: cities.iter().filter_map(City::latest_year).max(),
        total_gdp,
        total_gdp_formatted: format_wan_yi(total_gdp, 2),
        average_growth,
        average_growth_formatted: format_signed_percent(average_growth, 2),
        top_gdp: Leader {
            formatted: format_number(top_gdp.1, 0),
            id: top_gdp.0.id.clone(),
            name: top_gdp.0.name.clone(),
            value: top_gdp.1,
        },
        top_growth: Leader {
            formatted: format_signed_percent(top_growth.1, 2),
            id: top_growth.0.id.clone(),
            name: top_growth.0.name.clone(),
            value: top_growth.1,
        },
    })
}

fn leader<'a>(cities: &'a [City], first: &'a City, metric: fn(&City) -> f64) -> (&'a City, f64) {
    cities
        .iter()
        .map(|c| (c, metric(c)))
        .fold((first, metric(first)), |best, cur| {
            if cur.1 > best.1 {
                cur
            } else {
                best
            }
        })
}

// crates/citygdp-core/src/compare.rs

//! Multi-city comparison: the metric table and the CAGR ranking.
//!
//! Inputs are cities in selection order (see
//! [`Selection::resolve`](crate::selection::Selection::resolve)); column
//! order and colours follow that order.

use crate::chart::{color_for, percent_of};
use crate::format::{format_number, format_percent, format_signed_percent};
use crate::model::{City, CityId};
use crate::selection::{MAX_SELECTIONS, MIN_COMPARISON};
use crate::traits::{GdpMetrics, StandardMetrics};
use serde::Serialize;
use tracing::debug;

/// Rows of the comparison table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    LatestGdp,
    GrowthRate,
    Cagr,
    Population,
    PerCapitaGdp,
    Area,
    GdpDensity,
    Region,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::LatestGdp,
        Metric::GrowthRate,
        Metric::Cagr,
        Metric::Population,
        Metric::PerCapitaGdp,
        Metric::Area,
        Metric::GdpDensity,
        Metric::Region,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::LatestGdp => "最新GDP (亿元)",
            Metric::GrowthRate => "同比增长率",
            Metric::Cagr => "复合增长率 (CAGR)",
            Metric::Population => "常住人口 (万人)",
            Metric::PerCapitaGdp => "人均GDP (万元)",
            Metric::Area => "行政面积 (km²)",
            Metric::GdpDensity => "GDP密度 (亿元/km²)",
            Metric::Region => "所属地区",
        }
    }

    fn render<M: GdpMetrics + ?Sized>(self, city: &City, metrics: &M) -> String {
        match self {
            Metric::LatestGdp => format_number(metrics.latest_gdp(city), 2),
            Metric::GrowthRate => format_signed_percent(metrics.growth_rate(city), 2),
            Metric::Cagr => format_percent(metrics.cagr(city), 2),
            Metric::Population => format_number(city.population, 0),
            Metric::PerCapitaGdp => format_number(metrics.per_capita_gdp(city), 2),
            Metric::Area => format_number(city.area, 0),
            Metric::GdpDensity => format_number(metrics.gdp_density(city), 2),
            Metric::Region => city.region.label().to_string(),
        }
    }
}

/// Column header of the comparison table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub id: CityId,
    pub name: String,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub label: &'static str,
    /// One formatted value per column, in column order.
    pub values: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum Comparison {
    /// Fewer than two cities: the view shows its empty state.
    InsufficientSelection { selected: usize },
    Table {
        columns: Vec<ComparisonColumn>,
        rows: Vec<ComparisonRow>,
    },
}

/// Builds the comparison table for 2 to 4 cities.
///
/// Only the first [`MAX_SELECTIONS`] cities are used.
pub fn build_comparison_rows(cities: &[&City]) -> Comparison {
    build_comparison_rows_with(cities, &StandardMetrics)
}

pub fn build_comparison_rows_with<M>(cities: &[&City], metrics: &M) -> Comparison
where
    M: GdpMetrics + ?Sized,
{
    if cities.len() < MIN_COMPARISON {
        return Comparison::InsufficientSelection {
            selected: cities.len(),
        };
    }
    let cities = &cities[..cities.len().min(MAX_SELECTIONS)];

    let columns = cities
        .iter()
        .enumerate()
        .map(|(i, c)| ComparisonColumn {
            id: c.id.clone(),
            name: c.name.clone(),
            color: color_for(i),
        })
        .collect();

    let rows = Metric::ALL
        .into_iter()
        .map(|metric| ComparisonRow {
            metric,
            label: metric.label(),
            values: cities.iter().map(|c| metric.render(c, metrics)).collect(),
        })
        .collect();

    debug!(columns = cities.len(), "comparison table built");
    Comparison::Table { columns, rows }
}

/// One bar of the CAGR ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CagrEntry {
    pub id: CityId,
    pub name: String,
    pub cagr: f64,
    pub formatted: String,
    /// Colour of the city's selection index, not of its rank.
    pub color: &'static str,
    /// Bar width relative to the best CAGR, in `[0, 100]`.
    pub width_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CagrRanking {
    pub entries: Vec<CagrEntry>,
    /// Largest CAGR among the entries; `0.0` when empty.
    pub max_cagr: f64,
}

/// Cities ordered by CAGR, best first. When the best CAGR is not positive
/// every bar has zero width.
pub fn rank_cities_by_cagr(cities: &[&City]) -> CagrRanking {
    rank_cities_by_cagr_with(cities, &StandardMetrics)
}

pub fn rank_cities_by_cagr_with<M>(cities: &[&City], metrics: &M) -> CagrRanking
where
    M: GdpMetrics + ?Sized,
{
    let mut scored: Vec<(f64, usize, &City)> = cities
        .iter()
        .enumerate()
        .map(|(i, c)| (metrics.cagr(c), i, *c))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let max_cagr = scored.first().map_or(0.0, |s| s.0);

    let entries = scored
        .into_iter()
        .map(|(cagr, i, c)| CagrEntry {
            id: c.id.clone(),
            name: c.name.clone(),
            cagr,
            formatted: format_percent(cagr, 2),
            color: color_for(i),
            width_percent: percent_of(cagr, max_cagr),
        })
        .collect();

    CagrRanking { entries, max_cagr }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::COMPARISON_PALETTE;
    use crate::model::{GdpPoint, Region};

    fn city(id: &str, series: &[f64]) -> City {
        City {
            id: CityId::from(id),
            name: format!("城市{id}"),
            name_en: id.into(),
            region: Region::SouthChina,
            population: 1000.0,
            area: 2000.0,
            gdp_data: series
                .iter()
                .enumerate()
                .map(|(i, &gdp)| GdpPoint {
                    year: 2019 + i as i32,
                    gdp,
                })
                .collect(),
            description: None,
        }
    }

    #[test]
    fn single_city_is_insufficient() {
        let a = city("a", &[100.0, 110.0]);
        assert_eq!(
            build_comparison_rows(&[&a]),
            Comparison::InsufficientSelection { selected: 1 }
        );
        assert_eq!(
            build_comparison_rows(&[]),
            Comparison::InsufficientSelection { selected: 0 }
        );
    }

    #[test]
    fn table_has_one_row_per_metric_in_selection_order() {
        let a = city("a", &[1000.0, 1100.0, 1200.0, 1300.0, 1464.1]);
        let b = city("b", &[2000.0, 2000.0, 2000.0, 2000.0, 1800.0]);
        let Comparison::Table { columns, rows } = build_comparison_rows(&[&b, &a]) else {
            panic!("expected a table");
        };

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].id.as_str(), "b");
        assert_eq!(columns[0].color, COMPARISON_PALETTE[0]);
        assert_eq!(columns[1].color, COMPARISON_PALETTE[1]);

        assert_eq!(rows.len(), Metric::ALL.len());
        let row = |m: Metric| rows.iter().find(|r| r.metric == m).unwrap();
        assert_eq!(row(Metric::LatestGdp).values, vec!["1,800.00", "1,464.10"]);
        assert_eq!(row(Metric::GrowthRate).values, vec!["-10.00%", "+12.62%"]);
        assert_eq!(row(Metric::Cagr).values[1], "10.00%");
        assert_eq!(row(Metric::Population).values, vec!["1,000", "1,000"]);
        assert_eq!(row(Metric::PerCapitaGdp).values, vec!["1.80", "1.46"]);
        assert_eq!(row(Metric::Area).values, vec!["2,000", "2,000"]);
        assert_eq!(row(Metric::GdpDensity).values, vec!["0.90", "0.73"]);
        assert_eq!(row(Metric::Region).values, vec!["华南", "华南"]);
    }

    #[test]
    fn extra_cities_beyond_limit_are_ignored() {
        let cs: Vec<City> = (0..6).map(|i| city(&i.to_string(), &[1.0, 2.0])).collect();
        let refs: Vec<&City> = cs.iter().collect();
        let Comparison::Table { columns, .. } = build_comparison_rows(&refs) else {
            panic!("expected a table");
        };
        assert_eq!(columns.len(), MAX_SELECTIONS);
    }

    #[test]
    fn ranking_orders_by_cagr_and_keeps_selection_colors() {
        let slow = city("slow", &[100.0, 101.0, 102.0, 103.0, 110.0]);
        let fast = city("fast", &[100.0, 120.0, 140.0, 160.0, 200.0]);
        let ranking = rank_cities_by_cagr(&[&slow, &fast]);

        assert_eq!(ranking.entries[0].id.as_str(), "fast");
        assert_eq!(ranking.entries[0].color, COMPARISON_PALETTE[1]);
        assert_eq!(ranking.entries[0].width_percent, 100.0);
        assert_eq!(ranking.entries[1].color, COMPARISON_PALETTE[0]);
        assert!(ranking.entries[1].width_percent > 0.0 && ranking.entries[1].width_percent < 100.0);
        assert_eq!(ranking.max_cagr, ranking.entries[0].cagr);
    }

    #[test]
    fn non_positive_max_gives_zero_widths() {
        let a = city("a", &[200.0, 150.0, 100.0]);
        let b = city("b", &[100.0, 100.0]);
        let ranking = rank_cities_by_cagr(&[&a, &b]);
        assert_eq!(ranking.max_cagr, 0.0);
        assert!(ranking.entries.iter().all(|e| e.width_percent == 0.0));

        let empty = rank_cities_by_cagr(&[]);
        assert!(empty.entries.is_empty());
        assert_eq!(empty.max_cagr, 0.0);
    }
}

// crates/citygdp-core/src/chart.rs

//! Chart view models: palette mapping and value scaling.
//!
//! Nothing here draws. Bars are expressed as percentages of the largest
//! value, line charts as aligned series plus axis ticks.

use crate::analytics;
use crate::format::format_number;
use crate::model::{City, CityId};
use crate::search::{sort, SortKey};
use serde::Serialize;
use std::collections::BTreeSet;

/// Comparison colours, indexed by selection position.
pub const COMPARISON_PALETTE: [&str; 4] = ["#2563eb", "#10b981", "#f59e0b", "#8b5cf6"];

/// Trend-line colours; the comparison palette plus a fifth.
pub const TREND_PALETTE: [&str; 5] = ["#2563eb", "#10b981", "#f59e0b", "#8b5cf6", "#ef4444"];

/// Headroom above the largest value on a line chart's y axis.
pub const AXIS_HEADROOM: f64 = 1.1;

/// Number of intervals between y-axis ticks.
pub const AXIS_DIVISIONS: usize = 4;

/// Comparison colour for selection index `i` (wraps around).
pub fn color_for(i: usize) -> &'static str {
    COMPARISON_PALETTE[i % COMPARISON_PALETTE.len()]
}

pub fn trend_color_for(i: usize) -> &'static str {
    TREND_PALETTE[i % TREND_PALETTE.len()]
}

/// `value / max * 100`, clamped to `[0, 100]`. `0` when `max` is not
/// positive, so an all-zero chart renders empty bars instead of NaN widths.
pub fn percent_of(value: f64, max: f64) -> f64 {
    if max.is_nan() || max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// One bar of a horizontal or vertical bar chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub formatted: String,
    pub percent: f64,
    pub color: &'static str,
}

/// Scales `(label, value)` pairs against their maximum. Colours cycle
/// through the comparison palette by position.
pub fn bar_chart<I, S>(items: I) -> Vec<BarDatum>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    let items: Vec<(String, f64)> = items.into_iter().map(|(l, v)| (l.into(), v)).collect();
    let max = max_value(items.iter().map(|(_, v)| *v));
    items
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| BarDatum {
            formatted: format_number(value, 2),
            percent: percent_of(value, max),
            color: color_for(i),
            label,
            value,
        })
        .collect()
}

/// Latest GDP of every city, largest first.
pub fn gdp_bar_chart(cities: &[City]) -> Vec<BarDatum> {
    bar_chart(
        sort(cities, SortKey::GdpDesc)
            .into_iter()
            .map(|c| (c.name.clone(), analytics::latest_gdp(c))),
    )
}

/// Bar heights for a sparkline, scaled so the largest value is
/// `max_height`. All zeros when there is no positive value.
pub fn sparkline(values: &[f64], max_height: f64) -> Vec<f64> {
    let max = max_value(values.iter().copied());
    values
        .iter()
        .map(|&v| percent_of(v, max) / 100.0 * max_height)
        .collect()
}

/// One line of a trend chart. `values[i]` belongs to `TrendChart::years[i]`;
/// `None` where the city has no data for that year.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendSeries {
    pub id: CityId,
    pub label: String,
    pub color: &'static str,
    pub values: Vec<Option<f64>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendChart {
    pub years: Vec<i32>,
    pub series: Vec<TrendSeries>,
    /// Top of the y axis (largest value plus headroom).
    pub axis_max: f64,
    /// Tick values from `axis_max` down to 0.
    pub ticks: Vec<f64>,
}

/// Trend lines for `cities` in the given order, coloured by position.
pub fn trend_chart(cities: &[&City]) -> TrendChart {
    let years: Vec<i32> = cities
        .iter()
        .flat_map(|c| c.gdp_data.iter().map(|p| p.year))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series: Vec<TrendSeries> = cities
        .iter()
        .enumerate()
        .map(|(i, c)| TrendSeries {
            id: c.id.clone(),
            label: c.name.clone(),
            color: trend_color_for(i),
            values: years
                .iter()
                .map(|y| c.gdp_data.iter().find(|p| p.year == *y).map(|p| p.gdp))
                .collect(),
        })
        .collect();

    let max = max_value(series.iter().flat_map(|s| s.values.iter().flatten().copied()));
    let axis_max = max * AXIS_HEADROOM;
    let ticks = (0..=AXIS_DIVISIONS)
        .map(|i| axis_max / AXIS_DIVISIONS as f64 * (AXIS_DIVISIONS - i) as f64)
        .collect();

    TrendChart {
        years,
        series,
        axis_max,
        ticks,
    }
}

/// Trend chart of the `n` cities with the highest latest GDP.
pub fn top_trends(cities: &[City], n: usize) -> TrendChart {
    let top: Vec<&City> = sort(cities, SortKey::GdpDesc).into_iter().take(n).collect();
    trend_chart(&top)
}

/// Largest finite value, or 0 for an empty input.
fn max_value<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

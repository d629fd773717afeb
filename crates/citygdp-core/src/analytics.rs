// crates/citygdp-core/src/analytics.rs

//! Pure numeric derivations from a city's GDP series.
//!
//! Every function here is total: empty series, zero denominators and
//! invalid periods fall back to `0.0` instead of producing `NaN`/`Infinity`
//! or panicking. The dashboard has no error-display path and always shows a
//! number.

use crate::model::City;
use serde::Serialize;

/// Number of periods used for the comparison CAGR (first to last series
/// entry of a five-year window).
pub const CAGR_PERIODS: u32 = 4;

/// GDP of the chronologically last series entry, in 亿元. `0.0` when the
/// series is empty.
pub fn latest_gdp(city: &City) -> f64 {
    city.gdp_data.last().map_or(0.0, |p| p.gdp)
}

/// Year-over-year growth of the last two entries, as a percentage.
///
/// `0.0` when the series has fewer than two entries.
pub fn growth_rate(city: &City) -> f64 {
    match city.gdp_data.as_slice() {
        [.., previous, latest] => period_growth_rate(latest.gdp, previous.gdp),
        _ => 0.0,
    }
}

/// `(current - previous) / previous * 100`; `0.0` when `previous` is zero.
pub fn period_growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 || !previous.is_finite() {
        return 0.0;
    }
    finite_or_zero((current - previous) / previous * 100.0)
}

/// Compound annual growth rate as a percentage:
/// `((end / start)^(1 / periods) - 1) * 100`.
///
/// `0.0` when `start <= 0` or `periods <= 0`.
pub fn cagr(start: f64, end: f64, periods: f64) -> f64 {
    let valid = start > 0.0 && periods > 0.0;
    if !valid {
        return 0.0;
    }
    finite_or_zero(((end / start).powf(1.0 / periods) - 1.0) * 100.0)
}

/// CAGR between the first and the last series entry over
/// [`CAGR_PERIODS`] periods. `0.0` for series shorter than two entries.
pub fn series_cagr(city: &City) -> f64 {
    match city.gdp_data.as_slice() {
        [first, .., _] => cagr(first.gdp, latest_gdp(city), f64::from(CAGR_PERIODS)),
        _ => 0.0,
    }
}

/// Latest GDP per resident: 亿元 / 万人 = 万元 per person.
pub fn per_capita_gdp(city: &City) -> f64 {
    ratio(latest_gdp(city), city.population)
}

/// Latest GDP per km², in 亿元/km².
pub fn gdp_density(city: &City) -> f64 {
    ratio(latest_gdp(city), city.area)
}

/// One row of the per-year table in the city detail view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct YearlyGrowth {
    pub year: i32,
    pub gdp: f64,
    /// Growth over the previous entry; `None` for the first one.
    pub growth: Option<f64>,
}

pub fn yearly_growth(city: &City) -> Vec<YearlyGrowth> {
    let mut previous: Option<f64> = None;
    city.gdp_data
        .iter()
        .map(|p| {
            let growth = previous.map(|prev| period_growth_rate(p.gdp, prev));
            previous = Some(p.gdp);
            YearlyGrowth {
                year: p.year,
                gdp: p.gdp,
                growth,
            }
        })
        .collect()
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator.is_nan() || denominator <= 0.0 {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}

#[inline]
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CityId, GdpPoint, Region};
    use proptest::prelude::*;

    fn city(series: &[(i32, f64)]) -> City {
        City {
            id: CityId::from("t"),
            name: "测试".into(),
            name_en: "Test".into(),
            region: Region::EastChina,
            population: 1000.0,
            area: 500.0,
            gdp_data: series
                .iter()
                .map(|&(year, gdp)| GdpPoint { year, gdp })
                .collect(),
            description: None,
        }
    }

    #[test]
    fn latest_gdp_reads_last_entry() {
        let c = city(&[(2019, 10.0), (2020, 12.0)]);
        assert_eq!(latest_gdp(&c), 12.0);
        assert_eq!(latest_gdp(&city(&[])), 0.0);
    }

    #[test]
    fn growth_rate_of_last_two_entries() {
        assert_eq!(growth_rate(&city(&[(2019, 1000.0), (2020, 1200.0)])), 20.0);
        assert_eq!(growth_rate(&city(&[(2019, 2000.0), (2020, 1800.0)])), -10.0);
        assert_eq!(growth_rate(&city(&[(2020, 1800.0)])), 0.0);
        assert_eq!(growth_rate(&city(&[])), 0.0);
    }

    #[test]
    fn growth_rate_from_zero_is_zero() {
        assert_eq!(growth_rate(&city(&[(2019, 0.0), (2020, 100.0)])), 0.0);
        assert_eq!(period_growth_rate(5.0, 0.0), 0.0);
    }

    #[test]
    fn cagr_is_a_percentage() {
        assert_eq!(cagr(100.0, 200.0, 1.0), 100.0);
        assert!((cagr(100.0, 121.0, 2.0) - 10.0).abs() < 1e-9);
        assert!(cagr(200.0, 100.0, 1.0) < 0.0);
    }

    #[test]
    fn cagr_guards_invalid_inputs() {
        assert_eq!(cagr(0.0, 100.0, 4.0), 0.0);
        assert_eq!(cagr(-5.0, 100.0, 4.0), 0.0);
        assert_eq!(cagr(100.0, 200.0, 0.0), 0.0);
        assert_eq!(cagr(100.0, 200.0, -2.0), 0.0);
        assert_eq!(cagr(f64::NAN, 200.0, 2.0), 0.0);
    }

    #[test]
    fn series_cagr_uses_fixed_window() {
        let c = city(&[(2019, 100.0), (2020, 110.0), (2021, 120.0), (2022, 130.0), (2023, 146.41)]);
        assert!((series_cagr(&c) - 10.0).abs() < 1e-9);
        assert_eq!(series_cagr(&city(&[(2023, 5.0)])), 0.0);
    }

    #[test]
    fn ratios_guard_zero_denominators() {
        let mut c = city(&[(2020, 2000.0)]);
        assert_eq!(per_capita_gdp(&c), 2.0);
        assert_eq!(gdp_density(&c), 4.0);
        c.population = 0.0;
        c.area = 0.0;
        assert_eq!(per_capita_gdp(&c), 0.0);
        assert_eq!(gdp_density(&c), 0.0);
    }

    #[test]
    fn yearly_growth_table() {
        let rows = yearly_growth(&city(&[(2019, 100.0), (2020, 110.0), (2021, 99.0)]));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].growth, None);
        assert!((rows[1].growth.unwrap() - 10.0).abs() < 1e-9);
        assert!((rows[2].growth.unwrap() + 10.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn cagr_of_flat_series_is_zero(x in 0.001f64..1e9, n in 0.1f64..50.0) {
            prop_assert!(cagr(x, x, n).abs() < 1e-9);
        }

        #[test]
        fn growth_rate_matches_formula(prev in 1.0f64..1e6, latest in 0.0f64..1e6) {
            let c = city(&[(2019, prev), (2020, latest)]);
            let g = growth_rate(&c);
            prop_assert_eq!(g, (latest - prev) / prev * 100.0);
            if latest > prev { prop_assert!(g > 0.0); }
            if latest < prev { prop_assert!(g < 0.0); }
        }
    }
}

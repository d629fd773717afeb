// crates/citygdp-core/src/api.rs

//! JSON-serializable views for the city grid and the detail modal.

use crate::analytics::{self, YearlyGrowth};
use crate::chart::sparkline;
use crate::format::{format_number, format_percent, format_signed_percent};
use crate::model::{City, CityId, Region};
use serde::Serialize;

/// Sparkline height used by the grid cards.
pub const CARD_SPARKLINE_HEIGHT: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthDirection {
    Up,
    Down,
}

impl GrowthDirection {
    /// Zero counts as growth.
    pub fn of(rate: f64) -> Self {
        if rate >= 0.0 {
            GrowthDirection::Up
        } else {
            GrowthDirection::Down
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            GrowthDirection::Up => "↑",
            GrowthDirection::Down => "↓",
        }
    }
}

/// A growth figure with everything the indicator badge needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GrowthBadge {
    pub rate: f64,
    pub direction: GrowthDirection,
    /// Absolute value, e.g. `"5.74%"`, shown next to the arrow.
    pub magnitude: String,
    /// Signed value, e.g. `"+5.74%"`.
    pub signed: String,
}

impl GrowthBadge {
    pub fn new(rate: f64) -> Self {
        GrowthBadge {
            rate,
            direction: GrowthDirection::of(rate),
            magnitude: format_percent(rate.abs(), 2),
            signed: format_signed_percent(rate, 2),
        }
    }

    /// `"↑ 5.74%"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.direction.arrow(), self.magnitude)
    }
}

/// One card of the city grid.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityCard {
    pub id: CityId,
    pub name: String,
    pub name_en: String,
    pub region: Region,
    pub latest_year: Option<i32>,
    pub latest_gdp: String,
    pub growth: GrowthBadge,
    /// 万元 per person.
    pub per_capita_gdp: String,
    /// 万人.
    pub population: String,
    pub sparkline: Vec<f64>,
}

impl CityCard {
    pub fn from_city(city: &City) -> Self {
        CityCard {
            id: city.id.clone(),
            name: city.name.clone(),
            name_en: city.name_en.clone(),
            region: city.region,
            latest_year: city.latest_year(),
            latest_gdp: format_number(analytics::latest_gdp(city), 0),
            growth: GrowthBadge::new(analytics::growth_rate(city)),
            per_capita_gdp: format_number(analytics::per_capita_gdp(city), 2),
            population: format_number(city.population, 0),
            sparkline: sparkline(&city.gdp_values(), CARD_SPARKLINE_HEIGHT),
        }
    }
}

/// Cards for an already filtered/sorted list.
pub fn city_cards(cities: &[&City]) -> Vec<CityCard> {
    cities.iter().map(|c| CityCard::from_city(c)).collect()
}

/// One row of the per-year table in the detail view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearRow {
    pub year: i32,
    pub gdp: String,
    /// `None` for the first year.
    pub growth: Option<GrowthBadge>,
}

impl From<YearlyGrowth> for YearRow {
    fn from(y: YearlyGrowth) -> Self {
        YearRow {
            year: y.year,
            gdp: format_number(y.gdp, 0),
            growth: y.growth.map(GrowthBadge::new),
        }
    }
}

/// Everything the detail modal shows for one city.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityDetail {
    pub card: CityCard,
    pub title: String,
    pub cagr: String,
    /// km².
    pub area: String,
    /// 亿元/km².
    pub gdp_density: String,
    pub description: String,
    pub years: Vec<YearRow>,
}

impl CityDetail {
    pub fn from_city(city: &City) -> Self {
        CityDetail {
            card: CityCard::from_city(city),
            title: format!("{} ({})", city.name, city.name_en),
            cagr: format_percent(analytics::series_cagr(city), 2),
            area: format_number(city.area, 0),
            gdp_density: format_number(analytics::gdp_density(city), 2),
            description: city.description().to_string(),
            years: analytics::yearly_growth(city)
                .into_iter()
                .map(YearRow::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GdpPoint;

    fn sample() -> City {
        City {
            id: CityId::from("1"),
            name: "上海".into(),
            name_en: "Shanghai".into(),
            region: Region::EastChina,
            population: 2487.0,
            area: 6340.5,
            gdp_data: vec![
                GdpPoint { year: 2022, gdp: 44653.0 },
                GdpPoint { year: 2023, gdp: 47219.0 },
            ],
            description: Some("经济中心".into()),
        }
    }

    #[test]
    fn card_formats_metrics() {
        let card = CityCard::from_city(&sample());
        assert_eq!(card.latest_gdp, "47,219");
        assert_eq!(card.growth.direction, GrowthDirection::Up);
        assert_eq!(card.growth.signed, "+5.75%");
        assert_eq!(card.growth.label(), "↑ 5.75%");
        assert_eq!(card.per_capita_gdp, "18.99");
        assert_eq!(card.population, "2,487");
        assert_eq!(card.latest_year, Some(2023));
        assert_eq!(card.sparkline.len(), 2);
        assert_eq!(card.sparkline[1], CARD_SPARKLINE_HEIGHT);
    }

    #[test]
    fn negative_growth_badge() {
        let badge = GrowthBadge::new(-3.456);
        assert_eq!(badge.direction, GrowthDirection::Down);
        assert_eq!(badge.magnitude, "3.46%");
        assert_eq!(badge.label(), "↓ 3.46%");
    }

    #[test]
    fn detail_has_year_table() {
        let detail = CityDetail::from_city(&sample());
        assert_eq!(detail.title, "上海 (Shanghai)");
        assert_eq!(detail.years.len(), 2);
        assert!(detail.years[0].growth.is_none());
        assert_eq!(detail.years[1].gdp, "47,219");
        assert_eq!(detail.area, "6,341");
        assert_eq!(detail.description, "经济中心");
    }

    #[test]
    fn empty_series_degrades_to_zero() {
        let mut c = sample();
        c.gdp_data.clear();
        let detail = CityDetail::from_city(&c);
        assert_eq!(detail.card.latest_gdp, "0");
        assert_eq!(detail.card.growth.signed, "+0.00%");
        assert_eq!(detail.cagr, "0.00%");
        assert!(detail.years.is_empty());
    }
}

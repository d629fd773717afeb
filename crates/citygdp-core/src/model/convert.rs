// crates/citygdp-core/src/model/convert.rs
use super::{City, CityId, GdpPoint, Region};
use crate::error::{CityGdpError, Result};
use crate::loader::LoadOptions;
use crate::raw::{CityRaw, GdpPointRaw};
use std::collections::HashSet;
use tracing::debug;

/// **Standard Converter:** Raw -> validated `City` list.
///
/// - Region labels are parsed into [`Region`].
/// - Population is normalized to 万人 according to `options.population_unit`.
/// - GDP series are sorted by year; duplicate years, negative GDP and
///   non-finite numbers are rejected.
/// - Duplicate city ids are rejected.
/// - When `options.regions` is set, cities outside those regions are dropped.
pub fn from_raw(raw_cities: Vec<CityRaw>, options: &LoadOptions) -> Result<Vec<City>> {
    let mut seen = HashSet::new();
    let mut cities = Vec::with_capacity(raw_cities.len());

    for raw in raw_cities {
        let id = CityId::new(raw.id.into_string());
        if id.as_str().is_empty() {
            return Err(CityGdpError::InvalidData(format!(
                "city {:?} has an empty id",
                raw.name
            )));
        }
        if !seen.insert(id.clone()) {
            return Err(CityGdpError::InvalidData(format!("duplicate city id {id}")));
        }

        let region: Region = raw.region.parse().map_err(|_| {
            CityGdpError::InvalidData(format!("city {id}: unknown region {:?}", raw.region))
        })?;

        if let Some(allowed) = options.regions.as_deref() {
            if !allowed.is_empty() && !allowed.contains(&region) {
                debug!(%id, %region, "city skipped by region filter");
                continue;
            }
        }

        let population = check_measure(&id, "population", raw.population)?;
        let area = check_measure(&id, "area", raw.area)?;
        let gdp_data = normalize_series(&id, raw.gdp_data)?;

        cities.push(City {
            name_en: raw.name_en.unwrap_or_else(|| raw.name.clone()),
            name: raw.name,
            region,
            population: options.population_unit.to_ten_thousand(population),
            area,
            gdp_data,
            description: raw.description.filter(|d| !d.trim().is_empty()),
            id,
        });
    }

    Ok(cities)
}

fn check_measure(id: &CityId, field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CityGdpError::InvalidData(format!(
            "city {id}: {field} must be a non-negative number, got {value}"
        )));
    }
    Ok(value)
}

fn normalize_series(id: &CityId, raw: Vec<GdpPointRaw>) -> Result<Vec<GdpPoint>> {
    let mut series: Vec<GdpPoint> = raw
        .into_iter()
        .map(|p| GdpPoint {
            year: p.year,
            gdp: p.gdp,
        })
        .collect();

    if let Some(bad) = series.iter().find(|p| !p.gdp.is_finite() || p.gdp < 0.0) {
        return Err(CityGdpError::InvalidData(format!(
            "city {id}: invalid gdp {} for {}",
            bad.gdp, bad.year
        )));
    }

    series.sort_by_key(|p| p.year);
    if let Some(pair) = series.windows(2).find(|w| w[0].year == w[1].year) {
        return Err(CityGdpError::InvalidData(format!(
            "city {id}: duplicate year {}",
            pair[0].year
        )));
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::PopulationUnit;
    use crate::raw::DatasetRaw;

    fn parse(json: &str) -> Vec<CityRaw> {
        serde_json::from_str::<DatasetRaw>(json).unwrap().into_cities()
    }

    #[test]
    fn sorts_descending_series_by_year() {
        let raw = parse(
            r#"[{"id": 1, "name": "北京", "region": "华北", "population": 2188, "area": 16410.54,
                "gdpData": [{"year": 2023, "gdp": 3500}, {"year": 2022, "gdp": 3000}]}]"#,
        );
        let cities = from_raw(raw, &LoadOptions::default()).unwrap();
        let years: Vec<i32> = cities[0].gdp_data.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2022, 2023]);
        assert_eq!(cities[0].name_en, "北京");
        assert_eq!(cities[0].id.as_str(), "1");
    }

    #[test]
    fn rejects_duplicate_years() {
        let raw = parse(
            r#"{"cities": [{"id": "a", "name": "A", "region": "华东", "population": 1, "area": 1,
                "gdpData": [{"year": 2020, "gdp": 1}, {"year": 2020, "gdp": 2}]}]}"#,
        );
        let err = from_raw(raw, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, CityGdpError::InvalidData(msg) if msg.contains("duplicate year 2020")));
    }

    #[test]
    fn rejects_duplicate_ids_across_number_and_string() {
        let raw = parse(
            r#"[{"id": 7, "name": "A", "region": "华东", "population": 1, "area": 1},
                {"id": "7", "name": "B", "region": "华东", "population": 1, "area": 1}]"#,
        );
        assert!(from_raw(raw, &LoadOptions::default()).is_err());
    }

    #[test]
    fn rejects_negative_gdp_and_unknown_region() {
        let raw = parse(
            r#"[{"id": 1, "name": "A", "region": "华东", "population": 1, "area": 1,
                "gdpData": [{"year": 2020, "gdp": -5}]}]"#,
        );
        assert!(from_raw(raw, &LoadOptions::default()).is_err());

        let raw = parse(r#"[{"id": 1, "name": "A", "region": "Mars", "population": 1, "area": 1}]"#);
        assert!(from_raw(raw, &LoadOptions::default()).is_err());
    }

    #[test]
    fn normalizes_headcount_population_when_asked() {
        let raw = parse(
            r#"[{"id": 1, "name": "北京", "region": "华北", "population": 21886000, "area": 16410.54}]"#,
        );
        let options = LoadOptions {
            population_unit: PopulationUnit::Persons,
            ..LoadOptions::default()
        };
        let cities = from_raw(raw, &options).unwrap();
        assert!((cities[0].population - 2188.6).abs() < 1e-9);
    }

    #[test]
    fn region_filter_drops_other_regions() {
        let raw = parse(
            r#"[{"id": 1, "name": "A", "region": "华东", "population": 1, "area": 1},
                {"id": 2, "name": "B", "region": "华南", "population": 1, "area": 1}]"#,
        );
        let options = LoadOptions {
            regions: Some(vec![Region::SouthChina]),
            ..LoadOptions::default()
        };
        let cities = from_raw(raw, &options).unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "B");
    }
}

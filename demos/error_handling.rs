//! Error handling example for citygdp-rs
//!
//! This example demonstrates load errors, invalid query parameters and the
//! fallbacks used for incomplete data.

use citygdp_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== citygdp-rs Error Handling Example ===\n");

    // Example 1: Loading a missing file
    println!("--- Example 1: Missing dataset file ---");
    match Dataset::load_from_path("does-not-exist.json", &LoadOptions::default()) {
        Ok(db) => println!("  Loaded {} cities", db.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Invalid documents
    println!("--- Example 2: Invalid documents ---");
    let documents = [
        r#"{"cities": ["#,
        r#"{"citys": []}"#,
        r#"[{"id": 1, "name": "X", "region": "华北", "population": "lots", "area": 1}]"#,
        r#"[{"id": 1, "name": "X", "region": "火星", "population": 1, "area": 1, "gdpData": []}]"#,
        r#"[{"id": 1, "name": "X", "region": "华北", "population": 1, "area": 1,
             "gdpData": [{"year": 2020, "gdp": 1}, {"year": 2020, "gdp": 2}]}]"#,
    ];
    for doc in documents {
        match Dataset::from_json_str(doc, &LoadOptions::default()) {
            Ok(db) => println!("  Loaded {} cities", db.len()),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 3: Invalid query parameters
    println!("--- Example 3: Invalid sort key and region ---");
    for key in ["gdp-desc", "popularity"] {
        match key.parse::<SortKey>() {
            Ok(k) => println!("  sort {k}: ok"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    if let Err(e) = "atlantis".parse::<Region>() {
        println!("  ✗ {e}");
    }
    println!();

    // Example 4: Incomplete series fall back to zero
    println!("--- Example 4: Single-year city ---");
    let db = Dataset::from_json_str(
        r#"[{"id": "new", "name": "新城", "nameEn": "New Town", "region": "西北",
             "population": 50, "area": 300, "gdpData": [{"year": 2023, "gdp": 120}]}]"#,
        &LoadOptions::default(),
    )?;
    if let Some(city) = db.find("new") {
        println!("  Growth: {}", format_signed_percent(growth_rate(city), 2));
        println!("  CAGR: {}", format_percent(series_cagr(city), 2));
    }
    let one = Selection::from_ids(["new"]);
    if let Comparison::InsufficientSelection { selected } = build_comparison_rows(&one.resolve(db.cities())) {
        println!("  Comparison needs 2 cities, {selected} selected");
    }

    Ok(())
}

//! Advanced filtering example for citygdp-rs
//!
//! This example demonstrates combined search/region/sort queries, the
//! selection limit and the multi-city comparison.

use citygdp_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== citygdp-rs Advanced Filtering Example ===\n");

    let db = Dataset::embedded()?;

    // Example 1: East China, fastest growing first
    println!("--- Example 1: 华东 cities by growth ---");
    let query = Query::new()
        .with_region(Some(Region::EastChina))
        .with_sort(Some(SortKey::GrowthDesc));
    for city in apply_query(db.cities(), &query) {
        println!("- {} {}", city.name(), format_signed_percent(growth_rate(city), 2));
    }
    println!();

    // Example 2: Search matches Chinese and English names
    println!("--- Example 2: Search 'zhou' ---");
    for city in filter(db.cities(), "zhou", None) {
        println!("- {} ({})", city.name(), city.name_en());
    }
    println!();

    // Example 3: Name order (pinyin)
    println!("--- Example 3: Sorted by name ---");
    let names: Vec<&str> = sort(db.cities(), SortKey::Name)
        .into_iter()
        .map(|c| c.name())
        .collect();
    println!("{}", names.join(" "));
    println!();

    // Example 4: Selecting cities for comparison
    println!("--- Example 4: Selection limit ---");
    let mut selection = Selection::new();
    for id in ["1", "2", "3", "4", "5"] {
        let outcome = selection.toggle(id);
        println!("toggle {id}: {outcome:?} -> {:?}", selection.state());
    }
    println!();

    // Example 5: Comparison table and CAGR ranking
    println!("--- Example 5: Comparison ---");
    let picked = selection.resolve(db.cities());
    if let Comparison::Table { columns, rows } = build_comparison_rows(&picked) {
        let header: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        println!("{:<20}{}", "", header.join("\t"));
        for row in rows {
            println!("{:<20}{}", row.label, row.values.join("\t"));
        }
    }
    for entry in rank_cities_by_cagr(&picked).entries {
        println!("{} {} ({:.0}%)", entry.name, entry.formatted, entry.width_percent);
    }

    Ok(())
}

//! Basic usage example for citygdp-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city dataset
//! - Read per-city metrics
//! - Build the dashboard headline figures and the city grid

use citygdp_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== citygdp-rs Basic Usage Example ===\n");

    println!("Loading embedded dataset...");
    let db = Dataset::embedded()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: List all cities
    println!("--- Example 1: List all cities ---");
    println!("Total cities: {}", db.len());
    for (i, city) in db.cities().iter().take(5).enumerate() {
        println!("{}. {} ({}) [{}]", i + 1, city.name(), city.name_en(), city.region());
    }
    println!("... and {} more\n", db.len().saturating_sub(5));

    // Example 2: Metrics of one city
    println!("--- Example 2: Metrics for Shenzhen ---");
    if let Some(city) = db.find_by_id_or_name("Shenzhen") {
        println!("Latest GDP: {} 亿元", format_number(latest_gdp(city), 0));
        println!("Growth: {}", format_signed_percent(growth_rate(city), 2));
        println!("CAGR: {}", format_percent(series_cagr(city), 2));
        println!("Per capita: {} 万元", format_number(per_capita_gdp(city), 2));
    }
    println!();

    // Example 3: Headline figures
    println!("--- Example 3: Dashboard stats ---");
    if let Some(stats) = dashboard_stats(db.cities()) {
        println!("Total GDP: {}", stats.total_gdp_formatted);
        println!("Average growth: {}", stats.average_growth_formatted);
        println!("Largest economy: {}", stats.top_gdp.name);
        println!("Fastest growth: {}", stats.top_growth.name);
    }
    println!();

    // Example 4: City grid sorted by GDP
    println!("--- Example 4: City grid (gdp-desc) ---");
    let sorted = sort(db.cities(), SortKey::GdpDesc);
    for card in city_cards(&sorted) {
        println!("{}  {} 亿元  {}", card.name, card.latest_gdp, card.growth.label());
    }

    Ok(())
}

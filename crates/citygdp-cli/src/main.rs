//! citygdp: command-line front end for citygdp-core
//!
//! Prints the same views the dashboard renders: headline stats, the city
//! grid, a city's detail with its yearly growth table, the comparison table
//! with the CAGR ranking, and the GDP ranking.
//!
//! Usage examples
//! --------------
//!
//! - Headline figures
//!   $ citygdp stats
//!
//! - City grid, filtered and sorted
//!   $ citygdp cities --search zhou
//!   $ citygdp cities --region 华东 --sort growth-desc
//!
//! - One city (id or name)
//!   $ citygdp city 1
//!   $ citygdp city shenzhen
//!
//! - Side-by-side comparison of 2 to 4 cities
//!   $ citygdp compare 1 3 8
//!
//! Data source
//! -----------
//!
//! Without `--input` the dataset embedded in `citygdp-core` is used. Use
//! `--regions` to load only some regions and `--population-unit persons`
//! for datasets that store raw headcounts. Set `RUST_LOG=info` to see load
//! diagnostics.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use citygdp_core::api::{city_cards, CityDetail};
use citygdp_core::chart::{gdp_bar_chart, top_trends};
use citygdp_core::compare::{build_comparison_rows, rank_cities_by_cagr, Comparison};
use citygdp_core::format::format_number;
use citygdp_core::search::{apply_query, Query, SortKey};
use citygdp_core::selection::{Selection, MAX_SELECTIONS};
use citygdp_core::summary::dashboard_stats;
use citygdp_core::{Dataset, LoadOptions, PopulationUnit, Region};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let db = load(&args)?;
    debug!(cities = db.len(), "dataset ready");

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset:");
            println!("  Cities: {}", stats.cities);
            println!("  Regions: {}", stats.regions);
            if let (Some(first), Some(last)) = (stats.first_year, stats.last_year) {
                println!("  Years: {first}-{last}");
            }
            match dashboard_stats(db.cities()) {
                Some(d) => {
                    println!("Dashboard ({}):", d.latest_year.map_or("-".into(), |y| y.to_string()));
                    println!("  Total GDP: {}", d.total_gdp_formatted);
                    println!("  Average growth: {}", d.average_growth_formatted);
                    println!("  Largest economy: {} ({} 亿元)", d.top_gdp.name, d.top_gdp.formatted);
                    println!("  Fastest growth: {} ({})", d.top_growth.name, d.top_growth.formatted);
                }
                None => println!("No cities loaded."),
            }
        }

        Commands::Cities {
            search,
            region,
            sort,
        } => {
            let query = Query::new()
                .with_search(search)
                .with_region(Region::parse_filter(region.as_deref().unwrap_or(""))?)
                .with_sort(SortKey::parse_optional(sort.as_deref().unwrap_or(""))?);
            let matches = apply_query(db.cities(), &query);
            if matches.is_empty() {
                println!("No cities found matching the query.");
            } else {
                for card in city_cards(&matches) {
                    println!(
                        "{:>3}  {} ({}) [{}]  GDP {} 亿元  {}  人均 {} 万元",
                        card.id,
                        card.name,
                        card.name_en,
                        card.region,
                        card.latest_gdp,
                        card.growth.label(),
                        card.per_capita_gdp
                    );
                }
            }
        }

        Commands::City { id } => match db.find_by_id_or_name(&id) {
            Some(city) => {
                let d = CityDetail::from_city(city);
                println!("{}", d.title);
                println!("Region: {}", d.card.region);
                println!("Population: {} 万人", d.card.population);
                println!("Area: {} km²", d.area);
                println!("Latest GDP: {} 亿元", d.card.latest_gdp);
                println!("Growth: {}", d.card.growth.signed);
                println!("CAGR: {}", d.cagr);
                println!("Per capita: {} 万元", d.card.per_capita_gdp);
                if !d.description.is_empty() {
                    println!("{}", d.description);
                }
                println!("Year  GDP (亿元)  Growth");
                for row in d.years {
                    let growth = row.growth.map_or_else(|| "-".to_string(), |g| g.signed);
                    println!("{}  {:>10}  {}", row.year, row.gdp, growth);
                }
            }
            None => eprintln!("No city found for: {id}"),
        },

        Commands::Compare { ids } => {
            if let Some(unknown) = ids.iter().find(|id| db.find(id).is_none()) {
                bail!("unknown city id: {unknown}");
            }
            if ids.len() > MAX_SELECTIONS {
                warn!(max = MAX_SELECTIONS, given = ids.len(), "ignoring extra cities");
            }
            let selection = Selection::from_ids(ids.iter().map(String::as_str));
            let picked = selection.resolve(db.cities());
            match build_comparison_rows(&picked) {
                Comparison::InsufficientSelection { selected } => {
                    println!("Select at least 2 cities to compare (got {selected}).");
                }
                Comparison::Table { columns, rows } => {
                    let header: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
                    println!("{:<20}{}", "", header.join("\t"));
                    for row in rows {
                        println!("{:<20}{}", row.label, row.values.join("\t"));
                    }
                    println!();
                    println!("CAGR ranking:");
                    for (rank, e) in rank_cities_by_cagr(&picked).entries.iter().enumerate() {
                        println!("  {}. {} {}", rank + 1, e.name, e.formatted);
                    }
                }
            }
        }

        Commands::Top { n } => {
            for bar in gdp_bar_chart(db.cities()) {
                let width = (bar.percent / 5.0).round() as usize;
                println!("{:<6}{:>12}  {}", bar.label, bar.formatted, "█".repeat(width));
            }
            let chart = top_trends(db.cities(), n);
            println!();
            let years: Vec<String> = chart.years.iter().map(i32::to_string).collect();
            println!("{:<6}{}", "", years.join("\t"));
            for s in chart.series {
                let values: Vec<String> = s
                    .values
                    .iter()
                    .map(|v| v.map_or_else(|| "-".to_string(), |v| format_number(v, 0)))
                    .collect();
                println!("{:<6}{}", s.label, values.join("\t"));
            }
        }
    }

    Ok(())
}

fn load(args: &CliArgs) -> anyhow::Result<Dataset> {
    let options = LoadOptions {
        population_unit: args.population_unit.parse::<PopulationUnit>()?,
        regions: args
            .regions
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|x| !x.is_empty())
                    .map(str::parse::<Region>)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?,
    };

    if let Some(remote) = load_remote(args, &options) {
        return remote;
    }

    match &args.input {
        Some(path) => {
            Dataset::load_from_path(path, &options).with_context(|| format!("loading {path}"))
        }
        None => Dataset::embedded_with(&options).context("loading embedded dataset"),
    }
}

#[cfg(feature = "fetch")]
fn load_remote(args: &CliArgs, options: &LoadOptions) -> Option<anyhow::Result<Dataset>> {
    args.url
        .as_ref()
        .map(|url| Dataset::fetch(url, options).with_context(|| format!("fetching {url}")))
}

#[cfg(not(feature = "fetch"))]
fn load_remote(_args: &CliArgs, _options: &LoadOptions) -> Option<anyhow::Result<Dataset>> {
    None
}

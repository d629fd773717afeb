//! citygdp-rs prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::analytics::{growth_rate, latest_gdp, per_capita_gdp, series_cagr};
pub use crate::api::{city_cards, CityCard, CityDetail};
pub use crate::chart::{gdp_bar_chart, top_trends};
pub use crate::compare::{build_comparison_rows, rank_cities_by_cagr, Comparison};
pub use crate::error::{CityGdpError, Result};
pub use crate::format::{format_number, format_percent, format_signed_percent};
pub use crate::loader::{LoadOptions, PopulationUnit};
pub use crate::model::{City, CityId, Dataset, GdpPoint, Region};
pub use crate::search::{apply_query, filter, sort, Query, SortKey};
pub use crate::selection::{Selection, SelectionState, ToggleOutcome};
pub use crate::summary::dashboard_stats;
pub use crate::traits::{GdpMetrics, NameMatch, StandardMetrics};

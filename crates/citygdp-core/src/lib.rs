// crates/citygdp-core/src/lib.rs

pub mod analytics;
pub mod api; // JSON views for the grid and detail modal
pub mod chart;
pub mod common;
pub mod compare;
pub mod error;
pub mod format;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod selection;
pub mod summary;
pub mod text;
pub mod traits;
// Wire format of dataset files; converted by model::convert
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{CityGdpError, Result};
pub use model::{City, CityId, Dataset, GdpPoint, Region};
pub use crate::common::DatasetStats;
pub use crate::loader::{LoadOptions, PopulationUnit};
pub use crate::search::{Query, SortKey};
pub use crate::selection::{Selection, ToggleOutcome};
pub use crate::compare::Comparison;
pub use crate::traits::{GdpMetrics, NameMatch, StandardMetrics};

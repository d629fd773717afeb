// crates/citygdp-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats), these counts reflect
/// the in-memory collection after any region filtering applied at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub cities: usize,
    pub regions: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

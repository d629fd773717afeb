// crates/citygdp-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use super::LoadOptions;
use crate::error::{CityGdpError, Result};
use crate::model::Dataset;
use tracing::info;

impl Dataset {
    /// Fetches the dataset document with a single blocking GET.
    ///
    /// No retries: a failed request is reported once and the caller decides
    /// what to show.
    pub fn fetch(url: &str, options: &LoadOptions) -> Result<Self> {
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| CityGdpError::Http(e.to_string()))?;
        let body = response
            .text()
            .map_err(|e| CityGdpError::Http(e.to_string()))?;

        let db = Self::from_json_str(&body, options)?;
        info!(cities = db.len(), %url, "dataset fetched");
        Ok(db)
    }
}

// crates/citygdp-core/src/traits.rs
use crate::analytics;
use crate::model::City;
use crate::text::{contains_folded, fold_case};

/// Name-based matching helpers for types that expose a display name and,
/// optionally, an alternate (English) name.
///
/// Implementors provide `&str` views of their names and get:
/// - [`NameMatch::is_named`]: case-insensitive equality on either name
/// - [`NameMatch::matches_search`]: case-insensitive substring on either name
///
/// # Examples
/// ```rust
/// use citygdp_core::traits::NameMatch;
///
/// struct Place(&'static str, &'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
///     fn alt_name_str(&self) -> Option<&str> { Some(self.1) }
/// }
///
/// assert!(Place("上海", "Shanghai").is_named("shanghai"));
/// assert!(Place("上海", "Shanghai").matches_search("HAI"));
/// assert!(Place("上海", "Shanghai").matches_search("上"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name.
    fn name_str(&self) -> &str;

    /// Returns the alternate name, if any.
    fn alt_name_str(&self) -> Option<&str> {
        None
    }

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        let q = fold_case(q.trim());
        fold_case(self.name_str()) == q || self.alt_name_str().is_some_and(|n| fold_case(n) == q)
    }

    /// `true` when `term` is empty or is a case-insensitive substring of
    /// either name.
    #[inline]
    fn matches_search(&self, term: &str) -> bool {
        contains_folded(self.name_str(), term)
            || self.alt_name_str().is_some_and(|n| contains_folded(n, term))
    }
}

/// Per-city metrics consumed by the collection pipeline.
///
/// The pipeline never calls the analytics functions directly; it goes
/// through this trait so callers can substitute their own metric source
/// (precomputed values, a different CAGR window, test doubles).
pub trait GdpMetrics {
    fn latest_gdp(&self, city: &City) -> f64;
    fn growth_rate(&self, city: &City) -> f64;
    /// CAGR used for comparisons and rankings, as a percentage.
    fn cagr(&self, city: &City) -> f64;

    fn per_capita_gdp(&self, city: &City) -> f64 {
        analytics::per_capita_gdp(city)
    }

    fn gdp_density(&self, city: &City) -> f64 {
        analytics::gdp_density(city)
    }
}

/// The canonical metrics: straight from [`crate::analytics`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMetrics;

impl GdpMetrics for StandardMetrics {
    fn latest_gdp(&self, city: &City) -> f64 {
        analytics::latest_gdp(city)
    }

    fn growth_rate(&self, city: &City) -> f64 {
        analytics::growth_rate(city)
    }

    fn cagr(&self, city: &City) -> f64 {
        analytics::series_cagr(city)
    }
}

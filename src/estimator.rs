//! Revenue estimation over a resolved niche entry.

use crate::loader;
use crate::models::{NicheTable, RateRange};
use crate::rates::as_range;
use serde::Serialize;

/// Everything the presentation layer needs to render one estimate: the
/// per-1,000 rate ranges actually used and the revenue triples scaled by
/// views / 1000.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EstimateResult {
    /// Publisher-side rate (revenue per 1,000 views).
    pub rpm: RateRange,
    /// Advertiser-side rate (cost per 1,000 impressions).
    pub cpm: RateRange,
    /// Estimated revenue at the low/mid/high RPM points.
    pub rpm_estimate: RateRange,
    /// Estimated revenue at the low/mid/high CPM points.
    pub cpm_estimate: RateRange,
}

/// Compute revenue estimates for `views` monthly views of the given niche.
///
/// Total function: an unknown key resolves to an empty entry, a spec that
/// fails normalization is replaced by the default `general` range for that
/// field, and the view count is coerced to a non-negative finite number.
pub fn compute_estimate(niche_key: &str, table: &NicheTable, views: f64) -> EstimateResult {
    let views = if views.is_finite() { views.max(0.0) } else { 0.0 };

    let entry = table.get(niche_key);
    let (cpm_fallback, rpm_fallback) = general_fallback();
    let rpm = as_range(entry.and_then(|e| e.rpm.as_ref())).unwrap_or(rpm_fallback);
    let cpm = as_range(entry.and_then(|e| e.cpm.as_ref())).unwrap_or(cpm_fallback);

    let per_thousand = views / 1000.0;
    EstimateResult {
        rpm,
        cpm,
        rpm_estimate: rpm.scale(per_thousand),
        cpm_estimate: cpm.scale(per_thousand),
    }
}

/// Normalized `general` ranges from the built-in table, used whenever a
/// niche has no usable rate of its own.
fn general_fallback() -> (RateRange, RateRange) {
    let defaults = loader::default_table();
    let entry = defaults.get("general");
    (
        as_range(entry.and_then(|e| e.cpm.as_ref())).unwrap_or_default(),
        as_range(entry.and_then(|e| e.rpm.as_ref())).unwrap_or_default(),
    )
}

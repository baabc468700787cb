//! Niche rate table loading.
//!
//! Best-effort retrieval of an external JSON table with total fallback:
//! any failure along the way (unreachable source, non-success status,
//! unreadable file, malformed payload) degrades to the built-in default
//! table. Callers never see an error.

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::{NicheEntry, NicheTable};
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Built-in rate table used whenever the external source is unavailable.
/// The `general` entry doubles as the substitute range when a niche has no
/// usable rate of its own.
pub fn default_table() -> NicheTable {
    let mut table = NicheTable::default();
    table.insert(
        "general",
        NicheEntry::new(
            json!({ "low": 1.5, "mid": 3.0, "high": 4.0 }),
            json!({ "low": 0.6, "mid": 1.65, "high": 2.4 }),
        ),
    );
    table.insert(
        "tech",
        NicheEntry::new(
            json!({ "low": 4.0, "mid": 8.0, "high": 12.0 }),
            json!({ "low": 2.5, "mid": 4.4, "high": 6.0 }),
        ),
    );
    table
}

/// Load the niche table from the configured source, falling back to the
/// built-in defaults on any failure.
pub async fn load_table(config: &AppConfig) -> NicheTable {
    match try_load(config).await {
        Ok(table) => {
            info!(
                niches = table.len(),
                source = %config.data_source,
                "[LOAD] rate table loaded"
            );
            table
        }
        Err(e) => {
            warn!(
                error = %e,
                source = %config.data_source,
                "[LOAD] source unavailable, using built-in rates"
            );
            default_table()
        }
    }
}

async fn try_load(config: &AppConfig) -> Result<NicheTable> {
    let source = config.data_source.as_str();
    let raw = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_text(Url::parse(source)?, config.fetch_timeout_secs).await?
    } else {
        tokio::fs::read_to_string(source).await?
    };
    Ok(serde_json::from_str(strip_wrappers(&raw))?)
}

async fn fetch_text(url: Url, timeout_secs: u64) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(AppError::Status(response.status().as_u16()));
    }
    Ok(response.text().await?)
}

/// Strip a UTF-8 byte-order mark and an optional markdown code fence from
/// the payload. Some exports wrap the JSON in ```json ... ``` markers.
pub fn strip_wrappers(raw: &str) -> &str {
    let mut text = raw.trim_start_matches('\u{feff}').trim();
    if let Some(rest) = text.strip_prefix("```") {
        // drop the opening fence line itself ("```" or "```json")
        text = match rest.find('\n') {
            Some(newline) => rest[newline + 1..].trim(),
            None => "",
        };
        if let Some(body) = text.strip_suffix("```") {
            text = body.trim_end();
        }
    }
    text
}

//! # Region Commands
//!
//! Per-run edits to the region tax table, and listing it.
//!
//! ## Edit Order
//! ```text
//! configured table ──► + each --add-region ──► − each --remove-region ──► effective table
//! ```
//! Each step builds a new table; the configured one is left as loaded.

use retail_core::{tax_rate_label, RegionTaxMap};
use tracing::{debug, info};

use crate::error::AppResult;

/// Applies `--add-region` then `--remove-region` edits to `base`.
pub fn apply_region_edits(
    base: &RegionTaxMap,
    additions: &[(String, f64)],
    removals: &[String],
) -> AppResult<RegionTaxMap> {
    let mut table = base.clone();

    for (code, rate) in additions {
        table = table.with_region(code, *rate)?;
        info!(code = %code, rate, "Region added");
    }

    for code in removals {
        table = table.without_region(code)?;
        info!(code = %code, "Region removed");
    }

    debug!(regions = table.len(), "Region table ready");
    Ok(table)
}

/// Renders the region table, one `CODE  RATE` line per region.
pub fn list(region_tax_map: &RegionTaxMap, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(region_tax_map)?);
    }

    let lines: Vec<String> = region_tax_map
        .codes()
        .map(|code| format!("{code}  {}", tax_rate_label(code, region_tax_map)))
        .collect();

    Ok(lines.join("\n"))
}

// src/reporting/json.rs
//! JSON rendering of the report rows.

use anyhow::Result;

use super::ProjectRow;

pub fn render(rows: &[ProjectRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

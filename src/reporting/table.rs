// src/reporting/table.rs
//! CSV rendering of the report table.

use anyhow::Result;
use csv::WriterBuilder;

use super::{ProjectRow, HEADER};

/// Header first, then one row per project in processing order. Numeric
/// fields go through Rust's `Display`, which is locale-invariant; NaN
/// renders as `NaN`.
pub fn render(rows: &[ProjectRow]) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new().from_writer(&mut buf);
        writer.write_record(HEADER)?;
        for row in rows {
            writer.write_record(&[
                row.project.clone(),
                row.di_proportion.to_string(),
                row.total_loc.to_string(),
                row.mean_cbo.to_string(),
                row.normalized_cbo.to_string(),
                row.mean_effective_coupling.to_string(),
                row.normalized_effective_coupling.to_string(),
                row.mean_ca.to_string(),
                row.mean_ce.to_string(),
                row.mean_effective_ce.to_string(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

// src/protocol.rs
//! Line protocol spoken by the external analyzer.
//!
//! Every fact arrives as one whitespace-tokenized line:
//! `ckjm-analyzer <class> <tag> <payload>...`. Lines without the sentinel
//! are diagnostic noise from the tool and are skipped wholesale.

use crate::error::{AnalyzerError, Result};
use crate::types::{ProjectContext, RawMetrics};

/// Sentinel token opening every fact line.
pub const SENTINEL: &str = "ckjm-analyzer";

/// Positional field count of a `metrics` payload.
pub const METRIC_FIELDS: usize = 18;

/// One decoded record. Tags are resolved here, once, so nothing downstream
/// dispatches on strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    ParameterTypes(Vec<String>),
    Interface(String),
    EfferentCouplings(Vec<String>),
    Metrics(RawMetrics),
}

/// A classified input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Missing sentinel (or nothing after it): not protocol output.
    Noise,
    /// A fact about `class`. `record` is `None` when the tag is unknown,
    /// absent, or carries an empty payload; the class is registered anyway.
    Fact {
        class: String,
        record: Option<Record>,
    },
}

pub fn decode_line(line: &str) -> Result<Line> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(SENTINEL) {
        return Ok(Line::Noise);
    }
    let Some(class) = tokens.next() else {
        return Ok(Line::Noise);
    };
    let class = class.to_string();
    let Some(tag) = tokens.next() else {
        return Ok(Line::Fact {
            class,
            record: None,
        });
    };
    let payload: Vec<&str> = tokens.collect();
    if payload.is_empty() {
        return Ok(Line::Fact {
            class,
            record: None,
        });
    }
    let record = match tag {
        "parameter_types" => Some(Record::ParameterTypes(owned(&payload))),
        "interfaces" => Some(Record::Interface(payload[0].to_string())),
        "efferent_couplings" => Some(Record::EfferentCouplings(owned(&payload))),
        "metrics" => Some(Record::Metrics(parse_metrics(&class, &payload)?)),
        _ => None,
    };
    Ok(Line::Fact { class, record })
}

/// Folds one captured output blob into the project context.
///
/// # Errors
/// Fails on the first malformed `metrics` record; partial metrics for a
/// class are not usable, so the caller abandons the whole project.
pub fn ingest_output(output: &str, ctx: &mut ProjectContext) -> Result<()> {
    for line in output.lines() {
        match decode_line(line)? {
            Line::Noise => {}
            Line::Fact { class, record } => {
                let rec = ctx.record_mut(&class);
                match record {
                    None => {}
                    Some(Record::ParameterTypes(types)) => {
                        rec.parameter_types.extend(types);
                    }
                    // Last write wins, mirroring the analyzer's own behavior
                    // for repeated interface records.
                    Some(Record::Interface(name)) => rec.interface = name,
                    Some(Record::EfferentCouplings(targets)) => {
                        rec.efferent_couplings.extend(targets);
                    }
                    Some(Record::Metrics(metrics)) => rec.metrics = Some(metrics),
                }
            }
        }
    }
    Ok(())
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_string()).collect()
}

fn parse_metrics(class: &str, payload: &[&str]) -> Result<RawMetrics> {
    if payload.len() < METRIC_FIELDS {
        return Err(AnalyzerError::MetricParse {
            class_name: class.to_string(),
            reason: format!("expected {METRIC_FIELDS} fields, got {}", payload.len()),
        });
    }
    let mut fields = [0.0_f64; METRIC_FIELDS];
    for (index, token) in payload.iter().take(METRIC_FIELDS).enumerate() {
        fields[index] = token.parse().map_err(|_| AnalyzerError::MetricParse {
            class_name: class.to_string(),
            reason: format!("field {index} is not numeric: `{token}`"),
        })?;
    }
    Ok(RawMetrics {
        wmc: fields[0],
        dit: fields[1],
        noc: fields[2],
        cbo: fields[3],
        rfc: fields[4],
        lcom: fields[5],
        ca: fields[6],
        ce: fields[7],
        npm: fields[8],
        lcom3: fields[9],
        loc: fields[10],
        dam: fields[11],
        moa: fields[12],
        mfa: fields[13],
        cam: fields[14],
        ic: fields[15],
        cbm: fields[16],
        amc: fields[17],
    })
}

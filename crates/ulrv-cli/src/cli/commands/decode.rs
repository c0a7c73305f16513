//! `ulrv decode <ULR>...` – split ULRs into their fields.

use anyhow::Result;
use serde::Serialize;
use ulrv_core::ulr::{self, ScopeStatus, UlrRecord};

use crate::cli::Outcome;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecodeRow<'a> {
    input: &'a str,
    #[serde(flatten)]
    record: UlrRecord,
    scope_status: &'static str,
}

fn decode_row(input: &str) -> DecodeRow<'_> {
    let decoded = ulr::decode(input);
    DecodeRow {
        input,
        record: UlrRecord::from(&decoded),
        scope_status: ScopeStatus::of(&decoded).label(),
    }
}

pub fn run_decode(inputs: &[String], json: bool) -> Result<Outcome> {
    let rows: Vec<DecodeRow<'_>> = inputs.iter().map(|s| decode_row(s)).collect();
    let invalid = rows.iter().filter(|r| !r.record.is_valid).count();
    tracing::info!(total = rows.len(), invalid, "decode");

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!(
            "{:<20} {:<4} {:<4} {:<4} {:<4} {:<8} {:<5} {}",
            "INPUT", "TYPE", "CERT", "YEAR", "NODE", "LEDGER", "SCOPE", "STATUS"
        );
        for r in &rows {
            let rec = &r.record;
            println!(
                "{:<20} {:<4} {:<4} {:<4} {:<4} {:<8} {:<5} {}",
                r.input.trim(),
                dash_if_empty(&rec.discipline),
                dash_if_empty(&rec.cert_number),
                dash_if_empty(&rec.year),
                dash_if_empty(&rec.location_node),
                dash_if_empty(&rec.ledger),
                dash_if_empty(&rec.scope_flag),
                r.scope_status
            );
        }
    }

    Ok(Outcome::from_accepted(invalid == 0))
}

fn dash_if_empty(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

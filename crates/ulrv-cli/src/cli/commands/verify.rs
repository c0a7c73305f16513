//! `ulrv verify` – check a report's claims against the lab registry.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use ulrv_core::config::UlrvConfig;
use ulrv_core::extract::{extract_fields, parse_issue_date};
use ulrv_core::registry::{KnownUlrs, Registry, ReportClaim, Verification};
use ulrv_core::ulr::{self, ScopeStatus};

use super::scan::read_text;
use crate::cli::Outcome;

#[derive(Debug, Clone, Default, Args)]
pub struct VerifyArgs {
    /// Accreditation certificate number, e.g. TC-5589.
    #[arg(long)]
    pub cert_no: Option<String>,
    /// ULR printed on the report.
    #[arg(long)]
    pub ulr: Option<String>,
    /// Lab type named on the report (Testing, Calibration, ...).
    #[arg(long)]
    pub lab_type: Option<String>,
    /// Report issue date: DD/MM/YYYY, "DD MON YYYY" or YYYY-MM-DD.
    #[arg(long, value_parser = parse_date_arg)]
    pub issue_date: Option<NaiveDate>,
    /// Fill missing claims from a report text file.
    #[arg(long, value_name = "PATH")]
    pub from_text: Option<PathBuf>,
    /// Lab registry TOML (overrides `registry_path` in config).
    #[arg(long, value_name = "PATH")]
    pub registry: Option<PathBuf>,
    /// Already-recorded ULRs, one per line (overrides `known_ulrs_path` in config).
    #[arg(long, value_name = "PATH")]
    pub known_ulrs: Option<PathBuf>,
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_issue_date(s)
        .or_else(|| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .ok_or_else(|| format!("unrecognised date {s:?}"))
}

#[derive(Debug, Serialize)]
struct VerifyReport<'a> {
    #[serde(flatten)]
    verification: Verification<'a>,
    ulr_scope: Option<&'static str>,
}

/// Flags win; the text file only fills what the flags left empty.
fn build_claim(args: &VerifyArgs) -> Result<ReportClaim> {
    let from_text = match &args.from_text {
        Some(path) => ReportClaim::from(&extract_fields(&read_text(path)?)),
        None => ReportClaim::default(),
    };
    Ok(ReportClaim {
        certificate_no: args.cert_no.clone().or(from_text.certificate_no),
        ulr: args.ulr.clone().or(from_text.ulr),
        lab_type: args.lab_type.clone().or(from_text.lab_type),
        issue_date: args.issue_date.or(from_text.issue_date),
    })
}

pub fn run_verify(args: &VerifyArgs, cfg: &UlrvConfig) -> Result<Outcome> {
    let registry_path: &Path = args
        .registry
        .as_deref()
        .or(cfg.registry_path.as_deref())
        .ok_or_else(|| anyhow!("no lab registry given; pass --registry or set registry_path in config"))?;
    let registry = Registry::load(registry_path)
        .with_context(|| format!("load registry {}", registry_path.display()))?;

    let known = match args.known_ulrs.as_deref().or(cfg.known_ulrs_path.as_deref()) {
        Some(path) => KnownUlrs::load(path)
            .with_context(|| format!("load known ULRs {}", path.display()))?,
        None => KnownUlrs::new(),
    };

    let claim = build_claim(args)?;
    let today = chrono::Local::now().date_naive();
    let verification = registry.verify(&claim, &known, today);
    tracing::info!(
        cert_no = claim.certificate_no.as_deref().unwrap_or("-"),
        verdict = %verification.verdict,
        "verify"
    );

    let ulr_scope = claim
        .ulr
        .as_deref()
        .map(|u| ScopeStatus::of(&ulr::decode(u)).label());
    let outcome = Outcome::from_accepted(verification.is_valid());

    if args.json {
        let report = VerifyReport {
            verification,
            ulr_scope,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Verdict:        {}", verification.verdict);
        if let Some(lab) = verification.lab {
            println!("Laboratory:     {}", lab.laboratory_name);
            println!("Lab Type:       {}", lab.lab_type);
            println!("Certificate No: {}", lab.cert_no);
            let valid_till = lab
                .expiry_date()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("Valid Till:     {}", valid_till);
        }
        if let (Some(raw), Some(scope)) = (claim.ulr.as_deref(), ulr_scope) {
            println!("ULR:            {} ({})", raw.trim(), scope);
        }
    }

    Ok(outcome)
}

//! `ulrv format <ULR>` – print the spaced display form.

use anyhow::Result;
use ulrv_core::ulr;

use crate::cli::Outcome;

/// Prints the display form, or an empty line when the ULR is invalid.
pub fn run_format(input: &str) -> Result<Outcome> {
    let decoded = ulr::decode(input);
    println!("{}", ulr::format(&decoded));
    if !decoded.is_valid() {
        tracing::info!("format: rejected {:?}", input);
    }
    Ok(Outcome::from_accepted(decoded.is_valid()))
}

//! Load, transform, save. One job per invocation.

use std::path::Path;

use bitveil::{combine, extract};

use crate::args::Job;
use crate::error::CliError;
use crate::image_io::{load_grid, save_grid};

pub fn run(job: &Job) -> Result<(), CliError> {
    match job {
        Job::Encode {
            carrier,
            payload,
            output,
        } => encode(carrier, payload, output),
        Job::Decode { source, output } => decode(source, output),
    }
}

/// Hide `payload_path` inside `carrier_path` and write the result to `out_path`.
///
/// Nothing is written when the two images differ in size.
pub fn encode(carrier_path: &Path, payload_path: &Path, out_path: &Path) -> Result<(), CliError> {
    let carrier = load_grid(carrier_path)?;
    log::info!(
        "loaded carrier {} ({})",
        carrier_path.display(),
        carrier.dimensions()
    );

    let payload = load_grid(payload_path)?;
    log::info!(
        "loaded payload {} ({})",
        payload_path.display(),
        payload.dimensions()
    );

    let encoded = combine(&carrier, &payload)?;
    save_grid(&encoded, out_path)?;
    log::info!("wrote encoded image to {}", out_path.display());
    Ok(())
}

/// Recover the hidden image from `source_path` and write it to `out_path`.
pub fn decode(source_path: &Path, out_path: &Path) -> Result<(), CliError> {
    let source = load_grid(source_path)?;
    log::info!(
        "loaded encoded image {} ({})",
        source_path.display(),
        source.dimensions()
    );

    let hidden = extract(&source);
    save_grid(&hidden, out_path)?;
    log::info!("wrote recovered image to {}", out_path.display());
    Ok(())
}

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

mod args;
mod error;
mod image_io;
mod pipeline;
#[cfg(test)]
mod testutil;

use args::Args;

fn init(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(args.log_level());
    builder.format_timestamp(None);
    builder.try_init().context("failed to initialize logging")?;

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .with_context(|| format!("failed to start {} worker threads", args.threads))?;
    }
    log::debug!("using {} worker threads", rayon::current_num_threads());
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init(&args) {
        eprintln!("ERROR: {e:#}");
        return ExitCode::from(1);
    }

    let result = args.job().and_then(|job| {
        log::debug!("running {job:?}");
        pipeline::run(&job)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

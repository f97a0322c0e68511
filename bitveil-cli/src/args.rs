use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::CliError;

/// Hide a PNG image inside the two low bits of another, or recover it
#[derive(Parser, Debug, Default)]
#[command(name = "bitveil", version)]
pub struct Args {
    /// The mode to use: `encode` or `decode`
    #[arg(short, long)]
    pub mode: Option<String>,

    /// The path of the source (carrier) or encoded image
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// The path of the image to encode into the source
    #[arg(short, long)]
    pub aux: Option<PathBuf>,

    /// The path of the output image (always written as PNG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Worker threads for the pixel transform (0 = one per core)
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// A fully validated unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Encode {
        carrier: PathBuf,
        payload: PathBuf,
        output: PathBuf,
    },
    Decode {
        source: PathBuf,
        output: PathBuf,
    },
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Check the required arguments for the chosen mode. No files are touched.
    pub fn job(&self) -> Result<Job, CliError> {
        let encode = match self.mode.as_deref() {
            Some("encode") => true,
            Some("decode") => false,
            None | Some("") => {
                return Err(CliError::usage(
                    "No mode was specified. Please use -m `encode` or `decode`.",
                ))
            }
            Some(_) => {
                return Err(CliError::usage(
                    "Invalid mode. Please use -m `encode` or `decode`.",
                ))
            }
        };

        let source = required(
            &self.source,
            "Source path not specified. Please specify a source path with -s",
        )?;
        let output = required(
            &self.output,
            "Output path not specified. Please specify an output path with -o",
        )?;

        if encode {
            let payload = required(
                &self.aux,
                "An auxiliary path must be specified for this operation. Please specify a path with -a",
            )?;
            Ok(Job::Encode {
                carrier: source,
                payload,
                output,
            })
        } else {
            if let Some(aux) = &self.aux {
                log::warn!("ignoring auxiliary image {} in decode mode", aux.display());
            }
            Ok(Job::Decode { source, output })
        }
    }
}

fn required(path: &Option<PathBuf>, msg: &str) -> Result<PathBuf, CliError> {
    path.clone().ok_or_else(|| CliError::usage(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bitveil").chain(argv.iter().copied())).unwrap()
    }

    fn usage_message(args: &Args) -> String {
        match args.job() {
            Err(CliError::Usage(msg)) => msg,
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn encode_job_from_short_flags() {
        let args = parse(&["-m", "encode", "-s", "c.png", "-a", "p.png", "-o", "out.png"]);
        assert_eq!(
            args.job().unwrap(),
            Job::Encode {
                carrier: "c.png".into(),
                payload: "p.png".into(),
                output: "out.png".into(),
            }
        );
    }

    #[test]
    fn decode_job_from_long_flags() {
        let args = parse(&["--mode", "decode", "--source", "e.png", "--output", "h.png"]);
        assert_eq!(
            args.job().unwrap(),
            Job::Decode {
                source: "e.png".into(),
                output: "h.png".into(),
            }
        );
    }

    #[test]
    fn decode_ignores_aux() {
        let args = parse(&["-m", "decode", "-s", "e.png", "-a", "x.png", "-o", "h.png"]);
        assert!(matches!(args.job(), Ok(Job::Decode { .. })));
    }

    #[test]
    fn missing_mode() {
        let args = parse(&["-s", "c.png", "-o", "out.png"]);
        assert!(usage_message(&args).starts_with("No mode was specified"));
    }

    #[test]
    fn invalid_mode() {
        let args = parse(&["-m", "hide", "-s", "c.png", "-o", "out.png"]);
        assert!(usage_message(&args).starts_with("Invalid mode"));
    }

    #[test]
    fn mode_is_checked_before_paths() {
        let args = Args::default();
        assert!(usage_message(&args).starts_with("No mode"));
    }

    #[test]
    fn missing_source() {
        let args = parse(&["-m", "decode", "-o", "out.png"]);
        assert!(usage_message(&args).starts_with("Source path not specified"));
    }

    #[test]
    fn missing_output() {
        let args = parse(&["-m", "decode", "-s", "e.png"]);
        assert!(usage_message(&args).starts_with("Output path not specified"));
    }

    #[test]
    fn encode_requires_aux() {
        let args = parse(&["-m", "encode", "-s", "c.png", "-o", "out.png"]);
        assert!(usage_message(&args).starts_with("An auxiliary path must be specified"));
    }

    #[test]
    fn usage_errors_exit_with_one() {
        assert_eq!(Args::default().job().unwrap_err().exit_code(), 1);
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        assert_eq!(parse(&[]).log_level(), log::LevelFilter::Warn);
        assert_eq!(parse(&["-v"]).log_level(), log::LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_level(), log::LevelFilter::Debug);
        assert_eq!(parse(&["-q"]).log_level(), log::LevelFilter::Error);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["bitveil", "-q", "-v"]);
        assert!(result.is_err());
    }
}

// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::Params;
use crate::progress::Progress;
use crate::runner;

/// Progress sink that prints status lines to stderr, keeping stdout clean
/// for the report.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = CliProgress;
    let summary = runner::run(&params, Some(&mut progress))?;

    if let Some(report) = &summary.report {
        print!("{report}");
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-d" | "--data" => {
                params.data = PathBuf::from(args.next().ok_or("Missing value for --data")?);
            }
            "--city" => params.city = Some(args.next().ok_or("Missing value for --city")?),
            "--industry" => {
                params.industry = Some(args.next().ok_or("Missing value for --industry")?);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-r" | "--report" => params.report = true,
            "--top" => {
                let v: usize = args.next().ok_or("Missing value for --top")?.parse()?;
                if v == 0 { return Err("--top must be at least 1".into()); }
                params.top = v;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    // With no export requested the run would otherwise do nothing visible;
    // default to the report.
    if params.out.is_none() {
        params.report = true;
    }

    Ok(())
}

mod alerts;
mod check;
mod collectors;
mod config;
mod error;
mod models;
mod util;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use collectors::capacity::Statvfs;
use config::Config;
use error::CheckError;

#[derive(Parser, Debug)]
#[command(name = "diskcheck", about = "Report how full each mounted filesystem is", version)]
struct Cli {
    /// Alert when a filesystem is at or above this percentage full
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    threshold: Option<u32>,

    /// Mount table to read (mtab format)
    #[arg(long)]
    mtab: Option<PathBuf>,

    /// Skip mount points containing this substring (repeatable, adds to config)
    #[arg(short = 'x', long = "exclude", value_name = "SUBSTR")]
    exclude: Vec<String>,

    /// Start from an empty exclusion list instead of the configured one
    #[arg(long)]
    no_default_excludes: bool,

    /// Config file (default: ~/.config/diskcheck/diskcheck.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Do not print warnings on stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Overlay command-line flags on the file config.
    fn apply(&self, cfg: &mut Config) {
        let check = &mut cfg.check;
        if let Some(t) = self.threshold {
            check.threshold_pct = t;
        }
        if let Some(p) = &self.mtab {
            check.mtab_path = p.clone();
        }
        if self.no_default_excludes {
            check.exclude.clear();
        }
        check.exclude.extend(self.exclude.iter().cloned());
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };
    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[diskcheck] error: {}", e);
            alerts::EXIT_UNKNOWN
        }
    };
    std::process::exit(code);
}

/// clap's own exit code for bad arguments is 2, which a monitoring harness
/// would read as CRITICAL.
fn usage_exit_code(err: &clap::Error) -> i32 {
    use clap::error::ErrorKind;
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => alerts::EXIT_UNKNOWN,
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let mut cfg = Config::load(cli.config.as_deref())?;
    cli.apply(&mut cfg);

    if cli.print_config {
        return run_print_config(&cfg);
    }
    run_check(&cfg, cli.json, cli.quiet)
}

fn run_print_config(cfg: &Config) -> Result<i32> {
    print!("{}", cfg.to_toml()?);
    Ok(0)
}

fn run_check(cfg: &Config, json: bool, quiet: bool) -> Result<i32> {
    use util::report;

    let run = check::run_check(&cfg.check, &Statvfs)?;

    if !quiet {
        let sample_errors = run.report.mounts.iter().filter_map(|m| m.error());
        for w in run.warnings.iter().chain(sample_errors) {
            warn(w);
        }
    }

    if json {
        println!("{}", report::generate_json(&run.report, &run.warnings)?);
    } else {
        print!("{}", report::generate(&run.report));
    }
    Ok(run.report.status.exit_code())
}

fn warn(err: &CheckError) {
    eprintln!("[diskcheck] warning: {}", err);
}

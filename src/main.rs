use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::error;
use sped_date_filter::{DateRange, DigestAlgorithm, FilterOptions, SpedDateFilter, TextEncoding};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

/// Cut a SPED Fiscal file down to the documents of a period
#[derive(Parser, Debug)]
#[command(name = "sped-date-filter", version, about)]
struct Cli {
    /// SPED file to filter
    input: PathBuf,

    /// Output file (defaults to SPED_FILTRADO_<start>_a_<end>.txt next to the input)
    output: Option<PathBuf>,

    /// First day kept (YYYY-MM-DD, DD/MM/YYYY or ddmmyyyy)
    #[arg(long, value_parser = parse_cli_date)]
    start: NaiveDate,

    /// Last day kept (YYYY-MM-DD, DD/MM/YYYY or ddmmyyyy)
    #[arg(long, value_parser = parse_cli_date)]
    end: NaiveDate,

    /// Text encoding of the file
    #[arg(long, env = "SPED_ENCODING", default_value = "latin1")]
    encoding: String,

    /// Compute a checksum of the filtered output
    #[arg(long, value_enum)]
    digest: Option<DigestArg>,

    /// Lines between progress updates
    #[arg(long, env = "SPED_PROGRESS_INTERVAL", default_value_t = 10_000)]
    progress_interval: u64,

    /// Do not display progress
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DigestArg {
    Sha256,
    Sha512,
}

impl From<DigestArg> for DigestAlgorithm {
    fn from(arg: DigestArg) -> Self {
        match arg {
            DigestArg::Sha256 => DigestAlgorithm::Sha256,
            DigestArg::Sha512 => DigestAlgorithm::Sha512,
        }
    }
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate, String> {
    ["%Y-%m-%d", "%d/%m/%Y", "%d%m%Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw.trim(), format).ok())
        .ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD or DD/MM/YYYY", raw))
}

/// Output name proposed when none is given
fn default_output_path(input: &Path, range: &DateRange) -> PathBuf {
    let name = format!(
        "SPED_FILTRADO_{}_a_{}.txt",
        range.start().format("%Y%m%d"),
        range.end().format("%Y%m%d")
    );
    input.with_file_name(name)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.end < cli.start {
        eprintln!("Error: end date {} is before start date {}", cli.end, cli.start);
        return ExitCode::FAILURE;
    }

    let encoding = match TextEncoding::for_label(&cli.encoding) {
        Ok(encoding) => encoding,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let range = DateRange::new(cli.start, cli.end);
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, &range));

    let filter = SpedDateFilter::new(FilterOptions {
        encoding,
        progress_interval: cli.progress_interval,
        digest: cli.digest.map(DigestAlgorithm::from),
    });

    // The pass runs on a worker; progress comes back over a channel so this
    // thread only renders it
    let (progress_tx, progress_rx) = mpsc::channel::<u8>();
    let input = cli.input.clone();
    let worker_output = output.clone();
    let quiet = cli.quiet;
    let worker = thread::spawn(move || {
        let mut on_progress = |percent: u8| {
            // Receiver gone means nobody is watching; keep filtering
            let _ = progress_tx.send(percent);
        };
        let progress: Option<&mut dyn FnMut(u8)> = if quiet { None } else { Some(&mut on_progress) };
        match filter.run(&input, &worker_output, range, progress) {
            Ok(report) => (true, report.summary(), report.digest),
            Err(err) => (false, format!("Error: {}", err), None),
        }
    });

    for percent in progress_rx {
        eprint!("\rProcessing... {:>3}%", percent);
        let _ = io::stderr().flush();
    }
    if !quiet {
        eprintln!();
    }

    let (ok, message, digest) = match worker.join() {
        Ok(outcome) => outcome,
        Err(_) => {
            error!("Filter worker panicked");
            (false, "Error: filter worker panicked".to_string(), None)
        }
    };

    eprintln!("{}", message);
    if !ok {
        return ExitCode::FAILURE;
    }

    eprintln!("Written to {}", output.display());
    if let (Some(checksum), Some(algorithm)) = (digest, cli.digest) {
        eprintln!("{}: {}", DigestAlgorithm::from(algorithm).name(), checksum);
    }
    ExitCode::SUCCESS
}

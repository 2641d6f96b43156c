use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use fourierseries::configuration::{Configuration, ConfigurationOverrides};
use fourierseries::configurationerror::ConfigurationError;
use fourierseries::fourier::tablesink::FixedWidthWriter;
use fourierseries::waveform::waveform::Waveform;

/// Tabulate the truncated Fourier series of a periodic waveform.
#[derive(Parser, Debug)]
#[command(name = "fourierseries")]
#[command(about = "Fourier series approximation of a periodic function")]
struct Args {
    /// JSON configuration file; command-line values take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    waveform: Option<Waveform>,

    #[arg(long)]
    period: Option<f64>,

    /// Highest harmonic kept in the series.
    #[arg(long, allow_negative_numbers = true)]
    max_harmonic: Option<i64>,

    /// Subintervals per coefficient integral (default: max(10 * N, 100)).
    #[arg(long, allow_negative_numbers = true)]
    subintervals: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    t0: Option<f64>,

    /// Time step between rows (default: period / 100).
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<f64>,

    /// Number of steps; count + 1 rows are written.
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum RunError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("cannot write table: {0}")]
    Output(#[from] io::Error),
}

impl Args {
    fn overrides(&self) -> ConfigurationOverrides {
        ConfigurationOverrides {
            waveform: self.waveform,
            period: self.period,
            max_harmonic: self.max_harmonic,
            subintervals: self.subintervals,
            t0: self.t0,
            dt: self.dt,
            count: self.count
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let config = match &args.config {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new()
    };
    let config = config.merge(args.overrides())?;
    let subintervals = config.subintervals()?;

    info!(
        waveform = config.waveform().name(),
        period = config.period(),
        max_harmonic = config.max_harmonic(),
        subintervals,
        "computing fourier coefficients"
    );
    let series = config.build_series()?;

    let stdout = io::stdout();
    let mut sink = FixedWidthWriter::new(BufWriter::new(stdout.lock()));
    series.tabulate(&mut sink, config.t0(), config.dt(), config.count())?;
    sink.flush()?;

    info!(rows = config.count() + 1, "table written");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install tracing subscriber");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

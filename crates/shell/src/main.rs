//! CLI for finding the columns of a distance matrix within a threshold of some rows.

mod data;
mod kernels;

use std::path::PathBuf;

use clap::Parser;
use ftlog::{LevelFilter, LoggerGuard};

/// Prints the 1-based columns of a distance matrix within a threshold of any query row.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a 2-D `.npy` file holding the distance matrix.
    #[arg(short('m'), long)]
    matrix: PathBuf,

    /// Comma-separated 1-based query rows.
    #[arg(short('i'), long, value_delimiter = ',', num_args = 1..)]
    idx: Vec<f64>,

    /// Inclusive distance threshold.
    #[arg(short('d'), long, allow_negative_numbers = true)]
    dist: f64,

    /// The scan kernel to use.
    #[arg(short('k'), long, default_value = "marker")]
    kernel: kernels::Kernel,

    /// Split the columns across all cores. Only the marker kernel runs in parallel.
    #[arg(short('p'), long, default_value_t = false)]
    parallel: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let _guard = configure_logger(args.verbose)?;
    ftlog::info!("Args: {args:?}");

    let distmat = data::read_distmat(&args.matrix)?;
    ftlog::info!("Read a {:?} distance matrix from {:?}", distmat.dim(), args.matrix);

    let result = if args.parallel {
        if args.kernel != kernels::Kernel::Marker {
            ftlog::warn!("Ignoring kernel {:?} for the parallel scan", args.kernel);
        }
        within_dist::par_which_within_dist(distmat.view(), &args.idx, args.dist)
    } else {
        kernels::run(args.kernel.strategy(), distmat.view(), &args.idx, args.dist)
    };
    let cols = result.map_err(|e| e.to_string())?;

    ftlog::info!("{} columns within {}", cols.len(), args.dist);
    println!("{}", cols.iter().map(ToString::to_string).collect::<Vec<_>>().join(","));

    Ok(())
}

/// Configures the logger to write to stderr at a level chosen by the verbosity count.
fn configure_logger(verbose: u8) -> Result<LoggerGuard, String> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    ftlog::Builder::new()
        // no root appender, so logs go to stderr and stdout stays clean for the result
        .max_log_level(level)
        .try_init()
        .map_err(|e| e.to_string())
}

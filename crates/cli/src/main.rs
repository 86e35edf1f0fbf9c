use clap::Parser;
use eyre::{eyre, Result, WrapErr};
use purge_lib::{execute, write_csv, PurgeConfig};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::prelude::*;

/// Clears debit and credit entries that are counterparts of one another.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debit-side ledger csv file
    #[arg(short, long, value_name = "FILE")]
    debit: PathBuf,
    /// Credit-side ledger csv file
    #[arg(short, long, value_name = "FILE")]
    credit: PathBuf,
    /// Directory receiving the purged ledgers and the log
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
    /// Length of the reference string
    #[arg(long, default_value_t = 12)]
    refsize: usize,
    /// Column of the text describing the transaction
    #[arg(long, default_value_t = 1)]
    description_column: usize,
    #[arg(long, default_value_t = 2)]
    amount_column: usize,
    #[arg(long, default_value_t = 0)]
    date_column: usize,
    #[arg(long, default_value = "%d/%m/%y")]
    date_format: String,
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn output_path(dir: &Path, input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| eyre!("{input:?} is not a file name"))?;
    let mut name = stem.to_os_string();
    name.push(".purged.csv");
    Ok(dir.join(name))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let delimiter = u8::try_from(cli.delimiter)
        .map_err(|_| eyre!("Delimiter `{}` is not a single byte", cli.delimiter))?;
    let config = PurgeConfig {
        reference_length: cli.refsize,
        description_column: cli.description_column,
        amount_column: cli.amount_column,
        date_column: cli.date_column,
        date_format: cli.date_format,
    };

    let debit_out = output_path(&cli.out_dir, &cli.debit)?;
    let credit_out = output_path(&cli.out_dir, &cli.credit)?;
    if debit_out == credit_out {
        return Err(eyre!("Debit and credit files would both be written to {debit_out:?}"));
    }
    let log_out = cli.out_dir.join("purge.log.csv");

    let debit = File::open(&cli.debit).wrap_err_with(|| format!("Opening {:?}", cli.debit))?;
    let credit = File::open(&cli.credit).wrap_err_with(|| format!("Opening {:?}", cli.credit))?;
    let output = execute(
        BufReader::new(debit),
        BufReader::new(credit),
        config,
        delimiter,
    )?;

    // render everything before touching the output directory
    let mut debit_buf = Vec::new();
    let mut credit_buf = Vec::new();
    let mut log_buf = Vec::new();
    write_csv(&output.debit, &mut debit_buf, delimiter)?;
    write_csv(&output.credit, &mut credit_buf, delimiter)?;
    output.transcript.write_csv(&mut log_buf, delimiter)?;

    std::fs::create_dir_all(&cli.out_dir)?;
    for (path, buf) in [
        (&debit_out, debit_buf),
        (&credit_out, credit_buf),
        (&log_out, log_buf),
    ] {
        std::fs::write(path, buf).wrap_err_with(|| format!("Writing {path:?}"))?;
    }

    info!(
        cleared = output.summary.total(),
        debit_left = output.debit.len(),
        credit_left = output.credit.len(),
        "wrote {debit_out:?}, {credit_out:?} and {log_out:?}"
    );

    Ok(())
}

mod config;
mod error;
mod index;
mod matcher;
mod parser;
mod purger;
mod record;
mod reference;
mod transcript;
mod writer;

type FRAC = fixed::types::extra::U16;

/// Fixed point signed currency type.
// 16 fractional bits give `Δ = 1/65536`, enough to keep every amount with
// up to 4 decimals distinct. Equal decimal strings always land on the same
// value, which is what amount buckets are keyed on. `Record::amount` rejects
// amounts with more decimals since those could round onto one value.
// 112 integral bits put overflow around ±2.6e33.
pub type ICurrency = fixed::FixedI128<FRAC>;

pub use config::{ConfigError, PurgeConfig};
pub use error::Error;
pub use index::{GroupIndex, Pass, RecordId};
pub use matcher::true_matches;
pub use parser::{parse_csv, parse_from_reader, ParserError};
pub use purger::{PurgeSummary, Purger};
pub use record::{Record, RecordError, Side, MAX_DECIMALS};
pub use reference::KeyExtractor;
pub use transcript::{ClearedGroup, ClearedPair, Transcript};
pub use writer::write_csv;

pub use csv::StringRecord;

/// Residual ledgers and the transcript of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeOutput {
    pub debit: Vec<StringRecord>,
    pub credit: Vec<StringRecord>,
    pub transcript: Transcript,
    pub summary: PurgeSummary,
}

/// Clears the counterpart rows of two already loaded ledgers.
pub fn purge(
    debit: Vec<StringRecord>,
    credit: Vec<StringRecord>,
    config: PurgeConfig,
) -> Result<PurgeOutput, Error> {
    let mut purger = Purger::new(debit, credit, config)?;
    let summary = purger.purge();
    let (debit, credit) = purger.pack();
    Ok(PurgeOutput {
        debit,
        credit,
        transcript: purger.take_transcript(),
        summary,
    })
}

pub fn execute<D: std::io::Read, C: std::io::Read>(
    debit: D,
    credit: C,
    config: PurgeConfig,
    delimiter: u8,
) -> Result<PurgeOutput, Error> {
    let debit = parse_csv(debit, delimiter)?;
    let credit = parse_csv(credit, delimiter)?;
    purge(debit, credit, config)
}

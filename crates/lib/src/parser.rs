use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Row {row} could not be read")]
    InvalidRow {
        row: u64,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    CSVError(#[from] csv::Error),
}

/// Reads every row of a header-less ledger file.
pub fn parse_csv<R: std::io::Read>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<StringRecord>, ParserError> {
    parse_from_reader(
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader),
    )
}

pub fn parse_from_reader<R: std::io::Read>(
    reader: csv::Reader<R>,
) -> Result<Vec<StringRecord>, ParserError> {
    reader
        .into_records()
        .enumerate()
        .map(|(i, res)| {
            res.map_err(|source| ParserError::InvalidRow {
                row: source
                    .position()
                    .map_or(i as u64 + 1, |pos| pos.line()),
                source,
            })
        })
        .collect()
}

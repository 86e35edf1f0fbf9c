use crate::{config::PurgeConfig, reference::KeyExtractor, ICurrency};
use chrono::NaiveDate;
use csv::StringRecord;
use strum_macros::{Display, EnumString, EnumVariantNames};
use thiserror::Error;

/// Which ledger a record was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Debit,
    Credit,
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Amount column {0} missing")]
    MissingAmount(usize),
    #[error("Amount `{0}` has more than {} decimals", MAX_DECIMALS)]
    InexactAmount(String),
    #[error("Invalid amount `{value}`")]
    InvalidAmount {
        value: String,
        #[source]
        source: fixed::ParseFixedError,
    },
    #[error("Record was already cleared")]
    Cleared,
}

/// Decimals an amount may carry and still map onto a distinct `ICurrency`.
pub const MAX_DECIMALS: usize = 4;

/// A single ledger line.
///
/// Everything but the cleared flag is fixed once the record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    side: Side,
    position: usize,
    fields: StringRecord,
    date: NaiveDate,
    reference: String,
    cleared: bool,
}

impl Record {
    pub fn new(
        fields: StringRecord,
        position: usize,
        side: Side,
        config: &PurgeConfig,
        extractor: &KeyExtractor,
    ) -> Self {
        let date = fields
            .get(config.date_column)
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), &config.date_format).ok())
            .unwrap_or(NaiveDate::MIN);
        let reference = fields
            .get(config.description_column)
            .map(|d| extractor.extract(d).to_string())
            .unwrap_or_default();

        Self {
            side,
            position,
            fields,
            date,
            reference,
            cleared: false,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn fields(&self) -> &StringRecord {
        &self.fields
    }

    /// Register date, `NaiveDate::MIN` when the date field is absent or unparsable.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// The derived reference, empty when the record has none or is cleared.
    pub fn reference(&self) -> &str {
        if self.cleared {
            return "";
        }
        &self.reference
    }

    /// The raw description text, `None` when the row is too short.
    pub fn description(&self, column: usize) -> Option<&str> {
        self.fields.get(column)
    }

    pub fn amount(&self, column: usize) -> Result<ICurrency, RecordError> {
        if self.cleared {
            return Err(RecordError::Cleared);
        }
        let raw = self
            .fields
            .get(column)
            .ok_or(RecordError::MissingAmount(column))?;
        let raw = raw.trim();
        // trailing zeros past the last kept decimal do not change the value
        if let Some((_, fraction)) = raw.split_once('.') {
            if fraction.bytes().skip(MAX_DECIMALS).any(|b| b != b'0') {
                return Err(RecordError::InexactAmount(raw.to_string()));
            }
        }
        raw.parse::<ICurrency>()
            .map_err(|source| RecordError::InvalidAmount {
                value: raw.to_string(),
                source,
            })
    }

    /// Marks the record as matched. Returns `false` if it already was.
    pub(crate) fn clear(&mut self) -> bool {
        !std::mem::replace(&mut self.cleared, true)
    }
}

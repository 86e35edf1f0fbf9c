use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Reference length must be at least 1")]
    ZeroReferenceLength,
    #[error("Date format is empty")]
    EmptyDateFormat,
}

/// Column layout of the ledger rows and the reference rule applied to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeConfig {
    /// Exact number of digits a reference must have.
    pub reference_length: usize,
    pub description_column: usize,
    pub amount_column: usize,
    pub date_column: usize,
    /// `chrono` format string, `%d/%m/%y` by default.
    pub date_format: String,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            reference_length: 12,
            description_column: 1,
            amount_column: 2,
            date_column: 0,
            date_format: "%d/%m/%y".to_string(),
        }
    }
}

impl PurgeConfig {
    pub fn with_reference_length(mut self, reference_length: usize) -> Self {
        self.reference_length = reference_length;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_length == 0 {
            return Err(ConfigError::ZeroReferenceLength);
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::EmptyDateFormat);
        }
        Ok(())
    }
}

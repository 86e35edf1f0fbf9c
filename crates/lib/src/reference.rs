use crate::config::{ConfigError, PurgeConfig};
use regex::Regex;

/// Derives the matching reference from a description.
///
/// A reference is the first run of exactly `reference_length` ASCII digits.
/// When that run is part of a longer digit run the description is treated as
/// having no reference at all, so long numbers such as phone numbers or
/// totals never become keys.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    shortest: Regex,
    longest: Regex,
}

impl KeyExtractor {
    pub fn new(config: &PurgeConfig) -> Result<Self, ConfigError> {
        if config.reference_length == 0 {
            return Err(ConfigError::ZeroReferenceLength);
        }
        let n = config.reference_length;
        // both patterns are built from a positive integer and always compile
        let shortest = Regex::new(&format!("[0-9]{{{n},}}?")).expect("valid reference pattern");
        let longest = Regex::new(&format!("[0-9]{{{n},}}")).expect("valid reference pattern");
        Ok(Self { shortest, longest })
    }

    /// Returns the reference found in `description`, or an empty string.
    pub fn extract<'a>(&self, description: &'a str) -> &'a str {
        let shortest = self
            .shortest
            .find(description)
            .map_or("", |m| m.as_str());
        let longest = self.longest.find(description).map_or("", |m| m.as_str());
        if shortest != longest {
            return "";
        }
        shortest
    }
}

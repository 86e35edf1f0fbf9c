use crate::index::Pass;
use csv::{StringRecord, WriterBuilder};
use std::io::Write;

/// A debit record and the credit record it cleared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedPair {
    pub debit: StringRecord,
    pub credit: StringRecord,
}

/// Every pair cleared inside one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedGroup {
    pub pass: Pass,
    pub key: String,
    pub pairs: Vec<ClearedPair>,
}

/// Log of cleared pairs, accumulated until taken by the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    groups: Vec<ClearedGroup>,
}

impl Transcript {
    pub(crate) fn push(&mut self, group: ClearedGroup) {
        if !group.pairs.is_empty() {
            self.groups.push(group);
        }
    }

    pub fn groups(&self) -> &[ClearedGroup] {
        &self.groups
    }

    pub fn pairs(&self) -> impl Iterator<Item = &ClearedPair> {
        self.groups.iter().flat_map(|g| g.pairs.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Writes each pair as two rows, debit first, with a blank line after each group.
    pub fn write_csv<W: Write>(&self, mut writer: W, delimiter: u8) -> Result<(), std::io::Error> {
        for group in &self.groups {
            {
                let mut rows = WriterBuilder::new()
                    .flexible(true)
                    .delimiter(delimiter)
                    .from_writer(&mut writer);
                for pair in &group.pairs {
                    rows.write_record(&pair.debit)?;
                    rows.write_record(&pair.credit)?;
                }
                rows.flush()?;
            }
            writeln!(writer)?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(debit: Vec<&str>, credit: Vec<&str>) -> ClearedPair {
        ClearedPair {
            debit: StringRecord::from(debit),
            credit: StringRecord::from(credit),
        }
    }

    #[test]
    fn groups_without_pairs_are_not_logged() {
        let mut transcript = Transcript::default();
        transcript.push(ClearedGroup {
            pass: Pass::Reference,
            key: "1234".to_string(),
            pairs: vec![],
        });
        assert!(transcript.is_empty());
    }

    #[test]
    fn outputs_correctly() {
        let mut transcript = Transcript::default();
        transcript.push(ClearedGroup {
            pass: Pass::Description,
            key: "rent".to_string(),
            pairs: vec![
                pair(vec!["01/01/20", "rent", "10"], vec!["02/01/20", "rent", "10"]),
                pair(vec!["03/01/20", "rent", "10"], vec!["04/01/20", "rent", "10"]),
            ],
        });
        transcript.push(ClearedGroup {
            pass: Pass::Reference,
            key: "1234".to_string(),
            pairs: vec![pair(
                vec!["05/01/20", "a 1234", "1.5"],
                vec!["05/01/20", "b, 1234", "1.5"],
            )],
        });

        let mut buf = Vec::new();
        transcript.write_csv(&mut buf, b',').unwrap();
        assert_eq!(
            String::from_utf8_lossy(&buf),
            "01/01/20,rent,10\n02/01/20,rent,10\n03/01/20,rent,10\n04/01/20,rent,10\n\n\
             05/01/20,a 1234,1.5\n05/01/20,\"b, 1234\",1.5\n\n"
        );
        assert_eq!(transcript.pairs().count(), 3);
    }
}

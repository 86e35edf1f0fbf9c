use crate::record::Record;
use std::collections::BTreeMap;

/// Index of a record in the purger's arena.
pub type RecordId = usize;

/// The key a group of records shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Pass {
    Description,
    Reference,
}

/// Records grouped by raw description and by derived reference.
///
/// Buckets hold arena ids in insertion order, never owning the records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupIndex {
    by_reference: BTreeMap<String, Vec<RecordId>>,
    by_description: BTreeMap<String, Vec<RecordId>>,
}

impl GroupIndex {
    pub fn build(records: &[Record], description_column: usize) -> Self {
        let mut index = Self::default();
        for (id, record) in records.iter().enumerate() {
            index.add(id, record, description_column);
        }
        index
    }

    fn add(&mut self, id: RecordId, record: &Record, description_column: usize) {
        let reference = record.reference();
        if !reference.is_empty() {
            self.by_reference
                .entry(reference.to_string())
                .or_default()
                .push(id);
        }
        if let Some(description) = record.description(description_column) {
            self.by_description
                .entry(description.to_string())
                .or_default()
                .push(id);
        }
    }

    /// Non-empty keyed groups for `pass`, in key order.
    pub fn groups(&self, pass: Pass) -> impl Iterator<Item = (&str, &[RecordId])> {
        let map = match pass {
            Pass::Description => &self.by_description,
            Pass::Reference => &self.by_reference,
        };
        map.iter()
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, ids)| (key.as_str(), ids.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyExtractor, PurgeConfig, Side};
    use csv::StringRecord;

    fn records(rows: &[(Vec<&str>, Side)]) -> Vec<Record> {
        let config = PurgeConfig::default().with_reference_length(4);
        let extractor = KeyExtractor::new(&config).unwrap();
        rows.iter()
            .enumerate()
            .map(|(i, (fields, side))| {
                Record::new(StringRecord::from(fields.clone()), i, *side, &config, &extractor)
            })
            .collect()
    }

    #[test]
    fn groups_by_reference_and_description() {
        let recs = records(&[
            (vec!["01/01/20", "pay 1234", "1"], Side::Debit),
            (vec!["01/01/20", "refund 1234", "1"], Side::Credit),
            (vec!["01/01/20", "pay 1234", "2"], Side::Credit),
            (vec!["01/01/20", "no ref", "3"], Side::Debit),
        ]);
        let index = GroupIndex::build(&recs, 1);

        let by_ref = index.groups(Pass::Reference).collect::<Vec<_>>();
        assert_eq!(by_ref, vec![("1234", &[0, 1, 2][..])]);

        let by_descr = index.groups(Pass::Description).collect::<Vec<_>>();
        assert_eq!(
            by_descr,
            vec![
                ("no ref", &[3][..]),
                ("pay 1234", &[0, 2][..]),
                ("refund 1234", &[1][..]),
            ]
        );
    }

    #[test]
    fn empty_description_group_is_skipped() {
        let recs = records(&[
            (vec!["01/01/20", "", "1"], Side::Debit),
            (vec!["01/01/20", "", "1"], Side::Credit),
            (vec!["01/01/20"], Side::Credit),
        ]);
        let index = GroupIndex::build(&recs, 1);
        assert_eq!(index.groups(Pass::Description).count(), 0);
        assert_eq!(index.groups(Pass::Reference).count(), 0);
    }
}

use crate::{
    config::PurgeConfig,
    error::Error,
    index::{GroupIndex, Pass, RecordId},
    matcher::true_matches,
    record::{Record, Side},
    reference::KeyExtractor,
    transcript::{ClearedGroup, ClearedPair, Transcript},
};
use csv::StringRecord;
use tracing::{info, trace};

/// Number of records cleared by each pass of a purge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PurgeSummary {
    pub by_description: usize,
    pub by_reference: usize,
}

impl PurgeSummary {
    pub fn total(&self) -> usize {
        self.by_description + self.by_reference
    }
}

/// Owns the records of both ledgers and clears counterpart entries.
///
/// Records live in a single arena, debit rows first, and both group
/// indexes refer to them by id.
#[derive(Debug, Clone)]
pub struct Purger {
    config: PurgeConfig,
    records: Vec<Record>,
    index: GroupIndex,
    debit_len: usize,
    credit_len: usize,
    cleared: usize,
    transcript: Transcript,
}

impl Purger {
    pub fn new(
        debit: Vec<StringRecord>,
        credit: Vec<StringRecord>,
        config: PurgeConfig,
    ) -> Result<Self, Error> {
        config.validate()?;
        let extractor = KeyExtractor::new(&config)?;

        let debit_len = debit.len();
        let credit_len = credit.len();
        let records = debit
            .into_iter()
            .enumerate()
            .map(|(position, fields)| (position, fields, Side::Debit))
            .chain(
                credit
                    .into_iter()
                    .enumerate()
                    .map(|(position, fields)| (position, fields, Side::Credit)),
            )
            .map(|(position, fields, side)| {
                Record::new(fields, position, side, &config, &extractor)
            })
            .collect::<Vec<_>>();
        let index = GroupIndex::build(&records, config.description_column);

        Ok(Self {
            config,
            records,
            index,
            debit_len,
            credit_len,
            cleared: 0,
            transcript: Transcript::default(),
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Total number of records cleared so far.
    pub fn cleared(&self) -> usize {
        self.cleared
    }

    /// Clears counterpart records, grouping by description first and by
    /// reference second. The second pass sees every clear of the first.
    pub fn purge(&mut self) -> PurgeSummary {
        let summary = PurgeSummary {
            by_description: self.purge_pass(Pass::Description),
            by_reference: self.purge_pass(Pass::Reference),
        };
        info!(
            cleared = summary.total(),
            remaining = self.records.len() - self.cleared,
            "purge complete"
        );
        summary
    }

    fn purge_pass(&mut self, pass: Pass) -> usize {
        let mut count = 0;
        let mut groups = 0;
        for (key, ids) in self.index.groups(pass) {
            let pairs = true_matches(&self.records, ids, self.config.amount_column);
            if pairs.is_empty() {
                continue;
            }
            groups += 1;
            let mut cleared = Vec::with_capacity(pairs.len());
            for (debit, credit) in pairs {
                let newly = clear(&mut self.records, debit) & clear(&mut self.records, credit);
                debug_assert!(newly, "record cleared twice");
                trace!(%pass, key, debit, credit, "cleared pair");
                cleared.push(ClearedPair {
                    debit: self.records[debit].fields().clone(),
                    credit: self.records[credit].fields().clone(),
                });
                count += 2;
            }
            self.transcript.push(ClearedGroup {
                pass,
                key: key.to_string(),
                pairs: cleared,
            });
        }
        self.cleared += count;
        info!(%pass, groups, cleared = count, "pass complete");
        count
    }

    /// Returns the transcript accumulated since the last call and starts a new one.
    pub fn take_transcript(&mut self) -> Transcript {
        std::mem::take(&mut self.transcript)
    }

    /// Residual debit and credit rows, in their original order.
    pub fn pack(&self) -> (Vec<StringRecord>, Vec<StringRecord>) {
        let mut debit: Vec<Option<&StringRecord>> = vec![None; self.debit_len];
        let mut credit: Vec<Option<&StringRecord>> = vec![None; self.credit_len];

        for record in self.records.iter().filter(|r| !r.is_cleared()) {
            let slot = match record.side() {
                Side::Debit => &mut debit[record.position()],
                Side::Credit => &mut credit[record.position()],
            };
            *slot = Some(record.fields());
        }

        (compact(debit), compact(credit))
    }
}

fn clear(records: &mut [Record], id: RecordId) -> bool {
    records[id].clear()
}

fn compact(rows: Vec<Option<&StringRecord>>) -> Vec<StringRecord> {
    rows.into_iter().flatten().cloned().collect()
}

use crate::{
    index::RecordId,
    record::{Record, Side},
    ICurrency,
};
use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

/// Pairs the debit and credit records of one group that are true counterparts.
///
/// Records are taken earliest-date first (stable on ties) and must share
/// the exact amount. Inside each amount bucket debit and credit queues are
/// drained head to head, so `min(debits, credits)` pairs form and the
/// excess stays unmatched. Cleared records and records whose amount cannot
/// be parsed never take part.
pub fn true_matches(
    records: &[Record],
    group: &[RecordId],
    amount_column: usize,
) -> Vec<(RecordId, RecordId)> {
    let mut sorted = group.to_vec();
    sorted.sort_by_key(|&id| records[id].date());

    let mut buckets: BTreeMap<ICurrency, (VecDeque<RecordId>, VecDeque<RecordId>)> =
        BTreeMap::new();
    for id in sorted {
        let record = &records[id];
        if record.is_cleared() {
            continue;
        }
        let amount = match record.amount(amount_column) {
            Ok(amount) => amount,
            Err(err) => {
                debug!(
                    side = %record.side(),
                    position = record.position(),
                    "skipping record: {err}"
                );
                continue;
            }
        };
        let (debits, credits) = buckets.entry(amount).or_default();
        match record.side() {
            Side::Debit => debits.push_back(id),
            Side::Credit => credits.push_back(id),
        }
    }

    let mut pairs = Vec::new();
    for (_, (mut debits, mut credits)) in buckets {
        while let (Some(debit), Some(credit)) = (debits.front(), credits.front()) {
            pairs.push((*debit, *credit));
            debits.pop_front();
            credits.pop_front();
        }
    }
    pairs
}

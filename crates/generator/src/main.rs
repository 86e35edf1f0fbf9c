use csv::WriterBuilder;
use purge_lib::Side;
use rand::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use strum::VariantNames;

const DESCRIPTIONS: [&str; 6] = [
    "transfer",
    "invoice",
    "rent",
    "card payment",
    "standing order",
    "refund",
];

#[derive(Debug, Clone)]
struct Row {
    day: u32,
    month: u32,
    description: String,
    cents: i64,
}

impl Row {
    fn random<R: Rng>(rng: &mut R, reference_length: usize) -> Self {
        let mut description = DESCRIPTIONS.choose(rng).unwrap().to_string();
        if rng.gen_bool(0.7) {
            let mut number = itoa::Buffer::new();
            let digits = number.format(rng.gen::<u64>());
            description.push(' ');
            // pad short numbers so the reference has exactly the requested length
            description.extend(
                std::iter::repeat('0').take(reference_length.saturating_sub(digits.len())),
            );
            description.push_str(&digits[digits.len().saturating_sub(reference_length)..]);
        }
        Self {
            day: rng.gen_range(1..=28),
            month: rng.gen_range(1..=12),
            description,
            cents: rng.gen_range(1..1_000_000),
        }
    }

    /// The same transaction recorded a few days later on the other side.
    fn counterpart<R: Rng>(&self, rng: &mut R) -> Self {
        Self {
            day: (self.day + rng.gen_range(0..3)).min(28),
            ..self.clone()
        }
    }
}

fn write_rows<W: Write>(rows: &[Row], writer: W) -> Result<(), std::io::Error> {
    let mut writer = WriterBuilder::new().from_writer(writer);

    for row in rows {
        writer.write_record(&[
            format!("{:02}/{:02}/21", row.day, row.month),
            row.description.clone(),
            format!("{}.{:02}", row.cents / 100, row.cents % 100),
        ])?;
    }

    writer.flush()
}

fn main() -> Result<(), std::io::Error> {
    let mut args = std::env::args().skip(1);
    let size = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100_000);
    let reference_length = 12;
    // share of debit rows that get a credit counterpart
    const MATCHED: f64 = 0.6;

    let mut rng = thread_rng();
    let mut debit = Vec::with_capacity(size);
    let mut credit = Vec::with_capacity(size);

    for _ in 0..size {
        let row = Row::random(&mut rng, reference_length);
        if rng.gen_bool(MATCHED) {
            credit.push(row.counterpart(&mut rng));
        }
        debit.push(row);
    }
    while credit.len() < size {
        credit.push(Row::random(&mut rng, reference_length));
    }
    credit.shuffle(&mut rng);

    for (side, rows) in Side::VARIANTS.iter().zip([&debit, &credit]) {
        let file = File::create(format!("{side}.csv"))?;
        write_rows(rows, BufWriter::new(file))?;
    }

    Ok(())
}

use csv::{StringRecord, WriterBuilder};
use std::io::Write;

pub fn write_csv<W: Write>(
    rows: &[StringRecord],
    writer: W,
    delimiter: u8,
) -> Result<(), std::io::Error> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .delimiter(delimiter)
        .from_writer(writer);

    for row in rows {
        writer.write_record(row)?;
    }

    writer.flush()
}

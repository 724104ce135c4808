use crate::domain::model::FlatRecord;
use crate::utils::error::Result;
use std::io::Write;

/// Serializes the rows as RFC 4180 CSV: one header row derived from the
/// `FlatRecord` field names, then one row per record in input order. The
/// csv crate handles quoting (fields containing the delimiter, a quote,
/// or a line break are quoted with embedded quotes doubled). Any write
/// failure aborts the whole serialization; a partial file is never valid
/// output.
pub fn write_csv<W: Write>(records: &[FlatRecord], sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn csv_to_string(records: &[FlatRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    // The csv writer only ever emits UTF-8.
    String::from_utf8(buffer)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

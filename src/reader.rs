//! Reading the input stream into a [`FrequencyTable`]

use std::io::{BufRead, ErrorKind};

use anyhow::{Context, Result};
use common::frequency::FrequencyTable;

/// Reads `reader` until EOF, counting every character in range.
///
/// Characters out of range are silently dropped.
pub fn read_chars(mut reader: impl BufRead, table: &mut FrequencyTable) -> Result<u64> {
    let mut read = 0u64;
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(anyhow::Error::from(e).context("could not read input")),
        };
        if buf.is_empty() {
            break;
        }
        table.count_bytes(buf);
        let len = buf.len();
        read += len as u64;
        reader.consume(len);
    }
    log::debug!("read {read} bytes, {} in range", table.total());
    Ok(read)
}

/// Convenience wrapper that starts from a zeroed table
pub fn read_table(reader: impl BufRead) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    read_chars(reader, &mut table).context("failed to count characters")?;
    Ok(table)
}

use crate::core::normalizer::{
    COL_NAME, COL_POOL_NAME, COL_TAB, REQUIRED_COLUMNS, RawRow, header_key,
};
use crate::errors::{AppError, AppResult};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Columns without which no row can be attributed to a pool.
const IDENTITY_COLUMNS: [&str; 3] = [COL_NAME, COL_POOL_NAME, COL_TAB];

/// Read a sheet export from disk.
pub fn read_rows(path: &Path) -> AppResult<Vec<RawRow>> {
    debug!(path = %path.display(), "reading input");
    let file = std::fs::File::open(path)?;
    read_rows_from(file)
}

/// Read a sheet export from any reader; the first record is the header.
///
/// Rows with the wrong number of cells are accepted: missing cells read as empty.
/// Cells that are not valid UTF-8 (Latin-1 exports) are decoded lossily.
pub fn read_rows_from<R: Read>(reader: R) -> AppResult<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.byte_headers()?.iter().map(decode_cell).collect();
    let keys: Vec<String> = headers.iter().map(|h| header_key(h)).collect();

    for col in IDENTITY_COLUMNS {
        if !keys.contains(&header_key(col)) {
            return Err(AppError::MissingColumn(col.to_string()));
        }
    }
    for col in REQUIRED_COLUMNS {
        if !keys.contains(&header_key(col)) {
            warn!(column = col, "column missing from input, values treated as absent");
        }
    }

    let mut rows = Vec::new();
    for record in rdr.byte_records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter().map(decode_cell))
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), "input read");
    Ok(rows)
}

fn decode_cell(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

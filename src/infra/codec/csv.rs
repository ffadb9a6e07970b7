use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::row::Row;

/// Parses raw CSV text into rows with naive line/comma splitting: no
/// quoting, no escaping, no trimming. Line 0 is the header and is always
/// discarded, so text with fewer than two lines yields no rows. Lines with
/// fewer than 15 segments yield short rows.
pub fn parse(text: &str) -> Vec<Row> {
    let mut lines = text.split('\n');
    // Header line, dropped even when it is the only line.
    let _ = lines.next();
    lines
        .map(|line| Row::new(line.split(',').map(str::to_owned).collect()))
        .collect()
}

/// Joins fields with commas and rows with newlines. No header is emitted
/// and embedded commas/newlines in field values are not escaped; exported
/// files stay byte-compatible with what the table widget always produced.
pub fn serialize(rows: &Dataset) -> String {
    rows.iter()
        .map(|row| row.borrow().fields().join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

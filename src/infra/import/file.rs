use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the selected file to text. This is the pipeline's only I/O wait on
/// the import side; encoding and size are not validated (UTF-8 comma-
/// delimited text with a header line is assumed).
pub fn read_csv_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read csv: {}", path.display()))
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::UserDirs;

/// Fixed name of the exported file, matching what the download boundary has
/// always produced.
pub const EXPORT_FILE_NAME: &str = "exported_data.csv";

/// Where exports land when the caller does not pick a directory: the user's
/// download directory, falling back to the home directory.
pub fn default_export_dir() -> Result<PathBuf> {
    let user_dirs = UserDirs::new().ok_or_else(|| anyhow!("unable to resolve user directories"))?;
    Ok(user_dirs
        .download_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| user_dirs.home_dir().to_path_buf()))
}

/// Writes the serialized CSV under `dir` as `exported_data.csv`, creating
/// the directory if needed. The file holds the plain CSV text, i.e. what a
/// browser stores after decoding the data URI.
pub fn write_export(dir: &Path, csv_text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export dir: {}", dir.display()))?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, csv_text)
        .with_context(|| format!("failed to write export: {}", path.display()))?;
    Ok(path)
}

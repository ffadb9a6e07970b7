use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::domain::store::StoreHandle;
use crate::infra::codec::csv::serialize;
use crate::infra::export::data_uri::to_data_uri;
use crate::infra::export::file::write_export;

pub struct ExportService {
    store: StoreHandle,
}

impl ExportService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// The current view serialized and wrapped as a data URI, or `None`
    /// when the view is empty (export is disabled at the boundary rather
    /// than producing an empty file).
    pub fn data_uri(&self) -> Option<String> {
        self.serialized_view()
            .map(|csv_text| to_data_uri(&csv_text))
    }

    /// Writes the current view as `exported_data.csv` under `dir`. Returns
    /// `Ok(None)` without touching the filesystem when the view is empty.
    pub fn export_to_dir(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(csv_text) = self.serialized_view() else {
            return Ok(None);
        };
        let path = write_export(dir, &csv_text)?;
        debug!(path = %path.display(), "exported filtered rows");
        Ok(Some(path))
    }

    fn serialized_view(&self) -> Option<String> {
        let store = self.store.borrow();
        let view = store.current();
        if view.is_empty() {
            return None;
        }
        Some(serialize(view))
    }
}

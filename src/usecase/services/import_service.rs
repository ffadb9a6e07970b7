use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::domain::entities::dataset::into_dataset;
use crate::domain::store::StoreHandle;
use crate::infra::codec::csv::parse;
use crate::infra::import::file::read_csv_text;

pub struct ImportService {
    store: StoreHandle,
}

impl ImportService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Parses the text and replaces the store's dataset wholesale; any
    /// active filter is cleared. Returns the imported row count.
    pub fn import_text(&self, text: &str) -> usize {
        let rows = into_dataset(parse(text));
        let row_count = rows.len();
        self.store.borrow_mut().replace(rows);
        info!(row_count, "imported dataset");
        row_count
    }

    /// Reads the selected file and imports it. A failed read leaves the
    /// store untouched; the parse step is never reached.
    pub fn import_file(&self, path: &Path) -> Result<usize> {
        let text = read_csv_text(path)?;
        Ok(self.import_text(&text))
    }
}

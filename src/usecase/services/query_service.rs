use tracing::debug;

use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::row::Column;
use crate::domain::store::StoreHandle;

/// Linear substring scan over Part and Alt_Part, case-insensitive. An empty
/// query matches every row, so filtering with "" returns the whole dataset.
/// Included rows keep their relative order and are the same shared cells as
/// the input (no deep copy), which keeps view edits visible in `full`.
pub fn filter_rows(rows: &Dataset, query: &str) -> Dataset {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| {
            let row = row.borrow();
            let part = row.get(Column::Part).to_lowercase();
            let alt_part = row.get(Column::AltPart).to_lowercase();
            part.contains(&needle) || alt_part.contains(&needle)
        })
        .cloned()
        .collect()
}

pub struct QueryService {
    store: StoreHandle,
}

impl QueryService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Recomputes the view from the full dataset and installs it, returning
    /// the number of matching rows.
    pub fn apply_filter(&self, query: &str) -> usize {
        let filtered = filter_rows(self.store.borrow().current_full(), query);
        let matched = filtered.len();
        debug!(query, matched, "applied filter");
        self.store.borrow_mut().set_view(filtered);
        matched
    }

    /// The currently filtered rows, as shared cells.
    pub fn current(&self) -> Dataset {
        self.store.borrow().current().clone()
    }

    /// The full imported dataset, as shared cells.
    pub fn current_full(&self) -> Dataset {
        self.store.borrow().current_full().clone()
    }
}

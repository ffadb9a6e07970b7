use crate::domain::entities::dataset::{deep_copy, Dataset};
use crate::domain::entities::row::Column;

/// Deep-copied view rows an edit surface mutates before merging back.
/// Only the two stock columns are writable; everything else is carried
/// unchanged so the composite key still matches the source rows.
#[derive(Debug, Clone, Default)]
pub struct StagedEdits {
    rows: Dataset,
}

impl StagedEdits {
    pub fn from_view(view: &Dataset) -> Self {
        Self {
            rows: deep_copy(view),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn set_loc_a_stock(&mut self, row_idx: usize, value: impl Into<String>) {
        self.set_stock(row_idx, Column::LocAStock, value.into());
    }

    pub fn set_loc_b_stock(&mut self, row_idx: usize, value: impl Into<String>) {
        self.set_stock(row_idx, Column::LocBStock, value.into());
    }

    // Out-of-range indices are ignored rather than reported.
    fn set_stock(&mut self, row_idx: usize, column: Column, value: String) {
        if let Some(row) = self.rows.get(row_idx) {
            row.borrow_mut().set(column, value);
        }
    }

    pub fn rows(&self) -> &Dataset {
        &self.rows
    }
}

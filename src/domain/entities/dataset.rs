use crate::domain::entities::row::{shared, Row, RowRef};

/// Ordered sequence of shared rows, in import order. The header line of the
/// source text is discarded before rows reach a Dataset.
pub type Dataset = Vec<RowRef>;

/// Wraps freshly parsed rows into shared cells.
pub fn into_dataset(rows: Vec<Row>) -> Dataset {
    rows.into_iter().map(shared).collect()
}

/// Independent deep copies of the given rows, detached from their cells.
pub fn deep_copy(rows: &Dataset) -> Dataset {
    rows.iter().map(|row| shared(row.borrow().clone())).collect()
}

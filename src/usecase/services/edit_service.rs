use tracing::debug;

use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::edit::StagedEdits;
use crate::domain::entities::row::Column;
use crate::domain::store::StoreHandle;

/// Writes edited stock values back onto the full dataset. For each row in
/// `full`, the first row in `edited` whose (Part, Alt_Part, Model) fields
/// are exactly string-equal supplies LocA_Stock and LocB_Stock; later
/// duplicates in `edited` are silently ignored. Rows with no match are left
/// untouched. Rows are mutated in place, so a view sharing the same cells
/// sees the update immediately.
///
/// `edited` may alias `full` (a caller passing live view rows instead of a
/// staged copy); the candidate's values are copied out before the target
/// row is borrowed mutably.
pub fn merge_stock(full: &Dataset, edited: &Dataset) {
    let mut updated = 0_usize;
    for item in full {
        let matched = edited.iter().find(|candidate| {
            let candidate = candidate.borrow();
            let item = item.borrow();
            candidate.key_matches(&item)
        });
        if let Some(candidate) = matched {
            let (loc_a, loc_b) = {
                let candidate = candidate.borrow();
                (
                    candidate.get(Column::LocAStock).to_owned(),
                    candidate.get(Column::LocBStock).to_owned(),
                )
            };
            let mut item = item.borrow_mut();
            item.set(Column::LocAStock, loc_a);
            item.set(Column::LocBStock, loc_b);
            updated += 1;
        }
    }
    debug!(updated, "merged stock edits");
}

pub struct EditService {
    store: StoreHandle,
}

impl EditService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Snapshots the current view into independent rows for an edit surface.
    pub fn stage(&self) -> StagedEdits {
        StagedEdits::from_view(self.store.borrow().current())
    }

    /// Merges staged stock values into the full dataset. The caller
    /// re-applies its filter afterwards to refresh the view; the mutated
    /// rows are already visible through it either way.
    pub fn apply_edits(&self, edits: &StagedEdits) {
        let store = self.store.borrow();
        merge_stock(store.current_full(), edits.rows());
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::entities::dataset::Dataset;

/// Holds the authoritative dataset and the currently filtered view. The view
/// shares row cells with `full`; replacing either is the only way other
/// components change what the store points at.
#[derive(Debug, Default)]
pub struct RecordStore {
    full: Dataset,
    view: Dataset,
}

/// Shared single-threaded handle to the store. `RefCell` serializes access
/// at runtime; the pipeline is not meant to cross threads.
pub type StoreHandle = Rc<RefCell<RecordStore>>;

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle() -> StoreHandle {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Installs a freshly imported dataset. The view resets to the whole
    /// dataset, clearing any active filter.
    pub fn replace(&mut self, new_full: Dataset) {
        self.view = new_full.clone();
        self.full = new_full;
    }

    /// Swaps the filtered view; `full` is untouched.
    pub fn set_view(&mut self, new_view: Dataset) {
        self.view = new_view;
    }

    /// The currently filtered/displayed rows.
    pub fn current(&self) -> &Dataset {
        &self.view
    }

    /// The full imported dataset.
    pub fn current_full(&self) -> &Dataset {
        &self.full
    }
}

//! UI-independent data pipeline behind a CSV import/filter/export/edit
//! table for inventory part records. A presentation layer (table, dialog,
//! file picker) drives the services; this crate owns parsing, the record
//! store, filtering, stock merging and the export boundary.

pub mod domain;
pub mod infra;
pub mod usecase;

pub use domain::entities::dataset::{deep_copy, into_dataset, Dataset};
pub use domain::entities::edit::StagedEdits;
pub use domain::entities::row::{shared, Column, Row, RowRef};
pub use domain::store::{RecordStore, StoreHandle};
pub use infra::export::data_uri::DATA_URI_PREFIX;
pub use infra::export::file::{default_export_dir, EXPORT_FILE_NAME};
pub use usecase::services::edit_service::{merge_stock, EditService};
pub use usecase::services::export_service::ExportService;
pub use usecase::services::import_service::ImportService;
pub use usecase::services::query_service::{filter_rows, QueryService};

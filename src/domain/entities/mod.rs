pub mod dataset;
pub mod edit;
pub mod row;

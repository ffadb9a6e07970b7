pub mod codec;
pub mod export;
pub mod import;

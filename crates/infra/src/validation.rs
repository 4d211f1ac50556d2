// crates/infra/src/validation.rs
pub mod batch;
pub mod file_validator;

pub use batch::BatchValidator;
pub use file_validator::{count_file, validate_entry};

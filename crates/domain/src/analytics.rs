pub mod summary;

pub use summary::ValidationSummary;

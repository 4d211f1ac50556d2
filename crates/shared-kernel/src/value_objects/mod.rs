// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod position;

pub use counts::LineCount;
pub use position::Position;

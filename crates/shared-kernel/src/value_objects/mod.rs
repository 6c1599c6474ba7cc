// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod frequency;

pub use counts::{CharCount, WordCount};
pub use frequency::RelativeFrequency;

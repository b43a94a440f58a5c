pub mod label;
pub mod quiz;

pub use label::{label_for_position, position_for_label};
pub use quiz::{Question, Quiz};

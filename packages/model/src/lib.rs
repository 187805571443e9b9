pub mod entity;
pub mod error;
pub mod models;
pub mod normalize;

pub use entity::{Exercise, TestCase};
pub use error::NormalizeError;

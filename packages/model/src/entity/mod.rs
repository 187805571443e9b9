pub mod exercise;
pub mod test_case;

pub use exercise::Exercise;
pub use test_case::TestCase;

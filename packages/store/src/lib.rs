pub mod error;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use memory::InMemoryExerciseStore;
pub use traits::ExerciseStore;

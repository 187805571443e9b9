use async_trait::async_trait;
use exercise_model::Exercise;

use crate::error::StoreError;

/// Persistence contract for exercises and their owned test cases.
///
/// Test cases live and die with their parent: they are written and removed
/// only as part of the parent exercise and are never shared between two
/// parents.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Load an exercise together with its full test-case set.
    async fn load(&self, id: i64) -> Result<Exercise, StoreError>;

    /// Insert or update an exercise, returning its id.
    ///
    /// An exercise without an id is inserted and assigned one; an exercise
    /// carrying an id updates the existing row. The stored test-case set is
    /// replaced wholesale, atomically with the parent row: a concurrent
    /// `load` sees either the old parent with the old children or the new
    /// parent with the new children, never a mix.
    async fn save(&self, exercise: Exercise) -> Result<i64, StoreError>;

    /// Delete an exercise, cascading to all its test cases.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

use std::collections::HashMap;

use async_trait::async_trait;
use exercise_model::Exercise;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::traits::ExerciseStore;

/// In-memory [`ExerciseStore`].
///
/// Each map entry owns its exercise together with the test cases, so the
/// parent row and its child set are replaced and deleted as one unit under
/// the write lock.
pub struct InMemoryExerciseStore {
    inner: RwLock<Inner>,
}

struct Inner {
    exercises: HashMap<i64, Exercise>,
    next_id: i64,
}

impl InMemoryExerciseStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                exercises: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryExerciseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExerciseStore for InMemoryExerciseStore {
    async fn load(&self, id: i64) -> Result<Exercise, StoreError> {
        let inner = self.inner.read().await;
        inner
            .exercises
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn save(&self, mut exercise: Exercise) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().await;
        let id = match exercise.id {
            Some(id) => {
                if !inner.exercises.contains_key(&id) {
                    return Err(StoreError::NotFound(id));
                }
                id
            }
            None => {
                let id = inner.next_id;
                inner.next_id += 1;
                id
            }
        };
        exercise.id = Some(id);
        tracing::debug!(id, test_cases = exercise.test_cases.len(), "saving exercise");
        inner.exercises.insert(id, exercise);
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        // Removing the entry drops the owned test cases with it.
        match inner.exercises.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use exercise_model::TestCase;

    use super::*;

    fn sample(title: &str, cases: &[(&str, &str)]) -> Exercise {
        Exercise {
            title: title.into(),
            description: "d".into(),
            difficulty: "easy".into(),
            test_cases: cases
                .iter()
                .map(|(input, output)| TestCase {
                    input_data: (*input).into(),
                    output_data: (*output).into(),
                    explanation: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let store = InMemoryExerciseStore::new();
        let a = store.save(sample("a", &[])).await.unwrap();
        let b = store.save(sample("b", &[])).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn load_returns_children_in_order() {
        let store = InMemoryExerciseStore::new();
        let id = store
            .save(sample("a", &[("1", "x"), ("2", "y"), ("3", "z")]))
            .await
            .unwrap();

        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.id, Some(id));
        let inputs: Vec<&str> = loaded
            .test_cases
            .iter()
            .map(|tc| tc.input_data.as_str())
            .collect();
        assert_eq!(inputs, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn resave_replaces_test_cases_wholesale() {
        let store = InMemoryExerciseStore::new();
        let id = store
            .save(sample("a", &[("old", "old")]))
            .await
            .unwrap();

        let mut updated = sample("a", &[("new1", "n1"), ("new2", "n2")]);
        updated.id = Some(id);
        store.save(updated).await.unwrap();

        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.test_cases.len(), 2);
        assert!(loaded.test_cases.iter().all(|tc| tc.input_data != "old"));
    }

    #[tokio::test]
    async fn delete_cascades_to_test_cases() {
        let store = InMemoryExerciseStore::new();
        let id = store
            .save(sample("a", &[("1", "x"), ("2", "y")]))
            .await
            .unwrap();

        store.delete(id).await.unwrap();
        assert_eq!(store.load(id).await.unwrap_err(), StoreError::NotFound(id));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = InMemoryExerciseStore::new();
        assert_eq!(store.delete(99).await.unwrap_err(), StoreError::NotFound(99));
    }

    #[tokio::test]
    async fn save_with_unknown_id_is_not_found() {
        let store = InMemoryExerciseStore::new();
        let mut exercise = sample("a", &[]);
        exercise.id = Some(42);
        assert_eq!(
            store.save(exercise).await.unwrap_err(),
            StoreError::NotFound(42)
        );
    }

    #[tokio::test]
    async fn test_cases_are_not_shared_between_parents() {
        let store = InMemoryExerciseStore::new();
        let first = store.save(sample("a", &[("same", "same")])).await.unwrap();
        let second = store.save(sample("b", &[("same", "same")])).await.unwrap();

        let mut updated = sample("a", &[("changed", "c")]);
        updated.id = Some(first);
        store.save(updated).await.unwrap();

        let untouched = store.load(second).await.unwrap();
        assert_eq!(untouched.test_cases[0].input_data, "same");
    }
}

use super::test_case::TestCase;

/// Canonical in-memory representation of an exercise, independent of either
/// external schema.
///
/// Optional fields preserve the presence or absence of their source field
/// exactly; they are never coerced to an empty string or zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exercise {
    /// Absent until the store assigns one.
    pub id: Option<i64>,
    /// Resolved at construction time from `title`, falling back to `name`.
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub difficulty: String,
    pub estimated_time: Option<String>,
    pub completion_rate: Option<i64>,
    pub completed: Option<bool>,
    pub content: Option<String>,
    pub executable: Option<bool>,
    pub code_template: Option<String>,
    /// Weak back reference to the owning lesson section. Lookup only; the
    /// exercise does not own its parent.
    pub lesson_id: Option<i64>,
    /// Owned exclusively by this exercise. Replaced wholesale on every
    /// inbound conversion, never merged incrementally.
    pub test_cases: Vec<TestCase>,
}

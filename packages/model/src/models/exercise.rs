use serde::{Deserialize, Serialize};

/// Inbound exercise payload in the current nested schema.
///
/// Scalar keys are snake_case; the test-case collection key is literally
/// `testCases`. `description` and `difficulty` are required by the contract
/// but optional here, so their absence surfaces as a named validation error
/// during normalization rather than as a serde type error.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ExerciseRequest {
    pub title: Option<String>,
    /// Historical producers sent the title under `name`; both are accepted.
    pub name: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub estimated_time: Option<String>,
    pub completion_rate: Option<i64>,
    pub completed: Option<bool>,
    pub content: Option<String>,
    pub executable: Option<bool>,
    pub code_template: Option<String>,
    #[serde(rename = "testCases")]
    pub test_cases: Option<Vec<TestCaseRequest>>,
}

/// Inbound test-case element. A missing `input` or `expectedOutput` becomes
/// an empty string rather than rejecting the whole payload.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct TestCaseRequest {
    #[serde(default)]
    pub input: String,
    #[serde(default, rename = "expectedOutput")]
    pub expected_output: String,
    pub explain: Option<String>,
}

/// Outbound exercise payload in the current nested schema.
///
/// Every key is always emitted; optional fields serialize as `null` and
/// `testCases` is `[]` when the exercise has no test cases, never `null`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseResponse {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub difficulty: String,
    pub estimated_time: Option<String>,
    pub completion_rate: Option<i64>,
    pub completed: Option<bool>,
    pub content: Option<String>,
    pub code_template: Option<String>,
    pub lesson_id: Option<i64>,
    #[serde(rename = "testCases")]
    pub test_cases: Vec<TestCaseResponse>,
}

/// Outbound test-case element. `explain` is `null` rather than omitted when
/// the canonical test case carries no explanation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TestCaseResponse {
    pub input: String,
    #[serde(rename = "expectedOutput")]
    pub expected_output: String,
    pub explain: Option<String>,
}

/// A stored exercise row in the legacy flat schema: the scalar columns plus
/// a `case` column holding the flat test-case array.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct LegacyExerciseRecord {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: String,
    pub estimated_time: Option<String>,
    pub completion_rate: Option<i64>,
    pub completed: Option<bool>,
    pub content: Option<String>,
    pub executable: Option<bool>,
    pub code_template: Option<String>,
    pub lesson_id: Option<i64>,
    #[serde(default)]
    pub case: Vec<LegacyTestCase>,
}

/// Legacy flat test-case element as persisted.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct LegacyTestCase {
    #[serde(default)]
    pub input_data: String,
    #[serde(default)]
    pub output_data: String,
    pub explain: Option<String>,
}

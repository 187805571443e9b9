//! Bidirectional conversion between the canonical [`Exercise`] entity and
//! the external schema representations.
//!
//! Inbound accepts the current nested shape ([`ExerciseRequest`]); stored
//! flat rows come in through [`Exercise::from_legacy`]. Outbound only ever
//! emits the nested shape. All conversions are stateless pure functions: a
//! fresh entity is built on every inbound call, and outbound takes the
//! entity by reference and never mutates it.

use crate::entity::{Exercise, TestCase};
use crate::error::NormalizeError;
use crate::models::exercise::{
    ExerciseRequest, ExerciseResponse, LegacyExerciseRecord, LegacyTestCase, TestCaseRequest,
    TestCaseResponse,
};

/// Take a required field or fail with its contract name.
fn required(value: Option<String>, field: &'static str) -> Result<String, NormalizeError> {
    value.ok_or(NormalizeError::MissingRequiredField(field))
}

/// First non-empty of `title` then `name`, else empty string.
///
/// An empty `title` falls through to `name` the same way an absent one
/// does, matching the behavior producers have relied on.
fn resolve_title(title: Option<String>, name: Option<String>) -> String {
    match title.filter(|t| !t.is_empty()) {
        Some(title) => title,
        None => match name.filter(|n| !n.is_empty()) {
            Some(name) => {
                tracing::debug!("exercise title resolved from legacy `name` field");
                name
            }
            None => String::new(),
        },
    }
}

impl Exercise {
    /// Build a fresh canonical exercise from a current-schema payload.
    ///
    /// `id` and `lesson_id` are never taken from the request; the store
    /// owns them. The test-case sequence is replaced wholesale in input
    /// order. Absent optional fields stay absent. A missing `description`
    /// or `difficulty` fails fast with a named error.
    pub fn from_request(req: ExerciseRequest) -> Result<Self, NormalizeError> {
        Ok(Self {
            id: None,
            title: resolve_title(req.title, req.name),
            description: required(req.description, "description")?,
            difficulty: required(req.difficulty, "difficulty")?,
            category: req.category,
            estimated_time: req.estimated_time,
            completion_rate: req.completion_rate,
            completed: req.completed,
            content: req.content,
            executable: req.executable,
            code_template: req.code_template,
            lesson_id: None,
            test_cases: req
                .test_cases
                .unwrap_or_default()
                .into_iter()
                .map(TestCase::from)
                .collect(),
        })
    }

    /// Build a canonical exercise from a stored legacy flat row.
    ///
    /// Stored rows already satisfy the required-column contract, so this
    /// conversion is infallible.
    pub fn from_legacy(rec: LegacyExerciseRecord) -> Self {
        Self {
            id: rec.id,
            title: rec.title,
            description: rec.description,
            category: rec.category,
            difficulty: rec.difficulty,
            estimated_time: rec.estimated_time,
            completion_rate: rec.completion_rate,
            completed: rec.completed,
            content: rec.content,
            executable: rec.executable,
            code_template: rec.code_template,
            lesson_id: rec.lesson_id,
            test_cases: rec.case.into_iter().map(TestCase::from).collect(),
        }
    }
}

impl From<TestCaseRequest> for TestCase {
    fn from(tc: TestCaseRequest) -> Self {
        Self {
            input_data: tc.input,
            output_data: tc.expected_output,
            explanation: tc.explain,
        }
    }
}

impl From<LegacyTestCase> for TestCase {
    fn from(tc: LegacyTestCase) -> Self {
        Self {
            input_data: tc.input_data,
            output_data: tc.output_data,
            explanation: tc.explain,
        }
    }
}

impl From<&Exercise> for ExerciseResponse {
    fn from(e: &Exercise) -> Self {
        Self {
            id: e.id,
            title: e.title.clone(),
            description: e.description.clone(),
            category: e.category.clone(),
            difficulty: e.difficulty.clone(),
            estimated_time: e.estimated_time.clone(),
            completion_rate: e.completion_rate,
            completed: e.completed,
            content: e.content.clone(),
            code_template: e.code_template.clone(),
            lesson_id: e.lesson_id,
            test_cases: e.test_cases.iter().map(TestCaseResponse::from).collect(),
        }
    }
}

impl From<&TestCase> for TestCaseResponse {
    fn from(tc: &TestCase) -> Self {
        Self {
            input: tc.input_data.clone(),
            expected_output: tc.output_data.clone(),
            explain: tc.explanation.clone(),
        }
    }
}

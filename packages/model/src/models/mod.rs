pub mod exercise;

pub use exercise::{
    ExerciseRequest, ExerciseResponse, LegacyExerciseRecord, LegacyTestCase, TestCaseRequest,
    TestCaseResponse,
};

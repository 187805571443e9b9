/// A single test case owned by an exercise.
///
/// `input_data` and `output_data` are always present; inbound conversions
/// substitute an empty string when the source element lacks one.
/// `explanation` stays absent when the source carried none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestCase {
    pub input_data: String,
    pub output_data: String,
    pub explanation: Option<String>,
}

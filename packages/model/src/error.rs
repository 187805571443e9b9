use thiserror::Error;

/// Errors produced while normalizing an external payload into a canonical
/// [`Exercise`](crate::entity::Exercise).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// A field the contract requires (`description`, `difficulty`) was
    /// absent from the inbound payload.
    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),
}

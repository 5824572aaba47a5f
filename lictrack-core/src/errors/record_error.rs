/// Boundary validation errors for license records and edit forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("client id must not be empty")]
    EmptyClientId,

    #[error("invalid {field} date: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid license term: {value:?}")]
    InvalidTerm { value: String },

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

//! Snapshot codec error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Reasons a token cannot be turned into a summary.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Snapshot token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Snapshot record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot record must be a JSON object")]
    NotAnObject,

    #[error("Snapshot record is missing the '{0}' list")]
    MissingList(&'static str),

    #[error("Snapshot field '{0}' must be a list")]
    ListNotArray(&'static str),
}

impl From<SnapshotError> for DomainError {
    fn from(err: SnapshotError) -> Self {
        DomainError::new(ErrorCode::MalformedSnapshot, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_list_names_the_key() {
        assert_eq!(
            SnapshotError::MissingList("growth").to_string(),
            "Snapshot record is missing the 'growth' list"
        );
    }

    #[test]
    fn converts_to_malformed_snapshot_domain_error() {
        let err: DomainError = SnapshotError::NotAnObject.into();
        assert_eq!(err.code, ErrorCode::MalformedSnapshot);
    }
}

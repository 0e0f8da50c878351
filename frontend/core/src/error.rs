use thiserror::Error;

/// Top-level error type for the DocForge client.
#[derive(Debug, Error)]
pub enum DocForgeError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("no file selected")]
    NoFileSelected,

    #[error("empty search query")]
    EmptyQuery,

    #[error("backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocForgeError {
    /// Local precondition failures. Surfaced to the user as a notice, never
    /// sent to the network and never logged as a diagnostic.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DocForgeError::UnsupportedFileType(_)
                | DocForgeError::NoFileSelected
                | DocForgeError::EmptyQuery
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(DocForgeError::NoFileSelected.is_validation());
        assert!(DocForgeError::EmptyQuery.is_validation());
        assert!(DocForgeError::UnsupportedFileType("text/plain".into()).is_validation());
        assert!(!DocForgeError::Backend { status: 500, body: String::new() }.is_validation());
        assert!(!DocForgeError::Other(anyhow::anyhow!("connection refused")).is_validation());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DocForgeError::UnsupportedFileType("text/plain".into()).to_string(),
            "unsupported file type: text/plain"
        );
        assert_eq!(
            DocForgeError::Backend { status: 502, body: "bad gateway".into() }.to_string(),
            "backend returned 502: bad gateway"
        );
    }
}

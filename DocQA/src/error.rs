use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocQaError {
    #[error("{0}")]
    Validation(String),

    #[error("No files uploaded")]
    NoFiles,

    #[error("Failed to extract text from documents")]
    ExtractionFailed,

    #[error(
        "OpenAI API key not configured. Please set your OPENAI_API_KEY environment variable \
         or add it to the .env file next to the server."
    )]
    Configuration,

    #[error("{0}")]
    Upstream(String),

    #[error("failed to parse {filename}: {reason}")]
    Parse { filename: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unexpected(String),
}

impl DocQaError {
    /// True when the caller sent something we can't work with.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DocQaError::Validation(_)
                | DocQaError::NoFiles
                | DocQaError::ExtractionFailed
                | DocQaError::Configuration
        )
    }
}

impl From<reqwest::Error> for DocQaError {
    fn from(err: reqwest::Error) -> Self {
        DocQaError::Upstream(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DocQaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_the_four_400_variants() {
        assert!(DocQaError::Validation("x".into()).is_client_error());
        assert!(DocQaError::NoFiles.is_client_error());
        assert!(DocQaError::ExtractionFailed.is_client_error());
        assert!(DocQaError::Configuration.is_client_error());
        assert!(!DocQaError::Upstream("boom".into()).is_client_error());
        assert!(!DocQaError::Unexpected("boom".into()).is_client_error());
    }

    #[test]
    fn upstream_message_is_surfaced_verbatim() {
        let err = DocQaError::Upstream("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }
}

//! Error handling for the ATS scorer

use thiserror::Error;

/// Errors raised around the scoring engine: reading inputs, loading
/// configuration, and rendering reports. Scoring itself never fails.
#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsError {
    fn from(err: anyhow::Error) -> Self {
        AtsError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AtsError::UnsupportedFormat("resume.docx".to_string());
        assert_eq!(err.to_string(), "File format not supported: resume.docx");

        let err: AtsError = anyhow::anyhow!("empty job description").into();
        assert!(matches!(err, AtsError::InvalidInput(_)));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AtsError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}

//! Input preparation shared by the CLI commands

use crate::cli::{validate_file_extension, JobSource};
use crate::error::{AtsError, Result};
use crate::input::InputManager;
use std::path::Path;

/// Extensions accepted for resume and job description files
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["pdf", "txt", "text", "md", "markdown"];

/// Source label recorded for job descriptions passed with `--job-text`
pub const INLINE_JOB_SOURCE: &str = "<inline>";

/// Resume and job description text ready for scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedInputs {
    pub resume_text: String,
    pub job_text: String,
    /// Job file path, or [`INLINE_JOB_SOURCE`]
    pub job_source: String,
}

pub fn validate_input_path(path: &Path) -> Result<()> {
    validate_file_extension(path, &SUPPORTED_EXTENSIONS).map_err(AtsError::InvalidInput)
}

/// Job description text plus a label naming where it came from
pub async fn read_job_text(input_manager: &mut InputManager, source: &JobSource) -> Result<(String, String)> {
    match (&source.job, &source.job_text) {
        (Some(path), _) => {
            validate_input_path(path)?;
            let text = input_manager.extract_text(path).await?;
            Ok((text, path.to_string_lossy().to_string()))
        }
        (None, Some(text)) => Ok((text.clone(), INLINE_JOB_SOURCE.to_string())),
        (None, None) => Err(AtsError::InvalidInput(
            "Provide a job description with --job or --job-text".to_string(),
        )),
    }
}

/// Read both inputs for `analyze`, refusing a blank resume or job description
pub async fn prepare_inputs(
    input_manager: &mut InputManager,
    resume: &Path,
    job: &JobSource,
) -> Result<PreparedInputs> {
    validate_input_path(resume)?;

    let resume_text = input_manager.extract_text(resume).await?;
    if resume_text.trim().is_empty() {
        return Err(AtsError::InvalidInput(format!(
            "No text could be extracted from resume: {}",
            resume.display()
        )));
    }

    let (job_text, job_source) = read_job_text(input_manager, job).await?;
    if job_text.trim().is_empty() {
        return Err(AtsError::InvalidInput("Job description is empty".to_string()));
    }

    Ok(PreparedInputs {
        resume_text,
        job_text,
        job_source,
    })
}

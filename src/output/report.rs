//! Report structures wrapping an analysis with suggestions and metadata

use crate::scoring::analysis::{EXPERIENCE_WEIGHT, FORMAT_WEIGHT, KEYWORD_WEIGHT, SECTION_WEIGHT};
use crate::scoring::AnalysisResult;
use crate::suggestions::{ScoreBand, Suggestion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sub-scores at or above this count as a strength
const STRENGTH_THRESHOLD: u32 = 80;
/// Sub-scores below this count as an improvement area
const WEAKNESS_THRESHOLD: u32 = 50;

/// Full report: summary, raw analysis, suggestions, and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    /// Executive summary with key findings
    pub summary: ReportSummary,

    /// Scoring engine output, unchanged
    pub analysis: AnalysisResult,

    /// Improvement suggestions, most urgent first within each rule group
    pub suggestions: Vec<Suggestion>,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub overall_score: u32,
    pub band: ScoreBand,
    pub verdict: String,
    pub components: Vec<ScoreComponent>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// One weighted sub-score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub name: String,
    pub score: u32,
    /// Percentage weight in the final score
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    /// File path, or a marker for inline text
    pub resume_source: String,
    pub job_source: String,
    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>, processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            processing_time_ms,
        }
    }
}

impl AtsReport {
    pub fn new(analysis: AnalysisResult, suggestions: Vec<Suggestion>, metadata: ReportMetadata) -> Self {
        Self {
            summary: ReportSummary::from_analysis(&analysis),
            analysis,
            suggestions,
            metadata,
        }
    }
}

impl ReportSummary {
    pub fn from_analysis(analysis: &AnalysisResult) -> Self {
        let band = ScoreBand::from_score(analysis.final_score);

        let components = vec![
            ScoreComponent::new("Keyword Match", analysis.keyword_score, KEYWORD_WEIGHT),
            ScoreComponent::new("Section Completeness", analysis.section_score, SECTION_WEIGHT),
            ScoreComponent::new("Format Quality", analysis.format_score, FORMAT_WEIGHT),
            ScoreComponent::new("Experience Relevance", analysis.experience_score, EXPERIENCE_WEIGHT),
        ];

        let mut strengths = Vec::new();
        if analysis.keyword_score >= STRENGTH_THRESHOLD {
            strengths.push("Strong keyword coverage for ATS filters".to_string());
        }
        if analysis.sections_analysis.missing().is_empty() {
            strengths.push("All standard resume sections present".to_string());
        }
        if analysis.format_score >= STRENGTH_THRESHOLD {
            strengths.push("ATS-friendly format with quantified, action-driven content".to_string());
        }
        if analysis.experience_score >= STRENGTH_THRESHOLD {
            strengths.push("Experience matches the role's seniority and domain".to_string());
        }

        let mut improvement_areas = Vec::new();
        if analysis.keyword_score < WEAKNESS_THRESHOLD {
            improvement_areas.push("Add the job's technical and soft-skill keywords".to_string());
        }
        if analysis.section_score < WEAKNESS_THRESHOLD {
            improvement_areas.push("Add the missing standard resume sections".to_string());
        }
        if analysis.experience_score < WEAKNESS_THRESHOLD {
            improvement_areas.push("Align experience wording with the job description".to_string());
        }

        Self {
            overall_score: analysis.final_score,
            band,
            verdict: band.verdict().to_string(),
            components,
            strengths,
            improvement_areas,
        }
    }
}

impl ScoreComponent {
    fn new(name: &str, score: u32, weight: u32) -> Self {
        Self {
            name: name.to_string(),
            score,
            weight,
        }
    }
}

//! ATS scorer library

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;
pub mod suggestions;

pub use config::Config;
pub use error::{AtsError, Result};
pub use scoring::{baseline_overlap_score, real_ats_analysis, AnalysisResult};
pub use suggestions::{generate_suggestions, Suggestion};

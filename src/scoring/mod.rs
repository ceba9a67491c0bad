//! Rule-based ATS scoring engine

pub mod keywords;
pub mod sections;
pub mod calculators;
pub mod analysis;

pub use analysis::{baseline_overlap_score, real_ats_analysis, AnalysisResult};
pub use keywords::{JobKeywords, KeywordCategory};
pub use sections::{ResumeSection, SectionPresence};

//! Keyword extraction from job descriptions
//!
//! Three fixed vocabularies (technical, soft skills, experience) are matched
//! case-insensitively against the job description. Matches are lower-cased
//! and deduplicated; the returned order is vocabulary pattern order, then
//! order of first appearance in the text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static TECHNICAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\b(?:Python|Java|JavaScript|C\+\+|C#|PHP|Ruby|Go|Rust|Swift|Kotlin)\b",
        r"(?i)\b(?:React|Angular|Vue|Node\.js|Express|Django|Flask|Spring|Laravel)\b",
        r"(?i)\b(?:AWS|Azure|GCP|Docker|Kubernetes|Jenkins|Git|GitHub|GitLab)\b",
        r"(?i)\b(?:SQL|MySQL|PostgreSQL|MongoDB|Redis|Elasticsearch)\b",
        r"(?i)\b(?:HTML|CSS|SASS|LESS|Bootstrap|Tailwind|jQuery)\b",
        r"(?i)\b(?:REST|API|GraphQL|Microservices|Agile|Scrum|DevOps)\b",
        r"(?i)\b(?:Machine Learning|AI|Data Science|Analytics|Tableau|Power BI)\b",
        r"(?i)\b(?:Linux|Unix|Windows|macOS|iOS|Android)\b",
    ])
});

static SOFT_SKILL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\b(?:leadership|teamwork|communication|problem solving|analytical|creative)\b",
        r"(?i)\b(?:collaboration|time management|project management|mentoring|training)\b",
        r"(?i)\b(?:adaptability|flexibility|initiative|attention to detail|critical thinking)\b",
        r"(?i)\b(?:presentation|negotiation|customer service|client relations|stakeholder management)\b",
    ])
});

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\b(?:years?|experience|senior|junior|lead|principal|architect|engineer|developer|analyst)\b",
        r"(?i)\b(?:startup|enterprise|fintech|healthcare|e-commerce|SaaS|B2B|B2C)\b",
        r"(?i)\b(?:remote|hybrid|onsite|full-time|part-time|contract|freelance)\b",
    ])
});

// Tokens like c++, c#, .net keep their symbols.
static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z\-+.#\d]{1,}").expect("Invalid token regex"));

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid keyword vocabulary regex"))
        .collect()
}

/// Keyword category a vocabulary belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Technical,
    SoftSkill,
    Experience,
}

impl KeywordCategory {
    fn patterns(&self) -> &'static [Regex] {
        match self {
            KeywordCategory::Technical => &TECHNICAL_PATTERNS,
            KeywordCategory::SoftSkill => &SOFT_SKILL_PATTERNS,
            KeywordCategory::Experience => &EXPERIENCE_PATTERNS,
        }
    }

    /// Lower-cased, deduplicated matches of this category's vocabulary
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for pattern in self.patterns() {
            for mat in pattern.find_iter(text) {
                let keyword = mat.as_str().to_lowercase();
                if seen.insert(keyword.clone()) {
                    keywords.push(keyword);
                }
            }
        }

        keywords
    }
}

impl std::fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordCategory::Technical => write!(f, "Technical"),
            KeywordCategory::SoftSkill => write!(f, "Soft Skills"),
            KeywordCategory::Experience => write!(f, "Experience"),
        }
    }
}

/// All three keyword categories extracted from one job description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobKeywords {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience: Vec<String>,
}

impl JobKeywords {
    pub fn extract(jd_text: &str) -> Self {
        Self {
            technical: extract_technical_keywords(jd_text),
            soft_skills: extract_soft_skills(jd_text),
            experience: extract_experience_keywords(jd_text),
        }
    }

    pub fn get(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::Technical => &self.technical,
            KeywordCategory::SoftSkill => &self.soft_skills,
            KeywordCategory::Experience => &self.experience,
        }
    }

    pub fn total(&self) -> usize {
        self.technical.len() + self.soft_skills.len() + self.experience.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Extract technical skills and technologies from a job description
pub fn extract_technical_keywords(text: &str) -> Vec<String> {
    KeywordCategory::Technical.extract(text)
}

/// Extract soft skills from a job description
pub fn extract_soft_skills(text: &str) -> Vec<String> {
    KeywordCategory::SoftSkill.extract(text)
}

/// Extract seniority, industry, and employment-type keywords
pub fn extract_experience_keywords(text: &str) -> Vec<String> {
    KeywordCategory::Experience.extract(text)
}

/// General-purpose tokenizer. Not used by the scoring pipeline.
///
/// Every token is lower-cased, `c++` becomes `cpp` and `c#` becomes `csharp`.
/// Duplicates are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    WORD_REGEX
        .find_iter(text)
        .map(|m| normalize_token(m.as_str()))
        .collect()
}

fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .replace("c++", "cpp")
        .replace("c#", "csharp")
}

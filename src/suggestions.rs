//! Rule-based improvement suggestions derived from an analysis result

use crate::scoring::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Keyword score below which missing keywords become a critical issue
pub const KEYWORD_THRESHOLD: u32 = 70;
/// Keyword score below which the general keyword strategy is suggested
pub const KEYWORD_STRATEGY_THRESHOLD: u32 = 80;
pub const SECTION_THRESHOLD: u32 = 80;
pub const FORMAT_THRESHOLD: u32 = 70;
pub const EXPERIENCE_THRESHOLD: u32 = 70;
pub const OVERALL_THRESHOLD: u32 = 80;

/// How many missing keywords a suggestion names
const KEYWORDS_PER_SUGGESTION: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Keywords,
    Sections,
    Format,
    Experience,
    KeywordStrategy,
    Achievements,
    Formatting,
    Industry,
    ExperienceSection,
    SkillsSection,
    ProjectsSection,
    Overall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical, // Must fix
    High,     // Should fix
    Medium,   // Good to fix
    Low,      // Nice to fix
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub priority: Priority,
    pub title: String,
    pub message: String,
}

impl Suggestion {
    fn new(category: SuggestionCategory, priority: Priority, title: &str, message: String) -> Self {
        Self {
            category,
            priority,
            title: title.to_string(),
            message,
        }
    }
}

/// Display band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ScoreBand::Excellent,
            80..=89 => ScoreBand::VeryGood,
            70..=79 => ScoreBand::Good,
            60..=69 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::VeryGood => "Very Good",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent ATS compatibility - keep refining with fresh metrics and keywords",
            ScoreBand::VeryGood => "Very good ATS compatibility - minor improvements could help",
            ScoreBand::Good => "Good ATS compatibility - some targeted improvements recommended",
            ScoreBand::Fair => "Fair ATS compatibility - several improvements needed",
            ScoreBand::Poor => "Poor ATS compatibility - major revisions needed",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Build suggestions for an analysis.
///
/// Score-driven suggestions come first, then the general guidance that
/// always applies, then the overall strategy when the final score is low.
pub fn generate_suggestions(analysis: &AnalysisResult) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if analysis.keyword_score < KEYWORD_THRESHOLD {
        let top: Vec<&str> = analysis
            .missing_keywords
            .iter()
            .take(KEYWORDS_PER_SUGGESTION)
            .map(|k| k.as_str())
            .collect();
        let named = if top.is_empty() {
            String::new()
        } else {
            format!(" Work these missing keywords into your experience, skills and summary: {}.", top.join(", "))
        };
        suggestions.push(Suggestion::new(
            SuggestionCategory::Keywords,
            Priority::Critical,
            "Critical keyword optimization",
            format!(
                "Your keyword match is {}%, below the {}% most ATS filters expect.{}",
                analysis.keyword_score, KEYWORD_THRESHOLD, named
            ),
        ));
    }

    let missing_sections = analysis.sections_analysis.missing();
    if analysis.section_score < SECTION_THRESHOLD && !missing_sections.is_empty() {
        let names: Vec<&str> = missing_sections.iter().map(|s| s.as_str()).collect();
        suggestions.push(Suggestion::new(
            SuggestionCategory::Sections,
            Priority::High,
            "Essential sections missing",
            format!(
                "Your resume is missing the {} section(s), holding section completeness at {}%. \
                 Start by adding a {} section with standard heading text.",
                names.join(", "),
                analysis.section_score,
                names[0]
            ),
        ));
    }

    if analysis.format_score < FORMAT_THRESHOLD {
        suggestions.push(Suggestion::new(
            SuggestionCategory::Format,
            Priority::High,
            "Format optimization needed",
            format!(
                "Your format score is {}%. Quantify achievements (e.g. 'cut latency by 40%'), \
                 open bullets with action verbs such as Developed, Implemented or Optimized, \
                 use clear section headers on separate lines, and include a professional email address.",
                analysis.format_score
            ),
        ));
    }

    if analysis.experience_score < EXPERIENCE_THRESHOLD {
        suggestions.push(Suggestion::new(
            SuggestionCategory::Experience,
            Priority::Medium,
            "Experience relevance",
            format!(
                "Your experience relevance is {}%. Mirror the seniority, industry and employment \
                 terms the job description uses and tie them to concrete results.",
                analysis.experience_score
            ),
        ));
    }

    if analysis.keyword_score < KEYWORD_STRATEGY_THRESHOLD {
        suggestions.push(Suggestion::new(
            SuggestionCategory::KeywordStrategy,
            Priority::Medium,
            "Advanced keyword strategy",
            "Use the exact wording of the job description, cover both technical and soft skills, \
             repeat key terms across summary, experience and skills, and pair acronyms with their \
             full form (e.g. 'Machine Learning (ML)')."
                .to_string(),
        ));
    }

    suggestions.extend(general_guidance());

    if analysis.final_score < OVERALL_THRESHOLD {
        suggestions.push(Suggestion::new(
            SuggestionCategory::Overall,
            Priority::High,
            "Overall strategy",
            format!(
                "Your ATS score is {}%. Prioritize the missing keywords, make sure every standard \
                 section is present, quantify your achievements, and tailor the resume to each application.",
                analysis.final_score
            ),
        ));
    }

    suggestions
}

fn general_guidance() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            SuggestionCategory::Achievements,
            Priority::Medium,
            "Quantified achievements",
            "Back claims with numbers: percentages, team sizes, time saved, revenue or cost impact, \
             and the scale of users or data you handled."
                .to_string(),
        ),
        Suggestion::new(
            SuggestionCategory::Formatting,
            Priority::Low,
            "ATS-friendly formatting",
            "Use standard headings (EXPERIENCE, EDUCATION, SKILLS, PROJECTS), plain bullets, no \
             tables or graphics, contact details at the top, and consistent MM/YYYY dates."
                .to_string(),
        ),
        Suggestion::new(
            SuggestionCategory::Industry,
            Priority::Low,
            "Industry-specific optimization",
            "Research the terminology recruiters in your field expect and list the certifications, \
             tools and standards you work with."
                .to_string(),
        ),
        Suggestion::new(
            SuggestionCategory::ExperienceSection,
            Priority::Low,
            "Experience section enhancement",
            "Lead each bullet with an action verb, describe outcomes rather than duties, and name \
             the technologies involved."
                .to_string(),
        ),
        Suggestion::new(
            SuggestionCategory::SkillsSection,
            Priority::Low,
            "Skills section optimization",
            "Group skills by category, reuse the job description's exact keywords, and keep the list current."
                .to_string(),
        ),
        Suggestion::new(
            SuggestionCategory::ProjectsSection,
            Priority::Low,
            "Projects section strategy",
            "Show two or three relevant projects with the problem, your solution, the stack used, \
             measurable results and a link where possible."
                .to_string(),
        ),
    ]
}

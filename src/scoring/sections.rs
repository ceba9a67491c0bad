//! Resume section presence detection

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:name|email|phone|linkedin)").expect("Invalid header regex"));
static SUMMARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:summary|objective|profile|about)").expect("Invalid summary regex"));
static EXPERIENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:experience|employment|work history|professional)").expect("Invalid experience regex")
});
static EDUCATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:education|degree|university|college|school)").expect("Invalid education regex")
});
static SKILLS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:skills|technical|technologies|competencies)").expect("Invalid skills regex")
});
static PROJECTS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:projects|portfolio|achievements)").expect("Invalid projects regex"));

/// The six canonical resume sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSection {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 6] = [
        ResumeSection::Header,
        ResumeSection::Summary,
        ResumeSection::Experience,
        ResumeSection::Education,
        ResumeSection::Skills,
        ResumeSection::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeSection::Header => "header",
            ResumeSection::Summary => "summary",
            ResumeSection::Experience => "experience",
            ResumeSection::Education => "education",
            ResumeSection::Skills => "skills",
            ResumeSection::Projects => "projects",
        }
    }

    /// Header, experience, education, and skills count double in the section score.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ResumeSection::Header | ResumeSection::Experience | ResumeSection::Education | ResumeSection::Skills
        )
    }

    fn regex(&self) -> &'static Regex {
        match self {
            ResumeSection::Header => &HEADER_REGEX,
            ResumeSection::Summary => &SUMMARY_REGEX,
            ResumeSection::Experience => &EXPERIENCE_REGEX,
            ResumeSection::Education => &EDUCATION_REGEX,
            ResumeSection::Skills => &SKILLS_REGEX,
            ResumeSection::Projects => &PROJECTS_REGEX,
        }
    }
}

impl std::fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presence of each canonical section. Serializes as a six-key map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub header: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
}

impl SectionPresence {
    pub fn is_present(&self, section: ResumeSection) -> bool {
        match section {
            ResumeSection::Header => self.header,
            ResumeSection::Summary => self.summary,
            ResumeSection::Experience => self.experience,
            ResumeSection::Education => self.education,
            ResumeSection::Skills => self.skills,
            ResumeSection::Projects => self.projects,
        }
    }

    /// Sections paired with their presence, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (ResumeSection, bool)> + '_ {
        ResumeSection::ALL.iter().map(move |s| (*s, self.is_present(*s)))
    }

    pub fn missing(&self) -> Vec<ResumeSection> {
        self.iter().filter(|(_, present)| !present).map(|(s, _)| s).collect()
    }

    pub fn present_count(&self) -> usize {
        self.iter().filter(|(_, present)| *present).count()
    }
}

/// Detect which sections a resume contains.
///
/// Any synonym anywhere in the text counts, so a bio that mentions
/// "experience" reports an experience section.
pub fn analyze_resume_sections(resume_text: &str) -> SectionPresence {
    let found = |section: ResumeSection| section.regex().is_match(resume_text);

    SectionPresence {
        header: found(ResumeSection::Header),
        summary: found(ResumeSection::Summary),
        experience: found(ResumeSection::Experience),
        education: found(ResumeSection::Education),
        skills: found(ResumeSection::Skills),
        projects: found(ResumeSection::Projects),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_detection() {
        let resume = "Jane Smith\nEmail: jane@example.com\n\nSummary\nBackend developer\n\n\
                      Work History\nAcme Corp\n\nEducation\nBSc, State University\n\nSkills\nRust, SQL";
        let sections = analyze_resume_sections(resume);

        assert!(sections.header);
        assert!(sections.summary);
        assert!(sections.experience);
        assert!(sections.education);
        assert!(sections.skills);
        assert!(!sections.projects);
        assert_eq!(sections.missing(), vec![ResumeSection::Projects]);
        assert_eq!(sections.present_count(), 5);
    }

    #[test]
    fn test_empty_resume_has_no_sections() {
        let sections = analyze_resume_sections("");
        assert_eq!(sections, SectionPresence::default());
        assert_eq!(sections.missing().len(), 6);
    }

    #[test]
    fn test_substring_matches_count() {
        // "professional" inside a sentence still counts as experience
        let sections = analyze_resume_sections("A PROFESSIONAL photographer");
        assert!(sections.experience);
        assert!(!sections.skills);
    }

    #[test]
    fn test_serializes_six_keys() {
        let value = serde_json::to_value(analyze_resume_sections("skills")).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 6);
        for section in ResumeSection::ALL {
            assert!(map.contains_key(section.as_str()));
        }
        assert_eq!(map["skills"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_required_sections() {
        let required: Vec<_> = ResumeSection::ALL.iter().filter(|s| s.is_required()).collect();
        assert_eq!(required.len(), 4);
        assert!(!ResumeSection::Summary.is_required());
        assert!(!ResumeSection::Projects.is_required());
    }
}

//! Sub-score calculators
//!
//! Each calculator returns an integer in [0, 100]. Ratios are rounded half-up
//! in integer arithmetic, so a given input always produces the same score.

use crate::scoring::sections::{ResumeSection, SectionPresence};
use once_cell::sync::Lazy;
use regex::Regex;

/// Score returned when there is nothing to match against
pub const NEUTRAL_SCORE: u32 = 50;

/// Technical keywords weigh 1.5, soft skills 1.0; kept in halves.
const TECHNICAL_HALF_WEIGHT: u64 = 3;
const SOFT_SKILL_HALF_WEIGHT: u64 = 2;

const REQUIRED_SECTION_WEIGHT: u64 = 2;
const OPTIONAL_SECTION_WEIGHT: u64 = 1;

const FORMAT_BASE_SCORE: i64 = 50;
const QUANTIFIED_BONUS: i64 = 15;
const ACTION_VERB_BONUS: i64 = 15;
const LINE_COUNT_BONUS: i64 = 10;
const EMAIL_BONUS: i64 = 10;
const MIN_LINES_FOR_BONUS: usize = 10;

static QUANTIFIED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+%|\b\d+\+|\b\d+[kK]|\$\d+").expect("Invalid quantified achievement regex"));
static ACTION_VERB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:developed|implemented|created|designed|managed|led|improved|optimized)")
        .expect("Invalid action verb regex")
});
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+\.\w+").expect("Invalid email regex"));

/// Clamp any intermediate value into the score range
pub fn clamp_score(value: i64) -> u32 {
    value.clamp(0, 100) as u32
}

/// `numerator / denominator * 100`, rounded half-up and clamped
pub(crate) fn percentage(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let rounded = (200 * numerator + denominator) / (2 * denominator);
    clamp_score(rounded.min(i64::MAX as u64) as i64)
}

fn count_contained(resume_lower: &str, keywords: &[String]) -> u64 {
    keywords.iter().filter(|k| resume_lower.contains(k.as_str())).count() as u64
}

/// Weighted share of job keywords that appear in the resume.
///
/// Each keyword is counted once no matter how often it occurs.
pub fn calculate_keyword_score(resume_text: &str, technical_keywords: &[String], soft_skills: &[String]) -> u32 {
    if technical_keywords.is_empty() && soft_skills.is_empty() {
        return NEUTRAL_SCORE;
    }

    let resume_lower = resume_text.to_lowercase();
    let found = count_contained(&resume_lower, technical_keywords) * TECHNICAL_HALF_WEIGHT
        + count_contained(&resume_lower, soft_skills) * SOFT_SKILL_HALF_WEIGHT;
    let possible = technical_keywords.len() as u64 * TECHNICAL_HALF_WEIGHT
        + soft_skills.len() as u64 * SOFT_SKILL_HALF_WEIGHT;

    percentage(found, possible)
}

/// Section completeness, required sections weighted double
pub fn calculate_section_score(sections: &SectionPresence) -> u32 {
    let weight = |section: &ResumeSection| {
        if section.is_required() {
            REQUIRED_SECTION_WEIGHT
        } else {
            OPTIONAL_SECTION_WEIGHT
        }
    };

    let possible: u64 = ResumeSection::ALL.iter().map(weight).sum();
    let earned: u64 = ResumeSection::ALL
        .iter()
        .filter(|s| sections.is_present(**s))
        .map(weight)
        .sum();

    percentage(earned, possible)
}

/// ATS-friendliness heuristic: base 50 plus additive bonuses
pub fn calculate_format_score(resume_text: &str) -> u32 {
    let mut score = FORMAT_BASE_SCORE;

    if QUANTIFIED_REGEX.is_match(resume_text) {
        score += QUANTIFIED_BONUS;
    }

    if ACTION_VERB_REGEX.is_match(resume_text) {
        score += ACTION_VERB_BONUS;
    }

    if resume_text.split('\n').count() > MIN_LINES_FOR_BONUS {
        score += LINE_COUNT_BONUS;
    }

    if EMAIL_REGEX.is_match(resume_text) {
        score += EMAIL_BONUS;
    }

    clamp_score(score)
}

/// Share of experience keywords that appear in the resume
pub fn calculate_experience_relevance(resume_text: &str, experience_keywords: &[String]) -> u32 {
    if experience_keywords.is_empty() {
        return NEUTRAL_SCORE;
    }

    let resume_lower = resume_text.to_lowercase();
    let found = count_contained(&resume_lower, experience_keywords);

    percentage(found, experience_keywords.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_neutral_defaults() {
        assert_eq!(calculate_keyword_score("", &[], &[]), 50);
        assert_eq!(calculate_experience_relevance("", &[]), 50);
    }

    #[test]
    fn test_keyword_score_weighting() {
        let technical = words(&["python", "docker"]);
        let soft = words(&["leadership"]);

        // 1.5 of 4.0 possible
        assert_eq!(calculate_keyword_score("Python developer", &technical, &soft), 38);
        // 1.0 of 4.0 possible
        assert_eq!(calculate_keyword_score("showed leadership", &technical, &soft), 25);
        assert_eq!(calculate_keyword_score("python, docker, leadership", &technical, &soft), 100);
        assert_eq!(calculate_keyword_score("nothing relevant", &technical, &soft), 0);
    }

    #[test]
    fn test_keyword_repetition_counts_once() {
        let technical = words(&["python", "rust"]);
        let once = calculate_keyword_score("python", &technical, &[]);
        let many = calculate_keyword_score("python python python python", &technical, &[]);

        assert_eq!(once, 50);
        assert_eq!(once, many);
    }

    #[test]
    fn test_section_score() {
        assert_eq!(calculate_section_score(&SectionPresence::default()), 0);

        let all = SectionPresence {
            header: true,
            summary: true,
            experience: true,
            education: true,
            skills: true,
            projects: true,
        };
        assert_eq!(calculate_section_score(&all), 100);

        let required_only = SectionPresence {
            summary: false,
            projects: false,
            ..all
        };
        assert_eq!(calculate_section_score(&required_only), 80);

        let optional_only = SectionPresence {
            summary: true,
            projects: true,
            ..SectionPresence::default()
        };
        assert_eq!(calculate_section_score(&optional_only), 20);
    }

    #[test]
    fn test_format_score_bonuses() {
        assert_eq!(calculate_format_score(""), 50);
        assert_eq!(calculate_format_score("Grew revenue 40%"), 65);
        assert_eq!(calculate_format_score("Designed the platform"), 65);
        assert_eq!(calculate_format_score("reach me at me@example.com"), 60);
        assert_eq!(calculate_format_score(&"line\n".repeat(10)), 60);
        // ten lines is not enough
        assert_eq!(calculate_format_score(&"line\n".repeat(9)), 50);

        let full = format!("{}Led a team of 10+ and saved $20k, jane@example.com", "x\n".repeat(12));
        assert_eq!(calculate_format_score(&full), 100);
    }

    #[test]
    fn test_quantified_patterns() {
        for text in ["50%", "10+ years", "serving 5k users", "saved $300"] {
            assert_eq!(calculate_format_score(text), 65, "pattern not detected in {:?}", text);
        }
    }

    #[test]
    fn test_experience_relevance() {
        let keywords = words(&["senior", "remote", "fintech"]);

        assert_eq!(calculate_experience_relevance("Senior engineer, remote", &keywords), 67);
        assert_eq!(calculate_experience_relevance("Junior", &keywords), 0);
        assert_eq!(calculate_experience_relevance("senior remote fintech", &keywords), 100);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 0), 0);
        assert_eq!(percentage(7, 7), 100);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_score(-5), 0);
        assert_eq!(clamp_score(140), 100);
        assert_eq!(clamp_score(42), 42);
    }
}

//! Score aggregation: the full ATS analysis of one resume against one job description

use crate::scoring::calculators::{
    calculate_experience_relevance, calculate_format_score, calculate_keyword_score, calculate_section_score,
    clamp_score,
};
use crate::scoring::keywords::JobKeywords;
use crate::scoring::sections::{analyze_resume_sections, SectionPresence};
use log::debug;
use serde::{Deserialize, Serialize};

/// Final score weights as integer percentages
pub const KEYWORD_WEIGHT: u32 = 40;
pub const SECTION_WEIGHT: u32 = 25;
pub const FORMAT_WEIGHT: u32 = 20;
pub const EXPERIENCE_WEIGHT: u32 = 15;

pub const MAX_MISSING_KEYWORDS: usize = 20;

/// Soft skills worth flagging when the job asks for them and the resume lacks them
pub const PRIORITY_SOFT_SKILLS: [&str; 5] = ["leadership", "communication", "problem solving", "teamwork", "analytical"];

/// Result of one analysis. Every score is in [0, 100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub final_score: u32,
    pub keyword_score: u32,
    pub section_score: u32,
    pub format_score: u32,
    pub experience_score: u32,
    /// At most [`MAX_MISSING_KEYWORDS`], technical keywords first
    pub missing_keywords: Vec<String>,
    pub sections_analysis: SectionPresence,
    pub technical_keywords_found: Vec<String>,
    pub soft_skills_found: Vec<String>,
}

/// Run the full analysis.
///
/// Pure and infallible: any pair of strings, including empty ones, produces a
/// result, and the same pair always produces the same result.
pub fn real_ats_analysis(resume_text: &str, jd_text: &str) -> AnalysisResult {
    let keywords = JobKeywords::extract(jd_text);
    debug!(
        "Extracted {} technical, {} soft skill, {} experience keywords",
        keywords.technical.len(),
        keywords.soft_skills.len(),
        keywords.experience.len()
    );

    let sections = analyze_resume_sections(resume_text);

    let keyword_score = calculate_keyword_score(resume_text, &keywords.technical, &keywords.soft_skills);
    let section_score = calculate_section_score(&sections);
    let format_score = calculate_format_score(resume_text);
    let experience_score = calculate_experience_relevance(resume_text, &keywords.experience);

    let final_score = weighted_final_score(keyword_score, section_score, format_score, experience_score);
    debug!(
        "Scores: keyword={} section={} format={} experience={} final={}",
        keyword_score, section_score, format_score, experience_score, final_score
    );

    AnalysisResult {
        final_score,
        keyword_score,
        section_score,
        format_score,
        experience_score,
        missing_keywords: find_missing_critical_keywords(resume_text, &keywords.technical, &keywords.soft_skills),
        sections_analysis: sections,
        technical_keywords_found: find_matching_keywords(resume_text, &keywords.technical),
        soft_skills_found: find_matching_keywords(resume_text, &keywords.soft_skills),
    }
}

/// `round(keyword*0.40 + section*0.25 + format*0.20 + experience*0.15)`, half-up
pub fn weighted_final_score(keyword: u32, section: u32, format: u32, experience: u32) -> u32 {
    let weighted = keyword as i64 * KEYWORD_WEIGHT as i64
        + section as i64 * SECTION_WEIGHT as i64
        + format as i64 * FORMAT_WEIGHT as i64
        + experience as i64 * EXPERIENCE_WEIGHT as i64;

    clamp_score((weighted + 50) / 100)
}

/// Technical keywords absent from the resume, followed by absent priority
/// soft skills the job mentions; capped at [`MAX_MISSING_KEYWORDS`].
pub fn find_missing_critical_keywords(
    resume_text: &str,
    technical_keywords: &[String],
    soft_skills: &[String],
) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();

    let missing_technical = technical_keywords
        .iter()
        .filter(|k| !resume_lower.contains(k.as_str()))
        .cloned();

    let missing_soft = PRIORITY_SOFT_SKILLS
        .iter()
        .filter(|skill| soft_skills.iter().any(|s| s == *skill))
        .filter(|skill| !resume_lower.contains(**skill))
        .map(|skill| skill.to_string());

    missing_technical
        .chain(missing_soft)
        .take(MAX_MISSING_KEYWORDS)
        .collect()
}

/// Keywords that do appear in the resume, in job description order
pub fn find_matching_keywords(resume_text: &str, keywords: &[String]) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();
    keywords
        .iter()
        .filter(|k| resume_lower.contains(k.as_str()))
        .cloned()
        .collect()
}

/// Legacy projection of [`real_ats_analysis`] onto its final score and missing keywords
pub fn baseline_overlap_score(resume_text: &str, jd_text: &str) -> (u32, Vec<String>) {
    let analysis = real_ats_analysis(resume_text, jd_text);
    (analysis.final_score, analysis.missing_keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_RESUME: &str = "John Doe, Software Engineer. Email: john@example.com. Skills: Python, React, Docker. \
         Experience: Developed and implemented a system, improved performance by 40%.";
    const SCENARIO_JD: &str = "We need a Python React Docker engineer with leadership and communication skills.";

    #[test]
    fn test_scenario_matching_resume() {
        let result = real_ats_analysis(SCENARIO_RESUME, SCENARIO_JD);

        assert_eq!(result.technical_keywords_found, vec!["python", "react", "docker"]);
        assert!(result.soft_skills_found.is_empty());
        assert_eq!(result.missing_keywords, vec!["leadership", "communication"]);
        // quantified + action verbs + email, single line
        assert_eq!(result.format_score, 90);
        // 4.5 of 6.5 possible
        assert_eq!(result.keyword_score, 69);
        assert_eq!(result.experience_score, 100);
        // header, experience, skills
        assert_eq!(result.section_score, 60);
        assert_eq!(result.final_score, 76);
        assert_eq!(
            result.final_score,
            weighted_final_score(result.keyword_score, result.section_score, result.format_score, result.experience_score)
        );
    }

    #[test]
    fn test_scenario_empty_resume() {
        let result = real_ats_analysis("", "Python");

        assert_eq!(result.section_score, 0);
        assert_eq!(result.keyword_score, 0);
        assert_eq!(result.format_score, 50);
        assert_eq!(result.experience_score, 50);
        // 0 + 0 + 10 + 7.5 rounds up
        assert_eq!(result.final_score, 18);
        assert_eq!(result.missing_keywords, vec!["python"]);
    }

    #[test]
    fn test_both_empty() {
        let result = real_ats_analysis("", "");

        assert_eq!(result.keyword_score, 50);
        assert_eq!(result.experience_score, 50);
        assert_eq!(result.section_score, 0);
        assert_eq!(result.format_score, 50);
        assert_eq!(result.final_score, 38);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_determinism() {
        let first = real_ats_analysis(SCENARIO_RESUME, SCENARIO_JD);
        let second = real_ats_analysis(SCENARIO_RESUME, SCENARIO_JD);
        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
    }

    #[test]
    fn test_missing_keywords_capped() {
        let jd = "Python Java JavaScript PHP Ruby Go Rust Swift Kotlin React Angular Vue Express Django \
                  Flask Spring Laravel AWS Azure GCP Docker Kubernetes leadership teamwork";
        let result = real_ats_analysis("nothing to see", jd);

        assert_eq!(result.missing_keywords.len(), MAX_MISSING_KEYWORDS);
        // technical keywords take the slots before soft skills
        assert!(!result.missing_keywords.contains(&"leadership".to_string()));
        assert_eq!(result.missing_keywords[0], "python");
    }

    #[test]
    fn test_priority_soft_skills_only() {
        let missing = find_missing_critical_keywords(
            "",
            &[],
            &["mentoring".to_string(), "teamwork".to_string(), "leadership".to_string()],
        );
        // fixed priority order, non-priority skills skipped
        assert_eq!(missing, vec!["leadership", "teamwork"]);
    }

    #[test]
    fn test_weight_conservation() {
        assert_eq!(weighted_final_score(100, 100, 100, 100), 100);
        assert_eq!(weighted_final_score(0, 0, 0, 0), 0);
        // 20 + 20 + 18 + 10.05
        assert_eq!(weighted_final_score(50, 80, 90, 67), 68);
        // 7.5 rounds up
        assert_eq!(weighted_final_score(0, 0, 0, 50), 8);
    }

    #[test]
    fn test_range_invariant() {
        let inputs = [
            ("", ""),
            ("", "Python Java leadership senior remote"),
            (SCENARIO_RESUME, ""),
            (SCENARIO_RESUME, SCENARIO_JD),
            ("\n\n\n\n\n\n\n\n\n\n\n\n100% 5k $9 led me@x.io", "GraphQL"),
            ("ünïcödé résumé ✓", "Ünïcödé Python"),
        ];

        for (resume, jd) in inputs {
            let r = real_ats_analysis(resume, jd);
            for score in [r.final_score, r.keyword_score, r.section_score, r.format_score, r.experience_score] {
                assert!(score <= 100);
            }
            assert!(r.missing_keywords.len() <= MAX_MISSING_KEYWORDS);
        }
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(real_ats_analysis(SCENARIO_RESUME, SCENARIO_JD)).unwrap();
        let map = value.as_object().unwrap();

        for key in [
            "final_score",
            "keyword_score",
            "section_score",
            "format_score",
            "experience_score",
            "missing_keywords",
            "sections_analysis",
            "technical_keywords_found",
            "soft_skills_found",
        ] {
            assert!(map.contains_key(key), "missing key {}", key);
        }
        assert_eq!(map.len(), 9);
    }

    #[test]
    fn test_baseline_overlap_score() {
        let (score, missing) = baseline_overlap_score(SCENARIO_RESUME, SCENARIO_JD);
        let full = real_ats_analysis(SCENARIO_RESUME, SCENARIO_JD);

        assert_eq!(score, full.final_score);
        assert_eq!(missing, full.missing_keywords);
    }
}

//! Output formatters: console, JSON, and Markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::{AtsError, Result};
use crate::output::report::AtsReport;
use crate::suggestions::{Priority, ScoreBand, Suggestion};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for integration with other tools
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "Critical",
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

fn yes_no(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::VeryGood => Color::BrightGreen,
            ScoreBand::Good => Color::Yellow,
            ScoreBand::Fair => Color::BrightYellow,
            ScoreBand::Poor => Color::BrightRed,
        };
        let badge = band.label().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> &'static str {
        if self.use_colors {
            match priority {
                Priority::Critical => "🚨",
                Priority::High => "⚠️",
                Priority::Medium => "📋",
                Priority::Low => "💡",
            }
        } else {
            match priority {
                Priority::Critical => "[!]",
                Priority::High => "[*]",
                Priority::Medium => "[-]",
                Priority::Low => "[+]",
            }
        }
    }

    fn format_suggestion(&self, index: usize, suggestion: &Suggestion) -> String {
        let color = match suggestion.priority {
            Priority::Critical => Color::Red,
            Priority::High => Color::Yellow,
            Priority::Medium => Color::Cyan,
            Priority::Low => Color::White,
        };
        format!(
            "{}. {} {}\n   {}\n",
            index,
            self.format_priority_icon(suggestion.priority),
            self.colorize(&suggestion.title, color),
            suggestion.message
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;
        let analysis = &report.analysis;

        output.push_str(&self.format_header("ATS COMPATIBILITY ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Final ATS Score: {}% {}\n",
            summary.overall_score,
            self.format_score_badge(summary.band)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&summary.verdict, Color::Cyan)));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for component in &summary.components {
            output.push_str(&format!(
                "  • {}: {}% (weight: {}%)\n",
                component.name, component.score, component.weight
            ));
        }

        if !summary.strengths.is_empty() {
            output.push_str(&self.format_header("Key Strengths", 3));
            for strength in &summary.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !summary.improvement_areas.is_empty() {
            output.push_str(&self.format_header("Improvement Areas", 3));
            for area in &summary.improvement_areas {
                output.push_str(&format!("  • {}\n", self.colorize(area, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("Keywords", 2));
        output.push_str(&format!(
            "Technical found: {}\n",
            self.colorize(&join_or_none(&analysis.technical_keywords_found), Color::Green)
        ));
        output.push_str(&format!(
            "Soft skills found: {}\n",
            self.colorize(&join_or_none(&analysis.soft_skills_found), Color::Green)
        ));
        output.push_str(&format!(
            "Missing: {}\n",
            self.colorize(&join_or_none(&analysis.missing_keywords), Color::Red)
        ));

        if self.detailed {
            output.push_str(&self.format_header("Sections", 2));
            for (section, present) in analysis.sections_analysis.iter() {
                let mark = if present {
                    self.colorize("present", Color::Green)
                } else {
                    self.colorize("missing", Color::Red)
                };
                output.push_str(&format!("  • {}: {}\n", section, mark));
            }
        }

        if !report.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 2));
            let shown: Vec<&Suggestion> = if self.detailed {
                report.suggestions.iter().collect()
            } else {
                report
                    .suggestions
                    .iter()
                    .filter(|s| matches!(s.priority, Priority::Critical | Priority::High))
                    .collect()
            };
            for (i, suggestion) in shown.iter().enumerate() {
                output.push_str(&self.format_suggestion(i + 1, suggestion));
            }
            let hidden = report.suggestions.len() - shown.len();
            if hidden > 0 {
                output.push_str(&format!("   ... {} more with --detailed\n", hidden));
            }
        }

        output.push_str(&format!(
            "\n{} Generated by ATS Scorer v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.tool_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(band: ScoreBand) -> &'static str {
        match band {
            ScoreBand::Excellent => "🟢 Excellent",
            ScoreBand::VeryGood => "🟡 Very Good",
            ScoreBand::Good => "🟠 Good",
            ScoreBand::Fair => "🔴 Fair",
            ScoreBand::Poor => "🔴 Poor",
        }
    }

    fn source_name(source: &str) -> String {
        Path::new(source)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| source.to_string())
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;
        let analysis = &report.analysis;

        output.push_str("# ATS Compatibility Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                Self::source_name(&report.metadata.resume_source),
                Self::source_name(&report.metadata.job_source)
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Final ATS Score:** {}% {}\n\n",
            summary.overall_score,
            Self::markdown_score_badge(summary.band)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", summary.verdict));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Score | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        for component in &summary.components {
            output.push_str(&format!(
                "| {} | {}% | {}% |\n",
                component.name, component.score, component.weight
            ));
        }
        output.push('\n');

        if !summary.strengths.is_empty() {
            output.push_str("### Key Strengths\n\n");
            for strength in &summary.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');
        }

        if !summary.improvement_areas.is_empty() {
            output.push_str("### Areas for Improvement\n\n");
            for area in &summary.improvement_areas {
                output.push_str(&format!("- {}\n", area));
            }
            output.push('\n');
        }

        output.push_str("## Keywords\n\n");
        output.push_str(&format!(
            "**Technical found:** {}\n\n",
            join_or_none(&analysis.technical_keywords_found)
        ));
        output.push_str(&format!("**Soft skills found:** {}\n\n", join_or_none(&analysis.soft_skills_found)));
        output.push_str(&format!("**Missing:** {}\n\n", join_or_none(&analysis.missing_keywords)));

        output.push_str("## Sections\n\n");
        output.push_str("| Section | Present |\n");
        output.push_str("|---------|---------|\n");
        for (section, present) in analysis.sections_analysis.iter() {
            output.push_str(&format!("| {} | {} |\n", section, yes_no(present)));
        }
        output.push('\n');

        if !report.suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}. **{}** ({})\n   {}\n\n",
                    i + 1,
                    suggestion.title,
                    priority_label(suggestion.priority),
                    suggestion.message
                ));
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by ATS Scorer v{}*\n", report.metadata.tool_version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &AtsReport, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };

        if formatter.supports_format() != *format {
            return Err(AtsError::OutputFormatting(format!("No formatter for {:?}", format)));
        }
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ats{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::scoring::{real_ats_analysis, AnalysisResult};
    use crate::suggestions::generate_suggestions;

    fn sample_report() -> AtsReport {
        let analysis = real_ats_analysis(
            "Jane Doe\nEmail: jane@example.com\nSkills: Python, SQL\nExperience: Developed ETL jobs",
            "Python, Docker and AWS engineer with leadership",
        );
        let suggestions = generate_suggestions(&analysis);
        AtsReport::new(analysis, suggestions, ReportMetadata::new("cv/jane.txt", "jobs/data.md", 7))
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let analysis: AnalysisResult = serde_json::from_value(value["analysis"].clone()).unwrap();
        assert_eq!(analysis, report.analysis);
        assert_eq!(value["summary"]["overall_score"], report.analysis.final_score);
    }

    #[test]
    fn test_markdown_contains_tables() {
        let report = sample_report();
        let markdown = MarkdownFormatter::new(true).format_report(&report).unwrap();

        assert!(markdown.contains("| Component | Score | Weight |"));
        assert!(markdown.contains("| Keyword Match |"));
        assert!(markdown.contains("| projects | no |"));
        assert!(markdown.contains("**Resume:** `jane.txt`"));
        assert!(markdown.contains("**Missing:** docker, aws, leadership"));
    }

    #[test]
    fn test_console_without_colors() {
        let report = sample_report();
        let plain = ConsoleFormatter::new(false, false).format_report(&report).unwrap();

        assert!(plain.contains(&format!("Final ATS Score: {}%", report.summary.overall_score)));
        assert!(plain.contains("[!] Critical keyword optimization"));
        // low-priority guidance only in detailed mode
        assert!(!plain.contains("Projects section strategy"));
        assert!(!plain.contains("\u{1b}["));

        let detailed = ConsoleFormatter::new(false, true).format_report(&report).unwrap();
        assert!(detailed.contains("Projects section strategy"));
        assert!(detailed.contains("summary: missing"));
    }

    #[test]
    fn test_report_generator_dispatch() {
        let report = sample_report();
        let generator = ReportGenerator::with_options(false, false);

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("# ATS Compatibility Report"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "cv/jane.pdf", false), "jane_ats.json");
        assert_eq!(suggest_filename(&OutputFormat::Markdown, "jane.md", false), "jane_ats.md");
        assert!(suggest_filename(&OutputFormat::Console, "jane.txt", true).starts_with("jane_ats_"));
    }

    #[test]
    fn test_save_report_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");

        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }
}

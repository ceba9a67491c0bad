//! ATS scorer: rule-based resume scoring against a job description

use ats_scorer::app::{prepare_inputs, read_job_text};
use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::Config;
use ats_scorer::error::{AtsError, Result};
use ats_scorer::input::InputManager;
use ats_scorer::output::{save_report_to_file, suggest_filename, AtsReport, ReportGenerator, ReportMetadata};
use ats_scorer::scoring::keywords::extract_keywords;
use ats_scorer::scoring::{real_ats_analysis, JobKeywords, KeywordCategory};
use ats_scorer::suggestions;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
            no_suggestions,
        } => {
            let started = Instant::now();
            info!("Starting ATS analysis");

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);

            let inputs = prepare_inputs(&mut input_manager, &resume, &job).await?;

            info!(
                "Scoring resume ({} chars) against job description ({} chars)",
                inputs.resume_text.chars().count(),
                inputs.job_text.chars().count()
            );
            let analysis = real_ats_analysis(&inputs.resume_text, &inputs.job_text);

            let suggestions = if no_suggestions || !config.output.include_suggestions {
                Vec::new()
            } else {
                suggestions::generate_suggestions(&analysis)
            };

            let metadata = ReportMetadata::new(
                resume.to_string_lossy(),
                inputs.job_source,
                started.elapsed().as_millis() as u64,
            );
            let report = AtsReport::new(analysis, suggestions, metadata);

            // no escape codes in saved files
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed);
            let content = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    // a directory gets a generated file name
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &resume.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&content, &path)?;
                    println!("✅ Report saved to: {}", path.display());
                }
                None => println!("{}", content),
            }

            info!("ATS score: {}%", report.summary.overall_score);
        }

        Commands::Keywords { job, tokens } => {
            let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);
            let (job_text, job_source) = read_job_text(&mut input_manager, &job).await?;
            let keywords = JobKeywords::extract(&job_text);

            println!("🔤 Keywords in {}\n", job_source);
            for category in [KeywordCategory::Technical, KeywordCategory::SoftSkill, KeywordCategory::Experience] {
                let found = keywords.get(category);
                if found.is_empty() {
                    println!("{}: none", category);
                } else {
                    println!("{} ({}): {}", category, found.len(), found.join(", "));
                }
            }

            if tokens {
                let all_tokens = extract_keywords(&job_text);
                println!("\nTokens ({}): {}", all_tokens.len(), all_tokens.join(" "));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", config_path.display());
                println!("\nInput:");
                println!("  Cache extracted text: {}", config.input.enable_cache);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
                println!("  Suggestions: {}", config.output.include_suggestions);
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }
            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

//! ATS analyzer: rule-based resume scoring tool

use ats_analyzer::cli::{
    parse_output_format, validate_file_extension, Cli, Commands, ConfigAction, KeywordCategory,
};
use ats_analyzer::config::Config;
use ats_analyzer::error::{AtsError, Result};
use ats_analyzer::input::file_detector::FileType;
use ats_analyzer::input::manager::InputManager;
use ats_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use ats_analyzer::processing::analyzer::AtsAnalyzer;
use ats_analyzer::processing::reference::{ReferenceData, Section};
use clap::Parser;
use log::{error, info};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process;

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
            job_title,
            output,
            save,
            detailed,
            no_plan,
        } => {
            validate_file_extension(&resume, &FileType::SUPPORTED_EXTENSIONS)
                .map_err(AtsError::UnsupportedFormat)?;

            let output_format = match output.as_deref() {
                Some(format) => parse_output_format(format).map_err(AtsError::InvalidInput)?,
                None => config.output.format,
            };

            let mut output_config = config.output.clone();
            output_config.detailed |= detailed;
            if no_plan {
                output_config.include_plan = false;
            }

            println!("🚀 ATS compatibility analysis");
            println!("📄 Resume: {}", resume.display());
            println!("🔧 Output Format: {:?}", output_format);

            println!("\n📂 Extracting text...");
            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            info!("Extracted {} characters from {}", resume_text.len(), resume.display());

            let analyzer = AtsAnalyzer::from_config(&config)?;
            println!("🔍 Scoring format, keywords, structure, content, length and readability...");
            let report = analyzer.report(&resume_text, job_title.as_deref())?;

            if !report.is_general() {
                println!("💼 Target Job: {}", report.target_job);
            }

            let generator = ReportGenerator::from_config(&output_config);
            let rendered = generator.generate_report(&report, &output_format)?;
            println!("\n{}", rendered);

            if let Some(save_path) = save {
                let resume_name = resume.to_string_lossy();
                let target = if save_path.is_dir() {
                    save_path.join(suggest_filename(&output_format, &resume_name, true))
                } else {
                    save_path
                };

                // Files never get terminal color codes.
                output_config.color_output = false;
                let content = ReportGenerator::from_config(&output_config)
                    .generate_report(&report, &output_format)?;
                save_report_to_file(&content, &target)?;
                println!("💾 Report saved to {}", target.display());
            }

            println!(
                "\n🎯 Analysis complete! ATS score: {:.1}/100 ({})",
                report.analysis.overall_score, report.analysis.score_interpretation.level
            );
        }

        Commands::Keywords { category } => {
            let analyzer = AtsAnalyzer::from_config(&config)?;
            print_reference(analyzer.reference(), category);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config File: {}", config_path.display());
                match config.analysis.max_input_chars {
                    Some(limit) => println!("Max Input Characters: {}", limit),
                    None => println!("Max Input Characters: unlimited"),
                }
                match config.reference_data_path() {
                    Some(path) => println!("Reference Data: {}", path.display()),
                    None => println!("Reference Data: built-in"),
                }
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Include Plan: {}", config.output.include_plan);
                println!("  Colors: {}", config.output.color_output);
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

fn print_reference(reference: &ReferenceData, category: Option<KeywordCategory>) {
    let show = |wanted: KeywordCategory| category.map_or(true, |c| c == wanted);

    if show(KeywordCategory::Technical) {
        print_terms("🛠️  Technical Skills", &reference.technical_skills);
    }
    if show(KeywordCategory::Soft) {
        print_terms("🤝 Soft Skills", &reference.soft_skills);
    }
    if show(KeywordCategory::Verbs) {
        print_terms("⚡ Action Verbs", &reference.action_verbs);
    }
    if show(KeywordCategory::Industry) {
        println!(
            "🏭 Industry Keywords ({} industries, {} terms)",
            reference.industry_keywords.len(),
            reference.industry_term_count()
        );
        for (industry, terms) in &reference.industry_keywords {
            println!("  • {}: {}", industry, join_terms(terms));
        }
        println!();
    }
    if show(KeywordCategory::Sections) {
        println!("📑 Required Sections");
        for section in Section::ALL {
            println!(
                "  • {}: {}",
                section,
                join_terms(reference.required_sections.synonyms(section))
            );
        }
        println!();
    }
}

fn print_terms(title: &str, terms: &BTreeSet<String>) {
    println!("{} ({})", title, terms.len());
    println!("  {}", join_terms(terms));
    println!();
}

fn join_terms(terms: &BTreeSet<String>) -> String {
    terms.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

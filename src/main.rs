mod cli;
mod config;
mod engine;
mod error;
mod input;
mod logging;
mod metrics;
mod narrative;
mod polish;
mod report;
mod types;

use crate::error::{ParkgateError, Result};
use crate::polish::{CommandPolisher, NarrativePolisher, UnavailablePolisher};
use crate::report::document::{Document, ReportMeta};
use crate::types::policy::PolicyConfig;
use crate::types::result::{Decision, EvaluationResult};
use chrono::Utc;
use clap::Parser;
use std::path::Path;
use std::time::Duration;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const CONDITIONAL: i32 = 1;
    pub const DEFER: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn decision_exit_code(decision: Decision) -> i32 {
    match decision {
        Decision::Approve => exit_code::SUCCESS,
        Decision::Conditional => exit_code::CONDITIONAL,
        Decision::Defer => exit_code::DEFER,
    }
}

fn resolve_policy(args: &cli::PolicyArgs) -> Result<PolicyConfig> {
    let cwd = std::env::current_dir()?;
    let mut policy = config::load_policy(&cwd, args.config.as_deref())?;
    if let Some(threshold) = args.invest_threshold {
        policy.thresholds.invest_per_mu = threshold;
    }
    if let Some(threshold) = args.tax_threshold {
        policy.thresholds.tax_per_mu = threshold;
    }
    policy.validate()?;
    Ok(policy)
}

fn print_summary(name: &str, result: &EvaluationResult) {
    println!("project: {}", if name.is_empty() { "—" } else { name });
    println!(
        "mu: {:.2}  invest/mu: {:.1} (>= {})  tax/mu: {:.1} (>= {})",
        result.mu,
        result.invest_intensity,
        result.invest_threshold,
        result.tax_intensity,
        result.tax_threshold
    );
    println!(
        "hard thresholds: {}",
        if result.pass_hard { "met" } else { "not met" }
    );
    println!("score: {:.1} / 100", result.score.total);
    for component in &result.score.components {
        println!("  {:<18} {:>5.1}", component.id, component.points);
    }
    println!("decision: {}", result.decision.label());
    for reason in &result.reasons {
        println!("- {reason}");
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Init(cmd) => {
            input::write_sample(&cmd.path, cmd.force)?;
            println!("wrote sample project: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Evaluate(cmd) => {
            let policy = resolve_policy(&cmd.policy)?;
            let loaded = input::load_project(&cmd.path)?;
            let result = engine::evaluate(&loaded.input, &policy);

            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_summary(&loaded.input.project_name, &result);
            }
            Ok(decision_exit_code(result.decision))
        }
        cli::Commands::Report(cmd) => {
            let policy = resolve_policy(&cmd.policy)?;
            let loaded = input::load_project(&cmd.path)?;
            let result = engine::evaluate(&loaded.input, &policy);

            let polisher: Box<dyn NarrativePolisher> = match cmd
                .polish_cmd
                .as_deref()
                .and_then(|line| {
                    CommandPolisher::new(line, Duration::from_secs(cmd.polish_timeout_secs))
                }) {
                Some(command) => Box::new(command),
                None => Box::new(UnavailablePolisher),
            };
            let analysis = polish::industry_analysis(&loaded.input, polisher.as_ref());

            let document = Document::from_result(&result, Some(analysis.as_str()))
                .with_meta(ReportMeta {
                    generated_at: Utc::now().to_rfc3339(),
                    input_sha256: loaded.sha256.clone(),
                    tool_version: env!("CARGO_PKG_VERSION").to_string(),
                });

            let format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Text => report::OutputFormat::Text,
            };

            let target = match (&cmd.output, cmd.save) {
                (Some(path), _) => Some(path.clone()),
                (None, true) => {
                    let dir = cmd.path.parent().unwrap_or_else(|| Path::new("."));
                    let name = report::default_file_name(&loaded.input.project_name, format);
                    Some(dir.join(name))
                }
                (None, false) => None,
            };

            match target {
                Some(path) => {
                    let bytes = report::Exporter::export(&format, &document, &result)?;
                    std::fs::write(&path, bytes).map_err(ParkgateError::Io)?;
                    println!("report: {}", path.display());
                }
                None => println!("{}", report::render(&document, &result, format)?),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "parkgate",
    version,
    about = "Industrial park investment committee project screening CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample project file to fill in
    Init(InitCommand),
    /// Score a project and print the decision
    Evaluate(EvaluateCommand),
    /// Render the full review report
    Report(ReportCommand),
}

#[derive(Args)]
pub struct InitCommand {
    #[arg(default_value = "project.toml")]
    pub path: PathBuf,
    #[arg(long)]
    pub force: bool,
}

/// Policy selection shared by the scoring commands.
#[derive(Args)]
pub struct PolicyArgs {
    /// Policy file used instead of ./parkgate.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Investment threshold per mu (10k CNY), overrides config
    #[arg(long)]
    pub invest_threshold: Option<f64>,
    /// Annual tax threshold per mu (10k CNY), overrides config
    #[arg(long)]
    pub tax_threshold: Option<f64>,
}

#[derive(Args)]
pub struct EvaluateCommand {
    pub path: PathBuf,
    #[command(flatten)]
    pub policy: PolicyArgs,
    /// Print the full evaluation as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ReportCommand {
    pub path: PathBuf,
    #[command(flatten)]
    pub policy: PolicyArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Write `<project>_研判报告.<ext>` next to the project file
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
    /// Program that turns a prompt on stdin into industry analysis on stdout
    #[arg(long)]
    pub polish_cmd: Option<String>,
    #[arg(long, default_value_t = 20)]
    pub polish_timeout_secs: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Text,
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "matchreport",
    version,
    about = "Segment resume/job match reports and classify match scores"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a report into sections and classify its score.
    Analyze(AnalyzeArgs),
    /// Print the band for a single score.
    Classify(ClassifyArgs),
    /// Summarize a list of stored scores.
    Stats(StatsArgs),
    /// Write a default matchreport.toml in the current directory.
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    /// Report file, or `-` for stdin.
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,
    #[arg(long, allow_negative_numbers = true)]
    pub score: Option<i64>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ClassifyArgs {
    #[arg(allow_negative_numbers = true)]
    pub score: i64,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct StatsArgs {
    /// Score list file, or `-` for stdin.
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

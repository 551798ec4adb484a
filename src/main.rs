mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{AnalyzeArgs, Cli, ClassifyArgs, Commands, OutputArgs, StatsArgs};
use matchreport::config::{self, Config};
use matchreport::core::report::{self, JsonAnalysis, JsonBand};
use matchreport::utils::fs as fs_utils;
use matchreport::{Registry, analyze, classify, distribution, extract_match_score};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Classify(args) => run_classify(args),
        Commands::Stats(args) => run_stats(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `matchreport init`; writing ./{}",
                    config::CONFIG_FILE_NAME
                );
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn load(output: &OutputArgs) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let config = config::load_config(output.config.as_deref(), &cwd)?;
    init_logging(&config);
    Ok(config)
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_analyze(args: AnalyzeArgs) -> Result<i32> {
    let config = load(&args.output)?;
    let text = fs_utils::read_input(&args.input)?;

    let score = match args.score {
        Some(score) => Some(score),
        None if config.general.extract_score => {
            let extracted = extract_match_score(&text);
            debug!(?extracted, "score taken from report text");
            extracted
        }
        None => None,
    };

    let result = analyze(Registry::standard(), &text, score)
        .with_context(|| format!("cannot classify score for {}", args.input.display()))?;
    if result.needs_raw_fallback() {
        info!("no load-bearing sections found; falling back to raw report");
    }

    if args.output.json || config.general.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonAnalysis::from(&result))?
        );
    } else {
        report::print_human(&result, config.general.raw_fallback);
    }

    Ok(0)
}

fn run_classify(args: ClassifyArgs) -> Result<i32> {
    let config = load(&args.output)?;
    let band = classify(Registry::standard(), args.score)?;
    let score = u8::try_from(args.score).context("classified score does not fit a percentage")?;

    if args.output.json || config.general.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonBand::new(score, band))?
        );
    } else {
        println!("{}", report::score_line(Some(score), Some(band)));
    }

    Ok(0)
}

fn run_stats(args: StatsArgs) -> Result<i32> {
    let config = load(&args.output)?;
    let content = fs_utils::read_input(&args.input)?;
    let scores = fs_utils::parse_score_list(&content)?;
    let summary = distribution(Registry::standard(), &scores)
        .with_context(|| format!("invalid stored score in {}", args.input.display()))?;

    if args.output.json || config.general.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        report::print_summary(&summary);
    }

    Ok(0)
}

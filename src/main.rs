use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use exam_scheduler::db::{connect, load_input, write_schedule};
use exam_scheduler::reporter::{generate_reports, print_summary, OutputFormat};
use exam_scheduler::scheduler::generate_schedule;
use exam_scheduler::types::Config;
use exam_scheduler::validator::validate_schedule;
use exam_scheduler::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exam-scheduler")]
#[command(about = "Constraint-based exam schedule optimizer")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Suppress the progress bar and print a JSON summary only
    #[arg(short, long)]
    quiet: bool,

    /// Write json/markdown/text reports to this directory in addition to the database
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config)?;

    let mut conn = connect().context("connecting to database")?;
    let input = load_input(&mut conn, config).context("loading schedule input")?;

    if !cli.quiet {
        println!(
            "Loaded {} modules, {} students, {} professors, {} rooms",
            input.modules.len(),
            input.students.len(),
            input.professors.len(),
            input.rooms.len()
        );
    }

    let schedule = generate_schedule(&input, cli.quiet)?;
    let validation = validate_schedule(&schedule, &input);

    write_schedule(&mut conn, &schedule, &input.config).context("writing schedule")?;

    if let Some(output) = &cli.output {
        generate_reports(
            &schedule,
            &input,
            &validation,
            output,
            &[OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text],
        )?;
    }

    if cli.quiet {
        let summary = exam_scheduler::reporter::generate_json_summary(&schedule)?;
        println!("{summary}");
    } else {
        print_summary(&schedule, &validation);
        if let Some(output) = &cli.output {
            println!("Reports written to: {}", output.display().to_string().green());
        }
    }

    Ok(())
}

fn load_config(path: &PathBuf) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file '{}'", path.display()))?;

    toml::from_str(&content)
        .map_err(|e| {
            exam_scheduler::OptimizerError::InvalidConfig {
                path: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
}

//! Career Projection CLI
//!
//! Projects monthly levels and retirement figures for an HR roster

use anyhow::{Context, Result};
use career_projection::employee::load_roster;
use career_projection::projection::{EmployeeProjection, ProjectionConfig, ProjectionEngine};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "career-projection")]
#[command(about = "Project career levels and retirement eligibility for a roster")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Level of every employee in every competence month, as CSV
    Levels(RunArgs),
    /// Retirement date, regime and leave balance of every employee, as CSV
    Retirement(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Roster CSV exported by HR
    #[arg(long)]
    roster: PathBuf,

    /// JSON file with projection parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Levels(args) => {
            let projections = run(&args)?;
            let rows = projections.iter().flat_map(|p| p.rows.iter());
            write_csv(args.output.as_deref(), rows)?;
        }
        Command::Retirement(args) => {
            let projections = run(&args)?;
            let summaries = projections.iter().map(|p| &p.summary);
            write_csv(args.output.as_deref(), summaries)?;
        }
    }

    Ok(())
}

fn run(args: &RunArgs) -> Result<Vec<EmployeeProjection>> {
    let config = match &args.config {
        Some(path) => ProjectionConfig::from_json_path(path)?,
        None => ProjectionConfig::default(),
    };

    let start = Instant::now();
    let employees = load_roster(&args.roster)
        .with_context(|| format!("loading roster {}", args.roster.display()))?;

    let engine = ProjectionEngine::new(config);
    let projections = engine.project_roster(&employees)?;
    info!("projected {} employees in {:?}", projections.len(), start.elapsed());

    Ok(projections)
}

fn write_csv<'a, T, I>(output: Option<&Path>, records: I) -> Result<()>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = csv::Writer::from_writer(sink);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    if let Some(path) = output {
        info!("wrote {}", path.display());
    }
    Ok(())
}

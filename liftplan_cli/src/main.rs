use clap::{Parser, Subcommand};
use liftplan_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(about = "Training program catalog and weekly schedule planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use this JSON catalog instead of the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available programs (default)
    Programs {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the weekly schedule for a program
    Schedule {
        /// Program id (defaults to the configured program)
        program: Option<String>,

        /// Training days per week (defaults to the configured count)
        #[arg(long, short)]
        days: Option<u8>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file (or the active catalog)
    Validate {
        /// Catalog file to check
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    liftplan_core::logging::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    tracing::debug!("Catalog source: {:?}", config.catalog.path);

    match cli.command {
        Some(Commands::Programs { json }) => cmd_programs(&config, json),
        Some(Commands::Schedule {
            program,
            days,
            json,
        }) => cmd_schedule(&config, program, days, json),
        Some(Commands::Validate { path }) => cmd_validate(&config, path),
        None => cmd_programs(&config, false),
    }
}

fn cmd_programs(config: &Config, json: bool) -> Result<()> {
    let catalog = config.load_catalog()?;
    let summaries = catalog.list_programs();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        println!("{} {} ({})", summary.icon, summary.name, summary.id);
        println!("    {}", summary.description);
        println!("    Days per week: {}", format_days(&summary.supported_days));
    }

    Ok(())
}

fn cmd_schedule(
    config: &Config,
    program: Option<String>,
    days: Option<u8>,
    json: bool,
) -> Result<()> {
    let catalog = config.load_catalog()?;
    let program_id = program.unwrap_or_else(|| config.defaults.program.clone());
    let day_count = days.unwrap_or(config.defaults.days);

    let schedule = catalog.get_schedule(&program_id, day_count)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    let program = catalog.get_program(&program_id)?;
    display_schedule(program, &schedule);
    Ok(())
}

fn cmd_validate(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let programs = match path.or_else(|| config.catalog.path.clone()) {
        Some(path) => catalog::read_programs(&path)?,
        None => catalog::builtin_programs(),
    };

    let errors = catalog::validate_programs(&programs);
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::InconsistentCatalog(format!(
            "{} defects",
            errors.len()
        )));
    }

    println!("✓ Catalog OK: {} programs", programs.len());
    Ok(())
}

fn format_days(days: &[u8]) -> String {
    days.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_schedule(program: &Program, schedule: &Schedule<'_>) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} {}", program.icon, program.name.to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {} days per week", schedule.day_count);
    println!();

    for session in &schedule.sessions {
        println!("  Day {}: {}", session.day, session.name);
        for exercise in session.exercises {
            println!(
                "    → {}: {} x {} ({})",
                exercise.name, exercise.sets, exercise.reps, exercise.muscle
            );
        }
        println!();
    }

    println!("  Total sets per week: {}", schedule.total_sets());
}

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use seeder::{Plan, Seeder, Step};

use crate::error::Result;
use crate::settings::Settings;

mod error;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "edu_seed")]
#[command(about = "Seed languages, translations, roles and reference data")]
struct Cli {
    /// Config file (TOML). Defaults to `config/edu_seed.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    /// Do not apply migrations before seeding.
    #[arg(long, global = true)]
    no_migrate: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every step (the default).
    Run,
    /// Run the named steps only.
    Step(StepArgs),
    /// Print the steps in the order they run.
    List,
    /// Report translations missing for an active locale.
    Verify,
}

#[derive(Args, Debug)]
struct StepArgs {
    #[arg(required = true, value_parser = parse_step)]
    steps: Vec<Step>,

    /// Also run every step the named ones depend on.
    #[arg(long)]
    with_deps: bool,
}

fn parse_step(raw: &str) -> std::result::Result<Step, String> {
    raw.parse::<Step>().map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(url) = cli.database_url {
        settings.database.url = url;
    }
    if cli.no_migrate {
        settings.database.migrate = false;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter())
        .init();

    let command = cli.command.unwrap_or(Command::Run);
    if let Command::List = command {
        return list(&Plan::full()?);
    }

    let db = connect(&settings).await?;
    let mut builder = Seeder::builder()
        .database(db)
        .duplicate_policy(settings.seed.duplicate_policy)
        .default_password(settings.seed.default_password.as_str());
    if let Some(dir) = settings.seed.data_dir {
        builder = builder.data_dir(dir);
    }
    let seeder = builder.build().await?;

    match command {
        Command::Run => run(&seeder, &Plan::full()?).await,
        Command::Step(args) => run(&seeder, &Plan::select(&args.steps, args.with_deps)?).await,
        Command::Verify => verify(&seeder).await,
        Command::List => Ok(()),
    }
}

async fn connect(settings: &Settings) -> Result<DatabaseConnection> {
    tracing::debug!(url = %settings.database.url, "connecting");
    let db = sea_orm::Database::connect(&settings.database.url).await?;
    if settings.database.migrate {
        Migrator::up(&db, None).await?;
    }
    Ok(db)
}

async fn run(seeder: &Seeder, plan: &Plan) -> Result<()> {
    let outcome = seeder
        .run_with_progress(plan, |report| {
            println!("{:<24} {}", report.step.name(), report.tally);
        })
        .await;

    match outcome {
        Ok(report) => {
            tracing::info!(steps = report.steps.len(), totals = %report.totals(), "seeding done");
            Ok(())
        }
        Err(failure) => {
            eprintln!("{failure}");
            match failure.last_completed {
                Some(step) => eprintln!("last completed step: {step}"),
                None => eprintln!("no step completed"),
            }
            std::process::exit(1);
        }
    }
}

fn list(plan: &Plan) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for step in plan.steps() {
        let deps: Vec<&str> = step.depends_on().iter().map(|dep| dep.name()).collect();
        let after = if deps.is_empty() {
            String::new()
        } else {
            format!(" (after {})", deps.join(", "))
        };
        writeln!(out, "{:<24} {}{after}", step.name(), step.describe())?;
    }
    Ok(())
}

async fn verify(seeder: &Seeder) -> Result<()> {
    let missing = seeder.missing_translations().await?;
    if missing.is_empty() {
        println!("all active locales have every translation key");
        return Ok(());
    }

    let mut out = std::io::stdout().lock();
    for gap in &missing {
        writeln!(out, "missing {gap}")?;
    }
    writeln!(out, "{} translations missing", missing.len())?;
    drop(out);
    std::process::exit(1);
}

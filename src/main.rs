//! Command-line interface for fintech-fixtures
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Five users as pretty JSON
//! fintech-fixtures generate user --count 5 --format json
//!
//! # Reproducible transactions for one user, written to a file
//! FIXTURES_SEED=2024 fintech-fixtures generate transaction --count 100 \
//!   --reference-time 2026-10-01T00:00:00Z \
//!   --user-id 6f1c2a3e-1b2c-4d5e-8f90-0123456789ab \
//!   --output transactions.jsonl
//! ```
//!
//! ## Scenario
//! ```bash
//! fintech-fixtures scenario --config scenario.yaml --output-dir fixtures
//! ```
//!
//! ## Schema
//! ```bash
//! fintech-fixtures schema alert
//! ```

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use fintech_fixtures::args::{EntityArg, GenerateArgs, ScenarioArgs};
use fintech_fixtures::{build_dataset, export_dataset, EntityWriter, ScenarioConfig};
use fixture_core::{schema_by_name, Alert, EntityKind, Transaction, User};
use fixture_generator::{Fixture, FixtureGenerator, Overrides};
use std::fs::File;
use std::io::{self, BufWriter, Write};

#[derive(Parser)]
#[command(name = "fintech-fixtures")]
#[command(about = "Deterministic synthetic users, transactions and alerts")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate entities of one kind
    Generate(GenerateArgs),

    /// Generate a linked dataset from a scenario file
    Scenario(ScenarioArgs),

    /// Print the field definitions an entity kind is validated against
    Schema {
        /// Entity kind
        #[arg(value_enum)]
        kind: EntityArg,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Commands::Generate(args) = &cli.command {
        if let Err(message) = args.check() {
            Cli::command().error(ErrorKind::ArgumentConflict, message).exit();
        }
    }

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Scenario(args) => run_scenario(args),
        Commands::Schema { kind } => run_schema(kind),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut generator = FixtureGenerator::new(args.seed);
    if let Some(reference_time) = args.reference_time {
        generator = generator.with_reference_time(reference_time);
    }
    let overrides = args.overrides();

    tracing::info!(
        "Generating {} {} entities (seed={}, reference_time={})",
        args.count,
        EntityKind::from(args.kind),
        args.seed,
        generator.reference_time().to_rfc3339()
    );

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {path:?}"))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut out = EntityWriter::new(writer, args.format);

    match args.kind {
        EntityArg::User => emit::<User>(&mut generator, &args, &overrides, &mut out)?,
        EntityArg::Transaction => emit::<Transaction>(&mut generator, &args, &overrides, &mut out)?,
        EntityArg::Alert => emit::<Alert>(&mut generator, &args, &overrides, &mut out)?,
    }
    let rows = out.finish()?;

    tracing::info!("Wrote {} entities", rows);
    Ok(())
}

/// Write each entity as the generator produces it.
fn emit<E: Fixture>(
    generator: &mut FixtureGenerator,
    args: &GenerateArgs,
    overrides: &Overrides,
    out: &mut EntityWriter<Box<dyn Write>>,
) -> anyhow::Result<()> {
    for (index, entity) in generator.stream::<E>(args.count, overrides).enumerate() {
        let entity = entity
            .with_context(|| format!("Failed to generate {} #{}", E::KIND, index))?;
        out.write(&entity)?;
    }
    Ok(())
}

fn run_scenario(args: ScenarioArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ScenarioConfig::from_file(path)
            .with_context(|| format!("Failed to load scenario from {path:?}"))?,
        None => ScenarioConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let dataset = build_dataset(&config).context("Failed to build scenario dataset")?;
    let metrics = export_dataset(&dataset, &args.output_dir, args.format)
        .with_context(|| format!("Failed to export dataset to {:?}", args.output_dir))?;

    for file in &metrics.files {
        println!("{}", file.display());
    }
    Ok(())
}

fn run_schema(kind: EntityArg) -> anyhow::Result<()> {
    let kind = EntityKind::from(kind);
    let schema = schema_by_name(&kind.to_string())?;
    print!("{}", serde_yaml::to_string(schema)?);
    Ok(())
}

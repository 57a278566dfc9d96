use anyhow::{Context, Result};
use clap::Parser;
use refdata_fixtures::{
    cli::{Args, Command, RecordKind},
    config::Config,
    models::{country::Country, org_type::OrgType, state_prov::StateProv, FixtureRecord},
    services::catalog::{load_records, FixtureCatalog},
};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(dir) = &args.fixtures_dir {
        config.fixtures_dir = dir.clone();
    }

    let result = match &args.command {
        Command::Decode { kind, path } => decode(*kind, path),
        Command::Check => check(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn decode(kind: RecordKind, path: &Path) -> Result<()> {
    let normalized = match kind {
        RecordKind::Country => normalize::<Country>(path)?,
        RecordKind::OrgType => normalize::<OrgType>(path)?,
        RecordKind::StateProv => normalize::<StateProv>(path)?,
    };

    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}

fn normalize<T: FixtureRecord>(path: &Path) -> Result<Vec<serde_json::Value>> {
    let records: Vec<T> = load_records(path)
        .with_context(|| format!("Failed to decode {} fixtures", T::KIND))?;
    info!("Decoded {} {} records", records.len(), T::KIND);

    records
        .iter()
        .map(|record| record.to_value().map_err(Into::into))
        .collect()
}

fn check(config: &Config) -> Result<()> {
    let catalog = FixtureCatalog::load(config)
        .with_context(|| format!("Failed to load fixtures from {}", config.fixtures_dir))?;

    println!("Countries:        {}", catalog.countries().len());
    println!("Org types:        {}", catalog.org_types().len());
    println!("States/provinces: {}", catalog.state_provs().len());

    let dangling = catalog.dangling_references();
    if dangling.is_empty() {
        println!("All references resolve");
        return Ok(());
    }

    for reference in &dangling {
        println!("  {}", reference);
    }
    anyhow::bail!("{} dangling reference(s)", dangling.len())
}

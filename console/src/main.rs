//! propmap console
//!
//! Registers the sample `DataModel -> DataContract` plan, maps one record and
//! prints the result together with the registered plans.
//!
//! Usage:
//!   propmap-console --config propmap.toml --json

mod sample;

use anyhow::{Context, Result};
use clap::Parser;
use propmap_core::{Mapper, MapperConfig};
use sample::{DataContract, DataModel};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "propmap-console")]
#[command(about = "Map a sample record and print the registered plans")]
struct Args {
    /// Path to a TOML mapper config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the result and plans as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = args.config.as_deref().map(load_config).unwrap_or_default();
    let mapper = Mapper::with_config(config);
    debug!(
        date_display = %mapper.config().text.date_display,
        datetime_display = %mapper.config().text.datetime_display,
        "Mapper ready"
    );

    mapper
        .create_map::<DataModel, DataContract>()
        .context("Failed to register DataModel -> DataContract")?;

    let model = DataModel {
        string_field: "stringValue".to_string(),
        integer_field: 72,
    };
    let contract = mapper
        .map(&model, DataContract::default())
        .context("Failed to map the sample record")?;
    info!(
        string_property = %contract.string_property,
        integer_property = %contract.integer_property,
        "Mapped sample record"
    );

    let mappings = mapper.mappings();
    if args.json {
        let report = json!({
            "result": {
                "string_property": contract.string_property,
                "integer_property": contract.integer_property,
            },
            "mappings": mappings,
        });
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to render the report")?;
        println!("{rendered}");
    } else {
        println!("{contract:?}");
        for mapping in &mappings {
            println!(
                "{} -> {}",
                mapping.source_object_type, mapping.destination_object_type
            );
            for property in &mapping.properties {
                println!(
                    "  {} -> {}",
                    property.source_property, property.destination_property
                );
            }
        }
    }

    Ok(())
}

/// Reads the config file, falling back to defaults when it cannot be used.
fn load_config(path: &Path) -> MapperConfig {
    match MapperConfig::load_from(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring mapper config {:?}: {}", path, e);
            MapperConfig::default()
        }
    }
}

//! Command dispatch.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chrono::Local;
use tracing::info;

use foodshare_core::config::FoodshareConfig;
use foodshare_core::errors::error_code::FoodshareErrorCode;
use foodshare_core::tracing::init_tracing;
use foodshare_core::types::{Table, Value};
use foodshare_report::{Dashboard, TableView};
use foodshare_storage::{
    dump_table, overview_counts, Assignments, ClaimField, ClaimGateway, FoodListingField,
    FoodListingGateway, NewClaim, NewFoodListing, SqliteStore,
};

use crate::output::{format_table, write_export};
use crate::{ClaimCommand, Cli, Commands, FoodCommand};

const DEFAULT_CONFIG_FILE: &str = "foodshare.toml";

pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref(), cli.db)?;
    init_tracing(&config.logging);

    let store = SqliteStore::from_config(&config.store);
    match cli.command {
        Commands::Init => {
            let version = store.initialize()?;
            println!("{} ready (schema v{version})", store.path().display());
        }
        Commands::Overview => {
            let counts = overview_counts(&store)?;
            println!("Providers      {}", counts.providers);
            println!("Receivers      {}", counts.receivers);
            println!("Food_Listings  {}", counts.food_listings);
            println!("Claims         {}", counts.claims);
        }
        Commands::Reports => {
            let dashboard = Dashboard::new(&store);
            for report in dashboard.catalog().iter() {
                println!("{:<32}{}", report.id, report.title());
            }
        }
        Commands::Report { id, out, chart_json } => {
            let dashboard = Dashboard::new(&store);
            let rendered = dashboard.render(&id)?;
            if chart_json {
                match &rendered.chart {
                    Some(chart) => {
                        let result = dashboard.run(&id)?;
                        let doc = chart.to_vega_lite(&result.columns, &result.rows);
                        println!("{}", serde_json::to_string_pretty(&doc)?);
                    }
                    None => eprintln!("{id}: no chart for this result"),
                }
            } else if rendered.has_data() {
                print!("{}", format_table(&rendered.table));
            } else {
                println!("No data");
            }
            if let Some(path) = out {
                write_export(&path, &rendered.export.content)?;
                info!(report = %id, path = %path.display(), "report exported");
            }
        }
        Commands::ReportAll { out_dir } => {
            let dir = out_dir.unwrap_or_else(|| config.export.effective_directory().to_path_buf());
            let batch = Dashboard::from_config(&store, &config.cache).render_all();
            for rendered in batch.rendered() {
                write_export(&dir.join(&rendered.export.filename), &rendered.export.content)?;
            }
            for (id, err) in batch.errors() {
                eprintln!("{id}: [{}] {err}", err.error_code());
            }
            println!(
                "{} exported to {}, {} failed",
                batch.succeeded(),
                dir.display(),
                batch.failed()
            );
            if !batch.is_complete_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Table { name, out } => {
            let Some(table) = Table::parse(&name) else {
                bail!("unknown table {name:?}; expected Providers, Receivers, Food_Listings or Claims");
            };
            let result = dump_table(&store, table)?;
            print!("{}", format_table(&TableView::from_result(&result)));
            if let Some(path) = out {
                write_export(&path, &foodshare_report::csv::write_csv(&result))?;
            }
        }
        Commands::Food { command } => food(&store, command)?,
        Commands::Claim { command } => claim(&store, command)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Explicit `--config` must exist; the default file is optional.
fn load_config(explicit: Option<&Path>, db: Option<PathBuf>) -> Result<FoodshareConfig> {
    let mut config = match explicit {
        Some(path) => FoodshareConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            FoodshareConfig::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => FoodshareConfig::default(),
    };
    if let Some(db) = db {
        config.store.path = Some(db);
    }
    Ok(config)
}

fn food(store: &SqliteStore, command: FoodCommand) -> Result<()> {
    let gateway = FoodListingGateway::new(store);
    match command {
        FoodCommand::List => print!("{}", format_table(&TableView::from_result(&gateway.summaries()?))),
        FoodCommand::Add {
            id,
            name,
            quantity,
            expiry,
            provider_id,
            provider_type,
            location,
            food_type,
            meal_type,
        } => {
            let food_id = gateway.insert(&NewFoodListing {
                food_id: id,
                food_name: name,
                quantity,
                expiry_date: expiry,
                provider_id,
                provider_type,
                location,
                food_type,
                meal_type,
            })?;
            println!("added food listing {food_id}");
        }
        FoodCommand::Update { id, set } => {
            let assignments = Assignments::<FoodListingField>::from_named(named_values(set))?;
            gateway.update(id, &assignments)?;
            println!("updated food listing {id}");
        }
        FoodCommand::Delete { id } => report_delete("food listing", id, gateway.delete(id)?),
    }
    Ok(())
}

fn claim(store: &SqliteStore, command: ClaimCommand) -> Result<()> {
    let gateway = ClaimGateway::new(store);
    match command {
        ClaimCommand::List => print!("{}", format_table(&TableView::from_result(&gateway.summaries()?))),
        ClaimCommand::Add {
            id,
            food_id,
            receiver_id,
            status,
            timestamp,
        } => {
            let claim_id = gateway.insert(&NewClaim {
                claim_id: id,
                food_id,
                receiver_id,
                status,
                timestamp: timestamp.unwrap_or_else(|| Local::now().naive_local()),
            })?;
            println!("added claim {claim_id}");
        }
        ClaimCommand::Update { id, set } => {
            let assignments = Assignments::<ClaimField>::from_named(named_values(set))?;
            gateway.update(id, &assignments)?;
            println!("updated claim {id}");
        }
        ClaimCommand::Delete { id } => report_delete("claim", id, gateway.delete(id)?),
    }
    Ok(())
}

/// Empty text means NULL.
fn named_values(pairs: Vec<(String, String)>) -> Vec<(String, Value)> {
    pairs
        .into_iter()
        .map(|(column, raw)| {
            let value = if raw.is_empty() { Value::Null } else { Value::Text(raw) };
            (column, value)
        })
        .collect()
}

fn report_delete(entity: &str, id: i64, removed: bool) {
    if removed {
        println!("deleted {entity} {id}");
    } else {
        println!("{entity} {id} not found; nothing deleted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_flag_overrides_config_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("foodshare.toml");
        std::fs::write(&config_path, "[store]\npath = \"a.db\"\n").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();
        assert_eq!(config.store.effective_path(), Path::new("a.db"));

        let config = load_config(Some(&config_path), Some(PathBuf::from("b.db"))).unwrap();
        assert_eq!(config.store.effective_path(), Path::new("b.db"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml")), None).is_err());
    }

    #[test]
    fn empty_assignment_text_becomes_null() {
        let values = named_values(vec![
            ("Expiry_Date".into(), String::new()),
            ("Quantity".into(), "5".into()),
        ]);
        assert_eq!(values[0].1, Value::Null);
        assert_eq!(values[1].1, Value::from("5"));
    }
}

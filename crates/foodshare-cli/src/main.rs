//! `foodshare` — reports, exports and edits over a food-waste database.

#![forbid(unsafe_code)]

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

use foodshare_core::types::{ClaimStatus, FoodType, MealType};

#[derive(Parser, Debug)]
#[command(name = "foodshare")]
#[command(about = "Food-waste reporting: analytical reports, CSV export, listing and claim edits")]
struct Cli {
    /// Config file. Defaults to ./foodshare.toml when present.
    #[arg(long, global = true, env = "FOODSHARE_CONFIG")]
    config: Option<PathBuf>,
    /// Database file, overriding `store.path`.
    #[arg(long, global = true, env = "FOODSHARE_DB")]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database file and schema if missing.
    Init,
    /// Row counts of every table.
    Overview,
    /// List the report catalog.
    Reports,
    /// Render one report.
    Report {
        id: String,
        /// Write the CSV export here.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the chart as Vega-Lite JSON instead of the table.
        #[arg(long)]
        chart_json: bool,
    },
    /// Render every report and write one CSV per report.
    ReportAll {
        /// Defaults to `export.directory`.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Dump a whole table.
    Table {
        /// Providers, Receivers, Food_Listings or Claims.
        name: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Edit food listings.
    Food {
        #[command(subcommand)]
        command: FoodCommand,
    },
    /// Edit claims.
    Claim {
        #[command(subcommand)]
        command: ClaimCommand,
    },
}

#[derive(Subcommand, Debug)]
enum FoodCommand {
    /// Food_ID, Food_Name and Quantity of every listing.
    List,
    Add {
        /// Assigned by the store when omitted.
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        quantity: u32,
        /// YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        expiry: Option<NaiveDate>,
        #[arg(long)]
        provider_id: i64,
        #[arg(long)]
        provider_type: String,
        #[arg(long)]
        location: String,
        #[arg(long, value_parser = parse_food_type)]
        food_type: FoodType,
        #[arg(long, value_parser = parse_meal_type)]
        meal_type: MealType,
    },
    Update {
        id: i64,
        /// Column assignment, e.g. `--set Quantity=5`. Repeatable.
        #[arg(long = "set", value_parser = parse_assignment, required = true)]
        set: Vec<(String, String)>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum ClaimCommand {
    /// Claim_ID, Food_ID, Receiver_ID and Status of every claim.
    List,
    Add {
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        food_id: i64,
        #[arg(long)]
        receiver_id: i64,
        #[arg(long, value_parser = parse_claim_status, default_value = "Pending")]
        status: ClaimStatus,
        /// YYYY-MM-DD HH:MM:SS; defaults to now.
        #[arg(long, value_parser = parse_timestamp)]
        timestamp: Option<NaiveDateTime>,
    },
    Update {
        id: i64,
        #[arg(long = "set", value_parser = parse_assignment, required = true)]
        set: Vec<(String, String)>,
    },
    Delete {
        id: i64,
    },
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| format!("{raw}: {e}"))
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| format!("{raw}: {e}"))
}

fn parse_food_type(raw: &str) -> Result<FoodType, String> {
    FoodType::parse(raw).ok_or_else(|| format!("unknown food type: {raw}"))
}

fn parse_meal_type(raw: &str) -> Result<MealType, String> {
    MealType::parse(raw).ok_or_else(|| format!("unknown meal type: {raw}"))
}

fn parse_claim_status(raw: &str) -> Result<ClaimStatus, String> {
    ClaimStatus::parse(raw).ok_or_else(|| format!("unknown claim status: {raw}"))
}

/// `Column=value`. The value may be empty (stored as NULL) but the column may not.
fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (column, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=VALUE, got {raw:?}"))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column name in {raw:?}"));
    }
    Ok((column.to_string(), value.to_string()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_flags_parse() {
        let cli = Cli::try_parse_from([
            "foodshare",
            "--db",
            "/tmp/x.db",
            "report",
            "Common_Food_Types",
            "--chart-json",
        ])
        .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        match cli.command {
            Commands::Report { id, out, chart_json } => {
                assert_eq!(id, "Common_Food_Types");
                assert!(out.is_none());
                assert!(chart_json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn food_add_requires_typed_labels() {
        let base = [
            "foodshare", "food", "add", "--name", "Rice", "--quantity", "4",
            "--provider-id", "1", "--provider-type", "Restaurant", "--location", "Pune",
            "--meal-type", "Lunch",
        ];
        let ok = base.iter().copied().chain(["--food-type", "Vegan"]);
        assert!(Cli::try_parse_from(ok).is_ok());
        let bad = base.iter().copied().chain(["--food-type", "Pescatarian"]);
        assert!(Cli::try_parse_from(bad).is_err());
    }

    #[test]
    fn update_needs_at_least_one_assignment() {
        assert!(Cli::try_parse_from(["foodshare", "claim", "update", "3"]).is_err());
        let cli =
            Cli::try_parse_from(["foodshare", "claim", "update", "3", "--set", "Status=Completed"])
                .unwrap();
        match cli.command {
            Commands::Claim {
                command: ClaimCommand::Update { id, set },
            } => {
                assert_eq!(id, 3);
                assert_eq!(set, vec![("Status".to_string(), "Completed".to_string())]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn assignment_syntax() {
        assert_eq!(
            parse_assignment("Expiry_Date=").unwrap(),
            ("Expiry_Date".to_string(), String::new())
        );
        assert_eq!(
            parse_assignment("Food_Name=Idli=Sambar").unwrap().1,
            "Idli=Sambar"
        );
        assert!(parse_assignment("Quantity").is_err());
        assert!(parse_assignment("=5").is_err());
    }

    #[test]
    fn timestamps_accept_both_separators() {
        assert_eq!(
            parse_timestamp("2025-03-07T18:30:00").unwrap(),
            parse_timestamp("2025-03-07 18:30:00").unwrap()
        );
    }
}

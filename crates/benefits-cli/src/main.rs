//! Benefits CLI - terminal dashboard and reports for a benefits portfolio
//!
//! # Quick Start
//!
//! ```bash
//! # Interactive dashboard (default)
//! benefits
//!
//! # Plain-text reports
//! benefits summary
//! benefits list -q phys
//! benefits history Physiotherapy
//! benefits renewals --today 2025-12-01
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use benefits_domain::{filter_benefits, find_benefit, load_benefits, portfolio_totals, renewals, seed_benefits, Benefit};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod display;
mod logging;

use commands::{dashboard, report};
use config::DashboardConfig;
use logging::LogTarget;

/// Benefits tracker - coverage remaining, claims and renewals at a glance
#[derive(Parser, Debug)]
#[command(name = "benefits")]
#[command(author = "Benefits Tracker Contributors")]
#[command(version)]
#[command(about = "Track health benefit coverage, claims and renewals", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// JSON fixture file replacing the built-in benefit set
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Extra configuration file (toml or json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Open the interactive dashboard
    Tui,

    /// Print the summary cards
    Summary,

    /// List benefits, optionally filtered by name
    List {
        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show the claim history of one benefit
    History {
        /// Benefit id or name
        benefit: String,
    },

    /// List renewal dates
    Renewals {
        /// Reference date (YYYY-MM-DD) for day countdowns
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Dump the active fixture set as JSON
    Fixtures,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", display::error(&format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = DashboardConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui);

    let target = match command {
        Commands::Tui => LogTarget::Terminal,
        _ => LogTarget::Stderr,
    };
    logging::init_logging(&settings.logging, target)?;

    let benefits = load_fixtures(cli.fixtures.or(settings.fixtures_path.clone()))?;

    match command {
        Commands::Tui => dashboard::run(benefits, &settings.ui)?,
        Commands::Summary => {
            println!("{}", report::render_summary(&portfolio_totals(&benefits)));
        }
        Commands::List { query } => {
            println!("{}", report::render_list(&filter_benefits(&benefits, &query), &query));
        }
        Commands::History { benefit } => {
            let found = find_benefit(&benefits, &benefit)?;
            println!("{}", report::render_history(found));
        }
        Commands::Renewals { today } => {
            println!("{}", report::render_renewals(&renewals(&benefits), today));
        }
        Commands::Fixtures => {
            println!("{}", report::render_fixtures(&benefits)?);
        }
    }

    Ok(())
}

fn load_fixtures(path: Option<PathBuf>) -> anyhow::Result<Vec<Benefit>> {
    match path {
        Some(path) => load_benefits(&path)
            .with_context(|| format!("loading fixtures from {}", path.display())),
        None => {
            tracing::debug!("using built-in benefit set");
            Ok(seed_benefits())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["benefits"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_query_defaults_to_blank() {
        let cli = Cli::try_parse_from(["benefits", "list"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List { query: String::new() }));

        let cli = Cli::try_parse_from(["benefits", "list", "-q", "den"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List { query: "den".into() }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["benefits", "summary", "--fixtures", "plan.json"]).unwrap();
        assert_eq!(cli.fixtures, Some(PathBuf::from("plan.json")));
        assert_eq!(cli.command, Some(Commands::Summary));
    }

    #[test]
    fn renewals_today_parses_a_date() {
        let cli = Cli::try_parse_from(["benefits", "renewals", "--today", "2025-12-01"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Renewals { today: NaiveDate::from_ymd_opt(2025, 12, 1) })
        );
        assert!(Cli::try_parse_from(["benefits", "renewals", "--today", "soon"]).is_err());
    }

    #[test]
    fn history_requires_a_benefit() {
        assert!(Cli::try_parse_from(["benefits", "history"]).is_err());
    }

    #[test]
    fn unknown_history_target_is_an_error() {
        let benefits = seed_benefits();
        assert!(find_benefit(&benefits, "Acupuncture").is_err());
        assert!(find_benefit(&benefits, "dental").is_ok());
    }

    #[test]
    fn missing_fixture_file_is_an_error() {
        let path = std::env::temp_dir().join("benefits-cli-missing-fixtures.json");
        assert!(load_fixtures(Some(path)).is_err());
        assert_eq!(load_fixtures(None).unwrap(), seed_benefits());
    }
}

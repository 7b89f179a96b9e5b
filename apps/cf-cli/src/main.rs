use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use cf_app::AppResult;
use cf_core::{display_name, thousands};
use cf_data::{GroupCatalog, load_dataset};
use cf_filter::{FilterEvent, FilterState, GroupChoice, NamedFilter, Selection};
use cf_graph::build_flow_graph;
use cf_query::{export_rows, to_csv, top_flows};

#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(about = "Commuteflow CLI - commute flow exploration tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a dataset: record count, years, areas, group catalog
    Inspect {
        /// Path to the dataset JSON file
        data_path: PathBuf,
    },
    /// Print the ranked top flows for a filter
    Top {
        /// Path to the dataset JSON file
        data_path: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Export records matching year/origin/destination as CSV
    Export {
        /// Path to the dataset JSON file
        data_path: PathBuf,
        #[command(flatten)]
        filter: ScopeArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// The filter dimensions that scope the CSV export.
#[derive(Args)]
struct ScopeArgs {
    /// Commute year
    #[arg(long, default_value_t = cf_core::DEFAULT_YEAR)]
    year: i32,
    /// Origin area (repeatable; omit for all)
    #[arg(long = "origin")]
    origins: Vec<String>,
    /// Destination area (repeatable; omit for all)
    #[arg(long = "destination")]
    destinations: Vec<String>,
}

#[derive(Args)]
struct FilterArgs {
    #[command(flatten)]
    scope: ScopeArgs,
    /// Age group label (e.g. age_<=29); mutually exclusive with --income-group
    #[arg(long, conflicts_with = "income_group")]
    age_group: Option<String>,
    /// Income group label (e.g. inc_<1250); mutually exclusive with --age-group
    #[arg(long)]
    income_group: Option<String>,
    /// Commuting-characteristic preset
    #[arg(long, default_value = "all", value_parser = parse_preset)]
    preset: NamedFilter,
}

fn parse_preset(value: &str) -> Result<NamedFilter, String> {
    match value {
        "all" => Ok(NamedFilter::All),
        "no-vehicle" => Ok(NamedFilter::NoVehicleOver5),
        "transit" => Ok(NamedFilter::TransitOver1),
        "carpool" => Ok(NamedFilter::CarpoolOver10),
        other => Err(format!(
            "unknown preset '{other}' (expected all, no-vehicle, transit, carpool)"
        )),
    }
}

impl ScopeArgs {
    fn to_state(&self) -> FilterState {
        FilterState::default()
            .apply(FilterEvent::Year(self.year))
            .apply(FilterEvent::Origins(Selection::from_values(
                self.origins.iter().cloned(),
            )))
            .apply(FilterEvent::Destinations(Selection::from_values(
                self.destinations.iter().cloned(),
            )))
    }
}

impl FilterArgs {
    fn to_state(&self) -> FilterState {
        let mut state = self
            .scope
            .to_state()
            .apply(FilterEvent::Named(self.preset));
        if let Some(age) = &self.age_group {
            state = state.apply(FilterEvent::AgeGroup(GroupChoice::Group(age.clone())));
        }
        if let Some(income) = &self.income_group {
            state = state.apply(FilterEvent::IncomeGroup(GroupChoice::Group(income.clone())));
        }
        state
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { data_path } => cmd_inspect(&data_path),
        Commands::Top { data_path, filter } => cmd_top(&data_path, &filter),
        Commands::Export {
            data_path,
            filter,
            output,
        } => cmd_export(&data_path, &filter, output.as_deref()),
    }
}

fn cmd_inspect(data_path: &Path) -> AppResult<()> {
    let dataset = load_dataset(data_path).map_err(cf_app::AppError::from)?;

    let years: BTreeSet<i32> = dataset.links.iter().filter_map(|l| l.year).collect();
    let origins: BTreeSet<&str> = dataset.links.iter().map(|l| l.origin.as_str()).collect();
    let destinations: BTreeSet<&str> = dataset
        .links
        .iter()
        .map(|l| l.destination.as_str())
        .collect();
    let catalog = GroupCatalog::from_records(&dataset.links);

    println!("Records:      {}", dataset.links.len());
    match (years.first(), years.last()) {
        (Some(min), Some(max)) => println!("Years:        {min}..{max}"),
        _ => println!("Years:        (none)"),
    }
    println!("Origins:      {}", origins.len());
    println!("Destinations: {}", destinations.len());
    println!("Age groups:   {}", catalog.ages.join(", "));
    println!("Income groups: {}", catalog.incomes.join(", "));
    Ok(())
}

fn cmd_top(data_path: &Path, args: &FilterArgs) -> AppResult<()> {
    let dataset = load_dataset(data_path).map_err(cf_app::AppError::from)?;
    let filter = args.to_state();

    let flows = top_flows(&dataset.links, &filter);
    if flows.is_empty() {
        println!("No flows match the current filter.");
        return Ok(());
    }

    // Graph construction tags the top-10 edges the diagram would emphasize.
    let graph = build_flow_graph(&flows);

    println!(
        "{:<4} {:<34} {:<34} {:>12}",
        "#", "Origin", "Destination", "Commuters"
    );
    for (i, edge) in graph.edges().iter().enumerate() {
        let marker = if edge.emphasized { "*" } else { " " };
        println!(
            "{:<4} {:<34} {:<34} {:>12}{marker}",
            i + 1,
            display_name(&edge.origin),
            display_name(&edge.destination),
            thousands(edge.count),
        );
    }
    println!("\n(* = top-10 emphasized edge)");
    Ok(())
}

fn cmd_export(data_path: &Path, args: &ScopeArgs, output: Option<&Path>) -> AppResult<()> {
    let dataset = load_dataset(data_path).map_err(cf_app::AppError::from)?;
    let rows = export_rows(&dataset.links, &args.to_state());
    let csv = to_csv(&rows);

    match output {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => {
            io::stdout().write_all(csv.as_bytes())?;
        }
    }
    Ok(())
}

//! halflife: command-line radioactive decay calculator.
//!
//! Simulates exponential decay for catalogued isotopes, manages the
//! persisted isotope catalog and exports results as CSV or a text report.

mod chains;
mod config;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use halflife_catalog::{CatalogStore, IsotopeCatalog, JsonFileStore, SaveOutcome};
use halflife_core::constants::{DEFAULT_INITIAL_MASS, DEFAULT_INITIAL_NUCLEI, DEFAULT_TIME_SPAN};
use halflife_core::error::HalflifeError;
use halflife_core::types::{Isotope, TimeUnit};
use halflife_engine::{simulate, DecayEngine, InitialQuantity, SimulationRequest};
use halflife_export::{
    render_report, write_csv_file, ExportTable, ReportOptions, CSV_FILE_NAME, REPORT_FILE_NAME,
};
use tracing::info;

use crate::chains::DecayChain;
use crate::config::CliConfig;

/// Radioactive decay calculator.
#[derive(Parser)]
#[command(name = "halflife")]
#[command(version, about = "Radioactive decay calculator")]
struct Cli {
    /// Data directory (default: platform data dir + /halflife).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog file (default: <data-dir>/isotopes.json).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log format (text or json).
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate decay of one isotope.
    Simulate(SimulateArgs),
    /// Isotope catalog subcommands.
    Isotopes {
        #[command(subcommand)]
        action: IsotopeAction,
    },
    /// Show a natural decay series diagram.
    Chain(ChainArgs),
}

#[derive(Subcommand)]
enum IsotopeAction {
    /// List catalogued isotopes.
    List,
    /// Show one isotope.
    Show {
        name: String,
    },
    /// Add an isotope, or overwrite one with the same name.
    Add(AddArgs),
    /// Remove an isotope. The last one cannot be removed.
    Remove {
        name: String,
    },
    /// Replace the catalog with the built-in isotopes.
    Reset,
}

#[derive(Args)]
struct SimulateArgs {
    /// Isotope name (default: Césio-137, or the first catalogued name).
    #[arg(short, long)]
    isotope: Option<String>,

    /// Override the catalogued decay constant (per year).
    #[arg(long)]
    lambda: Option<f64>,

    /// Span to simulate, in --unit. Non-positive values fall back to 100.
    #[arg(short, long, default_value_t = DEFAULT_TIME_SPAN, allow_negative_numbers = true)]
    duration: f64,

    /// Time unit (segundos, minutos, horas, dias, anos).
    #[arg(short, long, default_value = "anos")]
    unit: String,

    /// Initial mass in grams.
    #[arg(long, conflicts_with = "nuclei")]
    mass: Option<f64>,

    /// Initial number of nuclei (1e20 when given without a value).
    #[arg(long)]
    nuclei: Option<Option<f64>>,

    /// Number of intervals (10 to 500).
    #[arg(long, value_parser = clap::value_parser!(u32).range(10..=500))]
    steps: Option<u32>,

    /// Print every point of the series.
    #[arg(long)]
    table: bool,

    /// Write the series as CSV.
    #[arg(long, num_args = 0..=1, default_missing_value = CSV_FILE_NAME)]
    csv: Option<PathBuf>,

    /// Write a paginated text report.
    #[arg(long, num_args = 0..=1, default_missing_value = REPORT_FILE_NAME)]
    report: Option<PathBuf>,

    /// Title used in exports.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
struct AddArgs {
    name: String,

    /// Atomic weight in g/mol.
    #[arg(short, long)]
    atomic_weight: f64,

    /// Half-life, in --unit.
    #[arg(long)]
    half_life: f64,

    /// Half-life unit (segundos, minutos, horas, dias, anos).
    #[arg(short, long, default_value = "anos")]
    unit: String,
}

#[derive(Args)]
struct ChainArgs {
    /// Series to show. Lists all series when omitted.
    #[arg(value_enum)]
    chain: Option<DecayChain>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = CliConfig::load(cli.data_dir.as_deref())?;
    if let Some(path) = cli.catalog {
        cfg.catalog_path = Some(path);
    }
    if let Some(level) = cli.log_level {
        cfg.log_level = level;
    }
    if let Some(format) = cli.log_format {
        cfg.log_format = format;
    }

    init_logging(&cfg.log_level, &cfg.log_format);
    info!(catalog = %cfg.catalog_path().display(), "halflife starting");

    match cli.command {
        Commands::Simulate(args) => simulate_cmd(&cfg, args),
        Commands::Isotopes { action } => match action {
            IsotopeAction::List => isotopes_list(&cfg),
            IsotopeAction::Show { name } => isotopes_show(&cfg, &name),
            IsotopeAction::Add(args) => isotopes_add(&cfg, args),
            IsotopeAction::Remove { name } => isotopes_remove(&cfg, &name),
            IsotopeAction::Reset => isotopes_reset(&cfg),
        },
        Commands::Chain(args) => chain_cmd(&cfg, args),
    }
}

fn open_store(cfg: &CliConfig) -> CatalogStore<JsonFileStore> {
    CatalogStore::open(JsonFileStore::new(cfg.catalog_path()))
}

fn parse_unit(s: &str) -> Result<TimeUnit> {
    s.parse::<TimeUnit>()
        .with_context(|| format!("invalid time unit: {s}"))
}

fn report_save(outcome: &SaveOutcome) {
    if let Some(err) = outcome.warning() {
        eprintln!("warning: change kept for this session only: {err}");
    }
}

/// Resolve the isotope, unit and initial quantity of a simulation.
fn build_request(
    catalog: &IsotopeCatalog,
    args: &SimulateArgs,
    default_steps: u32,
) -> Result<(String, Isotope, SimulationRequest), HalflifeError> {
    let name = args
        .isotope
        .clone()
        .unwrap_or_else(|| catalog.default_selection().to_string());
    let isotope = catalog.get(&name)?;
    let unit: TimeUnit = args.unit.parse()?;

    let initial = match (args.mass, args.nuclei) {
        (_, Some(n)) => InitialQuantity::Nuclei(n.unwrap_or(DEFAULT_INITIAL_NUCLEI)),
        (Some(m), None) => InitialQuantity::Mass(m),
        (None, None) => InitialQuantity::Mass(DEFAULT_INITIAL_MASS),
    };

    let steps = args.steps.unwrap_or(default_steps);
    let mut request = SimulationRequest::for_isotope(&isotope, initial, args.duration, unit, steps);
    if let Some(lambda) = args.lambda {
        request = request.with_decay_constant(lambda);
    }
    Ok((name, isotope, request))
}

/// Run a simulation and print or export the result.
fn simulate_cmd(cfg: &CliConfig, args: SimulateArgs) -> Result<()> {
    let store = open_store(cfg);
    let (name, isotope, request) = build_request(store.catalog(), &args, cfg.default_steps)
        .context("invalid simulation parameters")?;

    let initial = request.initial.value();
    if !(initial >= 0.0) {
        bail!("initial quantity must be non-negative, got {initial}");
    }

    let report = simulate(&DecayEngine::new(), &request).context("simulation failed")?;

    println!("Isótopo: {name}");
    println!(
        "Meia-vida: {:.4e} {} (λ = {:.4e} anos⁻¹)",
        isotope.half_life, isotope.half_life_unit, request.decay_constant
    );
    println!("Intervalo: 0 a {} {}", report.span, report.time_unit);
    println!(
        "Resultado Final: {:.4e} {}",
        report.final_quantity, report.quantity_kind
    );

    if args.table {
        println!();
        println!("{:>16}  {:>22}", report.time_label(), report.quantity_label());
        for (t, q) in report.series.iter() {
            println!("{t:>16.4}  {q:>22.4e}");
        }
    }

    let title = args.title.unwrap_or_else(|| format!("Decaimento {name}"));
    let table = ExportTable::from_report(title, &report);

    if let Some(path) = args.csv {
        write_csv_file(&table, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("CSV salvo em: {}", path.display());
    }

    if let Some(path) = args.report {
        let options = ReportOptions {
            generated_on: Some(Local::now().date_naive()),
            ..ReportOptions::default()
        };
        std::fs::write(&path, render_report(&table, &options))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Relatório salvo em: {}", path.display());
    }

    Ok(())
}

fn isotopes_list(cfg: &CliConfig) -> Result<()> {
    let store = open_store(cfg);

    println!(
        "{:<16} {:>12} {:>12} {:<10} {:>14}",
        "Nome", "Lambda", "Meia-vida", "Unidade", "Massa Atômica"
    );
    for (name, iso) in store.catalog().iter() {
        println!(
            "{:<16} {:>12.4e} {:>12.4e} {:<10} {:>14.4}",
            name, iso.decay_constant, iso.half_life, iso.half_life_unit, iso.atomic_weight
        );
    }
    Ok(())
}

fn isotopes_show(cfg: &CliConfig, name: &str) -> Result<()> {
    let iso = open_store(cfg).get(name)?;

    println!("Nome:          {name}");
    println!("Lambda:        {:.6e} anos⁻¹", iso.decay_constant);
    println!("Meia-vida:     {} {}", iso.half_life, iso.half_life_unit);
    println!("Meia-vida:     {:.6e} anos", iso.half_life_years());
    println!("Massa Atômica: {} g/mol", iso.atomic_weight);
    Ok(())
}

fn isotopes_add(cfg: &CliConfig, args: AddArgs) -> Result<()> {
    let unit = parse_unit(&args.unit)?;
    let mut store = open_store(cfg);

    let outcome = store.add(&args.name, args.atomic_weight, args.half_life, unit)?;
    report_save(&outcome);

    let iso = store.get(args.name.trim())?;
    println!(
        "Isótopo '{}' salvo (λ = {:.4e} anos⁻¹)",
        args.name.trim(),
        iso.decay_constant
    );
    Ok(())
}

fn isotopes_remove(cfg: &CliConfig, name: &str) -> Result<()> {
    let mut store = open_store(cfg);
    let outcome = store.remove(name)?;
    report_save(&outcome);
    println!("Isótopo '{name}' removido");
    Ok(())
}

fn isotopes_reset(cfg: &CliConfig) -> Result<()> {
    let mut store = open_store(cfg);
    let outcome = store.reset_to_defaults();
    report_save(&outcome);
    println!(
        "Catálogo restaurado ({} isótopos)",
        store.catalog().len()
    );
    Ok(())
}

fn chain_cmd(cfg: &CliConfig, args: ChainArgs) -> Result<()> {
    let chains: Vec<DecayChain> = match args.chain {
        Some(chain) => vec![chain],
        None => DecayChain::ALL.to_vec(),
    };

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let dirs: [&Path; 2] = [&cwd, &cfg.assets_dir];

    for chain in chains {
        match chain.resolve_image(&dirs) {
            Some(path) => println!("{}: {}", chain.label(), path.display()),
            None => println!("{}: imagem {} não encontrada", chain.label(), chain.image_file()),
        }
    }
    Ok(())
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over `level_str`.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .init();
    }
}

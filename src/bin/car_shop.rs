use std::path::PathBuf;
use std::process::ExitCode;

use car_shop::{build_lineup, report, Catalog, Format, ShopConfig, ShopError, DEFAULT_LINEUP};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "car-shop", version, about = "Assemble cars from preset builders")]
struct Cli {
    /// Preset to build; repeat to build several, in order
    #[arg(short, long = "preset", value_name = "KEY")]
    presets: Vec<String>,

    /// TOML or JSON file with extra presets and a default lineup
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: Format,

    /// Print the available preset keys and exit
    #[arg(long)]
    list: bool,

    /// Log each build step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !report::should_use_colors() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", failure_report(&err));
            ExitCode::FAILURE
        }
    }
}

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The colored report is the user-facing output; the log line only shows up with `-v`.
fn failure_report(err: &ShopError) -> String {
    debug!(error = %err, "car-shop failed");
    report::format_error(err)
}

fn run(cli: &Cli) -> Result<String, ShopError> {
    let mut catalog = Catalog::with_defaults();
    let mut lineup: Vec<String> = DEFAULT_LINEUP.iter().map(|key| key.to_string()).collect();

    if let Some(path) = &cli.config {
        let config = ShopConfig::load(path)?;
        info!(path = %path.display(), presets = config.cars.len(), "using config");
        for spec in config.cars {
            catalog.register_spec(spec)?;
        }
        if let Some(configured) = config.lineup {
            lineup = configured;
        }
    }

    if cli.list {
        return Ok(catalog.keys().map(|key| format!("{key}\n")).collect());
    }

    if !cli.presets.is_empty() {
        lineup = cli.presets.clone();
    }

    let builders = lineup
        .iter()
        .map(|key| catalog.builder(key))
        .collect::<Result<Vec<_>, _>>()?;
    let cars = build_lineup(builders)?;
    report::render(&cars, cli.format)
}

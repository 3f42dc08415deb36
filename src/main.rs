use clap::Parser;
use log::LevelFilter;
use pati::core::catalog::Catalog;
use pati::core::config::{self, CliOverrides, PatiConfig, ResolvedConfig};
use pati::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pati", about = "Browse dogs waiting for adoption")]
struct Args {
    /// TOML file listing the dogs (defaults to the built-in list)
    #[arg(short, long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Log verbosity: error, warn, info, debug, trace or off
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LevelFilter>,

    /// Use the 16-colour palette instead of truecolor
    #[arg(long)]
    monochrome: bool,
}

fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level '{s}'"))
}

fn init_logger(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let cli = CliOverrides {
        catalog: args.catalog,
        log_level: args.log_level,
        monochrome: args.monochrome,
    };

    let loaded = config::load_config();
    let file_config = loaded.as_ref().ok();
    let resolved = config::resolve(file_config.unwrap_or(&PatiConfig::default()), &cli);
    init_logger(&resolved);

    if let Err(e) = loaded {
        log::error!("{e}");
        eprintln!("pati: {e}");
        return ExitCode::FAILURE;
    }

    log::info!("Pati starting up");
    log::debug!("Resolved config: {:?}", resolved);

    let catalog = match &resolved.catalog_path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load catalog {}: {e}", path.display());
                eprintln!("pati: {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::builtin(),
    };
    log::info!("Catalog has {} dogs", catalog.len());

    match tui::run(&resolved, catalog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {e}");
            eprintln!("pati: {e}");
            ExitCode::FAILURE
        }
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pati/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PatiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub location: Option<String>,
    pub shelter_location: Option<String>,
    pub catalog_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub truecolor: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOCATION: &str = "Ankara, Türkiye";
pub const DEFAULT_SHELTER_LOCATION: &str = "Çankaya, Ankara";
pub const DEFAULT_LOG_FILE: &str = "pati.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub location: String,
    pub shelter_location: String,
    /// `None` means the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub truecolor: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
    pub monochrome: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.pati/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pati"))
}

/// Returns the path to `~/.pati/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.pati/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PatiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PatiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PatiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PatiConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<PatiConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PatiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Pati Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# location = "Ankara, Türkiye"          # Or set PATI_LOCATION env var
# shelter_location = "Çankaya, Ankara"
# catalog_file = "dogs.toml"            # Relative to ~/.pati/ unless absolute

# [display]
# truecolor = true                      # false = 16-colour palette

# [log]
# level = "debug"                       # "error", "warn", "info", "debug", "trace", "off"
# file = "pati.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PatiConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &PatiConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Location: env → config → default
    let location = env("PATI_LOCATION")
        .or_else(|| config.general.location.clone())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let shelter_location = config
        .general
        .shelter_location
        .clone()
        .unwrap_or_else(|| DEFAULT_SHELTER_LOCATION.to_string());

    // Catalog: CLI → env → config (relative to ~/.pati/) → built-in
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| env("PATI_CATALOG").map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .catalog_file
                .as_deref()
                .map(|file| relative_to_config_dir(Path::new(file)))
        });

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| env("PATI_LOG_LEVEL").and_then(|s| parse_level(&s)))
        .or_else(|| config.log.level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .log
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        location,
        shelter_location,
        catalog_path,
        truecolor: !cli.monochrome && config.display.truecolor.unwrap_or(true),
        log_level,
        log_file,
    }
}

fn relative_to_config_dir(file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    match config_dir() {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    }
}

/// Parse a level name, ignoring case. Unknown names yield `None`.
pub fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', ignoring", s);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = PatiConfig::default();
        assert!(config.general.location.is_none());
        assert!(config.general.catalog_file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PatiConfig::default();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.location, DEFAULT_LOCATION);
        assert_eq!(resolved.shelter_location, DEFAULT_SHELTER_LOCATION);
        assert!(resolved.catalog_path.is_none());
        assert!(resolved.truecolor);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from("pati.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PatiConfig {
            general: GeneralConfig {
                location: Some("İzmir, Türkiye".to_string()),
                shelter_location: Some("Bornova, İzmir".to_string()),
                catalog_file: Some("/tmp/dogs.toml".to_string()),
            },
            display: DisplayConfig {
                truecolor: Some(false),
            },
            log: LogConfig {
                level: Some("warn".to_string()),
                file: Some("/tmp/pati.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.location, "İzmir, Türkiye");
        assert_eq!(resolved.shelter_location, "Bornova, İzmir");
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("/tmp/dogs.toml")));
        assert!(!resolved.truecolor);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/pati.log"));
    }

    #[test]
    fn test_env_beats_config() {
        let config = PatiConfig {
            general: GeneralConfig {
                location: Some("from config".to_string()),
                ..Default::default()
            },
            log: LogConfig {
                level: Some("info".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "PATI_LOCATION" => Some("from env".to_string()),
            "PATI_LOG_LEVEL" => Some("TRACE".to_string()),
            "PATI_CATALOG" => Some("/env/dogs.toml".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.location, "from env");
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("/env/dogs.toml")));
    }

    #[test]
    fn test_cli_wins() {
        let cli = CliOverrides {
            catalog: Some(PathBuf::from("cli.toml")),
            log_level: Some(LevelFilter::Error),
            monochrome: true,
        };
        let env = |key: &str| match key {
            "PATI_CATALOG" => Some("env.toml".to_string()),
            "PATI_LOG_LEVEL" => Some("trace".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&PatiConfig::default(), &cli, env);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("cli.toml")));
        assert_eq!(resolved.log_level, LevelFilter::Error);
        assert!(!resolved.truecolor);
    }

    #[test]
    fn test_unknown_level_falls_through() {
        let config = PatiConfig {
            log: LogConfig {
                level: Some("chatty".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
location = "Ankara, Türkiye"
catalog_file = "dogs.toml"

[display]
truecolor = false

[log]
level = "info"
"#;
        let config: PatiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.location.as_deref(), Some("Ankara, Türkiye"));
        assert_eq!(config.general.catalog_file.as_deref(), Some("dogs.toml"));
        assert_eq!(config.display.truecolor, Some(false));
        assert_eq!(config.log.level.as_deref(), Some("info"));
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[display]
truecolor = true
"#;
        let config: PatiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.truecolor, Some(true));
        assert!(config.general.location.is_none());
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_relative_catalog_file_lands_in_config_dir() {
        let config = PatiConfig {
            general: GeneralConfig {
                catalog_file: Some("dogs.toml".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        let path = resolved.catalog_path.unwrap();
        assert!(path.ends_with("dogs.toml"));
        if let Some(dir) = config_dir() {
            assert!(path.starts_with(dir));
        }
    }
}

//! Configuration discovery and loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::suggest;
use super::types::{Config, LoadedConfig, OutputFormat};

/// Explicit config file path
pub const ENV_CONFIG: &str = "GARMENT_IMPACT_CONFIG";
/// Decimal places for text output
pub const ENV_PRECISION: &str = "GARMENT_IMPACT_PRECISION";
/// `text` or `json`
pub const ENV_FORMAT: &str = "GARMENT_IMPACT_FORMAT";
/// tracing filter directive
pub const ENV_LOG: &str = "GARMENT_IMPACT_LOG";

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "garment-impact.toml";

/// Largest accepted decimal precision, from any source
pub const MAX_PRECISION: usize = 10;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest::closest(&key, KNOWN_KEYS).map(str::to_string),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick and load the config file.
///
/// Order: explicit path, `GARMENT_IMPACT_CONFIG`, `./garment-impact.toml`,
/// `<config dir>/garment-impact/config.toml`, built-in defaults. A file that
/// is selected but cannot be read or parsed is an error; there is no silent
/// fallback to the next candidate.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: &Path,
    env: &dyn Fn(&str) -> Option<String>,
) -> ConfigResult<LoadedConfig> {
    let candidate = explicit
        .map(Path::to_path_buf)
        .or_else(|| env(ENV_CONFIG).filter(|p| !p.is_empty()).map(PathBuf::from))
        .or_else(|| {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            project.is_file().then_some(project)
        })
        .or_else(|| user_config_path().filter(|p| p.is_file()));

    match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
            Ok(LoadedConfig {
                config,
                source: Some(path),
                warnings,
            })
        }
        None => {
            tracing::debug!("no config file found, using built-in defaults");
            Ok(LoadedConfig::default())
        }
    }
}

/// User-level config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("garment-impact").join("config.toml"))
}

/// Apply GARMENT_IMPACT_* overrides; invalid values keep the current setting
/// and print a warning to `warnings`.
pub fn with_env_overrides<W: Write>(
    mut config: Config,
    env: &dyn Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    if let Some(value) = env(ENV_FORMAT) {
        match value.trim().to_lowercase().as_str() {
            "text" => config.output.format = OutputFormat::Text,
            "json" => config.output.format = OutputFormat::Json,
            _ => warn_invalid(warnings, ENV_FORMAT, &value, &["text", "json"]),
        }
    }

    if let Some(value) = env(ENV_PRECISION) {
        match value.trim().parse::<usize>() {
            Ok(p) if p <= MAX_PRECISION => config.output.precision = p,
            _ => {
                let _ = writeln!(
                    warnings,
                    "Warning: Invalid {} value '{}'. Expected an integer from 0 to {}",
                    ENV_PRECISION, value, MAX_PRECISION
                );
            }
        }
    }

    if let Some(value) = env(ENV_LOG).filter(|v| !v.trim().is_empty()) {
        config.logging.level = Some(value);
    }

    config
}

fn warn_invalid<W: Write>(out: &mut W, var: &str, value: &str, valid: &[&str]) {
    let hint = suggest::closest(value.trim(), valid)
        .map(|s| format!(". Did you mean '{}'?", s))
        .unwrap_or_default();
    let _ = writeln!(out, "Warning: Invalid {} value '{}'{}", var, value, hint);
    let _ = writeln!(out, "Valid values: {}", valid.join(", "));
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "table",
    "use_defaults",
    "equivalents",
    "showers",
    "drinking_days",
    "car_miles",
    "car_km",
    "trees_planted",
    "smartphone_charges",
    "factors",
    "category",
    "material",
    "water_liters",
    "co2_kg",
    "chemicals_kg",
    "waste_kg",
    "output",
    "format",
    "precision",
    "logging",
    "level",
];

//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the customer key is not set there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ENFORCEMENT_CUSTOMER_KEY`: Customer key (required)
//! - `ENFORCEMENT_API_VERSION`: API version, e.g. `1.0`
//! - `ENFORCEMENT_BASE_URL`: Base URL override
//! - `ENFORCEMENT_TIMEOUT_SECS`: Request timeout in seconds
//! - `ENFORCEMENT_DOMAIN_CHECK`: `strict` or `pass_through`
//! - `ENFORCEMENT_USER_AGENT`: User-Agent header value
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./enforcement.json` or `./enforcement.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../enforcement.json` or `../enforcement.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use enforcement_domain::{ClientConfig, DomainCheck, EnforcementError, Result};

pub const ENV_CUSTOMER_KEY: &str = "ENFORCEMENT_CUSTOMER_KEY";
pub const ENV_API_VERSION: &str = "ENFORCEMENT_API_VERSION";
pub const ENV_BASE_URL: &str = "ENFORCEMENT_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ENFORCEMENT_TIMEOUT_SECS";
pub const ENV_DOMAIN_CHECK: &str = "ENFORCEMENT_DOMAIN_CHECK";
pub const ENV_USER_AGENT: &str = "ENFORCEMENT_USER_AGENT";

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the customer key
/// is missing there, falls back to loading from a config file.
///
/// # Errors
/// Returns `EnforcementError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `EnforcementError::Config` if the customer key is missing or a
/// variable has an invalid value.
pub fn load_from_env() -> Result<ClientConfig> {
    config_from_vars(|name| std::env::var(name).ok())
}

/// Build configuration from a variable lookup.
///
/// `lookup` returns the value of a variable, or `None` when it is unset.
/// Blank values count as unset.
///
/// # Errors
/// Returns `EnforcementError::Config` if the customer key is missing or a
/// variable has an invalid value.
pub fn config_from_vars<F>(lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let customer_key = var(ENV_CUSTOMER_KEY).ok_or_else(|| {
        EnforcementError::Config(format!("Missing environment variable: {ENV_CUSTOMER_KEY}"))
    })?;

    let mut config = ClientConfig::new(customer_key);

    if let Some(version) = var(ENV_API_VERSION) {
        config.api_version = version;
    }
    config.base_url = var(ENV_BASE_URL);
    config.user_agent = var(ENV_USER_AGENT);

    if let Some(timeout) = var(ENV_TIMEOUT_SECS) {
        config.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| EnforcementError::Config(format!("Invalid timeout: {}", e)))?;
    }

    if let Some(check) = var(ENV_DOMAIN_CHECK) {
        config.domain_check = check.parse::<DomainCheck>().map_err(EnforcementError::Config)?;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `EnforcementError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EnforcementError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EnforcementError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EnforcementError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `EnforcementError::Config` if format is invalid or parsing fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EnforcementError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EnforcementError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(EnforcementError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
        if let Some(parent) = cwd.parent() {
            candidates.extend(candidate_files(parent).into_iter().take(2));
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir).into_iter().take(2));
        }
    }

    for candidate in candidates {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Found config file");
            return Some(candidate);
        }
    }

    tracing::debug!("No config file found in standard locations");
    None
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("enforcement.json"),
        dir.join("enforcement.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
    ]
}

//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the process environment, if present
//! 2. Loads a config file (`PETMATCH_CONFIG`, or the first existing standard path);
//!    when none exists the defaults are used
//! 3. Applies environment variable overrides
//! 4. Fills missing API credentials from the secrets directory
//!
//! ## Environment Variables
//! - `PETFINDER_API_KEY`: API key
//! - `PETFINDER_API_SECRET`: API secret
//! - `PETMATCH_API_BASE_URL`: upstream base URL
//! - `PETMATCH_HTTP_TIMEOUT_SECS`: per-request timeout in seconds
//! - `PETMATCH_BIND_ADDRESS`: listen address
//! - `PETMATCH_PORT`: listen port
//! - `PETMATCH_SESSION_IDLE_SECS`: idle time before a session is dropped
//! - `PETMATCH_CONFIG`: explicit config file path
//! - `PETMATCH_SECRETS_DIR`: secrets directory (default `/run/secrets`)
//!
//! Missing credentials are never a load error.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use petmatch_domain::constants::{API_KEY_ENV, API_SECRET_ENV};
use petmatch_domain::{Config, PetMatchError, Result};

const DEFAULT_SECRETS_DIR: &str = "/run/secrets";

/// Load configuration from every source, in order of precedence.
///
/// # Errors
/// Returns `PetMatchError::Config` if a config file is unreadable or
/// malformed, or an override has an invalid value.
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let explicit = std::env::var_os("PETMATCH_CONFIG").map(PathBuf::from);
    let mut config = match explicit.or_else(find_config_path) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::info!("No config file found, using defaults");
            Config::default()
        }
    };

    let lookup = |key: &str| std::env::var(key).ok();
    apply_overrides(&mut config, lookup)?;

    let secrets_dir = std::env::var_os("PETMATCH_SECRETS_DIR")
        .map_or_else(|| PathBuf::from(DEFAULT_SECRETS_DIR), PathBuf::from);
    apply_secret_files(&mut config, &secrets_dir);

    if config.upstream.credentials().is_none() {
        tracing::warn!("Petfinder API credentials are not configured");
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations for config files.
/// Supports JSON and TOML (detected by file extension).
///
/// # Errors
/// Returns `PetMatchError::Config` if the file is missing, unreadable, or
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PetMatchError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_path().ok_or_else(|| {
            PetMatchError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PetMatchError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PetMatchError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PetMatchError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PetMatchError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the working directory, then the executable's directory.
///
/// Returns the first config file found.
pub fn find_config_path() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["petmatch.toml", "petmatch.json", "config.toml", "config.json"];

    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter().flat_map(|dir| NAMES.iter().map(move |name| dir.join(name))).find(|p| p.exists())
}

/// Apply environment overrides through `lookup`.
///
/// Blank values are ignored.
///
/// # Errors
/// Returns `PetMatchError::Config` for unparsable numeric values.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(key) = get(API_KEY_ENV) {
        config.upstream.api_key = Some(key);
    }
    if let Some(secret) = get(API_SECRET_ENV) {
        config.upstream.api_secret = Some(secret);
    }
    if let Some(url) = get("PETMATCH_API_BASE_URL") {
        config.upstream.base_url = url;
    }
    if let Some(raw) = get("PETMATCH_HTTP_TIMEOUT_SECS") {
        config.upstream.timeout_seconds = Some(parse_var("PETMATCH_HTTP_TIMEOUT_SECS", &raw)?);
    }
    if let Some(address) = get("PETMATCH_BIND_ADDRESS") {
        config.server.bind_address = address;
    }
    if let Some(raw) = get("PETMATCH_PORT") {
        config.server.port = parse_var("PETMATCH_PORT", &raw)?;
    }
    if let Some(raw) = get("PETMATCH_SESSION_IDLE_SECS") {
        config.server.session_idle_seconds = parse_var("PETMATCH_SESSION_IDLE_SECS", &raw)?;
    }

    Ok(())
}

/// Fill absent credentials from `{dir}/PETFINDER_API_KEY` and
/// `{dir}/PETFINDER_API_SECRET`. Unreadable files are skipped.
pub fn apply_secret_files(config: &mut Config, dir: &Path) {
    if config.upstream.api_key.is_none() {
        config.upstream.api_key = read_secret(dir, API_KEY_ENV);
    }
    if config.upstream.api_secret.is_none() {
        config.upstream.api_secret = read_secret(dir, API_SECRET_ENV);
    }
}

fn read_secret(dir: &Path, name: &str) -> Option<String> {
    let path = dir.join(name);
    let value = std::fs::read_to_string(&path).ok()?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    tracing::debug!(path = %path.display(), "Read secret from file");
    Some(value.to_string())
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| PetMatchError::Config(format!("Invalid value for {key}: {e}")))
}

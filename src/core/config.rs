//! # Configuration
//!
//! A handful of settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.usermenu/config.toml` and is optional. It is only
//! ever read; nothing is generated or written back.

use serde::Deserialize;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct UserMenuConfig {
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountsConfig {
    /// Parent of the per-group directories (`<home_root>/<group>/<user>`).
    pub home_root: Option<PathBuf>,
    pub login_shell: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HOME_ROOT: &str = "/home";
pub const DEFAULT_LOGIN_SHELL: &str = "/bin/bash";
pub const DEFAULT_LOG_FILE: &str = "usermenu.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub home_root: PathBuf,
    pub login_shell: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Problems found while resolving. Resolution runs before the logger
    /// exists, so the caller logs these once it is up.
    pub warnings: Vec<String>,
}

impl ResolvedConfig {
    /// `<home_root>/<group>`
    pub fn group_directory(&self, group: &str) -> PathBuf {
        under(&self.home_root, group)
    }

    /// `<home_root>/<group>/<username>`
    pub fn user_home(&self, group: &str, username: &str) -> PathBuf {
        under(&self.group_directory(group), username)
    }
}

/// Appends `name` below `base`, dropping root, `.` and `..` components so
/// the result never leaves `base`.
fn under(base: &Path, name: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    path.extend(Path::new(name).components().filter_map(|c| match c {
        Component::Normal(part) => Some(part),
        _ => None,
    }));
    path
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&UserMenuConfig::default(), |_| None)
    }
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

/// Returns the path to `~/.usermenu/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".usermenu").join("config.toml"))
}

/// Where the loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at this path; defaults apply.
    Missing(PathBuf),
    /// The home directory could not be determined; defaults apply.
    NoHomeDirectory,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "Loaded config from {}", path.display()),
            ConfigSource::Missing(path) => {
                write!(f, "No config file at {}, using defaults", path.display())
            }
            ConfigSource::NoHomeDirectory => {
                write!(f, "Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `~/.usermenu/config.toml`.
///
/// A missing file (or home directory) yields `UserMenuConfig::default()`.
/// A malformed file yields `ConfigError::Parse`. Nothing is logged here:
/// this runs before the log file is known.
pub fn load_config() -> Result<(UserMenuConfig, ConfigSource), ConfigError> {
    let Some(path) = config_path() else {
        return Ok((UserMenuConfig::default(), ConfigSource::NoHomeDirectory));
    };
    match load_config_from(&path)? {
        Some(config) => Ok((config, ConfigSource::File(path))),
        None => Ok((UserMenuConfig::default(), ConfigSource::Missing(path))),
    }
}

/// Returns `None` when there is no file at `path`.
pub fn load_config_from(path: &Path) -> Result<Option<UserMenuConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: UserMenuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(Some(config))
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &UserMenuConfig) -> ResolvedConfig {
    resolve_with(config, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with(config: &UserMenuConfig, env: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    let home_root = env("USERMENU_HOME_ROOT")
        .map(PathBuf::from)
        .or_else(|| config.accounts.home_root.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HOME_ROOT));

    let login_shell = env("USERMENU_SHELL")
        .or_else(|| config.accounts.login_shell.clone())
        .unwrap_or_else(|| DEFAULT_LOGIN_SHELL.to_string());

    let log_file = env("USERMENU_LOG_FILE")
        .map(PathBuf::from)
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let mut warnings = Vec::new();
    let log_level = match env("USERMENU_LOG_LEVEL").or_else(|| config.logging.level.clone()) {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warnings.push(format!("Unknown log level '{level}', using {DEFAULT_LOG_LEVEL}"));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        home_root,
        login_shell,
        log_file,
        log_level,
        warnings,
    }
}

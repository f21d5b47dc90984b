//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `~/.config/uthoctl.yaml` (or `--config <path>`)
//! 3. Environment variables: `UTHO_*` prefix (`UTHO_TOKEN`, `UTHO_API_URL`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::{ApplicationError, ApplicationResult, FileContext};

/// Utho API v2 endpoint.
pub const DEFAULT_API_URL: &str = "https://api.utho.com/v2/";

/// File name of the config inside `~/.config`.
pub const CONFIG_FILE_NAME: &str = "uthoctl.yaml";

/// Effective settings for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Bearer token for the API (empty when not logged in)
    pub token: String,
    /// API base url
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Settings {
    /// Copy safe for display: all but the last four token characters hidden.
    pub fn masked(&self) -> Self {
        let chars: Vec<char> = self.token.chars().collect();
        let token = match chars.len() {
            0 => String::new(),
            n if n <= 4 => "****".to_string(),
            n => format!("****{}", chars[n - 4..].iter().collect::<String>()),
        };
        Self {
            token,
            api_url: self.api_url.clone(),
        }
    }

    pub fn to_yaml(&self) -> ApplicationResult<String> {
        serde_yaml::to_string(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

/// Keys as stored on disk; absent keys are not written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
}

/// Get the default config file path (`~/.config/uthoctl.yaml`).
pub fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join(CONFIG_FILE_NAME))
}

/// Reads and writes the YAML settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the well-known per-user location.
    pub fn default_location() -> ApplicationResult<Self> {
        default_config_path()
            .map(Self::new)
            .ok_or_else(|| ApplicationError::Config {
                message: "cannot determine home directory".to_string(),
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings with layered precedence.
    ///
    /// A missing file is not an error; the token is then empty.
    pub fn load(&self) -> ApplicationResult<Settings> {
        debug!("load config: {}", self.path.display());
        self.layered(Some(&self.path))
    }

    /// Like [`load`](Self::load), but an unparsable file is skipped with a
    /// warning so that `auth` can still rewrite it.
    pub fn load_or_env(&self) -> ApplicationResult<Settings> {
        match self.load() {
            Ok(settings) => Ok(settings),
            Err(ApplicationError::Config { message }) => {
                warn!("ignoring {}: {}", self.path.display(), message);
                warn!("run 'uthoctl auth' to save a new token");
                self.layered(None)
            }
            Err(e) => Err(e),
        }
    }

    fn layered(&self, file: Option<&Path>) -> ApplicationResult<Settings> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("token", defaults.token)
            .map_err(config_err)?
            .set_default("api_url", defaults.api_url)
            .map_err(config_err)?;
        if let Some(path) = file {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Yaml)
                    .required(false),
            );
        }
        let config = builder
            .add_source(Environment::with_prefix("UTHO"))
            .build()
            .map_err(config_err)?;

        config.try_deserialize().map_err(config_err)
    }

    fn load_file(&self) -> ApplicationResult<FileSettings> {
        if !self.path.exists() {
            return Ok(FileSettings::default());
        }
        let content =
            std::fs::read_to_string(&self.path).on_file("read", &self.path)?;
        if content.trim().is_empty() {
            return Ok(FileSettings::default());
        }
        serde_yaml::from_str(&content).map_err(|e| ApplicationError::Config {
            message: format!("parse {}: {}", self.path.display(), e),
        })
    }

    /// Persist `token`, keeping any other key already in the file.
    ///
    /// An unparsable file is replaced.
    pub fn save_token(&self, token: &str) -> ApplicationResult<()> {
        let mut file = match self.load_file() {
            Ok(file) => file,
            Err(ApplicationError::Config { message }) => {
                warn!("overwriting unparsable config: {}", message);
                FileSettings::default()
            }
            Err(e) => return Err(e),
        };
        file.token = Some(token.to_string());

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).on_file("create directory", dir)?;
        }
        let content = serde_yaml::to_string(&file).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })?;
        std::fs::write(&self.path, content).on_file("write", &self.path)?;
        restrict_permissions(&self.path)?;

        debug!("token saved: {}", self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> ApplicationResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .on_file("restrict permissions of", path)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> ApplicationResult<()> {
    Ok(())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_default_settings_then_token_empty_and_api_url_v2() {
        let settings = Settings::default();
        assert!(settings.token.is_empty());
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }

    #[rstest]
    #[case("", "")]
    #[case("abc", "****")]
    #[case("abcdefgh1234", "****1234")]
    fn given_token_when_masking_then_only_tail_visible(#[case] token: &str, #[case] expected: &str) {
        let settings = Settings {
            token: token.to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.masked().token, expected);
    }

    #[test]
    fn given_default_path_then_ends_with_config_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(".config/uthoctl.yaml"));
        }
    }
}

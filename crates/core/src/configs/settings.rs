use std::env;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::execution::runner::DEFAULT_MAX_CONCURRENT;
use crate::types::{RunbookError, RunbookResult};

/// Settings file probed in the working directory.
pub const LOCAL_SETTINGS: &str = ".runbook.json";
/// Environment variable naming an alternative settings file.
pub const SETTINGS_ENV: &str = "RUNBOOK_CONFIG";

/// Application settings. Keys in the settings file are PascalCase, e.g.
/// `{"MaxConcurrent": 3}`; absent keys take the built-in defaults.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(default, rename_all = "PascalCase")]
pub struct Settings {
    pub app_name: String,
    pub version: String,
    /// Concurrency ceiling for async tasks. Zero or negative means "use the
    /// built-in default".
    pub max_concurrent: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            app_name: "runbook".to_string(),
            version: "1.0.0".to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT as i64,
        }
    }
}

impl Settings {
    /// Loads settings from the first file that exists: `.runbook.json` in
    /// the working directory, then the path named by `RUNBOOK_CONFIG`. When
    /// no file is present the built-in defaults apply. A file that exists
    /// but does not parse is an error.
    pub fn load() -> RunbookResult<Self> {
        let mut paths = vec![LOCAL_SETTINGS.to_string()];
        if let Ok(env_path) = env::var(SETTINGS_ENV) {
            if !env_path.is_empty() {
                paths.push(env_path);
            }
        }
        Self::load_first(&paths)
    }

    fn load_first(paths: &[String]) -> RunbookResult<Self> {
        for path in paths {
            match Self::from_file(Path::new(path)) {
                Ok(settings) => {
                    log::debug!("settings loaded from {path}");
                    return Ok(settings);
                }
                Err(RunbookError::Io(err))
                    if err.kind() == std::io::ErrorKind::NotFound =>
                {
                    continue;
                }
                Err(err) => return Err(err),
            }
        }

        log::debug!("no settings file found, using defaults");
        Ok(Settings::default())
    }

    pub fn from_file(path: &Path) -> RunbookResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| RunbookError::Load {
                path: path.display().to_string(),
                reason: format!("invalid settings JSON: {e}"),
            })?;
        Ok(settings)
    }

    /// Effective concurrency ceiling: the configured value, or the built-in
    /// default when the configured value is zero or negative.
    pub fn max_concurrent(&self) -> usize {
        if self.max_concurrent <= 0 {
            DEFAULT_MAX_CONCURRENT
        } else {
            self.max_concurrent as usize
        }
    }
}

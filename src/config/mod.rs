use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::core::services::summary_service::DEFAULT_DUE_SOON_DAYS;
use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::{TrackerError, TrackerResult};
use crate::reminder::{ReminderBuilder, ReminderTone};

const DEFAULT_DIR_NAME: &str = ".case_ledger";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "CASE_LEDGER_HOME";
const TMP_SUFFIX: &str = "tmp";

/// User preferences for formatting and KPI windows. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
    pub due_soon_days: u32,
    pub default_tone: ReminderTone,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            locale: LocaleConfig::default(),
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
            default_tone: ReminderTone::default(),
        }
    }
}

impl TrackerConfig {
    pub fn reminder_builder(&self) -> ReminderBuilder {
        ReminderBuilder::new(self.currency.clone(), self.locale.clone())
    }

    fn validate(mut self) -> TrackerResult<Self> {
        self.currency = CurrencyCode::new(self.currency.0);
        if self.currency.as_str().len() != 3 {
            return Err(TrackerError::Config(format!(
                "currency `{}` is not a three-letter code",
                self.currency.as_str()
            )));
        }
        if self.locale.decimal_separator == self.locale.grouping_separator {
            return Err(TrackerError::Config(
                "decimal and grouping separators must differ".into(),
            ));
        }
        Ok(self)
    }
}

/// Returns the application data directory, defaulting to `~/.case_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves `TrackerConfig` as JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: base.as_ref().join(CONFIG_FILE),
        }
    }

    /// Reads the configuration, falling back to defaults when no file exists yet.
    pub fn load(&self) -> TrackerResult<TrackerConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file; using defaults");
            return Ok(TrackerConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: TrackerConfig = serde_json::from_str(&data)?;
        config.validate()
    }

    pub fn save(&self, config: &TrackerConfig) -> TrackerResult<()> {
        let config = config.clone().validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> TrackerResult<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

use crate::errors::{AppError, AppResult};
use crate::utils::date::check_file_pattern;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod env_overlay;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub rules: ReportRules,
}

/// SMTP delivery settings. Addresses stay as raw strings here and are
/// parsed once by `mail::MailPlan` before any query runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default)]
    pub cc: Vec<String>,
    #[serde(default)]
    pub bcc: Vec<String>,
    #[serde(default)]
    pub server: String,
    #[serde(default = "default_mail_port")]
    pub port: u16,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_true")]
    pub tls: bool,
    #[serde(default = "default_true")]
    pub attach_spreadsheet: bool,
}

/// Job selection and staleness rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRules {
    /// Jobs at or below this id are never listed.
    #[serde(default = "default_min_job_id")]
    pub min_job_id: i64,
    /// Department whose latest punch decides whether a job is current.
    #[serde(default = "default_outfitting_department_id")]
    pub outfitting_department_id: i64,
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: u32,
    /// How far back active punches are searched when listing jobs.
    #[serde(default = "default_lookback_months")]
    pub lookback_months: u32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_output_dir() -> String {
    Config::config_dir()
        .join("reports")
        .to_string_lossy()
        .to_string()
}
fn default_file_pattern() -> String {
    "boat_hours_%Y-%m-%d.xlsx".to_string()
}
fn default_mail_port() -> u16 {
    587
}
fn default_true() -> bool {
    true
}
fn default_min_job_id() -> i64 {
    7000
}
fn default_outfitting_department_id() -> i64 {
    221
}
fn default_stale_after_days() -> u32 {
    15
}
fn default_lookback_months() -> u32 {
    12
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            server: String::new(),
            port: default_mail_port(),
            login: None,
            password: None,
            tls: true,
            attach_spreadsheet: true,
        }
    }
}

impl Default for ReportRules {
    fn default() -> Self {
        Self {
            min_job_id: default_min_job_id(),
            outfitting_department_id: default_outfitting_department_id(),
            stale_after_days: default_stale_after_days(),
            lookback_months: default_lookback_months(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            output_dir: default_output_dir(),
            file_pattern: default_file_pattern(),
            mail: MailConfig::default(),
            rules: ReportRules::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("boathours")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".boathours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("boathours.conf")
    }

    /// Return the default path of the time-tracking store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeclock.sqlite")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let path = match path {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Check values that would otherwise only fail after the queries ran.
    pub fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }
        check_file_pattern(&self.file_pattern)?;
        if self.output_dir.trim().is_empty() {
            return Err(AppError::Config("output_dir is empty".into()));
        }
        Ok(())
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// YAML rendering with the SMTP password masked.
    pub fn to_masked_yaml(&self) -> AppResult<String> {
        let mut shown = self.clone();
        if shown.mail.password.is_some() {
            shown.mail.password = Some("********".to_string());
        }
        Ok(serde_yaml::to_string(&shown)?)
    }

    /// Location of the time-clock store: `~` expanded, relative paths
    /// resolved under the config directory.
    pub fn database_path(&self) -> PathBuf {
        let path = expand_tilde(self.database.trim());
        if path.is_absolute() {
            path
        } else {
            Self::config_dir().join(path)
        }
    }

    /// Write the default configuration file (unless `is_test` or it already
    /// exists) and make sure the directory of `db_path` exists.
    pub fn init_all(db_path: &Path, is_test: bool) -> io::Result<()> {
        if !is_test && !Self::config_file().exists() {
            fs::create_dir_all(Self::config_dir())?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(())
    }
}

//! Environment overrides for the file-based configuration.
//!
//! Variable names follow the deployment `.env` used on the report host
//! (`DB_DATABASE`, `MAIL_FROM`, `MAIL_TO`, ...). Lists are comma separated.

use super::Config;
use crate::errors::AppResult;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct EnvOverrides {
    pub db_database: Option<String>,
    pub report_dir: Option<String>,
    pub mail_from: Option<String>,
    pub mail_to: Option<String>,
    pub mail_cc: Option<String>,
    pub mail_bcc: Option<String>,
    pub mail_server: Option<String>,
    pub mail_port: Option<u16>,
    pub mail_login: Option<String>,
    pub mail_password: Option<String>,
}

impl EnvOverrides {
    /// Read the overrides from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Read the overrides from explicit `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, EnvOverrides>(vars)?)
    }

    /// Apply every variable that is set on top of `cfg`.
    pub fn apply(self, cfg: &mut Config) {
        if let Some(db) = self.db_database {
            cfg.database = db;
        }
        if let Some(dir) = self.report_dir {
            cfg.output_dir = dir;
        }
        if let Some(from) = self.mail_from {
            cfg.mail.from = from;
        }
        if let Some(to) = self.mail_to {
            cfg.mail.to = split_list(&to);
        }
        if let Some(cc) = self.mail_cc {
            cfg.mail.cc = split_list(&cc);
        }
        if let Some(bcc) = self.mail_bcc {
            cfg.mail.bcc = split_list(&bcc);
        }
        if let Some(server) = self.mail_server {
            cfg.mail.server = server;
        }
        if let Some(port) = self.mail_port {
            cfg.mail.port = port;
        }
        if self.mail_login.is_some() {
            cfg.mail.login = self.mail_login;
        }
        if self.mail_password.is_some() {
            cfg.mail.password = self.mail_password;
        }
    }
}

impl Config {
    /// Overlay environment variables (already populated from `.env`).
    pub fn apply_env(&mut self) -> AppResult<()> {
        EnvOverrides::from_env()?.apply(self);
        Ok(())
    }
}

/// Split a comma separated recipient list, dropping blank entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

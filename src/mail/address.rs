//! Address parsing for the configured sender and recipients.

use crate::config::MailConfig;
use crate::errors::{AppError, AppResult};
use lettre::message::Mailbox;
use lettre::Address;

/// Parse one configured address. Accepted forms:
///
/// - `example@example.com`
/// - `<example@example.com>`
/// - `Example <example@example.com>`
/// - `Example<example@example.com>`
///
/// Anything else (including an empty string) is an `InvalidAddress` error.
pub fn parse_mailbox(raw: &str) -> AppResult<Mailbox> {
    let s = raw.trim();
    let invalid = || AppError::InvalidAddress(raw.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    let (name, addr) = match s.split_once('<') {
        None => (None, s),
        Some((name, rest)) => {
            let addr = rest.strip_suffix('>').ok_or_else(invalid)?;
            let name = name.trim();
            let name = if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            };
            (name, addr.trim())
        }
    };

    if addr.contains('<') || addr.contains('>') {
        return Err(invalid());
    }

    let address: Address = addr.parse().map_err(|_| invalid())?;
    Ok(Mailbox::new(name, address))
}

/// Sender and recipients, parsed and checked before the report runs.
#[derive(Debug, Clone)]
pub struct MailPlan {
    pub from: Mailbox,
    pub to: Vec<Mailbox>,
    pub cc: Vec<Mailbox>,
    pub bcc: Vec<Mailbox>,
}

impl MailPlan {
    pub fn from_config(cfg: &MailConfig) -> AppResult<Self> {
        if cfg.from.trim().is_empty() {
            return Err(AppError::Config("mail sender (MAIL_FROM) is not set".into()));
        }
        let from = parse_mailbox(&cfg.from)?;
        let to = parse_list(&cfg.to)?;
        let cc = parse_list(&cfg.cc)?;
        let bcc = parse_list(&cfg.bcc)?;

        if to.is_empty() && cc.is_empty() && bcc.is_empty() {
            return Err(AppError::Config(
                "no mail recipients configured (MAIL_TO, MAIL_CC, MAIL_BCC)".into(),
            ));
        }

        let has = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if has(&cfg.login) != has(&cfg.password) {
            return Err(AppError::Config(
                "SMTP login and password (MAIL_LOGIN, MAIL_PASSWORD) must be set together".into(),
            ));
        }

        Ok(Self { from, to, cc, bcc })
    }

    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }
}

fn parse_list(raw: &[String]) -> AppResult<Vec<Mailbox>> {
    raw.iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_mailbox(s))
        .collect()
}

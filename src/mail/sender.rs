//! Report delivery over SMTP.

use crate::config::MailConfig;
use crate::errors::{AppError, AppResult};
use crate::export::{html_body, plain_body};
use crate::mail::address::MailPlan;
use crate::models::Report;
use crate::models::outcome::DeliveryOutcome;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::fmt::Display;
use std::fs;
use std::path::Path;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct Mailer<T: Transport> {
    transport: T,
    plan: MailPlan,
    attach_spreadsheet: bool,
}

impl Mailer<SmtpTransport> {
    /// Validate the addresses and build the SMTP transport. Nothing is
    /// sent and no connection is opened here.
    pub fn smtp(cfg: &MailConfig) -> AppResult<Self> {
        let plan = MailPlan::from_config(cfg)?;

        if cfg.server.trim().is_empty() {
            return Err(AppError::Config("mail server (MAIL_SERVER) is not set".into()));
        }

        let builder = if cfg.tls {
            SmtpTransport::starttls_relay(cfg.server.trim())
                .map_err(|e| AppError::Mail(e.to_string()))?
        } else {
            SmtpTransport::builder_dangerous(cfg.server.trim())
        };

        let mut builder = builder.port(cfg.port);
        if let (Some(login), Some(password)) = (&cfg.login, &cfg.password) {
            builder = builder.credentials(Credentials::new(login.clone(), password.clone()));
        }

        Ok(Self::new(builder.build(), plan, cfg.attach_spreadsheet))
    }
}

impl<T> Mailer<T>
where
    T: Transport,
    T::Error: Display,
{
    pub fn new(transport: T, plan: MailPlan, attach_spreadsheet: bool) -> Self {
        Self {
            transport,
            plan,
            attach_spreadsheet,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send the report. Transport and message errors come back as
    /// `DeliveryOutcome::Failed` for the caller to report.
    pub fn send_report(&self, report: &Report, attachment: Option<&Path>) -> DeliveryOutcome {
        let message = match self.build_message(report, attachment) {
            Ok(m) => m,
            Err(e) => return DeliveryOutcome::Failed(e.to_string()),
        };

        match self.transport.send(&message) {
            Ok(_) => DeliveryOutcome::Sent {
                recipients: self.plan.recipient_count(),
            },
            Err(e) => DeliveryOutcome::Failed(e.to_string()),
        }
    }

    /// Multipart message: plain + HTML alternatives, plus the spreadsheet
    /// when one was written and attaching is enabled.
    pub fn build_message(&self, report: &Report, attachment: Option<&Path>) -> AppResult<Message> {
        let mut builder = Message::builder()
            .from(self.plan.from.clone())
            .subject(report.subject());

        for to in &self.plan.to {
            builder = builder.to(to.clone());
        }
        for cc in &self.plan.cc {
            builder = builder.cc(cc.clone());
        }
        for bcc in &self.plan.bcc {
            builder = builder.bcc(bcc.clone());
        }

        let alternative = MultiPart::alternative_plain_html(plain_body(report), html_body(report)?);

        let body = match attachment.filter(|_| self.attach_spreadsheet) {
            None => alternative,
            Some(path) => {
                let bytes = fs::read(path)?;
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "boat_hours.xlsx".to_string());
                let content_type =
                    ContentType::parse(XLSX_CONTENT_TYPE).map_err(|e| AppError::Mail(e.to_string()))?;
                MultiPart::mixed()
                    .multipart(alternative)
                    .singlepart(Attachment::new(filename).body(bytes, content_type))
            }
        };

        builder
            .multipart(body)
            .map_err(|e| AppError::Mail(e.to_string()))
    }
}

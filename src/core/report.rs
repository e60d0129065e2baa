//! Report run: build the rows, then hand them to each destination.

use crate::config::ReportRules;
use crate::core::filter::filter_and_aggregate;
use crate::db::PunchSource;
use crate::errors::AppResult;
use crate::export::xlsx::export_xlsx;
use crate::export::fs_utils::ensure_writable;
use crate::mail::Mailer;
use crate::models::Report;
use crate::models::outcome::{DistributionSummary, SpreadsheetOutcome};
use crate::utils::date::{format_file_name, lookback_start};
use chrono::NaiveDateTime;
use lettre::Transport;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Where and how the spreadsheet is written.
#[derive(Debug, Clone)]
pub struct SpreadsheetOptions {
    pub out_dir: PathBuf,
    pub file_pattern: String,
    pub force: bool,
}

pub struct ReportLogic;

impl ReportLogic {
    /// List the candidate jobs, keep the current ones and aggregate them.
    pub fn build<S: PunchSource + ?Sized>(
        source: &S,
        rules: &ReportRules,
        now: NaiveDateTime,
    ) -> AppResult<Report> {
        let since = lookback_start(now, rules.lookback_months);
        let mut jobs = source.list_jobs(since, rules.min_job_id)?;
        jobs.sort_by_key(|j| j.id);

        let rows = filter_and_aggregate(source, &jobs, rules, now)?;

        Ok(Report {
            date: now.date(),
            rows,
        })
    }

    /// Write the spreadsheet and send the mail. A failure in one destination
    /// is recorded in the summary and never stops the other.
    pub fn distribute<T>(
        report: &Report,
        spreadsheet: Option<&SpreadsheetOptions>,
        mailer: Option<&Mailer<T>>,
    ) -> DistributionSummary
    where
        T: Transport,
        T::Error: Display,
    {
        let spreadsheet = spreadsheet.map(|opts| match Self::write_spreadsheet(report, opts) {
            Ok(path) => SpreadsheetOutcome::Written(path),
            Err(e) => SpreadsheetOutcome::Failed(e.to_string()),
        });

        let attachment: Option<&Path> = match &spreadsheet {
            Some(SpreadsheetOutcome::Written(p)) => Some(p.as_path()),
            _ => None,
        };

        let mail = mailer.map(|m| m.send_report(report, attachment));

        DistributionSummary { spreadsheet, mail }
    }

    /// Render the report to `<out_dir>/<file_pattern formatted with the date>`.
    pub fn write_spreadsheet(report: &Report, opts: &SpreadsheetOptions) -> AppResult<PathBuf> {
        let name = format_file_name(report.date, &opts.file_pattern)?;
        std::fs::create_dir_all(&opts.out_dir)?;
        let path = opts.out_dir.join(name);

        ensure_writable(&path, opts.force)?;
        export_xlsx(report, &path)?;
        Ok(path)
    }
}

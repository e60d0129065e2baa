use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportLogic;
use crate::core::report::SpreadsheetOptions;
use crate::db::SqlitePunchSource;
use crate::db::pool::DbPool;
use crate::db::schema::missing_tables;
use crate::errors::{AppError, AppResult};
use crate::export::render_table;
use crate::mail::Mailer;
use crate::models::outcome::{DeliveryOutcome, DistributionSummary, SpreadsheetOutcome};
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::date::resolve_now;
use crate::utils::path::expand_tilde;

/// Handle the `report` command
///
/// Order matters: every configuration problem is raised before the first
/// query, and no destination is touched unless every query succeeded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        as_of,
        no_mail,
        no_xlsx,
        out_dir,
        force,
    } = cmd
    {
        //
        // 1) startup validation
        //
        let now = resolve_now(as_of.as_deref())?;
        cfg.validate()?;

        let mailer = if *no_mail {
            None
        } else {
            Some(Mailer::smtp(&cfg.mail)?)
        };

        let spreadsheet = (!*no_xlsx).then(|| SpreadsheetOptions {
            out_dir: out_dir
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| cfg.output_path()),
            file_pattern: cfg.file_pattern.clone(),
            force: *force,
        });

        //
        // 2) queries (any failure aborts the run)
        //
        let pool = DbPool::open_read_only(&cfg.database)?;
        let missing = missing_tables(&pool.conn)?;
        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "database {} lacks tables: {}",
                cfg.database,
                missing.join(", ")
            )));
        }

        let source = SqlitePunchSource::new(&pool.conn);
        let report = ReportLogic::build(&source, &cfg.rules, now)?;

        header(report.subject());
        print!("{}", render_table(&report.rows));
        println!();
        info(format!("{} boat(s) in report", report.rows.len()));

        //
        // 3) destinations (independent of each other)
        //
        let summary = ReportLogic::distribute(&report, spreadsheet.as_ref(), mailer.as_ref());
        print_summary(&summary);

        let failures = summary.failures();
        if !failures.is_empty() {
            return Err(AppError::Delivery(failures.join("; ")));
        }
    }

    Ok(())
}

fn print_summary(summary: &DistributionSummary) {
    match &summary.spreadsheet {
        Some(SpreadsheetOutcome::Written(_)) => {}
        Some(SpreadsheetOutcome::Failed(e)) => error(format!("Spreadsheet not written: {e}")),
        None => warning("Spreadsheet disabled (--no-xlsx)"),
    }

    match &summary.mail {
        Some(DeliveryOutcome::Sent { recipients }) => {
            success(format!("Report mailed to {recipients} recipient(s)"))
        }
        Some(DeliveryOutcome::Failed(e)) => error(format!("SMTP email error: {e}")),
        None => warning("Email disabled (--no-mail)"),
    }
}

//! Email bodies built around the text table.

use crate::errors::AppResult;
use crate::export::table::render_table;
use crate::models::Report;
use askama::Template;

/// Intro paragraph and the table inside `<pre>`; askama escapes both.
#[derive(Template)]
#[template(path = "report_email.html")]
struct ReportEmail {
    intro: String,
    table: String,
}

pub fn html_body(report: &Report) -> AppResult<String> {
    let view = ReportEmail {
        intro: report.intro(),
        table: render_table(&report.rows),
    };
    Ok(view.render()?)
}

/// Plain-text alternative for clients that do not render HTML.
pub fn plain_body(report: &Report) -> String {
    format!("{}\n\n{}", report.intro(), render_table(&report.rows))
}

//! Fixed-width text table, as pasted into the email body.

use crate::models::{Department, ReportRow};
use crate::utils::formatting::{fit, nice_number};

pub const TABLE_HEADER: &str = "Boat        Fabrication      Paint     Canvas Outfitting";
pub const TABLE_RULE: &str = "----------  -----------  ---------  --------- ----------";

/// Boat names are cut to this many characters...
const BOAT_CHARS: usize = 12;
/// ...and padded to this width, followed by two spaces.
const BOAT_WIDTH: usize = 14;
const COLUMN_GAP: &str = "    ";

/// One table line without the trailing newline.
pub fn render_row(row: &ReportRow) -> String {
    let mut line = fit(&row.boat, BOAT_WIDTH, BOAT_CHARS);
    line.push_str("  ");
    for (i, dept) in Department::REPORTED.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(&nice_number(row.hours.department(*dept)));
    }
    line
}

/// Header, rule and one line per row, each terminated by a newline.
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_RULE);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

mod common;
use boathours::export::model::{Cell, get_headers, rows_to_cells};
use boathours::export::table::{TABLE_HEADER, TABLE_RULE, render_row};
use boathours::export::{html_body, plain_body, render_table};
use boathours::models::{DepartmentHours, Report, ReportRow};
use boathours::utils::nice_number;
use common::day;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn hours(pairs: &[(&str, Decimal)]) -> DepartmentHours {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn sample_report() -> Report {
    Report {
        date: day("2026-10-18"),
        rows: vec![
            ReportRow::new("Albatross", hours(&[("Fab", dec!(12.5))])),
            ReportRow::new(
                "Barracuda & Co <38>",
                hours(&[
                    ("Fab", dec!(39.45)),
                    ("Pai", dec!(8)),
                    ("Can", dec!(101.7)),
                    ("Out", dec!(0.25)),
                    ("Ele", dec!(4)),
                ]),
            ),
        ],
    }
}

#[test]
fn test_nice_number() {
    assert_eq!(nice_number(Some(dec!(12.5))), "  12.50");
    assert_eq!(nice_number(Some(dec!(0))), "   0.00");
    assert_eq!(nice_number(Some(dec!(1234.7))), "1234.70");
    assert_eq!(nice_number(None), "       ");
}

#[test]
fn test_row_with_only_fabrication() {
    let row = ReportRow::new("Albatross", hours(&[("Fab", dec!(12.5))]));

    let expected = format!(
        "{:<14}  {}    {}    {}    {}",
        "Albatross", "  12.50", "       ", "       ", "       "
    );
    assert_eq!(render_row(&row), expected);
}

#[test]
fn test_boat_name_truncated_to_twelve_chars() {
    let row = ReportRow::new("Constellation Voyager", DepartmentHours::new());
    let line = render_row(&row);

    assert!(line.starts_with("Constellatio    "));
    assert_eq!(line.chars().count(), 14 + 2 + 7 * 4 + 4 * 3);
}

#[test]
fn test_unreported_buckets_are_dropped() {
    let report = sample_report();
    let table = render_table(&report.rows);

    assert!(!table.contains("4.00"));
    assert!(table.contains("  39.45"));
    assert!(table.contains(" 101.70"));
}

#[test]
fn test_table_header_and_rule() {
    let table = render_table(&[]);
    assert_eq!(table, format!("{TABLE_HEADER}\n{TABLE_RULE}\n"));
}

#[test]
fn test_html_body_wraps_table_in_pre() {
    let report = sample_report();
    let html = html_body(&report).expect("render html");

    assert!(html.starts_with(
        "<p>Here is the Department Hours by Boat Report for 2026-10-18.</p>\n<br />\n<pre>\n"
    ));
    assert!(html.trim_end().ends_with("</pre>"));
    assert!(html.contains("Barracuda &amp; Co &lt;38&gt;"));
    assert!(!html.contains("<38>"));
}

#[test]
fn test_plain_body_contains_table() {
    let report = sample_report();
    let plain = plain_body(&report);

    assert!(plain.starts_with("Here is the Department Hours by Boat Report for 2026-10-18.\n\n"));
    assert!(plain.contains(TABLE_HEADER));
}

#[test]
fn test_subject() {
    assert_eq!(
        sample_report().subject(),
        "Department Hours by Boat Report for 2026-10-18."
    );
}

#[test]
fn test_spreadsheet_headers() {
    assert_eq!(
        get_headers(),
        vec!["Boat", "Fabrication", "Paint", "Canvas", "Outfitting"]
    );
}

#[test]
fn test_spreadsheet_cells_match_table_values() {
    let report = sample_report();
    let cells = rows_to_cells(&report.rows);
    let table = render_table(&report.rows);
    let lines: Vec<&str> = table.lines().skip(2).collect();

    assert_eq!(cells.len(), lines.len());

    for (row_cells, line) in cells.iter().zip(lines) {
        // four 7-wide fields after the 16-char boat column, 4-space gaps
        let fields: Vec<String> = (0..4)
            .map(|i| {
                let start = 16 + i * 11;
                line.chars().skip(start).take(7).collect::<String>()
            })
            .collect();

        for (cell, field) in row_cells.iter().skip(1).zip(fields) {
            match cell {
                Cell::Hours(h) => assert_eq!(format!("{h:7.2}"), field),
                Cell::Blank => assert_eq!(field, "       "),
                Cell::Text(t) => panic!("unexpected text cell {t}"),
            }
        }
    }
}

#[test]
fn test_spreadsheet_blank_for_absent_department() {
    let report = sample_report();
    let cells = rows_to_cells(&report.rows);

    assert_eq!(
        cells[0],
        vec![
            Cell::Text("Albatross".into()),
            Cell::Hours(12.5),
            Cell::Blank,
            Cell::Blank,
            Cell::Blank,
        ]
    );
}

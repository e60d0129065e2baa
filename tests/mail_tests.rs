mod common;
use boathours::config::MailConfig;
use boathours::core::ReportLogic;
use boathours::core::report::SpreadsheetOptions;
use boathours::errors::AppError;
use boathours::mail::{MailPlan, Mailer, parse_mailbox};
use boathours::models::outcome::{DeliveryOutcome, SpreadsheetOutcome};
use boathours::models::{DepartmentHours, Report, ReportRow};
use common::{day, temp_out_dir};
use lettre::SmtpTransport;
use lettre::transport::stub::StubTransport;
use rust_decimal_macros::dec;
use std::fs;

fn mail_config() -> MailConfig {
    MailConfig {
        from: "Shop Floor <reports@boatworks.example>".into(),
        to: vec!["owner@boatworks.example".into()],
        cc: vec!["Foreman <foreman@boatworks.example>".into()],
        bcc: vec![],
        server: "smtp.boatworks.example".into(),
        ..MailConfig::default()
    }
}

fn report() -> Report {
    let mut hours = DepartmentHours::new();
    hours.add("Fab", dec!(12.5));
    Report {
        date: day("2026-10-18"),
        rows: vec![ReportRow::new("Albatross", hours)],
    }
}

fn stub_mailer(transport: StubTransport) -> Mailer<StubTransport> {
    let plan = MailPlan::from_config(&mail_config()).expect("valid plan");
    Mailer::new(transport, plan, true)
}

#[test]
fn test_parse_mailbox_accepted_forms() {
    let plain = parse_mailbox("example@example.com").expect("plain");
    assert_eq!(plain.name, None);
    assert_eq!(plain.email.to_string(), "example@example.com");

    let bracketed = parse_mailbox("<example@example.com>").expect("bracketed");
    assert_eq!(bracketed.name, None);

    let named = parse_mailbox("Example <example@example.com>").expect("named");
    assert_eq!(named.name.as_deref(), Some("Example"));

    let tight = parse_mailbox("Example<example@example.com>").expect("tight");
    assert_eq!(tight.name.as_deref(), Some("Example"));
    assert_eq!(tight.email.to_string(), "example@example.com");
}

#[test]
fn test_parse_mailbox_rejects_malformed() {
    for bad in ["", "   ", "Example <example@example.com", "not an address", "a <b@c.d> <e@f.g>"] {
        assert!(
            matches!(parse_mailbox(bad), Err(AppError::InvalidAddress(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_mail_plan_requires_sender_and_recipient() {
    let mut cfg = mail_config();
    cfg.from = String::new();
    assert!(matches!(MailPlan::from_config(&cfg), Err(AppError::Config(_))));

    let mut cfg = mail_config();
    cfg.to.clear();
    cfg.cc.clear();
    assert!(matches!(MailPlan::from_config(&cfg), Err(AppError::Config(_))));
}

#[test]
fn test_mail_plan_bad_recipient_is_rejected_at_startup() {
    let mut cfg = mail_config();
    cfg.to.push("Broken <nowhere".into());
    assert!(matches!(
        MailPlan::from_config(&cfg),
        Err(AppError::InvalidAddress(_))
    ));
}

#[test]
fn test_mail_plan_rejects_login_without_password() {
    let mut cfg = mail_config();
    cfg.login = Some("reports".into());
    assert!(matches!(MailPlan::from_config(&cfg), Err(AppError::Config(_))));

    let mut cfg = mail_config();
    cfg.password = Some("hunter2".into());
    cfg.login = Some("  ".into());
    assert!(matches!(MailPlan::from_config(&cfg), Err(AppError::Config(_))));

    let mut cfg = mail_config();
    cfg.login = Some("reports".into());
    cfg.password = Some("hunter2".into());
    assert!(MailPlan::from_config(&cfg).is_ok());
}

#[test]
fn test_smtp_mailer_requires_server() {
    let mut cfg = mail_config();
    cfg.server = String::new();
    assert!(matches!(
        Mailer::<SmtpTransport>::smtp(&cfg),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_send_report_success() {
    let mailer = stub_mailer(StubTransport::new_ok());

    let outcome = mailer.send_report(&report(), None);

    assert_eq!(outcome, DeliveryOutcome::Sent { recipients: 2 });
    let sent = mailer.transport().messages();
    assert_eq!(sent.len(), 1);
    let raw = &sent[0].1;
    assert!(raw.contains("Subject: Department Hours by Boat Report for 2026-10-18."));
    assert!(raw.contains("Albatross"));
}

#[test]
fn test_send_report_transport_failure_is_reported() {
    let mailer = stub_mailer(StubTransport::new_error());

    let outcome = mailer.send_report(&report(), None);

    assert!(matches!(outcome, DeliveryOutcome::Failed(_)));
}

#[test]
fn test_mail_failure_does_not_block_spreadsheet() {
    let out_dir = temp_out_dir("mail_failure_xlsx");
    let mailer = stub_mailer(StubTransport::new_error());
    let opts = SpreadsheetOptions {
        out_dir: out_dir.clone(),
        file_pattern: "boat_hours_%Y-%m-%d.xlsx".into(),
        force: false,
    };

    let summary = ReportLogic::distribute(&report(), Some(&opts), Some(&mailer));

    let expected = out_dir.join("boat_hours_2026-10-18.xlsx");
    assert_eq!(
        summary.spreadsheet,
        Some(SpreadsheetOutcome::Written(expected.clone()))
    );
    assert!(fs::metadata(&expected).expect("xlsx exists").len() > 0);
    assert!(matches!(summary.mail, Some(DeliveryOutcome::Failed(_))));
    assert_eq!(summary.failures().len(), 1);
}

#[test]
fn test_spreadsheet_failure_does_not_block_mail() {
    let out_dir = temp_out_dir("xlsx_failure_mail");
    let existing = out_dir.join("boat_hours_2026-10-18.xlsx");
    fs::write(&existing, b"keep me").expect("pre-existing file");

    let mailer = stub_mailer(StubTransport::new_ok());
    let opts = SpreadsheetOptions {
        out_dir: out_dir.clone(),
        file_pattern: "boat_hours_%Y-%m-%d.xlsx".into(),
        force: false,
    };

    let summary = ReportLogic::distribute(&report(), Some(&opts), Some(&mailer));

    assert!(matches!(
        summary.spreadsheet,
        Some(SpreadsheetOutcome::Failed(_))
    ));
    assert_eq!(summary.mail, Some(DeliveryOutcome::Sent { recipients: 2 }));
    assert_eq!(fs::read(&existing).expect("untouched"), b"keep me");
    // nothing to attach when the spreadsheet was not written
    assert!(!mailer.transport().messages()[0].1.contains("boat_hours_2026-10-18.xlsx"));
}

#[test]
fn test_written_spreadsheet_is_attached() {
    let out_dir = temp_out_dir("xlsx_attached");
    let mailer = stub_mailer(StubTransport::new_ok());
    let opts = SpreadsheetOptions {
        out_dir,
        file_pattern: "hours_%Y%m%d.xlsx".into(),
        force: true,
    };

    let summary = ReportLogic::distribute(&report(), Some(&opts), Some(&mailer));

    assert!(!summary.has_failures());
    let raw = &mailer.transport().messages()[0].1;
    assert!(raw.contains("hours_20261018.xlsx"));
}

#[test]
fn test_force_overwrites_existing_spreadsheet() {
    let out_dir = temp_out_dir("xlsx_force");
    let existing = out_dir.join("boat_hours_2026-10-18.xlsx");
    fs::write(&existing, b"old").expect("pre-existing file");

    let opts = SpreadsheetOptions {
        out_dir,
        file_pattern: "boat_hours_%Y-%m-%d.xlsx".into(),
        force: true,
    };

    let path = ReportLogic::write_spreadsheet(&report(), &opts).expect("written");
    assert_eq!(path, existing);
    assert_ne!(fs::read(&existing).expect("read"), b"old");
}

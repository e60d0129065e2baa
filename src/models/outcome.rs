use std::path::PathBuf;

/// Result of the email destination. Failures are reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent { recipients: usize },
    Failed(String),
}

/// Result of the spreadsheet destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpreadsheetOutcome {
    Written(PathBuf),
    Failed(String),
}

/// What happened to each enabled destination of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionSummary {
    pub spreadsheet: Option<SpreadsheetOutcome>,
    pub mail: Option<DeliveryOutcome>,
}

impl DistributionSummary {
    /// Failure messages of every destination that did not complete.
    pub fn failures(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(SpreadsheetOutcome::Failed(e)) = &self.spreadsheet {
            out.push(format!("spreadsheet: {e}"));
        }
        if let Some(DeliveryOutcome::Failed(e)) = &self.mail {
            out.push(format!("email: {e}"));
        }
        out
    }

    pub fn has_failures(&self) -> bool {
        !self.failures().is_empty()
    }
}

//! "Render all": every catalog report, each isolated from the others.

use foodshare_core::errors::error_code::FoodshareErrorCode;

use crate::errors::ReportError;
use crate::render::Rendered;

/// One report's result inside a batch.
#[derive(Debug)]
pub struct ReportOutcome {
    pub report_id: &'static str,
    pub result: Result<Rendered, ReportError>,
}

impl ReportOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error_code(&self) -> Option<&'static str> {
        self.result.as_ref().err().map(|e| e.error_code())
    }
}

/// Outcomes in catalog order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ReportOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn rendered(&self) -> impl Iterator<Item = &Rendered> + '_ {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &ReportError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.report_id, e)))
    }

    pub fn get(&self, report_id: &str) -> Option<&ReportOutcome> {
        self.outcomes.iter().find(|o| o.report_id == report_id)
    }
}

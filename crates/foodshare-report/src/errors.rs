//! Report pipeline errors.

use foodshare_core::errors::error_code::{self, FoodshareErrorCode};
use foodshare_core::errors::StoreError;

/// Why a chart could not be built for an otherwise valid result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("pie slice in row {row} is not numeric")]
    NonNumericSlice { row: usize },

    #[error("pie slice in row {row} is negative")]
    NegativeSlice { row: usize },

    #[error("pie slices sum to zero")]
    EmptyPie,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unknown report: {0}")]
    UnknownReport(String),

    #[error("report {report}: {source}")]
    Store {
        report: String,
        #[source]
        source: StoreError,
    },

    #[error("report {report}: render failed: {source}")]
    Render {
        report: String,
        #[source]
        source: ChartError,
    },
}

impl ReportError {
    pub fn store(report: &str, source: StoreError) -> Self {
        Self::Store {
            report: report.to_string(),
            source,
        }
    }
}

impl FoodshareErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownReport(_) => error_code::UNKNOWN_REPORT,
            Self::Store { source, .. } => source.error_code(),
            Self::Render { .. } => error_code::RENDER_ERROR,
        }
    }
}

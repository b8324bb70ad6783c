//! # foodshare-report
//!
//! Reporting pipeline for the Foodshare engine: a fixed catalog of
//! aggregate queries, a presentation decision per result (table plus an
//! optional bar/pie/line chart), CSV export, an optional result cache
//! keyed by SQL text, and batch rendering with per-report isolation.

pub mod batch;
pub mod cache;
pub mod catalog;
pub mod chart;
pub mod csv;
pub mod dashboard;
pub mod errors;
pub mod render;

pub use batch::{BatchReport, ReportOutcome};
pub use cache::QueryCache;
pub use catalog::{Catalog, ReportDef, STANDARD_REPORTS};
pub use chart::{ChartKind, ChartPoint, ChartSpec, EncodingType};
pub use dashboard::Dashboard;
pub use errors::{ChartError, ReportError};
pub use render::{choose_chart, render, render_named, CsvExport, Presentation, Rendered, TableView};

//! Report renderer: presentation decision, table view, chart and CSV export.
//!
//! Decision order for a non-empty result:
//! 1. exactly two columns → bar chart sorted by descending y
//! 2. any column named like "percentage" → pie chart
//! 3. otherwise → line chart with point markers
//!
//! A single-column result has no y channel and gets no chart.

use serde::Serialize;
use tracing::{debug, warn};

use foodshare_core::types::{TabularResult, Value};

use crate::chart::{ChartKind, ChartPoint, ChartSpec, EncodingType};
use crate::csv::write_csv;
use crate::errors::{ChartError, ReportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    NoData,
    Data,
}

/// Column headers plus display strings, row for row.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn from_result(result: &TabularResult) -> Self {
        Self {
            headers: result.columns.clone(),
            rows: result
                .rows
                .iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl CsvExport {
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Everything a display layer needs for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub report_id: String,
    pub presentation: Presentation,
    pub table: TableView,
    pub chart: Option<ChartSpec>,
    pub export: CsvExport,
}

impl Rendered {
    pub fn has_data(&self) -> bool {
        self.presentation == Presentation::Data
    }
}

/// Render with the default `<report id>.csv` export name.
pub fn render(report_id: &str, result: &TabularResult) -> Result<Rendered, ReportError> {
    render_named(report_id, result, None)
}

pub fn render_named(
    report_id: &str,
    result: &TabularResult,
    filename: Option<&str>,
) -> Result<Rendered, ReportError> {
    let (presentation, chart) = if result.is_empty() {
        (Presentation::NoData, None)
    } else {
        let chart = choose_chart(result).map_err(|source| ReportError::Render {
            report: report_id.to_string(),
            source,
        })?;
        (Presentation::Data, chart)
    };

    debug!(
        report = report_id,
        rows = result.row_count(),
        chart = chart.as_ref().map(|c| c.kind.as_str()).unwrap_or("none"),
        "report rendered"
    );

    Ok(Rendered {
        report_id: report_id.to_string(),
        presentation,
        table: TableView::from_result(result),
        chart,
        export: CsvExport {
            filename: filename
                .map(str::to_string)
                .unwrap_or_else(|| format!("{report_id}.csv")),
            content: write_csv(result),
        },
    })
}

/// Pick and build the chart for a non-empty result.
pub fn choose_chart(result: &TabularResult) -> Result<Option<ChartSpec>, ChartError> {
    if result.column_count() < 2 {
        return Ok(None);
    }
    let kind = if result.column_count() == 2 {
        ChartKind::Bar
    } else if result
        .columns
        .iter()
        .any(|c| c.to_ascii_lowercase().contains("percentage"))
    {
        ChartKind::Pie
    } else {
        ChartKind::Line
    };

    let (points, y_type) = match kind {
        ChartKind::Pie => (pie_points(result)?, EncodingType::Quantitative),
        ChartKind::Bar => {
            let mut points = row_points(result);
            // Vec::sort_by is stable, so ties keep row order.
            points.sort_by(|a, b| b.y.total_cmp(&a.y));
            (points, y_encoding(result))
        }
        ChartKind::Line => (row_points(result), y_encoding(result)),
    };

    Ok(Some(ChartSpec {
        kind,
        x_field: result.columns[0].clone(),
        y_field: result.columns[1].clone(),
        y_type,
        tooltip: result.columns.clone(),
        points,
    }))
}

/// One point per row for bar and line charts: x = column 0, y = column 1.
fn row_points(result: &TabularResult) -> Vec<ChartPoint> {
    result
        .rows
        .iter()
        .enumerate()
        .map(|(row, cells)| ChartPoint {
            x: cells.first().cloned().unwrap_or(Value::Null),
            y: cells.get(1).cloned().unwrap_or(Value::Null),
            label: None,
            row,
        })
        .collect()
}

/// Quantitative when every non-null y is a number, nominal otherwise.
fn y_encoding(result: &TabularResult) -> EncodingType {
    let mut numeric = 0usize;
    let mut text = 0usize;
    for value in result.column(1) {
        match value {
            Value::Integer(_) | Value::Real(_) => numeric += 1,
            Value::Text(_) => text += 1,
            Value::Null => {}
        }
    }
    if text == 0 {
        return EncodingType::Quantitative;
    }
    if numeric > 0 {
        warn!(
            column = %result.columns[1],
            numeric,
            text,
            "mixed numeric and text values; plotting as nominal"
        );
    }
    EncodingType::Nominal
}

fn pie_points(result: &TabularResult) -> Result<Vec<ChartPoint>, ChartError> {
    let mut slices = Vec::with_capacity(result.row_count());
    for (row, cells) in result.rows.iter().enumerate() {
        let cell = cells.get(1).cloned().unwrap_or(Value::Null);
        let share = cell.as_f64().ok_or(ChartError::NonNumericSlice { row })?;
        if share < 0.0 {
            return Err(ChartError::NegativeSlice { row });
        }
        slices.push((row, cells.first().cloned().unwrap_or(Value::Null), cell, share));
    }

    let total: f64 = slices.iter().map(|(_, _, _, share)| share).sum();
    if total <= 0.0 {
        return Err(ChartError::EmptyPie);
    }

    Ok(slices
        .into_iter()
        .map(|(row, x, y, share)| ChartPoint {
            x,
            y,
            label: Some(format!("{:.1}%", share / total * 100.0)),
            row,
        })
        .collect())
}

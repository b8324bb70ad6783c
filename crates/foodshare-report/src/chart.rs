//! Chart specifications produced by the renderer.
//!
//! A [`ChartSpec`] is display-agnostic: a kind, the two encoding columns,
//! the tooltip columns and the points in draw order. [`ChartSpec::to_vega_lite`]
//! turns it into a document any Vega-Lite front end can draw.

use serde::Serialize;
use serde_json::{json, Value as Json};

use foodshare_core::types::Value;

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Line => "line",
        }
    }
}

/// Vega-Lite measurement type of the y channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingType {
    Quantitative,
    Nominal,
}

impl EncodingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quantitative => "quantitative",
            Self::Nominal => "nominal",
        }
    }
}

/// One drawn mark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Category (bar/pie) or x position (line).
    pub x: Value,
    /// Numeric for pie slices; any value for bar and line charts.
    pub y: Value,
    /// Pie slice label, e.g. `"66.7%"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Source row in the tabular result.
    pub row: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_field: String,
    pub y_field: String,
    pub y_type: EncodingType,
    pub tooltip: Vec<String>,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn x_values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.points.iter().map(|p| &p.x)
    }

    /// Vega-Lite v5 document with inline data.
    ///
    /// Rows carry the x/y fields plus any tooltip fields taken from the
    /// source rows; `source_rows` must be the rows the points index into.
    pub fn to_vega_lite(&self, columns: &[String], source_rows: &[Vec<Value>]) -> Json {
        let values: Vec<Json> = self
            .points
            .iter()
            .map(|point| {
                let mut record = serde_json::Map::new();
                if let Some(row) = source_rows.get(point.row) {
                    for (name, cell) in columns.iter().zip(row) {
                        if self.tooltip.contains(name) {
                            record.insert(name.clone(), cell_json(cell));
                        }
                    }
                }
                record.insert(self.x_field.clone(), cell_json(&point.x));
                record.insert(self.y_field.clone(), cell_json(&point.y));
                if let Some(label) = &point.label {
                    record.insert("label".to_string(), json!(label));
                }
                Json::Object(record)
            })
            .collect();

        let tooltip: Vec<Json> = self.tooltip.iter().map(|f| json!({ "field": f })).collect();
        let y_type = self.y_type.as_str();

        match self.kind {
            ChartKind::Bar => {
                let order: Vec<Json> = self.points.iter().map(|p| cell_json(&p.x)).collect();
                json!({
                    "$schema": VEGA_LITE_SCHEMA,
                    "data": { "values": values },
                    "mark": "bar",
                    "encoding": {
                        "x": { "field": self.x_field, "type": "nominal", "sort": order },
                        "y": { "field": self.y_field, "type": y_type },
                        "tooltip": tooltip,
                    }
                })
            }
            ChartKind::Pie => json!({
                "$schema": VEGA_LITE_SCHEMA,
                "data": { "values": values },
                "layer": [
                    { "mark": { "type": "arc" } },
                    {
                        "mark": { "type": "text", "radiusOffset": 20 },
                        "encoding": { "text": { "field": "label", "type": "nominal" } }
                    }
                ],
                "encoding": {
                    "theta": { "field": self.y_field, "type": "quantitative", "stack": true },
                    "color": { "field": self.x_field, "type": "nominal" },
                    "tooltip": tooltip,
                }
            }),
            ChartKind::Line => json!({
                "$schema": VEGA_LITE_SCHEMA,
                "data": { "values": values },
                "mark": { "type": "line", "point": true },
                "encoding": {
                    "x": { "field": self.x_field, "type": "nominal", "sort": null },
                    "y": { "field": self.y_field, "type": y_type },
                    "tooltip": tooltip,
                }
            }),
        }
    }
}

fn cell_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Integer(i) => json!(i),
        Value::Real(r) => json!(r),
        Value::Text(s) => json!(s),
    }
}

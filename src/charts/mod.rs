//! Chart specification builders.
//!
//! Each builder is a pure mapping from one summary table to a
//! Plotly-compatible figure (traces plus layout), parameterized by the
//! shared palette and static title strings. Builders never mutate their
//! input and hold no state between invocations.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};

use crate::aggregate::linear_fit;
use crate::lookups::{PALETTE, palette_cycle};

/// A declarative chart: Plotly traces plus layout
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    /// Plotly trace objects
    pub data: Vec<Value>,
    /// Plotly layout object
    pub layout: Value,
}

impl Figure {
    /// The figure as a single JSON object
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "data": self.data, "layout": self.layout })
    }
}

/// Continuous color scale built from the shared palette
fn palette_scale() -> Value {
    let last = (PALETTE.len() - 1) as f64;
    Value::Array(
        PALETTE
            .iter()
            .enumerate()
            .map(|(index, color)| json!([index as f64 / last, color]))
            .collect(),
    )
}

/// USA-states choropleth keyed by 2-letter postal code
#[must_use]
pub fn choropleth(rows: &[(String, f64)], value_label: &str, title: &str) -> Figure {
    let locations: Vec<&str> = rows.iter().map(|(code, _)| code.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|(_, value)| *value).collect();
    Figure {
        data: vec![json!({
            "type": "choropleth",
            "locationmode": "USA-states",
            "locations": locations,
            "z": values,
            "colorscale": palette_scale(),
            "colorbar": { "title": { "text": value_label } },
        })],
        layout: json!({
            "title": { "text": title },
            "geo": { "scope": "usa", "showframe": false, "showcoastlines": false },
        }),
    }
}

/// Pie chart of category shares
#[must_use]
pub fn pie(rows: &[(String, f64)], title: &str) -> Figure {
    let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|(_, value)| *value).collect();
    Figure {
        data: vec![json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "textinfo": "label+percent",
            "marker": { "colors": palette_cycle(rows.len()) },
        })],
        layout: json!({ "title": { "text": title } }),
    }
}

/// Donut chart of category shares.
///
/// A two-way split uses the palette's accent pair; anything else cycles
/// the full palette.
#[must_use]
pub fn donut(rows: &[(String, f64)], title: &str) -> Figure {
    let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|(_, value)| *value).collect();
    let colors = if rows.len() == 2 {
        vec![PALETTE[2], PALETTE[5]]
    } else {
        palette_cycle(rows.len())
    };
    Figure {
        data: vec![json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "textinfo": "label+percent",
            "hole": 0.4,
            "marker": { "colors": colors },
        })],
        layout: json!({ "title": { "text": title } }),
    }
}

/// Vertical bar chart of one value per category
#[must_use]
pub fn bar_vertical(rows: &[(String, f64)], x_label: &str, y_label: &str, title: &str) -> Figure {
    let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|(_, value)| *value).collect();
    Figure {
        data: vec![json!({
            "type": "bar",
            "x": labels,
            "y": values,
            "marker": { "color": palette_cycle(rows.len()) },
        })],
        layout: json!({
            "title": { "text": title },
            "xaxis": { "title": { "text": x_label }, "tickangle": 45 },
            "yaxis": { "title": { "text": y_label } },
        }),
    }
}

/// Horizontal bar chart of one value per category
#[must_use]
pub fn bar_horizontal(rows: &[(String, f64)], x_label: &str, y_label: &str, title: &str) -> Figure {
    let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|(_, value)| *value).collect();
    Figure {
        data: vec![json!({
            "type": "bar",
            "orientation": "h",
            "x": values,
            "y": labels,
            "marker": { "color": palette_cycle(rows.len()) },
        })],
        layout: json!({
            "title": { "text": title },
            "xaxis": { "title": { "text": x_label } },
            "yaxis": { "title": { "text": y_label } },
        }),
    }
}

/// Two monthly series on independent y-axes, the second overlaying on the
/// right-hand side
#[must_use]
pub fn dual_axis_series(
    rows: &[(NaiveDate, f64, f64)],
    left_name: &str,
    right_name: &str,
    x_label: &str,
    title: &str,
) -> Figure {
    let months: Vec<String> = rows
        .iter()
        .map(|(month, _, _)| month.format("%b").to_string())
        .collect();
    let left: Vec<f64> = rows.iter().map(|(_, value, _)| *value).collect();
    let right: Vec<f64> = rows.iter().map(|(_, _, value)| *value).collect();
    Figure {
        data: vec![
            json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": left_name,
                "x": months,
                "y": left,
                "line": { "color": PALETTE[5] },
            }),
            json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": right_name,
                "x": months,
                "y": right,
                "yaxis": "y2",
                "line": { "color": "black" },
            }),
        ],
        layout: json!({
            "title": { "text": title },
            "xaxis": { "title": { "text": x_label }, "tickangle": 45 },
            "yaxis": { "title": { "text": left_name } },
            "yaxis2": {
                "title": { "text": right_name },
                "overlaying": "y",
                "side": "right",
            },
            "legend": { "orientation": "h", "x": 0.1, "y": 1.1 },
        }),
    }
}

/// One panel of a [`trend_grid`]: a yearly series with its own title
#[derive(Debug, Clone)]
pub struct TrendPanel {
    /// Panel title shown in the legend
    pub title: String,
    /// (year, value) points
    pub points: Vec<(i32, f64)>,
}

/// 2x2 grid of independent yearly trend panels
#[must_use]
pub fn trend_grid(panels: &[TrendPanel], title: &str) -> Figure {
    let data = panels
        .iter()
        .enumerate()
        .map(|(index, panel)| {
            let years: Vec<i32> = panel.points.iter().map(|(year, _)| *year).collect();
            let values: Vec<f64> = panel.points.iter().map(|(_, value)| *value).collect();
            let axis_suffix = if index == 0 {
                String::new()
            } else {
                (index + 1).to_string()
            };
            json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": panel.title,
                "x": years,
                "y": values,
                "xaxis": format!("x{axis_suffix}"),
                "yaxis": format!("y{axis_suffix}"),
                "line": { "color": PALETTE[4 + index % 4] },
            })
        })
        .collect();
    Figure {
        data,
        layout: json!({
            "title": { "text": title },
            "grid": { "rows": 2, "columns": 2, "pattern": "independent" },
            "height": 700,
            "showlegend": true,
        }),
    }
}

/// Aggregated scatter points with a fitted regression line
#[must_use]
pub fn scatter_regression(
    points: &[(f64, f64)],
    x_label: &str,
    y_label: &str,
    title: &str,
) -> Figure {
    let xs: Vec<f64> = points.iter().map(|(x, _)| *x).collect();
    let ys: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
    let (slope, intercept) = linear_fit(points);
    let (line_x, line_y) = match (
        xs.iter().copied().reduce(f64::min),
        xs.iter().copied().reduce(f64::max),
    ) {
        (Some(min_x), Some(max_x)) => (
            vec![min_x, max_x],
            vec![slope * min_x + intercept, slope * max_x + intercept],
        ),
        _ => (Vec::new(), Vec::new()),
    };
    Figure {
        data: vec![
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": "Observed",
                "x": xs,
                "y": ys,
                "marker": { "color": PALETTE[5], "size": 10 },
            }),
            json!({
                "type": "scatter",
                "mode": "lines",
                "name": "Trend",
                "x": line_x,
                "y": line_y,
                "line": { "color": PALETTE[7] },
            }),
        ],
        layout: json!({
            "title": { "text": title },
            "xaxis": { "title": { "text": x_label } },
            "yaxis": { "title": { "text": y_label } },
        }),
    }
}

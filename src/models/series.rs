// Chart-ready series

use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point<X> {
    pub x: X,
    pub y: f64,
}

/// Ordered (x, y) points plus the y domain a renderer scales against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries<X> {
    pub points: Vec<Point<X>>,
    pub y_min: f64,
    pub y_max: f64,
}

impl<X> ChartSeries<X> {
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            y_min: 0.0,
            y_max: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Y values in point order (the `data` array of a line chart dataset).
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

impl<X: Display> ChartSeries<X> {
    /// X values rendered as axis labels, in point order.
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.x.to_string()).collect()
    }
}

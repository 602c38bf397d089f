use serde::{Deserialize, Serialize};

use crate::domain::scalar::Scalar;
use crate::domain::settings::{Attributes, Settings};

/// What a single series plots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SeriesData {
    /// Parallel numeric columns, all of the same length
    /// (x/y, candlestick x:boxmin:whiskermin:whiskermax:boxmax, ...)
    Columns(Vec<Vec<f64>>),
    /// Engine-side expression passed through verbatim
    Expression(String),
}

impl SeriesData {
    /// Number of rows; 0 for expressions.
    pub fn row_count(&self) -> usize {
        match self {
            SeriesData::Columns(cols) => cols.first().map_or(0, |c| c.len()),
            SeriesData::Expression(_) => 0,
        }
    }
}

/// One plotted series: data plus its style mapping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeriesArg {
    pub data: SeriesData,
    pub style: Attributes,
}

impl SeriesArg {
    pub fn columns(columns: Vec<Vec<f64>>, style: Attributes) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "series columns must have equal length"
        );
        Self {
            data: SeriesData::Columns(columns),
            style,
        }
    }

    pub fn expression(expression: impl Into<String>, style: Attributes) -> Self {
        Self {
            data: SeriesData::Expression(expression.into()),
            style,
        }
    }

    /// Legend title, if the style carries one.
    pub fn title(&self) -> Option<&str> {
        self.style
            .get("title")
            .and_then(|v| v.as_ref())
            .and_then(Scalar::as_text)
    }
}

/// A fully built plot request: ordered series plus ordered settings.
///
/// Built fresh by the `builders` functions and consumed by `engine::emit`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PlotSpec {
    series: Vec<SeriesArg>,
    settings: Settings,
}

impl PlotSpec {
    pub fn new(series: Vec<SeriesArg>, settings: Settings) -> Self {
        Self { series, settings }
    }

    pub fn series(&self) -> &[SeriesArg] {
        &self.series
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

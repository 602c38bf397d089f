//! Plot-spec builders.
//!
//! Pure functions from caller data plus presentation options to a `PlotSpec`.
//! All input validation lives here, so anything these return can be emitted
//! to a sink as-is.

pub mod boxes;
pub mod histogram;
pub mod line;

pub use boxes::{BoxOptions, build_box_spec};
pub use histogram::{HistogramOptions, build_histogram_spec, tick_interval};
pub use line::build_line_spec;

use crate::config::PRINT_SPEC_SUMMARY;
use crate::domain::{PlotSpec, Scalar};
use crate::error::{PlotError, Result};

/// Legend titles: the caller's labels, or `"0"`, `"1"`, ... when omitted.
pub(crate) fn series_labels(labels: Option<&[String]>, n_series: usize) -> Result<Vec<String>> {
    match labels {
        Some(labels) if labels.len() != n_series => Err(PlotError::invalid(format!(
            "got {} labels for {} series",
            labels.len(),
            n_series
        ))),
        Some(labels) => Ok(labels.to_vec()),
        None => Ok((0..n_series).map(|i| i.to_string()).collect()),
    }
}

/// Axis bounds must be finite with `high > low`.
pub(crate) fn check_range(axis: &str, low: f64, high: f64) -> Result<()> {
    if !low.is_finite() || !high.is_finite() {
        return Err(PlotError::invalid(format!(
            "{} range [{}:{}] must have finite bounds",
            axis, low, high
        )));
    }
    if high <= low {
        return Err(PlotError::invalid(format!(
            "degenerate {} range: high ({}) must be greater than low ({})",
            axis, high, low
        )));
    }
    Ok(())
}

/// Whole degrees print as integers (`rotate by 90`), anything else as a float.
pub(crate) fn degrees(value: f64) -> Scalar {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Scalar::Int(value as i64)
    } else {
        Scalar::Float(value)
    }
}

/// gnuplot color specification for `fillcolor`.
pub(crate) fn rgb(color: &str) -> Scalar {
    Scalar::raw(format!("rgb \"{}\"", color))
}

pub(crate) fn log_summary(kind: &str, spec: &PlotSpec) {
    if PRINT_SPEC_SUMMARY {
        log::debug!(
            "{} spec: {} series, {} settings",
            kind,
            spec.series().len(),
            spec.settings().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_are_indices() {
        assert_eq!(series_labels(None, 3).unwrap(), vec!["0", "1", "2"]);
    }

    #[test]
    fn label_count_must_match() {
        let labels = vec!["a".to_string()];
        assert!(matches!(
            series_labels(Some(&labels), 2),
            Err(PlotError::InvalidInput(_))
        ));
    }

    #[test]
    fn ranges_need_finite_increasing_bounds() {
        assert!(check_range("x", 0.0, 1.0).is_ok());
        for (low, high) in [(1.0, 1.0), (2.0, 1.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
            assert!(matches!(check_range("x", low, high), Err(PlotError::InvalidInput(_))));
        }
    }

    #[test]
    fn degrees_keep_integers_integral() {
        assert_eq!(degrees(90.0), Scalar::Int(90));
        assert_eq!(degrees(-45.0), Scalar::Int(-45));
        assert_eq!(degrees(22.5), Scalar::Float(22.5));
    }
}

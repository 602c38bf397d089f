use serde::{Deserialize, Serialize};

use crate::domain::{OutputTarget, SeriesArg, Token};
use crate::error::{PlotError, Result};
use crate::sink::PlotSink;

/// One call as seen by a sink.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SinkCall {
    Set { key: String, tokens: Vec<Token> },
    Plot(Vec<SeriesArg>),
    Reset,
    OutputTarget(OutputTarget),
    MultiplotLayout { rows: usize, cols: usize },
    UnsetMultiplot,
}

/// Sink that only remembers what it was asked to do.
/// Handy for dry runs and for asserting call order in tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Vec<SinkCall>,
    /// `set` calls for this key are refused, to exercise error paths
    reject_key: Option<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that refuses any `set` of `key`.
    pub fn rejecting(key: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            reject_key: Some(key.into()),
        }
    }

    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<SinkCall> {
        self.calls
    }

    /// Keys of all `set` calls, in order.
    pub fn set_keys(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Set { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn plot_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::Plot(_)))
            .count()
    }
}

impl PlotSink for Recorder {
    fn set(&mut self, key: &str, tokens: &[Token]) -> Result<()> {
        if self.reject_key.as_deref() == Some(key) {
            return Err(PlotError::rejected(format!("unsupported key: {}", key)));
        }
        self.calls.push(SinkCall::Set {
            key: key.to_string(),
            tokens: tokens.to_vec(),
        });
        Ok(())
    }

    fn plot(&mut self, series: &[SeriesArg]) -> Result<()> {
        self.calls.push(SinkCall::Plot(series.to_vec()));
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.calls.push(SinkCall::Reset);
        Ok(())
    }

    fn set_output_target(&mut self, target: &OutputTarget) -> Result<()> {
        self.calls.push(SinkCall::OutputTarget(target.clone()));
        Ok(())
    }

    fn set_multiplot_layout(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.calls.push(SinkCall::MultiplotLayout { rows, cols });
        Ok(())
    }

    fn unset_multiplot(&mut self) -> Result<()> {
        self.calls.push(SinkCall::UnsetMultiplot);
        Ok(())
    }
}

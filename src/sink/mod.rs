//! Plot sinks: whatever ends up receiving the expanded `set`/`plot` calls.
//!
//! The core never talks to gnuplot directly. It drives a `PlotSink`, and the
//! caller decides which one (a recorder, a script writer, a live gnuplot
//! process, or any of those wrapped in `InlineCapture`).

pub mod inline;
pub mod process;
pub mod recorder;
pub mod script;

pub use inline::InlineCapture;
pub use process::GnuplotProcess;
pub use recorder::{Recorder, SinkCall};
pub use script::ScriptSink;

use crate::domain::{OutputTarget, SeriesArg, Token};
use crate::error::Result;

/// Capability the engine drives. Every method may refuse with
/// `PlotError::SinkRejected`; callers get that error back unchanged.
pub trait PlotSink {
    /// `set <key> <tokens...>`
    fn set(&mut self, key: &str, tokens: &[Token]) -> Result<()>;

    /// One plot command with all series, in order.
    fn plot(&mut self, series: &[SeriesArg]) -> Result<()>;

    fn reset(&mut self) -> Result<()>;

    fn set_output_target(&mut self, target: &OutputTarget) -> Result<()>;

    fn set_multiplot_layout(&mut self, rows: usize, cols: usize) -> Result<()>;

    fn unset_multiplot(&mut self) -> Result<()>;
}

impl<S: PlotSink + ?Sized> PlotSink for &mut S {
    fn set(&mut self, key: &str, tokens: &[Token]) -> Result<()> {
        (**self).set(key, tokens)
    }

    fn plot(&mut self, series: &[SeriesArg]) -> Result<()> {
        (**self).plot(series)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn set_output_target(&mut self, target: &OutputTarget) -> Result<()> {
        (**self).set_output_target(target)
    }

    fn set_multiplot_layout(&mut self, rows: usize, cols: usize) -> Result<()> {
        (**self).set_multiplot_layout(rows, cols)
    }

    fn unset_multiplot(&mut self) -> Result<()> {
        (**self).unset_multiplot()
    }
}

use crate::config::PLOT_CONFIG;
use crate::domain::{OutputTarget, SeriesArg, Terminal, Token};
use crate::error::Result;
use crate::sink::PlotSink;

/// Decorator for notebook-style rendering: the image always comes back
/// inline (on the engine's stdout) in `terminal`, whatever output target the
/// caller asks for.
///
/// The inline terminal is selected before the first command reaches the
/// inner sink, so callers that never ask for a target still get it.
pub struct InlineCapture<S: PlotSink> {
    inner: S,
    terminal: Terminal,
    terminal_sent: bool,
}

impl<S: PlotSink> InlineCapture<S> {
    pub fn new(inner: S) -> Self {
        Self::with_terminal(inner, PLOT_CONFIG.inline_terminal)
    }

    pub fn with_terminal(inner: S, terminal: Terminal) -> Self {
        Self {
            inner,
            terminal,
            terminal_sent: false,
        }
    }

    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn send_terminal(&mut self) -> Result<()> {
        self.inner
            .set_output_target(&OutputTarget::inline(self.terminal))?;
        self.terminal_sent = true;
        Ok(())
    }

    fn ensure_terminal(&mut self) -> Result<()> {
        if self.terminal_sent {
            return Ok(());
        }
        self.send_terminal()
    }
}

impl<S: PlotSink> PlotSink for InlineCapture<S> {
    fn set(&mut self, key: &str, tokens: &[Token]) -> Result<()> {
        self.ensure_terminal()?;
        self.inner.set(key, tokens)
    }

    fn plot(&mut self, series: &[SeriesArg]) -> Result<()> {
        self.ensure_terminal()?;
        self.inner.plot(series)
    }

    fn reset(&mut self) -> Result<()> {
        self.ensure_terminal()?;
        self.inner.reset()
    }

    fn set_output_target(&mut self, target: &OutputTarget) -> Result<()> {
        if target.terminal != self.terminal || target.path.is_some() {
            log::debug!(
                "inline capture: ignoring requested {} target {:?}",
                target.terminal,
                target.path
            );
        }
        self.send_terminal()
    }

    fn set_multiplot_layout(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.ensure_terminal()?;
        self.inner.set_multiplot_layout(rows, cols)
    }

    fn unset_multiplot(&mut self) -> Result<()> {
        self.ensure_terminal()?;
        self.inner.unset_multiplot()
    }
}

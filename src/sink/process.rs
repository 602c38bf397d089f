use std::process::{Child, ChildStdin, Command, Stdio};

use crate::domain::{OutputTarget, SeriesArg, Token};
use crate::error::{PlotError, Result};
use crate::sink::{PlotSink, ScriptSink};

/// A running `gnuplot` subprocess fed through its stdin.
///
/// Commands are rendered by a `ScriptSink` as they arrive. `finish` closes
/// stdin, waits for gnuplot to exit and hands back whatever it printed on
/// stdout (the image itself when no output file was set).
pub struct GnuplotProcess {
    pub name: String,
    child: Option<Child>,
    script: Option<ScriptSink<ChildStdin>>,
}

impl GnuplotProcess {
    /// Spawn `gnuplot` from `PATH`.
    pub fn spawn_default() -> Result<Self> {
        Self::spawn("gnuplot", &[])
    }

    /// Spawn a gnuplot-compatible program reading commands from stdin.
    pub fn spawn(command: &str, args: &[&str]) -> Result<Self> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| PlotError::rejected(format!("failed to spawn {}: {}", command, e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| PlotError::rejected(format!("{} has no stdin", command)))?;

        log::debug!("spawned {} (pid {})", command, child.id());

        Ok(Self {
            name: command.to_string(),
            child: Some(child),
            script: Some(ScriptSink::new(stdin)),
        })
    }

    fn script(&mut self) -> Result<&mut ScriptSink<ChildStdin>> {
        let name = &self.name;
        self.script
            .as_mut()
            .ok_or_else(|| PlotError::rejected(format!("{} stdin already closed", name)))
    }

    /// Close stdin and wait. A non-zero exit becomes `SinkRejected` carrying gnuplot's stderr.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        // Dropping the writer closes the pipe, which is gnuplot's end-of-script.
        drop(self.script.take());

        let child = self
            .child
            .take()
            .ok_or_else(|| PlotError::rejected(format!("{} already finished", self.name)))?;
        let output = child
            .wait_with_output()
            .map_err(|e| PlotError::rejected(format!("failed to wait for {}: {}", self.name, e)))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(PlotError::rejected(format!(
                "{} exited with {}: {}",
                self.name,
                output.status,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            log::warn!("{} reported: {}", self.name, stderr.trim());
        }
        Ok(output.stdout)
    }
}

impl PlotSink for GnuplotProcess {
    fn set(&mut self, key: &str, tokens: &[Token]) -> Result<()> {
        self.script()?.set(key, tokens)
    }

    fn plot(&mut self, series: &[SeriesArg]) -> Result<()> {
        self.script()?.plot(series)
    }

    fn reset(&mut self) -> Result<()> {
        self.script()?.reset()
    }

    fn set_output_target(&mut self, target: &OutputTarget) -> Result<()> {
        self.script()?.set_output_target(target)
    }

    fn set_multiplot_layout(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.script()?.set_multiplot_layout(rows, cols)
    }

    fn unset_multiplot(&mut self) -> Result<()> {
        self.script()?.unset_multiplot()
    }
}

impl Drop for GnuplotProcess {
    fn drop(&mut self) {
        drop(self.script.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

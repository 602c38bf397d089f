use itertools::Itertools;
use std::io::Write;

use crate::config::PRINT_SCRIPT_LINES;
use crate::domain::scalar::engine_word;
use crate::domain::{Attributes, OutputTarget, SeriesArg, SeriesData, Token};
use crate::error::{PlotError, Result};
use crate::sink::PlotSink;
use crate::utils::{format_number, quote_text};

/// Renders sink calls as gnuplot command text into any writer.
///
/// Column data goes into inline data blocks (`$data0 << EOD`) written right
/// before the `plot` line that uses them, so the script is self-contained.
///
/// # Safety of the output
/// The script is written verbatim. Feeding untrusted labels or expressions to
/// gnuplot can run arbitrary commands (`system`), so sanitize user input first.
pub struct ScriptSink<W: Write> {
    writer: W,
    next_block: usize,
}

impl<W: Write> ScriptSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_block: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, line: &str) -> Result<()> {
        if PRINT_SCRIPT_LINES {
            log::trace!("gnuplot> {}", line);
        }
        writeln!(self.writer, "{}", line)
            .map_err(|e| PlotError::rejected(format!("failed to write gnuplot script: {}", e)))
    }

    fn write_data_block(&mut self, columns: &[Vec<f64>]) -> Result<String> {
        let name = format!("$data{}", self.next_block);
        self.next_block += 1;

        self.line(&format!("{} << EOD", name))?;
        let rows = columns.first().map_or(0, |c| c.len());
        for row in 0..rows {
            let line = columns
                .iter()
                .map(|col| col.get(row).map_or_else(|| "NaN".to_string(), |v| format_number(*v)))
                .join(" ");
            self.line(&line)?;
        }
        self.line("EOD")?;
        Ok(name)
    }
}

/// `using` has to come before the other plot modifiers in gnuplot.
fn render_style(style: &Attributes) -> String {
    let (using, rest): (Vec<_>, Vec<_>) = style.iter().partition(|(k, _)| *k == "using");
    using
        .into_iter()
        .chain(rest)
        .map(|(name, value)| match value {
            Some(v) => Token::Named(name.to_string(), v.clone()).to_string(),
            None => Token::Flag(name.to_string()).to_string(),
        })
        .join(" ")
}

impl<W: Write> PlotSink for ScriptSink<W> {
    fn set(&mut self, key: &str, tokens: &[Token]) -> Result<()> {
        let line = std::iter::once(format!("set {}", engine_word(key)))
            .chain(tokens.iter().map(|t| t.to_string()))
            .join(" ");
        self.line(&line)
    }

    fn plot(&mut self, series: &[SeriesArg]) -> Result<()> {
        if series.is_empty() {
            return Err(PlotError::rejected("plot needs at least one series"));
        }

        let mut elements = Vec::with_capacity(series.len());
        for arg in series {
            let source = match &arg.data {
                SeriesData::Columns(columns) => self.write_data_block(columns)?,
                SeriesData::Expression(expr) => expr.clone(),
            };
            let style = render_style(&arg.style);
            elements.push(if style.is_empty() {
                source
            } else {
                format!("{} {}", source, style)
            });
        }

        self.line(&format!("plot {}", elements.join(", ")))?;
        self.writer
            .flush()
            .map_err(|e| PlotError::rejected(format!("failed to flush gnuplot script: {}", e)))
    }

    fn reset(&mut self) -> Result<()> {
        self.line("reset")
    }

    fn set_output_target(&mut self, target: &OutputTarget) -> Result<()> {
        self.line(&format!("set terminal {}", target.terminal))?;
        if target.terminal.is_interactive() {
            return Ok(());
        }
        match &target.path {
            Some(path) => self.line(&format!("set output {}", quote_text(&path.to_string_lossy()))),
            None => self.line("set output"),
        }
    }

    fn set_multiplot_layout(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.line(&format!("set multiplot layout {},{}", rows, cols))
    }

    fn unset_multiplot(&mut self) -> Result<()> {
        self.line("unset multiplot")
    }
}

#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod builders;
pub mod config;
pub mod domain;
pub mod error;
pub mod sink;
pub mod utils;

// The engine: spec -> sink calls
pub mod engine;

// Re-export commonly used types
pub use builders::{
    BoxOptions, HistogramOptions, build_box_spec, build_histogram_spec, build_line_spec,
};
pub use domain::{OutputTarget, PlotSpec, Terminal};
pub use engine::{emit, emit_multiplot, render};
pub use error::{PlotError, Result};
pub use sink::{GnuplotProcess, InlineCapture, PlotSink, Recorder, ScriptSink};

// CLI argument parsing
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: PlotCommand,

    /// Write the image to this file instead of gnuplot's default output
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Terminal used together with --out
    #[arg(long, global = true, default_value_t = Terminal::Gif)]
    pub terminal: Terminal,

    /// Force an inline terminal and print the image bytes on stdout
    #[arg(long, global = true, default_value_t = false)]
    pub inline: bool,

    /// Print the gnuplot script instead of running gnuplot
    #[arg(long, global = true, default_value_t = false)]
    pub script: bool,

    /// Print the built plot spec as JSON and exit
    #[arg(long, global = true, default_value_t = false)]
    pub dump_spec: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlotCommand {
    /// Two series as connected points. Input: `[[y0...], [y1...]]`
    Line { input: PathBuf },
    /// Min/max boxes. Input: `{"rows": [...], "titles": [...], "options": {...}}`
    Box { input: PathBuf },
    /// Histograms. Input: `{"data": [...], "options": {...}}`
    Hist { input: PathBuf },
}

impl PlotCommand {
    pub fn input(&self) -> &PathBuf {
        match self {
            PlotCommand::Line { input } | PlotCommand::Box { input } | PlotCommand::Hist { input } => {
                input
            }
        }
    }
}

impl Cli {
    /// `None` means "leave gnuplot's output where it is".
    pub fn output_target(&self) -> Option<OutputTarget> {
        self.out
            .as_ref()
            .map(|path| OutputTarget::file(self.terminal, path))
    }
}

/// JSON body of `box` input files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoxInput {
    pub rows: Vec<Vec<f64>>,
    pub titles: Vec<String>,
    #[serde(default)]
    pub options: BoxOptions,
}

/// JSON body of `hist` input files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistogramInput {
    pub data: Vec<Vec<f64>>,
    #[serde(default)]
    pub options: HistogramOptions,
}

/// Parse `json` according to `command` and build the matching spec.
pub fn build_from_json(command: &PlotCommand, json: &str) -> anyhow::Result<PlotSpec> {
    let spec = match command {
        PlotCommand::Line { .. } => {
            let series: Vec<Vec<f64>> = serde_json::from_str(json)?;
            build_line_spec(&series)?
        }
        PlotCommand::Box { .. } => {
            let input: BoxInput = serde_json::from_str(json)?;
            build_box_spec(&input.rows, &input.titles, &input.options)?
        }
        PlotCommand::Hist { .. } => {
            let input: HistogramInput = serde_json::from_str(json)?;
            build_histogram_spec(&input.data, &input.options)?
        }
    };
    Ok(spec)
}

//! Configuration module for the plot template library.

mod debug; // Private: callers go through the re-exports below
pub use debug::{PRINT_SCRIPT_LINES, PRINT_SINK_CALLS, PRINT_SPEC_SUMMARY};

pub mod plot;

pub use plot::{BoxStyleConfig, HistogramStyleConfig, LineStyleConfig, PLOT_CONFIG, PlotConfig};

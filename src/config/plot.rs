//! Plot presentation defaults

use crate::domain::output::Terminal;

/// Fixed look of the two-series line chart
pub struct LineStyleConfig {
    /// Colors for series 0 and 1 (no alpha channel)
    pub colors: [&'static str; 2],
    pub y_range: (f64, f64),
    pub point_type: i64,
    pub point_size: f64,
}

/// Defaults for candlestick-style min/max boxes
pub struct BoxStyleConfig {
    /// Base RGB colors; the alpha channel is prefixed at build time
    pub base_colors: [&'static str; 4],
    pub alpha_pct: u32,
    /// Rotation applied to user supplied x tick labels
    pub xtick_rotation: i64,
}

/// Defaults for histograms (pileup and clustered)
pub struct HistogramStyleConfig {
    pub base_colors: [&'static str; 4],
    pub alpha_pct: u32,
    pub bins: usize,
    /// Upper bound accepted for `bins`
    pub max_bins: usize,
    pub y_min: f64,
    /// Head room above the tallest bucket when ymax is not given
    pub y_headroom: f64,
    pub rotate_degrees: f64,
    pub figsize: f64,
    // Clustered-only knobs
    pub cluster_gap: i64,
    pub cluster_box_width: f64,
}

/// The Master Plot Configuration
pub struct PlotConfig {
    pub line: LineStyleConfig,
    pub boxes: BoxStyleConfig,
    pub histogram: HistogramStyleConfig,
    /// Terminal forced by `InlineCapture` when none is given
    pub inline_terminal: Terminal,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line: LineStyleConfig {
        colors: ["#1199dd", "#99dd11"],
        y_range: (0.0, 50.0),
        point_type: 7,
        point_size: 0.7,
    },

    boxes: BoxStyleConfig {
        base_colors: ["CC0000", "00CC00", "0000CC", "AAAA00"],
        alpha_pct: 60,
        xtick_rotation: 90,
    },

    histogram: HistogramStyleConfig {
        // Last entry is darker than the box palette's yellow on purpose: boxes overlap here
        base_colors: ["CC0000", "00CC00", "0000CC", "888800"],
        alpha_pct: 33,
        bins: 10,
        max_bins: 10_000,
        y_min: 0.0,
        y_headroom: 1.1,
        rotate_degrees: 45.0,
        figsize: 1.0,
        cluster_gap: 1,
        cluster_box_width: 0.9,
    },

    inline_terminal: Terminal::Svg,
};

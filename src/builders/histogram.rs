use serde::{Deserialize, Serialize};

use crate::builders::{check_range, degrees, log_summary, rgb, series_labels};
use crate::config::PLOT_CONFIG;
use crate::domain::palette::background_hex;
use crate::domain::{
    Attributes, ColorPalette, PlotSpec, Scalar, SeriesArg, SettingItem, Settings,
};
use crate::error::{PlotError, Result};
use crate::utils::{
    Bucketing, bucketize, format_bucket_label, format_number, format_tick_list, format_tick_range,
    get_min_max,
};

/// Presentation options for `build_histogram_spec`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HistogramOptions {
    /// Legend titles; defaults to the series index
    pub labels: Option<Vec<String>>,
    /// Overlapping translucent bars (true) or side-by-side clusters (false)
    pub pileup: bool,
    pub xmin: Option<f64>,
    pub xmax: Option<f64>,
    pub ymin: f64,
    /// Defaults to 1.1 x the tallest bucket
    pub ymax: Option<f64>,
    pub bins: usize,
    pub rotate_degrees: f64,
    pub fill: bool,
    pub alpha_pct: u32,
    /// Band drawn behind pileup bars, e.g. `"#20DDDDDD"` or `"dddddd"`
    pub background: Option<String>,
    /// Pileup only: `set size "f,f"`
    pub figsize: f64,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        let cfg = &PLOT_CONFIG.histogram;
        Self {
            labels: None,
            pileup: true,
            xmin: None,
            xmax: None,
            ymin: cfg.y_min,
            ymax: None,
            bins: cfg.bins,
            rotate_degrees: cfg.rotate_degrees,
            fill: true,
            alpha_pct: cfg.alpha_pct,
            background: None,
            figsize: cfg.figsize,
        }
    }
}

/// Width of one bucket, which is also the pileup tick step.
pub fn tick_interval(xmin: f64, xmax: f64, bins: usize) -> f64 {
    (xmax - xmin) / bins as f64
}

/// Everything both histogram layouts share once the input is validated.
struct Prepared {
    labels: Vec<String>,
    palette: ColorPalette,
    buckets: Vec<Bucketing>,
    xmin: f64,
    xmax: f64,
    ymax: f64,
    interval: f64,
}

/// Histograms of one or more sample series over a common `[xmin, xmax]`.
pub fn build_histogram_spec<T: AsRef<[f64]>>(data: &[T], options: &HistogramOptions) -> Result<PlotSpec> {
    let prepared = prepare(data, options)?;

    let spec = if options.pileup {
        pileup_spec(&prepared, options)?
    } else {
        clustered_spec(&prepared, options)
    };
    log_summary(if options.pileup { "pileup histogram" } else { "clustered histogram" }, &spec);
    Ok(spec)
}

fn prepare<T: AsRef<[f64]>>(data: &[T], options: &HistogramOptions) -> Result<Prepared> {
    let cfg = &PLOT_CONFIG.histogram;

    if data.is_empty() {
        return Err(PlotError::invalid("histogram needs at least one series"));
    }
    if options.bins < 1 || options.bins > cfg.max_bins {
        return Err(PlotError::invalid(format!(
            "bins must be between 1 and {}, got {}",
            cfg.max_bins, options.bins
        )));
    }
    if !(options.figsize.is_finite() && options.figsize > 0.0) {
        return Err(PlotError::invalid(format!(
            "figsize must be a positive number, got {}",
            options.figsize
        )));
    }
    let labels = series_labels(options.labels.as_deref(), data.len())?;

    let series: Vec<&[f64]> = data.iter().map(AsRef::<[f64]>::as_ref).collect();
    let (xmin, xmax) = match (options.xmin, options.xmax) {
        (Some(lo), Some(hi)) => (lo, hi),
        (lo, hi) => {
            let flat: Vec<f64> = series.iter().flat_map(|s| s.iter().copied()).collect();
            let (data_min, data_max) = get_min_max(&flat)
                .ok_or_else(|| PlotError::invalid("histogram data holds no finite values"))?;
            (lo.unwrap_or(data_min), hi.unwrap_or(data_max))
        }
    };
    check_range("x", xmin, xmax)?;

    let palette = ColorPalette::with_alpha(options.alpha_pct, &cfg.base_colors)?;
    let buckets: Vec<Bucketing> = series
        .iter()
        .map(|s| bucketize(s, options.bins, xmin, xmax))
        .collect();

    let ymax = options.ymax.unwrap_or_else(|| {
        let tallest = buckets.iter().map(Bucketing::max_count).max().unwrap_or(0);
        tallest as f64 * cfg.y_headroom
    });
    check_range("y", options.ymin, ymax)?;

    Ok(Prepared {
        labels,
        palette,
        buckets,
        xmin,
        xmax,
        ymax,
        interval: tick_interval(xmin, xmax, options.bins),
    })
}

/// Overlapping `boxes` series on a real numeric x axis, padded by one bucket each side.
fn pileup_spec(p: &Prepared, options: &HistogramOptions) -> Result<PlotSpec> {
    let mut settings = Settings::new();
    settings.push(
        "size",
        Scalar::raw(format!(
            "{},{}",
            format_number(options.figsize),
            format_number(options.figsize)
        )),
    );
    if options.fill {
        settings.push("style", Attributes::new().flag("fill_solid"));
    }

    let mut xtics = vec![SettingItem::from(Scalar::raw(format_tick_range(
        p.xmin - p.interval,
        p.interval,
        p.xmax + p.interval,
    )))];
    if options.rotate_degrees != 0.0 {
        xtics.push(SettingItem::from(
            Attributes::new()
                .flag("rotate")
                .with("by", degrees(options.rotate_degrees)),
        ));
    }
    settings
        .push("xtics", xtics)
        .push("xrange", Scalar::range(p.xmin - p.interval, p.xmax + p.interval))
        .push("yrange", Scalar::range(options.ymin, p.ymax));

    let mut series = Vec::with_capacity(p.buckets.len() + 1);
    if let Some(background) = &options.background {
        let color = background_hex(background)?;
        series.push(SeriesArg::expression(
            format!(
                "[{}:{}] {} with filledc above y={} fc \"{}\" notitle",
                format_number(p.xmin),
                format_number(p.xmax),
                format_number(p.ymax),
                format_number(options.ymin),
                color
            ),
            Attributes::new(),
        ));
    }

    for (i, (buckets, label)) in p.buckets.iter().zip(&p.labels).enumerate() {
        let style = Attributes::new()
            .with("with", Scalar::raw("boxes"))
            .with("title", label.as_str())
            .with("fillcolor", rgb(p.palette.color(i)));
        series.push(bucket_series(buckets, style));
    }

    Ok(PlotSpec::new(series, settings))
}

/// Side-by-side bars per bucket. gnuplot's histogram style always counts x
/// from 0, so the axis is `0..bins` and the real bucket bounds go into an
/// explicit tick list instead.
fn clustered_spec(p: &Prepared, options: &HistogramOptions) -> PlotSpec {
    let cfg = &PLOT_CONFIG.histogram;

    if options.background.is_some() {
        log::warn!("histogram background is only drawn in pileup mode; ignoring it");
    }

    let mut settings = Settings::new();
    settings
        .push("auto", Scalar::raw("x"))
        .push("style", Attributes::new().flag("data").flag("histogram"))
        .push(
            "style",
            Attributes::new()
                .flag("histogram")
                .flag("cluster")
                .with("gap", cfg.cluster_gap),
        );
    if options.fill {
        settings.push(
            "style",
            Attributes::new().flag("fill_solid").with("border", -1),
        );
    }
    settings
        .push("boxwidth", Scalar::Float(cfg.cluster_box_width))
        .push(
            "xtic",
            Attributes::new()
                .flag("rotate")
                .with("by", degrees(-options.rotate_degrees))
                .with("scale", 0),
        )
        .push("xrange", Scalar::range(0.0, options.bins as f64));

    // All series share the same edges, so the first one labels the axis
    let ticks: Vec<(String, f64)> = p.buckets[0]
        .edges
        .windows(2)
        .enumerate()
        .map(|(i, w)| (format_bucket_label(w[0], w[1]), i as f64))
        .collect();
    settings
        .push("xtics", Scalar::raw(format_tick_list(&ticks)))
        .push("yrange", Scalar::range(options.ymin, p.ymax));

    let series = p
        .buckets
        .iter()
        .zip(&p.labels)
        .enumerate()
        .map(|(i, (buckets, label))| {
            let style = Attributes::new()
                .with("using", 2)
                .with("with", Scalar::raw("histogram"))
                .with("title", label.as_str())
                .with("fillcolor", rgb(p.palette.color(i)));
            bucket_series(buckets, style)
        })
        .collect();

    PlotSpec::new(series, settings)
}

fn bucket_series(buckets: &Bucketing, style: Attributes) -> SeriesArg {
    let counts: Vec<f64> = buckets.counts.iter().map(|&c| c as f64).collect();
    SeriesArg::columns(vec![buckets.centers(), counts], style)
}

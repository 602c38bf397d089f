use crate::builders::log_summary;
use crate::config::PLOT_CONFIG;
use crate::domain::{Attributes, ColorPalette, PlotSpec, Scalar, SeriesArg, Settings};
use crate::error::{PlotError, Result};

/// Two series as connected points on a fixed `[0, 50]` y axis with a grid.
///
/// x is the 0-based sample index. Both series must have the same length.
pub fn build_line_spec<T: AsRef<[f64]>>(series: &[T]) -> Result<PlotSpec> {
    let cfg = &PLOT_CONFIG.line;

    let [first, second] = series else {
        return Err(PlotError::invalid(format!(
            "line plot takes exactly 2 series, got {}",
            series.len()
        )));
    };
    let (first, second): (&[f64], &[f64]) = (first.as_ref(), second.as_ref());
    if first.len() != second.len() {
        return Err(PlotError::invalid(format!(
            "line series differ in length: {} vs {}",
            first.len(),
            second.len()
        )));
    }

    let palette = ColorPalette::opaque(&cfg.colors);
    let xs: Vec<f64> = (0..first.len()).map(|i| i as f64).collect();

    let args = [first, second]
        .iter()
        .enumerate()
        .map(|(i, ys)| {
            let style = Attributes::new()
                .with("with", Scalar::raw("linespoints"))
                .with("lc_rgb", palette.color(i))
                .with("pointtype", cfg.point_type)
                .with("pointsize", cfg.point_size)
                .with("title", i.to_string());
            SeriesArg::columns(vec![xs.clone(), ys.to_vec()], style)
        })
        .collect();

    let mut settings = Settings::new();
    settings.push("yrange", Scalar::from(cfg.y_range)).flag("grid");

    let spec = PlotSpec::new(args, settings);
    log_summary("line", &spec);
    Ok(spec)
}

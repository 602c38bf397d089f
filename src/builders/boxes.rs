use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::builders::{check_range, degrees, log_summary};
use crate::config::PLOT_CONFIG;
use crate::domain::{Attributes, ColorPalette, PlotSpec, Scalar, SeriesArg, SettingItem, Settings};
use crate::error::{PlotError, Result};
use crate::utils::{format_tick_list, get_min_max};

/// Presentation options for `build_box_spec`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BoxOptions {
    /// Defaults to (smallest min, largest max) over all rows
    pub xrange: Option<(f64, f64)>,
    /// Category labels placed at x = low, low + 1, ... and rotated 90 degrees
    pub xtick_labels: Option<Vec<String>>,
    pub title: Option<String>,
    pub alpha_pct: u32,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            xrange: None,
            xtick_labels: None,
            title: None,
            alpha_pct: PLOT_CONFIG.boxes.alpha_pct,
        }
    }
}

/// Min/max ranges drawn as filled candlestick bodies, one series per pair.
///
/// `rows` alternates `[min_0, max_0, min_1, max_1, ...]`; each pair becomes
/// one series colored `palette[i % 4]` and titled `titles[i]`.
/// The candlestick columns are `x, min, min, max, max` (no whiskers).
pub fn build_box_spec<T, S>(rows: &[T], titles: &[S], options: &BoxOptions) -> Result<PlotSpec>
where
    T: AsRef<[f64]>,
    S: AsRef<str>,
{
    let cfg = &PLOT_CONFIG.boxes;

    if rows.is_empty() {
        return Err(PlotError::invalid("box plot needs at least one min/max pair"));
    }
    if rows.len() % 2 != 0 {
        return Err(PlotError::invalid(format!(
            "rows must alternate min/max, got an odd count ({})",
            rows.len()
        )));
    }

    let pairs: Vec<(&[f64], &[f64])> = rows
        .iter()
        .map(AsRef::<[f64]>::as_ref)
        .tuples()
        .collect();

    if titles.len() != pairs.len() {
        return Err(PlotError::invalid(format!(
            "got {} titles for {} min/max pairs",
            titles.len(),
            pairs.len()
        )));
    }
    if let Some((i, (mi, ma))) = pairs.iter().enumerate().find(|(_, (mi, ma))| mi.len() != ma.len()) {
        return Err(PlotError::invalid(format!(
            "pair {} has {} minimums but {} maximums",
            i,
            mi.len(),
            ma.len()
        )));
    }

    let (x_low, x_high) = match options.xrange {
        Some(range) => range,
        None => default_xrange(&pairs)?,
    };
    check_range("x", x_low, x_high)?;

    let palette = ColorPalette::with_alpha(options.alpha_pct, &cfg.base_colors)?;

    let series = pairs
        .iter()
        .zip(titles)
        .enumerate()
        .map(|(i, ((mi, ma), title))| {
            let xs: Vec<f64> = (0..mi.len()).map(|j| x_low + j as f64).collect();
            let title: &str = title.as_ref();
            let style = Attributes::new()
                .with("with", Scalar::raw("candlesticks"))
                .with("fc_rgb", palette.color(i))
                .with("title", title);
            SeriesArg::columns(
                vec![xs, mi.to_vec(), mi.to_vec(), ma.to_vec(), ma.to_vec()],
                style,
            )
        })
        .collect();

    let mut settings = Settings::new();
    if let Some(labels) = &options.xtick_labels {
        let ticks: Vec<(&str, f64)> = labels
            .iter()
            .enumerate()
            .map(|(j, label)| (label.as_str(), x_low + j as f64))
            .collect();
        settings.push(
            "xtics",
            vec![
                SettingItem::from(Scalar::raw(format_tick_list(&ticks))),
                SettingItem::from(
                    Attributes::new()
                        .flag("rotate")
                        .with("by", degrees(cfg.xtick_rotation as f64)),
                ),
            ],
        );
    }
    settings
        .push("xrange", Scalar::range(x_low, x_high))
        .flag("grid")
        .push("style", Attributes::new().flag("fill_solid"));
    if let Some(title) = &options.title {
        settings.push("title", Scalar::text(title.as_str()));
    }

    let spec = PlotSpec::new(series, settings);
    log_summary("box", &spec);
    Ok(spec)
}

fn default_xrange(pairs: &[(&[f64], &[f64])]) -> Result<(f64, f64)> {
    let mins: Vec<f64> = pairs.iter().flat_map(|(mi, _)| mi.iter().copied()).collect();
    let maxes: Vec<f64> = pairs.iter().flat_map(|(_, ma)| ma.iter().copied()).collect();
    match (get_min_max(&mins), get_min_max(&maxes)) {
        (Some((low, _)), Some((_, high))) => Ok((low, high)),
        _ => Err(PlotError::invalid("box rows hold no finite values to derive an xrange from")),
    }
}

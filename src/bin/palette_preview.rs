use anyhow::{Context, Result};
use gnutemplate::config::PLOT_CONFIG;
use gnutemplate::domain::ColorPalette;
use gnutemplate::domain::palette::alpha_hex;

fn main() -> Result<()> {
    let alpha = match std::env::args().nth(1) {
        Some(arg) => Some(
            arg.parse::<u32>()
                .with_context(|| format!("Alpha must be a whole percentage, got {:?}", arg))?,
        ),
        None => None,
    };
    preview_palettes(alpha)
}

fn preview_palettes(alpha: Option<u32>) -> Result<()> {
    let boxes_alpha = alpha.unwrap_or(PLOT_CONFIG.boxes.alpha_pct);
    let hist_alpha = alpha.unwrap_or(PLOT_CONFIG.histogram.alpha_pct);

    print_palette("box", boxes_alpha, &PLOT_CONFIG.boxes.base_colors)?;
    print_palette("histogram", hist_alpha, &PLOT_CONFIG.histogram.base_colors)?;

    let line = ColorPalette::opaque(&PLOT_CONFIG.line.colors);
    println!("line (opaque): {}", line.colors().join(" "));
    Ok(())
}

fn print_palette(name: &str, alpha_pct: u32, base: &[&str]) -> Result<()> {
    let palette = ColorPalette::with_alpha(alpha_pct, base)
        .with_context(|| format!("Failed to build {} palette", name))?;
    println!(
        "{} (alpha {}% = 0x{}): {}",
        name,
        alpha_pct,
        alpha_hex(alpha_pct)?,
        palette.colors().join(" ")
    );
    Ok(())
}

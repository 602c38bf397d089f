use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use gnutemplate::{
    Cli, GnuplotProcess, InlineCapture, ScriptSink, Terminal, build_from_json, render,
};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build the spec
    let input = args.command.input();
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input {:?}", input))?;
    let spec = build_from_json(&args.command, &json)
        .with_context(|| format!("Failed to build plot from {:?}", input))?;

    if args.dump_spec {
        let pretty = serde_json::to_string_pretty(&spec)?;
        println!("{}", pretty);
        return Ok(());
    }

    let target = args.output_target();
    if args.out.is_some() && args.terminal.is_interactive() {
        let names: Vec<String> = Terminal::file_terminals().map(|t| t.to_string()).collect();
        log::warn!(
            "{} opens a window and ignores --out; file terminals are: {}",
            args.terminal,
            names.join(", ")
        );
    }
    let stdout = std::io::stdout();

    // D. Script only
    if args.script {
        let mut sink = ScriptSink::new(stdout.lock());
        if args.inline {
            render(&spec, target.as_ref(), &mut InlineCapture::new(&mut sink))?;
        } else {
            render(&spec, target.as_ref(), &mut sink)?;
        }
        return Ok(());
    }

    // E. Live gnuplot
    let mut gnuplot = GnuplotProcess::spawn_default().context("Is gnuplot installed?")?;
    if args.inline {
        render(&spec, target.as_ref(), &mut InlineCapture::new(&mut gnuplot))?;
    } else {
        render(&spec, target.as_ref(), &mut gnuplot)?;
    }
    let bytes = gnuplot.finish().context("gnuplot failed")?;

    if let Some(path) = args.out.as_ref().filter(|_| !args.inline) {
        log::info!("Plot written to {:?}", path);
    }
    stdout
        .lock()
        .write_all(&bytes)
        .context("Failed to write gnuplot output")?;
    Ok(())
}

//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so
//! library users only see what they ask `RUST_LOG` for.

/// Emit every `set`/`plot` call as it is forwarded to a sink.
pub const PRINT_SINK_CALLS: bool = false;

/// Emit a one-line summary (series count, settings count) for each built spec.
pub const PRINT_SPEC_SUMMARY: bool = true;

/// Echo each rendered gnuplot script line at trace level.
pub const PRINT_SCRIPT_LINES: bool = false;

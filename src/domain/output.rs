use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// gnuplot terminal kinds the sinks know how to select.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Terminal {
    #[default]
    Gif,
    Png,
    PngCairo,
    Svg,
    PdfCairo,
    Canvas,
    Dumb,
    Qt,
    Wxt,
}

impl Terminal {
    /// Interactive terminals open a window and take no output path.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Terminal::Qt | Terminal::Wxt)
    }

    /// Terminals that can write to `set output "<path>"`.
    pub fn file_terminals() -> impl Iterator<Item = Terminal> {
        Terminal::iter().filter(|t| !t.is_interactive())
    }
}

/// Where the engine should draw: a terminal plus an optional file path.
/// `path == None` leaves output on the engine's stdout (or window).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct OutputTarget {
    pub terminal: Terminal,
    pub path: Option<PathBuf>,
}

impl OutputTarget {
    pub fn file(terminal: Terminal, path: impl Into<PathBuf>) -> Self {
        Self {
            terminal,
            path: Some(path.into()),
        }
    }

    pub fn inline(terminal: Terminal) -> Self {
        Self {
            terminal,
            path: None,
        }
    }

    /// The classic animated-GIF file output.
    pub fn gif(path: impl Into<PathBuf>) -> Self {
        Self::file(Terminal::Gif, path)
    }
}

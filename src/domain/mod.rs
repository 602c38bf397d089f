// Domain types and value objects
pub mod output;
pub mod palette;
pub mod plot_spec;
pub mod scalar;
pub mod settings;

// Re-export commonly used types
pub use output::{OutputTarget, Terminal};
pub use palette::ColorPalette;
pub use plot_spec::{PlotSpec, SeriesArg, SeriesData};
pub use scalar::{Scalar, Token};
pub use settings::{Attributes, SettingItem, SettingValue, Settings};

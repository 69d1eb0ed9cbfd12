//! Domain types and models

mod design;
mod navigation;
mod options;
mod zoom;

pub use design::{Complexity, Design};
pub use navigation::NavigationIntent;
pub use options::{
    ConfigUpdate, Copies, OptionError, Orientation, PaperSize, PaperType,
    PrintConfiguration, PrintQuality,
};
pub use zoom::ZoomState;

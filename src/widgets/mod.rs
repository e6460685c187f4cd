// src/widgets/mod.rs — Widget contract, argument binding, registry, bundled widgets

pub mod args;
pub mod battery;
pub mod clock;
pub mod loadavg;
pub mod registry;
pub mod text;
pub mod types;

pub use registry::{WidgetFactory, WidgetRegistry};
pub use types::{ArgSpec, Widget, WidgetSpec};

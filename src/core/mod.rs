// src/core/mod.rs — Status loop, widget set resolution, theming, protocol framing

pub mod engine;
pub mod profile;
pub mod resolver;
pub mod stream;
pub mod theme;
pub mod types;

pub use engine::{Engine, LoopState};
pub use profile::{NetctlProbe, ProfileProbe};
pub use theme::{Theme, ThemeRule};
pub use types::{Output, Status};

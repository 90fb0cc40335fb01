pub mod render;
pub mod span;
pub mod style;
pub mod theme;

pub use render::{RenderFrame, render};
pub use theme::Palette;

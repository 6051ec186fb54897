pub mod renderer;

pub use renderer::{cell_style, Renderer};

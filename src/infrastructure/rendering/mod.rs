pub mod canvas_renderer;

pub use canvas_renderer::{CanvasRenderer, ChartLayout, layout_candles};

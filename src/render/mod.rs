mod figure;
mod html;
mod json_contract;
mod named_colors;
mod null_renderer;
mod primitives;

pub use figure::{
    AxisLayout, Figure, Layout, PlotMargins, Slider, SliderStep, Trace, TraceMode, TraceSpan,
    Visibility,
};
pub use html::HtmlRenderer;
pub use json_contract::{FIGURE_JSON_SCHEMA_V1, FigureJsonContractV1};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LineStyle, MarkerStyle};

use crate::error::FigureResult;

/// Contract implemented by any figure backend.
///
/// Backends receive a fully assembled `Figure`; every overlay is already
/// computed, so a backend only draws and switches visibility.
pub trait Renderer {
    fn render(&mut self, figure: &Figure) -> FigureResult<()>;
}

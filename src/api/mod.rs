//! Figure entry points and the assembly pipeline behind them.

mod derivative_figure;
mod export;
mod figure_assembler;
mod figure_config;
mod riemann_figure;
mod slider_binder;

pub use derivative_figure::{format_step, make_derivative_figure};
pub use export::export_html;
pub use figure_assembler::{FigureAssembler, INITIAL_OVERLAY, Overlay};
pub use figure_config::{
    DEFAULT_DERIVATIVE_FILENAME, DEFAULT_MAX_PARTITIONS, DEFAULT_RIEMANN_FILENAME,
    DEFAULT_STEP_COUNT, DEFAULT_STEP_DECAY, DerivativeFigureConfig, FigureStyle,
    RiemannFigureConfig,
};
pub use riemann_figure::make_riemann_figure;
pub use slider_binder::{StepLabel, bind_slider, step_visibility};

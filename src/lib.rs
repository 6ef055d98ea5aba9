//! calculus-figures: interactive slider figures for introductory calculus.
//!
//! Two builders share one pipeline: sample the function, precompute one
//! overlay per slider position (secant lines for the derivative definition,
//! rectangle sets for Riemann sums), assemble them into a [`render::Figure`]
//! and optionally export it as a standalone HTML document.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    DerivativeFigureConfig, RiemannFigureConfig, export_html, make_derivative_figure,
    make_riemann_figure,
};
pub use core::RiemannMode;
pub use error::{FigureError, FigureResult};
pub use render::Figure;

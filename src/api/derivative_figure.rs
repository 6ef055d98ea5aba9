use tracing::{debug, warn};

use crate::core::{
    Domain, ScalarFunction, Secant, build_secants, sample_function, tangent_line,
};
use crate::error::FigureResult;
use crate::render::{Figure, Trace, Visibility};

use super::export::finish_figure;
use super::{DerivativeFigureConfig, FigureAssembler, Overlay, StepLabel};

/// Builds the secant-line figure for the limit definition of `f'(a)`.
///
/// The slider walks the step schedule from the largest `h` toward zero; each
/// position shows the secant through `(a, f(a))` and `(a + h, f(a + h))` and
/// titles the figure with its slope. `a` outside `(x_min, x_max)` is
/// tolerated and only logged.
///
/// When `config.save_figure` is set the figure is also written to
/// `config.filename`; an export failure returns
/// [`FigureError::Export`](crate::error::FigureError::Export) carrying the
/// figure.
pub fn make_derivative_figure<F>(
    function: &F,
    a: f64,
    x_min: f64,
    x_max: f64,
    config: &DerivativeFigureConfig,
) -> FigureResult<Figure>
where
    F: ScalarFunction + ?Sized,
{
    config.validate()?;
    let domain = Domain::new(x_min, x_max)?;
    if !domain.contains_strictly(a) {
        warn!(
            a,
            x_min, x_max, "evaluation point lies outside the plotted domain"
        );
    }

    let grid = sample_function(function, domain, config.num_x)?;
    let schedule = config.resolve_step_schedule(a, domain)?;
    let secants = build_secants(function, a, domain, &schedule)?;
    let tangent = tangent_line(function, a, config.tangent_delta)?;
    debug!(
        a,
        steps = schedule.len(),
        tangent_slope = tangent.slope,
        "computed derivative overlays"
    );

    let bounds = config.style.plot_bounds(domain.low(), domain.high(), &grid.ys)?;
    let (x_axis, y_axis) = config.style.axes(bounds);

    let tangent_visibility = if config.tangent_line_always_visible {
        Visibility::Visible
    } else {
        Visibility::LegendOnly
    };
    let overlays = secants
        .iter()
        .map(|secant| secant_overlay(secant, config))
        .collect();

    let figure = FigureAssembler::new(x_axis, y_axis)
        .with_canvas(config.style.viewport, config.style.margins)
        .with_slider_prefix("h = ")
        .with_static_trace(
            Trace::markers("(a, f(a))", &[tangent.anchor], config.anchor_marker)
                .with_legend_rank(1),
        )
        .with_static_trace(
            Trace::lines("f(x)", grid.xs, grid.ys, config.curve).with_legend_rank(3),
        )
        .with_static_trace(
            Trace::polyline(
                format!("tangent line, slope = {:.3}", tangent.slope),
                &tangent.segment(domain),
                config.tangent_line,
            )
            .with_visibility(tangent_visibility)
            .with_legend_rank(5),
        )
        .with_metadata("figure", "derivative_definition")
        .with_metadata("a", a)
        .with_metadata("x_min", x_min)
        .with_metadata("x_max", x_max)
        .assemble(overlays)?;

    finish_figure(figure, config.save_figure, &config.filename)
}

fn secant_overlay(secant: &Secant, config: &DerivativeFigureConfig) -> Overlay {
    Overlay::new(
        StepLabel::new(
            format_step(secant.h),
            secant.h,
            format!("Slope = {:.3}", secant.slope),
        ),
        vec![
            Trace::polyline("secant line", &secant.segment, config.secant_line).with_legend_rank(4),
            Trace::markers("(a + h, f(a + h))", &[secant.moving], config.moving_marker)
                .with_legend_rank(2),
        ],
    )
}

/// Slider label for a step size; switches to scientific notation once
/// fixed decimals stop telling neighbouring steps apart.
#[must_use]
pub fn format_step(h: f64) -> String {
    if h.abs() >= 1e-2 {
        format!("{h:.4}")
    } else {
        format!("{h:.3e}")
    }
}

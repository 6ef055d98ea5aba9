use tracing::debug;

use crate::core::{
    Domain, Rectangle, RiemannMode, ScalarFunction, SignTag, build_rectangles, partition_range,
    riemann_sum, sample_function,
};
use crate::error::FigureResult;
use crate::render::{Figure, LineStyle, Trace};

use super::export::finish_figure;
use super::{FigureAssembler, Overlay, RiemannFigureConfig, StepLabel};

/// Builds the Riemann-sum figure for `f` over `[a, b]`.
///
/// The slider runs over `N = 1..=config.max_n`; position `N` shows the `N`
/// rectangles of the `mode` sum, blue above the axis and red below, and
/// titles the figure with `Δx` and the signed area. `a > b` integrates
/// backwards and flips the sign of every area.
pub fn make_riemann_figure<F>(
    function: &F,
    a: f64,
    b: f64,
    mode: RiemannMode,
    config: &RiemannFigureConfig,
) -> FigureResult<Figure>
where
    F: ScalarFunction + ?Sized,
{
    config.validate()?;
    let domain = Domain::spanning(a, b)?;
    let grid = sample_function(function, domain, config.num_x)?;

    let mut overlays = Vec::with_capacity(config.max_n);
    let mut heights = grid.ys.clone();
    heights.push(0.0);
    for partitions in partition_range(config.max_n)? {
        let rectangles = build_rectangles(function, a, b, mode, partitions)?;
        heights.extend(rectangles.iter().map(|r| r.height));
        overlays.push(partition_overlay(&rectangles, a, b, mode, config));
    }
    debug!(%mode, a, b, overlays = overlays.len(), "computed riemann overlays");

    let bounds = config.style.plot_bounds(domain.low(), domain.high(), &heights)?;
    let (x_axis, y_axis) = config.style.axes(bounds);

    let figure = FigureAssembler::new(x_axis, y_axis)
        .with_canvas(config.style.viewport, config.style.margins)
        .with_slider_prefix("N = ")
        .with_static_trace(
            Trace::lines("f(x)", grid.xs, grid.ys, config.curve).with_legend_rank(1),
        )
        .with_metadata("figure", "riemann_sum")
        .with_metadata("mode", mode)
        .with_metadata("a", a)
        .with_metadata("b", b)
        .assemble(overlays)?;

    finish_figure(figure, config.save_figure, &config.filename)
}

fn partition_overlay(
    rectangles: &[Rectangle],
    a: f64,
    b: f64,
    mode: RiemannMode,
    config: &RiemannFigureConfig,
) -> Overlay {
    let partitions = rectangles.len();
    let dx = (b - a) / partitions as f64;
    let area = riemann_sum(rectangles);

    let traces = rectangles
        .iter()
        .map(|rectangle| {
            let color = match rectangle.sign {
                SignTag::Positive => config.positive_color,
                SignTag::Negative => config.negative_color,
            };
            Trace::polyline(
                format!("A_{}", rectangle.index),
                &rectangle.corners(),
                LineStyle::new(color, config.rect_line_width),
            )
            .with_fill_to_self()
            .without_legend()
        })
        .collect();

    Overlay::new(
        StepLabel::new(
            partitions.to_string(),
            partitions as f64,
            format!("{mode} Riemann sum for f with N = {partitions}, Δx = {dx:.3}, area = {area:.3}"),
        ),
        traces,
    )
}

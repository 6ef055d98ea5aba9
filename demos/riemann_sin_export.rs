use std::f64::consts::PI;

use calculus_figures::telemetry::init_default_tracing;
use calculus_figures::{RiemannFigureConfig, RiemannMode, make_riemann_figure};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let mode: RiemannMode = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("left")
        .parse()?;
    let config = RiemannFigureConfig::default().with_save_figure("riemann_sums.html");
    let figure = make_riemann_figure(&f64::sin, -PI / 2.0, PI, mode, &config)?;

    println!("mode: {mode}");
    println!("traces: {} steps: {}", figure.trace_count(), figure.step_count());
    println!("initial title: {}", figure.layout.title);
    println!("saved to {}", config.filename.display());

    Ok(())
}

use calculus_figures::telemetry::init_default_tracing;
use calculus_figures::{DerivativeFigureConfig, FigureError, make_derivative_figure};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let config = DerivativeFigureConfig::default()
        .with_tangent_line_always_visible(false)
        .with_save_figure("derivative_defn.html");

    let figure = match make_derivative_figure(&|x: f64| x * x, 1.0, -1.0, 3.0, &config) {
        Ok(figure) => figure,
        Err(err @ FigureError::Export { .. }) => {
            eprintln!("{err}");
            err.into_figure().ok_or("export error without figure")?
        }
        Err(err) => return Err(err.into()),
    };

    for step in figure.layout.slider.steps.iter().step_by(10) {
        println!("h = {:>10}  {}", step.label, step.title);
    }
    println!("{}", figure.data[2].name);

    Ok(())
}

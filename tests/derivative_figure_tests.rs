use std::f64::consts::PI;

use approx::assert_relative_eq;
use calculus_figures::api::{DEFAULT_STEP_COUNT, format_step};
use calculus_figures::core::StepSchedule;
use calculus_figures::render::{Color, TraceMode, Visibility};
use calculus_figures::{DerivativeFigureConfig, make_derivative_figure};

#[test]
fn default_figure_has_one_step_per_schedule_entry() {
    let config = DerivativeFigureConfig::default();
    let figure = make_derivative_figure(&f64::sin, 0.0, -PI, PI, &config).expect("figure");

    assert_eq!(figure.step_count(), DEFAULT_STEP_COUNT);
    assert_eq!(figure.trace_count(), 3 + 2 * DEFAULT_STEP_COUNT);
    assert_eq!(figure.visible_overlays(), vec![0]);
    figure.validate().expect("valid figure");

    let curve = &figure.data[1];
    assert_eq!(curve.name, "f(x)");
    assert_eq!(curve.x.len(), config.num_x);
    assert_eq!(curve.x[0], -PI);
    assert_eq!(*curve.x.last().expect("last x"), PI);

    assert_eq!(figure.data[0].name, "(a, f(a))");
    assert_eq!(figure.data[0].mode, TraceMode::Markers);
    assert!(figure.data[2].name.starts_with("tangent line, slope = 1.000"));
    assert_eq!(figure.layout.slider.prefix, "h = ");
    assert_eq!(figure.metadata["figure"], "derivative_definition");
}

#[test]
fn steps_shrink_toward_zero_and_titles_report_slopes() {
    let config = DerivativeFigureConfig::default();
    let figure = make_derivative_figure(&f64::sin, 0.0, -PI, PI, &config).expect("figure");
    let steps = &figure.layout.slider.steps;

    assert_eq!(steps[0].value, PI);
    assert!(steps.windows(2).all(|w| w[1].value.abs() < w[0].value.abs()));
    assert!(steps.iter().all(|s| s.value != 0.0));
    for step in steps {
        assert_eq!(step.label, format_step(step.value));
        assert!(step.title.starts_with("Slope = "));
    }

    let last_slope: f64 = steps[DEFAULT_STEP_COUNT - 1]
        .title
        .trim_start_matches("Slope = ")
        .parse()
        .expect("slope in title");
    assert_relative_eq!(last_slope, 1.0, epsilon = 1e-3);
}

#[test]
fn overlay_holds_secant_line_and_moving_point() {
    let f = |x: f64| x * x;
    let config = DerivativeFigureConfig::default()
        .with_step_schedule(StepSchedule::from_steps(vec![0.5, 0.1]).expect("schedule"));
    let mut figure = make_derivative_figure(&f, 1.0, 0.0, 2.0, &config).expect("figure");

    assert_eq!(figure.step_count(), 2);
    assert_eq!(figure.layout.title, "Slope = 2.500");

    figure.select_step(1).expect("select");
    assert_eq!(figure.layout.title, "Slope = 2.100");
    let overlay = figure.overlay_traces(1).expect("overlay");
    assert_eq!(overlay.len(), 2);

    let secant = &overlay[0];
    assert_eq!(secant.name, "secant line");
    assert_eq!(secant.x, vec![0.0, 2.0]);
    assert_relative_eq!(secant.y[0], 1.0 - 2.1, epsilon = 1e-12);
    assert_relative_eq!(secant.y[1], 1.0 + 2.1, epsilon = 1e-12);
    assert_eq!(secant.line.expect("line style").color, Color::RED);

    let moving = &overlay[1];
    assert_eq!(moving.x, vec![1.1]);
    assert_eq!(moving.y, vec![f(1.1)]);
    assert_eq!(figure.visible_overlays(), vec![1]);
}

#[test]
fn tangent_can_start_in_legend_only() {
    let config = DerivativeFigureConfig::default()
        .with_geometric_steps(10, 0.7)
        .with_tangent_line_always_visible(false);
    let figure = make_derivative_figure(&f64::cos, 1.0, 0.0, 3.0, &config).expect("figure");

    assert_eq!(figure.step_count(), 10);
    assert_eq!(figure.data[2].visible, Visibility::LegendOnly);
    assert!(
        figure
            .layout
            .slider
            .steps
            .iter()
            .all(|step| step.visible[2] == Visibility::LegendOnly
                && step.visible[0] == Visibility::Visible)
    );
}

#[test]
fn point_outside_domain_still_builds() {
    let config = DerivativeFigureConfig::default().with_geometric_steps(5, 0.5);
    let figure = make_derivative_figure(&f64::exp, 4.0, 0.0, 1.0, &config).expect("figure");
    assert_eq!(figure.step_count(), 5);
    // No room to the right of `a`: the schedule starts at the domain width.
    assert_eq!(figure.layout.slider.steps[0].value, 1.0);
}

#[test]
fn reversed_domain_and_bad_config_are_rejected() {
    let config = DerivativeFigureConfig::default();
    let err = make_derivative_figure(&f64::sin, 0.0, 1.0, -1.0, &config).expect_err("domain");
    assert!(err.is_config_error());

    let err = make_derivative_figure(&f64::sin, 0.0, -1.0, 1.0, &config.clone().with_sample_count(1))
        .expect_err("num_x");
    assert!(err.is_config_error());

    let err = make_derivative_figure(
        &f64::sin,
        0.0,
        -1.0,
        1.0,
        &config.with_geometric_steps(0, 0.5),
    )
    .expect_err("num_h");
    assert!(err.is_config_error());
}

#[test]
fn pole_in_domain_serializes_as_gap() {
    let config = DerivativeFigureConfig::default().with_sample_count(5);
    let figure = make_derivative_figure(&|x: f64| 1.0 / x, 0.5, -1.0, 1.0, &config).expect("figure");

    assert!(figure.data[1].y[2].is_infinite());
    let json = figure.to_json().expect("json");
    assert!(json.contains("null"));
    assert!(figure.layout.y_axis.range.start.is_finite());
    assert!(figure.layout.y_axis.range.end.is_finite());
}

#[test]
fn dynamic_functions_are_accepted() {
    let boxed: Box<dyn Fn(f64) -> f64> = Box::new(|x| x.powi(3) - x);
    let config = DerivativeFigureConfig::default().with_geometric_steps(4, 0.5);
    let figure = make_derivative_figure(boxed.as_ref(), 0.5, -2.0, 2.0, &config).expect("figure");
    assert_eq!(figure.step_count(), 4);
}

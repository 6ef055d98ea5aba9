use calculus_figures::api::{
    DEFAULT_DERIVATIVE_FILENAME, DEFAULT_MAX_PARTITIONS, DEFAULT_RIEMANN_FILENAME,
    DEFAULT_STEP_COUNT, FigureStyle,
};
use calculus_figures::core::{Domain, Viewport};
use calculus_figures::render::Color;
use calculus_figures::{DerivativeFigureConfig, RiemannFigureConfig};

#[test]
fn defaults_match_the_documented_values() {
    let derivative = DerivativeFigureConfig::default();
    assert!(!derivative.save_figure);
    assert_eq!(derivative.filename.to_str(), Some(DEFAULT_DERIVATIVE_FILENAME));
    assert_eq!(derivative.num_h, DEFAULT_STEP_COUNT);
    assert!(derivative.tangent_line_always_visible);
    derivative.validate().expect("default derivative config");

    let riemann = RiemannFigureConfig::default();
    assert_eq!(riemann.filename.to_str(), Some(DEFAULT_RIEMANN_FILENAME));
    assert_eq!(riemann.max_n, DEFAULT_MAX_PARTITIONS);
    assert_eq!(riemann.positive_color, Color::BLUE);
    assert_eq!(riemann.negative_color, Color::RED);
    riemann.validate().expect("default riemann config");
}

#[test]
fn partial_json_fills_in_defaults() {
    let riemann: RiemannFigureConfig =
        serde_json::from_str(r#"{"max_n": 5, "save_figure": true}"#).expect("riemann config");
    assert_eq!(riemann.max_n, 5);
    assert!(riemann.save_figure);
    assert_eq!(riemann.num_x, RiemannFigureConfig::default().num_x);

    let derivative: DerivativeFigureConfig =
        serde_json::from_str(r#"{"step_schedule": [1.0, -0.5, 0.25]}"#).expect("derivative config");
    let schedule = derivative.step_schedule.as_ref().expect("schedule");
    assert_eq!(schedule.steps(), &[1.0, -0.5, 0.25]);
    derivative.validate().expect("valid");
}

#[test]
fn colors_travel_as_css_strings() {
    let json = serde_json::to_string(&RiemannFigureConfig::default()).expect("json");
    assert!(json.contains(&format!("\"{}\"", Color::BLUE.to_css())));

    let style: FigureStyle = serde_json::from_str(
        r#"{"axis_line": {"color": "rgb(10, 20, 30)", "width": 1.5}, "x_title": "t"}"#,
    )
    .expect("style");
    assert_eq!(style.axis_line.width, 1.5);
    assert_eq!(style.x_title, "t");
    assert_eq!(style.axis_line.color, "rgb(10, 20, 30)".parse::<Color>().expect("color"));
}

#[test]
fn invalid_schedules_are_rejected_while_parsing() {
    let zero = serde_json::from_str::<DerivativeFigureConfig>(r#"{"step_schedule": [0.5, 0.0]}"#);
    assert!(zero.is_err());

    let growing = serde_json::from_str::<DerivativeFigureConfig>(r#"{"step_schedule": [0.1, 0.5]}"#);
    assert!(growing.is_err());

    let empty = serde_json::from_str::<DerivativeFigureConfig>(r#"{"step_schedule": []}"#);
    assert!(empty.is_err());
}

#[test]
fn invalid_values_fail_validation() {
    let config = DerivativeFigureConfig {
        tangent_delta: 0.0,
        ..DerivativeFigureConfig::default()
    };
    assert!(config.validate().expect_err("delta").is_config_error());

    let config = DerivativeFigureConfig::default().with_geometric_steps(10, 1.0);
    assert!(config.validate().expect_err("decay").is_config_error());
    let domain = Domain::new(0.0, 1.0).expect("domain");
    assert!(config.resolve_step_schedule(0.5, domain).is_err());

    let config = RiemannFigureConfig {
        rect_line_width: -1.0,
        ..RiemannFigureConfig::default()
    };
    assert!(config.validate().is_err());

    let config = RiemannFigureConfig {
        save_figure: true,
        filename: "".into(),
        ..RiemannFigureConfig::default()
    };
    assert!(config.validate().expect_err("filename").is_config_error());

    let style = FigureStyle::default().with_viewport(Viewport::new(100, 60));
    assert!(style.validate().is_err());
    let style = FigureStyle::default().with_ticks(0.0, 0.5);
    assert!(style.validate().is_err());
}

#[test]
fn square_aspect_widens_the_shorter_axis() {
    let style = FigureStyle::default();
    let bounds = style
        .plot_bounds(0.0, 10.0, &[0.0, 1.0])
        .expect("bounds");
    let (width, height) = style.plot_area();
    let x_scale = bounds.x.span() / width;
    let y_scale = bounds.y.span() / height;
    assert!((x_scale - y_scale).abs() <= 1e-9 * x_scale);

    let free = style.with_square_aspect(false);
    let bounds = free.plot_bounds(0.0, 10.0, &[0.0, 1.0]).expect("bounds");
    assert!(bounds.y.span() < bounds.x.span());
}

#[test]
fn explicit_schedule_overrides_geometric_steps() {
    let domain = Domain::new(-1.0, 1.0).expect("domain");
    let config: DerivativeFigureConfig =
        serde_json::from_str(r#"{"num_h": 3, "step_schedule": [0.4, 0.2]}"#).expect("config");
    let schedule = config.resolve_step_schedule(0.0, domain).expect("schedule");
    assert_eq!(schedule.len(), 2);

    let geometric = DerivativeFigureConfig::default()
        .with_geometric_steps(3, 0.5)
        .resolve_step_schedule(0.0, domain)
        .expect("schedule");
    assert_eq!(geometric.steps(), &[1.0, 0.5, 0.25]);
}

#[test]
fn colors_accept_hex_and_keywords() {
    let config: RiemannFigureConfig = serde_json::from_str(
        r##"{"positive_color": "deepskyblue", "negative_color": "#ff0000"}"##,
    )
    .expect("config");
    assert_eq!(config.positive_color, Color::DEEP_SKY_BLUE);
    assert_eq!(config.negative_color, Color::RED);
    config.validate().expect("valid");

    let style: FigureStyle =
        serde_json::from_str(r##"{"axis_line": {"color": "#789", "width": 2.0}}"##).expect("style");
    assert_eq!(style.axis_line.color, Color::LIGHT_SLATE_GRAY);

    assert!(serde_json::from_str::<RiemannFigureConfig>(r#"{"positive_color": "sky"}"#).is_err());
}

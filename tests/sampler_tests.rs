use calculus_figures::core::{Domain, PlotBounds, sample_function};

#[test]
fn grid_is_evenly_spaced_over_the_domain() {
    let domain = Domain::new(-2.0, 3.0).expect("domain");
    let grid = sample_function(&|x: f64| 2.0 * x, domain, 11).expect("grid");

    assert_eq!(grid.len(), 11);
    assert_eq!(grid.xs[0], -2.0);
    assert_eq!(grid.xs[10], 3.0);
    for pair in grid.xs.windows(2) {
        assert!((pair[1] - pair[0] - 0.5).abs() <= 1e-12);
    }
    for point in grid.points() {
        assert_eq!(point.y, 2.0 * point.x);
    }
}

#[test]
fn undefined_points_are_kept_as_non_finite_values() {
    let domain = Domain::new(-1.0, 1.0).expect("domain");
    let grid = sample_function(&|x: f64| 1.0 / x, domain, 5).expect("grid");
    assert!(grid.ys[2].is_infinite());

    let grid = sample_function(&|x: f64| x.ln(), domain, 5).expect("grid");
    assert!(grid.ys[0].is_nan());
    assert_eq!(grid.ys[4], 0.0);
}

#[test]
#[should_panic(expected = "user function failed")]
fn function_panics_reach_the_caller() {
    let domain = Domain::new(0.0, 1.0).expect("domain");
    let _ = sample_function(
        &|x: f64| {
            if x > 0.5 {
                panic!("user function failed");
            }
            x
        },
        domain,
        10,
    );
}

#[test]
fn domain_requires_ordered_finite_bounds() {
    assert!(Domain::new(1.0, 1.0).is_err());
    assert!(Domain::new(2.0, 1.0).is_err());
    assert!(Domain::new(f64::NEG_INFINITY, 1.0).is_err());

    let spanning = Domain::spanning(3.0, -1.0).expect("domain");
    assert_eq!((spanning.low(), spanning.high()), (-1.0, 3.0));
    assert!(spanning.contains_strictly(0.0));
    assert!(!spanning.contains_strictly(3.0));
}

#[test]
fn bounds_pad_extent_and_ignore_gaps() {
    let bounds = PlotBounds::fit(
        0.0,
        10.0,
        &[f64::NAN, -1.0, 4.0, f64::INFINITY],
        (0.1, 0.2),
        (1.0, 0.5),
    )
    .expect("bounds");

    assert!((bounds.x.start + 1.0).abs() <= 1e-12);
    assert!((bounds.x.end - 11.0).abs() <= 1e-12);
    assert!((bounds.y.start + 2.0).abs() <= 1e-12);
    assert!((bounds.y.end - 5.0).abs() <= 1e-12);
    assert_eq!(bounds.y.tick0, -2.0);
    assert_eq!(bounds.x.ticks().first().copied(), Some(-1.0));
}

#[test]
fn curve_without_finite_samples_gets_default_bounds() {
    let bounds = PlotBounds::fit(0.0, 1.0, &[f64::NAN; 4], (0.0, 0.0), (0.5, 0.5)).expect("bounds");
    assert_eq!((bounds.y.start, bounds.y.end), (-1.0, 1.0));
}

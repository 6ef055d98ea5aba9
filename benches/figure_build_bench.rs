use calculus_figures::core::{Domain, RiemannMode, build_rectangles, sample_function};
use calculus_figures::render::HtmlRenderer;
use calculus_figures::{
    DerivativeFigureConfig, RiemannFigureConfig, make_derivative_figure, make_riemann_figure,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::f64::consts::PI;
use std::hint::black_box;

fn bench_sample_function_400(c: &mut Criterion) {
    let domain = Domain::new(-PI, PI).expect("valid domain");

    c.bench_function("sample_function_400", |b| {
        b.iter(|| {
            let _ = sample_function(&f64::sin, black_box(domain), black_box(400))
                .expect("sampling should succeed");
        })
    });
}

fn bench_rectangles_1k(c: &mut Criterion) {
    c.bench_function("riemann_rectangles_1k", |b| {
        b.iter(|| {
            let _ = build_rectangles(
                &f64::sin,
                black_box(-PI / 2.0),
                black_box(PI),
                RiemannMode::Center,
                black_box(1_000),
            )
            .expect("rectangles should build");
        })
    });
}

fn bench_default_figures(c: &mut Criterion) {
    let derivative = DerivativeFigureConfig::default();
    let riemann = RiemannFigureConfig::default();

    c.bench_function("derivative_figure_default", |b| {
        b.iter(|| {
            let _ = make_derivative_figure(&f64::sin, black_box(0.0), -PI, PI, &derivative)
                .expect("figure should build");
        })
    });

    c.bench_function("riemann_figure_default", |b| {
        b.iter(|| {
            let _ = make_riemann_figure(
                &f64::sin,
                black_box(-PI / 2.0),
                black_box(PI),
                RiemannMode::Left,
                &riemann,
            )
            .expect("figure should build");
        })
    });
}

fn bench_html_document(c: &mut Criterion) {
    let figure = make_riemann_figure(
        &f64::sin,
        -PI / 2.0,
        PI,
        RiemannMode::Left,
        &RiemannFigureConfig::default(),
    )
    .expect("figure should build");

    c.bench_function("html_document_riemann_default", |b| {
        b.iter(|| {
            let _ = HtmlRenderer::render_document(black_box(&figure))
                .expect("document should render");
        })
    });
}

criterion_group!(
    benches,
    bench_sample_function_400,
    bench_rectangles_1k,
    bench_default_figures,
    bench_html_document
);
criterion_main!(benches);

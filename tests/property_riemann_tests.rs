use calculus_figures::core::{RiemannMode, SignTag, build_rectangles, riemann_sum};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = RiemannMode> {
    prop_oneof![
        Just(RiemannMode::Left),
        Just(RiemannMode::Right),
        Just(RiemannMode::Center),
    ]
}

proptest! {
    #[test]
    fn rectangles_tile_the_interval_exactly_once(
        a in -100.0f64..100.0,
        width in 0.01f64..100.0,
        partitions in 1usize..200,
        mode in any_mode()
    ) {
        let b = a + width;
        let rectangles = build_rectangles(&f64::cos, a, b, mode, partitions).expect("rectangles");

        prop_assert_eq!(rectangles.len(), partitions);
        prop_assert_eq!(rectangles[0].start, a);
        prop_assert_eq!(rectangles[partitions - 1].end, b);
        for pair in rectangles.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }

        let total_width: f64 = rectangles.iter().map(|r| r.width()).sum();
        prop_assert!((total_width - (b - a)).abs() <= 1e-9 * (b - a).abs().max(1.0));

        let expected_width = (b - a) / partitions as f64;
        for rectangle in &rectangles {
            prop_assert!(rectangle.width() > 0.0);
            prop_assert!((rectangle.width() - expected_width).abs() <= 1e-9 * expected_width.max(1.0));
        }
    }

    #[test]
    fn sample_points_follow_the_endpoint_rule(
        a in -50.0f64..50.0,
        width in 0.1f64..50.0,
        partitions in 1usize..100,
        mode in any_mode()
    ) {
        let rectangles =
            build_rectangles(&|x: f64| x * x - 4.0, a, a + width, mode, partitions).expect("rectangles");

        for rectangle in &rectangles {
            match mode {
                RiemannMode::Left => {
                    prop_assert_eq!(rectangle.sample_x, rectangle.left_edge());
                }
                RiemannMode::Right => {
                    prop_assert_eq!(rectangle.sample_x, rectangle.right_edge());
                }
                RiemannMode::Center => {
                    prop_assert!(rectangle.left_edge() < rectangle.sample_x);
                    prop_assert!(rectangle.sample_x < rectangle.right_edge());
                }
            }
        }
    }

    #[test]
    fn sign_tag_is_negative_iff_height_is_negative(
        a in -20.0f64..20.0,
        width in 0.1f64..40.0,
        partitions in 1usize..60,
        shift in -1.5f64..1.5,
        mode in any_mode()
    ) {
        let f = move |x: f64| x.sin() + shift;
        let rectangles = build_rectangles(&f, a, a + width, mode, partitions).expect("rectangles");

        for rectangle in &rectangles {
            let expected = if rectangle.height < 0.0 { SignTag::Negative } else { SignTag::Positive };
            prop_assert_eq!(rectangle.sign, expected);
        }
        let signed: f64 = rectangles.iter().map(|r| r.height * r.width()).sum();
        prop_assert_eq!(riemann_sum(&rectangles), signed);
    }

    #[test]
    fn reversed_interval_is_tiled_once(
        a in -30.0f64..30.0,
        width in 0.1f64..30.0,
        partitions in 1usize..80
    ) {
        let b = a - width;
        let rectangles = build_rectangles(&f64::exp, a, b, RiemannMode::Center, partitions).expect("rectangles");

        prop_assert_eq!(rectangles[0].start, a);
        prop_assert_eq!(rectangles[partitions - 1].end, b);
        let total_width: f64 = rectangles.iter().map(|r| r.width()).sum();
        prop_assert!((total_width - (b - a)).abs() <= 1e-9 * width.max(1.0));
        prop_assert!(rectangles.iter().all(|r| r.right_edge() - r.left_edge() > 0.0));
    }
}

use dashplot_core::{extent, fit_linear, fit_quality, Sample, StatsError, Variable};

fn samples(points: &[(f64, f64)]) -> Vec<Sample> {
    points.iter().copied().map(Sample::from).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

#[test]
fn perfect_line_has_exact_fit_and_unit_r2() {
    let data = samples(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    let fit = fit_linear(&data).expect("fit");
    assert_eq!(fit.slope, 2.0);
    assert_eq!(fit.intercept, 0.0);
    assert_eq!(fit_quality(&data).expect("r2"), 1.0);
}

#[test]
fn vertical_data_is_degenerate_in_x() {
    let data = samples(&[(1.0, 1.0), (1.0, 5.0), (1.0, 9.0)]);
    assert_eq!(
        fit_linear(&data),
        Err(StatsError::DegenerateInput { variable: Variable::Independent })
    );
    assert_eq!(
        fit_quality(&data),
        Err(StatsError::DegenerateInput { variable: Variable::Independent })
    );
}

#[test]
fn noisy_data_has_partial_r2() {
    let data = samples(&[(1.0, 3.0), (2.0, 2.0), (3.0, 5.0), (4.0, 1.0)]);
    let fit = fit_linear(&data).expect("fit");
    assert!(close(fit.slope, -0.3), "slope {}", fit.slope);
    assert!(close(fit.intercept, 3.5), "intercept {}", fit.intercept);
    let r2 = fit_quality(&data).expect("r2");
    assert!(r2 > 0.0 && r2 < 1.0);
    assert!(close(r2, 36.0 / 700.0), "r2 {r2}");
}

#[test]
fn recovers_slope_and_intercept_of_exact_lines() {
    for &(m, b) in &[(2.5, -1.0), (-0.75, 10.0), (1e-3, 4.0), (120.0, 0.5)] {
        let data = (0..12).map(|i| i as f64 * 0.5).map(|x| Sample::new(x, m * x + b)).collect::<Vec<_>>();
        let fit = fit_linear(&data).expect("fit");
        assert!(close(fit.slope, m), "slope {} vs {m}", fit.slope);
        assert!(close(fit.intercept, b), "intercept {} vs {b}", fit.intercept);
        assert!((fit_quality(&data).expect("r2") - 1.0).abs() < 1e-6);
    }
}

#[test]
fn result_does_not_depend_on_sample_order() {
    let data = samples(&[(0.5, 1.9), (2.0, 3.1), (3.5, 7.7), (4.0, 6.2), (6.5, 12.0)]);
    let mut reversed = data.clone();
    reversed.reverse();
    let (a, b) = (fit_linear(&data).expect("fit"), fit_linear(&reversed).expect("fit"));
    assert!(close(a.slope, b.slope));
    assert!(close(a.intercept, b.intercept));
    assert!(close(fit_quality(&data).expect("r2"), fit_quality(&reversed).expect("r2")));
}

#[test]
fn repeated_calls_are_identical() {
    let data = samples(&[(1.0, 1.5), (2.0, 1.0), (4.0, 3.5), (8.0, 4.0)]);
    assert_eq!(fit_linear(&data), fit_linear(&data));
    assert_eq!(fit_quality(&data), fit_quality(&data));
}

#[test]
fn r2_stays_within_unit_interval() {
    let data = (0..200)
        .map(|i| {
            let x = i as f64;
            Sample::new(x, (x * 1.3).sin() * 50.0 + x * 0.01)
        })
        .collect::<Vec<_>>();
    let r2 = fit_quality(&data).expect("r2");
    assert!((0.0..=1.0).contains(&r2), "r2 {r2}");
}

#[test]
fn constant_y_fits_flat_line_but_has_no_r2() {
    let data = samples(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
    let fit = fit_linear(&data).expect("fit");
    assert_eq!(fit.slope, 0.0);
    assert_eq!(fit.intercept, 5.0);
    assert_eq!(
        fit_quality(&data),
        Err(StatsError::DegenerateInput { variable: Variable::Dependent })
    );
}

#[test]
fn constant_non_representable_x_is_still_degenerate() {
    let data = (0..101).map(|i| Sample::new(0.1, i as f64)).collect::<Vec<_>>();
    assert!(matches!(fit_linear(&data), Err(StatsError::DegenerateInput { .. })));
}

#[test]
fn empty_and_single_sample_are_degenerate() {
    assert!(matches!(fit_linear(&[]), Err(StatsError::DegenerateInput { .. })));
    assert!(matches!(fit_quality(&[]), Err(StatsError::DegenerateInput { .. })));
    let one = samples(&[(3.0, 4.0)]);
    assert!(matches!(fit_linear(&one), Err(StatsError::DegenerateInput { .. })));
}

#[test]
fn non_finite_samples_are_rejected_with_their_index() {
    let data = samples(&[(1.0, 1.0), (2.0, f64::NAN), (3.0, 3.0)]);
    match fit_linear(&data) {
        Err(StatsError::InvalidSample { index, x, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(x, 2.0);
        }
        other => panic!("expected InvalidSample, got {other:?}"),
    }
    let data = samples(&[(f64::INFINITY, 1.0), (2.0, 2.0)]);
    assert!(matches!(fit_quality(&data), Err(StatsError::InvalidSample { index: 0, .. })));
}

#[test]
fn predict_evaluates_the_line() {
    let fit = fit_linear(&samples(&[(0.0, 1.0), (1.0, 3.0)])).expect("fit");
    assert_eq!(fit.predict(10.0), 21.0);
}

#[test]
fn extent_skips_non_finite_values() {
    assert_eq!(extent([3.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
    assert_eq!(extent(Vec::<f64>::new()), None);
    assert_eq!(extent([f64::NAN]), None);
}

#[test]
fn errors_render_readable_messages() {
    let e = StatsError::DegenerateInput { variable: Variable::Independent };
    assert_eq!(e.to_string(), "degenerate input: zero x-variance");
}

#[test]
fn large_offsets_do_not_cancel() {
    let data = samples(&[(1e9, 1.0), (1e9 + 1.0, 2.0), (1e9 + 2.0, 3.0)]);
    let fit = fit_linear(&data).expect("fit");
    assert!(close(fit.slope, 1.0), "slope {}", fit.slope);
    assert!(close(fit.intercept, -999_999_999.0), "intercept {}", fit.intercept);
    assert!(close(fit_quality(&data).expect("r2"), 1.0));
}

#[test]
fn magnitudes_near_f64_max_still_fit() {
    let data = samples(&[(1.0, 1e308), (2.0, 1.5e308), (3.0, 1.7e308)]);
    let fit = fit_linear(&data).expect("fit");
    assert!(close(fit.slope, 3.5e307), "slope {}", fit.slope);
    assert!(close(fit.intercept, 7e307), "intercept {}", fit.intercept);
    let r2 = fit_quality(&data).expect("r2");
    assert!(close(r2, 49.0 / 52.0), "r2 {r2}");
}

#[test]
fn opposite_extremes_report_overflow() {
    let data = samples(&[(-1.7e308, 0.0), (1.7e308, 1.0), (1.7e308, 2.0)]);
    assert_eq!(fit_linear(&data), Err(StatsError::Overflow));
    assert_eq!(fit_quality(&data), Err(StatsError::Overflow));
}

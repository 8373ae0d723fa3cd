use dashplot_core::grid::{format_tick, linspace, tick_increment, tick_step, ticks};
use dashplot_core::scale::{BandScale, LinearScale, OrdinalScale};
use dashplot_core::theme::{self, CATEGORY10, DONUT_PRESET};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linspace_includes_both_ends() {
    assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(2.0, 3.0, 1), vec![2.0, 3.0]);
}

#[test]
fn tick_increment_snaps_to_one_two_five() {
    assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
    assert_eq!(tick_increment(0.0, 1842.0, 10), 200.0);
    assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
    assert_eq!(tick_increment(0.0, 45.0, 10), 5.0);
    // sub-unit steps come back inverted
    assert_eq!(tick_increment(0.0, 1.0, 5), -5.0);
    assert_eq!(tick_step(0.0, 1.0, 5), 0.2);
    assert_eq!(tick_increment(3.0, 3.0, 10), 0.0);
}

#[test]
fn ticks_cover_the_domain_inclusively() {
    assert_eq!(ticks(0.0, 10.0, 10), (0..=10).map(f64::from).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(-3.5, 3.5, 5), vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
    assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    assert_eq!(ticks(4.0, 4.0, 10), vec![4.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
    assert!(ticks(f64::NAN, 1.0, 10).is_empty());
}

#[test]
fn tick_labels_use_step_precision_and_group_thousands() {
    assert_eq!(format_tick(1200.0, 200.0), "1,200");
    assert_eq!(format_tick(0.2, 0.2), "0.2");
    assert_eq!(format_tick(0.25, 0.05), "0.25");
    assert_eq!(format_tick(-5.0, 1.0), "\u{2212}5");
    assert_eq!(format_tick(-0.0, 1.0), "0");
    assert_eq!(format_tick(1_000_000.0, 500_000.0), "1,000,000");
}

#[test]
fn nice_extends_the_domain_to_round_values() {
    assert_eq!(LinearScale::new((0.13, 9.7), (0.0, 1.0)).nice(10).domain, (0.0, 10.0));
    assert_eq!(LinearScale::new((0.0, 1842.0), (0.0, 1.0)).nice(10).domain, (0.0, 2000.0));
    assert_eq!(LinearScale::new((1.0, 6.0), (0.0, 1.0)).nice(10).domain, (1.0, 6.0));
    // reversed domains stay reversed
    assert_eq!(LinearScale::new((9.7, 0.13), (0.0, 1.0)).nice(10).domain, (10.0, 0.0));
}

#[test]
fn linear_scale_maps_and_inverts() {
    let s = LinearScale::new((0.0, 200.0), (400.0, 0.0));
    assert_eq!(s.map(0.0), 400.0);
    assert_eq!(s.map(200.0), 0.0);
    assert_eq!(s.map(50.0), 300.0);
    assert!(approx(s.invert(300.0), 50.0));
    // collapsed domain maps to the middle of the range
    assert_eq!(LinearScale::new((5.0, 5.0), (0.0, 100.0)).map(5.0), 50.0);
}

#[test]
fn band_scale_pads_and_centers_bands() {
    let labels = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let b = BandScale::new(labels, (0.0, 100.0), 0.1);
    let step = 100.0 / 4.1;
    assert!(approx(b.step(), step));
    assert!(approx(b.bandwidth(), step * 0.9));
    assert!(approx(b.at(0), step * 0.1));
    assert!(approx(b.at(3) + b.bandwidth(), 100.0 - step * 0.1));
    assert_eq!(b.position("C"), Some(b.at(2)));
    assert_eq!(b.position("Z"), None);
    assert!(approx(b.center(1), b.at(1) + b.bandwidth() / 2.0));
}

#[test]
fn band_scale_with_single_label_fills_the_range() {
    let b = BandScale::new(vec!["only".to_string()], (0.0, 50.0), 0.1);
    assert!(b.at(0) >= 0.0);
    assert!(b.at(0) + b.bandwidth() <= 50.0 + 1e-9);
}

#[test]
fn ordinal_scale_assigns_in_order_and_cycles() {
    let mut s = OrdinalScale::with_domain(&DONUT_PRESET, ["LCD", "LED", "OLED"]);
    assert_eq!(s.color("LED"), DONUT_PRESET[1]);
    // an unseen label extends the domain and wraps around the palette
    assert_eq!(s.color("Plasma"), DONUT_PRESET[0]);
    assert_eq!(s.domain().len(), 4);

    let mut c = OrdinalScale::new(&CATEGORY10);
    assert_eq!(c.color("first"), CATEGORY10[0]);
    assert_eq!(c.color("second"), CATEGORY10[1]);
    assert_eq!(c.color("first"), CATEGORY10[0]);
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("solarized").name, "light");
    assert_eq!(theme::presets().len(), 2);
}

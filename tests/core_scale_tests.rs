use approx::assert_relative_eq;
use brushchart_rs::core::{LinearScale, StockPoint, TimeScale, ValueScale};
use brushchart_rs::error::ChartError;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original, 1000.0).expect("to pixel");
    let recovered = scale.pixel_to_domain(px, 1000.0).expect("from pixel");

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn zero_pixel_range_is_rejected() {
    let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
    assert!(scale.domain_to_pixel(0.5, 0.0).is_err());
}

#[test]
fn time_scale_fits_series_extent_to_pixel_range() {
    // Series [(d1,10),(d2,50),(d3,20)] over pixel range [0,100]:
    // d1 maps to 0, d3 maps to 100.
    let points = vec![
        StockPoint::new(100.0, 10.0),
        StockPoint::new(200.0, 50.0),
        StockPoint::new(300.0, 20.0),
    ];

    let scale = TimeScale::from_series(&points).expect("time fit");
    assert_eq!(scale.time_to_pixel(100.0, 100.0).expect("left"), 0.0);
    assert_eq!(scale.time_to_pixel(300.0, 100.0).expect("right"), 100.0);
}

#[test]
fn time_scale_round_trip_within_tolerance() {
    let scale = TimeScale::new(1_700_000_000.0, 1_700_000_600.0).expect("valid scale");

    let original = 1_700_000_123.0;
    let px = scale.time_to_pixel(original, 1200.0).expect("to pixel");
    let recovered = scale.pixel_to_time(px, 1200.0).expect("from pixel");

    assert_relative_eq!(recovered, original, epsilon = 1e-6);
}

#[test]
fn empty_series_is_a_named_scale_failure() {
    assert!(matches!(
        TimeScale::from_series(&[]),
        Err(ChartError::EmptySeries)
    ));
    assert!(matches!(
        ValueScale::from_series(&[], 100.0),
        Err(ChartError::EmptySeries)
    ));
}

#[test]
fn single_point_series_gets_a_padded_time_domain() {
    let points = vec![StockPoint::new(500.0, 42.0)];
    let scale = TimeScale::from_series(&points).expect("time fit");

    let (start, end) = scale.domain();
    assert!(start < 500.0);
    assert!(end > 500.0);
}

#[test]
fn value_scale_headroom_is_one_third_of_pixel_range() {
    let points = vec![
        StockPoint::new(100.0, 10.0),
        StockPoint::new(200.0, 50.0),
        StockPoint::new(300.0, 20.0),
    ];

    let scale = ValueScale::from_series(&points, 100.0).expect("value fit");
    let (lower, upper) = scale.domain();
    assert_eq!(lower, 0.0);
    assert_relative_eq!(upper, 50.0 + 100.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn value_scale_uses_inverted_y_axis() {
    let points = vec![StockPoint::new(0.0, 60.0)];
    let scale = ValueScale::from_series(&points, 90.0).expect("value fit");

    let baseline = scale.value_to_pixel(0.0).expect("baseline");
    assert_eq!(baseline, 90.0);

    let (_, upper) = scale.domain();
    let top = scale.value_to_pixel(upper).expect("top");
    assert_relative_eq!(top, 0.0, epsilon = 1e-12);
}

#[test]
fn value_scale_pixel_round_trip() {
    let points = vec![StockPoint::new(0.0, 75.0)];
    let scale = ValueScale::from_series(&points, 430.0).expect("value fit");

    let px = scale.value_to_pixel(33.0).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");
    assert_relative_eq!(recovered, 33.0, epsilon = 1e-9);
}

#[test]
fn all_negative_series_still_fits_a_value_scale() {
    // -90 + 90/3 pulls the upper bound to -60; the domain inverts but the
    // mapping stays a valid linear bijection.
    let points = vec![
        StockPoint::new(0.0, -100.0),
        StockPoint::new(1.0, -90.0),
    ];

    let scale = ValueScale::from_series(&points, 90.0).expect("value fit");
    let (lower, upper) = scale.domain();
    assert_eq!(lower, 0.0);
    assert_relative_eq!(upper, -60.0, epsilon = 1e-9);

    let px = scale.value_to_pixel(-75.0).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");
    assert_relative_eq!(recovered, -75.0, epsilon = 1e-9);
}

#[test]
fn zero_upper_bound_is_the_only_rejected_value_domain() {
    // max(close) + 30/3 == 0 exactly: no bijection exists.
    let points = vec![StockPoint::new(0.0, -10.0)];
    assert!(ValueScale::from_series(&points, 30.0).is_err());
}

#[test]
fn nice_fit_rounds_the_upper_bound_up_to_a_step_boundary() {
    // max(close) + 100/3 = 133.33..; a 1-2-5 step of 20 rounds that to 140.
    let points = vec![StockPoint::new(0.0, 100.0)];
    let scale = ValueScale::from_series_nice(&points, 100.0).expect("nice fit");

    let (_, upper) = scale.domain();
    assert_relative_eq!(upper, 140.0, epsilon = 1e-9);
}

#[test]
fn nice_fit_keeps_an_already_round_upper_bound() {
    // 50 + 90/3 = 80, already on a step-of-10 boundary.
    let points = vec![StockPoint::new(0.0, 50.0)];
    let scale = ValueScale::from_series_nice(&points, 90.0).expect("nice fit");

    let (_, upper) = scale.domain();
    assert_relative_eq!(upper, 80.0, epsilon = 1e-9);
}

#[test]
fn nice_fit_never_shrinks_the_domain() {
    let points = vec![StockPoint::new(0.0, 37.4)];
    let plain = ValueScale::from_series(&points, 64.0).expect("plain fit");
    let nice = ValueScale::from_series_nice(&points, 64.0).expect("nice fit");

    assert!(nice.domain().1 >= plain.domain().1);
}

#[test]
fn decimal_close_matches_the_f64_constructor() {
    let time = Utc
        .with_ymd_and_hms(2007, 4, 24, 7, 0, 0)
        .single()
        .expect("valid time");

    let from_decimal =
        StockPoint::from_decimal_close(time, Decimal::new(9324, 2)).expect("decimal close");
    let from_f64 = StockPoint::from_datetime_close(time, 93.24);

    assert_eq!(from_decimal.x, from_f64.x);
    assert_relative_eq!(from_decimal.close, from_f64.close, epsilon = 1e-9);
}

#[test]
fn non_finite_samples_are_rejected() {
    let points = vec![StockPoint::new(f64::NAN, 1.0)];
    assert!(TimeScale::from_series(&points).is_err());

    let points = vec![StockPoint::new(1.0, f64::INFINITY)];
    assert!(ValueScale::from_series(&points, 100.0).is_err());
}

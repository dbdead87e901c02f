use super::*;

fn ramp() -> Curve {
    Curve::odd(&[(1.0, 60.0), (2.0, 90.0)], Ease::Smoothstep)
}

#[test]
fn odd_curve_passes_through_keys_and_origin() {
    let c = ramp();
    c.validate().unwrap();
    assert!(c.is_neutral_at_origin());
    assert_eq!(c.sample(1.0), 60.0);
    assert_eq!(c.sample(-1.0), -60.0);
    assert_eq!(c.sample(2.0), 90.0);
    assert_eq!(c.sample(-2.0), -90.0);
}

#[test]
fn even_curve_mirrors_values() {
    let c = Curve::even(&[(1.0, 8.0)], Ease::Linear);
    assert_eq!(c.sample(0.5), 4.0);
    assert_eq!(c.sample(-0.5), 4.0);
}

#[test]
fn smoothstep_segments_are_monotonic() {
    let c = ramp();
    let mut prev = c.sample(-2.0);
    for i in -199..=200 {
        let v = c.sample(f64::from(i) / 100.0);
        assert!(v >= prev, "decreased at {i}");
        prev = v;
    }
}

#[test]
fn extrapolates_linearly_past_the_ends() {
    let c = ramp();
    // Outer segment slope is (90 - 60) / 1.
    assert!((c.sample(3.0) - 120.0).abs() < 1e-9);
    assert!((c.sample(-4.0) + 150.0).abs() < 1e-9);
    assert!(c.sample(1e6).is_finite());
}

#[test]
fn degenerate_curves_are_total() {
    assert_eq!(Curve::flat().sample(3.0), 0.0);
    let single = Curve::new(vec![CurveKey::new(0.0, 2.0, Ease::Linear)]).unwrap();
    assert_eq!(single.sample(-10.0), 2.0);
    assert_eq!(ramp().sample(f64::NAN), 0.0);
}

#[test]
fn validation_rejects_unsorted_and_non_finite_keys() {
    let unsorted = vec![
        CurveKey::new(1.0, 0.0, Ease::Linear),
        CurveKey::new(0.0, 0.0, Ease::Linear),
    ];
    assert!(Curve::new(unsorted).is_err());

    let dup = vec![
        CurveKey::new(0.0, 0.0, Ease::Linear),
        CurveKey::new(0.0, 1.0, Ease::Linear),
    ];
    assert!(Curve::new(dup).is_err());

    let nan = vec![CurveKey::new(0.0, f64::NAN, Ease::Linear)];
    assert!(Curve::new(nan).is_err());
}

#[test]
fn serializes_as_plain_key_list() {
    let c = Curve::odd(&[(1.0, 10.0)], Ease::Linear);
    let json = serde_json::to_value(&c).unwrap();
    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 3);
    let back: Curve = serde_json::from_value(json).unwrap();
    assert_eq!(back, c);
}

use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn input_is_clamped() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-2.0), 0.0);
        assert_eq!(ease.apply(3.0), 1.0);
    }
}

#[test]
fn smooth_variants_are_symmetric_about_midpoint() {
    for ease in [Ease::Smoothstep, Ease::Smootherstep] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((ease.apply(0.2) + ease.apply(0.8) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn serde_names_are_snake_case() {
    assert_eq!(
        serde_json::to_string(&Ease::InOutCubic).unwrap(),
        "\"in_out_cubic\""
    );
    let e: Ease = serde_json::from_str("\"smoothstep\"").unwrap();
    assert_eq!(e, Ease::Smoothstep);
}

use super::*;

const DT: f64 = 1.0 / 60.0;

#[test]
fn zero_dt_returns_state_unchanged() {
    let cfg = SpringConfig::default();
    let state = SmootherState {
        value: 12.0,
        rate: -3.0,
    };
    for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let (v, next) = cfg.smooth(500.0, dt, state);
        assert_eq!(v, 12.0);
        assert_eq!(next, state);
    }
}

#[test]
fn non_finite_raw_is_treated_as_zero() {
    let cfg = SpringConfig::default();
    let start = SmootherState {
        value: 100.0,
        rate: 0.0,
    };
    let (a, _) = cfg.smooth(f64::NAN, DT, start);
    let (b, _) = cfg.smooth(0.0, DT, start);
    assert_eq!(a, b);
    let (c, s) = cfg.smooth(f64::NEG_INFINITY, DT, start);
    assert!(c.is_finite());
    assert!(s.rate.is_finite());
}

#[test]
fn step_response_converges_without_overshoot() {
    for cfg in [
        SpringConfig::critical(120.0),
        SpringConfig {
            damping: 60.0,
            ..SpringConfig::critical(120.0)
        },
    ] {
        let mut s = Smoother::new(cfg);
        let mut prev = 0.0;
        for _ in 0..600 {
            let v = s.update(1000.0, DT);
            assert!(v <= 1000.0, "overshoot: {v}");
            assert!(v >= prev);
            prev = v;
        }
        assert!((s.value() - 1000.0).abs() < 1e-3);
    }
}

#[test]
fn underdamped_config_is_raised_to_critical() {
    let cfg = SpringConfig {
        damping: 0.5,
        ..SpringConfig::critical(120.0)
    };
    assert_eq!(cfg.damping_ratio(), 1.0);
    let mut s = Smoother::new(cfg);
    for _ in 0..600 {
        assert!(s.update(1.0, DT) <= 1.0);
    }
}

#[test]
fn output_is_continuous_across_sign_reversals() {
    let cfg = SpringConfig::default();
    let amplitude = 2000.0;
    let bound = 2.0 * cfg.omega() * (2.0 * amplitude) * DT;

    let mut s = Smoother::new(cfg);
    let mut prev = s.value();
    for frame in 0..900 {
        let raw = if (frame / 7) % 2 == 0 {
            amplitude
        } else {
            -amplitude
        };
        let v = s.update(raw, DT);
        assert!(
            (v - prev).abs() <= bound,
            "jump of {} at frame {frame}",
            (v - prev).abs()
        );
        assert!(v.abs() <= amplitude * 1.5);
        prev = v;
    }
}

#[test]
fn closed_form_is_frame_rate_independent() {
    let cfg = SpringConfig::default();
    let mut fine = Smoother::new(cfg);
    let mut coarse = Smoother::new(cfg);
    for _ in 0..60 {
        fine.update(300.0, 1.0 / 60.0);
    }
    for _ in 0..30 {
        coarse.update(300.0, 1.0 / 30.0);
    }
    assert!((fine.value() - coarse.value()).abs() < 1e-6);
}

#[test]
fn large_dt_is_clamped_to_max_step() {
    let cfg = SpringConfig::default();
    let (clamped, _) = cfg.smooth(1000.0, 5.0, SmootherState::default());
    let (max_step, _) = cfg.smooth(1000.0, cfg.max_dt, SmootherState::default());
    assert_eq!(clamped, max_step);
    assert!(clamped < 1000.0);
}

#[test]
fn settles_exactly_at_rest() {
    let mut s = Smoother::new(SpringConfig::default());
    s.update(50.0, DT);
    for _ in 0..2000 {
        s.update(0.0, DT);
    }
    assert_eq!(s.value(), 0.0);
    assert_eq!(s.state().rate, 0.0);
    s.reset();
    assert_eq!(s.state(), SmootherState::default());
}

#[test]
fn validate_rejects_bad_constants() {
    assert!(SpringConfig::default().validate().is_ok());
    let bad = SpringConfig {
        stiffness: 0.0,
        ..SpringConfig::default()
    };
    assert!(bad.validate().is_err());
    let bad = SpringConfig {
        damping: f64::NAN,
        ..SpringConfig::default()
    };
    assert!(bad.validate().is_err());
    let bad = SpringConfig {
        max_dt: 0.0,
        ..SpringConfig::default()
    };
    assert!(bad.validate().is_err());
}

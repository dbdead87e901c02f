use std::cell::Cell;

use super::*;
use crate::frame::scheduler::ManualScheduler;

const DT: f64 = 1.0 / 60.0;

fn tick_at(i: u32, dt: f64) -> FrameTick {
    FrameTick {
        time_secs: f64::from(i) * dt,
        dt,
        elapsed: dt,
    }
}

#[test]
fn marquee_idles_at_base_speed() {
    let mut m = MarqueeDriver::new(MarqueeConfig::default()).unwrap();
    for _ in 0..600 {
        m.step(0.0, DT);
    }
    assert!((m.drift().position - 40.0).abs() < 1e-9);
    assert_eq!(m.drift().direction, Direction::Forward);
}

#[test]
fn marquee_speeds_up_and_reverses_with_scroll() {
    let mut m = MarqueeDriver::new(MarqueeConfig::default()).unwrap();
    let mut scroll = 0.0;
    let mut last = m.observe(scroll, tick_at(0, DT));

    // Scroll down at 1200 px/s for half a second.
    for i in 1..=30 {
        scroll += 20.0;
        last = m.observe(scroll, tick_at(i, DT));
    }
    assert_eq!(last.direction, Direction::Forward);
    assert!(last.smoothed_velocity > 0.0);
    let fast_step = 4.0 * DT * m.config().response.multiplier(last.smoothed_velocity);
    assert!(fast_step > 4.0 * DT * 2.0);

    // Then scroll up.
    for i in 31..=90 {
        scroll -= 20.0;
        last = m.observe(scroll, tick_at(i, DT));
    }
    assert_eq!(last.direction, Direction::Reverse);
    assert!(last.smoothed_velocity < 0.0);
    assert!(last.display >= -45.0 && last.display < -20.0);
}

#[test]
fn marquee_reset_restores_mount_state() {
    let mut m = MarqueeDriver::new(MarqueeConfig::default()).unwrap();
    m.step(-900.0, DT);
    m.step(-900.0, DT);
    m.reset();
    assert_eq!(m.drift(), DriftState::new());
    let f = m.observe(500.0, tick_at(0, DT));
    assert_eq!(f.raw_velocity, 0.0);
}

#[test]
fn carousel_frame_reports_step_and_order() {
    let c = Carousel::new(CarouselConfig::default(), 3).unwrap();
    assert_eq!(c.panel_count(), 3);
    let f = c.frame(0.5);
    assert_eq!(f.active_step, 1.0);
    assert_eq!(f.panels.len(), 3);
    assert_eq!(f.draw_order.last(), Some(&1));
}

#[test]
fn tab_strip_uses_breakpoints() {
    let t = TabStrip::new(Breakpoints::new(vec![0.3, 0.7]).unwrap());
    assert_eq!(t.category_count(), 3);
    assert_eq!(t.active(0.5), 1);
    assert_eq!(TabStrip::default().active(0.9), 2);
}

#[test]
fn scene_tick_composes_all_effects() {
    let mut scene = KineticScene::new(&EngineConfig::default()).unwrap();
    let first = scene.tick(ScrollSample::new(0.0, 0.0));
    assert_eq!(first.progress, 0.0);
    assert_eq!(first.active_tab, 0);
    assert_eq!(first.dt, 0.001);

    let mid = scene.tick(ScrollSample::new(DT, 1500.0));
    assert_eq!(mid.progress, 0.5);
    assert_eq!(mid.active_tab, 1);
    assert_eq!(mid.carousel.active_step, 1.0);
    assert!(mid.marquee.raw_velocity > 0.0);
}

#[test]
fn scene_run_matches_repeated_ticks() {
    let samples: Vec<ScrollSample> = (0..120)
        .map(|i| ScrollSample::new(f64::from(i) * DT, f64::from(i) * 25.0))
        .collect();
    let mut a = KineticScene::new(&EngineConfig::default()).unwrap();
    let mut b = KineticScene::new(&EngineConfig::default()).unwrap();
    let ran = a.run(&samples);
    let ticked: Vec<SceneFrame> = samples.iter().map(|s| b.tick(*s)).collect();
    assert_eq!(ran, ticked);

    a.reset();
    let again = a.run(&samples);
    assert_eq!(again, ran);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let mut cfg = EngineConfig::default();
    cfg.carousel.scale_floor = 0.0;
    assert!(KineticScene::new(&cfg).is_err());
}

#[test]
fn mounted_scene_stops_rendering_after_unmount() {
    let sched = ManualScheduler::new();
    let scene = Rc::new(RefCell::new(
        KineticScene::new(&EngineConfig::default()).unwrap(),
    ));
    let scroll = Rc::new(Cell::new(0.0));
    let rendered = Rc::new(RefCell::new(Vec::new()));

    let sub = {
        let scroll = Rc::clone(&scroll);
        let rendered = Rc::clone(&rendered);
        mount(
            &sched,
            Rc::clone(&scene),
            move || scroll.get(),
            move |f: &SceneFrame| rendered.borrow_mut().push(f.active_tab),
        )
    };

    for i in 0..3 {
        scroll.set(f64::from(i) * 1400.0);
        sched.dispatch(f64::from(i) * DT);
    }
    assert_eq!(*rendered.borrow(), vec![0, 1, 2]);

    drop(sub);
    assert!(sched.is_empty());
    sched.dispatch(1.0);
    assert_eq!(rendered.borrow().len(), 3);
}

#[test]
fn repeated_timestamps_do_not_inflate_velocity() {
    let mut scene = KineticScene::new(&EngineConfig::default()).unwrap();
    let frames = scene.run(&[
        ScrollSample::new(0.0, 0.0),
        ScrollSample::new(DT, 10.0),
        ScrollSample::new(DT, 20.0),
        ScrollSample::new(DT * 0.5, 25.0),
    ]);
    assert!((frames[1].marquee.raw_velocity - 600.0).abs() < 1e-6);
    // repeated, then backwards: min_dt step, previous estimate held
    for f in &frames[2..] {
        assert_eq!(f.dt, 0.001);
        assert!((f.marquee.raw_velocity - 600.0).abs() < 1e-6, "raw {}", f.marquee.raw_velocity);
    }
}

use std::rc::Rc;

use super::*;

fn counter() -> (Rc<Cell<u32>>, impl FnMut(f64) + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    (count, move |_now| c.set(c.get() + 1))
}

#[test]
fn subscription_releases_on_drop() {
    let sched = ManualScheduler::new();
    let (count, cb) = counter();
    {
        let sub = FrameSubscription::new(&sched, cb);
        assert_eq!(sched.len(), 1);
        assert_eq!(sched.dispatch(0.0), 1);
        assert_eq!(sched.dispatch(0.016), 1);
        let _ = sub.id();
    }
    assert!(sched.is_empty());
    assert_eq!(sched.dispatch(0.032), 0);
    assert_eq!(count.get(), 2);
}

#[test]
fn callbacks_receive_the_timestamp() {
    let sched = ManualScheduler::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    let _sub = FrameSubscription::new(&sched, move |now| s.borrow_mut().push(now));
    sched.dispatch(1.0);
    sched.dispatch(1.5);
    assert_eq!(*seen.borrow(), vec![1.0, 1.5]);
}

#[test]
fn independent_subscriptions_do_not_interfere() {
    let sched = ManualScheduler::new();
    let (a_count, a) = counter();
    let (b_count, b) = counter();
    let sub_a = FrameSubscription::new(&sched, a);
    let sub_b = FrameSubscription::new(&sched, b);
    assert_ne!(sub_a.id(), sub_b.id());

    sched.dispatch(0.0);
    drop(sub_a);
    sched.dispatch(0.1);

    assert_eq!(a_count.get(), 1);
    assert_eq!(b_count.get(), 2);
    drop(sub_b);
    assert!(sched.is_empty());
}

#[test]
fn deregistering_during_dispatch_is_deferred() {
    let sched = Rc::new(ManualScheduler::new());
    let (count, cb) = counter();
    let victim = sched.register(Box::new(cb));

    let s = Rc::clone(&sched);
    let killer = sched.register(Box::new(move |_| s.deregister(victim)));

    // The killer runs after the victim on the first dispatch.
    assert_eq!(sched.dispatch(0.0), 2);
    assert_eq!(sched.len(), 1);
    assert_eq!(sched.dispatch(0.1), 1);
    assert_eq!(count.get(), 1);

    sched.deregister(killer);
    assert!(sched.is_empty());
}

#[test]
fn registering_during_dispatch_runs_next_frame() {
    let sched = Rc::new(ManualScheduler::new());
    let (count, cb) = counter();
    let pending = Rc::new(RefCell::new(Some(cb)));

    let s = Rc::clone(&sched);
    let p = Rc::clone(&pending);
    sched.register(Box::new(move |_| {
        if let Some(cb) = p.borrow_mut().take() {
            s.register(Box::new(cb));
        }
    }));

    assert_eq!(sched.dispatch(0.0), 1);
    assert_eq!(count.get(), 0);
    assert_eq!(sched.len(), 2);
    assert_eq!(sched.dispatch(0.1), 2);
    assert_eq!(count.get(), 1);
}

//! Frame-callback registration with guaranteed release.
//!
//! A host scheduler (the browser's animation-frame queue, a game loop, a test harness) hands
//! out [`CallbackId`]s. Visual instances never hold a bare id; they hold a
//! [`FrameSubscription`], which deregisters its callback when dropped.

use std::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallbackId(u64);

/// Per-frame callback; receives the host timestamp in seconds.
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Host-side frame queue.
///
/// Methods take `&self`: schedulers are single-threaded and shared by every mounted instance.
pub trait FrameScheduler {
    fn register(&self, callback: FrameCallback) -> CallbackId;
    fn deregister(&self, id: CallbackId);
}

/// Scoped registration of one frame callback.
pub struct FrameSubscription<'s, S: FrameScheduler + ?Sized> {
    scheduler: &'s S,
    id: CallbackId,
}

impl<'s, S: FrameScheduler + ?Sized> FrameSubscription<'s, S> {
    /// Register `callback` on `scheduler` until the returned guard is dropped.
    pub fn new(scheduler: &'s S, callback: impl FnMut(f64) + 'static) -> Self {
        let id = scheduler.register(Box::new(callback));
        tracing::debug!(?id, "frame callback registered");
        Self { scheduler, id }
    }

    pub fn id(&self) -> CallbackId {
        self.id
    }
}

impl<S: FrameScheduler + ?Sized> Drop for FrameSubscription<'_, S> {
    fn drop(&mut self) {
        self.scheduler.deregister(self.id);
        tracing::debug!(id = ?self.id, "frame callback released");
    }
}

impl<S: FrameScheduler + ?Sized> std::fmt::Debug for FrameSubscription<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSubscription")
            .field("id", &self.id)
            .finish()
    }
}

/// In-process scheduler driven explicitly by [`ManualScheduler::dispatch`].
///
/// Used for offline simulation and tests. Callbacks may register or deregister (including
/// themselves) while a dispatch is running; the changes apply once it finishes, and a callback
/// deregistered mid-dispatch is not invoked afterwards.
#[derive(Default)]
pub struct ManualScheduler {
    callbacks: RefCell<Vec<(CallbackId, FrameCallback)>>,
    cancelled: RefCell<Vec<CallbackId>>,
    next_id: Cell<u64>,
    dispatching: Cell<bool>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every live callback with `now_secs`. Returns how many ran.
    pub fn dispatch(&self, now_secs: f64) -> usize {
        let mut running = std::mem::take(&mut *self.callbacks.borrow_mut());
        self.dispatching.set(true);

        let mut ran = 0;
        for (id, callback) in running.iter_mut() {
            let skip = self.cancelled.borrow().contains(id);
            if !skip {
                callback(now_secs);
                ran += 1;
            }
        }

        self.dispatching.set(false);
        let added = std::mem::take(&mut *self.callbacks.borrow_mut());
        running.extend(added);
        let cancelled = std::mem::take(&mut *self.cancelled.borrow_mut());
        running.retain(|(id, _)| !cancelled.contains(id));
        *self.callbacks.borrow_mut() = running;
        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn register(&self, callback: FrameCallback) -> CallbackId {
        let id = CallbackId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.callbacks.borrow_mut().push((id, callback));
        id
    }

    fn deregister(&self, id: CallbackId) {
        if self.dispatching.get() {
            self.cancelled.borrow_mut().push(id);
        } else {
            self.callbacks.borrow_mut().retain(|(cid, _)| *cid != id);
        }
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("live", &self.len())
            .field("next_id", &self.next_id.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/scheduler.rs"]
mod tests;

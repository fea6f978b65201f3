use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

type Callback = Arc<dyn Fn() + Send + Sync>;

/// One shared 1-second clock for every countdown and live-update display.
///
/// The underlying interval task exists only while at least one subscriber is
/// registered: the first [`subscribe`](SharedTicker::subscribe) spawns it, the
/// last release aborts it, and a later subscription spawns a fresh one.
/// Constructed once per application and handed to consumers by reference or
/// clone; tests build their own instance.
///
/// `subscribe` must be called from within a Tokio runtime.
#[derive(Clone)]
pub struct SharedTicker {
    inner: Arc<Mutex<TickerInner>>,
}

struct TickerInner {
    subscribers: HashMap<u64, Callback>,
    next_id: u64,
    task: Option<JoinHandle<()>>,
}

impl SharedTicker {
    pub const PERIOD: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TickerInner {
                subscribers: HashMap::new(),
                next_id: 0,
                task: None,
            })),
        }
    }

    /// Register a callback invoked once per tick. Each call registers its own
    /// entry; closures carry no reference identity to dedupe on, so the
    /// idempotence guarantee lives on the returned handle instead.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> TickerSubscription {
        let mut guard = self.inner.lock().expect("ticker mutex poisoned");
        let id = guard.next_id;
        guard.next_id += 1;
        guard.subscribers.insert(id, Arc::new(callback));

        if guard.task.is_none() {
            guard.task = Some(Self::spawn_interval(Arc::downgrade(&self.inner)));
            tracing::debug!("shared ticker started");
        }
        drop(guard);

        TickerSubscription {
            registry: Arc::downgrade(&self.inner),
            id,
            released: AtomicBool::new(false),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        let guard = self.inner.lock().expect("ticker mutex poisoned");
        guard.subscribers.len()
    }

    pub fn is_active(&self) -> bool {
        let guard = self.inner.lock().expect("ticker mutex poisoned");
        guard.task.is_some()
    }

    fn spawn_interval(registry: Weak<Mutex<TickerInner>>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Self::PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a fresh interval completes immediately;
            // consume it so subscribers wait a full period.
            interval.tick().await;

            loop {
                interval.tick().await;

                let Some(inner) = registry.upgrade() else {
                    break;
                };
                // Snapshot before invoking so callbacks may subscribe or
                // unsubscribe during the tick without skewing dispatch.
                let snapshot: Vec<Callback> = {
                    let guard = inner.lock().expect("ticker mutex poisoned");
                    guard.subscribers.values().cloned().collect()
                };
                drop(inner);

                for callback in snapshot {
                    callback();
                }
            }
        })
    }

    fn release(registry: &Mutex<TickerInner>, id: u64) {
        let mut guard = registry.lock().expect("ticker mutex poisoned");
        guard.subscribers.remove(&id);
        if guard.subscribers.is_empty() {
            if let Some(task) = guard.task.take() {
                task.abort();
                tracing::debug!("shared ticker stopped, no subscribers left");
            }
        }
    }
}

impl Default for SharedTicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle owning one registration. Releasing twice, or dropping after an
/// explicit release, is a no-op.
pub struct TickerSubscription {
    registry: Weak<Mutex<TickerInner>>,
    id: u64,
    released: AtomicBool,
}

impl TickerSubscription {
    pub fn unsubscribe(&self) {
        if self.released.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            SharedTicker::release(&registry, self.id);
        }
    }
}

impl Drop for TickerSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

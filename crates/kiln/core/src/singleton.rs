//! Process-wide lazily constructed singletons
//!
//! [`SingletonCell`] holds at most one instance of `T`, built on the first
//! call to [`SingletonCell::get_instance`]. The cell moves through
//!
//! ```text
//! Uninitialized ──get_instance──▶ Initializing ──ok──▶ Ready
//!       ▲                              │
//!       └────────── error / panic ─────┘
//! ```
//!
//! Exactly one caller wins the `Uninitialized → Initializing` transition and
//! runs the initializer, outside the lock. Every other caller blocks on a
//! condition variable until the winner settles the cell. The instance is
//! published only once fully built; a failed attempt rolls the cell back so a
//! later call can try again. Callers that were waiting on a failed attempt get
//! the same error and must retry themselves.
//!
//! ```rust
//! use kiln_core::SingletonCell;
//!
//! struct Settings {
//!     retries: u32,
//! }
//!
//! fn load_settings() -> anyhow::Result<Settings> {
//!     Ok(Settings { retries: 3 })
//! }
//!
//! static SETTINGS: SingletonCell<Settings> = SingletonCell::new(load_settings);
//!
//! let a = SETTINGS.get_instance().unwrap();
//! let b = SETTINGS.get_instance().unwrap();
//! assert_eq!(a.retries, 3);
//! assert!(std::sync::Arc::ptr_eq(&a, &b));
//! ```

use crate::error::{CreationError, Result, SharedError};
use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use tracing::debug;

/// Observable lifecycle state of a [`SingletonCell`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SingletonState {
    Uninitialized,
    Initializing,
    Ready,
}

enum Slot<T> {
    Uninitialized,
    /// Construction in progress on the given thread
    Initializing(ThreadId),
    Ready(Arc<T>),
}

struct CellState<T> {
    slot: Slot<T>,
    failed_attempts: u64,
    last_failure: Option<SharedError>,
}

/// Thread-safe, lazily initialized, process-wide instance of `T`
pub struct SingletonCell<T, F = fn() -> anyhow::Result<T>> {
    state: Mutex<CellState<T>>,
    settled: Condvar,
    init: F,
}

impl<T, F> SingletonCell<T, F> {
    /// Create an empty cell that builds its instance with `init`
    pub const fn new(init: F) -> Self {
        Self {
            state: parking_lot::const_mutex(CellState {
                slot: Slot::Uninitialized,
                failed_attempts: 0,
                last_failure: None,
            }),
            settled: Condvar::new(),
            init,
        }
    }

    /// The instance if it has been published; never blocks or constructs
    pub fn peek(&self) -> Option<Arc<T>> {
        match &self.state.lock().slot {
            Slot::Ready(instance) => Some(Arc::clone(instance)),
            _ => None,
        }
    }

    pub fn state(&self) -> SingletonState {
        match self.state.lock().slot {
            Slot::Uninitialized => SingletonState::Uninitialized,
            Slot::Initializing(_) => SingletonState::Initializing,
            Slot::Ready(_) => SingletonState::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == SingletonState::Ready
    }

    /// Number of initialization attempts that failed so far
    pub fn failed_attempts(&self) -> u64 {
        self.state.lock().failed_attempts
    }

    fn construction_error(source: SharedError) -> CreationError {
        CreationError::SingletonConstruction {
            type_name: std::any::type_name::<T>(),
            source,
        }
    }

    fn publish(&self, instance: Arc<T>) {
        let mut state = self.state.lock();
        state.slot = Slot::Ready(instance);
        state.last_failure = None;
        drop(state);
        self.settled.notify_all();
        debug!(type_name = std::any::type_name::<T>(), "Singleton ready");
    }

    fn roll_back(&self, failure: SharedError) {
        let mut state = self.state.lock();
        state.slot = Slot::Uninitialized;
        state.failed_attempts += 1;
        state.last_failure = Some(failure);
        let attempts = state.failed_attempts;
        drop(state);
        self.settled.notify_all();
        debug!(
            type_name = std::any::type_name::<T>(),
            failed_attempts = attempts,
            "Singleton initialization rolled back"
        );
    }
}

impl<T, F> SingletonCell<T, F>
where
    F: Fn() -> anyhow::Result<T>,
{
    /// Return the process-wide instance, constructing it on first use.
    ///
    /// Fails with `SingletonConstruction` when the initializer fails (for the
    /// caller that ran it and for every caller that was waiting on it) and
    /// when the initializer re-enters its own cell.
    pub fn get_instance(&self) -> Result<Arc<T>> {
        let mut state = self.state.lock();
        loop {
            match &state.slot {
                Slot::Ready(instance) => return Ok(Arc::clone(instance)),
                Slot::Uninitialized => break,
                Slot::Initializing(owner) if *owner == thread::current().id() => {
                    return Err(Self::construction_error(Arc::from(
                        Box::<dyn std::error::Error + Send + Sync>::from(
                            "initializer re-entered its own singleton cell",
                        ),
                    )));
                }
                Slot::Initializing(_) => {}
            }

            let seen = state.failed_attempts;
            self.settled.wait(&mut state);
            if state.failed_attempts != seen {
                let source = state.last_failure.clone().unwrap_or_else(|| {
                    Arc::from(Box::<dyn std::error::Error + Send + Sync>::from(
                        "concurrent initialization failed",
                    ))
                });
                return Err(Self::construction_error(source));
            }
        }

        state.slot = Slot::Initializing(thread::current().id());
        drop(state);
        debug!(type_name = std::any::type_name::<T>(), "Singleton initializing");
        self.construct()
    }

    fn construct(&self) -> Result<Arc<T>> {
        let mut attempt = Attempt {
            cell: self,
            settled: false,
        };

        match (self.init)() {
            Ok(value) => {
                let instance = Arc::new(value);
                attempt.settled = true;
                self.publish(Arc::clone(&instance));
                Ok(instance)
            }
            Err(err) => {
                let source: SharedError = Arc::from(Box::<dyn std::error::Error + Send + Sync>::from(err));
                attempt.settled = true;
                self.roll_back(Arc::clone(&source));
                Err(Self::construction_error(source))
            }
        }
    }
}

/// Rolls the cell back if the initializer unwinds
struct Attempt<'a, T, F> {
    cell: &'a SingletonCell<T, F>,
    settled: bool,
}

impl<T, F> Drop for Attempt<'_, T, F> {
    fn drop(&mut self) {
        if !self.settled {
            self.cell.roll_back(Arc::from(Box::<dyn std::error::Error + Send + Sync>::from(
                "initializer panicked",
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    #[test]
    fn constructs_once_and_shares_instance() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn build() -> anyhow::Result<String> {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Ok("instance".to_string())
        }
        static CELL: SingletonCell<String> = SingletonCell::new(build);

        assert_eq!(CELL.state(), SingletonState::Uninitialized);
        assert!(CELL.peek().is_none());

        let a = CELL.get_instance().unwrap();
        let b = CELL.get_instance().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        assert!(CELL.is_ready());
        assert!(Arc::ptr_eq(&CELL.peek().unwrap(), &a));
    }

    #[test]
    fn concurrent_first_access_has_one_winner() {
        const THREADS: usize = 16;
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let cell = Arc::new(SingletonCell::new(move || -> anyhow::Result<Vec<u8>> {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(std::time::Duration::from_millis(20));
            Ok(vec![1u8, 2, 3])
        }));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let cell = Arc::clone(&cell);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cell.get_instance().unwrap()
                })
            })
            .collect();

        let instances: Vec<Arc<Vec<u8>>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for instance in &instances[1..] {
            assert!(Arc::ptr_eq(&instances[0], instance));
        }
    }

    #[test]
    fn failed_construction_rolls_back_and_retries() {
        let attempts = AtomicUsize::new(0);
        let cell = SingletonCell::new(|| -> anyhow::Result<u32> {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                anyhow::bail!("backing store offline");
            }
            Ok(42u32)
        });

        let err = cell.get_instance().unwrap_err();
        match &err {
            CreationError::SingletonConstruction { type_name, source } => {
                assert_eq!(*type_name, "u32");
                assert_eq!(source.to_string(), "backing store offline");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(cell.state(), SingletonState::Uninitialized);
        assert_eq!(cell.failed_attempts(), 1);

        assert_eq!(*cell.get_instance().unwrap(), 42);
        assert!(cell.is_ready());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn waiters_see_the_winners_failure() {
        let gate = Arc::new(Barrier::new(2));
        let init_gate = Arc::clone(&gate);
        let calls = Arc::new(AtomicUsize::new(0));
        let init_calls = Arc::clone(&calls);
        let cell = Arc::new(SingletonCell::new(move || -> anyhow::Result<u8> {
            if init_calls.fetch_add(1, Ordering::SeqCst) > 0 {
                return Ok(7);
            }
            init_gate.wait();
            thread::sleep(std::time::Duration::from_millis(200));
            anyhow::bail!("winner failed")
        }));

        let winner = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || cell.get_instance())
        };

        // Wait until the winner is inside the initializer.
        gate.wait();
        assert_eq!(cell.state(), SingletonState::Initializing);

        let waited = cell.get_instance().unwrap_err();
        assert!(waited.to_string().contains("winner failed"));
        assert!(winner.join().unwrap().is_err());
        assert_eq!(cell.failed_attempts(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Waiters are not retried for; an explicit call constructs.
        assert_eq!(*cell.get_instance().unwrap(), 7);
    }

    #[test]
    fn panicking_initializer_rolls_back() {
        let panicked = AtomicUsize::new(0);
        let cell = SingletonCell::new(|| -> anyhow::Result<&'static str> {
            if panicked.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("boom");
            }
            Ok("recovered")
        });

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| cell.get_instance()));
        assert!(outcome.is_err());
        assert_eq!(cell.state(), SingletonState::Uninitialized);
        assert_eq!(cell.failed_attempts(), 1);

        assert_eq!(*cell.get_instance().unwrap(), "recovered");
    }

    #[test]
    fn waiters_see_initializer_panic() {
        let gate = Arc::new(Barrier::new(2));
        let init_gate = Arc::clone(&gate);
        let calls = Arc::new(AtomicUsize::new(0));
        let init_calls = Arc::clone(&calls);
        let cell = Arc::new(SingletonCell::new(move || -> anyhow::Result<u8> {
            if init_calls.fetch_add(1, Ordering::SeqCst) > 0 {
                return Ok(9);
            }
            init_gate.wait();
            thread::sleep(std::time::Duration::from_millis(200));
            panic!("initializer blew up");
        }));

        let winner = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || cell.get_instance())
        };

        gate.wait();
        assert_eq!(cell.state(), SingletonState::Initializing);

        let waited = cell.get_instance().unwrap_err();
        assert!(matches!(waited, CreationError::SingletonConstruction { .. }));
        assert!(waited.to_string().contains("initializer panicked"));

        assert!(winner.join().is_err());
        assert_eq!(cell.state(), SingletonState::Uninitialized);
        assert_eq!(cell.failed_attempts(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(*cell.get_instance().unwrap(), 9);
    }

    #[test]
    fn reentrant_initialization_fails_instead_of_deadlocking() {
        static CELL: SingletonCell<u64> = SingletonCell::new(reenter);
        fn reenter() -> anyhow::Result<u64> {
            let inner = CELL.get_instance();
            match inner {
                Err(err) => Err(anyhow::anyhow!("inner call failed: {err}")),
                Ok(_) => Ok(1),
            }
        }

        let err = CELL.get_instance().unwrap_err();
        assert!(err.to_string().contains("re-entered"));
        assert_eq!(CELL.state(), SingletonState::Uninitialized);
    }
}

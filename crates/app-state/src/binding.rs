//! Shared values and two-way bindings

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Value owned by a screen and observable by anyone holding a receiver
///
/// Cloning a `SharedState` yields another handle to the same value.
///
/// # Example
///
/// ```rust
/// use app_state::SharedState;
///
/// let selected = SharedState::new(0_isize);
/// let binding = selected.binding();
///
/// binding.set(2);
/// assert_eq!(selected.get(), 2);
/// assert_eq!(selected.writes(), 1);
/// ```
pub struct SharedState<T> {
    tx: Arc<watch::Sender<T>>,
    writes: Arc<AtomicU64>,
}

impl<T> Clone for SharedState<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
            writes: Arc::clone(&self.writes),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedState")
            .field("value", &*self.tx.borrow())
            .field("writes", &self.writes.load(Ordering::Relaxed))
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> SharedState<T> {
    /// Create shared state holding `initial`
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            tx: Arc::new(tx),
            writes: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of writes made through [`SharedState::set`] or a binding
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Subscribe to changes
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Two-way binding to this value
    pub fn binding(&self) -> Binding<T> {
        let reader = self.clone();
        let writer = self.clone();
        Binding::new(move || reader.get(), move |value| writer.set(value))
    }
}

type Getter<T> = Arc<dyn Fn() -> T + Send + Sync>;
type Setter<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Read access plus a mutation callback for a value the control does not own
pub struct Binding<T> {
    get: Getter<T>,
    set: Setter<T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}

impl<T: 'static> Binding<T> {
    /// Build a binding from a getter and a setter
    pub fn new(
        get: impl Fn() -> T + Send + Sync + 'static,
        set: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Binding that always reads `value` and ignores writes
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(
            move || value.clone(),
            |_| tracing::trace!("write to constant binding ignored"),
        )
    }

    /// Current value
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Propose a new value to the owner
    pub fn set(&self, value: T) {
        (self.set)(value)
    }
}

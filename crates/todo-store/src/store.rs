use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::action::Action;
use crate::reducer::Reducer;
use crate::subscription::{ListenerRegistry, Unsubscribe};

/// Store - holds application state and runs the dispatch loop
///
/// The Store follows the Redux pattern:
/// - it owns exactly one state value, replaced (never mutated) on dispatch
/// - state only changes through [`Store::dispatch`] and the reducer
/// - after every dispatch all listeners are notified in registration order
///
/// `Store` is a cheap handle: clones share the same state and registry.
/// Listeners that need to talk to the store should capture a [`WeakStore`]
/// (see [`Store::downgrade`]) so the registry does not keep the store alive.
///
/// # Example
///
/// ```rust,ignore
/// let store = Store::new(todo_app());
/// let weak = store.downgrade();
/// let unsubscribe = store.subscribe(move || {
///     if let Some(store) = weak.upgrade() {
///         render(&store.get_state());
///     }
/// });
///
/// store.dispatch(TodoAction::AddTodo { id: 0, text: "Learn".into() });
/// unsubscribe.call();
/// ```
pub struct Store<S, A> {
    inner: Rc<StoreInner<S, A>>,
}

struct StoreInner<S, A> {
    reducer: Box<dyn Reducer<S, A>>,
    state: RefCell<Rc<S>>,
    listeners: Rc<RefCell<ListenerRegistry>>,
    reducing: Cell<bool>,
    dispatch_count: Cell<u64>,
}

/// Non-owning handle to a [`Store`]
pub struct WeakStore<S, A> {
    inner: Weak<StoreInner<S, A>>,
}

impl<S, A> Store<S, A>
where
    S: Clone + 'static,
    A: Action + 'static,
{
    /// Create a store whose initial state is whatever the reducer makes of
    /// `S::default()` and the initialization action.
    pub fn new<R>(reducer: R) -> Self
    where
        S: Default,
        R: Reducer<S, A> + 'static,
    {
        Self::with_preloaded_state(reducer, S::default())
    }

    /// Create a store starting from `preloaded` instead of `S::default()`.
    ///
    /// The initialization action still runs, so slices the preloaded state
    /// lacks get their defaults.
    pub fn with_preloaded_state<R>(reducer: R, preloaded: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        let inner = StoreInner {
            reducer: Box::new(reducer),
            state: RefCell::new(Rc::new(preloaded)),
            listeners: Rc::new(RefCell::new(ListenerRegistry::default())),
            reducing: Cell::new(false),
            dispatch_count: Cell::new(0),
        };

        let init = A::init();
        log::debug!("Initializing store with {}", init.kind());
        inner.reduce(&init);

        Self {
            inner: Rc::new(inner),
        }
    }

    /// Get the current state snapshot.
    ///
    /// The snapshot never changes; a later dispatch installs a new one.
    pub fn get_state(&self) -> Rc<S> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Read from the current state without keeping the snapshot
    pub fn select<T>(&self, selector: impl FnOnce(&S) -> T) -> T {
        selector(&self.get_state())
    }

    /// Process an action: reduce, replace the state, notify listeners.
    ///
    /// Listeners are taken from a snapshot of the registry made right after
    /// the state is replaced. Listeners subscribed during the notification
    /// pass are first called on the next dispatch; listeners removed during
    /// the pass are still called if they were already part of the snapshot.
    /// A listener may dispatch again; that nested dispatch completes its own
    /// full cycle before the outer pass continues.
    ///
    /// A panicking reducer unwinds out of `dispatch` and the state stays at
    /// its pre-dispatch value.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a reducer.
    pub fn dispatch(&self, action: A) -> A {
        log::debug!("Dispatching {}", action.kind());
        self.inner.reduce(&action);
        self.inner.dispatch_count.set(self.inner.dispatch_count.get() + 1);

        let listeners = self.inner.listeners.borrow().snapshot();
        log::trace!(
            "Notifying {} listener(s) after {}",
            listeners.len(),
            action.kind()
        );
        for listener in listeners {
            listener();
        }

        action
    }

    /// Register `listener` to be called after every dispatch.
    ///
    /// The returned [`Unsubscribe`] is the only way to remove it again.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn() + 'static,
    {
        let id = self.inner.listeners.borrow_mut().insert(Rc::new(listener));
        log::trace!("Listener {:?} subscribed", id);
        Unsubscribe::new(Rc::downgrade(&self.inner.listeners), id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Number of completed dispatches, not counting initialization
    pub fn dispatch_count(&self) -> u64 {
        self.inner.dispatch_count.get()
    }

    pub fn downgrade(&self) -> WeakStore<S, A> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<S: Clone, A> StoreInner<S, A> {
    /// Run the reducer and commit its result.
    ///
    /// The prior state is only replaced once the reducer has returned.
    fn reduce(&self, action: &A) {
        assert!(!self.reducing.get(), "Reducers may not dispatch actions");

        let prior = Rc::clone(&self.state.borrow());
        let next = {
            let _guard = ReducingGuard::enter(&self.reducing);
            self.reducer.reduce(S::clone(&prior), action)
        };
        *self.state.borrow_mut() = Rc::new(next);
    }
}

/// Marks a reducer run; cleared again on unwind
struct ReducingGuard<'a>(&'a Cell<bool>);

impl<'a> ReducingGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for ReducingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("dispatch_count", &self.inner.dispatch_count.get())
            .finish()
    }
}

impl<S, A> WeakStore<S, A> {
    /// Get the store back, unless every [`Store`] handle is gone
    pub fn upgrade(&self) -> Option<Store<S, A>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<S, A> Clone for WeakStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for WeakStore<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakStore")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

//! Reducer composition
//!
//! [`combine_reducers`] turns a set of named slice reducers into one reducer
//! over a [`StateTree`]. Every slice reducer only ever sees its own slice and
//! the dispatched action, so reducers written independently can share one
//! dispatch stream.

use std::any::{type_name, Any};
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::reducer::Reducer;

/// Errors raised when reading a slice out of a [`StateTree`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("State has no slice named '{0}'")]
    MissingSlice(String),

    #[error("Slice '{key}' does not hold a value of type {expected}")]
    SliceTypeMismatch { key: String, expected: &'static str },
}

/// Values that can live in a [`StateTree`] slice.
///
/// `Default` is the slice's initial state, `PartialEq` gives the tree value
/// equality and `Debug` lets the whole tree be logged.
pub trait Slice: Clone + Default + PartialEq + fmt::Debug + 'static {}

impl<T> Slice for T where T: Clone + Default + PartialEq + fmt::Debug + 'static {}

/// Object-safe view of a [`Slice`]
trait SliceValue: fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn SliceValue) -> bool;
}

impl<T: Slice> SliceValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn SliceValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Tree-shaped state: an insertion-ordered mapping from slice name to an
/// immutable slice value.
///
/// Slices are shared, never mutated: cloning a tree only bumps reference
/// counts.
#[derive(Clone, Default)]
pub struct StateTree {
    slices: Vec<(String, Rc<dyn SliceValue>)>,
}

impl StateTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            slices: Vec::with_capacity(capacity),
        }
    }

    /// Build a tree by hand, e.g. to preload a store.
    ///
    /// Setting an existing key replaces its value in place.
    pub fn with_slice<T: Slice>(mut self, key: impl Into<String>, value: T) -> Self {
        self.insert(key.into(), Rc::new(value));
        self
    }

    fn insert(&mut self, key: String, value: Rc<dyn SliceValue>) {
        match self.slices.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.slices.push((key, value)),
        }
    }

    fn entry(&self, key: &str) -> Option<&dyn SliceValue> {
        self.slices
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_ref())
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Slice names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.iter().map(|(key, _)| key.as_str())
    }

    /// Typed read of a slice. `None` when the slice is missing or holds
    /// another type.
    pub fn get<T: Slice>(&self, key: &str) -> Option<&T> {
        self.entry(key)?.as_any().downcast_ref::<T>()
    }

    /// Like [`StateTree::get`], but tells the two failure cases apart.
    pub fn try_get<T: Slice>(&self, key: &str) -> Result<&T, StateError> {
        let value = self
            .entry(key)
            .ok_or_else(|| StateError::MissingSlice(key.to_string()))?;
        value
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| StateError::SliceTypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>(),
            })
    }
}

impl PartialEq for StateTree {
    fn eq(&self, other: &Self) -> bool {
        self.slices.len() == other.slices.len()
            && self
                .slices
                .iter()
                .zip(&other.slices)
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1.dyn_eq(v2.as_ref()))
    }
}

impl fmt::Debug for StateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slices.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

/// A slice reducer with its slice type erased
type SliceReducer<A> = Box<dyn Fn(Option<&dyn SliceValue>, &A) -> Rc<dyn SliceValue>>;

/// Reducer over a [`StateTree`], built from named slice reducers.
///
/// Created with [`combine_reducers`].
pub struct CombineReducers<A> {
    reducers: Vec<(String, SliceReducer<A>)>,
}

/// Start an empty reducer composition.
///
/// With no slices the resulting reducer always yields an empty tree.
pub fn combine_reducers<A: 'static>() -> CombineReducers<A> {
    CombineReducers::new()
}

impl<A: 'static> CombineReducers<A> {
    pub fn new() -> Self {
        Self {
            reducers: Vec::new(),
        }
    }

    /// Let `reducer` own the slice `key`.
    ///
    /// A prior slice that is missing or of another type counts as absent and
    /// the reducer receives `S::default()`. Registering a key twice replaces
    /// the earlier reducer but keeps its position.
    pub fn slice<S, R>(mut self, key: impl Into<String>, reducer: R) -> Self
    where
        S: Slice,
        R: Reducer<S, A> + 'static,
    {
        let key = key.into();
        let erased: SliceReducer<A> = Box::new(
            move |prior: Option<&dyn SliceValue>, action: &A| -> Rc<dyn SliceValue> {
                let prior = prior
                    .and_then(|value| value.as_any().downcast_ref::<S>())
                    .cloned()
                    .unwrap_or_default();
                Rc::new(reducer.reduce(prior, action))
            },
        );

        match self.reducers.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = erased,
            None => self.reducers.push((key, erased)),
        }
        self
    }

    /// Slice names in the order the reducers run
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.reducers.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<A: 'static> Default for CombineReducers<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Reducer<StateTree, A> for CombineReducers<A> {
    /// Runs every slice reducer and assembles a freshly allocated tree with
    /// exactly one entry per registered key. Keys of `state` that have no
    /// reducer are dropped.
    fn reduce(&self, state: StateTree, action: &A) -> StateTree {
        let mut next = StateTree::with_capacity(self.reducers.len());
        for (key, reducer) in &self.reducers {
            let slice = reducer(state.entry(key), action);
            next.slices.push((key.clone(), slice));
        }
        next
    }
}

impl<A> fmt::Debug for CombineReducers<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombineReducers")
            .field("keys", &self.reducers.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}

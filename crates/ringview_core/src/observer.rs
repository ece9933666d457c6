//! Observer registries
//!
//! A small callback list keyed by stable handles. Callbacks are invoked
//! synchronously, in subscription order, on the thread that calls
//! [`Observers::notify`]. Nothing here is `Send`; registries live next to the
//! frame loop that owns them.
//!
//! # Example
//!
//! ```rust
//! use ringview_core::Observers;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = seen.clone();
//!
//! let mut progress = Observers::<f32>::new();
//! let id = progress.subscribe(move |p| sink.set(*p));
//! progress.notify(&0.5);
//! assert_eq!(seen.get(), 0.5);
//!
//! assert!(progress.unsubscribe(id));
//! progress.notify(&1.0);
//! assert_eq!(seen.get(), 0.5);
//! ```

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`Observers::subscribe`]
    pub struct ObserverId;
}

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered set of callbacks interested in events of type `E`
pub struct Observers<E> {
    callbacks: SlotMap<ObserverId, Callback<E>>,
    /// Subscription order; slotmap iteration order is not insertion order
    /// once keys have been reused.
    order: Vec<ObserverId>,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a callback
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&E) + 'static,
    {
        let id = self.callbacks.insert(Box::new(callback));
        self.order.push(id);
        id
    }

    /// Remove a callback. Returns false if the handle was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        if self.callbacks.remove(id).is_none() {
            tracing::trace!(?id, "unsubscribe of unknown observer");
            return false;
        }
        self.order.retain(|existing| *existing != id);
        true
    }

    /// Invoke every callback with `event`
    pub fn notify(&mut self, event: &E) {
        for id in &self.order {
            if let Some(callback) = self.callbacks.get_mut(*id) {
                callback(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

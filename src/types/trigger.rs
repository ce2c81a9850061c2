//! Start-once cell shared by every lazy future in a chain.
//!
//! A root [`LazyFuture`](crate::LazyFuture) owns a fresh [`Trigger`] holding its
//! work function; every lazy future derived from it holds a clone of the same
//! handle, so firing the trigger from anywhere in the chain starts the one root
//! computation.
//!
//! # Examples
//!
//! ```
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use lazy_future::{Trigger, TriggerState};
//!
//! let runs = Arc::new(AtomicU32::new(0));
//! let counter = runs.clone();
//! let trigger = Trigger::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! assert_eq!(trigger.state(), TriggerState::Unstarted);
//! assert!(trigger.fire());
//! assert!(!trigger.clone().fire());
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! ```
use core::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::macros::trace_event;

type Action = Box<dyn FnOnce() + Send>;

/// Lifecycle of a [`Trigger`].
///
/// The transition is one-way: once started, a chain never becomes lazy again.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerState {
    /// No eager operation has been invoked on the chain yet.
    Unstarted,
    /// The root computation has been started.
    Started,
}

struct TriggerCell {
    started: AtomicBool,
    action: Mutex<Option<Action>>,
}

/// Shared handle to an idempotent, one-shot start action.
#[derive(Clone)]
pub struct Trigger {
    cell: Arc<TriggerCell>,
}

impl Trigger {
    /// Creates an unstarted trigger that runs `action` the first time it fires.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            cell: Arc::new(TriggerCell {
                started: AtomicBool::new(false),
                action: Mutex::new(Some(Box::new(action))),
            }),
        }
    }

    /// Creates a trigger that is already started and has nothing to run.
    ///
    /// Used for futures whose computation is owned by someone else.
    pub fn started() -> Self {
        Self {
            cell: Arc::new(TriggerCell {
                started: AtomicBool::new(true),
                action: Mutex::new(None),
            }),
        }
    }

    /// Fires the trigger, running the stored action if this is the first call.
    ///
    /// Returns `true` only for the call that performed the transition. The flag
    /// is set before the action runs and the action lock is released first, so a
    /// call made from inside the action is a no-op.
    pub fn fire(&self) -> bool {
        if self.cell.started.swap(true, Ordering::AcqRel) {
            trace_event!(trace, "lazy future trigger already fired");
            return false;
        }

        let action = self
            .cell
            .action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        trace_event!(trace, "lazy future started");
        if let Some(action) = action {
            action();
        }
        true
    }

    /// Returns `true` once the trigger has fired.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.cell.started.load(Ordering::Acquire)
    }

    /// Returns the current lifecycle state.
    #[inline]
    pub fn state(&self) -> TriggerState {
        if self.is_started() {
            TriggerState::Started
        } else {
            TriggerState::Unstarted
        }
    }

    /// Returns `true` when both handles point to the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger").field("state", &self.state()).finish()
    }
}

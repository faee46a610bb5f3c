// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Defer: a single-turn deferred task queue for UI hosts.
//!
//! UI frameworks routinely need to push a small amount of work to the *next*
//! turn of the event loop: a re-render that must wait for the current
//! synchronous unmount sequence to finish, or an externally written value
//! that must not be applied before the view's first render pass. This crate
//! provides the queue half of that pattern as plain data, leaving the actual
//! scheduling (a microtask, a timer with zero delay, a `requestAnimationFrame`
//! analogue) to the host.
//!
//! The intended contract is "next tick", not "eventually": the host drains
//! the queue exactly once per turn, for every turn in which tasks were
//! enqueued. Tasks are host-defined values, typically an enum of effects.
//!
//! Draining is guarded by a liveness flag so that work scheduled just before
//! the owning view was torn down is dropped instead of acting on a destroyed
//! view. A dead drain is an idempotent no-op.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_defer::DeferQueue;
//!
//! #[derive(Debug, PartialEq)]
//! enum Effect {
//!     Render,
//! }
//!
//! let mut queue = DeferQueue::new();
//! queue.push(Effect::Render);
//! assert_eq!(queue.len(), 1);
//!
//! // Next turn: the view is still live, so the task runs.
//! let mut ran = Vec::new();
//! queue.drain_live(true, |task| ran.push(task));
//! assert_eq!(ran, vec![Effect::Render]);
//! assert!(queue.is_empty());
//!
//! // Tasks enqueued after teardown are dropped, not run.
//! queue.push(Effect::Render);
//! queue.drain_live(false, |_| unreachable!("view is gone"));
//! assert!(queue.is_empty());
//! ```
//!
//! This crate is single-threaded by design; it performs no locking and is
//! meant to be owned by the same logical thread that dispatches UI events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;

/// A FIFO queue of tasks to run on the next turn of the UI loop.
///
/// `E` is the host's task type. The queue itself never interprets tasks; it
/// only preserves ordering and the liveness contract described in the crate
/// docs.
#[derive(Clone, Debug)]
pub struct DeferQueue<E> {
    tasks: VecDeque<E>,
}

impl<E> DeferQueue<E> {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Enqueue a task to run on the next drain.
    pub fn push(&mut self, task: E) {
        self.tasks.push_back(task);
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop all pending tasks without running them.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Take the entire queue, leaving this one empty.
    ///
    /// Useful when the drain callback needs mutable access to the structure
    /// that owns the queue: swap the queue out, iterate, and let the taken
    /// queue drop. Tasks pushed *during* the drain land in the (now empty)
    /// owned queue and are picked up on the following turn, preserving the
    /// one-turn delay for re-entrant scheduling.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            tasks: core::mem::take(&mut self.tasks),
        }
    }

    /// Run `f` over every pending task in FIFO order, if `live` is `true`.
    ///
    /// When `live` is `false` the pending tasks are dropped unrun: work
    /// scheduled against a view that has since been destroyed must not act.
    /// Either way the queue is empty afterwards, so calling this on a dead
    /// view any number of times is a no-op.
    pub fn drain_live(&mut self, live: bool, mut f: impl FnMut(E)) {
        if !live {
            self.tasks.clear();
            return;
        }
        while let Some(task) = self.tasks.pop_front() {
            f(task);
        }
    }
}

impl<E> Default for DeferQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

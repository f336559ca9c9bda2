//! Deferred UI effects on a logical clock.
//!
//! Toast dismissal, button loading-state resets and staggered product reveals
//! all fire after a fixed delay. Instead of real timers the client keeps a
//! queue of scheduled effects and the presentation layer advances the clock.
//! Tasks can be cancelled; an effect whose target has already gone away is
//! simply ignored when applied.

use std::time::Duration;

use crate::notify::ToastId;

/// Handle for a scheduled effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// An effect waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remove a toast from the notification stack.
    DismissToast(ToastId),
    /// Restore a button from its loading state.
    ResetButton(String),
    /// Reveal the product at this catalog index.
    RevealProduct(usize),
}

#[derive(Debug, Clone)]
struct Scheduled {
    id: TaskId,
    due: Duration,
    effect: Effect,
}

/// Queue of scheduled effects.
#[derive(Debug, Default)]
pub struct EffectQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl EffectQueue {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of effects still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Schedule `effect` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, effect: Effect) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due: self.now.saturating_add(delay),
            effect,
        });
        id
    }

    /// Cancel a scheduled effect. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.id != id);
        self.pending.len() != before
    }

    /// Cancel every pending effect matching `predicate`.
    pub fn cancel_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Effect) -> bool,
    {
        let before = self.pending.len();
        self.pending.retain(|task| !predicate(&task.effect));
        before - self.pending.len()
    }

    /// Move the clock forward and return the effects that came due, ordered
    /// by due time and then by scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Effect> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|task| task.due <= now);
        self.pending = pending;

        due.sort_by_key(|task| (task.due, task.id));
        due.into_iter().map(|task| task.effect).collect()
    }
}

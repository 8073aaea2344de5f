//! Transient highlight state for completion toggles
//!
//! After a task's completion flag is toggled, presentation gets a short
//! visual cue: the toggled task is highlighted for a fixed window, green
//! when the task became completed and amber when it was un-completed.
//!
//! At most one task is highlighted at a time; a new toggle pre-empts any
//! prior highlight (last-trigger-wins, no queueing). Each trigger hands
//! back a [`HighlightToken`], and a deferred [`clear`](HighlightController::clear)
//! only applies while that token is still current, so a stale timer firing
//! never wipes out a newer highlight. Expiry is also checked lazily in
//! [`current`](HighlightController::current), so a poll-driven presentation
//! needs no scheduled callback at all.
//!
//! This state is ephemeral UI feedback and is never persisted.

use std::time::{Duration, Instant};

use crate::domain::TaskId;

/// How long a highlight stays active after a toggle
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(700);

/// Color tag for a highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTone {
    /// The toggle marked the task completed
    Completing,
    /// The toggle reverted the task to not completed
    Uncompleting,
}

impl HighlightTone {
    pub fn label(&self) -> &'static str {
        match self {
            HighlightTone::Completing => "completing",
            HighlightTone::Uncompleting => "un-completing",
        }
    }
}

/// Correlation token for one trigger; clears only apply while current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightToken(u64);

#[derive(Debug)]
struct ActiveHighlight {
    task_id: TaskId,
    tone: HighlightTone,
    token: HighlightToken,
    expires_at: Instant,
}

/// Per-task transient highlight state machine
#[derive(Debug, Default)]
pub struct HighlightController {
    active: Option<ActiveHighlight>,
    next_token: u64,
}

impl HighlightController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights a task after a toggle. `completed` is the task's new
    /// completion value. Replaces any prior highlight and restarts the
    /// expiry window.
    pub fn trigger(&mut self, task_id: TaskId, completed: bool) -> HighlightToken {
        self.trigger_at(task_id, completed, Instant::now())
    }

    /// Like [`trigger`](Self::trigger) with an explicit clock, for tests
    pub fn trigger_at(&mut self, task_id: TaskId, completed: bool, now: Instant) -> HighlightToken {
        self.next_token += 1;
        let token = HighlightToken(self.next_token);

        let tone = if completed {
            HighlightTone::Completing
        } else {
            HighlightTone::Uncompleting
        };

        self.active = Some(ActiveHighlight {
            task_id,
            tone,
            token,
            expires_at: now + HIGHLIGHT_DURATION,
        });

        token
    }

    /// Clears the highlight, but only if `token` is still the current one.
    /// A stale token (from a trigger that has been pre-empted) is ignored.
    pub fn clear(&mut self, token: HighlightToken) {
        if let Some(active) = &self.active {
            if active.token == token {
                self.active = None;
            }
        }
    }

    /// Returns the highlighted task and tone, or None when idle
    pub fn current(&self) -> Option<(&TaskId, HighlightTone)> {
        self.current_at(Instant::now())
    }

    /// Like [`current`](Self::current) with an explicit clock, for tests
    pub fn current_at(&self, now: Instant) -> Option<(&TaskId, HighlightTone)> {
        self.active
            .as_ref()
            .filter(|a| now < a.expires_at)
            .map(|a| (&a.task_id, a.tone))
    }
}

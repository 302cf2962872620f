//! Entrance animations for page blocks.
//!
//! Every animated block carries an [`Entrance`]: what motion it plays, what
//! triggers it, and how long it waits. Blocks triggered on mount play as soon
//! as the page appears; blocks triggered in view play the first time they
//! scroll into the viewport and never replay after that.
//!
//! The at-most-once rule is held by [`RevealTracker`], a per-element state
//! machine:
//!
//! ```text
//! NotTriggered ──(mount / first visible)──▶ Triggered ──(complete)──▶ Done
//! ```
//!
//! There is no edge back to `NotTriggered` except [`RevealTracker::reset`],
//! which models the page being unmounted and a fresh one mounted. The
//! embedded browser script mirrors the same states through the
//! `data-reveal-state` attribute.

use std::collections::BTreeMap;

/// Visual motion played by an entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Fade,
    /// Fade in while rising into place.
    SlideUp,
    /// Fade in while moving in from the left.
    SlideLeft,
    /// Fade in while growing from 80%.
    Scale,
}

impl Motion {
    pub fn name(self) -> &'static str {
        match self {
            Motion::Fade => "fade",
            Motion::SlideUp => "slide-up",
            Motion::SlideLeft => "slide-left",
            Motion::Scale => "scale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    OnMount,
    InView,
}

impl Trigger {
    pub fn name(self) -> &'static str {
        match self {
            Trigger::OnMount => "mount",
            Trigger::InView => "view",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub motion: Motion,
    pub trigger: Trigger,
    pub delay_ms: u32,
}

impl Entrance {
    pub const fn on_mount(motion: Motion) -> Self {
        Self {
            motion,
            trigger: Trigger::OnMount,
            delay_ms: 0,
        }
    }

    pub const fn in_view(motion: Motion) -> Self {
        Self {
            motion,
            trigger: Trigger::InView,
            delay_ms: 0,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Staggered delay for the `index`-th item of a list.
    pub const fn staggered(self, index: usize, step_ms: u32) -> Self {
        self.delayed(index as u32 * step_ms)
    }
}

/// An animated block on a page: its DOM id and entrance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSpec {
    pub id: String,
    pub entrance: Entrance,
}

impl RevealSpec {
    pub fn new(id: impl Into<String>, entrance: Entrance) -> Self {
        Self {
            id: id.into(),
            entrance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    NotTriggered,
    Triggered,
    Done,
}

impl RevealState {
    pub fn name(self) -> &'static str {
        match self {
            RevealState::NotTriggered => "pending",
            RevealState::Triggered => "triggered",
            RevealState::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
struct Tracked {
    trigger: Trigger,
    state: RevealState,
}

/// Tracks the reveal state of every animated block on the mounted page.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    elements: BTreeMap<String, Tracked>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a block. Re-registering an id keeps its current state.
    pub fn register(&mut self, spec: &RevealSpec) {
        self.elements
            .entry(spec.id.clone())
            .or_insert_with(|| Tracked {
                trigger: spec.entrance.trigger,
                state: RevealState::NotTriggered,
            });
    }

    /// Fire every on-mount block that hasn't fired yet. Returns their ids.
    pub fn mount(&mut self) -> Vec<String> {
        let mut fired = Vec::new();
        for (id, tracked) in &mut self.elements {
            if tracked.trigger == Trigger::OnMount && tracked.state == RevealState::NotTriggered {
                tracked.state = RevealState::Triggered;
                fired.push(id.clone());
            }
        }
        fired
    }

    /// Report a visibility change for an in-view block.
    ///
    /// Returns `true` only when this call fires the entrance: the block is
    /// visible and has never fired before. Leaving the viewport never
    /// changes state.
    pub fn observe(&mut self, id: &str, visible: bool) -> bool {
        let Some(tracked) = self.elements.get_mut(id) else {
            return false;
        };
        if !visible || tracked.trigger != Trigger::InView {
            return false;
        }
        if tracked.state == RevealState::NotTriggered {
            tracked.state = RevealState::Triggered;
            true
        } else {
            false
        }
    }

    /// Mark a triggered animation as finished. No-op in any other state.
    pub fn complete(&mut self, id: &str) {
        if let Some(tracked) = self.elements.get_mut(id) {
            if tracked.state == RevealState::Triggered {
                tracked.state = RevealState::Done;
            }
        }
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.elements.get(id).map(|t| t.state)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Forget every block (page unmounted).
    pub fn reset(&mut self) {
        self.elements.clear();
    }
}

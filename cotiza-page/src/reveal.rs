use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fraction of an element that must be in view before it reveals.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Per-element reveal state. The transition is one-shot: once visible,
/// an element never animates again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Pending,
    Visible,
}

/// Tracks reveal state for a set of observed elements.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    elements: HashMap<String, RevealState>,
    threshold: f64,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealTracker {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            threshold: VISIBILITY_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            elements: HashMap::new(),
            threshold,
        }
    }

    /// Start observing an element. Re-observing keeps existing state.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    /// Report an intersection with the given visible ratio. Returns true
    /// when this call revealed the element; repeat intersections and
    /// unobserved ids are no-ops.
    pub fn intersect(&mut self, id: &str, visible_ratio: f64) -> bool {
        if visible_ratio < self.threshold {
            return false;
        }
        match self.elements.get_mut(id) {
            Some(state @ RevealState::Pending) => {
                *state = RevealState::Visible;
                tracing::debug!(element = id, "revealed");
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.elements.get(id).copied()
    }

    pub fn pending_count(&self) -> usize {
        self.elements
            .values()
            .filter(|s| **s == RevealState::Pending)
            .count()
    }
}

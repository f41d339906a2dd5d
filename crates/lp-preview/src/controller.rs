//! One-shot reveal observers for a preview tree.

use std::collections::BTreeMap;

use lp_renderer::{Reveal, RevealState};
use serde::Serialize;

use crate::backend::PreviewTree;
use crate::node::{Node, RevealId};

/// A pending → shown transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealEvent {
    pub id: RevealId,
    pub reveal: Reveal,
}

#[derive(Debug)]
struct Observed {
    reveal: Reveal,
    state: RevealState,
    attached: bool,
}

/// Tracks the reveal state of every element in one tree.
///
/// Each element starts pending with an attached observer. The first report
/// at or above the visibility threshold shows it and detaches its observer;
/// later reports for that element do nothing.
#[derive(Debug, Default)]
pub struct RevealController {
    elements: BTreeMap<RevealId, Observed>,
}

impl RevealController {
    /// Attach an observer to every reveal element in `tree`.
    #[must_use]
    pub fn observe(tree: &PreviewTree) -> Self {
        let mut elements = BTreeMap::new();
        for section in &tree.sections {
            section.node.walk(&mut |node| {
                if let Node::Reveal { id, reveal, .. } = node {
                    elements.insert(
                        *id,
                        Observed {
                            reveal: *reveal,
                            state: RevealState::Pending,
                            attached: true,
                        },
                    );
                }
            });
        }
        Self { elements }
    }

    /// Report how much of an element is visible (0.0 to 1.0).
    ///
    /// Returns the transition when this report reveals the element.
    pub fn report_visibility(&mut self, id: RevealId, visible_ratio: f64) -> Option<RevealEvent> {
        let element = self.elements.get_mut(&id)?;
        if !element.attached {
            return None;
        }
        if element.state.observe(visible_ratio) {
            element.attached = false;
            tracing::trace!(%id, delay_ms = element.reveal.delay_ms, "Revealed");
            return Some(RevealEvent {
                id,
                reveal: element.reveal,
            });
        }
        None
    }

    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.elements.get(&id).map(|e| e.state)
    }

    /// Whether the element still has a live observer.
    #[must_use]
    pub fn is_observing(&self, id: RevealId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.attached)
    }

    /// Number of attached observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.elements.values().filter(|e| e.attached).count()
    }

    /// Show everything at once, detaching all observers.
    pub fn reveal_all(&mut self) -> Vec<RevealEvent> {
        let ids: Vec<RevealId> = self.elements.keys().copied().collect();
        ids.into_iter()
            .filter_map(|id| self.report_visibility(id, 1.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use lp_content::ContentDocument;
    use lp_renderer::REVEAL_THRESHOLD;

    use super::*;
    use crate::backend::render_preview;
    use crate::viewport::Viewport;

    fn tree() -> PreviewTree {
        render_preview(&ContentDocument::default(), Viewport::Desktop, 2025)
    }

    #[test]
    fn test_all_pending_and_attached() {
        let tree = tree();
        let controller = RevealController::observe(&tree);
        let ids = tree.reveal_ids();
        assert!(!ids.is_empty());
        assert_eq!(controller.observer_count(), ids.len());
        for id in ids {
            assert_eq!(controller.state(id), Some(RevealState::Pending));
        }
    }

    #[test]
    fn test_below_threshold_keeps_observer() {
        let tree = tree();
        let mut controller = RevealController::observe(&tree);
        let id = tree.reveal_ids()[0];
        assert_eq!(controller.report_visibility(id, REVEAL_THRESHOLD / 2.0), None);
        assert!(controller.is_observing(id));
    }

    #[test]
    fn test_one_shot_transition_detaches() {
        let tree = tree();
        let mut controller = RevealController::observe(&tree);
        let id = tree.reveal_ids()[1];

        let event = controller.report_visibility(id, 0.25).unwrap();
        assert_eq!(event.id, id);
        assert_eq!(event.reveal.delay_ms, 100);
        assert!(!controller.is_observing(id));
        assert_eq!(controller.state(id), Some(RevealState::Shown));

        // Scrolling away and back never re-triggers.
        assert_eq!(controller.report_visibility(id, 0.0), None);
        assert_eq!(controller.report_visibility(id, 1.0), None);
        assert_eq!(controller.state(id), Some(RevealState::Shown));
    }

    #[test]
    fn test_unknown_id() {
        let mut controller = RevealController::observe(&tree());
        assert_eq!(controller.report_visibility(RevealId(9999), 1.0), None);
        assert_eq!(controller.state(RevealId(9999)), None);
    }

    #[test]
    fn test_reveal_all() {
        let tree = tree();
        let mut controller = RevealController::observe(&tree);
        controller.report_visibility(tree.reveal_ids()[0], 1.0);
        let events = controller.reveal_all();
        assert_eq!(events.len(), tree.reveal_ids().len() - 1);
        assert_eq!(controller.observer_count(), 0);
    }
}

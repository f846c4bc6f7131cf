//! [§ 2.7 Interface EventTarget](https://dom.spec.whatwg.org/#interface-eventtarget)
//!
//! Every node is an event target. Dispatch lives outside the tree core; what
//! is kept here is the listener list and the "get the parent" rule, which
//! depends on slot assignment and shadow hosts.

use crate::{DomError, DomTree, NodeId, NodeType};

/// Opaque handle for a listener callback owned by the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(pub u64);

/// [§ 2.7](https://dom.spec.whatwg.org/#concept-event-listener)
///
/// "An event listener can be used to observe a specific event and consists of:
/// type, callback, capture, passive, once, signal, removed"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListener {
    /// The event type, e.g. "slotchange".
    pub event_type: String,
    /// The callback to invoke.
    pub callback: CallbackId,
    /// Listen during the capture phase.
    pub capture: bool,
    /// The listener never cancels the event.
    pub passive: bool,
    /// Remove after the first invocation.
    pub once: bool,
}

impl EventListener {
    /// A bubbling-phase listener with default flags.
    #[must_use]
    pub fn new(event_type: &str, callback: CallbackId) -> Self {
        Self {
            event_type: event_type.to_string(),
            callback,
            capture: false,
            passive: false,
            once: false,
        }
    }

    fn same_registration(&self, other: &Self) -> bool {
        self.event_type == other.event_type
            && self.callback == other.callback
            && self.capture == other.capture
    }
}

impl DomTree {
    /// [§ 2.7 Add an event listener](https://dom.spec.whatwg.org/#add-an-event-listener)
    ///
    /// "If eventTarget's event listener list does not contain an event listener
    /// whose type is listener's type, callback is listener's callback, and
    /// capture is listener's capture, then append listener to eventTarget's
    /// event listener list."
    ///
    /// Returns whether the listener was added.
    pub fn add_event_listener(
        &mut self,
        target: NodeId,
        listener: EventListener,
    ) -> Result<bool, DomError> {
        let node = self.node_mut(target)?;
        if node
            .event_listeners
            .iter()
            .any(|existing| existing.same_registration(&listener))
        {
            return Ok(false);
        }
        node.event_listeners.push(listener);
        Ok(true)
    }

    /// [§ 2.7 Remove an event listener](https://dom.spec.whatwg.org/#remove-an-event-listener)
    ///
    /// Returns whether a matching listener was found.
    pub fn remove_event_listener(
        &mut self,
        target: NodeId,
        listener: &EventListener,
    ) -> Result<bool, DomError> {
        let node = self.node_mut(target)?;
        let before = node.event_listeners.len();
        node.event_listeners
            .retain(|existing| !existing.same_registration(listener));
        Ok(node.event_listeners.len() != before)
    }

    /// The listeners registered on `target`.
    #[must_use]
    pub fn event_listeners(&self, target: NodeId) -> &[EventListener] {
        self.get(target)
            .map(|n| n.event_listeners.as_slice())
            .unwrap_or(&[])
    }

    /// [§ 4.4](https://dom.spec.whatwg.org/#get-the-parent) "get the parent"
    ///
    /// "A node's get the parent algorithm, given an event, returns the node's
    /// assigned slot, if node is assigned; otherwise node's parent."
    /// "A shadow root's get the parent algorithm, given an event, returns null
    /// if event's composed flag is unset and shadow root is the root of
    /// event's path's first struct's invocation target; otherwise shadow root's
    /// host."
    ///
    /// The document's parent is the global object, which lives outside the
    /// tree, so documents return `None`.
    #[must_use]
    pub fn event_parent(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        match &node.node_type {
            NodeType::Document(_) => None,
            NodeType::ShadowRoot(data) => Some(data.host),
            _ => node
                .slottable()
                .and_then(|s| s.assigned_slot)
                .or(node.parent),
        }
    }
}

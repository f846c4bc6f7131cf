//! Tests for tree traversal, adoption and the external hooks.

use std::cell::RefCell;
use std::rc::Rc;

use quill_dom::{
    CallbackId, CustomElementReaction, DocumentKind, DomError, DomHooks, DomTree, EventListener,
    Namespace, NodeId, ShadowRootInit, TreeMutationRecord,
};

fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.create_element(tag, Namespace::Html)
}

/// Builds:
///
/// ```text
/// #document
/// └── html
///     ├── host  (shadow root: inner ── slot)
///     │   └── light
///     └── tail
/// ```
struct Fixture {
    tree: DomTree,
    html: NodeId,
    host: NodeId,
    shadow: NodeId,
    inner: NodeId,
    slot: NodeId,
    light: NodeId,
    tail: NodeId,
}

fn fixture() -> Fixture {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    let _ = tree.append_child(NodeId::ROOT, html).unwrap();
    let host = alloc_element(&mut tree, "div");
    let _ = tree.append_child(html, host).unwrap();
    let shadow = tree.attach_shadow(host, ShadowRootInit::default()).unwrap();
    let inner = alloc_element(&mut tree, "p");
    let _ = tree.append_child(shadow, inner).unwrap();
    let slot = alloc_element(&mut tree, "slot");
    let _ = tree.append_child(inner, slot).unwrap();
    let light = tree.create_text("light");
    let _ = tree.append_child(host, light).unwrap();
    let tail = alloc_element(&mut tree, "footer");
    let _ = tree.append_child(html, tail).unwrap();
    Fixture {
        tree,
        html,
        host,
        shadow,
        inner,
        slot,
        light,
        tail,
    }
}

// ========== traversal ==========

#[test]
fn test_descendants_skip_shadow_trees() {
    let f = fixture();
    let order: Vec<NodeId> = f.tree.descendants(NodeId::ROOT).collect();

    assert_eq!(order, vec![f.html, f.host, f.light, f.tail]);
}

#[test]
fn test_shadow_including_order() {
    let f = fixture();
    let order: Vec<NodeId> = f
        .tree
        .shadow_including_inclusive_descendants(NodeId::ROOT)
        .collect();

    assert_eq!(
        order,
        vec![
            NodeId::ROOT,
            f.html,
            f.host,
            f.shadow,
            f.inner,
            f.slot,
            f.light,
            f.tail
        ]
    );
}

#[test]
fn test_shadow_including_descendants_of_host_stay_inside() {
    let f = fixture();
    let order: Vec<NodeId> = f.tree.shadow_including_descendants(f.host).collect();

    assert_eq!(order, vec![f.shadow, f.inner, f.slot, f.light]);
}

#[test]
fn test_ancestors_and_shadow_including_ancestors() {
    let f = fixture();

    let plain: Vec<NodeId> = f.tree.ancestors(f.slot).collect();
    assert_eq!(plain, vec![f.inner, f.shadow]);

    let shadow_including: Vec<NodeId> = f.tree.shadow_including_ancestors(f.slot).collect();
    assert_eq!(
        shadow_including,
        vec![f.inner, f.shadow, f.host, f.html, NodeId::ROOT]
    );
    assert!(f.tree.is_shadow_including_descendant_of(f.slot, f.html));
    assert!(!f.tree.is_descendant_of(f.slot, f.html));
}

#[test]
fn test_roots_and_connectedness() {
    let f = fixture();

    assert_eq!(f.tree.root(f.slot), f.shadow);
    assert_eq!(f.tree.shadow_including_root(f.slot), NodeId::ROOT);
    assert!(f.tree.is_connected(f.slot));
}

#[test]
fn test_siblings() {
    let f = fixture();

    assert_eq!(f.tree.following_siblings(f.host).collect::<Vec<_>>(), vec![f.tail]);
    assert_eq!(f.tree.preceding_siblings(f.tail).collect::<Vec<_>>(), vec![f.host]);
    assert_eq!(f.tree.next_sibling(f.tail), None);
}

#[test]
fn test_event_parent_follows_assigned_slot() {
    let f = fixture();

    assert_eq!(f.tree.assigned_slot(f.light), Some(f.slot));
    assert_eq!(f.tree.event_parent(f.light), Some(f.slot));
    assert_eq!(f.tree.event_parent(f.shadow), Some(f.host));
    assert_eq!(f.tree.event_parent(f.tail), Some(f.html));
    assert_eq!(f.tree.event_parent(NodeId::ROOT), None);
}

#[test]
fn test_event_listener_duplicates_ignored() {
    let mut tree = DomTree::new();
    let listener = EventListener::new("slotchange", CallbackId(7));

    assert!(tree.add_event_listener(NodeId::ROOT, listener.clone()).unwrap());
    assert!(!tree.add_event_listener(NodeId::ROOT, listener.clone()).unwrap());

    let capture = EventListener {
        capture: true,
        ..listener.clone()
    };
    assert!(tree.add_event_listener(NodeId::ROOT, capture).unwrap());
    assert_eq!(tree.event_listeners(NodeId::ROOT).len(), 2);

    assert!(tree.remove_event_listener(NodeId::ROOT, &listener).unwrap());
    assert_eq!(tree.event_listeners(NodeId::ROOT).len(), 1);
}

// ========== adopt ==========

#[test]
fn test_adopt_updates_shadow_including_subtree_and_attributes() {
    let mut f = fixture();
    let _ = f.tree.set_attribute(f.inner, "class", "x").unwrap();
    let _ = f.tree.set_attribute(f.host, "id", "h").unwrap();
    let other = f.tree.create_document(DocumentKind::Html);

    let _ = f.tree.adopt(f.host, other).unwrap();

    assert_eq!(f.tree.parent(f.host), None);
    assert!(!f.tree.children(f.html).contains(&f.host));
    for id in [f.host, f.shadow, f.inner, f.slot, f.light] {
        assert_eq!(f.tree.node_document(id), Some(other), "{id:?}");
    }
    for id in [f.host, f.inner] {
        let element = f.tree.as_element(id).unwrap();
        assert!(element.attrs.values().all(|a| a.node_document == other));
    }
    // Untouched parts of the old document stay put.
    assert_eq!(f.tree.node_document(f.tail), Some(NodeId::ROOT));
}

#[test]
fn test_insert_adopts_into_parent_document() {
    let mut tree = DomTree::new();
    let other = tree.create_document(DocumentKind::Html);
    let foreign_div = tree.create_element_in(other, "div", Namespace::Html);
    let html = alloc_element(&mut tree, "html");
    let _ = tree.append_child(NodeId::ROOT, html).unwrap();

    let _ = tree.append_child(html, foreign_div).unwrap();

    assert_eq!(tree.node_document(foreign_div), Some(NodeId::ROOT));
}

#[test]
fn test_adopt_node_rejects_documents_and_shadow_roots() {
    let mut f = fixture();
    let other = f.tree.create_document(DocumentKind::Xml);

    assert!(matches!(
        f.tree.adopt_node(NodeId::ROOT, other),
        Err(DomError::NotSupported(_))
    ));
    assert!(matches!(
        f.tree.adopt_node(f.shadow, other),
        Err(DomError::HierarchyRequest(_))
    ));
    assert!(matches!(
        f.tree.adopt(f.tail, f.html),
        Err(DomError::WrongNodeType { .. })
    ));
}

// ========== hooks ==========

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Tree(TreeMutationRecord),
    SlotChange(NodeId),
    Reaction(NodeId, CustomElementReaction),
    Adopting(NodeId, NodeId),
    ChildrenChanged(NodeId),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl DomHooks for Recorder {
    fn queue_tree_mutation_record(&mut self, record: TreeMutationRecord) {
        self.0.borrow_mut().push(Event::Tree(record));
    }

    fn signal_slot_change(&mut self, slot: NodeId) {
        self.0.borrow_mut().push(Event::SlotChange(slot));
    }

    fn enqueue_custom_element_reaction(
        &mut self,
        element: NodeId,
        reaction: CustomElementReaction,
    ) {
        self.0.borrow_mut().push(Event::Reaction(element, reaction));
    }

    fn adopting_steps(&mut self, node: NodeId, old_document: NodeId) {
        self.0.borrow_mut().push(Event::Adopting(node, old_document));
    }

    fn children_changed_steps(&mut self, parent: NodeId) {
        self.0.borrow_mut().push(Event::ChildrenChanged(parent));
    }
}

#[test]
fn test_insert_and_remove_queue_records() {
    let recorder = Recorder::default();
    let mut tree = DomTree::with_hooks(Box::new(recorder.clone()));
    let html = alloc_element(&mut tree, "html");
    let _ = tree.append_child(NodeId::ROOT, html).unwrap();
    let _ = recorder.take();

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let _ = tree.append_child(html, a).unwrap();
    let _ = tree.append_child(html, b).unwrap();
    let _ = recorder.take();

    let _ = tree.remove_child(html, a).unwrap();

    assert_eq!(
        recorder.take(),
        vec![
            Event::Tree(TreeMutationRecord {
                target: html,
                added_nodes: vec![],
                removed_nodes: vec![a],
                previous_sibling: None,
                next_sibling: Some(b),
            }),
            Event::ChildrenChanged(html),
        ]
    );
}

#[test]
fn test_custom_element_reactions() {
    let recorder = Recorder::default();
    let mut tree = DomTree::with_hooks(Box::new(recorder.clone()));
    let html = alloc_element(&mut tree, "html");
    let _ = tree.append_child(NodeId::ROOT, html).unwrap();
    let widget = alloc_element(&mut tree, "my-widget");
    tree.as_element_mut(widget).unwrap().is_custom = true;
    let _ = recorder.take();

    let _ = tree.append_child(html, widget).unwrap();
    assert!(recorder
        .take()
        .contains(&Event::Reaction(widget, CustomElementReaction::Connected)));

    let _ = tree.set_attribute(widget, "mode", "on").unwrap();
    assert!(recorder.take().contains(&Event::Reaction(
        widget,
        CustomElementReaction::AttributeChanged {
            name: "mode".to_string(),
            old_value: None,
            new_value: Some("on".to_string()),
        }
    )));

    let other = tree.create_document(DocumentKind::Html);
    let _ = tree.adopt(widget, other).unwrap();
    let events = recorder.take();
    assert!(events.contains(&Event::Reaction(widget, CustomElementReaction::Disconnected)));
    assert!(events.contains(&Event::Reaction(
        widget,
        CustomElementReaction::Adopted {
            old_document: NodeId::ROOT,
            new_document: other,
        }
    )));
    assert!(events.contains(&Event::Adopting(widget, NodeId::ROOT)));
}

#[test]
fn test_adopt_into_same_document_skips_adopting_steps() {
    let recorder = Recorder::default();
    let mut tree = DomTree::with_hooks(Box::new(recorder.clone()));
    let div = alloc_element(&mut tree, "div");

    let _ = tree.adopt(div, NodeId::ROOT).unwrap();

    assert!(recorder.take().is_empty());
}

#[test]
fn test_slot_change_signalled_once_per_change() {
    let recorder = Recorder::default();
    let mut tree = DomTree::with_hooks(Box::new(recorder.clone()));
    let host = alloc_element(&mut tree, "div");
    let shadow = tree.attach_shadow(host, ShadowRootInit::default()).unwrap();
    let slot = alloc_element(&mut tree, "slot");
    let _ = tree.append_child(shadow, slot).unwrap();
    let _ = recorder.take();

    let text = tree.create_text("x");
    let _ = tree.append_child(host, text).unwrap();

    let signals = recorder
        .take()
        .into_iter()
        .filter(|e| *e == Event::SlotChange(slot))
        .count();
    assert_eq!(signals, 1);

    tree.assign_slottables(slot);
    assert!(recorder.take().is_empty());
}

//! Tests for shadow roots and slot assignment.

use quill_dom::{
    DomError, DomTree, Namespace, NodeId, ShadowRootInit, ShadowRootMode, SlotAssignmentMode,
    Slottable,
};

/// A connected `<div>` host with an attached shadow root.
fn host_with_shadow(tree: &mut DomTree, slot_assignment: SlotAssignmentMode) -> (NodeId, NodeId) {
    let html = tree.create_element("html", Namespace::Html);
    let _ = tree.append_child(NodeId::ROOT, html).unwrap();
    let host = tree.create_element("div", Namespace::Html);
    let _ = tree.append_child(html, host).unwrap();
    let shadow = tree
        .attach_shadow(
            host,
            ShadowRootInit {
                slot_assignment,
                ..ShadowRootInit::default()
            },
        )
        .unwrap();
    (host, shadow)
}

/// Create a `<slot>` with the given name under `parent`.
fn add_slot(tree: &mut DomTree, parent: NodeId, name: &str) -> NodeId {
    let slot = tree.create_element("slot", Namespace::Html);
    if !name.is_empty() {
        let _ = tree.set_attribute(slot, "name", name).unwrap();
    }
    let _ = tree.append_child(parent, slot).unwrap();
    slot
}

// ========== attach_shadow ==========

#[test]
fn test_attach_shadow_sets_host() {
    let mut tree = DomTree::new();
    let (host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);

    assert_eq!(tree.shadow_root(host), Some(shadow));
    assert_eq!(tree.as_shadow_root(shadow).map(|s| s.host), Some(host));
    assert_eq!(tree.parent(shadow), None);
    assert!(tree.is_connected(shadow));
    assert_eq!(tree.node_document(shadow), Some(NodeId::ROOT));
}

#[test]
fn test_attach_shadow_twice_fails() {
    let mut tree = DomTree::new();
    let (host, _) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);

    let err = tree.attach_shadow(host, ShadowRootInit::default()).unwrap_err();
    assert!(matches!(err, DomError::NotSupported(_)));
}

#[test]
fn test_attach_shadow_rejects_invalid_hosts() {
    let mut tree = DomTree::new();
    let img = tree.create_element("img", Namespace::Html);
    let svg = tree.create_element("svg", Namespace::Svg);
    let custom = tree.create_element("my-widget", Namespace::Html);

    assert!(tree.attach_shadow(img, ShadowRootInit::default()).is_err());
    assert!(tree.attach_shadow(svg, ShadowRootInit::default()).is_err());
    assert!(tree.attach_shadow(custom, ShadowRootInit::default()).is_ok());
}

#[test]
fn test_closed_shadow_root_hidden() {
    let mut tree = DomTree::new();
    let host = tree.create_element("span", Namespace::Html);
    let init = ShadowRootInit {
        mode: ShadowRootMode::Closed,
        ..ShadowRootInit::default()
    };
    let shadow = tree.attach_shadow(host, init).unwrap();

    assert_eq!(tree.shadow_root(host), Some(shadow));
    assert_eq!(tree.open_shadow_root(host), None);
}

// ========== named assignment ==========

#[test]
fn test_slot_assignment_round_trip() {
    let mut tree = DomTree::new();
    let (host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);
    let slot = add_slot(&mut tree, shadow, "a");

    let text = tree.create_text("light");
    let _ = tree.set_slottable_name(text, "a").unwrap();
    let _ = tree.append_child(host, text).unwrap();

    tree.assign_slottables(slot);
    assert_eq!(tree.assigned_nodes(slot), &[text]);
    assert_eq!(tree.assigned_slot(text), Some(slot));

    let _ = tree.remove_child(host, text).unwrap();
    tree.assign_slottables(slot);
    assert!(tree.assigned_nodes(slot).is_empty());
    assert_eq!(tree.assigned_slot(text), None);
}

#[test]
fn test_insert_into_host_assigns_slot() {
    let mut tree = DomTree::new();
    let (host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);
    let default_slot = add_slot(&mut tree, shadow, "");
    let named = add_slot(&mut tree, shadow, "title");

    let plain = tree.create_text("body text");
    let titled = tree.create_element("h1", Namespace::Html);
    let _ = tree.set_attribute(titled, "slot", "title").unwrap();
    let _ = tree.append_child(host, plain).unwrap();
    let _ = tree.append_child(host, titled).unwrap();

    assert_eq!(tree.assigned_nodes(default_slot), &[plain]);
    assert_eq!(tree.assigned_nodes(named), &[titled]);
}

#[test]
fn test_first_slot_with_name_wins() {
    let mut tree = DomTree::new();
    let (host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);
    let first = add_slot(&mut tree, shadow, "x");
    let second = add_slot(&mut tree, shadow, "x");

    let child = tree.create_element("span", Namespace::Html);
    let _ = tree.set_attribute(child, "slot", "x").unwrap();
    let _ = tree.append_child(host, child).unwrap();

    assert_eq!(tree.find_slot(Slottable::Element(child), false), Some(first));
    assert_eq!(tree.assigned_nodes(first), &[child]);
    assert!(tree.assigned_nodes(second).is_empty());
}

#[test]
fn test_changing_slot_attribute_moves_element() {
    let mut tree = DomTree::new();
    let (host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);
    let a = add_slot(&mut tree, shadow, "a");
    let b = add_slot(&mut tree, shadow, "b");

    let child = tree.create_element("span", Namespace::Html);
    let _ = tree.set_attribute(child, "slot", "a").unwrap();
    let _ = tree.append_child(host, child).unwrap();
    assert_eq!(tree.assigned_nodes(a), &[child]);

    let _ = tree.set_attribute(child, "slot", "b").unwrap();

    assert!(tree.assigned_nodes(a).is_empty());
    assert_eq!(tree.assigned_nodes(b), &[child]);
    assert_eq!(tree.assigned_slot(child), Some(b));
}

#[test]
fn test_renaming_slot_reassigns_tree() {
    let mut tree = DomTree::new();
    let (host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);
    let slot = add_slot(&mut tree, shadow, "old");

    let child = tree.create_element("span", Namespace::Html);
    let _ = tree.set_attribute(child, "slot", "new").unwrap();
    let _ = tree.append_child(host, child).unwrap();
    assert!(tree.assigned_nodes(slot).is_empty());

    let _ = tree.set_attribute(slot, "name", "new").unwrap();

    assert_eq!(tree.assigned_nodes(slot), &[child]);
}

#[test]
fn test_removing_slot_unassigns_on_both_sides() {
    let mut tree = DomTree::new();
    let (host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);
    let wrapper = tree.create_element("div", Namespace::Html);
    let _ = tree.append_child(shadow, wrapper).unwrap();
    let slot = add_slot(&mut tree, wrapper, "");

    let child = tree.create_text("light");
    let _ = tree.append_child(host, child).unwrap();
    assert_eq!(tree.assigned_slot(child), Some(slot));

    let _ = tree.remove_child(shadow, wrapper).unwrap();

    assert!(tree.assigned_nodes(slot).is_empty());
    assert_eq!(tree.assigned_slot(child), None);
}

#[test]
fn test_find_slot_open_flag() {
    let mut tree = DomTree::new();
    let host = tree.create_element("div", Namespace::Html);
    let init = ShadowRootInit {
        mode: ShadowRootMode::Closed,
        ..ShadowRootInit::default()
    };
    let shadow = tree.attach_shadow(host, init).unwrap();
    let slot = add_slot(&mut tree, shadow, "");
    let child = tree.create_text("x");
    let _ = tree.append_child(host, child).unwrap();

    assert_eq!(tree.find_slot(Slottable::Text(child), false), Some(slot));
    assert_eq!(tree.find_slot(Slottable::Text(child), true), None);
}

#[test]
fn test_slot_outside_shadow_tree_finds_nothing() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div", Namespace::Html);
    let slot = add_slot(&mut tree, div, "");
    let text = tree.create_text("x");
    let _ = tree.append_child(div, text).unwrap();

    assert!(tree.find_slottables(slot).is_empty());
    assert!(tree.find_flattened_slottables(slot).is_empty());
}

// ========== manual assignment ==========

#[test]
fn test_manual_assignment() {
    let mut tree = DomTree::new();
    let (host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Manual);
    let first = add_slot(&mut tree, shadow, "");
    let second = add_slot(&mut tree, shadow, "");

    let a = tree.create_element("span", Namespace::Html);
    let b = tree.create_text("b");
    let _ = tree.append_child(host, a).unwrap();
    let _ = tree.append_child(host, b).unwrap();

    // Named matching is ignored in manual mode.
    assert!(tree.assigned_nodes(first).is_empty());

    let _ = tree.assign(first, &[b, a]).unwrap();
    assert_eq!(tree.assigned_nodes(first), &[b, a]);

    // Assigning to another slot steals the node.
    let _ = tree.assign(second, &[a]).unwrap();
    assert_eq!(tree.assigned_nodes(first), &[b]);
    assert_eq!(tree.assigned_nodes(second), &[a]);
    assert_eq!(tree.find_slot(Slottable::Element(a), false), Some(second));
}

#[test]
fn test_manual_assignment_filters_non_children() {
    let mut tree = DomTree::new();
    let (_host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Manual);
    let slot = add_slot(&mut tree, shadow, "");
    let stranger = tree.create_element("span", Namespace::Html);

    let _ = tree.assign(slot, &[stranger]).unwrap();

    assert!(tree.assigned_nodes(slot).is_empty());
    assert_eq!(tree.find_slottables(slot), Vec::<NodeId>::new());
}

#[test]
fn test_assign_rejects_non_slots() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div", Namespace::Html);
    let comment = tree.create_comment("c");
    let slot = tree.create_element("slot", Namespace::Html);

    assert!(tree.assign(div, &[]).is_err());
    assert!(tree.assign(slot, &[comment]).is_err());
}

// ========== flattened slottables ==========

#[test]
fn test_flattened_slottables_fall_back_to_slot_children() {
    let mut tree = DomTree::new();
    let (_host, shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);
    let slot = add_slot(&mut tree, shadow, "");
    let fallback = tree.create_text("fallback");
    let _ = tree.append_child(slot, fallback).unwrap();

    assert_eq!(tree.find_flattened_slottables(slot), vec![fallback]);
}

#[test]
fn test_flattened_slottables_expand_nested_slots() {
    let mut tree = DomTree::new();
    // Outer host whose shadow tree contains an inner host; the outer
    // slot is slotted into the inner shadow tree.
    let (outer_host, outer_shadow) = host_with_shadow(&mut tree, SlotAssignmentMode::Named);
    let inner_host = tree.create_element("div", Namespace::Html);
    let _ = tree.append_child(outer_shadow, inner_host).unwrap();
    let outer_slot = add_slot(&mut tree, inner_host, "");
    let inner_shadow = tree
        .attach_shadow(inner_host, ShadowRootInit::default())
        .unwrap();
    let inner_slot = add_slot(&mut tree, inner_shadow, "");
    tree.assign_slottables_for_tree(inner_shadow);

    let light = tree.create_text("light");
    let _ = tree.append_child(outer_host, light).unwrap();

    assert_eq!(tree.assigned_nodes(inner_slot), &[outer_slot]);
    assert_eq!(tree.find_flattened_slottables(inner_slot), vec![light]);
}

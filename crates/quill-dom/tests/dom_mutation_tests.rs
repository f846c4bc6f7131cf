//! Tests for DOM tree mutation methods: insert, remove, pre-insertion
//! validation, move_children and character data.

use quill_dom::{DomError, DomTree, Namespace, NodeId, NodeType};

/// Helper to create an HTML element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.create_element(tag, Namespace::Html)
}

/// A tree with `<html>` attached to the document, returning the html element.
fn setup() -> (DomTree, NodeId) {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    let _ = tree.append_child(NodeId::ROOT, html).unwrap();
    (tree, html)
}

/// Append `count` fresh `<span>`s to `parent`.
fn append_spans(tree: &mut DomTree, parent: NodeId, count: usize) -> Vec<NodeId> {
    (0..count)
        .map(|_| {
            let span = alloc_element(tree, "span");
            let _ = tree.append_child(parent, span).unwrap();
            span
        })
        .collect()
}

// ========== remove_child ==========

#[test]
fn test_remove_child_single_child() {
    let (mut tree, parent) = setup();
    let child = alloc_element(&mut tree, "p");
    let _ = tree.append_child(parent, child).unwrap();

    assert_eq!(tree.children(parent).len(), 1);

    let _ = tree.remove_child(parent, child).unwrap();

    assert_eq!(tree.children(parent).len(), 0);
    assert_eq!(tree.parent(child), None);
    assert_eq!(tree.prev_sibling(child), None);
    assert_eq!(tree.next_sibling(child), None);
}

#[test]
fn test_remove_child_first_of_three() {
    let (mut tree, parent) = setup();
    let spans = append_spans(&mut tree, parent, 3);
    let (a, b, c) = (spans[0], spans[1], spans[2]);

    let _ = tree.remove_child(parent, a).unwrap();

    // b is now first child, c is second
    assert_eq!(tree.children(parent), &[b, c]);
    assert_eq!(tree.prev_sibling(b), None);
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(b));
}

#[test]
fn test_remove_child_middle_of_three() {
    let (mut tree, parent) = setup();
    let spans = append_spans(&mut tree, parent, 3);
    let (a, b, c) = (spans[0], spans[1], spans[2]);

    let _ = tree.remove_child(parent, b).unwrap();

    // a and c are siblings now
    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
}

#[test]
fn test_remove_child_wrong_parent_is_not_found() {
    let (mut tree, parent) = setup();
    let other = alloc_element(&mut tree, "div");
    let child = alloc_element(&mut tree, "p");
    let _ = tree.append_child(other, child).unwrap();

    let err = tree.remove_child(parent, child).unwrap_err();
    assert_eq!(err, DomError::NotFound { parent, child });
    assert_eq!(tree.parent(child), Some(other));
}

#[test]
fn test_remove_parentless_node_fails() {
    let mut tree = DomTree::new();
    let orphan = alloc_element(&mut tree, "div");

    assert_eq!(tree.remove(orphan, false), Err(DomError::NoParent(orphan)));
}

// ========== insert_before ==========

#[test]
fn test_insert_before_first_child() {
    let (mut tree, parent) = setup();
    let existing = alloc_element(&mut tree, "b");
    let _ = tree.append_child(parent, existing).unwrap();

    let new_child = alloc_element(&mut tree, "a");
    let _ = tree.insert_before(parent, new_child, Some(existing)).unwrap();

    // new_child should be first, existing second
    assert_eq!(tree.children(parent), &[new_child, existing]);
    assert_eq!(tree.parent(new_child), Some(parent));
    assert_eq!(tree.next_sibling(new_child), Some(existing));
    assert_eq!(tree.prev_sibling(new_child), None);
    assert_eq!(tree.prev_sibling(existing), Some(new_child));
}

#[test]
fn test_insert_before_middle() {
    let (mut tree, parent) = setup();
    let a = alloc_element(&mut tree, "a");
    let c = alloc_element(&mut tree, "c");
    let _ = tree.append_child(parent, a).unwrap();
    let _ = tree.append_child(parent, c).unwrap();

    let b = alloc_element(&mut tree, "b");
    let _ = tree.insert_before(parent, b, Some(c)).unwrap();

    assert_eq!(tree.children(parent), &[a, b, c]);
}

#[test]
fn test_insert_before_itself_uses_next_sibling() {
    let (mut tree, parent) = setup();
    let spans = append_spans(&mut tree, parent, 3);

    let _ = tree.insert_before(parent, spans[1], Some(spans[1])).unwrap();

    assert_eq!(tree.children(parent), spans.as_slice());
}

#[test]
fn test_reinserting_existing_child_moves_it() {
    let (mut tree, parent) = setup();
    let spans = append_spans(&mut tree, parent, 3);

    let _ = tree.insert_before(parent, spans[2], Some(spans[0])).unwrap();

    assert_eq!(tree.children(parent), &[spans[2], spans[0], spans[1]]);
}

#[test]
fn test_insert_fragment_splices_children() {
    let (mut tree, parent) = setup();
    let existing = alloc_element(&mut tree, "p");
    let _ = tree.append_child(parent, existing).unwrap();

    let fragment = tree.create_document_fragment();
    let a = alloc_element(&mut tree, "a");
    let text = tree.create_text("hi");
    let _ = tree.append_child(fragment, a).unwrap();
    let _ = tree.append_child(fragment, text).unwrap();

    let _ = tree.insert_before(parent, fragment, Some(existing)).unwrap();

    assert_eq!(tree.children(parent), &[a, text, existing]);
    assert!(tree.children(fragment).is_empty());
    assert_eq!(tree.parent(fragment), None);
}

#[test]
fn test_insert_empty_fragment_is_noop() {
    let (mut tree, parent) = setup();
    let fragment = tree.create_document_fragment();

    let _ = tree.append_child(parent, fragment).unwrap();

    assert!(tree.children(parent).is_empty());
}

// ========== pre-insertion validity ==========

#[test]
fn test_cannot_insert_ancestor_into_descendant() {
    let (mut tree, html) = setup();
    let body = alloc_element(&mut tree, "body");
    let _ = tree.append_child(html, body).unwrap();

    let err = tree.append_child(body, html).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest(_)));
    assert_eq!(tree.parent(html), Some(NodeId::ROOT));
}

#[test]
fn test_document_accepts_only_one_element() {
    let (mut tree, _html) = setup();
    let second = alloc_element(&mut tree, "html");

    let err = tree.append_child(NodeId::ROOT, second).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest(_)));
}

#[test]
fn test_text_cannot_be_document_child() {
    let mut tree = DomTree::new();
    let text = tree.create_text("stray");

    let err = tree.append_child(NodeId::ROOT, text).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest(_)));
}

#[test]
fn test_doctype_must_precede_element() {
    let (mut tree, html) = setup();
    let doctype = tree.create_doctype("html", "", "");

    assert!(tree.append_child(NodeId::ROOT, doctype).is_err());
    let _ = tree.insert_before(NodeId::ROOT, doctype, Some(html)).unwrap();
    assert_eq!(tree.children(NodeId::ROOT), &[doctype, html]);
}

#[test]
fn test_doctype_outside_document_rejected() {
    let (mut tree, html) = setup();
    let doctype = tree.create_doctype("html", "", "");

    let err = tree.append_child(html, doctype).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest(_)));
}

#[test]
fn test_reference_child_of_other_parent_is_not_found() {
    let (mut tree, html) = setup();
    let elsewhere = alloc_element(&mut tree, "div");
    let stranger = alloc_element(&mut tree, "p");
    let _ = tree.append_child(elsewhere, stranger).unwrap();
    let node = alloc_element(&mut tree, "span");

    let err = tree.insert_before(html, node, Some(stranger)).unwrap_err();
    assert_eq!(
        err,
        DomError::NotFound {
            parent: html,
            child: stranger
        }
    );
}

#[test]
fn test_text_parent_rejected() {
    let (mut tree, html) = setup();
    let text = tree.create_text("x");
    let _ = tree.append_child(html, text).unwrap();
    let child = alloc_element(&mut tree, "b");

    assert!(tree.append_child(text, child).is_err());
}

// ========== move_children ==========

#[test]
fn test_move_children_basic() {
    let (mut tree, html) = setup();
    let from = alloc_element(&mut tree, "div");
    let to = alloc_element(&mut tree, "span");
    let _ = tree.append_child(html, from).unwrap();
    let _ = tree.append_child(html, to).unwrap();

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let _ = tree.append_child(from, a).unwrap();
    let _ = tree.append_child(from, b).unwrap();

    let _ = tree.move_children(from, to).unwrap();

    // from should be empty
    assert_eq!(tree.children(from).len(), 0);
    // to should have both children
    assert_eq!(tree.children(to), &[a, b]);
    assert_eq!(tree.parent(a), Some(to));
    assert_eq!(tree.parent(b), Some(to));
}

#[test]
fn test_move_children_appends_to_existing() {
    let (mut tree, html) = setup();
    let from = alloc_element(&mut tree, "div");
    let to = alloc_element(&mut tree, "span");
    let _ = tree.append_child(html, from).unwrap();
    let _ = tree.append_child(html, to).unwrap();

    let existing = alloc_element(&mut tree, "x");
    let _ = tree.append_child(to, existing).unwrap();

    let moved = alloc_element(&mut tree, "y");
    let _ = tree.append_child(from, moved).unwrap();

    let _ = tree.move_children(from, to).unwrap();

    assert_eq!(tree.children(to), &[existing, moved]);
    assert_eq!(tree.next_sibling(existing), Some(moved));
    assert_eq!(tree.prev_sibling(moved), Some(existing));
}

#[test]
fn test_move_children_empty_source() {
    let (mut tree, html) = setup();
    let from = alloc_element(&mut tree, "div");
    let to = alloc_element(&mut tree, "span");
    let _ = tree.append_child(html, from).unwrap();
    let _ = tree.append_child(html, to).unwrap();

    // Moving no children should be a no-op
    let _ = tree.move_children(from, to).unwrap();

    assert_eq!(tree.children(from).len(), 0);
    assert_eq!(tree.children(to).len(), 0);
}

// ========== structure queries ==========

#[test]
fn test_index_length_and_root() {
    let (mut tree, html) = setup();
    let spans = append_spans(&mut tree, html, 2);
    let text = tree.create_text("héllo");
    let _ = tree.append_child(spans[1], text).unwrap();

    assert_eq!(tree.index(spans[1]), 1);
    assert_eq!(tree.length(html), 2);
    assert_eq!(tree.length(text), 5);
    assert_eq!(tree.root(text), NodeId::ROOT);
    assert!(tree.is_connected(text));

    let detached = alloc_element(&mut tree, "div");
    assert_eq!(tree.root(detached), detached);
    assert!(!tree.is_connected(detached));
}

#[test]
fn test_template_has_contents_fragment() {
    let mut tree = DomTree::new();
    let template = alloc_element(&mut tree, "template");

    let contents = tree
        .as_element(template)
        .and_then(|e| e.template_contents)
        .expect("template contents");
    assert!(matches!(
        tree.get(contents).map(|n| &n.node_type),
        Some(NodeType::DocumentFragment { host: Some(h) }) if *h == template
    ));
}

#[test]
fn test_template_contents_host_blocks_cycles() {
    let (mut tree, html) = setup();
    let template = alloc_element(&mut tree, "template");
    let _ = tree.append_child(html, template).unwrap();
    let contents = tree.as_element(template).unwrap().template_contents.unwrap();

    // The template is a host-including ancestor of its own contents.
    let err = tree.append_child(contents, html).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest(_)));
}

// ========== character data ==========

#[test]
fn test_replace_and_append_data() {
    let mut tree = DomTree::new();
    let text = tree.create_text("hello world");

    let _ = tree.replace_data(text, 6, 5, "there").unwrap();
    assert_eq!(tree.data(text), Some("hello there"));

    let _ = tree.append_data(text, "!").unwrap();
    assert_eq!(tree.data(text), Some("hello there!"));

    // count past the end clamps
    let _ = tree.delete_data(text, 5, 100).unwrap();
    assert_eq!(tree.data(text), Some("hello"));

    let _ = tree.insert_data(text, 0, "¡").unwrap();
    assert_eq!(tree.data(text), Some("¡hello"));
    assert_eq!(tree.substring_data(text, 1, 4).unwrap(), "hell");
}

#[test]
fn test_replace_data_offset_past_end() {
    let mut tree = DomTree::new();
    let comment = tree.create_comment("abc");

    let err = tree.replace_data(comment, 4, 0, "x").unwrap_err();
    assert_eq!(err, DomError::IndexSize { offset: 4, length: 3 });
    assert_eq!(tree.data(comment), Some("abc"));
}

// ========== attributes ==========

#[test]
fn test_set_attribute_lowercases_html_names() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");

    let _ = tree.set_attribute(div, "CLASS", "a  b\tc").unwrap();

    let element = tree.as_element(div).unwrap();
    assert_eq!(element.get_attribute("class"), Some("a  b\tc"));
    assert_eq!(element.classes().len(), 3);
    assert_eq!(element.attrs["class"].node_document, NodeId::ROOT);

    assert_eq!(
        tree.remove_attribute(div, "class").unwrap(),
        Some("a  b\tc".to_string())
    );
    assert_eq!(tree.get_attribute(div, "class"), None);
}

#[test]
fn test_foreign_attribute_names_keep_case() {
    let mut tree = DomTree::new();
    let svg = tree.create_element("svg", Namespace::Svg);

    let _ = tree.set_attribute(svg, "viewBox", "0 0 10 10").unwrap();

    assert_eq!(tree.get_attribute(svg, "viewBox"), Some("0 0 10 10"));
}

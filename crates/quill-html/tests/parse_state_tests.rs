//! Tests for the parse state: insertion mode reset, scopes and the
//! list of active formatting elements.

use quill_dom::{DomTree, HtmlElementType, Namespace, NodeId};
use quill_html::{
    ActiveFormattingElement, ActiveFormattingElements, InsertionMode, ParseState, Scope,
    StackOfOpenElements, Token,
};

/// Create one unattached HTML element per tag name.
fn elements(tree: &mut DomTree, tags: &[&str]) -> Vec<NodeId> {
    tags.iter()
        .map(|tag| tree.create_element(tag, Namespace::Html))
        .collect()
}

/// A stack holding freshly created elements for `tags`, bottom first.
fn stack_of(tree: &mut DomTree, tags: &[&str]) -> StackOfOpenElements {
    let mut stack = StackOfOpenElements::new();
    for id in elements(tree, tags) {
        stack.push(id);
    }
    stack
}

/// The mode chosen after resetting with `tags` open in a document parse.
fn reset_with(tags: &[&str]) -> InsertionMode {
    let mut tree = DomTree::new();
    let mut state = ParseState::new();
    state.open_elements = stack_of(&mut tree, tags);
    state.reset_insertion_mode_appropriately(&tree);
    state.insertion_mode
}

// ============================================================================
// Reset the insertion mode appropriately
// ============================================================================

#[test]
fn test_reset_picks_table_modes() {
    assert_eq!(
        reset_with(&["html", "body", "table", "tbody", "tr", "td"]),
        InsertionMode::InCell
    );
    assert_eq!(
        reset_with(&["html", "body", "table", "tbody", "tr"]),
        InsertionMode::InRow
    );
    assert_eq!(
        reset_with(&["html", "body", "table", "thead"]),
        InsertionMode::InTableBody
    );
    assert_eq!(
        reset_with(&["html", "body", "table", "caption"]),
        InsertionMode::InCaption
    );
    assert_eq!(
        reset_with(&["html", "body", "table", "colgroup"]),
        InsertionMode::InColumnGroup
    );
    assert_eq!(reset_with(&["html", "body", "table"]), InsertionMode::InTable);
}

#[test]
fn test_reset_skips_unremarkable_elements() {
    assert_eq!(
        reset_with(&["html", "body", "div", "span"]),
        InsertionMode::InBody
    );
    assert_eq!(
        reset_with(&["html", "body", "table", "tbody", "tr", "td", "div"]),
        InsertionMode::InCell
    );
}

#[test]
fn test_reset_select_modes() {
    assert_eq!(reset_with(&["html", "body", "select"]), InsertionMode::InSelect);
    assert_eq!(
        reset_with(&["html", "body", "table", "tr", "td", "select", "option"]),
        InsertionMode::InSelectInTable
    );
    // A template between the select and the table hides the table.
    assert_eq!(
        reset_with(&["html", "body", "table", "template", "select"]),
        InsertionMode::InSelect
    );
    assert_eq!(
        reset_with(&["html", "body", "table", "tr", "td", "template", "select", "option"]),
        InsertionMode::InSelect
    );
    // A template above the table does not stop the scan.
    assert_eq!(
        reset_with(&["html", "body", "template", "table", "select"]),
        InsertionMode::InSelectInTable
    );
}

#[test]
fn test_reset_document_level_modes() {
    assert_eq!(reset_with(&["html", "head"]), InsertionMode::InHead);
    assert_eq!(reset_with(&["html", "frameset"]), InsertionMode::InFrameset);
    assert_eq!(reset_with(&["html"]), InsertionMode::BeforeHead);
    // A lone head at the bottom of the stack is still "in head".
    assert_eq!(reset_with(&["head"]), InsertionMode::InHead);

    let mut tree = DomTree::new();
    let mut state = ParseState::new();
    state.open_elements = stack_of(&mut tree, &["html"]);
    state.head_element_pointer = Some(tree.create_element("head", Namespace::Html));
    state.reset_insertion_mode_appropriately(&tree);
    assert_eq!(state.insertion_mode, InsertionMode::AfterHead);
}

#[test]
fn test_reset_template_uses_current_template_mode() {
    let mut tree = DomTree::new();
    let mut state = ParseState::new();
    state.open_elements = stack_of(&mut tree, &["html", "body", "template"]);
    state.template_insertion_modes = vec![InsertionMode::InTemplate, InsertionMode::InTable];
    state.reset_insertion_mode_appropriately(&tree);
    assert_eq!(state.insertion_mode, InsertionMode::InTable);

    state.template_insertion_modes.clear();
    state.reset_insertion_mode_appropriately(&tree);
    assert_eq!(state.insertion_mode, InsertionMode::InTemplate);
}

#[test]
fn test_reset_ignores_foreign_elements_with_html_names() {
    let mut tree = DomTree::new();
    let mut state = ParseState::new();
    state.open_elements = stack_of(&mut tree, &["html", "body"]);
    state.open_elements.push(tree.create_element("svg", Namespace::Svg));
    state.open_elements.push(tree.create_element("td", Namespace::Svg));
    state.reset_insertion_mode_appropriately(&tree);
    assert_eq!(state.insertion_mode, InsertionMode::InBody);
}

// ============================================================================
// Fragment case
// ============================================================================

fn fragment_mode(context_tag: &str) -> InsertionMode {
    let mut tree = DomTree::new();
    let context = tree.create_element(context_tag, Namespace::Html);
    let mut state = ParseState::for_fragment(&tree, context);
    state.open_elements = stack_of(&mut tree, &["html"]);
    state.reset_insertion_mode_appropriately(&tree);
    state.insertion_mode
}

#[test]
fn test_fragment_reset_uses_context_element() {
    assert_eq!(fragment_mode("tr"), InsertionMode::InRow);
    assert_eq!(fragment_mode("tbody"), InsertionMode::InTableBody);
    assert_eq!(fragment_mode("select"), InsertionMode::InSelect);
    assert_eq!(fragment_mode("div"), InsertionMode::InBody);
    // td only counts when it is not the last node; head always does.
    assert_eq!(fragment_mode("td"), InsertionMode::InBody);
    assert_eq!(fragment_mode("head"), InsertionMode::InHead);
    assert_eq!(fragment_mode("template"), InsertionMode::InTemplate);
}

#[test]
fn test_fragment_adjusted_current_node() {
    let mut tree = DomTree::new();
    let context = tree.create_element("math", Namespace::MathMl);
    let mut state = ParseState::for_fragment(&tree, context);
    assert!(state.is_fragment_case());
    assert_eq!(state.context_element(), Some(context));

    let html = tree.create_element("html", Namespace::Html);
    state.open_elements.push(html);
    assert_eq!(state.current_node(), Some(html));
    assert_eq!(state.adjusted_current_node(), Some(context));
    assert!(state.adjusted_current_node_is_foreign(&tree));

    let p = tree.create_element("p", Namespace::Html);
    state.open_elements.push(p);
    assert_eq!(state.adjusted_current_node(), Some(p));
    assert!(!state.adjusted_current_node_is_foreign(&tree));
}

#[test]
fn test_fragment_template_and_form_pointer() {
    let mut tree = DomTree::new();
    let html = tree.create_element("html", Namespace::Html);
    let _ = tree.append_child(NodeId::ROOT, html).unwrap();
    let form = tree.create_element("form", Namespace::Html);
    let _ = tree.append_child(html, form).unwrap();
    let template = tree.create_element("template", Namespace::Html);
    let _ = tree.append_child(form, template).unwrap();

    let state = ParseState::for_fragment(&tree, template);
    assert_eq!(state.form_element_pointer, Some(form));
    assert_eq!(
        state.current_template_insertion_mode(),
        Some(InsertionMode::InTemplate)
    );

    let state = ParseState::for_fragment(&tree, form);
    assert_eq!(state.form_element_pointer, Some(form));
    assert!(state.template_insertion_modes.is_empty());
}

#[test]
fn test_document_state_defaults() {
    let state = ParseState::default();
    assert_eq!(state.insertion_mode, InsertionMode::Initial);
    assert!(state.frameset_ok);
    assert!(!state.is_fragment_case());
    assert_eq!(state.adjusted_current_node(), None);
}

// ============================================================================
// Scopes
// ============================================================================

#[test]
fn test_default_scope() {
    let mut tree = DomTree::new();
    let stack = stack_of(&mut tree, &["html", "body", "p", "span"]);
    assert!(stack.has_element_in_scope(&tree, HtmlElementType::P, Scope::Default));

    let stack = stack_of(&mut tree, &["html", "body", "p", "table"]);
    assert!(!stack.has_element_in_scope(&tree, HtmlElementType::P, Scope::Default));
    assert!(stack.has_element_in_scope(&tree, HtmlElementType::Table, Scope::Default));
}

#[test]
fn test_foreign_scope_markers() {
    let mut tree = DomTree::new();
    let mut stack = stack_of(&mut tree, &["html", "body", "p", "svg"]);
    assert!(stack.has_element_in_scope(&tree, HtmlElementType::P, Scope::Default));
    stack.push(tree.create_element("foreignObject", Namespace::Svg));
    assert!(!stack.has_element_in_scope(&tree, HtmlElementType::P, Scope::Default));

    let mut stack = stack_of(&mut tree, &["html", "body", "p"]);
    stack.push(tree.create_element("mtext", Namespace::MathMl));
    assert!(!stack.has_element_in_scope(&tree, HtmlElementType::P, Scope::Default));
}

#[test]
fn test_button_and_list_item_scopes() {
    let mut tree = DomTree::new();
    let stack = stack_of(&mut tree, &["html", "body", "p", "button"]);
    assert!(stack.has_element_in_scope(&tree, HtmlElementType::P, Scope::Default));
    assert!(!stack.has_element_in_scope(&tree, HtmlElementType::P, Scope::Button));

    let stack = stack_of(&mut tree, &["html", "body", "ul", "li", "ol"]);
    assert!(!stack.has_element_in_scope(&tree, HtmlElementType::Li, Scope::ListItem));
    assert!(stack.has_element_in_scope(&tree, HtmlElementType::Li, Scope::Default));
}

#[test]
fn test_table_and_select_scopes() {
    let mut tree = DomTree::new();
    let stack = stack_of(&mut tree, &["html", "body", "table", "tbody", "tr", "td", "div"]);
    // td is a default-scope marker but not a table-scope one.
    assert!(stack.has_element_in_scope(&tree, HtmlElementType::Tr, Scope::Table));
    assert!(!stack.has_element_in_scope(&tree, HtmlElementType::Tr, Scope::Default));

    let stack = stack_of(&mut tree, &["html", "body", "select", "optgroup", "option"]);
    assert!(stack.has_element_in_scope(&tree, HtmlElementType::Select, Scope::Select));
    let stack = stack_of(&mut tree, &["html", "body", "select", "div"]);
    assert!(!stack.has_element_in_scope(&tree, HtmlElementType::Select, Scope::Select));
}

#[test]
fn test_has_node_in_scope() {
    let mut tree = DomTree::new();
    let ids = elements(&mut tree, &["html", "body", "b", "b"]);
    let mut stack = StackOfOpenElements::new();
    for &id in &ids {
        stack.push(id);
    }
    assert!(stack.has_node_in_scope(&tree, ids[2], Scope::Default));
    stack.push(tree.create_element("object", Namespace::Html));
    assert!(!stack.has_node_in_scope(&tree, ids[2], Scope::Default));
}

// ============================================================================
// Stack manipulation
// ============================================================================

#[test]
fn test_pop_until_one_of() {
    let mut tree = DomTree::new();
    let ids = elements(&mut tree, &["html", "body", "table", "tbody", "tr", "td"]);
    let mut stack = StackOfOpenElements::new();
    for &id in &ids {
        stack.push(id);
    }

    let popped = stack.pop_until_one_of(&tree, &[HtmlElementType::Td, HtmlElementType::Th]);
    assert_eq!(popped, Some(ids[5]));
    assert_eq!(stack.top(), Some(ids[4]));

    stack.pop_until_current_is_one_of(&tree, &[HtmlElementType::Table]);
    assert_eq!(stack.top(), Some(ids[2]));
    assert_eq!(stack.len(), 3);
}

#[test]
fn test_stack_editing() {
    let mut tree = DomTree::new();
    let ids = elements(&mut tree, &["html", "body", "a", "b"]);
    let mut stack = StackOfOpenElements::new();
    for &id in &ids[..3] {
        stack.push(id);
    }
    stack.insert_above(1, ids[3]);
    assert_eq!(stack.iter().collect::<Vec<_>>(), vec![ids[0], ids[1], ids[3], ids[2]]);

    assert!(stack.remove(ids[3]));
    assert!(!stack.remove(ids[3]));
    assert!(stack.replace(ids[2], ids[3]));
    assert_eq!(stack.top(), Some(ids[3]));
    assert_eq!(stack.bottom(), Some(ids[0]));
    assert_eq!(stack.position(ids[1]), Some(1));
}

// ============================================================================
// Active formatting elements
// ============================================================================

fn b_tag(attrs: &[(&str, &str)]) -> Token {
    Token::start_tag("b", attrs)
}

#[test]
fn test_noahs_ark_keeps_three_matching_entries() {
    let mut tree = DomTree::new();
    let ids = elements(&mut tree, &["b", "b", "b", "b"]);
    let mut list = ActiveFormattingElements::new();
    for &id in &ids {
        list.push(id, &b_tag(&[("class", "x")]));
    }
    assert_eq!(list.len(), 3);
    assert!(!list.contains(ids[0]));
    assert!(list.contains(ids[3]));
}

#[test]
fn test_noahs_ark_compares_attributes_as_sets() {
    let mut tree = DomTree::new();
    let ids = elements(&mut tree, &["b", "b", "b", "b", "b"]);
    let mut list = ActiveFormattingElements::new();
    list.push(ids[0], &b_tag(&[("a", "1"), ("b", "2")]));
    list.push(ids[1], &b_tag(&[("b", "2"), ("a", "1")]));
    list.push(ids[2], &b_tag(&[("a", "1"), ("b", "2")]));
    // Different attribute value: not a match.
    list.push(ids[3], &b_tag(&[("a", "1"), ("b", "3")]));
    assert_eq!(list.len(), 4);
    list.push(ids[4], &b_tag(&[("b", "2"), ("a", "1")]));
    assert_eq!(list.len(), 4);
    assert!(!list.contains(ids[0]));
}

#[test]
fn test_noahs_ark_stops_at_marker() {
    let mut tree = DomTree::new();
    let ids = elements(&mut tree, &["b", "b", "b", "b", "b"]);
    let mut list = ActiveFormattingElements::new();
    list.push(ids[0], &b_tag(&[]));
    list.push_marker();
    for &id in &ids[1..] {
        list.push(id, &b_tag(&[]));
    }
    assert!(list.contains(ids[0]));
    assert!(!list.contains(ids[1]));
    assert_eq!(list.len(), 5);

    list.clear_to_last_marker();
    assert_eq!(list.len(), 1);
    assert_eq!(list.last().and_then(ActiveFormattingElement::node_id), Some(ids[0]));
}

#[test]
fn test_last_element_after_marker_named() {
    let mut tree = DomTree::new();
    let ids = elements(&mut tree, &["a", "b", "a"]);
    let mut list = ActiveFormattingElements::new();
    list.push(ids[0], &Token::start_tag("a", &[]));
    list.push_marker();
    list.push(ids[1], &Token::start_tag("b", &[]));
    assert_eq!(list.last_element_after_marker_named("a"), None);
    list.push(ids[2], &Token::start_tag("a", &[]));
    assert_eq!(list.last_element_after_marker_named("a"), Some(ids[2]));

    assert!(list.replace(ids[1], ids[0]));
    assert_eq!(list.position(ids[0]), Some(0));
    assert!(list.remove(ids[2]));
    assert_eq!(list.last_element_after_marker_named("a"), None);
}

//! Tree-construction context tracked alongside the tokenizer.
//!
//! [§ 13.2.4 Parse state](https://html.spec.whatwg.org/multipage/parsing.html#parse-state)
//!
//! The tree constructor itself lives outside this crate. It owns a [`ParseState`],
//! reads and writes the insertion mode, pushes and pops open elements, and asks
//! for the insertion mode to be reset after closing tables, selects and templates.

/// The list of active formatting elements.
mod active_formatting;
/// The insertion mode enumeration.
mod insertion_mode;
/// The stack of open elements and scope queries.
mod open_elements;

pub use active_formatting::{ActiveFormattingElement, ActiveFormattingElements};
pub use insertion_mode::InsertionMode;
pub use open_elements::{Scope, StackOfOpenElements};

use log::trace;
use quill_common::warning::warn_once;
use quill_dom::{DomTree, HtmlElementType, Namespace, NodeId};

use open_elements::html_type;

/// Per-parse tree construction state.
#[derive(Debug, Clone)]
pub struct ParseState {
    /// [§ 13.2.4.1 The insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-insertion-mode)
    pub insertion_mode: InsertionMode,
    /// "the original insertion mode", set when switching to "text" or "in table text".
    pub original_insertion_mode: Option<InsertionMode>,
    /// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    pub open_elements: StackOfOpenElements,
    /// [§ 13.2.4.3 The list of active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#the-list-of-active-formatting-elements)
    pub active_formatting_elements: ActiveFormattingElements,
    /// "The stack of template insertion modes". The last entry is the current one.
    pub template_insertion_modes: Vec<InsertionMode>,
    /// [§ 13.2.4.4 The element pointers](https://html.spec.whatwg.org/multipage/parsing.html#the-element-pointers)
    pub head_element_pointer: Option<NodeId>,
    /// The form element pointer.
    pub form_element_pointer: Option<NodeId>,
    /// [§ 13.2.4.5 Other parsing state flags](https://html.spec.whatwg.org/multipage/parsing.html#frameset-ok-flag)
    /// "The frameset-ok flag is set to "ok" when the parser is created."
    pub frameset_ok: bool,
    /// The context element when parsing a fragment.
    context_element: Option<NodeId>,
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseState {
    /// State for parsing a whole document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            insertion_mode: InsertionMode::Initial,
            original_insertion_mode: None,
            open_elements: StackOfOpenElements::new(),
            active_formatting_elements: ActiveFormattingElements::new(),
            template_insertion_modes: Vec::new(),
            head_element_pointer: None,
            form_element_pointer: None,
            frameset_ok: true,
            context_element: None,
        }
    }

    /// [§ 13.4 Parsing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#parsing-html-fragments)
    ///
    /// State for the fragment case with `context` as the context element.
    ///
    /// "If the context element is a template element, push "in template" onto the
    /// stack of template insertion modes so that it is the new current template
    /// insertion mode."
    /// "Set the parser's form element pointer to the nearest node to the context
    /// element that is a form element (going straight up the ancestor chain, and
    /// including the element itself, if it is a form element), if any."
    ///
    /// Pushing the root html element and resetting the insertion mode is left to
    /// the tree constructor, which creates that element.
    #[must_use]
    pub fn for_fragment(tree: &DomTree, context: NodeId) -> Self {
        let mut state = Self::new();
        state.context_element = Some(context);
        if html_type(tree, context) == Some(HtmlElementType::Template) {
            state.template_insertion_modes.push(InsertionMode::InTemplate);
        }
        state.form_element_pointer = std::iter::once(context)
            .chain(tree.ancestors(context))
            .find(|&id| html_type(tree, id) == Some(HtmlElementType::Form));
        state
    }

    /// The fragment context element, if this is the fragment case.
    #[must_use]
    pub const fn context_element(&self) -> Option<NodeId> {
        self.context_element
    }

    /// Whether the parser was created for the fragment parsing algorithm.
    #[must_use]
    pub const fn is_fragment_case(&self) -> bool {
        self.context_element.is_some()
    }

    /// "The current node is the bottommost node in this stack of open elements."
    #[must_use]
    pub fn current_node(&self) -> Option<NodeId> {
        self.open_elements.top()
    }

    /// "The adjusted current node is the context element if the parser was created
    /// as part of the HTML fragment parsing algorithm and the stack of open elements
    /// has only one element in it (fragment case); otherwise, the adjusted current
    /// node is the current node."
    #[must_use]
    pub fn adjusted_current_node(&self) -> Option<NodeId> {
        match self.context_element {
            Some(context) if self.open_elements.len() == 1 => Some(context),
            _ => self.current_node(),
        }
    }

    /// Whether the adjusted current node is an element outside the HTML namespace.
    /// The tokenizer needs this to decide whether `<![CDATA[` opens a CDATA section.
    #[must_use]
    pub fn adjusted_current_node_is_foreign(&self, tree: &DomTree) -> bool {
        self.adjusted_current_node()
            .and_then(|id| tree.as_element(id))
            .is_some_and(|e| e.namespace != Namespace::Html)
    }

    /// "The current template insertion mode is the insertion mode that was most
    /// recently pushed onto the stack of template insertion modes."
    #[must_use]
    pub fn current_template_insertion_mode(&self) -> Option<InsertionMode> {
        self.template_insertion_modes.last().copied()
    }

    /// [§ 13.2.4.1 Reset the insertion mode appropriately](https://html.spec.whatwg.org/multipage/parsing.html#reset-the-insertion-mode-appropriately)
    ///
    /// Walks the stack of open elements from the current node toward the bottom
    /// and picks the mode of the first element that decides one. The order of
    /// the checks matters.
    pub fn reset_insertion_mode_appropriately(&mut self, tree: &DomTree) {
        let mode = self.resolve_insertion_mode(tree);
        trace!(
            target: "quill.html.parse_state",
            "reset insertion mode: {} -> {mode}",
            self.insertion_mode
        );
        self.insertion_mode = mode;
    }

    fn resolve_insertion_mode(&self, tree: &DomTree) -> InsertionMode {
        // STEP 1: "Let last be false."
        let mut last = false;

        // STEP 2: "Let node be the last node in the stack of open elements."
        for index in (0..self.open_elements.len()).rev() {
            let Some(mut node) = self.open_elements.get(index) else {
                continue;
            };

            // STEP 3: "Loop: If node is the first node in the stack of open elements,
            //          then set last to true, and, if the parser was created as part
            //          of the HTML fragment parsing algorithm (fragment case), set node
            //          to the context element passed to that algorithm."
            if index == 0 {
                last = true;
                if let Some(context) = self.context_element {
                    node = context;
                }
            }

            match html_type(tree, node) {
                // STEP 4: "If node is a select element, run these substeps..."
                Some(HtmlElementType::Select) => {
                    return self.select_mode(tree, index, last);
                }
                // STEP 5: "If node is a td or th element and last is false, then switch
                //          the insertion mode to "in cell" and return."
                Some(HtmlElementType::Td | HtmlElementType::Th) if !last => {
                    return InsertionMode::InCell;
                }
                // STEP 6: "If node is a tr element, then switch the insertion mode to
                //          "in row" and return."
                Some(HtmlElementType::Tr) => return InsertionMode::InRow,
                // STEP 7: "If node is a tbody, thead, or tfoot element, then switch the
                //          insertion mode to "in table body" and return."
                Some(t) if t.is_table_section() => return InsertionMode::InTableBody,
                // STEP 8: "If node is a caption element, then switch the insertion mode
                //          to "in caption" and return."
                Some(HtmlElementType::Caption) => return InsertionMode::InCaption,
                // STEP 9: "If node is a colgroup element, then switch the insertion mode
                //          to "in column group" and return."
                Some(HtmlElementType::Colgroup) => return InsertionMode::InColumnGroup,
                // STEP 10: "If node is a table element, then switch the insertion mode
                //           to "in table" and return."
                Some(HtmlElementType::Table) => return InsertionMode::InTable,
                // STEP 11: "If node is a template element, then switch the insertion
                //           mode to the current template insertion mode and return."
                Some(HtmlElementType::Template) => {
                    return self.current_template_insertion_mode().unwrap_or_else(|| {
                        let _ = warn_once(
                            "ParseState",
                            "template on the open element stack with no template insertion mode",
                        );
                        InsertionMode::InTemplate
                    });
                }
                // STEP 12: "If node is a head element, then switch the insertion mode
                //           to "in head" and return." Unlike td and th, a head checked
                //           as the last node still selects "in head".
                Some(HtmlElementType::Head) => return InsertionMode::InHead,
                // STEP 13: "If node is a body element, then switch the insertion mode to
                //           "in body" and return."
                Some(HtmlElementType::Body) => return InsertionMode::InBody,
                // STEP 14: "If node is a frameset element, then switch the insertion mode
                //           to "in frameset" and return."
                Some(HtmlElementType::Frameset) => return InsertionMode::InFrameset,
                // STEP 15: "If node is an html element, run these substeps: If the head
                //           element pointer is null, switch the insertion mode to
                //           "before head" and return. Otherwise, the head element pointer
                //           is not null, switch the insertion mode to "after head" and return."
                Some(HtmlElementType::Html) => {
                    return if self.head_element_pointer.is_none() {
                        InsertionMode::BeforeHead
                    } else {
                        InsertionMode::AfterHead
                    };
                }
                // STEP 16: "If last is true, then switch the insertion mode to "in body"
                //           and return."
                _ if last => return InsertionMode::InBody,
                // STEP 17: "Let node now be the node before node in the stack of open
                //           elements." STEP 18: "Return to the step labeled loop."
                _ => {}
            }
        }

        // Only reached with an empty stack.
        InsertionMode::InBody
    }

    /// STEP 4 of the reset algorithm for a select element at stack `index`.
    ///
    /// "1. If last is true, jump to the step below labeled done.
    ///  2. Let ancestor be node.
    ///  3. Loop: If ancestor is the first node in the stack of open elements, jump
    ///     to the step below labeled done.
    ///  4. Let ancestor be the node before ancestor in the stack of open elements.
    ///  5. If ancestor is a template node, jump to the step below labeled done.
    ///  6. If ancestor is a table node, switch the insertion mode to "in select in
    ///     table" and return.
    ///  7. Jump back to the step labeled loop.
    ///  8. Done: Switch the insertion mode to "in select" and return."
    fn select_mode(&self, tree: &DomTree, index: usize, last: bool) -> InsertionMode {
        if !last {
            for ancestor in self.open_elements.iter().take(index).rev() {
                match html_type(tree, ancestor) {
                    Some(HtmlElementType::Template) => break,
                    Some(HtmlElementType::Table) => return InsertionMode::InSelectInTable,
                    _ => {}
                }
            }
        }
        InsertionMode::InSelect
    }
}

use quill_dom::{DomTree, HtmlElementType, Namespace, NodeId};

/// [§ 13.2.4.2 Has an element in the specific scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-the-specific-scope)
///
/// The element lists that terminate a scope search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// "has an element in scope"
    Default,
    /// "has an element in list item scope": default plus ol and ul.
    ListItem,
    /// "has an element in button scope": default plus button.
    Button,
    /// "has an element in table scope": html, table and template.
    Table,
    /// "has an element in select scope": everything except optgroup and option.
    Select,
}

impl Scope {
    /// Whether the element `id` ends a search in this scope.
    fn is_marker(self, tree: &DomTree, id: NodeId) -> bool {
        let Some(element) = tree.as_element(id) else {
            return false;
        };
        let html = if element.namespace == Namespace::Html {
            Some(element.element_type)
        } else {
            None
        };
        match self {
            Self::Select => !matches!(
                html,
                Some(HtmlElementType::Optgroup | HtmlElementType::Option)
            ),
            Self::Table => matches!(
                html,
                Some(HtmlElementType::Html | HtmlElementType::Table | HtmlElementType::Template)
            ),
            Self::Default => is_default_scope_marker(element.namespace, &element.local_name, html),
            Self::ListItem => {
                matches!(html, Some(HtmlElementType::Ol | HtmlElementType::Ul))
                    || is_default_scope_marker(element.namespace, &element.local_name, html)
            }
            Self::Button => {
                html == Some(HtmlElementType::Button)
                    || is_default_scope_marker(element.namespace, &element.local_name, html)
            }
        }
    }
}

/// "applet, caption, html, table, td, th, marquee, object, template, MathML mi,
/// MathML mo, MathML mn, MathML ms, MathML mtext, MathML annotation-xml, SVG
/// foreignObject, SVG desc, SVG title"
fn is_default_scope_marker(
    namespace: Namespace,
    local_name: &str,
    html: Option<HtmlElementType>,
) -> bool {
    match namespace {
        Namespace::Html => matches!(
            html,
            Some(
                HtmlElementType::Applet
                    | HtmlElementType::Caption
                    | HtmlElementType::Html
                    | HtmlElementType::Table
                    | HtmlElementType::Td
                    | HtmlElementType::Th
                    | HtmlElementType::Marquee
                    | HtmlElementType::Object
                    | HtmlElementType::Template
            )
        ),
        Namespace::MathMl => matches!(
            local_name,
            "mi" | "mo" | "mn" | "ms" | "mtext" | "annotation-xml"
        ),
        Namespace::Svg => matches!(local_name, "foreignObject" | "desc" | "title"),
    }
}

/// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
///
/// Grows upward: index 0 is the bottom (normally the html element) and the
/// last entry is the current node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackOfOpenElements {
    elements: Vec<NodeId>,
}

impl StackOfOpenElements {
    /// An empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Push an element; it becomes the current node.
    pub fn push(&mut self, id: NodeId) {
        self.elements.push(id);
    }

    /// Pop the current node.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.elements.pop()
    }

    /// "The current node is the bottommost node in this stack of open elements."
    #[must_use]
    pub fn top(&self) -> Option<NodeId> {
        self.elements.last().copied()
    }

    /// The first element pushed.
    #[must_use]
    pub fn bottom(&self) -> Option<NodeId> {
        self.elements.first().copied()
    }

    /// Number of open elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`, counted from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.elements.get(index).copied()
    }

    /// Whether `id` is anywhere on the stack.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.elements.contains(&id)
    }

    /// Position of `id` counted from the bottom.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.elements.iter().position(|&e| e == id)
    }

    /// Remove `id` wherever it is. Returns whether it was present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.position(id) {
            Some(index) => {
                let _ = self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Insert `id` just above the element at `index`.
    pub fn insert_above(&mut self, index: usize, id: NodeId) {
        let at = (index + 1).min(self.elements.len());
        self.elements.insert(at, id);
    }

    /// Replace `old` with `new` in place. Returns whether `old` was present.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> bool {
        match self.elements.iter_mut().find(|e| **e == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator + '_ {
        self.elements.iter().copied()
    }

    /// Pop everything.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Pop elements until one matching `predicate` has been popped.
    /// Returns the popped element that matched, if any.
    pub fn pop_until(&mut self, mut predicate: impl FnMut(NodeId) -> bool) -> Option<NodeId> {
        while let Some(id) = self.elements.pop() {
            if predicate(id) {
                return Some(id);
            }
        }
        None
    }

    /// "Pop elements from the stack of open elements until an HTML element with
    /// one of these tag names has been popped from the stack."
    pub fn pop_until_one_of(
        &mut self,
        tree: &DomTree,
        types: &[HtmlElementType],
    ) -> Option<NodeId> {
        self.pop_until(|id| html_type(tree, id).is_some_and(|t| types.contains(&t)))
    }

    /// "Pop elements until the current node is one of these, leaving it on the stack."
    pub fn pop_until_current_is_one_of(&mut self, tree: &DomTree, types: &[HtmlElementType]) {
        while let Some(top) = self.top() {
            if html_type(tree, top).is_some_and(|t| types.contains(&t)) {
                break;
            }
            let _ = self.elements.pop();
        }
    }

    /// [§ 13.2.4.2 Has an element in the specific scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-the-specific-scope)
    ///
    /// STEP 1: "Initialize node to be the current node (the bottommost node of the stack)."
    /// STEP 2: "If node is the target node, terminate in a match state."
    /// STEP 3: "Otherwise, if node is one of the element types in list,
    ///          terminate in a failure state."
    /// STEP 4: "Otherwise, set node to the previous entry in the stack of
    ///          open elements and return to step 2."
    #[must_use]
    pub fn has_element_in_scope(
        &self,
        tree: &DomTree,
        target: HtmlElementType,
        scope: Scope,
    ) -> bool {
        self.has_in_scope(tree, scope, |id| html_type(tree, id) == Some(target))
    }

    /// As [`StackOfOpenElements::has_element_in_scope`] but for one specific node.
    #[must_use]
    pub fn has_node_in_scope(&self, tree: &DomTree, node: NodeId, scope: Scope) -> bool {
        self.has_in_scope(tree, scope, |id| id == node)
    }

    fn has_in_scope(
        &self,
        tree: &DomTree,
        scope: Scope,
        mut is_target: impl FnMut(NodeId) -> bool,
    ) -> bool {
        for &id in self.elements.iter().rev() {
            if is_target(id) {
                return true;
            }
            if scope.is_marker(tree, id) {
                return false;
            }
        }
        false
    }
}

/// The element type of `id` if it is an HTML element.
pub(crate) fn html_type(tree: &DomTree, id: NodeId) -> Option<HtmlElementType> {
    tree.as_element(id)
        .filter(|e| e.namespace == Namespace::Html)
        .map(|e| e.element_type)
}

use indextree::{Arena, NodeId};

use crate::element::ElementTree;
use crate::error::Error;
use crate::value::{Element, Text, Value, ValueType};

pub(crate) type DomArena = Arena<Value>;

/// A node in a [`Dom`].
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// An arena of elements and text nodes.
///
/// `Dom` owns every node; you refer to nodes with [`Node`] handles. It
/// implements [`ElementTree`], so the class helpers and
/// [`find_from_element`](crate::find_from_element) work on it directly.
///
/// ```rust
/// use microlib_utils::{add_class, has_class, Dom};
///
/// let mut dom = Dom::new();
/// let div = dom.parse(r#"<div class="a b"/>"#)?;
/// add_class(&mut dom, div, "c");
/// assert!(has_class(&dom, div, "c"));
/// assert_eq!(dom.to_string(div), r#"<div class="a b c"/>"#);
/// # Ok::<(), microlib_utils::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Dom {
    pub(crate) arena: DomArena,
}

impl Dom {
    /// Create a new, empty `Dom`.
    pub fn new() -> Self {
        Dom {
            arena: DomArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &DomArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut DomArena {
        &mut self.arena
    }

    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    /// Create a new, unattached element node.
    pub fn new_element(&mut self, tag: &str) -> Node {
        self.new_node(Value::Element(Element::new(tag.to_string())))
    }

    /// Create a new, unattached text node.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string())))
    }

    /// The value of a node.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    /// The value of a node, mutably.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }

    /// The type of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Element value of a node, or [`None`] for a text node.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            Value::Text(_) => None,
        }
    }

    /// Mutable element value of a node, or [`None`] for a text node.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            Value::Text(_) => None,
        }
    }

    /// Text value of a node, or [`None`] for an element.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            Value::Element(_) => None,
        }
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if the node is not attached to anything.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child, element or text.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get next sibling, element or text.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Iterator over all child nodes, text included.
    pub fn all_children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over the element children of a node; text is skipped.
    ///
    /// ```rust
    /// let mut dom = microlib_utils::Dom::new();
    /// let p = dom.parse("<p>Hello <a/> and <b/></p>")?;
    /// assert_eq!(dom.all_children(p).count(), 4);
    /// assert_eq!(dom.element_children(p).count(), 2);
    /// # Ok::<(), microlib_utils::Error>(())
    /// ```
    pub fn element_children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.all_children(node)
            .filter(move |child| self.value_type(*child) == ValueType::Element)
    }

    /// Append a child to the end of the children of the given parent.
    ///
    /// Fails with [`Error::NotElement`] if the parent is a text node, and
    /// with [`Error::NodeError`] if the child is the parent or one of its
    /// ancestors. A child that was attached elsewhere is moved.
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        if self.value_type(parent) != ValueType::Element {
            return Err(Error::NotElement(parent));
        }
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Append a new element to a parent, returning it.
    pub fn append_element(&mut self, parent: Node, tag: &str) -> Result<Node, Error> {
        let element = self.new_element(tag);
        self.append(parent, element)?;
        Ok(element)
    }

    /// Append a new text node to a parent, returning it.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let text = self.new_text(text);
        self.append(parent, text)?;
        Ok(text)
    }

    fn expect_element(&self, node: Node) -> &Element {
        match self.value(node) {
            Value::Element(element) => element,
            Value::Text(_) => panic!("node {:?} is a text node, not an element", node),
        }
    }
}

/// # Panics
///
/// The accessors panic when handed a text node; text has no class string
/// or id.
impl ElementTree for Dom {
    type Node = Node;

    fn class_name(&self, element: Node) -> &str {
        self.expect_element(element).class_name()
    }

    fn set_class_name(&mut self, element: Node, class_name: String) {
        match self.value_mut(element) {
            Value::Element(e) => e.class_name = class_name,
            Value::Text(_) => panic!("node {:?} is a text node, not an element", element),
        }
    }

    fn id(&self, element: Node) -> &str {
        self.expect_element(element).id()
    }

    fn children(&self, element: Node) -> impl Iterator<Item = Node> + '_ {
        self.element_children(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_builds_tree() {
        let mut dom = Dom::new();
        let ul = dom.new_element("ul");
        let a = dom.append_element(ul, "li").unwrap();
        let text = dom.append_text(ul, "between").unwrap();
        let b = dom.append_element(ul, "li").unwrap();
        assert_eq!(dom.all_children(ul).collect::<Vec<_>>(), vec![a, text, b]);
        assert_eq!(dom.element_children(ul).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(dom.parent(a), Some(ul));
        assert_eq!(dom.first_child(ul), Some(a));
        assert_eq!(dom.next_sibling(a), Some(text));
    }

    #[test]
    fn test_append_to_text_fails() {
        let mut dom = Dom::new();
        let text = dom.new_text("hello");
        let el = dom.new_element("p");
        assert!(matches!(dom.append(text, el), Err(Error::NotElement(n)) if n == text));
    }

    #[test]
    fn test_append_ancestor_fails() {
        let mut dom = Dom::new();
        let outer = dom.new_element("div");
        let inner = dom.append_element(outer, "div").unwrap();
        assert!(matches!(
            dom.append(inner, outer),
            Err(Error::NodeError(_))
        ));
    }

    #[test]
    fn test_append_moves_attached_child() {
        let mut dom = Dom::new();
        let first = dom.new_element("div");
        let second = dom.new_element("div");
        let child = dom.append_element(first, "span").unwrap();
        dom.append(second, child).unwrap();
        assert_eq!(dom.element_children(first).count(), 0);
        assert_eq!(dom.parent(child), Some(second));
    }

    #[test]
    fn test_element_tree_children_skip_text() {
        let mut dom = Dom::new();
        let p = dom.new_element("p");
        dom.append_text(p, "a").unwrap();
        let em = dom.append_element(p, "em").unwrap();
        dom.append_text(p, "b").unwrap();
        assert_eq!(ElementTree::children(&dom, p).collect::<Vec<_>>(), vec![em]);
    }

    #[test]
    #[should_panic]
    fn test_class_name_of_text_panics() {
        let mut dom = Dom::new();
        let text = dom.new_text("hello");
        ElementTree::class_name(&dom, text);
    }
}

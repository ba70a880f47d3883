/// Access to elements as the class helpers need them.
///
/// An implementor is a store of elements addressed by a copyable
/// [`Node`](ElementTree::Node) handle. Each element has a space separated
/// class string that can be replaced, an id, and an ordered list of
/// element children.
///
/// [`Dom`](crate::Dom) implements this trait, but any tree of UI nodes can:
///
/// ```rust
/// use microlib_utils::{add_class, ElementTree};
///
/// struct Widgets {
///     classes: Vec<String>,
/// }
///
/// impl ElementTree for Widgets {
///     type Node = usize;
///
///     fn class_name(&self, element: usize) -> &str {
///         &self.classes[element]
///     }
///
///     fn set_class_name(&mut self, element: usize, class_name: String) {
///         self.classes[element] = class_name;
///     }
///
///     fn id(&self, _element: usize) -> &str {
///         ""
///     }
///
///     fn children(&self, _element: usize) -> impl Iterator<Item = usize> + '_ {
///         std::iter::empty()
///     }
/// }
///
/// let mut widgets = Widgets { classes: vec!["button".to_string()] };
/// add_class(&mut widgets, 0, "primary");
/// assert_eq!(widgets.class_name(0), "button primary");
/// ```
///
/// The accessors are infallible. When a handle does not name an element
/// the implementation is expected to panic.
pub trait ElementTree {
    /// Handle to an element in this tree.
    type Node: Copy;

    /// The class string of an element.
    fn class_name(&self, element: Self::Node) -> &str;

    /// Replace the class string of an element.
    fn set_class_name(&mut self, element: Self::Node, class_name: String);

    /// The id of an element; the empty string if it has none.
    fn id(&self, element: Self::Node) -> &str;

    /// The element children of an element, in order.
    fn children(&self, element: Self::Node) -> impl Iterator<Item = Self::Node> + '_;
}

use crate::class::has_class;
use crate::element::ElementTree;
use crate::iterate::for_each;

/// Find the children of an element whose class list contains `search`, or
/// whose id is `search`.
///
/// Only direct children are looked at; grandchildren are never searched.
/// Matches are returned in child order.
///
/// ```rust
/// use microlib_utils::{find_from_element, Dom};
///
/// let mut dom = Dom::new();
/// let ul = dom.parse(r#"<ul><li class="item"/><li id="item"/><li><b class="item"/></li></ul>"#)?;
/// let found = find_from_element(&dom, ul, "item");
/// assert_eq!(found.len(), 2);
/// # Ok::<(), microlib_utils::Error>(())
/// ```
pub fn find_from_element<T: ElementTree>(tree: &T, element: T::Node, search: &str) -> Vec<T::Node> {
    let mut results = Vec::new();
    for_each(tree.children(element), |_, child| {
        if has_class(tree, child, search) || tree.id(child) == search {
            results.push(child);
        }
    });
    results
}

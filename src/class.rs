//! Class list helpers.
//!
//! A class string is split on single spaces. Runs of spaces, or spaces at
//! either end, give empty tokens; these are kept, so writing the list back
//! reproduces the original spacing.

use tracing::trace;

use crate::element::ElementTree;

fn class_tokens(class_name: &str) -> Vec<&str> {
    class_name.split(' ').collect()
}

/// Check whether an element has a class.
///
/// The match is exact and case sensitive against each space separated
/// token. As empty tokens are kept, `""` matches when the class string is
/// empty or has doubled, leading or trailing spaces.
///
/// ```rust
/// use microlib_utils::{has_class, Dom};
///
/// let mut dom = Dom::new();
/// let div = dom.parse(r#"<div class="a b c"/>"#)?;
/// assert!(has_class(&dom, div, "b"));
/// assert!(!has_class(&dom, div, "x"));
/// assert!(!has_class(&dom, div, "a b"));
/// # Ok::<(), microlib_utils::Error>(())
/// ```
pub fn has_class<T: ElementTree>(tree: &T, element: T::Node, class_name: &str) -> bool {
    class_tokens(tree.class_name(element)).contains(&class_name)
}

/// Add a class to an element unless it already has it.
///
/// The class string is always written back, joined with single spaces.
///
/// ```rust
/// use microlib_utils::{add_class, Dom};
///
/// let mut dom = Dom::new();
/// let div = dom.parse(r#"<div class="a b"/>"#)?;
/// add_class(&mut dom, div, "d");
/// add_class(&mut dom, div, "d");
/// assert_eq!(dom.element(div).unwrap().class_name(), "a b d");
/// # Ok::<(), microlib_utils::Error>(())
/// ```
pub fn add_class<T: ElementTree>(tree: &mut T, element: T::Node, class_name: &str) {
    let joined = {
        let tree: &T = tree;
        let mut classes = class_tokens(tree.class_name(element));
        if !has_class(tree, element, class_name) {
            classes.push(class_name);
        }
        classes.join(" ")
    };
    trace!(class_name = class_name, result = %joined, "add class");
    tree.set_class_name(element, joined);
}

/// Remove a class from an element.
///
/// Only the first occurrence is removed. The class string is always
/// written back, joined with single spaces.
///
/// ```rust
/// use microlib_utils::{remove_class, Dom};
///
/// let mut dom = Dom::new();
/// let div = dom.parse(r#"<div class="a b c b"/>"#)?;
/// remove_class(&mut dom, div, "b");
/// assert_eq!(dom.element(div).unwrap().class_name(), "a c b");
/// # Ok::<(), microlib_utils::Error>(())
/// ```
pub fn remove_class<T: ElementTree>(tree: &mut T, element: T::Node, class_name: &str) {
    let joined = {
        let tree: &T = tree;
        let mut classes = class_tokens(tree.class_name(element));
        if has_class(tree, element, class_name) {
            if let Some(index) = classes.iter().position(|c| *c == class_name) {
                classes.remove(index);
            }
        }
        classes.join(" ")
    };
    trace!(class_name = class_name, result = %joined, "remove class");
    tree.set_class_name(element, joined);
}

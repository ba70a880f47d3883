use std::fmt;

use indextree::NodeEdge;

use crate::dom::{Dom, Node};
use crate::entity::{escape_attribute, escape_text};
use crate::value::{Element, Value};

impl Dom {
    /// Write a node and everything below it as markup.
    ///
    /// Elements without children are written self-closing. `id` comes
    /// first, then `class`, then the other attributes in order; empty `id`
    /// and `class` are left out.
    pub fn serialize(&self, node: Node, w: &mut impl fmt::Write) -> fmt::Result {
        for edge in node.get().traverse(self.arena()) {
            match edge {
                NodeEdge::Start(node_id) => self.write_start(Node::new(node_id), w)?,
                NodeEdge::End(node_id) => self.write_end(Node::new(node_id), w)?,
            }
        }
        Ok(())
    }

    /// Serialize a node to a string.
    ///
    /// ```rust
    /// use microlib_utils::Dom;
    ///
    /// let mut dom = Dom::new();
    /// let p = dom.parse(r#"<p class="x"  id="y">a &amp; b</p>"#)?;
    /// assert_eq!(dom.to_string(p), r#"<p id="y" class="x">a &amp; b</p>"#);
    /// # Ok::<(), microlib_utils::Error>(())
    /// ```
    pub fn to_string(&self, node: Node) -> String {
        let mut s = String::new();
        // writing into a String cannot fail
        let _ = self.serialize(node, &mut s);
        s
    }

    fn write_start(&self, node: Node, w: &mut impl fmt::Write) -> fmt::Result {
        match self.value(node) {
            Value::Element(element) => {
                write!(w, "<{}", element.tag())?;
                write_attributes(element, w)?;
                if self.first_child(node).is_none() {
                    write!(w, "/>")
                } else {
                    write!(w, ">")
                }
            }
            Value::Text(text) => write!(w, "{}", escape_text(text.get())),
        }
    }

    fn write_end(&self, node: Node, w: &mut impl fmt::Write) -> fmt::Result {
        match self.value(node) {
            Value::Element(element) if self.first_child(node).is_some() => {
                write!(w, "</{}>", element.tag())
            }
            _ => Ok(()),
        }
    }
}

fn write_attributes(element: &Element, w: &mut impl fmt::Write) -> fmt::Result {
    if !element.id().is_empty() {
        write!(w, " id=\"{}\"", escape_attribute(element.id()))?;
    }
    if !element.class_name().is_empty() {
        write!(w, " class=\"{}\"", escape_attribute(element.class_name()))?;
    }
    for (name, value) in element.attributes() {
        write!(w, " {}=\"{}\"", name, escape_attribute(value))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[rstest]
    #[case::empty("<div/>", "<div/>")]
    #[case::open_close_empty("<div></div>", "<div/>")]
    #[case::id_first(r#"<a href="/" class="x" id="y"/>"#, r#"<a id="y" class="x" href="/"/>"#)]
    #[case::irregular_spacing(r#"<a class=" x  y "/>"#, r#"<a class=" x  y "/>"#)]
    #[case::empty_class_dropped(r#"<a class="" id=""/>"#, "<a/>")]
    #[case::escapes(r#"<p title="&lt;&quot;">1 &lt; 2</p>"#, r#"<p title="&lt;&quot;">1 &lt; 2</p>"#)]
    fn serialize(#[case] markup: &str, #[case] expected: &str) {
        let mut dom = Dom::new();
        let node = dom.parse(markup).unwrap();
        assert_eq!(dom.to_string(node), expected);
    }

    #[test]
    fn test_serialize_built_tree() {
        let mut dom = Dom::new();
        let nav = dom.new_element("nav");
        let a = dom.append_element(nav, "a").unwrap();
        dom.element_mut(a).unwrap().set_class_name("link active");
        dom.append_text(a, "Home").unwrap();
        let b = dom.append_element(nav, "a").unwrap();
        dom.element_mut(b).unwrap().set_id("about");
        assert_snapshot!(
            dom.to_string(nav),
            @r###"<nav><a class="link active">Home</a><a id="about"/></nav>"###
        );
    }

    #[test]
    fn test_serialize_subtree() {
        let mut dom = Dom::new();
        let ul = dom.parse("<ul><li><b/></li></ul>").unwrap();
        let li = dom.first_child(ul).unwrap();
        assert_eq!(dom.to_string(li), "<li><b/></li>");
    }
}

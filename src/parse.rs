use ahash::HashSet;
use tracing::{debug, trace};
use xmlparser::{ElementEnd, StrSpan, Token, Tokenizer};

use crate::dom::{Dom, Node};
use crate::entity::decode_entities;
use crate::error::Error;
use crate::value::{Element, Text, Value};

struct DomBuilder<'d> {
    dom: &'d mut Dom,
    top: Option<Node>,
    open: Vec<Node>,
    pending: Option<Element>,
    seen_attributes: HashSet<String>,
}

impl<'d> DomBuilder<'d> {
    fn new(dom: &'d mut Dom) -> Self {
        DomBuilder {
            dom,
            top: None,
            open: Vec::new(),
            pending: None,
            seen_attributes: HashSet::default(),
        }
    }

    fn element_start(&mut self, tag: String) -> Result<(), Error> {
        if self.open.is_empty() && self.top.is_some() {
            return Err(Error::MultipleTopElements(tag));
        }
        self.seen_attributes.clear();
        self.pending = Some(Element::new(tag));
        Ok(())
    }

    fn attribute(&mut self, name: String, value: &str) -> Result<(), Error> {
        if !self.seen_attributes.insert(name.clone()) {
            return Err(Error::DuplicateAttribute(name));
        }
        let value = decode_entities(value)?;
        if let Some(element) = self.pending.as_mut() {
            element.set_attribute(name, value);
        }
        Ok(())
    }

    fn add(&mut self, value: Value) -> Result<Node, Error> {
        let node = self.dom.new_node(value);
        match self.open.last() {
            Some(parent) => self.dom.append(*parent, node)?,
            None => self.top = Some(node),
        }
        Ok(node)
    }

    fn element_end(&mut self, end: ElementEnd) -> Result<(), Error> {
        match end {
            ElementEnd::Open => {
                if let Some(element) = self.pending.take() {
                    trace!(tag = element.tag(), "open element");
                    let node = self.add(Value::Element(element))?;
                    self.open.push(node);
                }
            }
            ElementEnd::Empty => {
                if let Some(element) = self.pending.take() {
                    trace!(tag = element.tag(), "empty element");
                    self.add(Value::Element(element))?;
                }
            }
            ElementEnd::Close(prefix, local) => {
                let found = tag_name(prefix, local);
                let node = self
                    .open
                    .pop()
                    .ok_or_else(|| Error::InvalidCloseTag(String::new(), found.clone()))?;
                let expected = self
                    .dom
                    .element(node)
                    .map(|element| element.tag())
                    .unwrap_or_default();
                if expected != found {
                    return Err(Error::InvalidCloseTag(expected.to_string(), found));
                }
                trace!(tag = expected, "close element");
            }
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), Error> {
        if self.open.is_empty() {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(Error::TextOutsideElement(text.to_string()));
        }
        self.add(Value::Text(Text::new(text.to_string())))?;
        Ok(())
    }

    fn finish(self) -> Result<Node, Error> {
        if let Some(node) = self.open.last() {
            let tag = self
                .dom
                .element(*node)
                .map(|element| element.tag().to_string())
                .unwrap_or_default();
            return Err(Error::UnclosedTag(tag));
        }
        self.top.ok_or(Error::NoElement)
    }
}

fn tag_name(prefix: StrSpan, local: StrSpan) -> String {
    if prefix.as_str().is_empty() {
        local.as_str().to_string()
    } else {
        format!("{}:{}", prefix.as_str(), local.as_str())
    }
}

impl Dom {
    /// Parse a markup fragment into this `Dom`, returning its top element.
    ///
    /// The fragment must hold exactly one top element, optionally
    /// surrounded by whitespace or comments.
    /// `id` and `class` attributes fill [`Element::id`] and
    /// [`Element::class_name`]. The predefined entities are decoded.
    ///
    /// On error, nodes created before the failure stay in the arena,
    /// detached from any tree. Nodes from earlier parses are untouched.
    ///
    /// ```rust
    /// use microlib_utils::Dom;
    ///
    /// let mut dom = Dom::new();
    /// let ul = dom.parse(r#"<ul id="menu"><li class="active">Home</li><li>About</li></ul>"#)?;
    /// let element = dom.element(ul).unwrap();
    /// assert_eq!(element.tag(), "ul");
    /// assert_eq!(element.id(), "menu");
    /// assert_eq!(dom.element_children(ul).count(), 2);
    /// # Ok::<(), microlib_utils::Error>(())
    /// ```
    pub fn parse(&mut self, markup: &str) -> Result<Node, Error> {
        let mut builder = DomBuilder::new(self);

        for token in Tokenizer::from_fragment(markup, 0..markup.len()) {
            match token? {
                Token::ElementStart { prefix, local, .. } => {
                    builder.element_start(tag_name(prefix, local))?;
                }
                Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                } => {
                    builder.attribute(tag_name(prefix, local), value.as_str())?;
                }
                Token::ElementEnd { end, .. } => {
                    builder.element_end(end)?;
                }
                Token::Text { text } => {
                    let text = decode_entities(text.as_str())?;
                    builder.text(&text)?;
                }
                Token::Cdata { text, .. } => {
                    builder.text(text.as_str())?;
                }
                _ => {}
            }
        }

        let top = builder.finish()?;
        debug!(node = ?top, "parsed fragment");
        Ok(top)
    }
}

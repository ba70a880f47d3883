#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type of a node value.
///
/// Use it when you are interested in what a node is without needing to
/// match on its [`Value`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Element with a tag, an id, a class string and other attributes.
    Element,
    /// Text.
    Text,
}

/// A node value in a [`Dom`](crate::Dom).
///
/// Access it using [`Dom::value`](crate::Dom::value).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Element.
    Element(Element),
    /// Text.
    Text(Text),
}

impl Value {
    /// Returns the type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
        }
    }
}

/// Element value.
///
/// The `id` and `class` attributes are stored apart from the rest, as they
/// are what the class helpers and [`find_from_element`](crate::find_from_element)
/// look at. Both are the empty string when the attribute is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) id: String,
    pub(crate) class_name: String,
    pub(crate) attributes: Vec<(String, String)>,
}

impl Element {
    pub(crate) fn new(tag: String) -> Self {
        Element {
            tag,
            ..Default::default()
        }
    }

    /// The tag name, including any prefix as written.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The `id` attribute.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the `id` attribute. The empty string removes it from output.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// The space separated class string, exactly as stored.
    ///
    /// ```rust
    /// use microlib_utils::Dom;
    ///
    /// let mut dom = Dom::new();
    /// let div = dom.parse(r#"<div class="a  b"/>"#)?;
    /// assert_eq!(dom.element(div).unwrap().class_name(), "a  b");
    /// # Ok::<(), microlib_utils::Error>(())
    /// ```
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Replace the class string.
    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.class_name = class_name.into();
    }

    /// Get any other attribute by name.
    ///
    /// `id` and `class` are not found here; use [`Element::id`] and
    /// [`Element::class_name`].
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set any other attribute. An existing value is replaced in place.
    ///
    /// Setting `id` or `class` goes to the dedicated fields.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "id" => self.id = value,
            "class" => self.class_name = value,
            _ => {
                if let Some((_, existing)) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
                    *existing = value;
                } else {
                    self.attributes.push((name, value));
                }
            }
        }
    }

    /// Other attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Text value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

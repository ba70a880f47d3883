use std::fmt;

use crate::dom::Node;

/// Errors raised while building or parsing a [`Dom`](crate::Dom).
///
/// The class list helpers themselves never fail; only tree construction
/// does.
#[derive(Debug)]
pub enum Error {
    /// The node is not an element, so it cannot hold children.
    NotElement(Node),
    /// An entity was opened with `&` but never closed with `;`.
    UnclosedEntity(String),
    /// An entity other than the five predefined ones.
    InvalidEntity(String),
    /// A close tag did not match the open element. Holds the expected and
    /// the found name.
    InvalidCloseTag(String, String),
    /// The input ended while this element was still open.
    UnclosedTag(String),
    /// The same attribute occurs twice on one element.
    DuplicateAttribute(String),
    /// The input contains no element at all.
    NoElement,
    /// A second element was found at the top level.
    MultipleTopElements(String),
    /// Non-whitespace text was found outside of the top element.
    TextOutsideElement(String),
    /// Tree structure error from the underlying arena.
    NodeError(indextree::NodeError),
    /// Tokenizer error.
    Parser(xmlparser::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotElement(node) => write!(f, "node {:?} is not an element", node),
            Error::UnclosedEntity(entity) => write!(f, "unclosed entity: &{}", entity),
            Error::InvalidEntity(entity) => write!(f, "invalid entity: &{};", entity),
            Error::InvalidCloseTag(expected, found) => {
                write!(f, "expected </{}>, found </{}>", expected, found)
            }
            Error::UnclosedTag(name) => write!(f, "unclosed tag: <{}>", name),
            Error::DuplicateAttribute(name) => write!(f, "duplicate attribute: {}", name),
            Error::NoElement => write!(f, "no element found"),
            Error::MultipleTopElements(name) => {
                write!(f, "more than one top element, second is <{}>", name)
            }
            Error::TextOutsideElement(text) => write!(f, "text outside element: {:?}", text),
            Error::NodeError(e) => write!(f, "tree error: {}", e),
            Error::Parser(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NodeError(e) => Some(e),
            Error::Parser(e) => Some(e),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for Error {
    #[inline]
    fn from(e: xmlparser::Error) -> Self {
        Error::Parser(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::NodeError(e)
    }
}

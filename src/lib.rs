#![forbid(unsafe_code)]
//! Small helpers for working with elements the way a browser exposes them:
//! a space separated class string, an id and a list of element children.
//!
//! The helpers are free functions generic over [`ElementTree`], so they work
//! on any element store. [`Dom`] is a ready made arena store that can be
//! built by hand or parsed from markup.
//!
//! ```rust
//! use microlib_utils::{add_class, find_from_element, remove_class, Dom};
//!
//! let mut dom = Dom::new();
//! let menu = dom.parse(
//!     r#"<ul><li class="item active">Home</li><li class="item">About</li></ul>"#,
//! )?;
//!
//! for item in find_from_element(&dom, menu, "active") {
//!     remove_class(&mut dom, item, "active");
//! }
//! let items = find_from_element(&dom, menu, "item");
//! add_class(&mut dom, items[1], "active");
//!
//! assert_eq!(
//!     dom.to_string(menu),
//!     r#"<ul><li class="item">Home</li><li class="item active">About</li></ul>"#
//! );
//! # Ok::<(), microlib_utils::Error>(())
//! ```

mod class;
mod dom;
mod element;
mod entity;
mod error;
mod find;
mod iterate;
mod parse;
mod serialize;
mod uid;
mod value;

#[cfg(feature = "proptest")]
pub mod proptest;

pub use class::{add_class, has_class, remove_class};
pub use dom::{Dom, Node};
pub use element::ElementTree;
pub use error::Error;
pub use find::find_from_element;
pub use iterate::for_each;
pub use uid::{make_uid, uid_from_fraction};
pub use value::{Element, Text, Value, ValueType};

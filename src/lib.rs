#![forbid(unsafe_code)]

//! Htmlgen builds HTML as a tree of nodes and renders it, either compactly
//! or pretty-printed.
//!
//! All nodes live in an [`Html`] arena and are referred to by [`Node`]
//! handles. Nodes are created detached, attached with [`Html::append`] (or
//! created and attached at once with the `append_*` methods) and rendered
//! with [`Html::write`] or [`Html::write_pretty`].
//!
//! ```rust
//! use htmlgen::{AttrId, ElementId, Environment, Html};
//!
//! let mut html = Html::new();
//! let ul = html.new_element(ElementId::Ul);
//! html.set_id(ul, "menu")?;
//! for item in ["home", "about"] {
//!     let li = html.append_element(ul, ElementId::Li)?;
//!     let a = html.append_element(li, ElementId::A)?;
//!     html.set_attr(a, AttrId::Href, format!("/{}", item))?;
//!     html.append_var_text(a, "$user: ")?;
//!     html.append_text(a, item)?;
//! }
//!
//! let env: Environment = [("user", "ann")].into_iter().collect();
//! assert_eq!(
//!     html.to_string(ul, Some(&env))?,
//!     concat!(
//!         r#"<ul id="menu">"#,
//!         r#"<li><a href="/home">ann: home</a></li>"#,
//!         r#"<li><a href="/about">ann: about</a></li>"#,
//!         "</ul>",
//!     )
//! );
//! # Ok::<(), htmlgen::Error>(())
//! ```
//!
//! Text is escaped when it's added; variable text (`$name` references) is
//! escaped when it's expanded, at render time, against the [`Environment`]
//! passed to the render call. Unsafe variants of these skip escaping.
//!
//! A node can be hidden with [`Html::hide`], so it and its descendants
//! render as nothing while staying in the tree.

mod access;
mod creation;
mod element;
mod entity;
mod environment;
mod error;
mod htmldata;
mod manipulation;
mod names;
pub mod output;
mod serialize;
mod value;
mod vars;

#[cfg(feature = "proptest")]
pub mod proptest;

pub use access::NodeEdge;
pub use element::{Attributes, CustomAttributes, Element};
pub use entity::escape;
pub use environment::{Environment, VarValue};
pub use error::Error;
pub use htmldata::{Html, Node};
pub use names::{AttrId, ElementId};
pub use value::{Text, Value, ValueType};
pub use vars::{parse_vars, VarSpan, VarText, UNDEFINED};

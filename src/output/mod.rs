//! Htmlgen renders a tree in two ways: compact, exactly as built, and
//! pretty, indented with sorted attributes.
//!
//! This module lets you control pretty rendering.
mod common;
mod compact;
mod pretty;
mod serializer;
mod writer;

pub use common::Indentation;
pub(crate) use compact::CompactSerializer;
pub(crate) use pretty::PrettySerializer;
pub(crate) use serializer::gen_outputs;
pub(crate) use writer::CountingWriter;

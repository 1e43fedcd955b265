use crate::access::NodeEdge;
use crate::element::Element;
use crate::htmldata::{Html, Node};
use crate::value::Value;
use crate::vars::VarText;

/// Output of serialization
///
/// A token for each visible node edge; leaves only produce one, for their
/// start edge. Serializers turn these into text.
#[derive(Debug, PartialEq)]
pub(crate) enum Output<'a> {
    /// Opening tag of an element.
    StartTag(&'a Element),
    /// Closing tag of an element. Self-closing elements render nothing here.
    EndTag(&'a Element),
    /// Doctype followed by the opening tag of the `html` element.
    DocumentStart(&'a Element),
    /// Closing tag of the `html` element.
    DocumentEnd(&'a Element),
    /// Opening of a comment.
    CommentStart,
    /// Closing of a comment.
    CommentEnd,
    /// A fragment starts; it renders nothing itself.
    FragmentStart,
    /// A fragment ends.
    FragmentEnd,
    /// Text, already escaped as needed.
    Text(&'a str),
    /// Variable text, to be expanded.
    VarText(&'a VarText),
}

pub(crate) fn gen_outputs(html: &Html, node: Node) -> impl Iterator<Item = Output> + '_ {
    html.traverse(node).filter_map(move |edge| match edge {
        NodeEdge::Start(node) => Some(start_output(html.value(node))),
        NodeEdge::End(node) => end_output(html.value(node)),
    })
}

fn start_output(value: &Value) -> Output {
    match value {
        Value::Fragment => Output::FragmentStart,
        Value::Document(element) => Output::DocumentStart(element),
        Value::Element(element) => Output::StartTag(element),
        Value::Comment => Output::CommentStart,
        Value::Text(text) => Output::Text(text.get()),
        Value::VarText(text) => Output::VarText(text),
    }
}

fn end_output(value: &Value) -> Option<Output> {
    match value {
        Value::Fragment => Some(Output::FragmentEnd),
        Value::Document(element) => Some(Output::DocumentEnd(element)),
        Value::Element(element) => Some(Output::EndTag(element)),
        Value::Comment => Some(Output::CommentEnd),
        Value::Text(_) | Value::VarText(_) => None,
    }
}

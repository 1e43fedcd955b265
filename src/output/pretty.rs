use std::io;

use crate::environment::Environment;
use crate::error::Error;

use super::common::{Indentation, DOCTYPE};
use super::serializer::Output;
use super::writer::CountingWriter;

// A node that is open while its children are written.
#[derive(Debug, Clone, Copy)]
struct Frame {
    // indentation of the node itself
    indentation: usize,
    // fragments put their children at their own indentation, without a
    // newline before the first one
    is_fragment: bool,
    has_children: bool,
}

impl Frame {
    // A fragment with nothing visible in it yet
    fn is_pending(&self) -> bool {
        self.is_fragment && !self.has_children
    }
}

/// Writes tokens with one node per line, children indented one unit
/// deeper than their parent.
///
/// Attributes are sorted so the output is deterministic.
pub(crate) struct PrettySerializer<'a> {
    env: Option<&'a Environment>,
    unit: usize,
    stack: Vec<Frame>,
}

impl<'a> PrettySerializer<'a> {
    pub(crate) fn new(env: Option<&'a Environment>, indentation: Indentation) -> Self {
        PrettySerializer {
            env,
            unit: indentation.unit,
            stack: Vec::new(),
        }
    }

    pub(crate) fn serialize<'o, W: io::Write>(
        &mut self,
        w: &mut CountingWriter<W>,
        outputs: impl Iterator<Item = Output<'o>>,
    ) -> Result<(), Error> {
        for output in outputs {
            self.serialize_output(w, output)?;
        }
        Ok(())
    }

    // Writes the separator before a node starts and returns its indentation.
    //
    // Fragments write nothing when they start. A fragment is only announced
    // to its parent once something visible starts inside it, so an empty
    // fragment leaves no separator behind.
    fn start_node<W: io::Write>(&mut self, w: &mut CountingWriter<W>) -> Result<usize, Error> {
        let pending = self
            .stack
            .iter()
            .rposition(|frame| !frame.is_pending())
            .map_or(0, |index| index + 1);
        for index in pending..self.stack.len() {
            self.separate(w, index.checked_sub(1))?;
        }
        self.separate(w, self.stack.len().checked_sub(1))?;
        Ok(self.child_indentation())
    }

    // Writes the separator for a new child of the frame at `parent`.
    fn separate<W: io::Write>(
        &mut self,
        w: &mut CountingWriter<W>,
        parent: Option<usize>,
    ) -> Result<(), Error> {
        let parent = match parent.and_then(|index| self.stack.get_mut(index)) {
            Some(parent) => parent,
            None => return Ok(()),
        };
        let first = !parent.has_children;
        parent.has_children = true;
        if !parent.is_fragment || !first {
            w.write_str("\n")?;
        }
        Ok(())
    }

    // The indentation of a child of the innermost open node.
    fn child_indentation(&self) -> usize {
        match self.stack.last() {
            None => 0,
            Some(parent) if parent.is_fragment => parent.indentation,
            Some(parent) => parent.indentation + self.unit,
        }
    }

    fn push(&mut self, indentation: usize, is_fragment: bool) {
        self.stack.push(Frame {
            indentation,
            is_fragment,
            has_children: false,
        });
    }

    fn pop(&mut self) -> Frame {
        // every end token matches a start token that pushed a frame
        self.stack.pop().unwrap_or(Frame {
            indentation: 0,
            is_fragment: true,
            has_children: false,
        })
    }

    fn serialize_output<W: io::Write>(
        &mut self,
        w: &mut CountingWriter<W>,
        output: Output,
    ) -> Result<(), Error> {
        match output {
            Output::DocumentStart(element) => {
                let indentation = self.start_node(w)?;
                w.write_indent(indentation)?;
                w.write_str(DOCTYPE)?;
                w.write_str("\n")?;
                w.write_indent(indentation)?;
                w.write_str(&element.sorted_open_tag())?;
                self.push(indentation, false);
            }
            Output::StartTag(element) => {
                let indentation = self.start_node(w)?;
                w.write_indent(indentation)?;
                w.write_str(&element.sorted_open_tag())?;
                self.push(indentation, false);
            }
            Output::EndTag(element) | Output::DocumentEnd(element) => {
                let frame = self.pop();
                if !element.is_void() {
                    if frame.has_children {
                        w.write_str("\n")?;
                        w.write_indent(frame.indentation)?;
                    }
                    w.write_str("</")?;
                    w.write_str(element.name())?;
                    w.write_str(">")?;
                }
            }
            Output::CommentStart => {
                let indentation = self.start_node(w)?;
                w.write_indent(indentation)?;
                w.write_str("<!--")?;
                self.push(indentation, false);
            }
            Output::CommentEnd => {
                let frame = self.pop();
                if frame.has_children {
                    w.write_str("\n")?;
                    w.write_indent(frame.indentation)?;
                    w.write_str("-->")?;
                } else {
                    w.write_str(" -->")?;
                }
            }
            Output::FragmentStart => {
                let indentation = self.child_indentation();
                self.push(indentation, true);
            }
            Output::FragmentEnd => {
                self.pop();
            }
            Output::Text(text) => {
                let indentation = self.start_node(w)?;
                w.write_indent(indentation)?;
                w.write_str(text)?;
            }
            Output::VarText(text) => {
                let indentation = self.start_node(w)?;
                w.write_indent(indentation)?;
                for chunk in text.chunks(self.env) {
                    w.write_str(&chunk)?;
                }
            }
        }
        Ok(())
    }
}

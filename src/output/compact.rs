use std::io;

use crate::environment::Environment;
use crate::error::Error;

use super::common::DOCTYPE;
use super::serializer::Output;
use super::writer::CountingWriter;

/// Writes tokens as they come, without any whitespace of its own.
///
/// Opening tags come from the element's cache, so attribute order is
/// whatever order the attribute maps iterate in.
pub(crate) struct CompactSerializer<'a> {
    env: Option<&'a Environment>,
}

impl<'a> CompactSerializer<'a> {
    pub(crate) fn new(env: Option<&'a Environment>) -> Self {
        CompactSerializer { env }
    }

    pub(crate) fn serialize<'o, W: io::Write>(
        &self,
        w: &mut CountingWriter<W>,
        outputs: impl Iterator<Item = Output<'o>>,
    ) -> Result<(), Error> {
        for output in outputs {
            self.serialize_output(w, output)?;
        }
        Ok(())
    }

    fn serialize_output<W: io::Write>(
        &self,
        w: &mut CountingWriter<W>,
        output: Output,
    ) -> Result<(), Error> {
        match output {
            Output::DocumentStart(element) => {
                w.write_str(DOCTYPE)?;
                w.write_str(element.open_tag())?;
            }
            Output::StartTag(element) => w.write_str(element.open_tag())?,
            Output::EndTag(element) | Output::DocumentEnd(element) => {
                if !element.is_void() {
                    w.write_str("</")?;
                    w.write_str(element.name())?;
                    w.write_str(">")?;
                }
            }
            Output::CommentStart => w.write_str("<!-- ")?,
            Output::CommentEnd => w.write_str(" -->")?,
            Output::FragmentStart | Output::FragmentEnd => {}
            Output::Text(text) => w.write_str(text)?,
            Output::VarText(text) => {
                for chunk in text.chunks(self.env) {
                    w.write_str(&chunk)?;
                }
            }
        }
        Ok(())
    }
}

use std::io;

use crate::environment::Environment;
use crate::error::Error;
use crate::htmldata::{Html, Node};
use crate::output::{
    gen_outputs, CompactSerializer, CountingWriter, Indentation, PrettySerializer,
};

/// ## Rendering
///
/// Rendering reads the tree; the only state it touches is the opening tag
/// cache of each element. A hidden node renders as nothing. Variable text
/// is expanded against `env`; without an environment every variable is
/// `undefined`.
///
/// On a sink failure rendering stops and [`Error::Write`] reports how many
/// bytes the sink accepted. The tree stays valid and can be rendered again.
impl Html {
    /// Write a node compactly, and return the number of bytes written.
    ///
    /// Attributes appear in an unspecified order. Use
    /// [`Html::write_pretty`] when the output needs to be deterministic.
    ///
    /// ```rust
    /// use htmlgen::{ElementId, Environment, Html};
    ///
    /// let mut html = Html::new();
    /// let p = html.new_element(ElementId::P);
    /// html.append_var_text(p, "Hello, $name!")?;
    /// let env: Environment = [("name", "world")].into_iter().collect();
    ///
    /// let mut buf = Vec::new();
    /// let written = html.write(p, &mut buf, Some(&env))?;
    /// assert_eq!(buf, b"<p>Hello, world!</p>");
    /// assert_eq!(written, buf.len());
    /// # Ok::<(), htmlgen::Error>(())
    /// ```
    pub fn write<W: io::Write>(
        &self,
        node: Node,
        w: &mut W,
        env: Option<&Environment>,
    ) -> Result<usize, Error> {
        self.check_live(node)?;
        let mut w = CountingWriter::new(w);
        CompactSerializer::new(env).serialize(&mut w, gen_outputs(self, node))?;
        Ok(w.written())
    }

    /// Write a node indented with two spaces per level and with sorted
    /// attributes.
    ///
    /// ```rust
    /// use htmlgen::{ElementId, Html};
    ///
    /// let mut html = Html::new();
    /// let div = html.new_element(ElementId::Div);
    /// html.add_classes(div, ["a"])?;
    /// let span = html.append_element(div, ElementId::Span)?;
    /// html.append_text(span, "x")?;
    ///
    /// let mut buf = Vec::new();
    /// html.write_pretty(div, &mut buf, None)?;
    /// assert_eq!(
    ///     String::from_utf8(buf).unwrap(),
    ///     "<div class=\"a\">\n  <span>\n    x\n  </span>\n</div>"
    /// );
    /// # Ok::<(), htmlgen::Error>(())
    /// ```
    pub fn write_pretty<W: io::Write>(
        &self,
        node: Node,
        w: &mut W,
        env: Option<&Environment>,
    ) -> Result<usize, Error> {
        self.write_pretty_with(node, w, env, Indentation::default())
    }

    /// Write a node pretty-printed with the given indentation.
    pub fn write_pretty_with<W: io::Write>(
        &self,
        node: Node,
        w: &mut W,
        env: Option<&Environment>,
        indentation: Indentation,
    ) -> Result<usize, Error> {
        self.check_live(node)?;
        let mut w = CountingWriter::new(w);
        PrettySerializer::new(env, indentation).serialize(&mut w, gen_outputs(self, node))?;
        Ok(w.written())
    }

    /// Render a node compactly to a string.
    ///
    /// ```rust
    /// use htmlgen::{ElementId, Html};
    ///
    /// let mut html = Html::new();
    /// let doc = html.new_document();
    /// let body = html.append_element(doc, ElementId::Body)?;
    /// html.append_element(body, ElementId::Br)?;
    /// assert_eq!(
    ///     html.to_string(doc, None)?,
    ///     "<!DOCTYPE html><html><body><br /></body></html>"
    /// );
    /// # Ok::<(), htmlgen::Error>(())
    /// ```
    pub fn to_string(&self, node: Node, env: Option<&Environment>) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.write(node, &mut buf, env)?;
        // only ever written from str slices
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Render a node pretty-printed to a string.
    pub fn to_pretty_string(&self, node: Node, env: Option<&Environment>) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.write_pretty(node, &mut buf, env)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

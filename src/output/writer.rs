use std::io;

use crate::error::Error;

const SPACES: &str = "                                ";

/// Wraps a sink and counts the bytes it accepts, so a failure can report
/// how far rendering got.
pub(crate) struct CountingWriter<'w, W: io::Write> {
    inner: &'w mut W,
    written: usize,
}

impl<'w, W: io::Write> CountingWriter<'w, W> {
    pub(crate) fn new(inner: &'w mut W) -> Self {
        CountingWriter { inner, written: 0 }
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }

    pub(crate) fn write_str(&mut self, s: &str) -> Result<(), Error> {
        let mut buf = s.as_bytes();
        while !buf.is_empty() {
            match self.inner.write(buf) {
                Ok(0) => return Err(self.failed(io::ErrorKind::WriteZero.into())),
                Ok(n) => {
                    self.written += n;
                    buf = &buf[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(self.failed(e)),
            }
        }
        Ok(())
    }

    pub(crate) fn write_indent(&mut self, mut count: usize) -> Result<(), Error> {
        while count > 0 {
            let n = count.min(SPACES.len());
            self.write_str(&SPACES[..n])?;
            count -= n;
        }
        Ok(())
    }

    fn failed(&self, source: io::Error) -> Error {
        tracing::debug!(written = self.written, error = %source, "render aborted");
        Error::Write {
            written: self.written,
            source,
        }
    }
}

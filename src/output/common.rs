/// Written before the `html` element of a document.
pub(crate) const DOCTYPE: &str = "<!DOCTYPE html>";

/// Indentation: pretty-print HTML.
///
/// ```rust
/// use htmlgen::output::Indentation;
///
/// assert_eq!(Indentation::default().unit, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation {
    /// The number of spaces each nesting level adds.
    pub unit: usize,
}

impl Default for Indentation {
    fn default() -> Self {
        Indentation { unit: 2 }
    }
}

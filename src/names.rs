//! Element and attribute identifiers.
//!
//! These are fixed lookup tables from identifier to textual name. The
//! declaration order of each enum is its ordinal, which is what pretty
//! printing sorts known attributes by.

use std::fmt::{Display, Formatter};

macro_rules! name_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident {
            $($variant:ident => $name:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $ty {
            $(
                #[allow(missing_docs)]
                $variant,
            )*
        }

        impl $ty {
            /// All identifiers in ordinal order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant,)*];

            /// The textual name as it appears in markup.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }

            /// Look up an identifier by its textual name.
            pub fn from_name(name: &str) -> Option<$ty> {
                match name {
                    $($name => Some($ty::$variant),)*
                    _ => None,
                }
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

name_table! {
    /// A known HTML element.
    pub enum ElementId {
        A => "a",
        Abbr => "abbr",
        Address => "address",
        B => "b",
        Blockquote => "blockquote",
        Body => "body",
        Br => "br",
        Button => "button",
        Canvas => "canvas",
        Caption => "caption",
        Cite => "cite",
        Code => "code",
        Datalist => "datalist",
        Dfn => "dfn",
        Div => "div",
        Dd => "dd",
        Dl => "dl",
        Dt => "dt",
        Em => "em",
        Footer => "footer",
        Form => "form",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        Head => "head",
        Hr => "hr",
        Html => "html",
        I => "i",
        Img => "img",
        Input => "input",
        Kbd => "kbd",
        Label => "label",
        Li => "li",
        Link => "link",
        Meta => "meta",
        NoScript => "noscript",
        Ol => "ol",
        Option => "option",
        P => "p",
        Pre => "pre",
        Samp => "samp",
        Script => "script",
        Select => "select",
        Small => "small",
        Span => "span",
        Strong => "strong",
        Style => "style",
        Table => "table",
        Tbody => "tbody",
        Td => "td",
        Textarea => "textarea",
        Tfoot => "tfoot",
        Th => "th",
        Thead => "thead",
        Title => "title",
        Tr => "tr",
        U => "u",
        Ul => "ul",
        Var => "var",
    }
}

impl ElementId {
    /// Elements that never have children and serialize as `<name ... />`.
    pub fn is_void(self) -> bool {
        matches!(
            self,
            ElementId::Br
                | ElementId::Hr
                | ElementId::Img
                | ElementId::Input
                | ElementId::Link
                | ElementId::Meta
        )
    }
}

name_table! {
    /// A known HTML attribute.
    ///
    /// The ordinal order is mostly alphabetical, but not entirely: `onload`
    /// sorts after `onfocus`, and `rowspan` before `readonly`.
    pub enum AttrId {
        AcceptCharset => "accept-charset",
        Action => "action",
        Alt => "alt",
        Autocomplete => "autocomplete",
        Autofocus => "autofocus",
        Border => "border",
        Charset => "charset",
        Checked => "checked",
        Class => "class",
        Cols => "cols",
        Colspan => "colspan",
        Content => "content",
        Disabled => "disabled",
        Enctype => "enctype",
        For => "for",
        Form => "form",
        Headers => "headers",
        Height => "height",
        Href => "href",
        Hreflang => "hreflang",
        HttpEquiv => "http-equiv",
        Id => "id",
        Ismap => "ismap",
        Label => "label",
        List => "list",
        Max => "max",
        Maxlength => "maxlength",
        Media => "media",
        Method => "method",
        Min => "min",
        Multiple => "multiple",
        Name => "name",
        Onblur => "onblur",
        Onchange => "onchange",
        Onclick => "onclick",
        Ondblclick => "ondblclick",
        Onfocus => "onfocus",
        Onload => "onload",
        Onkeydown => "onkeydown",
        Onkeypress => "onkeypress",
        Onkeyup => "onkeyup",
        Onmousedown => "onmousedown",
        Onmousemove => "onmousemove",
        Onmouseout => "onmouseout",
        Onmouseover => "onmouseover",
        Onmouseup => "onmouseup",
        Onselect => "onselect",
        Onsubmit => "onsubmit",
        Pattern => "pattern",
        Placeholder => "placeholder",
        Rowspan => "rowspan",
        Readonly => "readonly",
        Rel => "rel",
        Required => "required",
        Rows => "rows",
        Scope => "scope",
        Selected => "selected",
        Size => "size",
        Src => "src",
        Step => "step",
        Target => "target",
        Title => "title",
        Type => "type",
        Usemap => "usemap",
        Value => "value",
        Width => "width",
        Wrap => "wrap",
    }
}

use htmlgen::output::Indentation;
use htmlgen::{AttrId, ElementId, Environment, Html, Node};

const PAGE: &str = r##"<!DOCTYPE html>
<html>
  <head>
    <link media="screen" rel="search" />
    <link rel="stylesheet" title="title" />
    <style media="print" type="text/css">
      <!--
        @import url(foo)
      -->
    </style>
    <title>
      title
    </title>
  </head>
  <body onblur="onblur" onfocus="onfocus" onload="onload">
    <div></div>
    <br />
    <div id="fooid"></div>
    <div class="class1 class2 class3"></div>
    <span>
      hello,
      world
    </span>
    <!--
      hello, comment!
    -->
    <script type="text/javascript">
      var hello;
    </script>
    <script src="foo.js" type="text/javascript"></script>
    <a href="#">
      link
    </a>
    <form action="action" method="method" name="name">
      <input name="name" type="hidden" value="value" />
    </form>
    <table border="1">
      <tr>
        <td colspan="1" headers="headers" rowspan="1"></td>
      </tr>
    </table>
    <textarea cols="4" disabled="" name="foo" readonly="" rows="3"></textarea>
    <select form="1,2,3" multiple="" name="foo">
      <option disabled="" label="label" selected="" value="value">
        Option
      </option>
    </select>
    <div onchange="onchange" onkeydown="onkeydown" onkeypress="onkeypress" onkeyup="onkeyup" onselect="onselect" onsubmit="onsubmit"></div>
    <div>
      
    </div>
    <p>
      Hello, foo.
    </p>
    <p>
      Hello, a&gt;b &amp; foo.
    </p>
    <p>
      Hello, a>b & foo.
    </p>
    <div attribute="yes" custom="custom" multiple="1"></div>
    <meta charset="charset" content="content" http-equiv="equiv" name="name" />
    &gt;&lt;&amp;&#34;>
    ><&"
  </body>
</html>"##;

fn element(html: &mut Html, parent: Node, element_id: ElementId, attrs: &[(AttrId, &str)]) -> Node {
    let node = html.append_element(parent, element_id).unwrap();
    for (attr_id, value) in attrs {
        html.set_attr(node, *attr_id, *value).unwrap();
    }
    node
}

fn build_page(html: &mut Html) -> Node {
    let root = html.new_document();

    let head = html.append_element(root, ElementId::Head).unwrap();
    element(html, head, ElementId::Link, &[(AttrId::Rel, "search"), (AttrId::Media, "screen")]);
    let link = element(html, head, ElementId::Link, &[(AttrId::Rel, "stylesheet")]);
    html.set_title(link, "title").unwrap();
    let style = element(
        html,
        head,
        ElementId::Style,
        &[(AttrId::Type, "text/css"), (AttrId::Media, "print")],
    );
    let comment = html.append_comment(style).unwrap();
    html.append_text(comment, "@import url(foo)").unwrap();
    let title = html.append_element(head, ElementId::Title).unwrap();
    html.append_text(title, "title").unwrap();

    let b = html.append_element(root, ElementId::Body).unwrap();
    html.append_element(b, ElementId::Div).unwrap();
    html.append_element(b, ElementId::Br).unwrap();
    let div = html.append_element(b, ElementId::Div).unwrap();
    html.set_id(div, "fooid").unwrap();
    let div = html.append_element(b, ElementId::Div).unwrap();
    html.add_classes(div, ["class1"]).unwrap();
    html.add_classes(div, Vec::<&str>::new()).unwrap();
    html.add_classes(div, ["class2", "class3"]).unwrap();
    let span = html.append_element(b, ElementId::Span).unwrap();
    html.append_text(span, "hello,").unwrap();
    html.append_text(span, "world").unwrap();
    let comment = html.append_comment(b).unwrap();
    html.append_text(comment, "hello, comment!").unwrap();
    let script = element(html, b, ElementId::Script, &[(AttrId::Type, "text/javascript")]);
    html.append_text(script, "var hello;").unwrap();
    element(
        html,
        b,
        ElementId::Script,
        &[(AttrId::Type, "text/javascript"), (AttrId::Src, "foo.js")],
    );
    let a = element(html, b, ElementId::A, &[(AttrId::Href, "#")]);
    html.append_text(a, "link").unwrap();
    let form = element(
        html,
        b,
        ElementId::Form,
        &[
            (AttrId::Name, "name"),
            (AttrId::Method, "method"),
            (AttrId::Action, "action"),
        ],
    );
    element(
        html,
        form,
        ElementId::Input,
        &[
            (AttrId::Type, "hidden"),
            (AttrId::Name, "name"),
            (AttrId::Value, "value"),
        ],
    );
    let table = element(html, b, ElementId::Table, &[(AttrId::Border, "1")]);
    let tr = html.append_element(table, ElementId::Tr).unwrap();
    element(
        html,
        tr,
        ElementId::Td,
        &[
            (AttrId::Rowspan, "1"),
            (AttrId::Headers, "headers"),
            (AttrId::Colspan, "1"),
        ],
    );
    let textarea = element(
        html,
        b,
        ElementId::Textarea,
        &[(AttrId::Rows, "3"), (AttrId::Cols, "4"), (AttrId::Name, "foo")],
    );
    html.set_flag(textarea, AttrId::Readonly, true).unwrap();
    html.set_flag(textarea, AttrId::Disabled, true).unwrap();
    let select = element(
        html,
        b,
        ElementId::Select,
        &[(AttrId::Name, "foo"), (AttrId::Form, "1,2,3")],
    );
    html.set_flag(select, AttrId::Multiple, true).unwrap();
    let option = element(
        html,
        select,
        ElementId::Option,
        &[(AttrId::Value, "value"), (AttrId::Label, "label")],
    );
    html.set_flag(option, AttrId::Selected, true).unwrap();
    html.set_flag(option, AttrId::Disabled, true).unwrap();
    html.append_text(option, "Option").unwrap();

    html.set_attr(b, AttrId::Onblur, "onblur").unwrap();
    html.set_attr(b, AttrId::Onfocus, "onfocus").unwrap();
    html.set_attr(b, AttrId::Onload, "onload").unwrap();
    element(
        html,
        b,
        ElementId::Div,
        &[
            (AttrId::Onchange, "onchange"),
            (AttrId::Onselect, "onselect"),
            (AttrId::Onsubmit, "onsubmit"),
            (AttrId::Onkeydown, "onkeydown"),
            (AttrId::Onkeypress, "onkeypress"),
            (AttrId::Onkeyup, "onkeyup"),
        ],
    );
    let div = html.append_element(b, ElementId::Div).unwrap();
    html.append_text(div, "").unwrap();

    let p = html.append_element(b, ElementId::P).unwrap();
    html.append_var_text(p, "Hello, $name.").unwrap();
    let p = html.append_element(b, ElementId::P).unwrap();
    html.append_var_text(p, "Hello, $escape & $name.").unwrap();
    let p = html.append_element(b, ElementId::P).unwrap();
    html.append_var_text_unsafe(p, "Hello, $escape & $name.").unwrap();

    let div = html.append_element(b, ElementId::Div).unwrap();
    html.set_attributes(
        div,
        [
            ("custom", "custom"),
            ("attribute", "yes"),
            ("multiple", "1"),
            ("extra", "2"),
        ],
    )
    .unwrap();
    html.remove_attributes(div, ["extra"]).unwrap();
    element(
        html,
        b,
        ElementId::Meta,
        &[
            (AttrId::Name, "name"),
            (AttrId::Content, "content"),
            (AttrId::HttpEquiv, "equiv"),
            (AttrId::Charset, "charset"),
        ],
    );

    let hidden = html.append_element(b, ElementId::Div).unwrap();
    html.append_text(hidden, "foo").unwrap();
    let span = html.append_element(hidden, ElementId::Span).unwrap();
    html.append_text(span, "span").unwrap();
    html.hide(hidden).unwrap();
    let hidden = html.append_element(b, ElementId::Div).unwrap();
    html.hide(hidden).unwrap();

    let text = html.append_text(b, r#"><&""#).unwrap();
    html.push_text_unsafe(text, ">").unwrap();
    html.append_text_unsafe(b, r#"><&""#).unwrap();
    root
}

fn page_env() -> Environment {
    [("name", "foo"), ("escape", "a>b")].into_iter().collect()
}

#[test]
fn test_pretty_page() {
    let mut html = Html::new();
    let root = build_page(&mut html);
    let mut buf = Vec::new();
    let written = html.write_pretty(root, &mut buf, Some(&page_env())).unwrap();
    assert_eq!(written, buf.len());
    assert_eq!(String::from_utf8(buf).unwrap(), PAGE);
}

#[test]
fn test_pretty_page_is_stable() {
    let mut html = Html::new();
    let root = build_page(&mut html);
    let env = page_env();
    let first = html.to_pretty_string(root, Some(&env)).unwrap();
    // compact rendering fills the caches; pretty output must not change
    html.to_string(root, Some(&env)).unwrap();
    assert_eq!(html.to_pretty_string(root, Some(&env)).unwrap(), first);
}

#[test]
fn test_compact_simple() {
    let mut html = Html::new();
    let root = html.new_document();
    let head = html.append_element(root, ElementId::Head).unwrap();
    element(&mut html, head, ElementId::Link, &[(AttrId::Rel, "search")]);
    element(&mut html, head, ElementId::Link, &[(AttrId::Rel, "stylesheet")]);
    assert_eq!(
        html.to_string(root, None).unwrap(),
        r#"<!DOCTYPE html><html><head><link rel="search" /><link rel="stylesheet" /></head></html>"#
    );
}

#[test]
fn test_compact_and_pretty_round_trip() {
    let mut html = Html::new();
    let div = html.new_element(ElementId::Div);
    html.add_classes(div, ["a"]).unwrap();
    let span = html.append_element(div, ElementId::Span).unwrap();
    html.append_text(span, "x").unwrap();
    assert_eq!(
        html.to_string(div, None).unwrap(),
        r#"<div class="a"><span>x</span></div>"#
    );
    assert_eq!(
        html.to_pretty_string(div, None).unwrap(),
        "<div class=\"a\">\n  <span>\n    x\n  </span>\n</div>"
    );
}

#[test]
fn test_compact_comment() {
    let mut html = Html::new();
    let div = html.new_element(ElementId::Div);
    let comment = html.append_comment(div).unwrap();
    html.append_text(comment, "note").unwrap();
    assert_eq!(html.to_string(div, None).unwrap(), "<div><!-- note --></div>");
}

#[test]
fn test_compact_fragment() {
    let mut html = Html::new();
    let fragment = html.new_fragment();
    html.append_element(fragment, ElementId::Hr).unwrap();
    html.append_text(fragment, "a & b").unwrap();
    assert_eq!(html.to_string(fragment, None).unwrap(), "<hr />a &amp; b");
    assert_eq!(html.to_pretty_string(fragment, None).unwrap(), "<hr />\na &amp; b");
}

#[test]
fn test_compact_single_attribute_order() {
    let mut html = Html::new();
    let a = html.new_element(ElementId::A);
    html.set_attr(a, AttrId::Href, "/x?a=1&b=2").unwrap();
    assert_eq!(
        html.to_string(a, None).unwrap(),
        r#"<a href="/x?a=1&amp;b=2"></a>"#
    );
}

#[test]
fn test_compact_cache_follows_mutation() {
    let mut html = Html::new();
    let div = html.new_element(ElementId::Div);
    html.set_id(div, "a").unwrap();
    assert_eq!(html.to_string(div, None).unwrap(), r#"<div id="a"></div>"#);
    html.set_id(div, "b").unwrap();
    assert_eq!(html.to_string(div, None).unwrap(), r#"<div id="b"></div>"#);
    html.element_mut(div).unwrap().remove_attr(AttrId::Id);
    assert_eq!(html.to_string(div, None).unwrap(), "<div></div>");
}

#[test]
fn test_write_returns_byte_count() {
    let mut html = Html::new();
    let p = html.new_element(ElementId::P);
    html.append_text(p, "é").unwrap();
    let mut buf = Vec::new();
    assert_eq!(html.write(p, &mut buf, None).unwrap(), 9);
    assert_eq!(buf.len(), 9);
}

#[test]
fn test_pretty_with_indentation() {
    let mut html = Html::new();
    let ul = html.new_element(ElementId::Ul);
    let li = html.append_element(ul, ElementId::Li).unwrap();
    html.append_text(li, "foo").unwrap();
    let mut buf = Vec::new();
    html.write_pretty_with(ul, &mut buf, None, Indentation { unit: 4 })
        .unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "<ul>\n    <li>\n        foo\n    </li>\n</ul>"
    );
}

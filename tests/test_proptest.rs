#![cfg(feature = "proptest")]

use proptest::prelude::*;

use htmlgen::proptest::{arb_environment, arb_template};
use htmlgen::{parse_vars, ElementId, Html, VarText};

proptest! {
    #[test]
    fn compact_and_pretty_agree_on_expansion(text in arb_template(), env in arb_environment()) {
        let mut html = Html::new();
        let p = html.new_element(ElementId::P);
        html.append_var_text(p, &text).unwrap();
        let expanded = VarText::new(text.as_str()).expand(Some(&env));
        prop_assert_eq!(html.to_string(p, Some(&env)).unwrap(), format!("<p>{}</p>", expanded));
        prop_assert_eq!(
            html.to_pretty_string(p, Some(&env)).unwrap(),
            format!("<p>\n  {}\n</p>", expanded)
        );
    }

    #[test]
    fn appending_rescans(head in arb_template(), tail in arb_template()) {
        let mut text = VarText::new(head.as_str());
        text.push_str(&tail);
        let whole = format!("{}{}", head, tail);
        prop_assert_eq!(text.vars(), &parse_vars(&whole)[..]);
    }

    #[test]
    fn write_count_matches_output(text in arb_template(), env in arb_environment()) {
        let mut html = Html::new();
        let node = html.new_var_text(&text);
        let mut buf = Vec::new();
        let written = html.write(node, &mut buf, Some(&env)).unwrap();
        prop_assert_eq!(written, buf.len());
    }
}

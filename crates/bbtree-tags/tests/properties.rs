use bbtree_parser::{Node, Parser};
use bbtree_tags::{Bold, TemplateTag};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parser() -> Parser {
    let mut parser = Parser::new();
    parser.add_tag(Bold).unwrap();
    parser
        .add_tag(TemplateTag::new("i", "<em>{content}</em>"))
        .unwrap();
    parser
        .add_tag(TemplateTag::new("img", r#"<img src="{parameter}">"#).self_closing())
        .unwrap();
    parser
        .add_tag(TemplateTag::new("hr", "<hr>").self_closing())
        .unwrap();
    parser
}

fn children(root: Node) -> Vec<Node> {
    match root {
        Node::Root { children } => children,
        other => panic!("expected root, got {other:?}"),
    }
}

#[rstest]
#[case("img", "a.png")]
#[case("hr", "x")]
fn self_closing_tag_is_childless(#[case] tag: &str, #[case] parameter: &str) {
    let root = parser().parse(&format!("[{tag}={parameter}]")).unwrap();
    assert_eq!(
        children(root),
        vec![Node::tag(tag, Some(parameter), vec![])]
    );
}

#[rstest]
#[case("b")]
#[case("i")]
fn non_self_closing_tag_holds_content(#[case] tag: &str) {
    let root = parser().parse(&format!("[{tag}]inner[/{tag}]")).unwrap();
    assert_eq!(
        children(root),
        vec![Node::tag(tag, None, vec![Node::text("inner")])]
    );
}

#[test]
fn nested_same_name_pairs_by_depth() {
    let root = parser().parse("[b]a[b]b[/b]c[/b]").unwrap();
    assert_eq!(
        children(root),
        vec![Node::tag(
            "b",
            None,
            vec![
                Node::text("a"),
                Node::tag("b", None, vec![Node::text("b")]),
                Node::text("c"),
            ]
        )]
    );
}

#[test]
fn unterminated_tag_is_literal_text() {
    let parser = parser();
    let root = parser.parse("[b]unterminated").unwrap();
    assert_eq!(parser.render(&root).unwrap(), "[b]unterminated");
    assert_eq!(children(root), vec![Node::text("[b]unterminated")]);
}

#[test]
fn unknown_tag_renders_back() {
    let parser = Parser::new();
    let root = parser.parse("[x=1]hi[/x]").unwrap();
    assert_eq!(parser.render(&root).unwrap(), "[x=1]hi[/x]");
}

#[rstest]
#[case(r#"[x="a b"]"#, "a b")]
#[case("[x=ab]", "ab")]
#[case("[x=a b]", "a")]
fn parameter_forms(#[case] head: &str, #[case] parameter: &str) {
    let root = parser().parse(&format!("{head}y[/x]")).unwrap();
    assert_eq!(
        children(root),
        vec![Node::tag("x", Some(parameter), vec![Node::text("y")])]
    );
}

#[test]
fn closing_match_ignores_case_but_dispatch_does_not() {
    let parser = parser();
    let root = parser.parse("[B]x[/b]").unwrap();
    assert_eq!(parser.render(&root).unwrap(), "[B]x[/B]");

    let root = parser.parse("[b]x[/B]").unwrap();
    assert_eq!(parser.render(&root).unwrap(), "<strong>x</strong>");
}

#[rstest]
#[case("[b]Hello World![/b]")]
#[case("a [i]b[/i] [img=c.png] d")]
#[case("[b]x[/b][x=1]y[/x]")]
#[case("plain text only")]
fn render_is_stable_on_reparse(#[case] input: &str) {
    let parser = parser();
    let once = parser.render(&parser.parse(input).unwrap()).unwrap();
    let twice = parser.render(&parser.parse(&once).unwrap()).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn unmatched_head_rescans_inner_markup() {
    let parser = parser();
    let root = parser.parse("[i]a[b]b[/b]").unwrap();
    assert_eq!(parser.render(&root).unwrap(), "[i]a<strong>b</strong>");
}

use bbtree_parser::{ChildRenderer, RenderError, TagHandler, TagNode};
use tracing::trace;

/// Tag `[b][/b]`. Bold text.
///
/// Renders into `<strong>`, only text children are kept: `[b]a[i]b[/i][/b]` renders
/// `<strong>a</strong>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bold;

impl TagHandler for Bold {
    fn tag(&self) -> &str {
        "b"
    }

    fn render(
        &self,
        node: &TagNode,
        render_child: &mut ChildRenderer<'_>,
    ) -> Result<String, RenderError> {
        let mut out = String::from("<strong>");
        for child in node.children.iter() {
            if !child.is_text() {
                trace!("skip non-text child in bold: {child:?}");
                continue;
            }
            out.push_str(&render_child(child)?);
        }
        out.push_str("</strong>");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbtree_parser::{Node, Parser};
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        let mut parser = Parser::new();
        parser.add_tag(Bold).unwrap();
        let root = parser.parse(text).unwrap();
        parser.render(&root).unwrap()
    }

    #[test]
    fn render_bold() {
        assert_eq!(render("[b]Hello World![/b]"), "<strong>Hello World!</strong>");
    }

    #[test]
    fn render_bold_drops_non_text_children() {
        assert_eq!(render("[b]a[i]b[/i]c[/b]"), "<strong>ac</strong>");
    }

    #[test]
    fn render_bold_keeps_text_order_around_skipped_tags() {
        let mut parser = Parser::new();
        parser.add_tag(Bold).unwrap();
        let root = Node::root(vec![Node::tag(
            "b",
            None,
            vec![
                Node::text("1"),
                Node::tag("b", None, vec![Node::text("nested")]),
                Node::text("2"),
            ],
        )]);
        assert_eq!(parser.render(&root).unwrap(), "<strong>12</strong>");
    }

    #[test]
    fn render_empty_bold() {
        assert_eq!(render("x[b][/b]y"), "x<strong></strong>y");
    }
}

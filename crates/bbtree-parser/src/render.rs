use tracing::trace;

use crate::error::RenderError;
use crate::node::{Node, TagNode};
use crate::parser::Parser;

impl Parser {
    /// Render the tree under `node` with the handlers currently registered.
    ///
    /// * Text is written verbatim, no escaping.
    /// * Root writes all children in order.
    /// * Registered tags are rendered by their handler.
    /// * Unknown tags are written back as bracket markup around their rendered children.
    ///
    /// # Errors
    ///
    /// * [RenderError::TooDeep] if the tree is deeper than [crate::ParserOptions::max_depth].
    /// * Any error returned by a tag handler.
    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        self.render_node(node, 0)
    }

    fn render_node(&self, node: &Node, depth: usize) -> Result<String, RenderError> {
        if depth > self.options.max_depth {
            return Err(RenderError::TooDeep {
                limit: self.options.max_depth,
            });
        }

        match node {
            Node::Text { text } => Ok(text.clone()),
            Node::Root { children } => self.render_children(children, depth),
            Node::Tag(tag) => match self.registry.get(&tag.tag) {
                Some(handler) => {
                    let mut render_child = |child: &Node| self.render_node(child, depth + 1);
                    handler.render(tag, &mut render_child)
                }
                None => self.render_unknown(tag, depth),
            },
        }
    }

    /// Render `children` in order, `depth` counts the tags enclosing them.
    fn render_children(&self, children: &[Node], depth: usize) -> Result<String, RenderError> {
        let mut out = String::new();
        for child in children {
            out.push_str(&self.render_node(child, depth)?);
        }
        Ok(out)
    }

    /// Rebuild `[tag=parameter]children[/tag]` for a tag without handler.
    fn render_unknown(&self, tag: &TagNode, depth: usize) -> Result<String, RenderError> {
        trace!("no handler for tag {:?}, render as text", tag.tag);

        let mut out = String::from("[");
        out.push_str(&tag.tag);
        if let Some(parameter) = tag.parameter.as_deref().filter(|x| !x.is_empty()) {
            out.push('=');
            out.push_str(parameter);
        }
        out.push(']');
        out.push_str(&self.render_children(&tag.children, depth + 1)?);
        out.push_str("[/");
        out.push_str(&tag.tag);
        out.push(']');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserOptions;
    use crate::tag::{ChildRenderer, TagHandler};
    use pretty_assertions::assert_eq;
    use std::fmt;

    /// Renders `<tag>` around children in reverse order, skipping the first one.
    struct Picky;

    impl TagHandler for Picky {
        fn tag(&self) -> &str {
            "p"
        }

        fn render(
            &self,
            node: &TagNode,
            render_child: &mut ChildRenderer<'_>,
        ) -> Result<String, RenderError> {
            let mut out = String::from("<p>");
            for child in node.children.iter().skip(1).rev() {
                out.push_str(&render_child(child)?);
            }
            out.push_str("</p>");
            Ok(out)
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("broken")
        }
    }

    impl std::error::Error for Broken {}

    struct Failing;

    impl TagHandler for Failing {
        fn tag(&self) -> &str {
            "fail"
        }

        fn render(
            &self,
            node: &TagNode,
            _render_child: &mut ChildRenderer<'_>,
        ) -> Result<String, RenderError> {
            Err(RenderError::handler(node.tag.as_str(), Broken))
        }
    }

    #[test]
    fn render_unknown_tag_as_markup() {
        let parser = Parser::new();
        let root = parser.parse("[x=1]hi[/x]").unwrap();
        assert_eq!(parser.render(&root).unwrap(), "[x=1]hi[/x]");
    }

    #[test]
    fn render_unknown_tag_omits_empty_parameter() {
        let parser = Parser::new();
        let root = Node::root(vec![Node::tag("x", Some(""), vec![Node::text("a")])]);
        assert_eq!(parser.render(&root).unwrap(), "[x]a[/x]");
    }

    #[test]
    fn render_text_verbatim() {
        let parser = Parser::new();
        let root = parser.parse("<a> & [").unwrap();
        assert_eq!(parser.render(&root).unwrap(), "<a> & [");
    }

    #[test]
    fn handler_chooses_children() {
        let mut parser = Parser::new();
        parser.add_tag(Picky).unwrap();
        let root = Node::root(vec![Node::tag(
            "p",
            None,
            vec![Node::text("1"), Node::text("2"), Node::tag("q", None, vec![])],
        )]);
        assert_eq!(parser.render(&root).unwrap(), "<p>[q][/q]2</p>");
    }

    #[test]
    fn dispatch_is_case_sensitive() {
        let mut parser = Parser::new();
        parser.add_tag(Picky).unwrap();
        let root = parser.parse("[P]a[/p]").unwrap();
        assert_eq!(parser.render(&root).unwrap(), "[P]a[/P]");
    }

    #[test]
    fn render_with_registry_changed_after_parse() {
        let mut parser = Parser::new();
        parser.add_tag(Picky).unwrap();
        let root = parser.parse("[p]a[/p]").unwrap();

        parser.remove_tag("p");
        assert_eq!(parser.render(&root).unwrap(), "[p]a[/p]");
    }

    #[test]
    fn handler_error_propagates() {
        let mut parser = Parser::new();
        parser.add_tag(Failing).unwrap();
        let root = parser.parse("a[x][fail]b[/fail][/x]").unwrap();

        let err = parser.render(&root).unwrap_err();
        assert!(matches!(err, RenderError::Handler { ref tag, .. } if tag == "fail"));
        assert_eq!(err.to_string(), r#"handler for tag "fail" failed: broken"#);
    }

    #[test]
    fn render_too_deep() {
        let parser = Parser::with_options(ParserOptions { max_depth: 3 });
        let mut node = Node::text("x");
        for _ in 0..5 {
            node = Node::tag("q", None, vec![node]);
        }
        let root = Node::root(vec![node]);
        assert!(matches!(
            parser.render(&root),
            Err(RenderError::TooDeep { limit: 3 })
        ));
    }
}

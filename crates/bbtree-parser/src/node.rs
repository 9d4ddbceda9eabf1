use serde::Serialize;
use std::fmt::Write;

/// One element of the parsed tree.
///
/// A tree produced by [crate::Parser::parse] always has a single [Node::Root] on top. Children are
/// owned by their parent, dropping a node drops its whole subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Container of the whole document, never rendered as a literal tag.
    Root { children: Vec<Node> },

    /// Literal text leaf.
    Text { text: String },

    /// A tag and the content between its head and tail.
    Tag(TagNode),
}

/// Node of a tag, like `[url=https://example.com]link[/url]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagNode {
    /// Tag name in the case it was written.
    pub tag: String,

    /// Optional parameter after `=`, quotes stripped.
    pub parameter: Option<String>,

    /// Ordered children.
    ///
    /// Always empty for self-closing tags.
    pub children: Vec<Node>,
}

impl TagNode {
    /// Build a tag node without children.
    pub fn new(tag: impl Into<String>, parameter: Option<String>) -> Self {
        Self {
            tag: tag.into(),
            parameter,
            children: vec![],
        }
    }

    /// Build a tag node holding `children`.
    pub fn with_children(
        tag: impl Into<String>,
        parameter: Option<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            tag: tag.into(),
            parameter,
            children,
        }
    }
}

impl Node {
    /// Construct a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    /// Construct a text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Construct a tag node with children.
    pub fn tag(tag: impl Into<String>, parameter: Option<&str>, children: Vec<Node>) -> Self {
        Node::Tag(TagNode::with_children(
            tag,
            parameter.map(str::to_string),
            children,
        ))
    }

    /// Children of the node, text leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children } => children,
            Node::Text { .. } => &[],
            Node::Tag(tag) => &tag.children,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    /// Return the text content if current node is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { text } => Some(text.as_str()),
            Node::Root { .. } | Node::Tag(..) => None,
        }
    }

    /// Return the tag node if current node is a tag.
    pub fn as_tag(&self) -> Option<&TagNode> {
        match self {
            Node::Tag(tag) => Some(tag),
            Node::Root { .. } | Node::Text { .. } => None,
        }
    }

    /// Produce an indented outline of the tree, one node per line.
    ///
    /// ```console
    /// root:
    ///   b:
    ///     text: Hello World!
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        // Writing into a String never fails.
        let _ = match self {
            Node::Root { .. } => writeln!(out, "{pad}root:"),
            Node::Text { text } => writeln!(out, "{pad}text: {text}"),
            Node::Tag(tag) => writeln!(
                out,
                "{pad}{}: {}",
                tag.tag,
                tag.parameter.as_deref().unwrap_or_default()
            ),
        };
        for child in self.children() {
            child.dump_into(out, indent + 1);
        }
    }
}

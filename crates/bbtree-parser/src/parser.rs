use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ParseError, RegistryError};
use crate::lexer::lex_tag;
use crate::node::{Node, TagNode};
use crate::registry::TagRegistry;
use crate::tag::TagHandler;
use crate::token::{Lexed, TagToken};
use crate::OPEN;

/// Default limit of tag nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Options applied when parsing and rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Max depth of nested tags.
    ///
    /// Input nested deeper fails with [ParseError::TooDeep] instead of exhausting the stack.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parser and renderer sharing one [TagRegistry].
///
/// Registry changes need `&mut self`, so no tag can be added or removed while a parse or render is
/// running on the same parser.
#[derive(Debug, Default)]
pub struct Parser {
    pub(crate) registry: TagRegistry,
    pub(crate) options: ParserOptions,
}

impl Parser {
    /// Parser with no tags registered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            registry: TagRegistry::new(),
            options,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TagRegistry {
        &mut self.registry
    }

    /// See [TagRegistry::add].
    pub fn add_tag(&mut self, handler: impl TagHandler + 'static) -> Result<(), RegistryError> {
        self.registry.add(Box::new(handler))
    }

    /// See [TagRegistry::remove].
    pub fn remove_tag(&mut self, name: &str) -> Option<Box<dyn TagHandler>> {
        self.registry.remove(name)
    }

    /// See [TagRegistry::clear].
    pub fn clear_tags(&mut self) {
        self.registry.clear()
    }

    /// Parse `text` into a tree with a [Node::Root] on top.
    ///
    /// Malformed or unknown markup never fails, it degrades to literal text. Empty input produces a
    /// root without children.
    ///
    /// # Errors
    ///
    /// [ParseError::TooDeep] if tags nest deeper than [ParserOptions::max_depth].
    pub fn parse(&self, text: &str) -> Result<Node, ParseError> {
        let chars = text.chars().collect::<Vec<_>>();
        let mut children = vec![];
        self.parse_span(&chars, &mut children, 0)?;
        Ok(Node::root(children))
    }

    /// Parse `span` and append the nodes to `parent`.
    ///
    /// Returns early on a closing tag, the caller has already located the tail matching its head so
    /// only a stray tail stops here, dropping whatever follows in this span.
    fn parse_span(
        &self,
        span: &[char],
        parent: &mut Vec<Node>,
        depth: usize,
    ) -> Result<(), ParseError> {
        if depth > self.options.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.options.max_depth,
            });
        }

        let mut i = 0;
        let mut text = String::new();

        while i < span.len() {
            let ch = span[i];
            if ch != OPEN {
                text.push(ch);
                i += 1;
                continue;
            }

            flush_text(&mut text, parent);

            let Some(Lexed { token, len }) = lex_tag(&span[i..]) else {
                text.push(OPEN);
                i += 1;
                continue;
            };

            let head = match token {
                TagToken::Tail(tail) => {
                    trace!("stop span on tail {:?}", tail.name);
                    return Ok(());
                }
                TagToken::Head(head) => head,
            };

            if self.registry.is_self_closing(&head.name) {
                parent.push(Node::Tag(TagNode::new(head.name, head.parameter)));
                i += len;
                continue;
            }

            let content_start = i + len;
            let Some(content_len) = self.find_closing_tag(&span[content_start..], &head.name)
            else {
                // Only the `[` goes to text, the rest is scanned again so inner tags still count.
                trace!("no tail for tag {:?}, fallback to text", head.name);
                text.push(OPEN);
                i += 1;
                continue;
            };

            let content_end = content_start + content_len;
            let mut node = TagNode::new(head.name, head.parameter);
            self.parse_span(&span[content_start..content_end], &mut node.children, depth + 1)?;
            parent.push(Node::Tag(node));

            i = content_end;
            if let Some(Lexed {
                token: TagToken::Tail(..),
                len,
            }) = lex_tag(&span[i..])
            {
                i += len;
            }
        }

        flush_text(&mut text, parent);
        Ok(())
    }

    /// Find the offset of the tail closing a `name` head, the head itself already consumed.
    ///
    /// Heads of the same name in between increase depth so `[b]a[b]b[/b]c[/b]` pairs each tail with
    /// its own head. Names compare case insensitive, unknown tags count as nestable.
    fn find_closing_tag(&self, span: &[char], name: &str) -> Option<usize> {
        let mut depth = 0usize;
        let mut i = 0;

        while i < span.len() {
            if span[i] != OPEN {
                i += 1;
                continue;
            }

            let Some(lexed) = lex_tag(&span[i..]) else {
                i += 1;
                continue;
            };

            if names_match(lexed.token.name(), name) {
                if lexed.token.is_closing() {
                    if depth == 0 {
                        return Some(i);
                    }
                    depth -= 1;
                } else if !self.registry.is_self_closing(lexed.token.name()) {
                    depth += 1;
                }
            }
            i += lexed.len;
        }

        None
    }
}

/// Move collected text into a new text leaf.
fn flush_text(text: &mut String, parent: &mut Vec<Node>) {
    if !text.is_empty() {
        parent.push(Node::text(std::mem::take(text)));
    }
}

/// Case insensitive tag name comparison.
fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

//! Parse bracket tag markup like `[b]text[/b]` into a [Node] tree, then render the tree through the
//! [TagHandler]s registered in a [TagRegistry].
//!
//! ```
//! use bbtree_parser::Parser;
//!
//! let parser = Parser::new();
//! let root = parser.parse("[x=1]hi[/x]").unwrap();
//! assert_eq!(parser.render(&root).unwrap(), "[x=1]hi[/x]");
//! ```

mod error;
mod lexer;
mod node;
mod parser;
mod registry;
mod render;
mod scanner;
mod tag;
mod token;

pub use error::{ParseError, RegistryError, RenderError};
pub use node::{Node, TagNode};
pub use parser::{Parser, ParserOptions, DEFAULT_MAX_DEPTH};
pub use registry::TagRegistry;
pub use tag::{ChildRenderer, TagHandler};

const OPEN: char = '[';
const CLOSE: char = ']';
const SLASH: char = '/';
const EQUAL: char = '=';
const QUOTE: char = '"';
const SPACE: char = ' ';

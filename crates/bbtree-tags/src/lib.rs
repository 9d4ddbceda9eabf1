//! Html tag handlers for [bbtree_parser::Parser].

mod bold;
mod template;

pub use bold::Bold;
pub use template::{TemplateTag, TemplateTagConfig};

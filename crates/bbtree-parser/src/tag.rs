use crate::error::RenderError;
use crate::node::{Node, TagNode};

/// Callback rendering one child node, handed to [TagHandler::render].
pub type ChildRenderer<'a> = dyn FnMut(&Node) -> Result<String, RenderError> + 'a;

/// The main trait defining how a tag is parsed and rendered.
///
/// One implementation per tag, registered by name in a [crate::TagRegistry].
pub trait TagHandler: Send + Sync {
    /// Tag name, like `b` in `[b]text[/b]`.
    ///
    /// Must be non-empty and stay the same for the lifetime of the handler.
    fn tag(&self) -> &str;

    /// Self-closing tags have no content and no tail, like `[img=a.png]`.
    fn is_self_closing(&self) -> bool {
        false
    }

    /// Render `node` into output.
    ///
    /// `render_child` renders one child. It can be called any number of times in any order, children
    /// not passed to it are left out of the output.
    fn render(
        &self,
        node: &TagNode,
        render_child: &mut ChildRenderer<'_>,
    ) -> Result<String, RenderError>;
}

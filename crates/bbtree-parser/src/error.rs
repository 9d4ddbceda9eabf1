use std::error::Error as StdError;

/// Errors when configuring a [crate::TagRegistry].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A handler for the tag name is already registered.
    ///
    /// The first registration stays in effect.
    #[error("tag {0:?} is already registered")]
    DuplicateTag(String),

    /// Handler reported an empty tag name.
    #[error("tag name must not be empty")]
    EmptyTagName,
}

/// Errors when parsing text into a tree.
///
/// Malformed markup is never an error, it degrades to literal text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Tags nested deeper than the configured limit.
    #[error("tags nested too deeply, limit is {limit}")]
    TooDeep { limit: usize },
}

/// Errors when rendering a tree.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Tree nested deeper than the configured limit.
    #[error("tree nested too deeply to render, limit is {limit}")]
    TooDeep { limit: usize },

    /// A tag handler failed on its own.
    ///
    /// * tag: name of the tag being rendered.
    /// * source: the error reported by the handler.
    #[error("handler for tag {tag:?} failed: {source}")]
    Handler {
        tag: String,
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl RenderError {
    /// Wrap a handler specific failure.
    pub fn handler(
        tag: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        RenderError::Handler {
            tag: tag.into(),
            source: source.into(),
        }
    }
}

/// One recognized tag token.
///
/// Tokens are units of bracket tags, plain text never becomes a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TagToken {
    /// Tag head.
    Head(TagHead),

    /// Tag tail.
    Tail(TagTail),
}

impl TagToken {
    /// Tag name as written, original case.
    pub(crate) fn name(&self) -> &str {
        match self {
            TagToken::Head(head) => head.name.as_str(),
            TagToken::Tail(tail) => tail.name.as_str(),
        }
    }

    pub(crate) fn is_closing(&self) -> bool {
        matches!(self, TagToken::Tail(..))
    }
}

/// Tag head.
///
/// `[$name=$parameter]` or `[$name]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TagHead {
    /// Tag name.
    pub name: String,

    /// Optional parameter, quotes already stripped.
    pub parameter: Option<String>,
}

/// Tag tail.
///
/// `[/$name]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TagTail {
    /// Tag name.
    pub name: String,
}

/// Result of a successful lex: the token and how many characters it spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Lexed {
    pub token: TagToken,

    /// Count of characters consumed from the start of the span, including every trailing `]`.
    pub len: usize,
}

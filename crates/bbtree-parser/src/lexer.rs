use tracing::trace;

use crate::scanner::Scanner;
use crate::token::{Lexed, TagHead, TagTail, TagToken};
use crate::{CLOSE, EQUAL, OPEN, QUOTE, SLASH, SPACE};

/// Try to recognize exactly one tag token at the start of `span`.
///
/// The caller shall ensure `span` starts on a `[`. Returns `None` when there is no valid tag here,
/// in which case the `[` is plain text.
///
/// ```console
/// [ / n a m e = p a r a m ] ]
/// |   |       |           |   |
/// |   |       |           |   |-> len
/// |   |       |           |-> one or more `]`
/// |   |       |-> parameter, heads only
/// |   |-> name, until `]` or `=`
/// |-> span start
/// ```
pub(crate) fn lex_tag(span: &[char]) -> Option<Lexed> {
    if span.len() < 2 || span[0] != OPEN {
        return None;
    }

    let mut source = Scanner::new_at(span, 1);

    let closing = source.at(SLASH);
    if closing {
        source.advance();
    }

    let name_start = source.position();
    source.skip_while(|ch| ch != CLOSE && ch != EQUAL);
    if source.position() == name_start || source.done() {
        return None;
    }
    let name = source.collect_from(name_start);

    let parameter = if !closing && source.at(EQUAL) {
        source.advance();
        scan_parameter(&mut source)
    } else {
        None
    };

    // Anything left before `]` is ignored, e.g. `b` in `[tag=a b]`.
    // Another `[` before the tag closes means an invalid tag.
    source.skip_while(|ch| ch != CLOSE && ch != OPEN);
    if !source.at(CLOSE) {
        trace!("no closing bracket for tag {name:?}");
        return None;
    }
    source.skip_while(|ch| ch == CLOSE);

    let token = if closing {
        TagToken::Tail(TagTail { name })
    } else {
        TagToken::Head(TagHead { name, parameter })
    };

    Some(Lexed {
        token,
        len: source.position(),
    })
}

/// Scan the parameter right after `=`.
///
/// A quoted parameter runs to the next `"`, spaces included. An unterminated quote leaves the
/// parameter unset and the scanner at the end of span.
fn scan_parameter(source: &mut Scanner<'_>) -> Option<String> {
    if source.at(QUOTE) {
        source.advance();
        let start = source.position();
        source.skip_while(|ch| ch != QUOTE);
        if source.done() {
            return None;
        }
        let parameter = source.collect_from(start);
        // Skip the closing quote.
        source.advance();
        Some(parameter)
    } else {
        let start = source.position();
        source.skip_while(|ch| ch != CLOSE && ch != SPACE);
        Some(source.collect_from(start))
    }
}

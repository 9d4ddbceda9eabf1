/// Scanner on a span of characters.
///
/// Provide convienient APIs on operation.
pub(crate) struct Scanner<'a> {
    /// Characters in the span.
    chars: &'a [char],

    /// Current position.
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Build a scanner starting at `position`.
    pub(crate) fn new_at(chars: &'a [char], position: usize) -> Scanner<'a> {
        Self { chars, position }
    }

    /// Check the scanner process reached the end or not.
    pub fn done(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Get character at the current position.
    pub fn curr(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Check the current character is `ch` or not, without advancing the current position.
    pub fn at(&self, ch: char) -> bool {
        self.curr() == Some(ch)
    }

    /// Move the position forward by one character.
    ///
    /// Does nothing if already finished.
    pub fn advance(&mut self) {
        if !self.done() {
            self.position += 1;
        }
    }

    /// Advance while `predicate` holds for the current character.
    ///
    /// Stops on the first character rejected, or at the end of the span.
    pub fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(ch) = self.curr() {
            if !predicate(ch) {
                break;
            }
            self.position += 1;
        }
    }

    /// Collect chars from `start` to the current position, excluding the current position.
    ///
    /// The caller must ensure `start` is not after the current position.
    pub fn collect_from(&self, start: usize) -> String {
        self.chars[start..self.position].iter().collect()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

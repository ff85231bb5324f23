use crate::constant::TERMINAL;

/// One token of the command line, along with its offset (index) in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    offset: usize,
    value: String,
}

impl Token {
    pub(crate) fn new(offset: usize, value: impl Into<String>) -> Self {
        Self {
            offset,
            value: value.into(),
        }
    }

    /// The index of this token in the original input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The text of this token.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this token is the terminal marker.
    pub fn is_terminal(&self) -> bool {
        self.value == TERMINAL
    }
}

/// A position within a [`TokenStream`].
///
/// Positions are only meaningful until the next removal from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The front of the stream.
    pub const FRONT: Position = Position(0);

    /// The position `count` tokens further along.
    pub fn skip(&self, count: usize) -> Position {
        Position(self.0 + count)
    }

}

/// The unconsumed command line: an ordered, mutable sequence of tokens closed by the terminal marker `--`.
///
/// Scans stop at the first terminal marker, which is never removed.
/// Any `--` supplied in the input therefore closes the consumable region as well.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{Position, TokenStream};
///
/// let mut stream = TokenStream::new(["a", "b", "--", "c"]);
/// assert_eq!(stream.remaining(), vec!["a", "b"]);
///
/// let next = stream.remove(Position::FRONT);
/// assert_eq!(stream.value_at(next).unwrap().value(), "b");
/// assert_eq!(stream.remaining(), vec!["b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    // The index of the first terminal marker.
    terminal: usize,
}

impl TokenStream {
    /// Create a token stream, closing it with the terminal marker.
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .enumerate()
            .map(|(offset, value)| Token::new(offset, value))
            .collect();
        let terminal = tokens
            .iter()
            .position(Token::is_terminal)
            .unwrap_or(tokens.len());
        tokens.push(Token::new(tokens.len(), TERMINAL));
        Self { tokens, terminal }
    }

    /// Traverse the stream from the front, stopping at the terminal marker.
    pub fn scan(&self) -> Scan<'_> {
        self.scan_from(Position::FRONT)
    }

    /// Traverse the stream from `position`, stopping at the terminal marker.
    pub fn scan_from(&self, position: Position) -> Scan<'_> {
        Scan {
            tokens: &self.tokens[..self.terminal],
            index: std::cmp::min(position.0, self.terminal),
        }
    }

    /// The front token, unless the stream is exhausted.
    pub fn front(&self) -> Option<(Position, &Token)> {
        self.scan().next()
    }

    /// The token at `position`, unless it is (or lies beyond) the terminal marker.
    pub fn value_at(&self, position: Position) -> Option<&Token> {
        if position.0 < self.terminal {
            self.tokens.get(position.0)
        } else {
            None
        }
    }

    /// Remove the token at `position`, shifting subsequent tokens forward.
    /// Returns the position of the token which followed the removed one.
    pub fn remove(&mut self, position: Position) -> Position {
        self.remove_span(position, 1)
    }

    /// Remove `count` consecutive tokens starting at `position`.
    /// Returns the position of the token which followed the removed span.
    pub fn remove_span(&mut self, position: Position, count: usize) -> Position {
        assert!(
            position.0 + count <= self.terminal,
            "internal error - cannot remove the terminal marker"
        );
        self.tokens.drain(position.0..position.0 + count);
        self.terminal -= count;
        position
    }

    /// Remove several spans of `(position, count)` tokens in a single pass.
    /// The spans must be ordered front to back and must not overlap.
    pub fn remove_spans(&mut self, spans: &[(Position, usize)]) {
        assert!(
            spans
                .windows(2)
                .all(|pair| pair[0].0.skip(pair[0].1) <= pair[1].0),
            "internal error - spans must be ordered and disjoint"
        );

        if let Some((position, count)) = spans.last() {
            assert!(
                position.0 + count <= self.terminal,
                "internal error - cannot remove the terminal marker"
            );
        }

        let mut pending = spans.iter().peekable();
        let mut index = 0;
        self.tokens.retain(|_| {
            let current = index;
            index += 1;

            while let Some((position, count)) = pending.peek() {
                if current >= position.0 + count {
                    pending.next();
                } else {
                    break;
                }
            }

            !matches!(pending.peek(), Some((position, _)) if current >= position.0)
        });
        self.terminal -= spans.iter().map(|(_, count)| count).sum::<usize>();
    }

    /// The unconsumed tokens, in order, excluding the terminal marker.
    pub fn remaining(&self) -> Vec<&str> {
        self.scan().map(|(_, token)| token.value()).collect()
    }

    /// The number of unconsumed tokens.
    pub fn len(&self) -> usize {
        self.terminal
    }

    /// Whether all consumable tokens have been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.terminal == 0
    }
}

/// A lazy traversal over a [`TokenStream`].
///
/// Yields each consumable token with its position; never yields the terminal marker.
#[derive(Debug, Clone)]
pub struct Scan<'s> {
    tokens: &'s [Token],
    index: usize,
}

impl<'s> Iterator for Scan<'s> {
    type Item = (Position, &'s Token);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.index)?;
        let position = Position(self.index);
        self.index += 1;
        Some((position, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty() {
        let tokens: [&str; 0] = [];
        let stream = TokenStream::new(tokens);
        assert!(stream.is_exhausted());
        assert_eq!(stream.len(), 0);
        assert_eq!(stream.front(), None);
        assert_eq!(stream.remaining(), Vec::<&str>::default());
        assert_eq!(stream.value_at(Position::FRONT), None);
    }

    #[rstest]
    #[case(vec!["a"], vec!["a"])]
    #[case(vec!["a", "b"], vec!["a", "b"])]
    #[case(vec!["a", "--"], vec!["a"])]
    #[case(vec!["--", "a"], vec![])]
    #[case(vec!["a", "--", "b", "--"], vec!["a"])]
    fn remaining(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        let stream = TokenStream::new(tokens);
        assert_eq!(stream.remaining(), expected);
        assert_eq!(stream.len(), expected.len());
    }

    #[test]
    fn offsets() {
        let stream = TokenStream::new(["a", "b", "c"]);
        let offsets: Vec<usize> = stream.scan().map(|(_, token)| token.offset()).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn scan_restartable() {
        let stream = TokenStream::new(["a", "b"]);
        let scan = stream.scan();
        let first: Vec<&str> = scan.clone().map(|(_, t)| t.value()).collect();
        let second: Vec<&str> = scan.map(|(_, t)| t.value()).collect();
        assert_eq!(first, second);
        assert_eq!(stream.scan().count(), 2);
    }

    #[rstest]
    #[case(0, vec!["a", "b", "c"])]
    #[case(1, vec!["b", "c"])]
    #[case(3, vec![])]
    #[case(10, vec![])]
    fn scan_from(#[case] index: usize, #[case] expected: Vec<&str>) {
        let stream = TokenStream::new(["a", "b", "c"]);
        let values: Vec<&str> = stream
            .scan_from(Position::FRONT.skip(index))
            .map(|(_, t)| t.value())
            .collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn remove_shifts() {
        let mut stream = TokenStream::new(["a", "b", "c"]);
        let next = stream.remove(Position::FRONT.skip(1));
        assert_eq!(next, Position::FRONT.skip(1));
        assert_eq!(stream.value_at(next).unwrap().value(), "c");
        assert_eq!(stream.value_at(next).unwrap().offset(), 2);
        assert_eq!(stream.remaining(), vec!["a", "c"]);
    }

    #[test]
    fn remove_span() {
        let mut stream = TokenStream::new(["a", "b", "c", "d"]);
        let next = stream.remove_span(Position::FRONT, 3);
        assert_eq!(stream.value_at(next).unwrap().value(), "d");
        stream.remove(next);
        assert!(stream.is_exhausted());
        assert_eq!(stream.value_at(Position::FRONT), None);
    }

    #[rstest]
    #[case(vec![], vec!["a", "b", "c", "d", "e"])]
    #[case(vec![(0, 1)], vec!["b", "c", "d", "e"])]
    #[case(vec![(0, 2), (3, 1)], vec!["c", "e"])]
    #[case(vec![(1, 0), (1, 1), (4, 1)], vec!["a", "c", "d"])]
    #[case(vec![(0, 5)], vec![])]
    fn remove_spans(#[case] spans: Vec<(usize, usize)>, #[case] expected: Vec<&str>) {
        // Setup
        let mut stream = TokenStream::new(["a", "b", "c", "d", "e", "--", "f"]);
        let spans: Vec<(Position, usize)> = spans
            .into_iter()
            .map(|(index, count)| (Position::FRONT.skip(index), count))
            .collect();

        // Execute
        stream.remove_spans(&spans);

        // Verify
        assert_eq!(stream.remaining(), expected);
        assert_eq!(stream.len(), expected.len());
        assert_eq!(stream.value_at(Position::FRONT.skip(expected.len())), None);
    }

    #[test]
    fn remove_spans_many() {
        let count = 100_000;
        let values: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        let mut stream = TokenStream::new(values);
        let spans: Vec<(Position, usize)> = (0..count)
            .step_by(2)
            .map(|index| (Position::FRONT.skip(index), 1))
            .collect();

        stream.remove_spans(&spans);

        assert_eq!(stream.len(), count / 2);
        assert_eq!(stream.front().unwrap().1.value(), "1");
        assert_eq!(
            stream.value_at(Position::FRONT.skip(count / 2 - 1)).unwrap().value(),
            (count - 1).to_string()
        );
    }

    #[test]
    #[should_panic]
    fn remove_spans_through_terminal() {
        let mut stream = TokenStream::new(["a", "b"]);
        stream.remove_spans(&[(Position::FRONT.skip(1), 2)]);
    }

    #[test]
    #[should_panic]
    fn remove_spans_unordered() {
        let mut stream = TokenStream::new(["a", "b", "c"]);
        stream.remove_spans(&[(Position::FRONT.skip(2), 1), (Position::FRONT, 1)]);
    }

    #[test]
    #[should_panic]
    fn remove_terminal() {
        let mut stream = TokenStream::new(["a"]);
        stream.remove(Position::FRONT.skip(1));
    }

    #[test]
    #[should_panic]
    fn remove_span_through_terminal() {
        let mut stream = TokenStream::new(["a", "--", "b"]);
        stream.remove_span(Position::FRONT, 2);
    }
}

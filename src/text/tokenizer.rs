//! Rules text tokenizer.
//!
//! Words are uppercased. `,` and `;` become separators; `.`, `(` and `)`
//! are dropped. A run of ASCII digits is a number. Anything else up to
//! whitespace or punctuation is a word, so "+2/+2" and "can't" stay whole.

/// One token of rules text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Number(i64),
    Separator,
}

impl Token {
    /// The word, if this is one.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Is this the given (uppercase) word?
    #[must_use]
    pub fn is_word(&self, expected: &str) -> bool {
        self.as_word() == Some(expected)
    }
}

fn ends_word(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '.' | '(' | ')')
}

/// Split rules text into tokens.
///
/// ```
/// use ccg_stack::text::{tokenize, Token};
///
/// let tokens = tokenize("Deal 3 damage, then draw.");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Word("DEAL".into()),
///         Token::Number(3),
///         Token::Word("DAMAGE".into()),
///         Token::Separator,
///         Token::Word("THEN".into()),
///         Token::Word("DRAW".into()),
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() || matches!(c, '.' | '(' | ')') {
            chars.next();
        } else if matches!(c, ',' | ';') {
            chars.next();
            tokens.push(Token::Separator);
        } else if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                digits.push(d);
                chars.next();
            }
            tokens.push(Token::Number(digits.parse().unwrap_or(i64::MAX)));
        } else {
            let mut word = String::new();
            while let Some(&w) = chars.peek().filter(|w| !ends_word(**w)) {
                word.extend(w.to_uppercase());
                chars.next();
            }
            tokens.push(Token::Word(word));
        }
    }

    tokens
}

/// Read position over a token slice.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Tokens consumed since `start`.
    pub(crate) fn since(&self, start: usize) -> &'a [Token] {
        self.tokens.get(start..self.pos).unwrap_or_default()
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn at_separator(&self) -> bool {
        matches!(self.peek(), Some(Token::Separator))
    }

    /// Consume the next token if it is `word`.
    pub(crate) fn eat(&mut self, word: &str) -> bool {
        if self.peek().is_some_and(|t| t.is_word(word)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next token if it is any of `words`.
    pub(crate) fn eat_any(&mut self, words: &[&str]) -> bool {
        words.iter().any(|w| self.eat(w))
    }

    /// Consume `words` only if all of them come next, in order.
    pub(crate) fn eat_sequence(&mut self, words: &[&str]) -> bool {
        let upcoming = self.tokens.get(self.pos..self.pos + words.len());
        let matched = upcoming.is_some_and(|tokens| {
            tokens.iter().zip(words).all(|(token, word)| token.is_word(word))
        });
        if matched {
            self.pos += words.len();
        }
        matched
    }
}

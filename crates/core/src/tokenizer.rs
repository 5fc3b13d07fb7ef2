// crates/core/src/tokenizer.rs
//! Word / sentence-end tokenizer.
//!
//! Splits text into maximal runs of ASCII letters (words) and maximal runs of
//! `.`, `!`, `?` (sentence-end markers). Everything else is dropped.

use alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    SentenceEnd,
}

/// A token borrowed from the analysed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

#[inline]
const fn is_terminator(b: u8) -> bool {
    matches!(b, b'.' | b'!' | b'?')
}

#[inline]
fn classify(b: u8) -> Option<TokenKind> {
    if b.is_ascii_alphabetic() {
        Some(TokenKind::Word)
    } else if is_terminator(b) {
        Some(TokenKind::SentenceEnd)
    } else {
        None
    }
}

/// Lazy iterator over the tokens of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();

        // Skip bytes that cannot start a token. Non-ASCII bytes never classify,
        // so token boundaries always fall on char boundaries.
        let (start, kind) = loop {
            let b = *bytes.get(self.pos)?;
            if let Some(kind) = classify(b) {
                break (self.pos, kind);
            }
            self.pos += 1;
        };

        let mut end = start + 1;
        while bytes.get(end).and_then(|&b| classify(b)) == Some(kind) {
            end += 1;
        }
        self.pos = end;

        Some(Token {
            kind,
            text: &self.text[start..end],
        })
    }
}

/// Tokenize `text` into an ordered `Vec` of tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    Tokens::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_and_terminators() {
        let toks = tokenize("Hello world. How are you?");
        assert_eq!(
            toks.iter().map(|t| t.text).collect::<Vec<_>>(),
            ["Hello", "world", ".", "How", "are", "you", "?"]
        );
        assert_eq!(toks.iter().filter(|t| t.is_word()).count(), 5);
    }

    #[test]
    fn test_digits_split_words() {
        assert_eq!(texts("abc123def"), ["abc", "def"]);
    }

    #[test]
    fn test_terminator_runs_are_one_token() {
        let toks = tokenize("Wait...what?!");
        assert_eq!(toks.len(), 4);
        assert_eq!(toks[1].text, "...");
        assert_eq!(toks[1].kind, TokenKind::SentenceEnd);
        assert_eq!(toks[3].text, "?!");
    }

    #[test]
    fn test_empty_and_symbols_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  123 , ; -- \n\t").is_empty());
    }

    #[test]
    fn test_non_ascii_is_discarded() {
        // "é" is not ASCII alphabetic, so "café" yields "caf".
        assert_eq!(texts("café, naïve."), ["caf", "na", "ve", "."]);
    }

    #[test]
    fn test_adjacent_word_and_terminator() {
        assert_eq!(texts("end."), ["end", "."]);
        assert_eq!(texts(".start"), [".", "start"]);
    }
}

//! Splits a field into tokens using a per-field whitespace set.
//!
//! The forward slash is special: when it is part of the whitespace set it
//! still separates tokens, but unlike the other whitespace characters it is
//! emitted as a token of its own. Fields such as F3 or F7 rely on the slash
//! token to delimit their subfields.

/// One token cut out of a field, with its offsets into the field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    /// The token text.
    pub text: String,
    /// Start offset into the tokenized string.
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Token {
    pub fn new(text: &str, start: usize, end: usize) -> Token {
        Token {
            text: text.to_string(),
            start,
            end,
        }
    }
}

/// Tokenize `text`, treating every character in `whitespace` as a separator.
pub(crate) fn tokenize(text: &str, whitespace: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if whitespace.contains(ch) {
            if !current.is_empty() {
                tokens.push(Token {
                    text: std::mem::take(&mut current),
                    start,
                    end: idx,
                });
            }
            if ch == '/' {
                tokens.push(Token::new("/", idx, idx + 1));
            }
        } else {
            if current.is_empty() {
                start = idx;
            }
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(Token {
            text: current,
            start,
            end: text.len(),
        });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_whitespace_separates_and_is_discarded() {
        let tokens = tokenize("  EGLL0800   EGSS ", " \n\t\r");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new("EGLL0800", 2, 10));
        assert_eq!(tokens[1], Token::new("EGSS", 13, 17));
    }

    #[test]
    fn slash_in_whitespace_set_becomes_its_own_token() {
        let tokens = tokenize("A/B", " /\n\t\r");
        assert_eq!(
            tokens,
            vec![
                Token::new("A", 0, 1),
                Token::new("/", 1, 2),
                Token::new("B", 2, 3),
            ]
        );
    }

    #[test]
    fn slash_outside_whitespace_set_stays_in_the_token() {
        let tokens = tokenize("PPP/ Q", " \n\t\r");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new("PPP/", 0, 4));
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(tokenize("", " \n\t\r").is_empty());
        assert!(tokenize("   \n\t", " \n\t\r").is_empty());
    }

    #[test]
    fn trailing_token_is_flushed() {
        let tokens = tokenize("TEST01/A1234", " /\n\t\r");
        assert_eq!(
            tokens,
            vec![
                Token::new("TEST01", 0, 6),
                Token::new("/", 6, 7),
                Token::new("A1234", 7, 12),
            ]
        );
    }
}

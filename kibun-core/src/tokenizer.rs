//! Tokenization for sentiment scoring
//!
//! Splits text on whitespace and punctuation boundaries. Emphasis
//! punctuation (runs of `!` and `?`) is kept as separate tokens since
//! the scorer applies an emphasis bonus for it; all other punctuation
//! is stripped. Deterministic and side-effect-free.

/// A single unit of input text
///
/// `text` preserves the original casing (needed for ALL-CAPS emphasis
/// detection); `normalized` is the lowercased, punctuation-stripped
/// form used for lexicon lookup. Tokens are ephemeral: created per
/// analysis call and discarded after scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Original text of the token
    pub text: String,
    /// Lowercased form for lexicon lookup
    pub normalized: String,
    /// Zero-based position in the token sequence
    pub position: usize,
}

impl Token {
    /// Whether this token is a run of emphasis punctuation (`!` / `?`)
    pub fn is_emphasis(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c == '!' || c == '?')
    }

    /// Whether the token is written in all capital letters
    ///
    /// Single-letter tokens are not considered emphatic ("I" and "A"
    /// are ordinarily capitalized).
    pub fn is_all_caps(&self) -> bool {
        let letters: Vec<char> = self.text.chars().filter(|c| c.is_alphabetic()).collect();
        letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
    }

    /// Whether the token contains any alphabetic character
    pub fn is_word(&self) -> bool {
        self.text.chars().any(|c| c.is_alphanumeric())
    }
}

/// Split text into a token sequence
///
/// Empty or whitespace-only input yields an empty sequence, not an
/// error. Words keep their original casing in `text`; apostrophes and
/// surrounding punctuation are dropped from `normalized` so that
/// contractions like "don't" match the lexicon's "dont".
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }

    tokens
}

/// Split one whitespace-delimited chunk into word and emphasis tokens
fn split_chunk(chunk: &str, tokens: &mut Vec<Token>) {
    let mut current = String::new();

    let mut flush_word = |word: &mut String, tokens: &mut Vec<Token>| {
        if word.chars().any(char::is_alphanumeric) {
            tokens.push(make_token(word, tokens.len()));
        }
        word.clear();
    };

    let mut chars = chunk.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '!' || c == '?' {
            flush_word(&mut current, tokens);

            // Collect the whole emphasis run as one token
            let mut run = String::from(c);
            while let Some(&next) = chars.peek() {
                if next == '!' || next == '?' {
                    run.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            let position = tokens.len();
            tokens.push(Token {
                normalized: run.clone(),
                text: run,
                position,
            });
        } else {
            current.push(c);
        }
    }
    flush_word(&mut current, tokens);
}

fn make_token(raw: &str, position: usize) -> Token {
    // Strip non-alphanumeric characters from both forms; the original
    // casing survives in `text` for caps detection.
    let text: String = raw.chars().filter(|c| c.is_alphanumeric()).collect();
    let normalized = text.to_lowercase();
    Token {
        text,
        normalized,
        position,
    }
}

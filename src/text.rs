//! Text normalization and tokenization.
//!
//! This module turns raw text into the ordered sequence of normalized word
//! tokens consumed by the set builders. Every token produced here is
//! non-empty, lowercase, and contains only alphanumeric characters and
//! interior apostrophes (no leading or trailing apostrophes).
//!
//! # Examples
//!
//! ```rust
//! use wordset::text::tokenize;
//!
//! let tokens = tokenize("Don't panic -- DON'T!");
//! assert_eq!(tokens, vec!["don't", "panic", "don't"]);
//! ```

/// Returns `word` with leading and trailing apostrophes removed.
///
/// Interior apostrophes are kept, so `"don't"` is returned unchanged while
/// `"'tis'"` becomes `"tis"`. A word consisting only of apostrophes trims to
/// the empty string.
///
/// # Examples
///
/// ```rust
/// use wordset::text::trim_apostrophes;
///
/// assert_eq!(trim_apostrophes("'round"), "round");
/// assert_eq!(trim_apostrophes("don't"), "don't");
/// assert_eq!(trim_apostrophes("''"), "");
/// ```
#[inline]
#[must_use]
pub fn trim_apostrophes(word: &str) -> &str {
    word.trim_matches('\'')
}

/// Checks whether a character may appear inside a token before trimming.
fn is_word_char(character: char) -> bool {
    character.is_alphanumeric() || character == '\''
}

/// Tokenizes `text` into a sequence of normalized words.
///
/// Alphanumeric characters are lowercased (Unicode-aware) and apostrophes
/// are kept; every other character acts as a separator. Each resulting word
/// is trimmed of leading and trailing apostrophes, and words that trim to
/// nothing are dropped. Token order follows the input text.
///
/// # Examples
///
/// ```rust
/// use wordset::text::tokenize;
///
/// assert_eq!(
///     tokenize("Functional programming, in C!"),
///     vec!["functional", "programming", "in", "c"]
/// );
/// assert_eq!(tokenize("  '' ... "), Vec::<String>::new());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut normalized = String::with_capacity(text.len());
    for character in text.chars() {
        if character.is_alphanumeric() {
            normalized.extend(character.to_lowercase());
        } else if character == '\'' {
            normalized.push('\'');
        } else {
            normalized.push(' ');
        }
    }

    normalized
        .split_whitespace()
        .map(trim_apostrophes)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Tokenizes `text` by splitting it into two halves processed concurrently.
///
/// The split point starts at the byte midpoint and is backed off to the
/// nearest preceding separator character (respecting UTF-8 boundaries), so
/// no word ever straddles the cut. Both halves are tokenized via
/// [`rayon::join`] and the token lists are concatenated, which makes the
/// result equal to [`tokenize`] on the same input.
///
/// Falls back to sequential tokenization when the text is short or when no
/// separator exists before the midpoint (a single giant word).
///
/// # Examples
///
/// ```rust
/// use wordset::text::{tokenize, tokenize_parallel};
///
/// let text = "The quick brown fox jumps over the lazy dog.";
/// assert_eq!(tokenize_parallel(text), tokenize(text));
/// ```
#[must_use]
pub fn tokenize_parallel(text: &str) -> Vec<String> {
    let Some(split_index) = separator_split_index(text) else {
        return tokenize(text);
    };

    let (head, tail) = text.split_at(split_index);
    let (mut head_tokens, mut tail_tokens) = rayon::join(|| tokenize(head), || tokenize(tail));
    head_tokens.append(&mut tail_tokens);
    head_tokens
}

/// Finds the last separator position at or before the byte midpoint, or
/// `None` if the first half of the text contains no separator.
fn separator_split_index(text: &str) -> Option<usize> {
    if text.len() < 2 {
        return None;
    }

    let midpoint = text.len() / 2;
    text.char_indices()
        .take_while(|(index, _)| *index <= midpoint)
        .filter(|(index, character)| *index > 0 && !is_word_char(*character))
        .last()
        .map(|(index, _)| index)
}

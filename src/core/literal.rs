//! Heuristic scanner for unlocalized string literal declarations.
//!
//! Recognizes, anywhere in a chunk of text:
//!
//! ```text
//! <marker> [identifier] [: String] [=] "literal"
//! ```
//!
//! where `<marker>` is `@` or one of the keywords `static let`, `let`, `var`,
//! `return` followed by whitespace. This works on raw text, so matches inside
//! comments or other strings are reported too.
//!
//! # Examples
//!
//! ```
//! use locscan::core::literal::contains_unlocalized_literal;
//!
//! assert!(contains_unlocalized_literal(r#"let title = "Hello""#));
//! assert!(contains_unlocalized_literal(r#"@"Hello""#));
//! assert!(!contains_unlocalized_literal(r#"#import "Header.h""#));
//! ```

use std::ops::Range;

/// Keyword sequences that start a declaration. Each word must be followed by whitespace.
const KEYWORDS: &[&[&str]] = &[&["static", "let"], &["let"], &["var"], &["return"]];

/// Type annotation accepted between the name and the value.
const STRING_TYPE: &str = "String";

/// Returns true if `text` contains at least one unlocalized literal declaration.
pub fn contains_unlocalized_literal(text: &str) -> bool {
    find_unlocalized_literal(text).is_some()
}

/// Returns the byte span of the first unlocalized literal declaration in `text`.
///
/// The span starts at the declaration marker and ends after the closing quote.
pub fn find_unlocalized_literal(text: &str) -> Option<Range<usize>> {
    text.char_indices()
        .filter(|(_, c)| matches!(c, '@' | 's' | 'l' | 'v' | 'r'))
        .find_map(|(start, _)| match_at(&text[start..]).map(|len| start..start + len))
}

/// Try to match a declaration at the very start of `input`, returning its byte length.
fn match_at(input: &str) -> Option<usize> {
    let mut pos = match_marker(input)?;

    // Optional identifier
    if input[pos..].chars().next().is_some_and(char::is_alphabetic) {
        pos = skip_while(input, pos, char::is_alphanumeric);
    }
    pos = skip_while(input, pos, char::is_whitespace);

    // Optional `: String`
    if input[pos..].starts_with(':') {
        pos = skip_while(input, pos + 1, char::is_whitespace);
        if !input[pos..].starts_with(STRING_TYPE) {
            return None;
        }
        pos = skip_while(input, pos + STRING_TYPE.len(), char::is_whitespace);
    }

    // Optional assignment
    if input[pos..].starts_with('=') {
        pos = skip_while(input, pos + 1, char::is_whitespace);
    }

    let literal_len = match_quoted(&input[pos..])?;
    Some(pos + literal_len)
}

/// Match a declaration marker plus its trailing whitespace.
fn match_marker(input: &str) -> Option<usize> {
    if input.starts_with('@') {
        return Some(skip_while(input, 1, char::is_whitespace));
    }

    KEYWORDS
        .iter()
        .find_map(|words| match_keyword_sequence(input, words))
}

fn match_keyword_sequence(input: &str, words: &[&str]) -> Option<usize> {
    let mut pos = 0;
    for word in words {
        if !input[pos..].starts_with(word) {
            return None;
        }
        let after_word = pos + word.len();
        pos = skip_while(input, after_word, char::is_whitespace);
        // At least one whitespace character is required after every word
        if pos == after_word {
            return None;
        }
    }
    Some(pos)
}

/// Match a double-quoted literal with backslash escapes, returning its byte length.
fn match_quoted(input: &str) -> Option<usize> {
    let mut chars = input.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }

    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next()?;
            }
            '"' => return Some(idx + 1),
            _ => {}
        }
    }
    None
}

fn skip_while(input: &str, from: usize, pred: impl Fn(char) -> bool) -> usize {
    input[from..]
        .char_indices()
        .find(|(_, c)| !pred(*c))
        .map_or(input.len(), |(idx, _)| from + idx)
}

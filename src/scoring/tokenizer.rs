use std::char::ToLowercase;
use std::str::Chars;

/// Terms shorter than this are dropped.
pub const MIN_TERM_LEN: usize = 2;

/// Split `text` into normalized scoring terms.
///
/// Normalization rules:
/// - Lowercase (Unicode mapping, no locale tailoring)
/// - Strip every character outside `[a-z0-9]` and whitespace
/// - Split on whitespace runs
/// - Drop terms shorter than [`MIN_TERM_LEN`]
///
/// Stripping happens before splitting, so `"don't"` becomes `"dont"` and
/// `"e-mail"` becomes `"email"`.
pub fn terms(text: &str) -> Terms<'_> {
    Terms {
        chars: text.chars(),
        lowered: None,
    }
}

/// Lazy iterator returned by [`terms`].
#[derive(Debug, Clone)]
pub struct Terms<'a> {
    chars: Chars<'a>,
    lowered: Option<ToLowercase>,
}

impl Terms<'_> {
    fn next_char(&mut self) -> Option<char> {
        loop {
            if let Some(lowered) = self.lowered.as_mut() {
                if let Some(c) = lowered.next() {
                    return Some(c);
                }
                self.lowered = None;
            }
            self.lowered = Some(self.chars.next()?.to_lowercase());
        }
    }
}

impl Iterator for Terms<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut term = String::new();

        while let Some(c) = self.next_char() {
            if c.is_whitespace() {
                if term.len() >= MIN_TERM_LEN {
                    return Some(term);
                }
                term.clear();
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
                term.push(c);
            }
        }

        (term.len() >= MIN_TERM_LEN).then_some(term)
    }
}

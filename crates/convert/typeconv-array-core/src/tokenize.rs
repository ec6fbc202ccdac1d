//! Delimiter splitting for character-sequence inputs.

use serde::{Deserialize, Serialize};

/// Characters that separate number tokens inside a text value.
///
/// Defaults to `,` and `;` plus every Unicode whitespace character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    /// Explicit delimiter characters.
    pub chars: Vec<char>,
    /// Also split on `char::is_whitespace`.
    pub whitespace: bool,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            chars: vec![',', ';'],
            whitespace: true,
        }
    }
}

impl Delimiters {
    pub fn new(chars: impl IntoIterator<Item = char>, whitespace: bool) -> Self {
        Self {
            chars: chars.into_iter().collect(),
            whitespace,
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        (self.whitespace && c.is_whitespace()) || self.chars.contains(&c)
    }
}

/// Split `text` on `delimiters`. Runs of delimiters collapse and leading or
/// trailing delimiters produce no tokens, so the result never holds an empty
/// string.
pub fn split_tokens<'a>(text: &'a str, delimiters: &Delimiters) -> Vec<&'a str> {
    text.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_default_delimiters() {
        let d = Delimiters::default();
        assert_eq!(split_tokens("1,2;3  4", &d), vec!["1", "2", "3", "4"]);
        assert_eq!(split_tokens("\t5\n,;6 ", &d), vec!["5", "6"]);
    }

    #[test]
    fn empty_and_blank_text_have_no_tokens() {
        let d = Delimiters::default();
        assert!(split_tokens("", &d).is_empty());
        assert!(split_tokens("   \n\t", &d).is_empty());
        assert!(split_tokens(",;,", &d).is_empty());
    }

    #[test]
    fn custom_delimiters() {
        let pipes = Delimiters::new(['|'], false);
        assert_eq!(split_tokens("1|2 3||4", &pipes), vec!["1", "2 3", "4"]);
        assert!(pipes.contains('|'));
        assert!(!pipes.contains(' '));
    }
}

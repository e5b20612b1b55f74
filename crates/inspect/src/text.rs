//! Text transformations applied to non-JSON bodies and to table cells.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Converts a markup body into readable plain text.
///
/// Tags are stripped first, then HTML entities are decoded, then the result is
/// percent-decoded with `+` read as a space.
pub fn plain_text(input: &str) -> String {
    let stripped = strip_tags(input);
    let decoded = html_escape::decode_html_entities(&stripped);
    percent_decode(&decoded)
}

/// Escapes text for use as HTML element content.
pub fn escape(input: &str) -> Cow<'_, str> {
    html_escape::encode_text(input)
}

/// Escapes text for use inside a double-quoted HTML attribute.
pub fn escape_attribute(input: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(input)
}

/// Decodes `%XX` sequences and `+`.
///
/// Malformed sequences are kept as-is and invalid UTF-8 is replaced.
pub fn percent_decode(input: &str) -> String {
    let spaced = if input.contains('+') { Cow::Owned(input.replace('+', " ")) } else { Cow::Borrowed(input) };
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Tag,
    Quoted(char),
    Comment,
}

/// Removes markup tags, comments included.
///
/// A `<` only opens a tag when followed by a letter, `/`, `!` or `?`, so
/// comparisons like `a < b` survive. An unterminated tag swallows the rest of
/// the input.
pub fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut state = State::Text;
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        let len = c.len_utf8();
        match state {
            State::Text => {
                if c == '<' && opens_tag(&rest[len..]) {
                    state = if rest.starts_with("<!--") { State::Comment } else { State::Tag };
                } else {
                    output.push(c);
                }
            }
            State::Tag => match c {
                '>' => state = State::Text,
                '"' | '\'' => state = State::Quoted(c),
                _ => {}
            },
            State::Quoted(quote) => {
                if c == quote {
                    state = State::Tag;
                }
            }
            State::Comment => {
                if rest.starts_with("-->") {
                    rest = &rest[3..];
                    state = State::Text;
                    continue;
                }
            }
        }
        rest = &rest[len..];
    }

    output
}

fn opens_tag(after: &str) -> bool {
    after.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

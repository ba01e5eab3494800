// Request line lexing, see RFC 2229 section 2.2.
//
// A line is a sequence of atoms separated by spaces. A token starting with a single or double
// quote runs until the matching quote, and a backslash inside it escapes the next character.

use thiserror::Error as ThisError;

const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

#[derive(Debug, ThisError, PartialEq)]
pub enum TokenizeError {
    /// An unescaped quote of the other kind showed up inside a quoted token.
    #[error("lexical error; bad character {found:?} in token quoted with {quote:?}")]
    UnexpectedQuote { quote: char, found: char },
}

/// Splits a request line into tokens.
///
/// Quote characters are only special at the start of a token, so `it's` is a single atom. A
/// quoted token missing its closing quote is closed at the end of the line.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut rest = line.trim_matches(WHITESPACE);

    while let Some(leader) = rest.chars().next() {
        let (token, remainder) = match leader {
            '"' | '\'' => consume_quoted(leader, &rest[leader.len_utf8()..])?,
            _ => consume_atom(rest),
        };

        tokens.push(token);
        rest = remainder.trim_matches(WHITESPACE);
    }

    Ok(tokens)
}

fn consume_atom(buf: &str) -> (String, &str) {
    match buf.find(' ') {
        Some(index) => (buf[..index].to_string(), &buf[index + 1..]),
        None => (buf.to_string(), ""),
    }
}

// `buf` starts right after the opening quote.
fn consume_quoted(quote: char, buf: &str) -> Result<(String, &str), TokenizeError> {
    let mut token = String::with_capacity(buf.len());
    let mut escaped = false;

    for (index, c) in buf.char_indices() {
        if escaped {
            token.push(c);
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            c if c == quote => return Ok((token, &buf[index + c.len_utf8()..])),
            '"' | '\'' => return Err(TokenizeError::UnexpectedQuote { quote, found: c }),
            c => token.push(c),
        }
    }

    Ok((token, ""))
}

//! Command line tokenizer.
//!
//! Words are separated by whitespace. Single or double quotes group text
//! that contains whitespace; the quotes are removed and pieces written next
//! to each other form a single word, so `name="a b"` is `name=a b`.

use crate::error::LineError;
use nom::branch::alt;
use nom::bytes::complete::{take_till1, take_while};
use nom::character::complete::char;
use nom::multi::fold_many1;
use nom::sequence::delimited;
use nom::IResult;

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn bare(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace() || is_quote(c))(input)
}

fn quoted<'a>(quote: char) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| {
        delimited(char(quote), take_while(move |c: char| c != quote), char(quote))(input)
    }
}

fn word(input: &str) -> IResult<&str, String> {
    fold_many1(
        alt((bare, quoted('\''), quoted('"'))),
        String::new,
        |mut acc, piece| {
            acc.push_str(piece);
            acc
        },
    )(input)
}

/// Skip leading whitespace; reports whether any was skipped.
fn skip_whitespace(input: &str) -> (&str, bool) {
    match whitespace(input) {
        Ok((rest, skipped)) => (rest, !skipped.is_empty()),
        Err(_) => (input, false),
    }
}

/// Split a complete command line into words.
pub fn split_line(line: &str) -> Result<Vec<String>, LineError> {
    let mut words = Vec::new();
    let mut rest = line;

    loop {
        let (trimmed, _) = skip_whitespace(rest);
        if trimmed.is_empty() {
            return Ok(words);
        }
        match word(trimmed) {
            Ok((remaining, w)) => {
                words.push(w);
                rest = remaining;
            }
            // Only an opening quote without its partner stops a word.
            Err(_) => {
                return Err(LineError::UnterminatedQuote {
                    position: line.len() - trimmed.len(),
                })
            }
        }
    }
}

/// Split a line that is still being typed, for completion.
///
/// The last element is the partial word under the cursor: empty after
/// trailing whitespace (or for an empty line), and everything after an
/// unterminated quote otherwise. Never fails.
pub fn split_partial(line: &str) -> Vec<String> {
    split_partial_with_start(line).0
}

/// Like [`split_partial`], also returning the byte offset in `line` where
/// the partial word begins, opening quote included.
pub fn split_partial_with_start(line: &str) -> (Vec<String>, usize) {
    let mut words: Vec<String> = Vec::new();
    let mut start = 0;
    let mut rest = line;

    loop {
        let (trimmed, separated) = skip_whitespace(rest);
        let joins_previous = !separated && !words.is_empty();

        if trimmed.is_empty() {
            if !joins_previous {
                words.push(String::new());
                start = line.len();
            }
            return (words, start);
        }

        let (piece, remaining) = match word(trimmed) {
            Ok((remaining, w)) => (w, Some(remaining)),
            Err(_) => (trimmed[1..].to_string(), None),
        };

        match words.last_mut() {
            Some(last) if joins_previous => last.push_str(&piece),
            _ => {
                words.push(piece);
                start = line.len() - trimmed.len();
            }
        }

        match remaining {
            Some(r) => rest = r,
            None => return (words, start),
        }
    }
}

/// Render `word` so that [`split_line`] reads it back as that single word.
pub fn quote_word(word: &str) -> String {
    let needs_quotes =
        word.is_empty() || word.chars().any(|c| c.is_whitespace() || is_quote(c));
    if !needs_quotes {
        return word.to_string();
    }
    if word.is_empty() {
        return "\"\"".to_string();
    }

    // Double quotes cannot appear inside a double-quoted piece.
    word.split('"')
        .map(|piece| {
            if piece.is_empty() {
                String::new()
            } else {
                format!("\"{piece}\"")
            }
        })
        .collect::<Vec<_>>()
        .join("'\"'")
}

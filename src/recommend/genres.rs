//! Genre normalization.
//!
//! The `genres` property arrives as a native list, as a stringified list
//! literal (`"['Action', 'Drama']"`) or as a plain delimited string
//! (`"Action, Drama"`). [`normalize_genres`] turns all of them into a list of
//! trimmed strings and never fails: anything that is not a well-formed list
//! literal goes through the comma-split fallback.
//!
//! Every genre comparison in the crate goes through this module.

use crate::neo4j::models::RawGenres;

const QUOTES: [char; 2] = ['\'', '"'];
const SPLIT_JUNK: [char; 4] = ['\'', '"', '[', ']'];

/// Normalize a raw `genres` property into an ordered list of genre names.
///
/// Native lists are returned untouched; duplicates are never removed.
pub fn normalize_genres(raw: &RawGenres) -> Vec<String> {
    match raw {
        RawGenres::Missing => Vec::new(),
        RawGenres::List(list) => list.clone(),
        RawGenres::Text(text) => match parse_list_literal(text) {
            Some(items) => items
                .iter()
                .map(|item| item.trim_matches(|c: char| c.is_whitespace() || QUOTES.contains(&c)))
                .map(str::to_string)
                .collect(),
            None => split_genres(text),
        },
    }
}

/// Comma-split fallback: strip whitespace, quotes and brackets, drop empties
pub fn split_genres(text: &str) -> Vec<String> {
    text.split(',')
        .map(|piece| {
            piece.trim_matches(|c: char| c.is_whitespace() || SPLIT_JUNK.contains(&c))
        })
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a list literal of quoted strings, e.g. `['Action', "Sci-Fi"]`.
///
/// Returns `None` unless the whole input is one bracketed list whose elements
/// are all single- or double-quoted strings. A trailing comma is accepted.
pub fn parse_list_literal(text: &str) -> Option<Vec<String>> {
    let mut chars = text.trim().chars().peekable();
    if chars.next()? != '[' {
        return None;
    }

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.next()? {
            ']' => break,
            quote @ ('\'' | '"') => {
                items.push(read_quoted(&mut chars, quote)?);
                skip_whitespace(&mut chars);
                match chars.next()? {
                    ',' => continue,
                    ']' => break,
                    _ => return None,
                }
            }
            _ => return None,
        }
    }

    // Nothing may follow the closing bracket
    if chars.next().is_some() {
        return None;
    }
    Some(items)
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

/// Read up to the closing `quote`, resolving backslash escapes
fn read_quoted(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, quote: char) -> Option<String> {
    let mut out = String::new();
    loop {
        match chars.next()? {
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                other => out.push(other),
            },
            c if c == quote => return Some(out),
            c => out.push(c),
        }
    }
}

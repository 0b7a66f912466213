// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of a single gemtext line by its leading marker.

use beef::Cow;
use logos::Logos;

/// Line prefixes with a meaning in gemtext. Only the first token of a line
/// is ever lexed.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    #[token("```")]
    Fence,

    #[token("*")]
    Bullet,

    #[regex("#+")]
    Heading,

    #[token(">")]
    Quote,

    #[token("=>")]
    Link,
}

/// A single line of a gemtext document, borrowing from the source.
#[derive(Debug, Clone)]
pub enum Line<'a> {
    /// ```` ``` ```` toggling preformatted mode, anything after the backticks is ignored.
    Fence,

    /// `*` list item, holding the text after the bullet.
    ListItem(&'a str),

    /// `#` heading, `text` is the full line including the hashes.
    Heading {
        /// Number of leading `#` characters.
        level: usize,
        /// The whole line.
        text: &'a str,
    },

    /// `>` quote, holding the full line.
    Quote(&'a str),

    /// `=>` link.
    Link(Link<'a>),

    /// Anything else.
    Text(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line. Never fails, lines without a known marker are `Text`.
    pub fn parse(line: &'a str) -> Self {
        let mut lex = Marker::lexer(line);

        match lex.next() {
            Some(Ok(Marker::Fence)) => Line::Fence,
            Some(Ok(Marker::Bullet)) => Line::ListItem(lex.remainder()),
            Some(Ok(Marker::Heading)) => Line::Heading {
                level: lex.slice().len(),
                text: line,
            },
            Some(Ok(Marker::Quote)) => Line::Quote(line),
            Some(Ok(Marker::Link)) => Line::Link(Link::parse(lex.remainder())),
            _ => Line::Text(line),
        }
    }
}

/// Target and label of a `=>` line.
#[derive(Debug, Clone)]
pub struct Link<'a> {
    /// First whitespace separated token, empty if there was none.
    pub target: &'a str,

    /// Remaining tokens joined by single spaces, `None` if the line only had a target.
    pub label: Option<Cow<'a, str>>,
}

impl<'a> Link<'a> {
    /// Parse the part of the line following `=>`.
    pub fn parse(rest: &'a str) -> Self {
        let rest = rest.trim_matches(is_separator);

        let target = match tokens(rest).next() {
            Some(target) => target,
            None => return Link { target: rest, label: None },
        };

        let tail = rest[target.len()..].trim_start_matches(is_separator);

        if tail.is_empty() {
            return Link { target, label: None };
        }

        // Borrow when the label is already separated by single spaces
        let normalized = !tail.contains("  ")
            && !tail.contains(|c: char| c != ' ' && is_separator(c));

        let label = if normalized {
            Cow::borrowed(tail)
        } else {
            Cow::owned(tokens(tail).collect::<Vec<_>>().join(" "))
        };

        Link {
            target,
            label: Some(label),
        }
    }

    /// Text shown for this link.
    pub fn label(&self) -> &str {
        match self.label {
            Some(ref label) => &**label,
            None => self.target,
        }
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators,
/// which gemtext clients also split links on.
#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

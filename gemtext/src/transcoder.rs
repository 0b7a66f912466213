// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single pass over the lines of a gemtext document, emitting HTML as it goes.

use std::io;

use crate::encoding::{EscapingIOEncoder, Encoder};
use crate::line::{Line, Link};

/// Stylesheet embedded in the head of every transcoded document.
pub const STYLESHEET: &str = "
body {
    margin: 40px auto;
    max-width: 650px;
    line-height: 1.6;
    font-size: 18px;
    color: #444;
    padding: 0 10px;
}

h1, h2, h3 {
    line-height: 1.2;
}

ul {
    list-style: none;
    margin-left: 0;
    padding-left: 0;
}

li {
    padding-left: 1em;
    text-indent: -1em;
}

li:before {
    font-weight: bold;
    content: \"*\";
    padding-right: 5px;
}

pre {
    line-height: initial;
    font-family: menlo, lucida console, consolas, courier new, courier, monospace;
}
";

const HEAD_OPEN: &str = "<html><head><meta charset=\"utf-8\" /><style>";
const HEAD_CLOSE: &str = "</style></head><body>";
const TAIL: &str = "</body></html>";

/// Options for turning gemtext into an HTML document.
///
/// The default configuration leaves blocks that are still open at the end of
/// the document unclosed, and writes link targets into `href` attributes as they are.
///
/// ```
/// use gemtext::Transcoder;
///
/// let html = Transcoder::new()
///     .close_unterminated(true)
///     .transcode("* one\n* two");
///
/// assert!(html.contains("<ul><li> one</li><li> two</li></ul>"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Transcoder {
    close_unterminated: bool,
    escape_link_targets: bool,
}

/// Open blocks while scanning a document. A list can be open inside a
/// preformatted block, so the two are tracked separately.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Blocks {
    verbatim: bool,
    list: bool,
}

impl Blocks {
    /// Flip preformatted mode, returns `true` if a block was opened.
    #[inline]
    fn toggle_fence(&mut self) -> bool {
        self.verbatim = !self.verbatim;
        self.verbatim
    }

    /// Returns `true` if the list wasn't open before.
    #[inline]
    fn open_list(&mut self) -> bool {
        !std::mem::replace(&mut self.list, true)
    }

    /// Returns `true` if the list was open before.
    #[inline]
    fn close_list(&mut self) -> bool {
        std::mem::replace(&mut self.list, false)
    }

    #[inline]
    fn close_fence(&mut self) -> bool {
        std::mem::replace(&mut self.verbatim, false)
    }
}

impl Transcoder {
    /// Create a `Transcoder` with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Close a list or preformatted block left open at the end of the document.
    pub fn close_unterminated(mut self, close: bool) -> Self {
        self.close_unterminated = close;
        self
    }

    /// Escape special HTML characters in link targets, and in links shown by their target.
    pub fn escape_link_targets(mut self, escape: bool) -> Self {
        self.escape_link_targets = escape;
        self
    }

    /// Estimate how big of a buffer should be allocated to transcode `source`.
    pub fn capacity_hint(&self, source: &str) -> usize {
        // Add extra 25% extra capacity for HTML escapes and tags.
        let body = source.len() + source.len() / 4;

        HEAD_OPEN.len() + STYLESHEET.len() + HEAD_CLOSE.len() + body + TAIL.len()
    }

    /// Transcode gemtext to an HTML document in a `String`.
    pub fn transcode(&self, source: &str) -> String {
        let mut buf = String::with_capacity(self.capacity_hint(source));

        // Ignore the result, cannot fail
        let _ = self.render(source, &mut buf);

        buf
    }

    /// Transcode gemtext to an HTML document, written to a writer.
    pub fn transcode_to_writer<W>(&self, writer: &mut W, source: &str) -> io::Result<()>
    where
        W: io::Write,
    {
        let mut encoder = EscapingIOEncoder::new(writer);

        self.render(source, &mut encoder)
    }

    /// Transcode gemtext into any `Encoder`.
    pub fn render<E: Encoder>(&self, source: &str, encoder: &mut E) -> Result<(), E::Error> {
        encoder.write_unescaped(HEAD_OPEN)?;
        encoder.write_unescaped(STYLESHEET)?;
        encoder.write_unescaped(HEAD_CLOSE)?;

        let mut blocks = Blocks::default();

        for raw in source.split('\n') {
            let line = match Line::parse(raw) {
                Line::Fence => {
                    let tag = if blocks.toggle_fence() { "<pre>" } else { "</pre>" };

                    encoder.write_unescaped(tag)?;
                    continue;
                }
                Line::ListItem(text) => {
                    if blocks.open_list() {
                        encoder.write_unescaped("<ul>")?;
                    }

                    encoder.write_unescaped("<li>")?;
                    encoder.write_escaped(text)?;
                    encoder.write_unescaped("</li>")?;
                    continue;
                }
                line => line,
            };

            if blocks.close_list() {
                encoder.write_unescaped("</ul>\n")?;
            }

            if blocks.verbatim {
                encoder.write_escaped(raw)?;
            } else {
                self.render_line(line, encoder)?;
            }

            encoder.write_unescaped("\n")?;
        }

        log::trace!(target: "gemtext", "transcoded {} bytes, open at end: {:?}", source.len(), blocks);

        if self.close_unterminated {
            if blocks.close_list() {
                encoder.write_unescaped("</ul>\n")?;
            }

            if blocks.close_fence() {
                encoder.write_unescaped("</pre>")?;
            }
        }

        encoder.write_unescaped(TAIL)
    }

    fn render_line<E: Encoder>(&self, line: Line, encoder: &mut E) -> Result<(), E::Error> {
        match line {
            Line::Heading { level, text } => {
                encoder.write_unescaped("<h")?;
                encoder.format_unescaped(level)?;
                encoder.write_unescaped(">")?;
                encoder.write_escaped(text)?;
                encoder.write_unescaped("</h")?;
                encoder.format_unescaped(level)?;
                encoder.write_unescaped(">")
            }
            Line::Quote(text) => {
                encoder.write_unescaped("<blockquote>")?;
                encoder.write_escaped(text)?;
                encoder.write_unescaped("</blockquote>")
            }
            Line::Link(link) => self.render_link(&link, encoder),
            Line::Text(text) => {
                encoder.write_escaped(text)?;
                encoder.write_unescaped("<br>")
            }
            // Both only affect open blocks, see `render`
            Line::Fence | Line::ListItem(_) => Ok(()),
        }
    }

    fn render_link<E: Encoder>(&self, link: &Link, encoder: &mut E) -> Result<(), E::Error> {
        encoder.write_unescaped("=&gt; <a href=\"")?;
        self.write_target(link.target, encoder)?;
        encoder.write_unescaped("\">")?;

        match link.label {
            Some(ref label) => encoder.write_escaped(label)?,
            None => self.write_target(link.target, encoder)?,
        }

        encoder.write_unescaped("</a><br>")
    }

    #[inline]
    fn write_target<E: Encoder>(&self, target: &str, encoder: &mut E) -> Result<(), E::Error> {
        if self.escape_link_targets {
            encoder.write_escaped(target)
        } else {
            encoder.write_unescaped(target)
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # gemtext
//!
//! Line-oriented transcoder from gemtext, the markup of the Gemini protocol,
//! to a complete HTML document.
//!
//! + Single forward pass over the lines, no intermediate tree.
//! + Never fails: anything that isn't valid gemtext is rendered as escaped text.
//! + Renders straight into a `String` or any `std::io::Write`.
//!
//! ```rust
//! let html = gemtext::transcode("# Hello\n=> gemini://example.org/ Example <site>");
//!
//! assert!(html.contains("<h1># Hello</h1>"));
//! assert!(html.contains("<a href=\"gemini://example.org/\">Example &lt;site&gt;</a>"));
//! ```
//!
//! Retrieving documents and displaying the result is left to the caller. The
//! [`Fetch`](./trait.Fetch.html) trait and [`data_for_url`](./fn.data_for_url.html)
//! connect the two ends:
//!
//! ```rust
//! use std::io;
//!
//! let fetch = |_url: &str| -> io::Result<String> { Ok("> quoted".into()) };
//! let response = gemtext::data_for_url(&fetch, "gemini://example.org/").unwrap();
//!
//! assert_eq!(response.mime, "text/html");
//! ```

#![warn(missing_docs)]

mod encoding;
mod error;
mod line;
mod response;
mod transcoder;

pub use encoding::{escape, Encoder, NeverError};
pub use error::Error;
pub use line::{Line, Link};
pub use response::{data_for_url, Fetch, Response, MIME};
pub use transcoder::{Transcoder, STYLESHEET};

/// Transcode gemtext to an HTML document with the default options.
pub fn transcode(source: &str) -> String {
    Transcoder::default().transcode(source)
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The seam between the transcoder and whatever retrieves gemtext and
//! displays the resulting HTML.

use std::error;

use crate::{Error, Transcoder};

/// MIME type of every transcoded document.
pub const MIME: &str = "text/html";

/// A transcoded document, ready to be handed to whatever displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Always `MIME`.
    pub mime: &'static str,

    /// UTF-8 encoded HTML.
    pub body: Vec<u8>,
}

impl Response {
    /// Transcode `source` with the default options.
    pub fn from_gemtext(source: &str) -> Self {
        Transcoder::default().response(source)
    }
}

/// Source of gemtext for a given URL. Implemented for any closure taking the URL,
/// so network clients can be plugged in without a wrapper type.
pub trait Fetch {
    /// Error type for this fetcher
    type Error: error::Error + Send + Sync + 'static;

    /// Obtain the decoded gemtext for `url`.
    fn fetch(&self, url: &str) -> Result<String, Self::Error>;
}

impl<F, E> Fetch for F
where
    F: Fn(&str) -> Result<String, E>,
    E: error::Error + Send + Sync + 'static,
{
    type Error = E;

    #[inline]
    fn fetch(&self, url: &str) -> Result<String, E> {
        self(url)
    }
}

impl Transcoder {
    /// Transcode `source` into a `Response`.
    pub fn response(&self, source: &str) -> Response {
        Response {
            mime: MIME,
            body: self.transcode(source).into_bytes(),
        }
    }

    /// Fetch the gemtext for `url` and transcode it into a `Response`.
    pub fn data_for_url<F: Fetch>(&self, fetch: &F, url: &str) -> Result<Response, Error> {
        log::debug!(target: "gemtext::network", "Got request for {}", url);

        let source = fetch.fetch(url).map_err(|err| {
            log::error!(target: "gemtext::network", "Fetching {} failed: {}", url, err);

            Error::Fetch {
                url: url.into(),
                source: Box::new(err),
            }
        })?;

        log::debug!(target: "gemtext::network", "Fetched {} bytes of gemtext", source.len());

        let response = self.response(&source);

        log::debug!(target: "gemtext::network", "Returning {} bytes of {}", response.body.len(), response.mime);

        Ok(response)
    }
}

/// Fetch the gemtext for `url` and transcode it with the default options.
///
/// ```
/// use std::io;
///
/// let fetch = |url: &str| -> io::Result<String> {
///     Ok(format!("# {}\n=> gemini://example.org/ Home", url))
/// };
///
/// let response = gemtext::data_for_url(&fetch, "gemini://example.org/page").unwrap();
///
/// assert_eq!(response.mime, "text/html");
/// ```
pub fn data_for_url<F: Fetch>(fetch: &F, url: &str) -> Result<Response, Error> {
    Transcoder::default().data_for_url(fetch, url)
}

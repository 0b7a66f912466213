// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{error, fmt};

/// Error type used that can be emitted when serving a transcoded document.
/// Transcoding itself never fails.
#[derive(Debug)]
pub enum Error {
    /// The gemtext source for `url` couldn't be obtained.
    Fetch {
        /// Requested URL.
        url: String,
        /// Error returned by the `Fetch` implementor.
        source: Box<dyn error::Error + Send + Sync>,
    },
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Fetch { source, .. } => Some(&**source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Fetch { url, source } => write!(f, "Failed to fetch {}: {}", url, source),
        }
    }
}

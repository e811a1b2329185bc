//! Decoded HTTP request.
use std::fmt;

use bytes::Bytes;

use crate::headers::HeaderMap;

/// Length of the body snippet rendered by `Debug`.
const PREVIEW_LEN: usize = 100;

/// One complete request extracted from the byte stream.
///
/// Produced by the framer once the header block and the declared body have
/// fully arrived; immutable afterwards. The body holds either exactly
/// `Content-Length` bytes or nothing, no other framing mode exists.
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    /// Method token, verbatim from the request line.
    pub method: String,
    /// Request target, an opaque path and query string.
    pub target: String,
    /// Protocol version token, verbatim from the request line.
    pub version: String,
    /// Decoded header fields.
    pub headers: HeaderMap,
    /// Message body.
    pub body: Bytes,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = &self.body[..self.body.len().min(PREVIEW_LEN)];

        f.debug_struct("Request")
            .field("method", &self.method)
            .field("target", &self.target)
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("body", &String::from_utf8_lossy(preview))
            .finish()
    }
}

//! HTTP response payload.
use bytes::Bytes;

use crate::http::StatusCode;

/// Response written back to the peer.
///
/// The wire shape is fixed: plain text content, explicit `Content-Length`,
/// and `Connection: close`. See [`write_response`].
///
/// [`write_response`]: crate::h1::write_response
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// Response status.
    pub status: StatusCode,
    /// Response body.
    pub body: Bytes,
}

impl Response {
    /// Create a response with the given status and body.
    #[inline]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Create a response whose body is the status message itself.
    #[inline]
    pub fn from_status(status: StatusCode) -> Self {
        Self::new(status, status.message())
    }
}

//! Message framing over accumulated bytes.
use std::mem;

use super::error::ParseError;
use super::parser::{self, Reqline};
use crate::buffer::RecvBuffer;
use crate::common::ParseResult;
use crate::headers::HeaderMap;
use crate::request::Request;

/// Stateful framer extracting one request from accumulated bytes.
///
/// [`try_frame`] may be called any number of times as bytes arrive. A
/// [`Pending`] outcome leaves the buffer untouched, with one exception: a
/// fully received header block is consumed and decoded exactly once, then
/// retained in the framer across body waits, so re-invocations resume at
/// the body stage instead of re-reading the head from the wire.
///
/// [`try_frame`]: RequestFramer::try_frame
/// [`Pending`]: ParseResult::Pending
#[derive(Debug, Default)]
pub struct RequestFramer {
    state: FrameState,
}

#[derive(Debug, Default)]
enum FrameState {
    /// Scanning for the end of the header block.
    #[default]
    Head,
    /// Header block consumed and decoded, body bytes still arriving.
    Body {
        reqline: Reqline,
        headers: HeaderMap,
        content_len: usize,
    },
}

impl RequestFramer {
    /// Create a framer waiting for a header block.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to extract one complete request from `buf`.
    ///
    /// Returns [`ParseResult::Pending`] until the header block and the
    /// declared body have fully arrived; repeated calls on an unchanged
    /// buffer keep returning `Pending`. A [`ParseResult::Err`] is terminal
    /// and must not be retried. Bytes beyond the extracted frame stay in
    /// `buf`.
    pub fn try_frame(&mut self, buf: &mut RecvBuffer) -> ParseResult<Request, ParseError> {
        if let FrameState::Head = self.state {
            if buf.is_empty() {
                return ParseResult::Pending;
            }

            let Some(end) = parser::find_header_end(buf.as_slice()) else {
                return ParseResult::Pending;
            };

            // The head is consumed here and never re-requested from the
            // wire; failures past this point are terminal.
            let head = buf.take(end);
            buf.consume(parser::HEAD_END.len());

            let (reqline, headers) = match decode_head(&head) {
                Ok(ok) => ok,
                Err(err) => return ParseResult::Err(err),
            };

            let content_len = match decode_content_len(&headers) {
                Ok(ok) => ok,
                Err(err) => return ParseResult::Err(err),
            };

            self.state = FrameState::Body {
                reqline,
                headers,
                content_len,
            };
        }

        let FrameState::Body { content_len, .. } = &self.state else {
            unreachable!("head state always advances to body");
        };

        if buf.len() < *content_len {
            return ParseResult::Pending;
        }

        let FrameState::Body {
            reqline,
            headers,
            content_len,
        } = mem::take(&mut self.state)
        else {
            unreachable!();
        };

        let body = buf.take(content_len);

        ParseResult::Ok(Request {
            method: reqline.method,
            target: reqline.target,
            version: reqline.version,
            headers,
            body,
        })
    }
}

fn decode_head(head: &[u8]) -> Result<(Reqline, HeaderMap), ParseError> {
    let text = str::from_utf8(head).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = text.split("\r\n").filter(|line| !line.is_empty());

    let Some(start) = lines.next() else {
        return Err(ParseError::EmptyMessage);
    };

    let reqline = parser::decode_reqline(start)?;
    let headers = parser::decode_headers(lines)?;

    Ok((reqline, headers))
}

// Absent `Content-Length` means an empty body; a declared length that does
// not parse as a non-negative integer is rejected rather than defaulted.
fn decode_content_len(headers: &HeaderMap) -> Result<usize, ParseError> {
    match headers.get("content-length") {
        Some(value) => value.parse().map_err(|_| ParseError::InvalidContentLength),
        None => Ok(0),
    }
}

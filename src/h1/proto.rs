//! Response wire encoding.
use bytes::BytesMut;

use crate::response::Response;

/// Render `res` into `buf` in the fixed response shape.
///
/// ```text
/// HTTP/1.1 <status> <reason>\r\n
/// Content-Type: text/plain\r\n
/// Content-Length: <n>\r\n
/// Connection: close\r\n
/// \r\n
/// <body>
/// ```
pub fn write_response(res: &Response, buf: &mut BytesMut) {
    buf.reserve(128 + res.body.len());

    buf.extend_from_slice(b"HTTP/1.1 ");
    buf.extend_from_slice(res.status.as_str().as_bytes());
    buf.extend_from_slice(b"\r\nContent-Type: text/plain");
    buf.extend_from_slice(b"\r\nContent-Length: ");
    buf.extend_from_slice(itoa::Buffer::new().format(res.body.len()).as_bytes());
    buf.extend_from_slice(b"\r\nConnection: close\r\n\r\n");
    buf.extend_from_slice(&res.body);
}

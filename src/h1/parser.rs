//! Request head decoding.
//!
//! The framer locates the header block within the accumulated bytes; the
//! functions here turn its decoded text into structured values. They are
//! pure and carry no buffer state.
use super::error::ParseError;
use crate::headers::HeaderMap;

/// End-of-head separator.
pub(crate) const HEAD_END: &[u8; 4] = b"\r\n\r\n";

/// Decoded request line.
///
/// Tokens are kept verbatim: no percent decoding and no validation against
/// a known method or version set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reqline {
    /// Method token.
    pub method: String,
    /// Request target token.
    pub target: String,
    /// Protocol version token.
    pub version: String,
}

/// Locate the CRLFCRLF separator.
///
/// Returns the offset where the separator starts. The separator may span
/// fragment boundaries, so the scan always covers the whole buffer, never
/// just the newest chunk.
pub fn find_header_end(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(HEAD_END.len())
        .position(|window| window == HEAD_END)
}

/// Decode a request line into its three tokens.
///
/// The line is trimmed and split on single spaces; exactly three non-empty
/// tokens are required.
pub fn decode_reqline(line: &str) -> Result<Reqline, ParseError> {
    let mut tokens = line.trim().split(' ');

    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(method), Some(target), Some(version), None)
            if !method.is_empty() && !target.is_empty() && !version.is_empty() =>
        {
            Ok(Reqline {
                method: method.into(),
                target: target.into(),
                version: version.into(),
            })
        }
        _ => Err(ParseError::InvalidRequestLine),
    }
}

/// Decode one header line into a lower-cased name and a trimmed value.
///
/// The first colon separates name from value; a line without one can never
/// be a header field.
pub fn decode_header(line: &str) -> Result<(String, String), ParseError> {
    let Some((name, value)) = line.split_once(':') else {
        return Err(ParseError::InvalidHeader);
    };

    let mut name = name.trim().to_owned();
    name.make_ascii_lowercase();

    Ok((name, value.trim().to_owned()))
}

/// Decode header lines into a map. Later duplicate names replace earlier
/// ones.
pub fn decode_headers<'a, I>(lines: I) -> Result<HeaderMap, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut headers = HeaderMap::new();

    for line in lines {
        let (name, value) = decode_header(line)?;
        headers.insert(name, value);
    }

    Ok(headers)
}

//! HTTP/1.1 framing and connection driving.
//!
//! [`RequestFramer::try_frame`] works on accumulated bytes: given whatever
//! has arrived so far, it either extracts one complete request, reports
//! [`ParseResult::Pending`] when more bytes are required, or fails with a
//! terminal [`ParseError`]. [`serve_connection`] is the per-connection loop
//! feeding it from a stream transport.
//!
//! [`RequestFramer::try_frame`]: RequestFramer::try_frame
//! [`ParseResult::Pending`]: crate::common::ParseResult::Pending
mod connection;
mod error;
mod framer;
pub mod parser;
mod proto;


pub use connection::serve_connection;
pub use error::ParseError;
pub use framer::RequestFramer;
pub use proto::write_response;

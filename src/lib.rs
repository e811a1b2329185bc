//! HTTP/1.1 request framing over stream transports.
//!
//! Stream transports deliver bytes in arbitrary fragments with no message
//! boundaries. [`RecvBuffer`] accumulates the fragments, [`RequestFramer`]
//! judges when one complete request has arrived and decodes it, and
//! [`serve_connection`] drives a single connection from first byte to
//! response. Each connection owns its buffer and framer; nothing is shared
//! across connections.
//!
//! [`RecvBuffer`]: buffer::RecvBuffer
//! [`RequestFramer`]: h1::RequestFramer
//! [`serve_connection`]: h1::serve_connection
#![warn(missing_debug_implementations)]

mod log;

pub mod buffer;
pub mod common;
pub mod h1;
pub mod headers;
pub mod http;
pub mod request;
pub mod response;
pub mod rt;
pub mod service;

pub use self::h1::RequestFramer;
pub use self::request::Request;
pub use self::response::Response;

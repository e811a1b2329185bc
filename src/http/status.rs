use std::num::NonZeroU16;

/// HTTP response [status code][rfc].
///
/// Only the codes this crate responds with are represented.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

macro_rules! status_codes {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            /// Returns status code value, e.g: `200`.
            #[inline]
            pub const fn status(&self) -> u16 {
                self.0.get()
            }

            /// Returns status code and message as string slice, e.g: `"200 OK"`.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => concat!(stringify!($int)," ",$msg),
                    )*
                    // SAFETY: StatusCode value is privately constructed and immutable
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }

            /// Returns status message, e.g: `"OK"`.
            #[inline]
            pub const fn message(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => $msg,
                    )*
                    // SAFETY: StatusCode value is privately constructed and immutable
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*
        }
    };
}

status_codes! {
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `400`. The received bytes could not be framed or decoded as a request.
    400 BAD_REQUEST "Bad Request";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `413`. The request frame is larger than this server is willing to buffer.
    413 CONTENT_TOO_LARGE "Content Too Large";
    /// `500`. Something else went wrong while handling the request.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.as_str()).finish()
    }
}

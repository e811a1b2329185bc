//! Dispatch seam between the connection driver and request handlers.
use std::convert::Infallible;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use crate::request::Request;
use crate::response::Response;

// ===== Service =====

/// Request handling collaborator.
///
/// The driver dispatches one framed [`Request`] and writes back the
/// returned [`Response`]; a service error is answered as
/// `500 Internal Server Error`.
pub trait Service {
    /// Dispatch failure, surfaced to the peer as an internal error.
    type Error;

    /// Response future.
    type Future: Future<Output = Result<Response, Self::Error>>;

    /// Handle one request.
    fn call(&self, request: Request) -> Self::Future;
}

// ===== FromFn =====

/// Create a [`Service`] from an async function.
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}

/// [`Service`] for the [`from_fn`] constructor.
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F, Fut> Service for FromFn<F>
where
    F: Fn(Request) -> Fut,
    Fut: Future<Output = Response>,
{
    type Error = Infallible;
    type Future = MapInfallible<Fut>;

    fn call(&self, request: Request) -> Self::Future {
        MapInfallible {
            inner: (self.f)(request),
        }
    }
}

/// Map a future output into `Result<T, Infallible>`.
pub struct MapInfallible<F> {
    inner: F,
}

impl<F> Future for MapInfallible<F>
where
    F: Future,
{
    type Output = Result<F::Output, Infallible>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // SAFETY: `inner` is pinned when `self` is, no custom Drop and Unpin
        let inner = unsafe { self.map_unchecked_mut(|me| &mut me.inner) };
        Poll::Ready(Ok(ready!(inner.poll(cx))))
    }
}

impl<F> fmt::Debug for MapInfallible<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapInfallible").finish_non_exhaustive()
    }
}

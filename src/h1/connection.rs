//! Per-connection read, frame, dispatch loop.
use std::io;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use super::framer::RequestFramer;
use super::proto;
use crate::buffer::RecvBuffer;
use crate::common::ParseResult;
use crate::http::StatusCode;
use crate::log::{debug, error, warning};
use crate::response::Response;
use crate::service::Service;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_BUFFER_CAP: usize = 1024;

/// Largest frame the driver will buffer before answering 413.
const MAX_FRAME_CAP: usize = 1024 * 1024;

/// Drive one connection to completion.
///
/// Reads chunks as the transport delivers them, frames exactly one request,
/// dispatches it to `service` and writes the response. Reads are strictly
/// sequential: the next chunk is not requested until the previous one has
/// been appended and judged.
///
/// The connection always closes afterwards, whichever path was taken:
/// request served, malformed input answered with `400`, service failure
/// answered with `500`, or transport error. `io` is dropped exactly once on
/// every path.
pub async fn serve_connection<IO, S>(mut io: IO, service: &S)
where
    IO: AsyncRead + AsyncWrite + Unpin,
    S: Service,
    S::Error: Into<BoxError>,
{
    if let Err(err) = try_serve(&mut io, service).await {
        debug!("connection terminated: {err}");
    }
}

async fn try_serve<IO, S>(io: &mut IO, service: &S) -> io::Result<()>
where
    IO: AsyncRead + AsyncWrite + Unpin,
    S: Service,
    S::Error: Into<BoxError>,
{
    let mut buffer = RecvBuffer::with_capacity(DEFAULT_BUFFER_CAP);
    let mut framer = RequestFramer::new();

    let request = loop {
        match framer.try_frame(&mut buffer) {
            ParseResult::Ok(request) => break request,
            ParseResult::Err(err) => {
                warning!("invalid request: {err}");
                return respond(io, Response::from_status(StatusCode::BAD_REQUEST)).await;
            }
            ParseResult::Pending => {
                if buffer.len() > MAX_FRAME_CAP {
                    return respond(io, Response::from_status(StatusCode::CONTENT_TOO_LARGE))
                        .await;
                }

                let read = io.read_buf(buffer.bytes_mut()).await?;
                if read == 0 {
                    // natural close before a full frame arrived
                    return Ok(());
                }
            }
        }
    };

    debug!("request: {} {}", request.method, request.target);

    let response = match service.call(request).await {
        Ok(ok) => ok,
        Err(err) => {
            let err: BoxError = err.into();
            error!("service error: {err}");
            Response::from_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    respond(io, response).await
}

async fn respond<IO>(io: &mut IO, response: Response) -> io::Result<()>
where
    IO: AsyncWrite + Unpin,
{
    let mut buf = BytesMut::new();
    proto::write_response(&response, &mut buf);

    io.write_all(&buf).await?;
    io.shutdown().await
}

#[cfg(test)]
mod test {
    use std::io;

    use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};

    use super::serve_connection;
    use crate::http::StatusCode;
    use crate::request::Request;
    use crate::response::Response;
    use crate::service::{self, Service};

    async fn hello(request: Request) -> Response {
        Response::new(
            StatusCode::OK,
            format!("{} {}", request.method, request.target),
        )
    }

    #[tokio::test]
    async fn serves_one_request() {
        let (mut client, server) = duplex(256);
        let service = service::from_fn(hello);

        let ((), out) = tokio::join!(serve_connection(server, &service), async move {
            client
                .write_all(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n")
                .await
                .unwrap();

            let mut out = Vec::new();
            client.read_to_end(&mut out).await.unwrap();
            out
        });

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "HTTP/1.1 200 OK\r\n\
             Content-Type: text/plain\r\n\
             Content-Length: 15\r\n\
             Connection: close\r\n\
             \r\n\
             GET /index.html",
        );
    }

    #[tokio::test]
    async fn serves_request_delivered_in_tiny_chunks() {
        // a pipe this small forces the driver through many incomplete reads
        let (mut client, server) = duplex(8);
        let service = service::from_fn(hello);

        let ((), out) = tokio::join!(serve_connection(server, &service), async move {
            client
                .write_all(b"POST /submit HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello")
                .await
                .unwrap();

            let mut out = Vec::new();
            client.read_to_end(&mut out).await.unwrap();
            out
        });

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("HTTP/1.1 200 OK\r\n"), "{out}");
        assert!(out.ends_with("POST /submit"), "{out}");
    }

    #[tokio::test]
    async fn answers_malformed_request_with_400() {
        let (mut client, server) = duplex(256);
        let service = service::from_fn(hello);

        let ((), out) = tokio::join!(serve_connection(server, &service), async move {
            client.write_all(b"BOGUS\r\n\r\n").await.unwrap();

            let mut out = Vec::new();
            client.read_to_end(&mut out).await.unwrap();
            out
        });

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "HTTP/1.1 400 Bad Request\r\n\
             Content-Type: text/plain\r\n\
             Content-Length: 11\r\n\
             Connection: close\r\n\
             \r\n\
             Bad Request",
        );
    }

    #[tokio::test]
    async fn answers_colonless_header_with_400() {
        let (mut client, server) = duplex(256);
        let service = service::from_fn(hello);

        let ((), out) = tokio::join!(serve_connection(server, &service), async move {
            client
                .write_all(b"GET / HTTP/1.1\r\nno colon here\r\n\r\n")
                .await
                .unwrap();

            let mut out = Vec::new();
            client.read_to_end(&mut out).await.unwrap();
            out
        });

        assert!(
            String::from_utf8(out)
                .unwrap()
                .starts_with("HTTP/1.1 400 Bad Request\r\n")
        );
    }

    #[tokio::test]
    async fn answers_service_failure_with_500() {
        struct Failing;

        impl Service for Failing {
            type Error = io::Error;
            type Future = std::future::Ready<Result<Response, io::Error>>;

            fn call(&self, _request: Request) -> Self::Future {
                std::future::ready(Err(io::Error::other("boom")))
            }
        }

        let (mut client, server) = duplex(256);

        let ((), out) = tokio::join!(serve_connection(server, &Failing), async move {
            client
                .write_all(b"GET / HTTP/1.1\r\n\r\n")
                .await
                .unwrap();

            let mut out = Vec::new();
            client.read_to_end(&mut out).await.unwrap();
            out
        });

        assert!(
            String::from_utf8(out)
                .unwrap()
                .starts_with("HTTP/1.1 500 Internal Server Error\r\n")
        );
    }

    #[tokio::test]
    async fn closes_silently_on_early_end_of_stream() {
        let (mut client, server) = duplex(256);
        let service = service::from_fn(hello);

        let ((), out) = tokio::join!(serve_connection(server, &service), async move {
            client.write_all(b"GET / HT").await.unwrap();
            client.shutdown().await.unwrap();

            let mut out = Vec::new();
            client.read_to_end(&mut out).await.unwrap();
            out
        });

        assert!(out.is_empty());
    }
}

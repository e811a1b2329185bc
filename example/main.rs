use waku::http::StatusCode;
use waku::service::from_fn;
use waku::{Request, Response};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    waku::rt::listen("0.0.0.0:8000", from_fn(hello)).await
}

async fn hello(request: Request) -> Response {
    Response::new(
        StatusCode::OK,
        format!("Hello! You requested: {} {}\n", request.method, request.target),
    )
}

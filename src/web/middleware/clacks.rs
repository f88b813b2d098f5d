//! `X-Clacks-Overhead` on every response.
//!
//! GNU Terry Pratchett. A name carried in the overhead is never lost.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::response::Response;
use std::task::{Context, Poll};
use tower::{Layer, Service};

static CLACKS: HeaderValue = HeaderValue::from_static("GNU Terry Pratchett");

#[derive(Clone)]
pub struct ClacksOverheadLayer;

impl<S> Layer<S> for ClacksOverheadLayer {
    type Service = ClacksOverheadService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClacksOverheadService { inner }
    }
}

#[derive(Clone)]
pub struct ClacksOverheadService<S> {
    inner: S,
}

impl<S, B> Service<Request> for ClacksOverheadService<S>
where
    S: Service<Request, Response = Response<B>> + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Debug,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let future = self.inner.call(req);

        Box::pin(async move {
            let mut response = future.await?;
            response
                .headers_mut()
                .insert("x-clacks-overhead", CLACKS.clone());
            Ok(response)
        })
    }
}

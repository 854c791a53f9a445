//! Lambda adapter: one inbound event becomes one call into the same router.

use axum::Router;
use axum::extract::{ConnectInfo, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use lambda_http::request::RequestContext;
use std::net::{IpAddr, SocketAddr};
use crate::error::ServiceError;
use crate::{AppState, app};

pub fn router(state: AppState) -> Router {

    app(state).layer(middleware::from_fn(attach_source_ip))

}

pub async fn run(state: AppState) -> Result<(), ServiceError> {

    tracing::info!("starting lambda adapter");

    lambda_http::run(router(state))
        .await
        .map_err(|e| ServiceError::Lambda(e.to_string()))

}

/// The caller address as reported by the front door, if it reports one.
pub fn source_ip(context: &RequestContext) -> Option<IpAddr> {

    let raw = match context {
        RequestContext::ApiGatewayV2(ctx) => ctx.http.source_ip.as_deref(),
        RequestContext::ApiGatewayV1(ctx) => ctx.identity.source_ip.as_deref(),
        _ => None
    };

    raw.and_then(|ip| ip.trim().parse().ok())

}

// there is no socket under lambda, so the event's source ip stands in as the peer
async fn attach_source_ip(mut request: Request, next: Next) -> Response {

    let ip = request
        .extensions()
        .get::<RequestContext>()
        .and_then(source_ip);

    if let Some(ip) = ip {
        request.extensions_mut().insert(ConnectInfo(SocketAddr::new(ip, 0)));
    }

    next.run(request).await

}

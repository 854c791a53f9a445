use axum::Json;
use axum::extract::{ConnectInfo, State};
use std::net::SocketAddr;
use crate::AppState;
use crate::models::TimeIpResponse;

// reported when the transport gives us no peer address
pub const UNKNOWN_PEER: &str = "unknown";

pub async fn get_time_and_ip(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>
) -> Json<TimeIpResponse> {

    let now = state.clock.now();

    let ip = match connect_info {
        Some(ConnectInfo(addr)) => addr.ip().to_string(),
        None => UNKNOWN_PEER.to_string()
    };

    tracing::debug!(%ip, "serving time and ip");

    Json(TimeIpResponse::new(now, ip))

}

use reqwest::{Client, Response};
use simple_time_service::models::TimeIpResponse;
use simple_time_service::{AppState, server};
use std::net::SocketAddr;
use std::time::Duration;

pub const ENDPOINT_ENV: &str = "API_ENDPOINT";

// targets API_ENDPOINT when set, otherwise a fresh server on a loopback port
pub async fn endpoint() -> String {

    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
        return endpoint.trim_end_matches('/').to_string();
    }

    let listener = server::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(server::serve_until(listener, AppState::default(), std::future::pending()));

    format!("http://{}", addr)

}

pub async fn get_root(client: &Client, endpoint: &str) -> Result<Response, reqwest::Error> {

    client
        .get(format!("{}/", endpoint))
        .timeout(Duration::from_secs(5))
        .send()
        .await

}

pub async fn fetch_time_ip(client: &Client, endpoint: &str) -> Result<TimeIpResponse, reqwest::Error> {

    let response: TimeIpResponse = get_root(client, endpoint)
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response)

}

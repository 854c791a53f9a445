use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use crate::error::ServiceError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;

// set by the AWS Lambda runtime inside every function sandbox
pub const LAMBDA_RUNTIME_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

/// Standalone server settings, read from `HOST` and `PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr
}

impl Config {

    pub fn from_env() -> Result<Self, ServiceError> {

        Self::from_lookup(|key| std::env::var(key).ok())

    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServiceError> {

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>()
                .map_err(|_| ServiceError::InvalidHost(raw))?,
            None => DEFAULT_HOST
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>()
                .map_err(|_| ServiceError::InvalidPort(raw))?,
            None => DEFAULT_PORT
        };

        Ok(Config { bind_addr: SocketAddr::new(host, port) })

    }

}

impl Default for Config {

    fn default() -> Self {

        Config { bind_addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT) }

    }

}

pub fn serverless_runtime_present() -> bool {

    std::env::var_os(LAMBDA_RUNTIME_ENV).is_some()

}

use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: String,
    pub secret_key: Option<String>,
    pub token_ttl: Duration,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("CENTIME_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8425".to_string())
            .parse()
            .expect("Invalid CENTIME_ADDR");
        let data_dir = std::env::var("CENTIME_DB_PATH").unwrap_or_else(|_| "./data".into());
        let secret_key = std::env::var("CENTIME_SECRET_KEY").ok();
        let token_ttl_secs: u64 = std::env::var("CENTIME_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .unwrap_or(86400);
        let cors_allow = std::env::var("CENTIME_CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("CENTIME_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            data_dir,
            secret_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

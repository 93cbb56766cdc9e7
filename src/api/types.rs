// API response types

use serde::Serialize;

/// Body for `GET /`
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub server: String,
    pub hostname: String,
    pub port: u16,
    pub requests: u64,
    pub timestamp: String,
    pub message: String,
}

/// Body for `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server: String,
}

/// Body for `GET /stats`
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub server: String,
    pub hostname: String,
    pub uptime: u64,
    pub requests: u64,
    pub memory: u64,
    pub timestamp: String,
}

/// Body for `GET /slow` and `POST /crash`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub server: String,
    pub message: String,
}

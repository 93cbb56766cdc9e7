// Diagnostic endpoint handlers
//
// Every handler responds with JSON and shares the same `AppState`. Only the
// root handler mutates it (the request counter); the rest are read-only.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::convert::Infallible;
use std::time::Duration;

use super::response::json_response;
use super::types::{HealthResponse, MessageResponse, RootResponse, StatsResponse};
use crate::logger;
use crate::state::AppState;
use crate::system;

/// Artificial latency applied by the slow endpoint
pub const SLOW_DELAY: Duration = Duration::from_millis(2000);

/// Root endpoint: greets the caller and counts the request
pub fn root(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    let requests = state.record_request();
    let server = state.config.server_name.clone();

    let body = RootResponse {
        hostname: system::hostname(),
        port: state.config.port,
        requests,
        timestamp: system::timestamp(),
        message: format!("Hello from {server}!"),
        server,
    };

    logger::log_request("GET", "/", 200);
    json_response(StatusCode::OK, &body)
}

/// Health endpoint: pure liveness probe, never fails while the process lives
pub fn health(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    let body = HealthResponse {
        status: "healthy",
        server: state.config.server_name.clone(),
    };

    logger::log_request("GET", "/health", 200);
    json_response(StatusCode::OK, &body)
}

/// Stats endpoint: uptime, counter snapshot, and resident memory.
/// Reads the counter without incrementing it.
pub fn stats(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    let body = StatsResponse {
        server: state.config.server_name.clone(),
        hostname: system::hostname(),
        uptime: state.uptime_secs(),
        requests: state.request_total(),
        memory: system::memory_mib(),
        timestamp: system::timestamp(),
    };

    logger::log_request("GET", "/stats", 200);
    json_response(StatusCode::OK, &body)
}

/// Slow endpoint: fixed delay before responding. The sleep suspends only
/// this request; concurrent requests keep being served.
pub async fn slow(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    tokio::time::sleep(SLOW_DELAY).await;

    let body = MessageResponse {
        server: state.config.server_name.clone(),
        message: "Slow response".to_string(),
    };

    logger::log_request("GET", "/slow", 200);
    json_response(StatusCode::OK, &body)
}

/// Crash endpoint: acknowledges with 200, then signals the server loop to
/// schedule the fatal exit. The caller gets its response before the
/// process terminates.
pub fn crash(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    logger::log_crash_requested(&state.config.server_name);
    state.crash_signal.notify_one();

    let body = MessageResponse {
        server: state.config.server_name.clone(),
        message: "Crashing in 500ms...".to_string(),
    };

    logger::log_request("POST", "/crash", 200);
    json_response(StatusCode::OK, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use std::sync::Arc;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config {
            server_name: "test-server".to_string(),
            port: 3000,
        }))
    }

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_increments_counter_per_call() {
        let state = test_state();
        for expected in 1..=3 {
            let resp = root(&state).unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
            let body = body_json(resp).await;
            assert_eq!(body["requests"], expected);
        }
    }

    #[tokio::test]
    async fn test_root_reports_identity_and_greeting() {
        let state = test_state();
        let body = body_json(root(&state).unwrap()).await;
        assert_eq!(body["server"], "test-server");
        assert_eq!(body["port"], 3000);
        assert_eq!(body["message"], "Hello from test-server!");
        assert!(body["hostname"].is_string());
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_health_is_pure_and_healthy() {
        let state = test_state();
        for _ in 0..3 {
            let body = body_json(health(&state).unwrap()).await;
            assert_eq!(body["status"], "healthy");
            assert_eq!(body["server"], "test-server");
        }
        // No call above touched the counter
        assert_eq!(state.request_total(), 0);
    }

    #[tokio::test]
    async fn test_stats_reads_counter_without_incrementing() {
        let state = test_state();
        root(&state).unwrap();
        root(&state).unwrap();
        for _ in 0..5 {
            let body = body_json(stats(&state).unwrap()).await;
            assert_eq!(body["requests"], 2);
        }
    }

    #[tokio::test]
    async fn test_stats_reports_uptime_and_memory() {
        let state = test_state();
        let body = body_json(stats(&state).unwrap()).await;
        assert!(body["uptime"].is_u64());
        // The test process itself is resident in memory
        assert!(body["memory"].as_u64().unwrap() > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_not_ready_before_delay() {
        let state = test_state();
        let early = tokio::time::timeout(SLOW_DELAY - Duration::from_millis(1), slow(&state)).await;
        assert!(early.is_err(), "slow response observed before the delay");

        let resp = slow(&state).await.unwrap();
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Slow response");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_does_not_block_health() {
        let state = test_state();
        let slow_task = tokio::spawn({
            let state = Arc::clone(&state);
            async move { slow(&state).await }
        });

        // Served immediately while the slow request is still suspended
        let body = body_json(health(&state).unwrap()).await;
        assert_eq!(body["status"], "healthy");

        let resp = slow_task.await.unwrap().unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_crash_acknowledges_then_signals() {
        let state = test_state();
        let resp = crash(&state).unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Crashing in 500ms...");
        assert_eq!(body["server"], "test-server");

        // The signal permit was stored; the server loop would pick it up
        tokio::time::timeout(Duration::from_millis(100), state.crash_signal.notified())
            .await
            .expect("crash signal was not fired");
    }
}

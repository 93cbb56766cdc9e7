// Logger module
// Plain stdout/stderr console logging; the demo carries no logging framework.

use crate::config::Config;

pub fn log_server_start(config: &Config) {
    println!("======================================");
    println!("{} running on port {}", config.server_name, config.port);
    println!("Listening on: http://0.0.0.0:{}", config.port);
    println!("======================================");
}

/// Access line for a handled request
pub fn log_request(method: &str, path: &str, status: u16) {
    println!("{method} {path} - {status}");
}

/// Operator-visible diagnostic emitted when the crash endpoint is hit
pub fn log_crash_requested(server_name: &str) {
    println!("{server_name} received crash request, shutting down!");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

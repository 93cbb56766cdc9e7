// Server module
// Accept loop, per-connection serving, and crash scheduling

mod listener;

pub use listener::create_reusable_listener;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};

use crate::api;
use crate::logger;
use crate::state::AppState;

/// Delay between the crash acknowledgement and the fatal exit
const CRASH_EXIT_DELAY: Duration = Duration::from_millis(500);

/// Exit status reported when the crash endpoint terminates the process
const CRASH_EXIT_CODE: i32 = 1;

/// Accept connections until the process is torn down.
///
/// The crash arm schedules the exit on its own task, so the loop keeps
/// accepting and serving until the deadline. In-flight requests are
/// abandoned when the process exits.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let crash_signal = Arc::clone(&state.crash_signal);
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = crash_signal.notified() => {
                schedule_exit(CRASH_EXIT_DELAY, CRASH_EXIT_CODE);
            }
        }
    }
}

/// Serve a single HTTP/1.1 connection on its own task
fn handle_connection(stream: TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| api::handle_request(req, Arc::clone(&state))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Terminate the process after the delay. Fires once; cannot be cancelled.
fn schedule_exit(delay: Duration, code: i32) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        std::process::exit(code);
    });
}

use std::sync::Arc;

mod api;
mod config;
mod logger;
mod server;
mod state;
mod system;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(state::AppState::new(cfg));
    logger::log_server_start(&state.config);

    server::run(listener, state).await
}

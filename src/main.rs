mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: config file path without extension
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;

    // The root is fixed here, before anything else can change the working directory
    let root = cfg.root_dir()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime; worker count follows the config when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, root))
}

async fn async_main(
    cfg: config::Config,
    root: std::path::PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let state = config::AppState::shared(&cfg, root);

    logger::log_server_start(&addr, state.resolver.root(), &cfg);

    server::serve(listener, state, server::shutdown_signal()).await;
    Ok(())
}

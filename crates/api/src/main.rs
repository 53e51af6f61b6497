//! Worktrack API server entry point

use std::sync::Arc;

use tracing::info;
use worktrack_api::context::AppContext;
use worktrack_api::{logging, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the logging filter reads the environment
    let dotenv_path = dotenvy::dotenv().ok();
    logging::init();
    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "loaded .env file");
    }

    let config = worktrack_infra::config::load()?;
    let ctx = Arc::new(AppContext::new(config)?);
    let app = routes::router(Arc::clone(&ctx));

    let addr = format!("{}:{}", ctx.config.server.host, ctx.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "worktrack api listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("worktrack api stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

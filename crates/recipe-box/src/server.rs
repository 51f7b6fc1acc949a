//! Server lifecycle: bind, serve in the background, shut down gracefully

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::router::create_router;
use crate::store::{seed_recipes, RecipeStore};
use crate::AppState;

/// A running recipe server. Dropping it without calling [`RecipeServer::close`]
/// leaves the server task running until the runtime stops.
pub struct RecipeServer {
    addr: SocketAddr,
    state: Arc<AppState>,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

/// Bind the listener, spawn the HTTP server and return once it accepts connections
pub async fn run_server(config: &AppConfig) -> Result<RecipeServer> {
    let store = if config.seed_recipes {
        RecipeStore::with_recipes(seed_recipes())?
    } else {
        RecipeStore::new()
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!("Recipe server listening on {}", addr);

    let app = create_router(state.clone());
    let (shutdown, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    Ok(RecipeServer {
        addr,
        state,
        shutdown,
        handle,
    })
}

impl RecipeServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL for clients, e.g. `http://127.0.0.1:41234`
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn store(&self) -> &RecipeStore {
        &self.state.store
    }

    /// Stop accepting connections and wait for in-flight requests to finish
    pub async fn close(self) -> Result<()> {
        // The receiver is gone only if the server task already exited.
        let _ = self.shutdown.send(());
        self.handle
            .await
            .context("server task panicked")?
            .context("server exited with error")?;
        tracing::info!("Recipe server on {} stopped", self.addr);
        Ok(())
    }
}

/// Waits for CTRL+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received CTRL+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

use std::sync::Arc;

use anyhow::Result;
use folio_contact::{Deliver, DraftEmail, EmailJs, Gemini};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    routes::AppState,
    views::{SWEEP_EVERY, ViewStore},
};

/// Builds the collaborators from `config`. Email credentials are checked on
/// each submission, so a misconfigured site still starts.
pub fn app_state(config: crate::config::Config) -> Result<AppState> {
    if let Err(err) = config.emailjs.check() {
        tracing::warn!("{err}; contact submissions will fail until it is fixed");
    }

    let deliverer: Arc<dyn Deliver> = Arc::new(EmailJs::new(config.emailjs.clone())?);

    let assistant: Option<Arc<dyn DraftEmail>> = match Gemini::from_config(&config.gemini)? {
        Some(gemini) => {
            tracing::info!(model = gemini.model(), "Email drafting enabled");
            Some(Arc::new(gemini))
        }
        None => {
            tracing::info!("No Gemini API key configured, email drafting disabled");
            None
        }
    };

    Ok(AppState {
        config,
        deliverer,
        assistant,
        views: ViewStore::default(),
    })
}

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting folio server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let state = app_state(config)?;
    let sweeper = state.views.spawn_sweeper(SWEEP_EVERY);

    let app = crate::routes::router(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    let shutdown_signal = async {
        let ctrl_c = async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for Ctrl+C: {err}");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(err) => {
                    tracing::error!("failed to install SIGTERM handler: {err}");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal");
            },
            _ = terminate => {
                tracing::info!("Received SIGTERM signal");
            },
        }

        tracing::info!("Starting graceful shutdown...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    sweeper.abort();
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

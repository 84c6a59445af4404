use anyhow::Result;
use axum::{ServiceExt, body::Body};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutorial_forms::application::{
    ports::{time::Clock, urls::UrlResolver},
    services::{ApplicationServices, ServicePorts},
};
use tutorial_forms::config::AppConfig;
use tutorial_forms::infrastructure::{
    repositories::{Fixtures, InMemoryStore},
    time::SystemClock,
    urls::SiteUrlResolver,
};
use tutorial_forms::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let fixtures = match config.fixtures_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading fixtures");
            Fixtures::from_path(path).await?
        }
        None => {
            tracing::warn!("FIXTURES_PATH not set, starting with an empty store");
            Fixtures::default()
        }
    };
    let store = Arc::new(InMemoryStore::from_fixtures(fixtures)?);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let urls: Arc<dyn UrlResolver> = Arc::new(SiteUrlResolver);

    let services = Arc::new(ApplicationServices::new(
        ServicePorts {
            contents: store.clone(),
            reactions: store.clone(),
            validations: store.clone(),
            members: store.clone(),
            catalog: store,
            clock,
            urls,
        },
        config.forms().clone(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(
        state,
        config.allowed_origins(),
        config.request_body_limit(),
    );
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

//! Nestey assistant HTTP server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::{
    AssistantService,
    ports::{BalancePort, BenefitsPort, TimeOffPort},
};
use domain::EmployeeId;
use infrastructure::{AppConfig, BenefitsAdapter, TimeOffAdapter};
use presentation_http::{BroadcastNotifier, routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::broadcast};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration; tracing isn't up yet, so hold any error until it is
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nestey_server=debug,presentation_http=debug,tower_http=debug".into());
    if config.server.log_format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    if let Some(e) = config_err {
        tracing::warn!("Failed to load config, using defaults: {e}");
    }

    info!("Nestey assistant v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        hr_api = %config.hr_api.base_url,
        "Configuration loaded"
    );

    // Initialize gateway adapters
    let timeoff_adapter = Arc::new(
        TimeOffAdapter::new(config.hr_api.timeoff_config())
            .map_err(|e| anyhow::anyhow!("Failed to initialize time-off gateway: {e}"))?,
    );
    let benefits_adapter = Arc::new(
        BenefitsAdapter::new(config.hr_api.benefits_config())
            .map_err(|e| anyhow::anyhow!("Failed to initialize benefits gateway: {e}"))?,
    );

    let timeoff: Arc<dyn TimeOffPort> = Arc::clone(&timeoff_adapter) as Arc<dyn TimeOffPort>;
    let balance: Arc<dyn BalancePort> = Arc::clone(&timeoff_adapter) as Arc<dyn BalancePort>;
    let benefits: Arc<dyn BenefitsPort> = Arc::clone(&benefits_adapter) as Arc<dyn BenefitsPort>;

    // Notification channel feeding the SSE stream
    let (events, _) = broadcast::channel(16);

    let employee_id = EmployeeId::new(config.assistant.employee_id)
        .map_err(|e| anyhow::anyhow!("Invalid assistant.employee_id: {e}"))?;

    let assistant = AssistantService::new(
        Arc::clone(&timeoff),
        balance,
        Arc::clone(&benefits),
        employee_id,
    )
    .with_notifier(Arc::new(BroadcastNotifier::new(events.clone())));

    let state = AppState {
        assistant: Arc::new(assistant),
        timeoff,
        benefits,
        events,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS: allow all origins in development, restrict otherwise
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::HeaderValue;
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    let app = app.layer(cors_layer).layer(TraceLayer::new_for_http());

    // Start the server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when a shutdown signal arrives
async fn shutdown_signal() {
    let ctrl_c = async {
        #[allow(clippy::expect_used)]
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        #[allow(clippy::expect_used)]
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

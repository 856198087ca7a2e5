use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    assistant::AssistantService,
    catalog::load_catalog,
    config::{Config, ServerConfig},
    content::SiteContent,
    estimator::CostEstimator,
    handlers::{self, AppState},
    logging::SensitiveApiKey,
    metrics,
    providers::build_provider,
    signals::shutdown_signal,
};

/// Request bodies are small JSON documents
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Load the catalog and content, build the provider and assemble shared state
pub fn build_app_state(config: &Config) -> Result<AppState> {
    let catalog = load_catalog(config.catalog.path.as_deref())?;
    let factors = config.estimator.range_factors();
    factors.validate()?;

    let content = SiteContent::builtin()?;

    if let Some(key) = config.ai.api_key() {
        info!("Gemini API key: {}", SensitiveApiKey::new(key));
    }
    let assistant = AssistantService::new(
        build_provider(&config.ai),
        config.ai.system_instruction.clone(),
    );

    Ok(AppState::new(
        CostEstimator::new(Arc::new(catalog), factors),
        config.estimator.clone(),
        content,
        assistant,
    ))
}

/// Start the KaSha site backend
///
/// This function:
/// 1. Initializes metrics
/// 2. Builds the shared application state
/// 3. Binds to the configured address
/// 4. Serves requests until SIGINT/SIGTERM
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let state = build_app_state(&config)?;
    let catalog = state.estimator.catalog().clone();
    let ai_enabled = state.assistant.is_enabled();

    let app = create_router(state, metrics_handle, &config)?;

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting KaSha site backend on {}", addr);
    info!(
        "Configuration: {} event types, {} add-on groups, AI {}",
        catalog.event_types.len(),
        catalog.addon_groups.len(),
        if ai_enabled { "enabled" } else { "disabled" }
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

fn cors_layer(server: &ServerConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if server.cors_allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = server
        .cors_allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
    config: &Config,
) -> Result<Router> {
    let api_routes = Router::new()
        .route("/ready", get(handlers::health::readiness_check))
        // Estimator
        .route("/api/catalog", get(handlers::catalog::get_catalog))
        .route(
            "/api/catalog/event-types/:id",
            get(handlers::catalog::get_event_type),
        )
        .route("/api/estimate", post(handlers::estimate::post_estimate))
        .route(
            "/api/estimate/summary",
            post(handlers::estimate::post_estimate_summary),
        )
        // Site content
        .route("/api/content/brand", get(handlers::content::get_brand))
        .route("/api/content/services", get(handlers::content::list_services))
        .route(
            "/api/content/services/:slug",
            get(handlers::content::get_service),
        )
        .route(
            "/api/content/portfolio",
            get(handlers::content::list_portfolio),
        )
        .route(
            "/api/content/testimonials",
            get(handlers::content::list_testimonials),
        )
        .route("/api/content/team", get(handlers::content::list_team))
        .route("/api/content/careers", get(handlers::content::list_careers))
        .route("/api/content/blog", get(handlers::content::list_posts))
        .route("/api/content/blog/:slug", get(handlers::content::get_post))
        // AI assistant
        .route("/api/ai/ideas", post(handlers::assistant::post_ideas))
        .route("/api/ai/chat", post(handlers::assistant::post_chat))
        .route(
            "/api/ai/chat/greeting",
            get(handlers::assistant::get_greeting),
        )
        .route("/api/ai/image", post(handlers::assistant::post_image))
        .route(
            "/api/ai/image/examples",
            get(handlers::assistant::get_image_examples),
        )
        .with_state(state);

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    match metrics_handle {
        Some(handle) => {
            let metrics_routes = Router::new()
                .route(
                    &config.metrics.endpoint,
                    get(handlers::metrics_handler::metrics),
                )
                .with_state(handle);
            app = app.merge(metrics_routes);
        }
        None if config.metrics.enabled => {
            warn!("Metrics enabled but no recorder installed, skipping metrics endpoint");
        }
        None => {}
    }

    Ok(app
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(&config.server)?)
        .layer(TraceLayer::new_for_http()))
}

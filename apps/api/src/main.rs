use bluealert::{
    application::{
        classify_region::use_case::ClassifyRegionUseCase, map_view::use_case::MapViewUseCase,
    },
    config::Config,
    domain::{
        map::projection::Mercator,
        region::repository::GeographyRepository,
        risk::classifier::RiskProvider,
    },
    infrastructure::{
        presets::{load_card_deck, load_risk_table},
        repositories::geojson_region_repository::GeoJsonRegionRepository,
    },
    presentation::http::{routes::create_router, state::AppState},
    workers::page_views::PageViews,
};
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise uses sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,bluealert=debug,tower_http=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    let repository = Arc::new(GeoJsonRegionRepository::new(config.geojson_path.clone()));
    // Warm the cache; a failed load is logged by the repository
    if let Ok(regions) = repository.find_all().await {
        tracing::info!(regions = regions.len(), "geography ready");
    }

    let risk_table: Arc<dyn RiskProvider> =
        Arc::new(load_risk_table(config.risk_table_path.as_deref()).await?);
    let cards = Arc::new(load_card_deck(config.cards_path.as_deref()).await?);

    let state = AppState {
        config: config.clone(),
        map_view: Arc::new(MapViewUseCase::new(repository, risk_table.clone())),
        classifier: Arc::new(ClassifyRegionUseCase::new(risk_table)),
        cards,
        projection: Mercator::default(),
        page_views: Arc::new(PageViews::new(config.loading_delay())),
    };

    // Read-only surface: only GET is ever served
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("BLUEALERT DASHBOARD ONLINE AT {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}

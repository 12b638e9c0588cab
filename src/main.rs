use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trending_widget::{AppState, Config, SourceClient, WidgetService, handlers};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "trending-widget"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trending_widget=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    info!(
        "Starting trending widget server on {}:{}",
        config.host, config.port
    );

    // Build the outbound client once; all requests share it
    let source = SourceClient::new(config.source_url.clone(), config.fetch_timeout_secs)
        .expect("Failed to build HTTP client");
    info!(url = source.url(), "Source client initialized");

    let app_state = web::Data::new(AppState {
        config: config.clone(),
        widget: WidgetService::new(source),
    });

    let server_addr = format!("{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .route("/health", web::get().to(health_check))
            .configure(handlers::configure_widget_routes)
            // Any other path or method serves the widget too.
            .default_service(web::route().to(handlers::widget::get_widget))
    })
    .bind(&server_addr)?
    .run()
    .await
}

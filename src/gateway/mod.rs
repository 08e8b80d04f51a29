pub mod health;
pub mod helpers;
pub mod openapi;
pub mod response;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{Next, from_fn},
    response::Response,
    routing::{get, post, put},
};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::account::handlers as account;
use crate::config::AppConfig;
use crate::db::Database;
use crate::task::handlers as task;
use crate::transfer::handlers as transfer;
use state::AppState;

/// Axum middleware logging one line per handled request.
async fn request_log_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}

/// Build the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    // ==========================================================================
    // Transfer routes
    // ==========================================================================
    let transfer_routes = Router::new()
        .route("/transfers", post(transfer::create_transfer))
        .route("/transfers", get(transfer::find_all_transfers));

    // ==========================================================================
    // Account routes
    // ==========================================================================
    let account_routes = Router::new()
        .route("/accounts", post(account::create_account))
        .route("/accounts", get(account::find_all_accounts))
        .route(
            "/accounts/{account_id}/balance",
            get(account::find_account_balance),
        );

    // ==========================================================================
    // Task routes
    // ==========================================================================
    let task_routes = Router::new()
        .route("/tasks", post(task::create_task))
        .route("/tasks", get(task::find_all_tasks))
        .route("/tasks/{task_id}", put(task::update_task));

    let api_routes = Router::new()
        .merge(transfer_routes)
        .merge(account_routes)
        .merge(task_routes);

    // Build complete router
    Router::new()
        // Health check
        .route("/api/v1/health", get(health::health_check))
        // API Routes
        .nest("/api/v1", api_routes)
        .layer(from_fn(request_log_middleware))
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP server
pub async fn serve(config: &AppConfig, db: Database) {
    let timeout = Duration::from_secs(config.context_timeout_secs);
    let state = Arc::new(AppState::new(db, timeout));

    let app = build_router(state);

    // Bind address
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                config.server.port, config.server.port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 API listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    println!("💸 Transfers: /api/v1/transfers");
    println!("👤 Accounts:  /api/v1/accounts");
    println!("📝 Tasks:     /api/v1/tasks");

    // Start server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}

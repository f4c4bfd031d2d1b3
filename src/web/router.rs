//! Router configuration for the notedrive API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, AppState};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let note_routes = Router::new()
        .route(
            "/",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/:id",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        );

    let api_routes = Router::new().nest("/note", note_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::handlers::note::list_notes,
        crate::web::handlers::note::get_note,
        crate::web::handlers::note::create_note,
        crate::web::handlers::note::update_note,
        crate::web::handlers::note::delete_note,
    ),
    components(schemas(
        crate::web::dto::NoteSummaryResponse,
        crate::web::dto::NoteResponse,
        crate::web::dto::CreateNoteRequest,
        crate::web::dto::UpdateNoteRequest,
    ))
)]
struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

//! HTTP API Layer
//!
//! REST boundary for the claims system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: thin request handlers delegating to the claim service
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimService;

use crate::handlers::{claims, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ClaimService,
}

/// Creates the main API router
pub fn create_router(service: ClaimService) -> Router {
    let state = AppState { service };

    let claims_routes = Router::new()
        .route("/", post(claims::create_claim).get(claims::list_claims))
        .route("/export/pdf", get(claims::export_claims_pdf))
        .route("/:id", get(claims::get_claim_detail))
        .route("/:id/status", post(claims::update_claim_status))
        .route("/:id/attachments", post(claims::upload_attachment));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/claims", claims_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

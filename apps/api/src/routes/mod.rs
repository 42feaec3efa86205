pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume document API
        .route("/api/v1/resumes", post(handlers::handle_create_resume))
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_get_resume)
                .put(handlers::handle_replace_resume)
                .delete(handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/users/:user_id/resumes",
            get(handlers::handle_list_resumes),
        )
        .with_state(state)
}

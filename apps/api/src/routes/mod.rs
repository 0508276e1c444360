pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::probability::handlers as probability;
use crate::questionnaire::handlers as questionnaire;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Questionnaire API
        .route("/api/v1/login", post(questionnaire::handle_login))
        .route(
            "/api/v1/questionnaire",
            post(questionnaire::handle_save_form).get(questionnaire::handle_read_all),
        )
        // Probability API
        .route(
            "/api/v1/probability",
            post(probability::handle_compute_probability),
        )
        .route(
            "/api/v1/probability/:email",
            get(probability::handle_get_probability),
        )
        .route(
            "/api/v1/probability/prompt/:email",
            get(probability::handle_preview_prompt),
        )
        .with_state(state)
}

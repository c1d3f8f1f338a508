use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/appointments", get(handlers::list_appointments))
        .route("/api/totals", get(handlers::get_totals))
        .route("/api/period", post(handlers::set_period))
        .route("/api/appointments/:id/edit", post(handlers::request_edit))
        .route("/api/appointments/:id/delete", post(handlers::stage_delete))
        .route("/api/delete/confirm", post(handlers::confirm_delete))
        .route("/api/delete/cancel", post(handlers::cancel_delete))
        .with_state(state)
}

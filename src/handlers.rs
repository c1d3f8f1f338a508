use crate::dashboard::{Dashboard, EditOutcome};
use crate::errors::AppError;
use crate::models::{
    AppData, Appointment, DeleteOutcomeResponse, EditResponse, SetPeriodRequest,
    StagedDeleteResponse, TotalsResponse,
};
use crate::period::{local_now, Period};
use crate::state::AppState;
use crate::storage::persist_data;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

pub async fn list_appointments(State(state): State<AppState>) -> Json<Vec<Appointment>> {
    let guard = state.inner.lock().await;
    Json(guard.dashboard.visible().to_vec())
}

pub async fn get_totals(State(state): State<AppState>) -> Json<TotalsResponse> {
    let guard = state.inner.lock().await;
    Json(totals_response(&guard.dashboard))
}

pub async fn set_period(
    State(state): State<AppState>,
    Json(payload): Json<SetPeriodRequest>,
) -> Json<TotalsResponse> {
    let period = Period::from_token(&payload.period);
    let mut guard = state.inner.lock().await;
    guard.dashboard.set_period(period, local_now());
    Json(totals_response(&guard.dashboard))
}

pub async fn request_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    let guard = state.inner.lock().await;
    match guard.dashboard.request_edit(&id) {
        EditOutcome::Navigate { route } => Ok(Json(EditResponse { navigate_to: route })),
        EditOutcome::NotFound(notification) => {
            info!("edit requested for unknown appointment {id}");
            Err(AppError::not_found(notification))
        }
    }
}

pub async fn stage_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<StagedDeleteResponse> {
    let mut guard = state.inner.lock().await;
    guard.dashboard.stage_delete(&id);
    Json(StagedDeleteResponse {
        staged: guard.dashboard.staged_delete().map(str::to_string),
    })
}

pub async fn cancel_delete(State(state): State<AppState>) -> Json<StagedDeleteResponse> {
    let mut guard = state.inner.lock().await;
    guard.dashboard.cancel_delete();
    Json(StagedDeleteResponse { staged: None })
}

/// Removes the staged record from the full store, persists, then
/// commits the view. The staged id survives a failed persist; success
/// is only reported after the write lands.
pub async fn confirm_delete(
    State(state): State<AppState>,
) -> Result<Json<DeleteOutcomeResponse>, AppError> {
    let mut guard = state.inner.lock().await;
    let inner = &mut *guard;

    let Some(updated) = inner.dashboard.confirmed_removal(&inner.records.appointments) else {
        return Ok(Json(DeleteOutcomeResponse {
            notification: None,
            totals: totals_response(&inner.dashboard),
        }));
    };

    let data = AppData { appointments: updated };
    persist_data(&state.data_path, &data).await?;
    inner.records = data;

    let notification = inner.dashboard.commit_delete(&inner.records.appointments, local_now());
    info!("appointment deleted, {} records remain", inner.records.appointments.len());

    Ok(Json(DeleteOutcomeResponse {
        notification: Some(notification),
        totals: totals_response(&inner.dashboard),
    }))
}

fn totals_response(dashboard: &Dashboard) -> TotalsResponse {
    let totals = dashboard.totals();
    TotalsResponse {
        count: totals.count,
        week_count: totals.week_count,
        period: dashboard.period().as_token().to_string(),
        period_label: dashboard.period().label().to_string(),
        period_amount: totals.period_amount,
    }
}

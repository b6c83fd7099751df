use axum::{
    extract::{RawQuery, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bustrack_core::BookingDraft;
use bustrack_order::TicketView;
use bustrack_shared::Notification;
use serde::Deserialize;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub reference: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/booking-confirmation", get(show_ticket))
        .route("/booking-confirmation/print", get(print_ticket))
        .route("/booking-confirmation/download", post(download_ticket))
}

fn ticket(state: &AppState, query: Option<String>) -> Result<TicketView, AppError> {
    let draft = BookingDraft::from_query(query.as_deref().unwrap_or_default())?;
    Ok(state.fulfillment.ticket(&draft))
}

/// GET /booking-confirmation?reference&...
async fn show_ticket(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<TicketView>, AppError> {
    Ok(Json(ticket(&state, query)?))
}

/// GET /booking-confirmation/print?reference&...
async fn print_ticket(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let text = ticket(&state, query)?.render_text();
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

/// POST /booking-confirmation/download
async fn download_ticket(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DownloadRequest>,
) -> Json<Notification> {
    Json(state.fulfillment.download(&req.reference).await)
}

use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use bustrack_core::{BookingDraft, Navigation, Page};
use bustrack_order::{BookingForm, BookingSummary};
use serde::Deserialize;
use tracing::info;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingRequest {
    #[serde(default)]
    pub draft: BookingDraft,
    #[serde(flatten)]
    pub form: BookingForm,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/booking", get(booking_summary).post(submit_booking))
}

/// GET /booking?busId&from&to&date&seats&price
async fn booking_summary(RawQuery(query): RawQuery) -> Result<Json<BookingSummary>, AppError> {
    let draft = BookingDraft::from_query(query.as_deref().unwrap_or_default())?;
    Ok(Json(BookingSummary::from_draft(&draft)))
}

/// POST /booking
async fn submit_booking(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SubmitBookingRequest>,
) -> Result<Json<Navigation>, AppError> {
    let record = state.bookings.submit(&req.draft, &req.form).await?;
    let navigation = record.confirmation_draft().navigate(Page::BookingConfirmation)?;
    info!("Booking {} handed off to confirmation", record.reference);
    Ok(Json(navigation))
}

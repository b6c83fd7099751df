use axum::{
    extract::{RawQuery, State},
    routing::{get, post},
    Json, Router,
};
use bustrack_catalog::{BusProfile, Seat};
use bustrack_core::format::{format_clock, format_date};
use bustrack_core::{BookingDraft, Navigation, Page, RouteQuery};
use bustrack_order::{SeatSelection, SelectionSummary};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::error::AppError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct SeedParam {
    seed: Option<u64>,
}

/// A seat page as the client holds it: the map is identified by bus and seed,
/// the selection by seat ids in click order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    #[serde(default)]
    pub bus_id: String,
    #[serde(flatten)]
    pub route: RouteQuery,
    pub seed: u64,
    #[serde(default)]
    pub selected: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    #[serde(flatten)]
    pub page: SelectionRequest,
    pub seat_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BusCard {
    #[serde(flatten)]
    profile: BusProfile,
    class_label: String,
    departure_label: String,
    arrival_label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeatSelectionView {
    heading: &'static str,
    journey: String,
    date_label: String,
    bus: BusCard,
    seed: u64,
    /// Four seats to a row, front to back.
    rows: Vec<Vec<Seat>>,
    available_count: usize,
    summary: SelectionSummary,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/seat-selection", get(seat_selection))
        .route("/seat-selection/toggle", post(toggle_seat))
        .route("/seat-selection/proceed", post(proceed_to_payment))
}

/// GET /seat-selection?busId&from&to&date[&seed]
async fn seat_selection(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    ApiQuery(param): ApiQuery<SeedParam>,
) -> Result<Json<SeatSelectionView>, AppError> {
    let draft = BookingDraft::from_query(query.as_deref().unwrap_or_default())?;
    let seed = param.seed.unwrap_or_else(|| state.inventory.next_seed());

    let map = state.inventory.seat_map(&draft.bus_id, seed).await?;
    let available_count = map.available_count();
    let rows = map.rows().map(<[Seat]>::to_vec).collect();
    let bus = BusCard {
        class_label: format!("{} Bus", map.bus.class.label()),
        departure_label: format_clock(map.bus.departure),
        arrival_label: format_clock(map.bus.arrival),
        profile: map.bus.clone(),
    };
    let page = SeatSelection::ready(map);

    Ok(Json(SeatSelectionView {
        heading: "Select Your Seats",
        journey: draft.route().heading(),
        date_label: format_date(&draft.date),
        bus,
        seed,
        rows,
        available_count,
        summary: page.summary(),
    }))
}

async fn restore(state: &AppState, req: &SelectionRequest) -> Result<SeatSelection, AppError> {
    let map = state.inventory.reload_seat_map(&req.bus_id, req.seed).await?;
    Ok(SeatSelection::restore(map, &req.selected))
}

/// POST /seat-selection/toggle
async fn toggle_seat(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ToggleRequest>,
) -> Result<Json<SelectionSummary>, AppError> {
    let mut page = restore(&state, &req.page).await?;
    page.toggle(&req.seat_id);
    Ok(Json(page.summary()))
}

/// POST /seat-selection/proceed
async fn proceed_to_payment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SelectionRequest>,
) -> Result<Json<Navigation>, AppError> {
    let page = restore(&state, &req).await?;
    let draft = page.proceed(&req.route)?;
    info!(
        "Proceeding to payment: {} seat(s) on {} for ${}",
        draft.seats.len(),
        draft.bus_id,
        draft.total_price()
    );
    Ok(Json(draft.navigate(Page::Booking)?))
}

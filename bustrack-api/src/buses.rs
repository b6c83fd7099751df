use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use bustrack_catalog::{render_stars, BusOffering, Star};
use bustrack_core::format::{format_clock, format_location, format_price};
use bustrack_core::{BookingDraft, Navigation, Page};
use serde::Serialize;
use tracing::info;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultsView {
    heading: String,
    date_label: String,
    subtitle: String,
    bus_count: usize,
    buses: Vec<OfferingCard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferingCard {
    #[serde(flatten)]
    offering: BusOffering,
    class_label: &'static str,
    stars: [Star; 5],
    rating_label: String,
    departure_label: String,
    arrival_label: String,
    origin_label: String,
    destination_label: String,
    price_label: String,
    seats_label: String,
    view_seats: Navigation,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/available-buses", get(list_buses))
}

/// GET /available-buses?from&to&date
async fn list_buses(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ResultsView>, AppError> {
    let draft = BookingDraft::from_query(query.as_deref().unwrap_or_default())?;
    let route = draft.route();

    let offerings = state.inventory.search(&route).await?;
    info!("{} offerings for {} -> {}", offerings.len(), route.origin, route.destination);

    let buses = offerings
        .into_iter()
        .map(|offering| -> Result<OfferingCard, AppError> {
            let view_seats = BookingDraft::for_route(&route)
                .with_bus(offering.id.clone())
                .navigate(Page::SeatSelection)?;
            Ok(OfferingCard {
                class_label: offering.class.label(),
                stars: render_stars(offering.rating),
                rating_label: format!("{}/5", offering.rating),
                departure_label: format_clock(offering.departure),
                arrival_label: format_clock(offering.arrival),
                origin_label: format_location(&route.origin),
                destination_label: format_location(&route.destination),
                price_label: format_price(offering.price_per_seat),
                seats_label: format!("{} seats available", offering.available_seat_count),
                view_seats,
                offering,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let date_label = route.date_label();
    Ok(Json(ResultsView {
        heading: route.heading(),
        subtitle: format!("{} • {} buses found", date_label, buses.len()),
        date_label,
        bus_count: buses.len(),
        buses,
    }))
}

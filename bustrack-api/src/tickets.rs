use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use bustrack_order::{TicketCard, TicketFilter};
use serde::{Deserialize, Serialize};
use crate::error::AppError;
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct TicketParams {
    #[serde(default)]
    status: TicketFilter,
}

#[derive(Debug, Serialize)]
struct Tab {
    filter: TicketFilter,
    count: usize,
    active: bool,
}

#[derive(Debug, Serialize)]
struct MyTicketsView {
    tabs: Vec<Tab>,
    tickets: Vec<TicketCard>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/my-tickets", get(my_tickets))
}

/// GET /my-tickets?status=all|upcoming|completed|cancelled
async fn my_tickets(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TicketParams>,
) -> Result<Json<MyTicketsView>, AppError> {
    let all = state.tickets.list_tickets().await?;

    let tabs = TicketFilter::TABS
        .iter()
        .map(|filter| Tab {
            filter: *filter,
            count: filter.apply(&all).len(),
            active: *filter == params.status,
        })
        .collect();

    let tickets = params
        .status
        .apply(&all)
        .into_iter()
        .map(|ticket| -> Result<TicketCard, AppError> { Ok(TicketCard::new(ticket)?) })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(MyTicketsView { tabs, tickets }))
}

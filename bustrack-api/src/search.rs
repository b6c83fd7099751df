use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use bustrack_catalog::PopularRoute;
use bustrack_core::format::format_price;
use bustrack_core::{BookingDraft, City, HeaderView, Navigation, Page, SearchForm, Session, CITIES};
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use crate::error::AppError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HomeView {
    cities: &'static [City],
    min_date: String,
    popular_routes: Vec<PopularRouteCard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PopularRouteCard {
    #[serde(flatten)]
    route: PopularRoute,
    price_label: String,
    book_now: Navigation,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/search", post(search_buses))
        .route("/header", get(header))
}

/// GET /
async fn home(State(state): State<AppState>) -> Result<Json<HomeView>, AppError> {
    let today = Utc::now().date_naive();

    let popular_routes = state
        .inventory
        .popular_routes()
        .into_iter()
        .map(|route| -> Result<PopularRouteCard, AppError> {
            Ok(PopularRouteCard {
                price_label: format_price(route.price),
                book_now: route.book_now(today)?,
                route,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Json(HomeView {
        cities: &CITIES,
        min_date: today.format("%Y-%m-%d").to_string(),
        popular_routes,
    }))
}

/// POST /search
async fn search_buses(ApiJson(form): ApiJson<SearchForm>) -> Result<Json<Navigation>, AppError> {
    let route = form.validate(Utc::now().date_naive())?;
    info!("Searching buses {} -> {} on {}", route.origin, route.destination, route.date);
    Ok(Json(BookingDraft::for_route(&route).navigate(Page::AvailableBuses)?))
}

/// GET /header?loggedIn=
async fn header(ApiQuery(session): ApiQuery<Session>) -> Json<HeaderView> {
    Json(HeaderView::for_session(&session))
}

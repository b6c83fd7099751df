use axum::{
    http::{Method, Uri},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod bookings;
pub mod buses;
pub mod confirmation;
pub mod error;
pub mod extract;
pub mod search;
pub mod seats;
pub mod state;
pub mod tickets;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(search::routes())
        .merge(buses::routes())
        .merge(seats::routes())
        .merge(bookings::routes())
        .merge(confirmation::routes())
        .merge(tickets::routes())
        .merge(auth::routes())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFoundError(format!("Page not found: {}", uri.path()))
}

pub mod draft;
pub mod format;
pub mod page;
pub mod search;
pub mod session;

pub use draft::BookingDraft;
pub use page::{Navigation, Page};
pub use search::{City, RouteQuery, SearchForm, CITIES};
pub use session::{HeaderView, NavLink, Session};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
    #[error("Invalid clock time: {0}")]
    InvalidClock(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

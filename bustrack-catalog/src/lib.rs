pub mod inventory;
pub mod offering;
pub mod popular;
pub mod seat;

pub use inventory::{InventoryError, InventoryProvider, MockInventory};
pub use offering::{render_stars, BusClass, BusOffering, Star};
pub use popular::PopularRoute;
pub use seat::{BusProfile, Seat, SeatMap, MAX_SEED};

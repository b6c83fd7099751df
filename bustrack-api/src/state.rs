use std::sync::Arc;
use bustrack_catalog::{InventoryProvider, MockInventory};
use bustrack_order::{AccountService, BookingService, FulfillmentService};
use bustrack_store::{Config, MockTicketRepository, TicketRepository};

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<dyn InventoryProvider>,
    pub tickets: Arc<dyn TicketRepository>,
    pub bookings: Arc<BookingService>,
    pub fulfillment: Arc<FulfillmentService>,
    pub accounts: Arc<AccountService>,
}

impl AppState {
    /// Wires the mock providers with the configured latencies.
    pub fn from_config(config: &Config) -> Self {
        let latency = &config.latency;

        let mut inventory = MockInventory::new(config.inventory.booked_probability)
            .with_latency(latency.search(), latency.seat_map());
        if let Some(seed) = config.inventory.seed {
            inventory = inventory.with_fixed_seed(seed);
        }

        Self {
            inventory: Arc::new(inventory),
            tickets: Arc::new(MockTicketRepository::new(latency.tickets())),
            bookings: Arc::new(BookingService::new(latency.booking())),
            fulfillment: Arc::new(FulfillmentService::new(latency.download())),
            accounts: Arc::new(AccountService::new(latency.register())),
        }
    }
}

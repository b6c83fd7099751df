use std::time::Duration;
use async_trait::async_trait;
use bustrack_core::RouteQuery;
use chrono::NaiveTime;
use rand::Rng;
use crate::offering::{BusClass, BusOffering};
use crate::popular::PopularRoute;
use crate::seat::{self, BusProfile, SeatMap, DEFAULT_BOOKED_PROBABILITY, MAX_SEED};

/// Source of bus offerings and seat availability.
///
/// The storefront only talks to this trait; the mock below is the sole
/// implementation until a real backend exists.
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    /// Offerings for a route and date.
    async fn search(&self, route: &RouteQuery) -> Result<Vec<BusOffering>, InventoryError>;

    /// Seat grid for a bus. The seed pins the booked/available pattern so a
    /// map sent to the client can be rebuilt when the selection comes back.
    async fn seat_map(&self, bus_id: &str, seed: u64) -> Result<SeatMap, InventoryError>;

    /// Rebuilds a map the client already holds, to apply a toggle or a
    /// proceed against it.
    async fn reload_seat_map(&self, bus_id: &str, seed: u64) -> Result<SeatMap, InventoryError> {
        self.seat_map(bus_id, seed).await
    }

    /// Seed for a freshly opened seat page, always below [`crate::MAX_SEED`].
    fn next_seed(&self) -> u64;

    fn popular_routes(&self) -> Vec<PopularRoute>;
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Inventory unavailable: {0}")]
    Unavailable(String),
}

/// Hard-coded catalog with random seat availability and fixed artificial
/// latency standing in for network calls. Returns the same four buses for
/// every route.
pub struct MockInventory {
    booked_probability: f64,
    search_delay: Duration,
    seat_map_delay: Duration,
    fixed_seed: Option<u64>,
}

impl MockInventory {
    pub fn new(booked_probability: f64) -> Self {
        Self {
            booked_probability: seat::booked_probability(booked_probability),
            search_delay: Duration::ZERO,
            seat_map_delay: Duration::ZERO,
            fixed_seed: None,
        }
    }

    pub fn with_latency(mut self, search_delay: Duration, seat_map_delay: Duration) -> Self {
        self.search_delay = search_delay;
        self.seat_map_delay = seat_map_delay;
        self
    }

    /// Every seat page gets the same seed, so every seat map is identical.
    pub fn with_fixed_seed(mut self, seed: u64) -> Self {
        self.fixed_seed = Some(seed % MAX_SEED);
        self
    }
}

impl Default for MockInventory {
    fn default() -> Self {
        Self::new(DEFAULT_BOOKED_PROBABILITY)
    }
}

#[async_trait]
impl InventoryProvider for MockInventory {
    async fn search(&self, route: &RouteQuery) -> Result<Vec<BusOffering>, InventoryError> {
        tokio::time::sleep(self.search_delay).await;
        tracing::debug!("Listing mock offerings for {} -> {} on {:?}", route.origin, route.destination, route.date);
        Ok(offerings())
    }

    async fn seat_map(&self, bus_id: &str, seed: u64) -> Result<SeatMap, InventoryError> {
        tokio::time::sleep(self.seat_map_delay).await;
        let map = SeatMap::generate(bus_profile(bus_id), seed, self.booked_probability);
        tracing::debug!(
            "Generated seat map for {} (seed {}): {}/{} available",
            bus_id,
            seed,
            map.available_count(),
            map.seats.len()
        );
        Ok(map)
    }

    async fn reload_seat_map(&self, bus_id: &str, seed: u64) -> Result<SeatMap, InventoryError> {
        Ok(SeatMap::generate(bus_profile(bus_id), seed, self.booked_probability))
    }

    fn next_seed(&self) -> u64 {
        self.fixed_seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..MAX_SEED))
    }

    fn popular_routes(&self) -> Vec<PopularRoute> {
        PopularRoute::featured()
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn amenities(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| a.to_string()).collect()
}

fn offerings() -> Vec<BusOffering> {
    vec![
        BusOffering {
            id: "bus1".to_string(),
            name: "Express Liner".to_string(),
            class: BusClass::Luxury,
            departure: clock(7, 0),
            arrival: clock(11, 30),
            duration_text: "4h 30m".to_string(),
            price_per_seat: 35,
            available_seat_count: 23,
            amenities: amenities(&["WiFi", "AC", "Snacks", "Charging Port"]),
            rating: 4.5,
        },
        BusOffering {
            id: "bus2".to_string(),
            name: "City Connector".to_string(),
            class: BusClass::Standard,
            departure: clock(9, 15),
            arrival: clock(14, 30),
            duration_text: "5h 15m".to_string(),
            price_per_seat: 28,
            available_seat_count: 18,
            amenities: amenities(&["WiFi", "AC"]),
            rating: 4.1,
        },
        BusOffering {
            id: "bus3".to_string(),
            name: "Royal Travels".to_string(),
            class: BusClass::Premium,
            departure: clock(11, 30),
            arrival: clock(15, 45),
            duration_text: "4h 15m".to_string(),
            price_per_seat: 42,
            available_seat_count: 12,
            amenities: amenities(&["WiFi", "AC", "Food", "Charging Port", "Entertainment"]),
            rating: 4.8,
        },
        BusOffering {
            id: "bus4".to_string(),
            name: "Budget Express".to_string(),
            class: BusClass::Economy,
            departure: clock(13, 0),
            arrival: clock(18, 0),
            duration_text: "5h 00m".to_string(),
            price_per_seat: 22,
            available_seat_count: 30,
            amenities: amenities(&["AC"]),
            rating: 3.9,
        },
    ]
}

/// Seat-page profile for a bus id. Unknown ids get the Express Liner profile
/// under the requested id.
pub fn bus_profile(bus_id: &str) -> BusProfile {
    let (name, class, departure, arrival, total_seats, seat_price) = match bus_id {
        "bus2" => ("City Connector", BusClass::Standard, clock(9, 15), clock(14, 30), 40, 28),
        "bus3" => ("Royal Travels", BusClass::Premium, clock(11, 30), clock(15, 45), 36, 42),
        "bus4" => ("Budget Express", BusClass::Economy, clock(13, 0), clock(18, 0), 40, 22),
        _ => ("Express Liner", BusClass::Luxury, clock(7, 0), clock(11, 30), 40, 35),
    };

    BusProfile {
        id: bus_id.to_string(),
        name: name.to_string(),
        class,
        departure,
        arrival,
        total_seats,
        seat_price,
    }
}

use chrono::NaiveTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use crate::offering::BusClass;

const SEATS_PER_ROW: usize = 4;
const COLUMNS: [char; SEATS_PER_ROW] = ['A', 'B', 'C', 'D'];

/// Seeds stay below 2^53 so they survive a trip through a JSON number
/// (an IEEE double) on the client unchanged.
pub const MAX_SEED: u64 = 1 << 53;

pub const DEFAULT_BOOKED_PROBABILITY: f64 = 0.3;

/// Clamps into `[0, 1]`. NaN falls back to the default.
pub fn booked_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        return DEFAULT_BOOKED_PROBABILITY;
    }
    probability.clamp(0.0, 1.0)
}

/// What the seat page needs to know about a bus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusProfile {
    pub id: String,
    pub name: String,
    pub class: BusClass,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub total_seats: usize,
    pub seat_price: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: String,
    pub number: String,
    pub is_booked: bool,
    pub price: u32,
}

/// Display number of the 1-based seat `index`: row `ceil(index / 4)`, columns
/// cycling A to D.
pub fn seat_number(index: usize) -> String {
    let row = index.div_ceil(SEATS_PER_ROW);
    let column = COLUMNS[(index + SEATS_PER_ROW - 1) % SEATS_PER_ROW];
    format!("{}{}", row, column)
}

/// A generated seat grid. The same profile, seed and probability always give
/// the same grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeatMap {
    pub bus: BusProfile,
    pub seats: Vec<Seat>,
    pub seed: u64,
}

impl SeatMap {
    pub fn generate(bus: BusProfile, seed: u64, booked_probability: f64) -> Self {
        let probability = self::booked_probability(booked_probability);
        let mut rng = StdRng::seed_from_u64(seed);

        let seats = (1..=bus.total_seats)
            .map(|i| Seat {
                id: format!("seat-{}", i),
                number: seat_number(i),
                is_booked: rng.gen_bool(probability),
                price: bus.seat_price,
            })
            .collect();

        Self { bus, seats, seed }
    }

    pub fn find(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == seat_id)
    }

    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_booked).count()
    }

    /// Seats laid out four to a row, front to back.
    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.seats.chunks(SEATS_PER_ROW)
    }
}

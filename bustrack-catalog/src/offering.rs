use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BusClass {
    Economy,
    Standard,
    Luxury,
    Premium,
}

impl BusClass {
    pub fn label(&self) -> &'static str {
        match self {
            BusClass::Economy => "Economy",
            BusClass::Standard => "Standard",
            BusClass::Luxury => "Luxury",
            BusClass::Premium => "Premium",
        }
    }
}

/// A scheduled trip shown in search results. Produced by the inventory
/// provider and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusOffering {
    pub id: String,
    pub name: String,
    pub class: BusClass,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub duration_text: String,
    pub price_per_seat: u32,
    pub available_seat_count: u32,
    pub amenities: Vec<String>,
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Five-slot rating widget with half-star precision.
pub fn render_stars(rating: f64) -> [Star; 5] {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
    let full = rating.floor() as usize;
    let half = full < 5 && rating - rating.floor() >= 0.5;

    let mut stars = [Star::Empty; 5];
    for star in stars.iter_mut().take(full) {
        *star = Star::Full;
    }
    if half {
        stars[full] = Star::Half;
    }
    stars
}

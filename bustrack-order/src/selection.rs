//! Seat selection: the `loading -> ready` page state and the selection set.

use bustrack_catalog::{Seat, SeatMap};
use bustrack_core::format::format_price;
use bustrack_core::{BookingDraft, RouteQuery};
use serde::Serialize;
use crate::{OrderError, OrderResult};

/// Seat ids in the order the user picked them. Never holds a booked seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    seat_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    Ignored,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a selection posted back by the client against the regenerated
    /// map. Unknown, booked and repeated ids are dropped.
    pub fn restore<'a>(map: &SeatMap, seat_ids: impl IntoIterator<Item = &'a String>) -> Self {
        let mut selection = Self::new();
        for id in seat_ids {
            if let Some(seat) = map.find(id) {
                if !selection.contains(&seat.id) {
                    selection.toggle(seat);
                }
            }
        }
        selection
    }

    pub fn toggle(&mut self, seat: &Seat) -> Toggle {
        if seat.is_booked {
            return Toggle::Ignored;
        }

        if let Some(pos) = self.seat_ids.iter().position(|id| *id == seat.id) {
            self.seat_ids.remove(pos);
            Toggle::Deselected
        } else {
            self.seat_ids.push(seat.id.clone());
            Toggle::Selected
        }
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seat_ids.iter().any(|id| id == seat_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.seat_ids
    }

    pub fn len(&self) -> usize {
        self.seat_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seat_ids.is_empty()
    }

    pub fn total_price(&self, seat_price: u32) -> u32 {
        self.seat_ids.len() as u32 * seat_price
    }

    /// Display numbers in selection order.
    pub fn seat_numbers(&self, map: &SeatMap) -> Vec<String> {
        self.seat_ids
            .iter()
            .filter_map(|id| map.find(id))
            .map(|seat| seat.number.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub selected: SelectionSet,
    pub seat_numbers: Vec<String>,
    pub total_price: u32,
    pub total_label: String,
    pub can_proceed: bool,
    pub proceed_label: String,
}

/// State of the seat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatSelection {
    Loading,
    Ready { map: SeatMap, selection: SelectionSet },
}

impl SeatSelection {
    pub fn ready(map: SeatMap) -> Self {
        SeatSelection::Ready { map, selection: SelectionSet::new() }
    }

    pub fn restore(map: SeatMap, seat_ids: &[String]) -> Self {
        let selection = SelectionSet::restore(&map, seat_ids);
        SeatSelection::Ready { map, selection }
    }

    /// Clicks before the map has loaded, and clicks on ids that are not on
    /// the map, change nothing.
    pub fn toggle(&mut self, seat_id: &str) -> Toggle {
        match self {
            SeatSelection::Loading => Toggle::Ignored,
            SeatSelection::Ready { map, selection } => match map.find(seat_id) {
                Some(seat) => {
                    let outcome = selection.toggle(seat);
                    tracing::debug!("Seat {} on {}: {:?}", seat.number, map.bus.id, outcome);
                    outcome
                }
                None => Toggle::Ignored,
            },
        }
    }

    pub fn total_price(&self) -> u32 {
        match self {
            SeatSelection::Loading => 0,
            SeatSelection::Ready { map, selection } => selection.total_price(map.bus.seat_price),
        }
    }

    pub fn can_proceed(&self) -> bool {
        matches!(self, SeatSelection::Ready { selection, .. } if !selection.is_empty())
    }

    pub fn proceed_label(&self) -> String {
        if self.can_proceed() {
            format!("Proceed to Payment ({})", format_price(self.total_price()))
        } else {
            OrderError::EmptySelection.to_string()
        }
    }

    pub fn summary(&self) -> SelectionSummary {
        let (selected, seat_numbers) = match self {
            SeatSelection::Loading => (SelectionSet::new(), Vec::new()),
            SeatSelection::Ready { map, selection } => (selection.clone(), selection.seat_numbers(map)),
        };

        SelectionSummary {
            selected,
            seat_numbers,
            total_price: self.total_price(),
            total_label: format_price(self.total_price()),
            can_proceed: self.can_proceed(),
            proceed_label: self.proceed_label(),
        }
    }

    /// Draft for the booking page: bus, route, seat numbers and total.
    pub fn proceed(&self, route: &RouteQuery) -> OrderResult<BookingDraft> {
        let SeatSelection::Ready { map, selection } = self else {
            return Err(OrderError::NotReady);
        };
        if selection.is_empty() {
            return Err(OrderError::EmptySelection);
        }

        Ok(BookingDraft::for_route(route)
            .with_bus(map.bus.id.clone())
            .with_selection(selection.seat_numbers(map), self.total_price()))
    }
}

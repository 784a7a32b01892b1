use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use voyage_core::{merge_fields, Activatable, Entity, Violations};

/// On-board amenities a flight can advertise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FlightAmenity {
    Wifi,
    Meals,
    Entertainment,
}

/// One end of a flight: local time label, city and airport code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightEndpoint {
    pub time: String,
    pub city: String,
    pub airport: String,
}

impl FlightEndpoint {
    pub fn new(time: &str, city: &str, airport: &str) -> Self {
        Self {
            time: time.to_string(),
            city: city.to_string(),
            airport: airport.to_string(),
        }
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    /// Display label such as `"3h 10m"`.
    pub duration: String,
    pub stops: u32,
    pub price: f64,
    pub amenities: BTreeSet<FlightAmenity>,
    // Records written before the flag existed stay visible.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightDraft {
    pub airline: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration: String,
    pub stops: u32,
    pub price: f64,
    pub amenities: BTreeSet<FlightAmenity>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightPatch {
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub departure: Option<FlightEndpoint>,
    pub arrival: Option<FlightEndpoint>,
    pub duration: Option<String>,
    pub stops: Option<u32>,
    pub price: Option<f64>,
    pub amenities: Option<BTreeSet<FlightAmenity>>,
    pub is_active: Option<bool>,
}

impl Flight {
    /// Parses the duration label (`"2h 15m"`, `"45m"`, `"7h"`) into minutes.
    pub fn duration_minutes(&self) -> Option<u32> {
        parse_duration_label(&self.duration)
    }

    pub fn is_direct(&self) -> bool {
        self.stops == 0
    }

    pub fn has_amenity(&self, amenity: FlightAmenity) -> bool {
        self.amenities.contains(&amenity)
    }

    /// Draft carrying every field except the id.
    pub fn to_draft(&self) -> FlightDraft {
        FlightDraft {
            airline: self.airline.clone(),
            flight_number: self.flight_number.clone(),
            departure: self.departure.clone(),
            arrival: self.arrival.clone(),
            duration: self.duration.clone(),
            stops: self.stops,
            price: self.price,
            amenities: self.amenities.clone(),
            is_active: self.is_active,
        }
    }
}

pub fn parse_duration_label(label: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut seen_unit = false;

    for part in label.split_whitespace() {
        let (digits, unit) = part.split_at(part.find(|c: char| !c.is_ascii_digit())?);
        let value: u32 = digits.parse().ok()?;
        match unit {
            "h" => total = total.checked_add(value.checked_mul(60)?)?,
            "m" => total = total.checked_add(value)?,
            _ => return None,
        }
        seen_unit = true;
    }

    seen_unit.then_some(total)
}

impl Entity for Flight {
    type Draft = FlightDraft;
    type Patch = FlightPatch;

    const COLLECTION: &'static str = "flights";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: FlightDraft) -> Self {
        Self {
            id,
            airline: draft.airline,
            flight_number: draft.flight_number,
            departure: draft.departure,
            arrival: draft.arrival,
            duration: draft.duration,
            stops: draft.stops,
            price: draft.price,
            amenities: draft.amenities,
            is_active: draft.is_active,
        }
    }

    fn apply_patch(&mut self, patch: FlightPatch) {
        merge_fields!(self, patch;
            airline, flight_number, departure, arrival, duration,
            stops, price, amenities, is_active,
        );
    }

    fn seed() -> Vec<Self> {
        crate::seed::flights()
    }

    fn violations(&self) -> Violations {
        Violations::new()
            .check(!self.airline.trim().is_empty(), "flight airline is required")
            .check(!self.flight_number.trim().is_empty(), "flight number is required")
            .check(
                self.price.is_finite() && self.price >= 0.0,
                format!("flight price must be a non-negative number, got {}", self.price),
            )
    }
}

impl Activatable for Flight {
    fn active_flag(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

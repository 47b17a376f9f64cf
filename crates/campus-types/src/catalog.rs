//! Read-only records served by the catalog endpoints
//!
//! Every field has a default so partially populated documents still decode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A campus event from `GET /api/events`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub event_type: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub capacity: u32,
    pub registered_count: u32,
    pub status: String,
    pub organizer: String,
    pub tags: Vec<String>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.registered_count >= self.capacity
    }
}

/// A bookable room or space from `GET /api/facilities`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub building: String,
    pub floor: i32,
    pub capacity: u32,
    pub features: Vec<String>,
    pub operational_hours: BTreeMap<String, String>,
    pub status: String,
}

impl Facility {
    pub fn is_available(&self) -> bool {
        self.status.eq_ignore_ascii_case("available")
    }
}

/// A reservation from `GET /api/bookings`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    pub id: String,
    pub user_name: String,
    pub user_email: String,
    pub resource_id: String,
    pub resource_type: String,
    pub resource_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
    pub status: String,
    pub requires_confirmation: bool,
    pub confirmed_at: Option<String>,
    pub created_at: String,
}

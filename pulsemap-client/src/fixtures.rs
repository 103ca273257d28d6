//! Embedded sample data: the Philadelphia venue set and the static config
//! around it (recents, alerts, nearby walking times). All state is volatile;
//! every session starts from these fixtures.

use anyhow::Context;

use crate::api::{MapBounds, Position, RawVenue, VenueId};
use crate::places::Alert;
use crate::search::{NearbyCategory, SearchEntry};

const VENUES_JSON: &str = include_str!("fixtures/venues.json");

pub fn sample_venues() -> anyhow::Result<Vec<RawVenue>> {
    serde_json::from_str(VENUES_JSON).context("parsing embedded venue fixtures")
}

pub fn map_bounds() -> MapBounds {
    MapBounds::default()
}

pub fn user_location() -> Position {
    Position {
        lat: 39.90332473656186,
        lng: -75.16647374581213,
    }
}

pub fn recent_places() -> Vec<SearchEntry> {
    [
        ("cbp", "Citizens Bank Park"),
        ("liveCasino", "Live! Casino"),
        ("bullsBbq", "Bull's BBQ"),
        ("shakeShack", "Shake Shack"),
        ("turfClub", "Third Base Gate"),
        ("stateside", "Stateside Live"),
    ]
    .into_iter()
    .map(|(id, title)| SearchEntry {
        venue_id: VenueId::new(id),
        title: title.to_owned(),
        city: String::from("Philadelphia"),
    })
    .collect()
}

pub fn nearby_categories() -> Vec<NearbyCategory> {
    [
        ("local_gas_station", "Gas Stations"),
        ("restaurant", "Restaurants"),
        ("fastfood", "Fast Food"),
        ("local_parking", "Parking"),
    ]
    .into_iter()
    .map(|(icon, label)| NearbyCategory {
        icon: icon.to_owned(),
        label: label.to_owned(),
    })
    .collect()
}

/// Walking minutes from the user's position to nearby venues.
pub fn nearby_destination_config() -> Vec<(VenueId, u32)> {
    [
        ("stateside", 2),
        ("passAndStow", 5),
        ("bullsBbq", 6),
        ("shakeShack", 7),
        ("turfClub", 8),
        ("sportsComplex", 11),
        ("liveCasino", 14),
    ]
    .into_iter()
    .map(|(id, minutes)| (VenueId::new(id), minutes))
    .collect()
}

pub fn popular_now_ids() -> Vec<VenueId> {
    ["lincoln", "mcgillins", "franklinHall", "artmuseum"]
        .into_iter()
        .map(VenueId::new)
        .collect()
}

pub fn default_saved_place_ids() -> Vec<VenueId> {
    ["cbp", "theatre", "smokey"].into_iter().map(VenueId::new).collect()
}

pub fn default_alerted_venue_ids() -> Vec<VenueId> {
    ["cbp", "smokey"].into_iter().map(VenueId::new).collect()
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            venue_id: VenueId::new("cbp"),
            location: String::from("Citizens Bank Park"),
            date: String::from("9/19"),
            time: String::from("9:41pm"),
            lines: vec![
                String::from("Laura replied to you:"),
                String::from("Yes! Everyone is dancing."),
            ],
        },
        Alert {
            id: 2,
            venue_id: VenueId::new("cbp"),
            location: String::from("Citizens Bank Park"),
            date: String::from("9/19"),
            time: String::from("9:00pm"),
            lines: vec![
                String::from("Active Event starting now!"),
                String::from("Concert with The Lumineers"),
            ],
        },
        Alert {
            id: 3,
            venue_id: VenueId::new("smokey"),
            location: String::from("Smokey Joe's"),
            date: String::from("9/18"),
            time: String::from("11:42pm"),
            lines: vec![
                String::from("Recent spike in activity:"),
                String::from("See what others are saying!"),
            ],
        },
    ]
}
